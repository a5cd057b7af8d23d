pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{donation_type_builder::*, tour_builder::*};

pub mod tour_builder {

    use super::*;
    use crate::tour::*;

    #[derive(Debug)]
    pub struct NewTourBuild {
        tour: NewTour,
    }

    impl NewTourBuild {
        pub fn title(mut self, title: &str) -> Self {
            self.tour.title = title.into();
            self
        }
        pub fn price(mut self, price: f64) -> Self {
            self.tour.price = price;
            self
        }
        pub fn location(mut self, location: &str) -> Self {
            self.tour.location = Some(location.into());
            self
        }
        pub fn highlights(mut self, highlights: Vec<impl Into<String>>) -> Self {
            self.tour.highlights = highlights.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn finish(self) -> NewTour {
            self.tour
        }
    }

    impl Builder for NewTour {
        type Build = NewTourBuild;
        fn build() -> NewTourBuild {
            NewTourBuild {
                tour: NewTour {
                    title: "A tour".into(),
                    description: None,
                    price: 100.0,
                    duration: None,
                    group_size: None,
                    location: None,
                    highlights: vec![],
                    image_url: None,
                    rating: 0.0,
                },
            }
        }
    }
}

pub mod donation_type_builder {

    use super::*;
    use crate::donation::*;

    #[derive(Debug)]
    pub struct NewDonationTypeBuild {
        donation_type: NewDonationType,
    }

    impl NewDonationTypeBuild {
        pub fn title(mut self, title: &str) -> Self {
            self.donation_type.title = title.into();
            self
        }
        pub fn amount(mut self, amount: f64) -> Self {
            self.donation_type.amount = amount;
            self
        }
        pub fn sort_order(mut self, sort_order: i32) -> Self {
            self.donation_type.sort_order = sort_order;
            self
        }
        pub fn inactive(mut self) -> Self {
            self.donation_type.is_active = false;
            self
        }
        pub fn finish(self) -> NewDonationType {
            self.donation_type
        }
    }

    impl Builder for NewDonationType {
        type Build = NewDonationTypeBuild;
        fn build() -> NewDonationTypeBuild {
            NewDonationTypeBuild {
                donation_type: NewDonationType {
                    title: "Explorer".into(),
                    amount: 25.0,
                    description: None,
                    icon_color: None,
                    benefits: vec![],
                    is_active: true,
                    sort_order: 0,
                },
            }
        }
    }
}
