pub use wildbeat_boundary::*;

use crate::core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn try_signup(
        from: Signup,
    ) -> Result<(usecases::NewUser, Option<String>), usecases::Error> {
        let Signup {
            email,
            password,
            name,
            admin_code,
        } = from;
        let new_user = usecases::NewUser {
            email: email.parse()?,
            password,
            name,
        };
        Ok((new_user, admin_code))
    }

    pub fn book_tour(from: NewBooking) -> usecases::BookTour {
        let NewBooking {
            tour_id,
            name,
            email,
            phone,
            date,
            guests,
            special_requests,
            total_price,
        } = from;
        usecases::BookTour {
            tour_id,
            name,
            email,
            phone,
            date,
            guests,
            special_requests,
            total_price,
        }
    }

    pub fn post_review(from: NewReview) -> usecases::PostReview {
        let NewReview {
            tour_id,
            name,
            email,
            rating,
            review_text,
        } = from;
        usecases::PostReview {
            tour_id,
            name,
            email,
            rating,
            review_text,
        }
    }

    pub fn new_gallery_image(from: NewGalleryImage) -> e::NewGalleryImage {
        let NewGalleryImage {
            title,
            image_url,
            category,
            alt_text,
        } = from;
        e::NewGalleryImage {
            title,
            image_url,
            category,
            alt_text,
        }
    }

    pub fn store_donation_type(from: StoreDonationType) -> usecases::StoreDonationType {
        let StoreDonationType {
            id,
            title,
            amount,
            description,
            icon_color,
            benefits,
            is_active,
            sort_order,
        } = from;
        usecases::StoreDonationType {
            id,
            title,
            amount,
            description,
            icon_color,
            benefits,
            is_active,
            sort_order,
        }
    }

    pub fn record_donation(from: NewDonation) -> usecases::RecordDonation {
        let NewDonation {
            donation_type_id,
            name,
            email,
            amount,
            payment_method,
            transaction_id,
            status,
            message,
        } = from;
        usecases::RecordDonation {
            donation_type_id,
            name,
            email,
            amount,
            payment_method,
            transaction_id,
            status,
            message,
        }
    }

    pub fn confirm_donation(from: ConfirmDonation) -> usecases::ConfirmDonation {
        let ConfirmDonation {
            payment_intent_id,
            donation_type_id,
            name,
            email,
            message,
            payment_method,
        } = from;
        usecases::ConfirmDonation {
            payment_intent_id,
            donation_type_id,
            name,
            email,
            message,
            payment_method,
        }
    }

    pub fn try_initiate_payment(
        from: InitiatePayment,
    ) -> Result<usecases::InitiatePayment, usecases::Error> {
        let InitiatePayment {
            method_id,
            donation_type_id,
            amount,
            currency,
            name,
            email,
            phone,
            message,
            return_url,
        } = from;
        let method_id = method_id.ok_or(usecases::Error::MissingFields)?;
        let amount = amount.ok_or(usecases::Error::Amount)?;
        Ok(usecases::InitiatePayment {
            method_id,
            donation_type_id,
            amount,
            currency,
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            phone,
            message,
            return_url,
        })
    }

    pub fn store_support_cause(from: StoreSupportCause) -> usecases::StoreSupportCause {
        let StoreSupportCause {
            id,
            title,
            description,
            icon,
            sort_order,
            is_active,
        } = from;
        usecases::StoreSupportCause {
            id,
            title,
            description,
            icon,
            sort_order,
            is_active,
        }
    }

    pub fn store_payment_method(from: StorePaymentMethod) -> usecases::StorePaymentMethod {
        let StorePaymentMethod {
            id,
            name,
            tagline,
            description,
            integration_key,
            button_label,
            icon,
            currency,
            config,
            sort_order,
            is_active,
        } = from;
        usecases::StorePaymentMethod {
            id,
            name,
            tagline,
            description,
            integration_key,
            button_label,
            icon,
            currency,
            config: config
                .filter(|config| !config.is_null())
                .map(|config| config.to_string()),
            sort_order,
            is_active,
        }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn payment_initiation(from: usecases::PaymentInitiation) -> PaymentInitiation {
        use usecases::PaymentInitiation as P;
        match from {
            P::Stripe {
                client_secret,
                reference,
            } => PaymentInitiation::Stripe {
                client_secret,
                reference,
            },
            P::Redirect { link, reference } => PaymentInitiation::Redirect { link, reference },
            P::Mpesa { reference, message } => PaymentInitiation::Mpesa { reference, message },
            P::Manual {
                reference,
                instructions,
            } => PaymentInitiation::Manual {
                reference,
                instructions,
            },
        }
    }

    pub fn support_page(from: usecases::SupportPage) -> SupportPage {
        let usecases::SupportPage {
            settings,
            causes,
            donation_types,
            payment_methods,
        } = from;
        SupportPage {
            settings: settings.into(),
            causes: causes.into_iter().map(Into::into).collect(),
            donation_types: donation_types.into_iter().map(Into::into).collect(),
            payment_methods: payment_methods.into_iter().map(Into::into).collect(),
        }
    }
}
