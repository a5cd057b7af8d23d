//! Sample data for a fresh installation.
//!
//! Every table is only filled if it does not contain any rows yet,
//! so seeding can safely be repeated.

use anyhow::Result;
use wildbeat_core::{
    entities::*,
    repositories::{DonationTypeRepo, GalleryRepo, ReviewRepo, SupportRepo, TourRepo},
    usecases,
};
use wildbeat_db_sqlite::Connections;

type SeedResult<T> = std::result::Result<T, usecases::Error>;

const UNSPLASH_PARAMS: &str = "ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?{UNSPLASH_PARAMS}")
}

pub fn seed_sample_data(connections: &Connections) -> Result<()> {
    let mut db = connections.exclusive()?;
    db.transaction(|conn| -> SeedResult<()> {
        let tours = seed_tours(conn)?;
        log::info!("Inserted {tours} sample tours");
        let images = seed_gallery(conn)?;
        log::info!("Inserted {images} sample gallery images");
        let reviews = seed_reviews(conn)?;
        log::info!("Inserted {reviews} sample reviews");
        let types = seed_donation_types(conn)?;
        log::info!("Inserted {types} sample donation types");
        let support = seed_support_page(conn)?;
        log::info!("Inserted {support} sample support page entries");
        Ok(())
    })?;
    Ok(())
}

fn sample_tours() -> Vec<NewTour> {
    let tour = |title: &str,
                description: &str,
                price: f64,
                duration: &str,
                group_size: &str,
                location: &str,
                highlights: &str,
                photo: &str,
                rating: f64| NewTour {
        title: title.to_owned(),
        description: Some(description.to_owned()),
        price,
        duration: Some(duration.to_owned()),
        group_size: Some(group_size.to_owned()),
        location: Some(location.to_owned()),
        highlights: split_list(highlights),
        image_url: Some(unsplash(photo)),
        rating,
    };
    vec![
        tour(
            "Akagera National Park Safari",
            "Experience Rwanda's premier wildlife destination with game drives through savanna landscapes.",
            350.0,
            "2-3 Days",
            "2-8 People",
            "Akagera National Park",
            "Big Five wildlife viewing,Boat safari on Lake Ihema,Sunrise game drives,Professional photography opportunities",
            "photo-1551632811-561732d1e306",
            4.9,
        ),
        tour(
            "Gorilla Trekking Experience",
            "Embark on a life-changing journey to meet mountain gorillas in their natural habitat.",
            1500.0,
            "Full Day",
            "1-8 People",
            "Volcanoes National Park",
            "Mountain gorilla encounters,Expert tracker guides,Conservation education,Certificate of participation",
            "photo-1564760055775-d63b17a55c44",
            5.0,
        ),
        tour(
            "Nyungwe Forest Adventure",
            "Discover Rwanda's ancient rainforest with chimpanzee tracking and canopy walks.",
            280.0,
            "2 Days",
            "2-6 People",
            "Nyungwe National Park",
            "Chimpanzee tracking,Canopy walkway experience,Waterfall hikes,Bird watching tours",
            "photo-1544735716-392fe2489ffa",
            4.8,
        ),
        tour(
            "Kigali City Tour",
            "Explore Rwanda's vibrant capital city with cultural and historical sites.",
            75.0,
            "Half Day",
            "1-10 People",
            "Kigali City",
            "Genocide Memorial visit,Local market exploration,Coffee tasting experience,Cultural center tours",
            "photo-1578662996442-48f60103fc96",
            4.7,
        ),
        tour(
            "Complete Rwanda Experience",
            "The ultimate 7-day journey combining all of Rwanda's highlights.",
            3500.0,
            "7 Days",
            "2-6 People",
            "Multiple Locations",
            "All major attractions,Luxury accommodations,Private transportation,Expert guide throughout",
            "photo-1516426122078-c23e76319801",
            4.9,
        ),
    ]
}

fn seed_tours<R: TourRepo>(repo: &R) -> SeedResult<usize> {
    if repo.count_tours()? > 0 {
        return Ok(0);
    }
    let mut count = 0;
    for tour in sample_tours() {
        usecases::create_tour(repo, tour)?;
        count += 1;
    }
    Ok(count)
}

fn seed_gallery<R: GalleryRepo>(repo: &R) -> SeedResult<usize> {
    if repo.count_gallery_images()? > 0 {
        return Ok(0);
    }
    let images = [
        ("Elephant Family", "photo-1551632811-561732d1e306", "wildlife", "Elephants in Akagera National Park"),
        ("Mountain Gorilla", "photo-1564760055775-d63b17a55c44", "wildlife", "Mountain Gorilla"),
        ("Savanna Sunset", "photo-1516426122078-c23e76319801", "landscape", "African Sunset"),
        ("Nyungwe Canopy", "photo-1544735716-392fe2489ffa", "landscape", "Nyungwe Forest"),
        ("Safari Adventure", "photo-1469474968028-56623f02e42e", "adventure", "Safari Jeep"),
        ("Zebra Crossing", "photo-1547036967-23d11aacaee0", "wildlife", "Zebras at waterhole"),
    ];
    for (title, photo, category, alt_text) in images {
        repo.create_gallery_image(&NewGalleryImage {
            title: Some(title.to_owned()),
            image_url: unsplash(photo),
            category: Some(category.to_owned()),
            alt_text: Some(alt_text.to_owned()),
        })?;
    }
    Ok(images.len())
}

fn seed_reviews<R: ReviewRepo + TourRepo>(repo: &R) -> SeedResult<usize> {
    if repo.count_reviews()? > 0 {
        return Ok(0);
    }
    let tour_ids: Vec<_> = repo.all_tours()?.into_iter().map(|t| t.id).collect();
    let reviews = [
        ("Sarah Johnson", "sarah@example.com", "Ilyce made our Rwanda safari absolutely magical! Her knowledge of wildlife and passion for conservation made every moment special."),
        ("Marcus Weber", "marcus@example.com", "Professional, knowledgeable, and incredibly friendly. The gorilla trekking was a once-in-a-lifetime experience."),
        ("Emma Thompson", "emma@example.com", "From start to finish, everything was perfectly organized. Best safari experience we've ever had!"),
    ];
    let mut count = 0;
    for (i, (name, email, text)) in reviews.into_iter().enumerate() {
        let (Ok(email), Some(rating)) = (email.parse::<EmailAddress>(), Rating::new(Rating::MAX)) else {
            continue;
        };
        repo.create_review(&NewReview {
            tour_id: tour_ids.get(i).copied(),
            name: name.to_owned(),
            email,
            rating,
            review_text: text.to_owned(),
            approved: true,
            approval_token: None,
        })?;
        count += 1;
    }
    Ok(count)
}

fn seed_donation_types<R: DonationTypeRepo>(repo: &R) -> SeedResult<usize> {
    if repo.count_donation_types()? > 0 {
        return Ok(0);
    }
    let types = [
        ("Explorer", 25.0, "Help provide educational materials for local youth programs", "#D4B896",
         "Monthly conservation newsletter,Digital photo collection,Virtual wildlife presentation"),
        ("Adventurer", 50.0, "Support wildlife conservation and anti-poaching efforts", "#808000",
         "Everything in Explorer,10% discount on future tours,Exclusive behind-the-scenes content"),
        ("Guardian", 100.0, "Fund community tourism training programs", "#D4A574",
         "Everything in Adventurer,15% discount on future tours,Personal video message from Ilyce,Priority booking for new tours"),
        ("Champion", 250.0, "Major contribution to sustainable tourism initiatives", "#8B4513",
         "Everything in Guardian,20% discount on future tours,Annual conservation impact report,Invitation to exclusive virtual events"),
    ];
    for (sort_order, (title, amount, description, icon_color, benefits)) in (1..).zip(types) {
        repo.create_donation_type(&NewDonationType {
            title: title.to_owned(),
            amount,
            description: Some(description.to_owned()),
            icon_color: Some(icon_color.to_owned()),
            benefits: split_list(benefits),
            is_active: true,
            sort_order,
        })?;
    }
    Ok(types.len())
}

fn sample_support_settings() -> SupportSettings {
    let text = |s: &str| Some(s.to_owned());
    SupportSettings {
        hero_kicker: text("Support Conservation"),
        hero_title: text("Protect Rwanda's Wildlife"),
        hero_subtitle: text("Every contribution helps local communities and wildlife thrive."),
        hero_description: text(
            "Your donation funds anti-poaching patrols, youth education and community tourism training.",
        ),
        hero_cta_label: text("Donate now"),
        hero_cta_link: text("#donate"),
        stats_label_one: text("Gorillas protected"),
        stats_value_one: text("1,000+"),
        stats_label_two: text("Students reached"),
        stats_value_two: text("500+"),
        stats_label_three: text("Guides trained"),
        stats_value_three: text("50+"),
        custom_title: text("Plan a custom contribution"),
        custom_description: text("Get in touch to sponsor a specific project."),
        custom_button_label: text("Contact us"),
        custom_button_link: text("/contact"),
        updated_at: Some(Timestamp::now()),
    }
}

fn seed_support_page<R: SupportRepo>(repo: &R) -> SeedResult<usize> {
    let mut count = 0;
    if repo.get_support_settings()?.hero_title.is_none() {
        repo.replace_support_settings(&sample_support_settings())?;
        count += 1;
    }
    if repo.all_support_causes()?.is_empty() {
        let causes = [
            ("Wildlife Protection", "Funding ranger patrols and anti-poaching units.", "shield"),
            ("Community Education", "Conservation programs for local schools.", "book"),
            ("Sustainable Tourism", "Training guides from surrounding communities.", "users"),
        ];
        for (sort_order, (title, description, icon)) in (1..).zip(causes) {
            repo.create_support_cause(&NewSupportCause {
                title: title.to_owned(),
                description: description.to_owned(),
                icon: Some(icon.to_owned()),
                sort_order,
                is_active: true,
            })?;
            count += 1;
        }
    }
    if repo.all_payment_methods()?.is_empty() {
        let methods = [
            NewPaymentMethod {
                name: "Card".to_owned(),
                tagline: Some("Visa, Mastercard, Amex".to_owned()),
                description: Some("Pay securely by card.".to_owned()),
                integration_key: IntegrationKey::Stripe,
                button_label: Some("Pay with card".to_owned()),
                icon: Some("credit-card".to_owned()),
                currency: "USD".to_owned(),
                config: "{}".to_owned(),
                sort_order: 1,
                is_active: true,
            },
            NewPaymentMethod {
                name: "M-Pesa".to_owned(),
                tagline: Some("Mobile money".to_owned()),
                description: Some("Confirm the payment on your phone.".to_owned()),
                integration_key: IntegrationKey::Mpesa,
                button_label: Some("Pay with M-Pesa".to_owned()),
                icon: Some("smartphone".to_owned()),
                currency: "KES".to_owned(),
                config: "{}".to_owned(),
                sort_order: 2,
                is_active: true,
            },
            NewPaymentMethod {
                name: "Bank transfer".to_owned(),
                tagline: Some("Offline payment".to_owned()),
                description: Some("Transfer the amount to our bank account.".to_owned()),
                integration_key: IntegrationKey::Manual("bank".to_owned()),
                button_label: Some("Show bank details".to_owned()),
                icon: Some("bank".to_owned()),
                currency: "USD".to_owned(),
                config: r#"{"payment_options":"Bank of Kigali, account 000-000000-00, reference: your e-mail address"}"#.to_owned(),
                sort_order: 3,
                is_active: true,
            },
        ];
        for method in &methods {
            repo.create_payment_method(method)?;
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Connections {
        let connections = Connections::init(":memory:", 1).unwrap();
        wildbeat_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap())
            .unwrap();
        connections
    }

    #[test]
    fn seed_empty_database() {
        let connections = setup();
        seed_sample_data(&connections).unwrap();
        let db = connections.shared().unwrap();
        assert_eq!(db.count_tours().unwrap(), 5);
        assert_eq!(db.count_gallery_images().unwrap(), 6);
        assert_eq!(db.count_reviews().unwrap(), 3);
        assert_eq!(db.count_donation_types().unwrap(), 4);
        assert_eq!(db.approved_reviews_newest_first().unwrap().len(), 3);
        assert_eq!(db.active_support_causes().unwrap().len(), 3);
        assert_eq!(db.active_payment_methods().unwrap().len(), 3);
        assert!(db.get_support_settings().unwrap().hero_title.is_some());
    }

    #[test]
    fn seeding_twice_does_not_duplicate_rows() {
        let connections = setup();
        seed_sample_data(&connections).unwrap();
        seed_sample_data(&connections).unwrap();
        let db = connections.shared().unwrap();
        assert_eq!(db.count_tours().unwrap(), 5);
        assert_eq!(db.count_donation_types().unwrap(), 4);
        assert_eq!(db.all_payment_methods().unwrap().len(), 3);
    }

    #[test]
    fn keep_existing_tours() {
        let connections = setup();
        {
            let db = connections.exclusive().unwrap();
            let mut tour = sample_tours().remove(0);
            tour.title = "Custom tour".to_owned();
            db.create_tour(&tour).unwrap();
        }
        seed_sample_data(&connections).unwrap();
        let db = connections.shared().unwrap();
        let tours = db.all_tours().unwrap();
        assert_eq!(tours.len(), 1);
        assert_eq!(tours[0].title, "Custom tour");
    }
}
