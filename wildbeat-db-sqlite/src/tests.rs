use super::*;
use wildbeat_core::{
    entities::*,
    repositories::{Error as RepoError, *},
    usecases,
};
use wildbeat_entities::builders::*;

fn setup() -> Connections {
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    connections
}

fn new_user(email: &str) -> NewUserAccount {
    NewUserAccount {
        email: email.parse().unwrap(),
        name: Some("Sarah".into()),
        password: "secret123".parse().unwrap(),
        role: Role::Guest,
    }
}

fn new_booking(tour_id: Option<Id>) -> NewBooking {
    NewBooking {
        tour_id,
        name: "Sarah Johnson".into(),
        email: "sarah@example.com".parse().unwrap(),
        phone: None,
        date: "2025-07-01".parse().unwrap(),
        guests: 2,
        special_requests: Some("Vegetarian".into()),
        status: BookingStatus::Pending,
        total_price: Some(700.0),
    }
}

fn new_donation(type_id: Option<Id>, amount: f64, status: DonationStatus) -> NewDonation {
    NewDonation {
        donation_type_id: type_id,
        name: Some("Jane".into()),
        email: Some("jane@example.com".into()),
        amount,
        payment_method: DEFAULT_PAYMENT_METHOD.into(),
        transaction_id: None,
        status,
        message: None,
    }
}

#[test]
fn create_and_load_users() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let id = db.create_user(&new_user("sarah@example.com")).unwrap();
    let user = db.get_user(id).unwrap();
    assert_eq!(user.email.as_str(), "sarah@example.com");
    assert_eq!(user.role, Role::Guest);
    assert!(user.password.verify("secret123"));
    assert_eq!(
        db.get_user_by_email(&"sarah@example.com".parse().unwrap())
            .unwrap()
            .id,
        id
    );
    assert!(db
        .try_get_user_by_email(&"nobody@example.com".parse().unwrap())
        .unwrap()
        .is_none());
    assert_eq!(db.count_users().unwrap(), 1);
}

#[test]
fn reject_duplicate_user_emails() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    db.create_user(&new_user("sarah@example.com")).unwrap();
    assert!(matches!(
        db.create_user(&new_user("sarah@example.com")),
        Err(RepoError::AlreadyExists)
    ));
}

#[test]
fn sessions_by_token_and_expiry() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let user_id = db.create_user(&new_user("sarah@example.com")).unwrap();
    let now = Timestamp::now();
    let valid = NewSession {
        user_id,
        token: Nonce::new(),
        expires_at: now + time::Duration::hours(1),
    };
    let expired = NewSession {
        user_id,
        token: Nonce::new(),
        expires_at: now - time::Duration::hours(1),
    };
    db.create_session(&valid).unwrap();
    db.create_session(&expired).unwrap();
    let session = db.get_session_by_token(&valid.token).unwrap();
    assert_eq!(session.user_id, user_id);
    assert_eq!(session.token, valid.token);

    assert_eq!(db.delete_expired_sessions(now).unwrap(), 1);
    assert!(matches!(
        db.get_session_by_token(&expired.token),
        Err(RepoError::NotFound)
    ));
    assert_eq!(db.delete_session_by_token(&valid.token).unwrap(), 1);
    assert_eq!(db.delete_session_by_token(&valid.token).unwrap(), 0);
}

#[test]
fn tours_keep_their_highlights() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let first = db
        .create_tour(
            &NewTour::build()
                .title("Gorilla Trekking")
                .price(1500.0)
                .highlights(vec!["Mountain gorillas", "Expert trackers"])
                .finish(),
        )
        .unwrap();
    let second = db
        .create_tour(&NewTour::build().title("Kigali City Tour").finish())
        .unwrap();
    let tour = db.get_tour(first).unwrap();
    assert_eq!(tour.title, "Gorilla Trekking");
    assert_eq!(tour.highlights, vec!["Mountain gorillas", "Expert trackers"]);
    assert!(db.get_tour(second).unwrap().highlights.is_empty());
    let ids: Vec<_> = db.all_tours().unwrap().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first, second]);
    assert!(matches!(db.get_tour(99), Err(RepoError::NotFound)));
}

#[test]
fn bookings_newest_first_and_status_updates() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let tour_id = db.create_tour(&NewTour::build().finish()).unwrap();
    let first = db.create_booking(&new_booking(Some(tour_id))).unwrap();
    let second = db.create_booking(&new_booking(None)).unwrap();

    let booking = db.get_booking(first).unwrap();
    assert_eq!(booking.date.to_string(), "2025-07-01");
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.total_price, Some(700.0));
    assert_eq!(booking.special_requests.as_deref(), Some("Vegetarian"));

    let ids: Vec<_> = db
        .all_bookings_newest_first()
        .unwrap()
        .into_iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(ids, vec![second, first]);

    db.update_booking_status(first, BookingStatus::Confirmed)
        .unwrap();
    assert_eq!(
        db.get_booking(first).unwrap().status,
        BookingStatus::Confirmed
    );
    assert!(matches!(
        db.update_booking_status(42, BookingStatus::Cancelled),
        Err(RepoError::NotFound)
    ));
}

#[test]
fn approve_reviews_by_token() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let token = Nonce::new();
    let review = NewReview {
        tour_id: None,
        name: "Michael".into(),
        email: "michael@example.com".parse().unwrap(),
        rating: Rating::new(5).unwrap(),
        review_text: "Unforgettable".into(),
        approved: false,
        approval_token: Some(token),
    };
    let id = db.create_review(&review).unwrap();
    assert!(db.approved_reviews_newest_first().unwrap().is_empty());

    let pending = db.get_review_by_approval_token(&token).unwrap();
    assert_eq!(pending.id, id);
    assert_eq!(pending.rating.value(), 5);

    db.approve_review(id).unwrap();
    let approved = db.get_review(id).unwrap();
    assert!(approved.approved);
    assert_eq!(approved.approval_token, None);
    assert!(matches!(
        db.get_review_by_approval_token(&token),
        Err(RepoError::NotFound)
    ));
    assert_eq!(db.approved_reviews_newest_first().unwrap().len(), 1);
    assert_eq!(db.count_reviews().unwrap(), 1);
}

#[test]
fn filter_gallery_by_category() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    for (url, category) in [("a.jpg", "wildlife"), ("b.jpg", "landscape"), ("c.jpg", "wildlife")] {
        db.create_gallery_image(&NewGalleryImage {
            title: None,
            image_url: url.into(),
            category: Some(category.into()),
            alt_text: None,
        })
        .unwrap();
    }
    let wildlife: Vec<_> = db
        .gallery_images_newest_first(Some("wildlife"))
        .unwrap()
        .into_iter()
        .map(|i| i.image_url)
        .collect();
    assert_eq!(wildlife, vec!["c.jpg", "a.jpg"]);
    assert_eq!(db.gallery_images_newest_first(None).unwrap().len(), 3);
    assert_eq!(db.count_gallery_images().unwrap(), 3);
}

#[test]
fn update_and_deactivate_donation_types() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let champion = db
        .create_donation_type(
            &NewDonationType::build()
                .title("Champion")
                .amount(250.0)
                .sort_order(4)
                .finish(),
        )
        .unwrap();
    let explorer = db
        .create_donation_type(&NewDonationType::build().sort_order(1).finish())
        .unwrap();
    let ids: Vec<_> = db
        .all_donation_types()
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![explorer, champion]);

    let mut update = NewDonationType::build()
        .title("Champion")
        .amount(300.0)
        .sort_order(4)
        .finish();
    update.benefits = vec!["Named tree".into(), "Annual report".into()];
    db.update_donation_type(champion, &update).unwrap();
    let updated = db.get_donation_type(champion).unwrap();
    assert_eq!(updated.amount, 300.0);
    assert_eq!(updated.benefits, vec!["Named tree", "Annual report"]);

    db.deactivate_donation_type(explorer).unwrap();
    let active: Vec<_> = db
        .active_donation_types()
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(active, vec![champion]);
    assert_eq!(db.count_donation_types().unwrap(), 2);
    assert!(matches!(
        db.deactivate_donation_type(99),
        Err(RepoError::NotFound)
    ));
}

#[test]
fn donations_with_unique_transaction_ids() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let mut donation = new_donation(None, 25.0, DonationStatus::Processing);
    donation.transaction_id = Some("pi_123".into());
    let id = db.create_donation(&donation).unwrap();
    assert!(matches!(
        db.create_donation(&donation),
        Err(RepoError::AlreadyExists)
    ));
    let stored = db.get_donation_by_transaction_id("pi_123").unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.status, DonationStatus::Processing);
    assert!(db.completed_donations().unwrap().is_empty());

    db.update_donation_status(id, DonationStatus::Completed)
        .unwrap();
    assert_eq!(db.completed_donations().unwrap().len(), 1);
    assert_eq!(db.all_donations_newest_first().unwrap().len(), 1);
}

#[test]
fn support_settings_are_replaced() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    assert_eq!(db.get_support_settings().unwrap(), SupportSettings::default());
    let settings = SupportSettings {
        hero_title: Some("Support conservation".into()),
        hero_subtitle: Some("Every gift counts".into()),
        updated_at: Some(Timestamp::from_millis(1_000)),
        ..Default::default()
    };
    db.replace_support_settings(&settings).unwrap();
    assert_eq!(db.get_support_settings().unwrap(), settings);

    let cleared = SupportSettings {
        hero_title: Some("Support".into()),
        ..Default::default()
    };
    db.replace_support_settings(&cleared).unwrap();
    assert_eq!(db.get_support_settings().unwrap(), cleared);
}

#[test]
fn support_causes_and_payment_methods() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let cause = NewSupportCause {
        title: "Ranger equipment".into(),
        description: "Boots and radios".into(),
        icon: None,
        sort_order: 1,
        is_active: true,
    };
    let cause_id = db.create_support_cause(&cause).unwrap();
    db.update_support_cause(
        cause_id,
        &NewSupportCause {
            icon: Some("shield".into()),
            ..cause.clone()
        },
    )
    .unwrap();
    assert_eq!(
        db.all_support_causes().unwrap()[0].icon.as_deref(),
        Some("shield")
    );
    db.deactivate_support_cause(cause_id).unwrap();
    assert!(db.active_support_causes().unwrap().is_empty());

    let method = NewPaymentMethod {
        name: "M-Pesa".into(),
        tagline: None,
        description: None,
        integration_key: IntegrationKey::Mpesa,
        button_label: Some("Pay with M-Pesa".into()),
        icon: None,
        currency: "KES".into(),
        config: "{}".into(),
        sort_order: 2,
        is_active: true,
    };
    let method_id = db.create_payment_method(&method).unwrap();
    let bank_id = db
        .create_payment_method(&NewPaymentMethod {
            name: "Bank transfer".into(),
            integration_key: IntegrationKey::Manual("bank".into()),
            config: r#"{"payment_options":"IBAN RW00 0000"}"#.into(),
            sort_order: 1,
            ..method.clone()
        })
        .unwrap();
    let loaded = db.get_payment_method(method_id).unwrap();
    assert_eq!(loaded.integration_key, IntegrationKey::Mpesa);
    assert_eq!(loaded.currency, "KES");
    let ids: Vec<_> = db
        .all_payment_methods()
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec![bank_id, method_id]);

    db.update_payment_method(
        bank_id,
        &NewPaymentMethod {
            is_active: false,
            ..method.clone()
        },
    )
    .unwrap();
    db.deactivate_payment_method(method_id).unwrap();
    assert!(db.active_payment_methods().unwrap().is_empty());
}

#[test]
fn read_only_connections_see_committed_writes() {
    let connections = setup();
    {
        let db = connections.exclusive().unwrap();
        db.create_tour(&NewTour::build().title("Nyungwe Forest").finish())
            .unwrap();
    }
    let db = connections.shared().unwrap();
    assert_eq!(db.count_tours().unwrap(), 1);
    assert_eq!(db.all_tours().unwrap()[0].title, "Nyungwe Forest");
}

#[test]
fn roll_back_failed_transactions() {
    let connections = setup();
    let mut db = connections.exclusive().unwrap();
    let res = db.transaction(|conn| {
        conn.create_tour(&NewTour::build().finish())?;
        usecases::get_tour(conn, 99)
    });
    assert!(matches!(res, Err(usecases::Error::TourNotFound)));
    assert_eq!(db.count_tours().unwrap(), 0);
}

#[test]
fn donation_stats_from_stored_donations() {
    let connections = setup();
    let mut db = connections.exclusive().unwrap();
    let stats = db
        .transaction(|conn| {
            let explorer = conn.create_donation_type(&NewDonationType::build().sort_order(1).finish())?;
            let guardian = conn.create_donation_type(
                &NewDonationType::build()
                    .title("Guardian")
                    .amount(100.0)
                    .sort_order(3)
                    .finish(),
            )?;
            conn.create_donation(&new_donation(Some(guardian), 100.0, DonationStatus::Completed))?;
            conn.create_donation(&new_donation(Some(guardian), 120.0, DonationStatus::Completed))?;
            conn.create_donation(&new_donation(Some(guardian), 100.0, DonationStatus::Failed))?;
            conn.create_donation(&new_donation(Some(explorer), 25.0, DonationStatus::Pending))?;
            usecases::donation_stats(conn)
        })
        .unwrap();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].title, "Explorer");
    assert_eq!(stats[0].count, 0);
    assert_eq!(stats[1].title, "Guardian");
    assert_eq!(stats[1].count, 2);
    assert_eq!(stats[1].total, 220.0);
}
