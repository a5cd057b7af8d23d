pub mod prelude {
    use std::sync::Mutex;

    pub use wildbeat_core::{
        entities::*,
        gateways::notify::{NotificationEvent, NotificationGateway},
        repositories::*,
        usecases,
    };
    pub use wildbeat_db_sqlite::Connections;

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    /// Records a short description of every notification.
    #[derive(Default)]
    pub struct DummyNotifyGW {
        events: Mutex<Vec<String>>,
    }

    impl DummyNotifyGW {
        pub fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl NotificationGateway for DummyNotifyGW {
        fn notify(&self, event: NotificationEvent) {
            let description = match event {
                NotificationEvent::BookingCreated { booking, tour } => format!(
                    "booking {} for {}",
                    booking.id,
                    tour.map(|t| t.id.to_string()).unwrap_or_default()
                ),
                NotificationEvent::ReviewSubmitted {
                    review,
                    approval_url,
                } => format!("review {} approval {approval_url:?}", review.id),
                NotificationEvent::DonationReceived { donation } => {
                    format!("donation {}", donation.id)
                }
            };
            self.events.lock().unwrap().push(description);
        }
    }

    pub struct BackendFixture {
        pub db_connections: Connections,
        pub notify: DummyNotifyGW,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = Connections::init(":memory:", 1).unwrap();
            wildbeat_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self {
                db_connections,
                notify: DummyNotifyGW::default(),
            }
        }

        pub fn create_tour(&self, title: &str, price: f64) -> Id {
            let tour = NewTour {
                title: title.into(),
                description: None,
                price,
                duration: Some("5 days".into()),
                group_size: None,
                location: Some("Tanzania".into()),
                highlights: vec!["Great Migration".into()],
                image_url: None,
                rating: 0.0,
            };
            let db = self.db_connections.exclusive().unwrap();
            usecases::create_tour(&db, tour).unwrap()
        }

        pub fn create_donation_type(&self, title: &str, amount: f64) -> Id {
            let db = self.db_connections.exclusive().unwrap();
            usecases::store_donation_type(
                &db,
                usecases::StoreDonationType {
                    title: title.into(),
                    amount,
                    ..Default::default()
                },
            )
            .unwrap()
        }

        pub fn create_payment_method(&self, integration_key: &str) -> Id {
            let db = self.db_connections.exclusive().unwrap();
            usecases::store_payment_method(
                &db,
                usecases::StorePaymentMethod {
                    name: integration_key.into(),
                    integration_key: integration_key.into(),
                    ..Default::default()
                },
            )
            .unwrap()
        }
    }
}
