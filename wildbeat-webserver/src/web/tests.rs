use std::sync::Arc;

use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};
use wildbeat_db_sqlite::Connections;

use crate::{
    core::{
        gateways::{
            notify::{NotificationEvent, NotificationGateway},
            payment::*,
        },
        prelude::*,
        usecases,
    },
    web::Cfg,
};

pub mod prelude {

    pub const DUMMY_VERSION: &str = "3.2.1";
    pub const ADMIN_CODE: &str = "let-me-in";

    pub use rocket::{
        http::{ContentType, Header, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{
        bearer, login, register_user, rocket_test_setup, rocket_test_setup_with, DummyNotifyGW,
        DummyStripe,
    };
}

use self::prelude::*;

/// Records a short description of every notification.
#[derive(Default)]
pub struct DummyNotifyGW {
    events: std::sync::Mutex<Vec<String>>,
}

impl DummyNotifyGW {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl NotificationGateway for DummyNotifyGW {
    fn notify(&self, event: NotificationEvent) {
        let description = match event {
            NotificationEvent::BookingCreated { booking, .. } => format!("booking {}", booking.id),
            NotificationEvent::ReviewSubmitted { review, .. } => format!("review {}", review.id),
            NotificationEvent::DonationReceived { donation } => format!("donation {}", donation.id),
        };
        self.events.lock().unwrap().push(description);
    }
}

/// Creates intents with the id `pi_<minor units>` and accepts
/// webhook payloads `<event type>:<object id>` signed with `valid`.
pub struct DummyStripe;

impl StripeGateway for DummyStripe {
    fn create_payment_intent(
        &self,
        req: &PaymentIntentRequest,
    ) -> std::result::Result<PaymentIntent, PaymentError> {
        let minor_units = to_minor_units(req.amount);
        Ok(PaymentIntent {
            id: format!("pi_{minor_units}"),
            client_secret: format!("pi_{minor_units}_secret"),
        })
    }

    fn verify_webhook(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> std::result::Result<WebhookEvent, WebhookError> {
        if signature_header != "valid" {
            return Err(WebhookError::Signature);
        }
        let payload =
            std::str::from_utf8(payload).map_err(|err| WebhookError::Payload(err.to_string()))?;
        let (event_type, object_id) = payload
            .split_once(':')
            .ok_or_else(|| WebhookError::Payload(payload.to_owned()))?;
        Ok(WebhookEvent {
            event_type: event_type.to_owned(),
            object_id: Some(object_id.to_owned()),
        })
    }
}

fn rocket_test_instance(
    mounts: Vec<(&'static str, Vec<Route>)>,
    cfg: Cfg,
    payment: PaymentGateways,
) -> (rocket::Rocket<rocket::Build>, Connections, Arc<DummyNotifyGW>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let db = Connections::init(":memory:", 1).unwrap();
    wildbeat_db_sqlite::run_embedded_database_migrations(db.exclusive().unwrap()).unwrap();
    let notify = Arc::new(DummyNotifyGW::default());
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg,
        version: DUMMY_VERSION,
    };
    let gateways = super::Gateways {
        notify: notify.clone(),
        payment,
    };
    let rocket = super::rocket_instance(options, db.clone(), gateways);
    (rocket, db, notify)
}

pub fn rocket_test_setup_with(
    cfg: Cfg,
    payment: PaymentGateways,
) -> (Client, Connections, Arc<DummyNotifyGW>) {
    let (rocket, db, notify) = rocket_test_instance(super::mounts(), cfg, payment);
    let client = Client::tracked(rocket).unwrap();
    (client, db, notify)
}

pub fn rocket_test_setup() -> (Client, Connections, Arc<DummyNotifyGW>) {
    let cfg = Cfg {
        admin_signup_code: Some(ADMIN_CODE.to_owned()),
        ..Default::default()
    };
    let payment = PaymentGateways {
        stripe: Some(Arc::new(DummyStripe)),
        ..Default::default()
    };
    rocket_test_setup_with(cfg, payment)
}

pub fn register_user(db: &Connections, email: &str, pw: &str, admin: bool) -> Id {
    let new_user = usecases::NewUser {
        email: email.parse().unwrap(),
        password: pw.to_owned(),
        name: None,
    };
    let code = admin.then_some(ADMIN_CODE);
    let db = db.exclusive().unwrap();
    let (id, _) = usecases::signup(&db, new_user, code, Some(ADMIN_CODE)).unwrap();
    id
}

/// Logs in and returns the bearer token.
pub fn login(client: &Client, email: &str, pw: &str) -> String {
    let res = client
        .post("/api/auth/login")
        .header(ContentType::JSON)
        .body(format!(r#"{{"email":"{email}","password":"{pw}"}}"#))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body: serde_json::Value = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    body["token"].as_str().unwrap().to_owned()
}

pub fn bearer(token: &str) -> Header<'static> {
    Header::new("Authorization", format!("Bearer {token}"))
}
