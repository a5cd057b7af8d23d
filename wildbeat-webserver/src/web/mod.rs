use std::sync::Arc;

use rocket::{
    catch, catchers,
    config::Config as RocketCfg,
    data::{Limits, ToByteUnit},
    figment::Figment,
    http::Status,
    response::status,
    serde::json::Json,
    Catcher, Request, Rocket, Route,
};
use time::Duration;
use wildbeat_application::{prelude as flows, prelude::ReviewModeration};
use wildbeat_db_sqlite::Connections;

use crate::{
    adapters::json,
    core::gateways::{notify::NotificationGateway, payment::PaymentGateways},
};

pub mod api;
mod frontend;
mod guards;

#[cfg(test)]
pub mod tests;

/// Photos are uploaded as base64 data URLs inside JSON bodies.
pub(crate) const JSON_LIMIT_MIB: u64 = 10;

#[derive(Debug, Clone)]
pub struct Cfg {
    /// Code that grants admin rights on signup.
    pub admin_signup_code: Option<String>,
    pub session_lifetime: Duration,
    pub review_moderation: ReviewModeration,
    /// Base URL of the public website.
    pub frontend_url: String,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            admin_signup_code: None,
            session_lifetime: Duration::days(1),
            review_moderation: ReviewModeration::default(),
            frontend_url: "http://localhost:5174".to_owned(),
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Gateways {
    notify: Arc<dyn NotificationGateway + Send + Sync>,
    payment: PaymentGateways,
}

#[catch(default)]
fn json_catcher(status: Status, _req: &Request) -> status::Custom<Json<json::Error>> {
    let error = status.reason().unwrap_or("Unknown error").to_owned();
    status::Custom(status, Json(json::Error { error }))
}

fn catchers() -> Vec<Catcher> {
    catchers![json_catcher]
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Gateways { notify, payment } = gateways;

    info!("Deleting expired sessions...");
    if let Err(err) = flows::delete_expired_sessions(&db) {
        warn!("Unable to delete expired sessions: {err}");
    }

    if payment.stripe.is_none() {
        warn!("Stripe is not configured");
    }
    if cfg.admin_signup_code.is_none() {
        warn!("No admin signup code configured: admin accounts cannot be created");
    }

    info!("Initialization finished");

    let figment = match rocket_cfg {
        Some(cfg) => Figment::from(cfg),
        None => RocketCfg::figment(),
    };
    let limits = Limits::new().limit("json", JSON_LIMIT_MIB.mebibytes());
    let r = rocket::custom(figment.merge(("limits", limits)));

    let notify_gw = guards::Notify(notify);
    let version = guards::Version(version);

    let mut instance = r
        .manage(db)
        .manage(notify_gw)
        .manage(payment)
        .manage(cfg)
        .manage(version)
        .register("/", catchers());

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", frontend::routes())]
}

pub async fn run(
    db: Connections,
    enable_cors: bool,
    cfg: Cfg,
    notify: Arc<dyn NotificationGateway + Send + Sync>,
    payment: PaymentGateways,
    version: &'static str,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };
    let gateways = Gateways { notify, payment };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
