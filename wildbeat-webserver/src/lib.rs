#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use std::sync::Arc;

use wildbeat_core::gateways::{notify::NotificationGateway, payment::PaymentGateways};
use wildbeat_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    notify_gw: Arc<dyn NotificationGateway + Send + Sync>,
    payment_gws: PaymentGateways,
    version: &'static str,
) {
    web::run(
        connections,
        enable_cors,
        cfg,
        notify_gw,
        payment_gws,
        version,
    )
    .await;
}
