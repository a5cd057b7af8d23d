//! Adapters for the outside world: e-mail delivery, notifications
//! and payment providers.

pub mod email {
    pub mod mailgun;
    pub mod send_to_json_file;

    pub use wildbeat_core::gateways::email::EmailGateway;
}

pub mod notify;
pub mod payment;
pub mod sendmail;
pub mod user_communication;
