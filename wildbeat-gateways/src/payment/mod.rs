//! HTTP clients of the payment providers.
//!
//! All clients are blocking and must not be called from
//! within an async context directly.

mod flutterwave;
mod mpesa;
mod stripe;

pub use self::{flutterwave::*, mpesa::*, stripe::*};

use reqwest::blocking::Response;
use serde::de::DeserializeOwned;
use wildbeat_core::gateways::payment::PaymentError;

fn http_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::new()
}

/// Decodes a successful response or extracts the error message
/// the provider returned.
fn decode_response<T, F>(provider: &str, response: Response, error_message: F) -> Result<T, PaymentError>
where
    T: DeserializeOwned,
    F: FnOnce(&serde_json::Value) -> Option<String>,
{
    let status = response.status();
    let body: serde_json::Value = response.json().map_err(|err| {
        log::warn!("Unable to decode {provider} response ({status}): {err}");
        PaymentError::Provider(format!("Invalid response from {provider}"))
    })?;
    if !status.is_success() {
        let msg = error_message(&body)
            .unwrap_or_else(|| format!("{provider} request failed with status {status}"));
        log::warn!("{provider} request failed: {msg}");
        return Err(PaymentError::Provider(msg));
    }
    serde_json::from_value(body).map_err(|err| {
        log::warn!("Unexpected {provider} response: {err}");
        PaymentError::Provider(format!("Invalid response from {provider}"))
    })
}

fn transport_error(provider: &str, err: reqwest::Error) -> PaymentError {
    log::warn!("Could not reach {provider}: {err}");
    PaymentError::Provider(format!("Could not reach {provider}"))
}
