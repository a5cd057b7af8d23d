use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use wildbeat_core::{
    entities::Timestamp,
    gateways::payment::{
        to_minor_units, PaymentError, PaymentIntent, PaymentIntentRequest, StripeGateway,
        WebhookError, WebhookEvent,
    },
};

use super::{decode_response, http_client, transport_error};

pub const STRIPE_API_BASE_URL: &str = "https://api.stripe.com";

/// Maximum age of a webhook signature in seconds.
pub const WEBHOOK_TOLERANCE_SECS: i64 = 300;

#[derive(Debug, Clone)]
pub struct Stripe {
    pub secret_key: String,
    pub webhook_secret: String,
    pub api_base_url: String,
}

impl Stripe {
    pub fn new(secret_key: String, webhook_secret: String) -> Self {
        Self {
            secret_key,
            webhook_secret,
            api_base_url: STRIPE_API_BASE_URL.to_owned(),
        }
    }
}

fn intent_form(req: &PaymentIntentRequest) -> Vec<(String, String)> {
    let mut form = vec![
        ("amount".to_owned(), to_minor_units(req.amount).to_string()),
        ("currency".to_owned(), req.currency.to_lowercase()),
        (
            "automatic_payment_methods[enabled]".to_owned(),
            "true".to_owned(),
        ),
    ];
    if let Some(description) = &req.description {
        form.push(("description".to_owned(), description.clone()));
    }
    if let Some(email) = req.receipt_email.as_ref().filter(|e| !e.is_empty()) {
        form.push(("receipt_email".to_owned(), email.clone()));
    }
    for (key, value) in &req.metadata {
        form.push((format!("metadata[{key}]"), value.clone()));
    }
    form
}

#[derive(Deserialize)]
struct CreatedIntent {
    id: String,
    client_secret: String,
}

impl StripeGateway for Stripe {
    fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentError> {
        let url = format!(
            "{}/v1/payment_intents",
            self.api_base_url.trim_end_matches('/')
        );
        let response = http_client()
            .post(url)
            .bearer_auth(&self.secret_key)
            .form(&intent_form(request))
            .send()
            .map_err(|err| transport_error("Stripe", err))?;
        let CreatedIntent { id, client_secret } =
            decode_response("Stripe", response, |body| {
                body.pointer("/error/message")
                    .and_then(|m| m.as_str())
                    .map(ToOwned::to_owned)
            })?;
        log::debug!("Created payment intent {id}");
        Ok(PaymentIntent { id, client_secret })
    }

    fn verify_webhook(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<WebhookEvent, WebhookError> {
        verify_signature(
            payload,
            signature_header,
            &self.webhook_secret,
            Timestamp::now().as_secs(),
        )?;
        parse_event(payload)
    }
}

struct SignatureHeader<'a> {
    timestamp: i64,
    signatures: Vec<&'a str>,
}

/// Parses `t=<unix seconds>,v1=<hex>,v1=<hex>,…`.
fn parse_signature_header(header: &str) -> Result<SignatureHeader<'_>, WebhookError> {
    let mut timestamp = None;
    let mut signatures = vec![];
    for item in header.split(',') {
        let Some((key, value)) = item.trim().split_once('=') else {
            continue;
        };
        match key {
            "t" => timestamp = value.parse::<i64>().ok(),
            "v1" => signatures.push(value),
            _ => {}
        }
    }
    let timestamp = timestamp.ok_or(WebhookError::Header)?;
    if signatures.is_empty() {
        return Err(WebhookError::Signature);
    }
    Ok(SignatureHeader {
        timestamp,
        signatures,
    })
}

fn hmac_for(secret: &str, timestamp: i64, payload: &[u8]) -> Result<Hmac<Sha256>, WebhookError> {
    if secret.is_empty() {
        return Err(WebhookError::Signature);
    }
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).map_err(|_| WebhookError::Signature)?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    Ok(mac)
}

/// Checks the HMAC-SHA256 signature of a webhook payload.
pub fn verify_signature(
    payload: &[u8],
    header: &str,
    secret: &str,
    now_secs: i64,
) -> Result<(), WebhookError> {
    let SignatureHeader {
        timestamp,
        signatures,
    } = parse_signature_header(header)?;
    let mac = hmac_for(secret, timestamp, payload)?;
    let valid = signatures
        .iter()
        .filter_map(|sig| hex::decode(sig).ok())
        .any(|sig| mac.clone().verify_slice(&sig).is_ok());
    if !valid {
        return Err(WebhookError::Signature);
    }
    if (now_secs - timestamp).abs() > WEBHOOK_TOLERANCE_SECS {
        return Err(WebhookError::Timestamp);
    }
    Ok(())
}

/// Creates a `Stripe-Signature` header value for the payload.
pub fn sign_payload(payload: &[u8], secret: &str, timestamp: i64) -> String {
    let signature = hmac_for(secret, timestamp, payload)
        .map(|mac| hex::encode(mac.finalize().into_bytes()))
        .unwrap_or_default();
    format!("t={timestamp},v1={signature}")
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    event_type: String,
    data: Option<RawEventData>,
}

#[derive(Deserialize)]
struct RawEventData {
    object: serde_json::Value,
}

fn parse_event(payload: &[u8]) -> Result<WebhookEvent, WebhookError> {
    let RawEvent { event_type, data } =
        serde_json::from_slice(payload).map_err(|err| WebhookError::Payload(err.to_string()))?;
    let object_id = data
        .and_then(|d| d.object.get("id").and_then(|id| id.as_str()).map(ToOwned::to_owned));
    Ok(WebhookEvent {
        event_type,
        object_id,
    })
}
