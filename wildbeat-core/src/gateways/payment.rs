//! Outbound payment provider integrations.

use std::{fmt, sync::Arc};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    /// The provider rejected the request or could not be reached.
    #[error("{0}")]
    Provider(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntentRequest {
    pub amount: f64,
    pub currency: String,
    pub description: Option<String>,
    pub receipt_email: Option<String>,
    pub metadata: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

/// A verified event that has been pushed by Stripe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEvent {
    pub event_type: String,
    /// Id of the object the event refers to, e.g. the payment intent.
    pub object_id: Option<String>,
}

impl WebhookEvent {
    pub const PAYMENT_INTENT_SUCCEEDED: &'static str = "payment_intent.succeeded";
}

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("No signatures found matching the expected signature for payload")]
    Signature,
    #[error("Timestamp outside the tolerance zone")]
    Timestamp,
    #[error("Unable to extract timestamp and signatures from header")]
    Header,
    #[error("Invalid payload: {0}")]
    Payload(String),
}

pub trait StripeGateway {
    fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<PaymentIntent, PaymentError>;

    fn verify_webhook(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<WebhookEvent, WebhookError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub tx_ref: String,
    pub amount: f64,
    pub currency: String,
    pub redirect_url: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub title: String,
}

pub trait FlutterwaveGateway {
    /// Creates a hosted checkout and returns the link the donor is sent to.
    fn create_checkout(&self, request: &CheckoutRequest) -> Result<String, PaymentError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct StkPushRequest {
    pub phone: String,
    pub amount: f64,
    pub account_reference: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StkPushResponse {
    pub checkout_request_id: String,
    pub customer_message: String,
}

pub trait MpesaGateway {
    fn stk_push(&self, request: &StkPushRequest) -> Result<StkPushResponse, PaymentError>;
}

/// The configured payment providers.
#[derive(Clone, Default)]
pub struct PaymentGateways {
    pub stripe: Option<Arc<dyn StripeGateway + Send + Sync>>,
    pub flutterwave: Option<Arc<dyn FlutterwaveGateway + Send + Sync>>,
    pub mpesa: Option<Arc<dyn MpesaGateway + Send + Sync>>,
}

impl fmt::Debug for PaymentGateways {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentGateways")
            .field("stripe", &self.stripe.is_some())
            .field("flutterwave", &self.flutterwave.is_some())
            .field("mpesa", &self.mpesa.is_some())
            .finish()
    }
}

/// Converts an amount into the smallest unit of its currency.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
