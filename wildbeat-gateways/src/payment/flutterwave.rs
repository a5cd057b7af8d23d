use serde::{Deserialize, Serialize};
use wildbeat_core::gateways::payment::{CheckoutRequest, FlutterwaveGateway, PaymentError};

use super::{decode_response, http_client, transport_error};

pub const FLUTTERWAVE_API_BASE_URL: &str = "https://api.flutterwave.com";

#[derive(Debug, Clone)]
pub struct Flutterwave {
    pub secret_key: String,
    pub api_base_url: String,
    /// Used when the donor did not provide a return URL.
    pub default_redirect_url: Option<String>,
}

#[derive(Serialize)]
struct Customer<'a> {
    email: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    phonenumber: Option<&'a str>,
}

#[derive(Serialize)]
struct Customizations<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct PaymentRequest<'a> {
    tx_ref: &'a str,
    amount: f64,
    currency: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_url: Option<&'a str>,
    customer: Customer<'a>,
    customizations: Customizations<'a>,
}

impl Flutterwave {
    fn payment_request<'a>(&'a self, req: &'a CheckoutRequest) -> PaymentRequest<'a> {
        PaymentRequest {
            tx_ref: &req.tx_ref,
            amount: req.amount,
            currency: &req.currency,
            redirect_url: req
                .redirect_url
                .as_deref()
                .or(self.default_redirect_url.as_deref()),
            customer: Customer {
                email: &req.customer_email,
                name: &req.customer_name,
                phonenumber: req.customer_phone.as_deref(),
            },
            customizations: Customizations { title: &req.title },
        }
    }
}

#[derive(Deserialize)]
struct PaymentResponse {
    status: String,
    message: Option<String>,
    data: Option<PaymentLink>,
}

#[derive(Deserialize)]
struct PaymentLink {
    link: String,
}

impl FlutterwaveGateway for Flutterwave {
    fn create_checkout(&self, request: &CheckoutRequest) -> Result<String, PaymentError> {
        let url = format!("{}/v3/payments", self.api_base_url.trim_end_matches('/'));
        let response = http_client()
            .post(url)
            .bearer_auth(&self.secret_key)
            .json(&self.payment_request(request))
            .send()
            .map_err(|err| transport_error("Flutterwave", err))?;
        let PaymentResponse {
            status,
            message,
            data,
        } = decode_response("Flutterwave", response, |body| {
            body.get("message")
                .and_then(|m| m.as_str())
                .map(ToOwned::to_owned)
        })?;
        match data {
            Some(PaymentLink { link }) if status == "success" => Ok(link),
            _ => Err(PaymentError::Provider(
                message.unwrap_or_else(|| "Unable to create Flutterwave checkout".to_owned()),
            )),
        }
    }
}
