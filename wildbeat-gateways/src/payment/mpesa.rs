use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use time::{macros::format_description, OffsetDateTime, UtcOffset};
use wildbeat_core::{
    gateways::payment::{MpesaGateway, PaymentError, StkPushRequest, StkPushResponse},
    util::validate::normalize_kenyan_phone,
};

use super::{decode_response, http_client, transport_error};

pub const MPESA_SANDBOX_BASE_URL: &str = "https://sandbox.safaricom.co.ke";

/// Daraja timestamps are given in East Africa Time.
const EAT_OFFSET_HOURS: i8 = 3;

#[derive(Debug, Clone)]
pub struct Mpesa {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub short_code: String,
    pub passkey: String,
    pub callback_url: String,
    pub api_base_url: String,
}

fn mpesa_error(body: &serde_json::Value) -> Option<String> {
    ["errorMessage", "ResponseDescription", "error_description"]
        .into_iter()
        .find_map(|key| body.get(key).and_then(|m| m.as_str()))
        .map(ToOwned::to_owned)
}

fn timestamp(now: OffsetDateTime) -> String {
    let offset = UtcOffset::from_hms(EAT_OFFSET_HOURS, 0, 0).unwrap_or(UtcOffset::UTC);
    now.to_offset(offset)
        .format(format_description!(
            "[year][month][day][hour][minute][second]"
        ))
        .unwrap_or_default()
}

fn password(short_code: &str, passkey: &str, timestamp: &str) -> String {
    BASE64.encode(format!("{short_code}{passkey}{timestamp}"))
}

#[derive(Deserialize)]
struct AccessToken {
    access_token: String,
}

#[rustfmt::skip]
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct StkPush<'a> {
    business_short_code : &'a str,
    password            : String,
    timestamp           : String,
    transaction_type    : &'static str,
    amount              : i64,
    party_a             : &'a str,
    party_b             : &'a str,
    phone_number        : &'a str,
    #[serde(rename = "CallBackURL")]
    callback_url        : &'a str,
    account_reference   : &'a str,
    transaction_desc    : &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct StkPushResult {
    #[serde(rename = "CheckoutRequestID")]
    checkout_request_id: String,
    customer_message: Option<String>,
    response_code: Option<String>,
    response_description: Option<String>,
}

impl Mpesa {
    fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    fn access_token(&self) -> Result<String, PaymentError> {
        let url = format!(
            "{}/oauth/v1/generate?grant_type=client_credentials",
            self.base_url()
        );
        let response = http_client()
            .get(url)
            .basic_auth(&self.consumer_key, Some(&self.consumer_secret))
            .send()
            .map_err(|err| transport_error("M-Pesa", err))?;
        let AccessToken { access_token } = decode_response("M-Pesa", response, mpesa_error)?;
        Ok(access_token)
    }

    fn stk_push_body<'a>(
        &'a self,
        req: &'a StkPushRequest,
        phone: &'a str,
        now: OffsetDateTime,
    ) -> StkPush<'a> {
        let timestamp = timestamp(now);
        StkPush {
            business_short_code: &self.short_code,
            password: password(&self.short_code, &self.passkey, &timestamp),
            timestamp,
            transaction_type: "CustomerPayBillOnline",
            amount: req.amount.round() as i64,
            party_a: phone,
            party_b: &self.short_code,
            phone_number: phone,
            callback_url: &self.callback_url,
            account_reference: &req.account_reference,
            transaction_desc: &req.description,
        }
    }
}

impl MpesaGateway for Mpesa {
    fn stk_push(&self, request: &StkPushRequest) -> Result<StkPushResponse, PaymentError> {
        let phone = normalize_kenyan_phone(&request.phone)
            .ok_or_else(|| PaymentError::Provider("Invalid phone number".to_owned()))?;
        let token = self.access_token()?;
        let url = format!("{}/mpesa/stkpush/v1/processrequest", self.base_url());
        let response = http_client()
            .post(url)
            .bearer_auth(token)
            .json(&self.stk_push_body(request, &phone, OffsetDateTime::now_utc()))
            .send()
            .map_err(|err| transport_error("M-Pesa", err))?;
        let StkPushResult {
            checkout_request_id,
            customer_message,
            response_code,
            response_description,
        } = decode_response("M-Pesa", response, mpesa_error)?;
        if response_code.as_deref().is_some_and(|code| code != "0") {
            return Err(PaymentError::Provider(
                response_description.unwrap_or_else(|| "STK push rejected".to_owned()),
            ));
        }
        Ok(StkPushResponse {
            checkout_request_id,
            customer_message: customer_message
                .unwrap_or_else(|| "Check your phone to complete the payment".to_owned()),
        })
    }
}
