use rocket::{
    data::{Data, ToByteUnit},
    tokio::task::spawn_blocking,
};

use super::*;

const MAX_WEBHOOK_PAYLOAD_MIB: usize = 1;

#[post("/create-payment-intent", data = "<intent>")]
pub async fn post_create_payment_intent(
    gateways: &State<PaymentGateways>,
    intent: JsonResult<'_, json::CreatePaymentIntent>,
) -> Result<json::PaymentIntentCreated> {
    let json::CreatePaymentIntent {
        amount,
        donation_type_id,
        description,
    } = intent?.into_inner();
    let gateways = gateways.inner().clone();
    let intent = spawn_blocking(move || {
        usecases::create_donation_payment_intent(
            &gateways,
            amount.unwrap_or_default(),
            donation_type_id,
            description,
        )
    })
    .await??;
    Ok(Json(json::PaymentIntentCreated {
        client_secret: intent.client_secret,
        payment_intent_id: intent.id,
    }))
}

#[post("/payments/create-intent", data = "<intent>")]
pub async fn post_create_donor_payment_intent(
    gateways: &State<PaymentGateways>,
    intent: JsonResult<'_, json::CreateDonorPaymentIntent>,
) -> Result<json::ClientSecret> {
    let json::CreateDonorPaymentIntent {
        amount,
        email,
        name,
    } = intent?.into_inner();
    let gateways = gateways.inner().clone();
    let intent = spawn_blocking(move || {
        usecases::create_donor_payment_intent(&gateways, amount.unwrap_or_default(), name, email)
    })
    .await??;
    Ok(Json(json::ClientSecret {
        client_secret: intent.client_secret,
    }))
}

#[post("/payments/webhook", data = "<payload>")]
pub async fn post_webhook(
    db: &State<Connections>,
    gateways: &State<PaymentGateways>,
    notify: &State<Notify>,
    signature: StripeSignature,
    payload: Data<'_>,
) -> Result<json::WebhookReceived> {
    let payload = payload
        .open(MAX_WEBHOOK_PAYLOAD_MIB.mebibytes())
        .into_bytes()
        .await?;
    if !payload.is_complete() {
        return Err(ApiError::OtherWithStatus(
            anyhow::anyhow!("Webhook payload too large"),
            Status::PayloadTooLarge,
        ));
    }
    let payload = payload.into_inner();
    let db = db.inner().clone();
    let gateways = gateways.inner().clone();
    let notify = notify.0.clone();
    spawn_blocking(move || {
        flows::handle_stripe_webhook(&db, &gateways, &*notify, &payload, &signature.0)
    })
    .await??;
    Ok(Json(json::WebhookReceived { received: true }))
}

#[post("/payments/initiate", data = "<payment>")]
pub async fn post_initiate_payment(
    db: &State<Connections>,
    gateways: &State<PaymentGateways>,
    payment: JsonResult<'_, json::InitiatePayment>,
) -> Result<json::PaymentInitiation> {
    let payment = from_json::try_initiate_payment(payment?.into_inner())?;
    let db = db.inner().clone();
    let gateways = gateways.inner().clone();
    let initiation =
        spawn_blocking(move || flows::initiate_payment(&db, &gateways, payment)).await??;
    Ok(Json(to_json::payment_initiation(initiation)))
}
