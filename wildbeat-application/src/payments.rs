use super::*;
use gateways::{
    notify::{NotificationEvent, NotificationGateway},
    payment::{PaymentGateways, WebhookEvent},
};

/// Forwards a payment to the provider of the selected method.
///
/// The database lock is released before the provider is contacted.
pub fn initiate_payment(
    connections: &sqlite::Connections,
    gateways: &PaymentGateways,
    req: usecases::InitiatePayment,
) -> Result<usecases::PaymentInitiation> {
    let method = {
        let db = connections.shared()?;
        usecases::payment_method_for_initiation(&db, &req)?
    };
    let initiation = usecases::initiate_payment(gateways, &method, &req).map_err(|err| {
        warn!(
            "Failed to initiate payment via {}: {err}",
            method.integration_key
        );
        err
    })?;
    info!(
        "Initiated payment {} via {}",
        initiation.reference(),
        method.integration_key
    );
    Ok(initiation)
}

/// Verifies and processes an event pushed by Stripe.
pub fn handle_stripe_webhook(
    connections: &sqlite::Connections,
    gateways: &PaymentGateways,
    notify: &dyn NotificationGateway,
    payload: &[u8],
    signature_header: &str,
) -> Result<WebhookEvent> {
    let stripe = gateways
        .stripe
        .as_ref()
        .ok_or(usecases::Error::PaymentProviderNotConfigured("stripe"))?;
    let event = stripe
        .verify_webhook(payload, signature_header)
        .map_err(|err| {
            warn!("Rejected Stripe webhook: {err}");
            err
        })?;
    debug!("Received Stripe event {}", event.event_type);
    if event.event_type != WebhookEvent::PAYMENT_INTENT_SUCCEEDED {
        return Ok(event);
    }
    let Some(payment_intent_id) = event.object_id.as_deref() else {
        warn!("Stripe event {} without object id", event.event_type);
        return Ok(event);
    };
    info!("Payment succeeded: {payment_intent_id}");
    let completed = connections.exclusive()?.transaction(|conn| {
        usecases::complete_donation_by_transaction(conn, payment_intent_id)
    })?;
    if let Some(donation) = completed {
        notify.notify(NotificationEvent::DonationReceived {
            donation: &donation,
        });
    }
    Ok(event)
}
