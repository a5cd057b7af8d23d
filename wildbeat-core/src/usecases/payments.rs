use super::{not_found_as, prelude::*};
use crate::{gateways::payment::*, util::validate::normalize_kenyan_phone};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct InitiatePayment {
    pub method_id        : Id,
    pub donation_type_id : Option<Id>,
    pub amount           : f64,
    pub currency         : Option<String>,
    pub name             : String,
    pub email            : String,
    pub phone            : Option<String>,
    pub message          : Option<String>,
    pub return_url       : Option<String>,
}

/// What the donor has to do next to complete the payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentInitiation {
    Stripe {
        client_secret: String,
        reference: String,
    },
    Redirect {
        link: String,
        reference: String,
    },
    Mpesa {
        reference: String,
        message: String,
    },
    Manual {
        reference: String,
        instructions: String,
    },
}

impl PaymentInitiation {
    pub fn reference(&self) -> &str {
        match self {
            Self::Stripe { reference, .. }
            | Self::Redirect { reference, .. }
            | Self::Mpesa { reference, .. }
            | Self::Manual { reference, .. } => reference,
        }
    }
}

const PAYMENT_TITLE: &str = "Wildbeat Safari";
const MANUAL_INSTRUCTIONS: &str = "Our team will contact you with the payment details.";

fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

/// Checks the request and loads the selected payment method.
pub fn payment_method_for_initiation<R: SupportRepo>(
    repo: &R,
    req: &InitiatePayment,
) -> Result<PaymentMethod> {
    if !is_valid_amount(req.amount) {
        return Err(Error::Amount);
    }
    if req.name.trim().is_empty() || req.email.trim().is_empty() {
        return Err(Error::MissingFields);
    }
    let method = repo
        .get_payment_method(req.method_id)
        .map_err(|err| not_found_as(err, Error::PaymentMethodNotFound))?;
    if !method.is_active {
        return Err(Error::PaymentMethodNotFound);
    }
    Ok(method)
}

/// Dispatches the payment to the provider of the payment method.
pub fn initiate_payment(
    gateways: &PaymentGateways,
    method: &PaymentMethod,
    req: &InitiatePayment,
) -> Result<PaymentInitiation> {
    let currency = req
        .currency
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(&method.currency)
        .to_uppercase();
    log::debug!(
        "Initiating payment of {:.2} {currency} via {}",
        req.amount,
        method.integration_key
    );
    match &method.integration_key {
        IntegrationKey::Stripe => {
            let stripe = gateways
                .stripe
                .as_ref()
                .ok_or(Error::PaymentProviderNotConfigured("stripe"))?;
            let mut metadata = vec![
                ("donor_name".to_owned(), req.name.clone()),
                ("donor_email".to_owned(), req.email.clone()),
                ("payment_method_id".to_owned(), method.id.to_string()),
            ];
            if let Some(id) = req.donation_type_id {
                metadata.push(("donation_type_id".to_owned(), id.to_string()));
            }
            let intent = stripe.create_payment_intent(&PaymentIntentRequest {
                amount: req.amount,
                currency,
                description: Some(format!("{PAYMENT_TITLE} donation")),
                receipt_email: Some(req.email.clone()),
                metadata,
            })?;
            Ok(PaymentInitiation::Stripe {
                client_secret: intent.client_secret,
                reference: intent.id,
            })
        }
        IntegrationKey::Flutterwave => {
            let flutterwave = gateways
                .flutterwave
                .as_ref()
                .ok_or(Error::PaymentProviderNotConfigured("flutterwave"))?;
            let tx_ref = format!("wildbeat-{}", Nonce::new());
            let link = flutterwave.create_checkout(&CheckoutRequest {
                tx_ref: tx_ref.clone(),
                amount: req.amount,
                currency,
                redirect_url: req.return_url.clone(),
                customer_name: req.name.clone(),
                customer_email: req.email.clone(),
                customer_phone: req.phone.clone(),
                title: PAYMENT_TITLE.to_owned(),
            })?;
            Ok(PaymentInitiation::Redirect {
                link,
                reference: tx_ref,
            })
        }
        IntegrationKey::Mpesa => {
            let phone = req
                .phone
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .ok_or(Error::MpesaPhone)?;
            let phone = normalize_kenyan_phone(phone).ok_or(Error::Phone)?;
            // STK pushes are charged in whole shillings
            if req.amount < 1.0 {
                return Err(Error::Amount);
            }
            let mpesa = gateways
                .mpesa
                .as_ref()
                .ok_or(Error::PaymentProviderNotConfigured("mpesa"))?;
            let res = mpesa.stk_push(&StkPushRequest {
                phone,
                amount: req.amount,
                account_reference: "WildbeatSafari".to_owned(),
                description: format!("{PAYMENT_TITLE} donation"),
            })?;
            Ok(PaymentInitiation::Mpesa {
                reference: res.checkout_request_id,
                message: res.customer_message,
            })
        }
        IntegrationKey::Manual(key) => Ok(PaymentInitiation::Manual {
            reference: format!("{key}-{}", Nonce::new()),
            instructions: manual_instructions(method),
        }),
    }
}

/// The instructions for offline payments, taken from the
/// `payment_options` of the method's config or its description.
pub fn manual_instructions(method: &PaymentMethod) -> String {
    serde_json::from_str::<serde_json::Value>(&method.config)
        .ok()
        .and_then(|config| {
            config
                .get("payment_options")
                .and_then(|v| v.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToOwned::to_owned)
        })
        .or_else(|| method.description.clone())
        .unwrap_or_else(|| MANUAL_INSTRUCTIONS.to_owned())
}

/// Payment intent for a donation that is confirmed afterwards.
pub fn create_donation_payment_intent(
    gateways: &PaymentGateways,
    amount: f64,
    donation_type_id: Option<Id>,
    description: Option<String>,
) -> Result<PaymentIntent> {
    if !is_valid_amount(amount) {
        return Err(Error::Amount);
    }
    let stripe = gateways
        .stripe
        .as_ref()
        .ok_or(Error::PaymentProviderNotConfigured("stripe"))?;
    let donation_type = donation_type_id
        .map(|id| id.to_string())
        .unwrap_or_default();
    let description = description
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| format!("{PAYMENT_TITLE} - {donation_type}"));
    let intent = stripe.create_payment_intent(&PaymentIntentRequest {
        amount,
        currency: "usd".to_owned(),
        description: Some(description),
        receipt_email: None,
        metadata: vec![("donation_type_id".to_owned(), donation_type)],
    })?;
    Ok(intent)
}

/// Payment intent for a custom amount with a receipt for the donor.
pub fn create_donor_payment_intent(
    gateways: &PaymentGateways,
    amount: f64,
    name: Option<String>,
    email: Option<String>,
) -> Result<PaymentIntent> {
    if !(is_valid_amount(amount) && amount >= 1.0) {
        return Err(Error::Amount);
    }
    let stripe = gateways
        .stripe
        .as_ref()
        .ok_or(Error::PaymentProviderNotConfigured("stripe"))?;
    let intent = stripe.create_payment_intent(&PaymentIntentRequest {
        amount,
        currency: "usd".to_owned(),
        description: None,
        receipt_email: email.clone(),
        metadata: vec![
            ("donor_name".to_owned(), name.unwrap_or_default()),
            ("donor_email".to_owned(), email.unwrap_or_default()),
        ],
    })?;
    Ok(intent)
}
