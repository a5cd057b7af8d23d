use std::{collections::HashSet, sync::Arc};

use anyhow::Result;
use wildbeat_core::gateways::{
    email::EmailGateway,
    notify::NotificationType,
    payment::{FlutterwaveGateway, MpesaGateway, PaymentGateways, StripeGateway},
};
use wildbeat_entities::email::{EmailAddress, EmailContent};
use wildbeat_gateways::{
    email::{mailgun::Mailgun, send_to_json_file::SendToJsonFile},
    notify::Notify,
    payment::{Flutterwave, Mpesa, Stripe},
    sendmail::Sendmail,
};

use crate::config;

const ALL_NOTIFICATION_TYPES: [NotificationType; 3] = [
    NotificationType::ReviewSubmitted,
    NotificationType::BookingCreated,
    NotificationType::DonationReceived,
];

pub fn notification_gateway(
    gateway: Option<config::EmailGateway>,
    admin_email: Option<EmailAddress>,
) -> Result<Notify> {
    let notify_on: HashSet<_> = ALL_NOTIFICATION_TYPES.into_iter().collect();
    let admin_emails: Vec<_> = admin_email.into_iter().collect();
    if admin_emails.is_empty() {
        log::warn!("No admin e-mail address configured: the team will not be notified");
    }
    let notify = match gateway {
        Some(config::EmailGateway::MailGun {
            api_url,
            api_key,
            domain,
            sender_address,
        }) => {
            let gw = Mailgun {
                api_key,
                api_base_url: api_url,
                domain,
                from_email: sender_address,
            };
            Notify::new(gw, notify_on, admin_emails)
        }
        Some(config::EmailGateway::Sendmail { sender_address }) => {
            Notify::new(Sendmail::new(sender_address), notify_on, admin_emails)
        }
        Some(config::EmailGateway::EmailToJsonFile { dir }) => {
            let gw = SendToJsonFile::try_new(&dir)?;
            Notify::new(gw, notify_on, admin_emails)
        }
        None => {
            log::warn!("No eMail gateway was configured");
            Notify::new(DummyMailGw, notify_on, admin_emails)
        }
    };
    Ok(notify)
}

pub fn payment_gateways(cfg: config::Payments) -> PaymentGateways {
    let config::Payments {
        stripe,
        flutterwave,
        mpesa,
    } = cfg;

    let stripe = stripe.map(|cfg| -> Arc<dyn StripeGateway + Send + Sync> {
        let config::Stripe {
            secret_key,
            webhook_secret,
        } = cfg;
        if webhook_secret.is_empty() {
            log::warn!("No Stripe webhook secret configured: all webhook calls will be rejected");
        }
        log::info!("Use Stripe payment gateway");
        Arc::new(Stripe::new(secret_key, webhook_secret))
    });
    let flutterwave = flutterwave.map(|cfg| -> Arc<dyn FlutterwaveGateway + Send + Sync> {
        let config::Flutterwave {
            secret_key,
            api_base_url,
            redirect_url,
        } = cfg;
        log::info!("Use Flutterwave payment gateway");
        Arc::new(Flutterwave {
            secret_key,
            api_base_url,
            default_redirect_url: redirect_url,
        })
    });
    let mpesa = mpesa.map(|cfg| -> Arc<dyn MpesaGateway + Send + Sync> {
        let config::Mpesa {
            consumer_key,
            consumer_secret,
            short_code,
            passkey,
            callback_url,
            api_base_url,
        } = cfg;
        log::info!("Use M-Pesa payment gateway");
        Arc::new(Mpesa {
            consumer_key,
            consumer_secret,
            short_code,
            passkey,
            callback_url,
            api_base_url,
        })
    });

    PaymentGateways {
        stripe,
        flutterwave,
        mpesa,
    }
}

struct DummyMailGw;

impl EmailGateway for DummyMailGw {
    fn compose_and_send(&self, _recipients: &[EmailAddress], _email: &EmailContent) {
        log::debug!("Cannot send emails because no e-mail gateway was configured");
    }
}
