use std::{collections::HashSet, sync::Arc};

use wildbeat_core::gateways::notify::{NotificationEvent, NotificationGateway, NotificationType};
use wildbeat_entities::email::*;

use crate::{email::EmailGateway, user_communication};

/// Sends notifications by e-mail to the guests and the team.
#[derive(Clone)]
pub struct Notify {
    email_gw: Arc<dyn EmailGateway + Send + Sync + 'static>,
    notify_on: HashSet<NotificationType>,
    admin_emails: Vec<EmailAddress>,
}

impl Notify {
    pub fn new<G>(gw: G, notify_on: HashSet<NotificationType>, admin_emails: Vec<EmailAddress>) -> Self
    where
        G: EmailGateway + Send + Sync + 'static,
    {
        Self {
            email_gw: Arc::new(gw),
            notify_on,
            admin_emails,
        }
    }

    fn skip(&self, ev: &NotificationEvent) -> bool {
        !self.notify_on.contains(&ev.kind())
    }

    fn send_to_admins(&self, content: &EmailContent) {
        if self.admin_emails.is_empty() {
            log::debug!("No admin e-mail addresses configured");
            return;
        }
        self.email_gw.compose_and_send(&self.admin_emails, content);
    }
}

impl NotificationGateway for Notify {
    fn notify(&self, event: NotificationEvent) {
        use NotificationEvent as E;
        if self.skip(&event) {
            return;
        }
        match event {
            E::BookingCreated { booking, tour } => {
                log::info!("Sending e-mails after new booking {} created", booking.id);
                match user_communication::booking_received_email(booking, tour) {
                    Ok(content) => self
                        .email_gw
                        .compose_and_send(&[booking.email.clone()], &content),
                    Err(err) => log::warn!("Unable to render booking confirmation: {err}"),
                }
                match user_communication::new_booking_email(booking, tour) {
                    Ok(content) => self.send_to_admins(&content),
                    Err(err) => log::warn!("Unable to render booking notification: {err}"),
                }
            }
            E::ReviewSubmitted {
                review,
                approval_url,
            } => {
                log::info!("Sending e-mails after review {} submitted", review.id);
                match user_communication::review_submitted_email(review, approval_url) {
                    Ok(content) => self.send_to_admins(&content),
                    Err(err) => log::warn!("Unable to render review notification: {err}"),
                }
            }
            E::DonationReceived { donation } => {
                log::info!("Sending e-mails after donation {} received", donation.id);
                let donor = donation
                    .email
                    .as_deref()
                    .and_then(|email| email.parse::<EmailAddress>().ok());
                if let Some(donor) = donor {
                    match user_communication::donation_thanks_email(donation) {
                        Ok(content) => self.email_gw.compose_and_send(&[donor], &content),
                        Err(err) => log::warn!("Unable to render donation thanks: {err}"),
                    }
                }
                self.send_to_admins(&user_communication::donation_received_email(donation));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use wildbeat_entities::{donation::*, time::Timestamp};

    #[derive(Default, Clone)]
    struct Outbox(Arc<Mutex<Vec<(Vec<EmailAddress>, EmailContent)>>>);

    impl EmailGateway for Outbox {
        fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent) {
            self.0
                .lock()
                .unwrap()
                .push((recipients.to_vec(), email.clone()));
        }
    }

    fn donation(email: Option<&str>) -> Donation {
        Donation {
            id: 1,
            donation_type_id: None,
            name: Some("Jane".into()),
            email: email.map(Into::into),
            amount: 50.0,
            payment_method: "stripe".into(),
            transaction_id: None,
            status: DonationStatus::Completed,
            message: None,
            created_at: Timestamp::from_millis(0),
        }
    }

    fn admin() -> EmailAddress {
        EmailAddress::new_unchecked("admin@wildbeatsafari.com".into())
    }

    #[test]
    fn thank_donor_and_inform_admins() {
        let outbox = Outbox::default();
        let notify = Notify::new(
            outbox.clone(),
            [NotificationType::DonationReceived].into_iter().collect(),
            vec![admin()],
        );
        let d = donation(Some("jane@example.com"));
        notify.notify(NotificationEvent::DonationReceived { donation: &d });
        let sent = outbox.0.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].0[0].as_str(), "jane@example.com");
        assert_eq!(sent[1].0, vec![admin()]);
    }

    #[test]
    fn skip_disabled_notifications() {
        let outbox = Outbox::default();
        let notify = Notify::new(outbox.clone(), HashSet::new(), vec![admin()]);
        let d = donation(None);
        notify.notify(NotificationEvent::DonationReceived { donation: &d });
        assert!(outbox.0.lock().unwrap().is_empty());
    }

    #[test]
    fn anonymous_donation_only_informs_admins() {
        let outbox = Outbox::default();
        let notify = Notify::new(
            outbox.clone(),
            [NotificationType::DonationReceived].into_iter().collect(),
            vec![admin()],
        );
        let d = donation(Some("not an address"));
        notify.notify(NotificationEvent::DonationReceived { donation: &d });
        assert_eq!(outbox.0.lock().unwrap().len(), 1);
    }
}
