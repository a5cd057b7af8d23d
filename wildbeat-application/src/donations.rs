use super::*;
use gateways::notify::{NotificationEvent, NotificationGateway};

fn notify_if_completed(notify: &dyn NotificationGateway, donation: &Donation) {
    if donation.status == DonationStatus::Completed {
        notify.notify(NotificationEvent::DonationReceived { donation });
    }
}

pub fn record_donation(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    donation: usecases::RecordDonation,
) -> Result<Donation> {
    let donation = connections
        .exclusive()?
        .transaction(|conn| usecases::record_donation(conn, donation))?;
    notify_if_completed(notify, &donation);
    Ok(donation)
}

/// Stores a donation after the payment has been completed by the donor.
pub fn confirm_donation(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    confirmation: usecases::ConfirmDonation,
) -> Result<Donation> {
    let donation = connections.exclusive()?.transaction(|conn| {
        usecases::confirm_donation(conn, confirmation).map_err(|err| {
            warn!("Failed to confirm donation: {err}");
            err
        })
    })?;
    notify_if_completed(notify, &donation);
    Ok(donation)
}
