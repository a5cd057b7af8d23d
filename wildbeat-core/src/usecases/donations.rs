use super::{not_found_as, prelude::*};
use crate::util::validate;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct RecordDonation {
    pub donation_type_id : Option<Id>,
    pub name             : Option<String>,
    pub email            : Option<String>,
    pub amount           : f64,
    pub payment_method   : Option<String>,
    pub transaction_id   : Option<String>,
    pub status           : Option<String>,
    pub message          : Option<String>,
}

/// Stores a donation that has been paid through Stripe Elements.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct ConfirmDonation {
    pub payment_intent_id : Option<String>,
    pub donation_type_id  : Option<Id>,
    pub name              : Option<String>,
    pub email             : Option<String>,
    pub message           : Option<String>,
    pub payment_method    : Option<String>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

fn create_donation<R: DonationRepo>(repo: &R, donation: &NewDonation) -> Result<Donation> {
    let id = repo.create_donation(donation)?;
    log::info!(
        "Recorded donation {id} of {:.2} via {} ({})",
        donation.amount,
        donation.payment_method,
        donation.status
    );
    Ok(repo.get_donation(id)?)
}

pub fn record_donation<R>(repo: &R, d: RecordDonation) -> Result<Donation>
where
    R: DonationTypeRepo + DonationRepo,
{
    if !(d.amount.is_finite() && d.amount > 0.0) {
        return Err(Error::Amount);
    }
    let status = match non_empty(d.status) {
        Some(s) => s
            .to_lowercase()
            .parse::<DonationStatus>()
            .map_err(|_| Error::DonationStatus)?,
        None => DonationStatus::default(),
    };
    let email = non_empty(d.email);
    if let Some(email) = &email {
        if !validate::is_valid_email(email) {
            return Err(Error::EmailAddress);
        }
    }
    if let Some(id) = d.donation_type_id {
        repo.get_donation_type(id)
            .map_err(|err| not_found_as(err, Error::DonationTypeNotFound))?;
    }
    let new_donation = NewDonation {
        donation_type_id: d.donation_type_id,
        name: non_empty(d.name),
        email,
        amount: d.amount,
        payment_method: non_empty(d.payment_method)
            .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_owned()),
        transaction_id: non_empty(d.transaction_id),
        status,
        message: non_empty(d.message),
    };
    create_donation(repo, &new_donation)
}

pub fn confirm_donation<R>(repo: &R, c: ConfirmDonation) -> Result<Donation>
where
    R: DonationTypeRepo + DonationRepo,
{
    let (Some(payment_intent_id), Some(donation_type_id), Some(name), Some(email)) = (
        non_empty(c.payment_intent_id),
        c.donation_type_id,
        non_empty(c.name),
        non_empty(c.email),
    ) else {
        return Err(Error::MissingFields);
    };
    let donation_type = repo
        .get_donation_type(donation_type_id)
        .map_err(|err| not_found_as(err, Error::DonationTypeNotFound))?;
    let new_donation = NewDonation {
        donation_type_id: Some(donation_type.id),
        name: Some(name),
        email: Some(email),
        amount: donation_type.amount,
        payment_method: non_empty(c.payment_method)
            .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_owned()),
        transaction_id: Some(payment_intent_id),
        status: DonationStatus::Completed,
        message: non_empty(c.message),
    };
    create_donation(repo, &new_donation)
}

/// Marks the donation of a successful payment as completed.
///
/// Returns the donation only if its status has been changed, i.e.
/// `None` if no donation has been recorded for the transaction or
/// if it has already been completed before.
pub fn complete_donation_by_transaction<R: DonationRepo>(
    repo: &R,
    transaction_id: &str,
) -> Result<Option<Donation>> {
    let donation = match repo.get_donation_by_transaction_id(transaction_id) {
        Ok(donation) => donation,
        Err(crate::repositories::Error::NotFound) => {
            log::info!("No donation recorded for transaction {transaction_id}");
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    if donation.status == DonationStatus::Completed {
        log::debug!("Donation {} has already been completed", donation.id);
        return Ok(None);
    }
    repo.update_donation_status(donation.id, DonationStatus::Completed)?;
    log::info!("Completed donation {} ({transaction_id})", donation.id);
    Ok(Some(repo.get_donation(donation.id)?))
}

pub fn all_donations<R>(repo: &R) -> Result<Vec<DonationWithType>>
where
    R: DonationTypeRepo + DonationRepo,
{
    let types = repo.all_donation_types()?;
    let donations = repo
        .all_donations_newest_first()?
        .into_iter()
        .map(|donation| {
            let donation_type = donation
                .donation_type_id
                .and_then(|id| types.iter().find(|t| t.id == id));
            DonationWithType {
                type_title: donation_type.map(|t| t.title.clone()),
                type_amount: donation_type.map(|t| t.amount),
                donation,
            }
        })
        .collect();
    Ok(donations)
}

/// Count and sum of completed donations per donation type.
pub fn donation_stats<R>(repo: &R) -> Result<Vec<DonationTypeStats>>
where
    R: DonationTypeRepo + DonationRepo,
{
    let completed = repo.completed_donations()?;
    let stats = repo
        .all_donation_types()?
        .into_iter()
        .map(|t| {
            let (count, total) = completed
                .iter()
                .filter(|d| d.donation_type_id == Some(t.id))
                .fold((0, 0.0), |(count, total), d| (count + 1, total + d.amount));
            DonationTypeStats {
                donation_type_id: t.id,
                title: t.title,
                type_amount: t.amount,
                count,
                total,
            }
        })
        .collect();
    Ok(stats)
}
