use super::{not_found_as, prelude::*};
use crate::util::validate::Validate;

/// Creates a donation type or updates an existing one if an id is given.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct StoreDonationType {
    pub id          : Option<Id>,
    pub title       : String,
    pub amount      : f64,
    pub description : Option<String>,
    pub icon_color  : Option<String>,
    pub benefits    : Vec<String>,
    pub is_active   : Option<bool>,
    pub sort_order  : Option<i32>,
}

pub fn active_donation_types<R: DonationTypeRepo>(repo: &R) -> Result<Vec<DonationType>> {
    Ok(repo.active_donation_types()?)
}

pub fn all_donation_types<R: DonationTypeRepo>(repo: &R) -> Result<Vec<DonationType>> {
    Ok(repo.all_donation_types()?)
}

pub fn store_donation_type<R: DonationTypeRepo>(repo: &R, s: StoreDonationType) -> Result<Id> {
    let benefits = s
        .benefits
        .iter()
        .map(|b| b.trim().to_owned())
        .filter(|b| !b.is_empty())
        .collect();
    let mut donation_type = NewDonationType {
        title: s.title.trim().to_owned(),
        amount: s.amount,
        description: s.description,
        icon_color: s.icon_color,
        benefits,
        is_active: true,
        sort_order: s.sort_order.unwrap_or_default(),
    };
    donation_type.validate()?;
    match s.id {
        Some(id) => {
            let existing = repo
                .get_donation_type(id)
                .map_err(|err| not_found_as(err, Error::DonationTypeNotFound))?;
            donation_type.is_active = s.is_active.unwrap_or(existing.is_active);
            donation_type.sort_order = s.sort_order.unwrap_or(existing.sort_order);
            repo.update_donation_type(id, &donation_type)?;
            log::info!("Updated donation type {id}");
            Ok(id)
        }
        None => {
            let id = repo.create_donation_type(&donation_type)?;
            log::info!("Created donation type {id}");
            Ok(id)
        }
    }
}

pub fn deactivate_donation_type<R: DonationTypeRepo>(repo: &R, id: Id) -> Result<()> {
    repo.deactivate_donation_type(id)
        .map_err(|err| not_found_as(err, Error::DonationTypeNotFound))
}
