use strum::{Display, EnumString, IntoStaticStr};

use crate::{id::Id, time::Timestamp};

/// Payment method that is assumed when a donation does not name one.
pub const DEFAULT_PAYMENT_METHOD: &str = "stripe";

/// A support tier with a fixed amount, e.g. "Guardian" for 100 USD.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct DonationType {
    pub id          : Id,
    pub title       : String,
    pub amount      : f64,
    pub description : Option<String>,
    pub icon_color  : Option<String>,
    pub benefits    : Vec<String>,
    pub is_active   : bool,
    pub sort_order  : i32,
    pub created_at  : Timestamp,
    pub updated_at  : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct NewDonationType {
    pub title       : String,
    pub amount      : f64,
    pub description : Option<String>,
    pub icon_color  : Option<String>,
    pub benefits    : Vec<String>,
    pub is_active   : bool,
    pub sort_order  : i32,
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum DonationStatus {
    Pending,
    Processing,
    #[default]
    Completed,
    Failed,
}

impl DonationStatus {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Donation {
    pub id               : Id,
    pub donation_type_id : Option<Id>,
    pub name             : Option<String>,
    pub email            : Option<String>,
    pub amount           : f64,
    pub payment_method   : String,
    pub transaction_id   : Option<String>,
    pub status           : DonationStatus,
    pub message          : Option<String>,
    pub created_at       : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct NewDonation {
    pub donation_type_id : Option<Id>,
    pub name             : Option<String>,
    pub email            : Option<String>,
    pub amount           : f64,
    pub payment_method   : String,
    pub transaction_id   : Option<String>,
    pub status           : DonationStatus,
    pub message          : Option<String>,
}

/// A donation together with the title and amount of its type.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationWithType {
    pub donation: Donation,
    pub type_title: Option<String>,
    pub type_amount: Option<f64>,
}

/// Aggregated completed donations of a single donation type.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationTypeStats {
    pub donation_type_id: Id,
    pub title: String,
    pub type_amount: f64,
    pub count: usize,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn donation_status_names() {
        assert_eq!(DonationStatus::default(), DonationStatus::Completed);
        assert_eq!(DonationStatus::Processing.as_str(), "processing");
        assert_eq!(
            "failed".parse::<DonationStatus>().unwrap(),
            DonationStatus::Failed
        );
        assert!("refunded".parse::<DonationStatus>().is_err());
    }
}
