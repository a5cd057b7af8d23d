use std::{convert::Infallible, fmt, str::FromStr};

use crate::{id::Id, time::Timestamp};

/// Texts of the public support page.
///
/// There is only a single instance that is edited by admins.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SupportSettings {
    pub hero_kicker         : Option<String>,
    pub hero_title          : Option<String>,
    pub hero_subtitle       : Option<String>,
    pub hero_description    : Option<String>,
    pub hero_cta_label      : Option<String>,
    pub hero_cta_link       : Option<String>,
    pub stats_label_one     : Option<String>,
    pub stats_value_one     : Option<String>,
    pub stats_label_two     : Option<String>,
    pub stats_value_two     : Option<String>,
    pub stats_label_three   : Option<String>,
    pub stats_value_three   : Option<String>,
    pub custom_title        : Option<String>,
    pub custom_description  : Option<String>,
    pub custom_button_label : Option<String>,
    pub custom_button_link  : Option<String>,
    pub updated_at          : Option<Timestamp>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportCause {
    pub id          : Id,
    pub title       : String,
    pub description : String,
    pub icon        : Option<String>,
    pub sort_order  : i32,
    pub is_active   : bool,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSupportCause {
    pub title       : String,
    pub description : String,
    pub icon        : Option<String>,
    pub sort_order  : i32,
    pub is_active   : bool,
}

/// Selects the payment provider integration of a [`PaymentMethod`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IntegrationKey {
    Stripe,
    Flutterwave,
    Mpesa,
    /// Offline payment, e.g. a bank transfer, with instructions for the donor.
    Manual(String),
}

impl IntegrationKey {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Stripe => "stripe",
            Self::Flutterwave => "flutterwave",
            Self::Mpesa => "mpesa",
            Self::Manual(key) => key,
        }
    }
}

impl FromStr for IntegrationKey {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let res = match key.to_ascii_lowercase().as_str() {
            "stripe" => Self::Stripe,
            "flutterwave" => Self::Flutterwave,
            "mpesa" | "m-pesa" => Self::Mpesa,
            _ => Self::Manual(key.to_owned()),
        };
        Ok(res)
    }
}

impl fmt::Display for IntegrationKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_CURRENCY: &str = "USD";

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id              : Id,
    pub name            : String,
    pub tagline         : Option<String>,
    pub description     : Option<String>,
    pub integration_key : IntegrationKey,
    pub button_label    : Option<String>,
    pub icon            : Option<String>,
    pub currency        : String,
    /// Provider specific settings as a serialized JSON object.
    pub config          : String,
    pub sort_order      : i32,
    pub is_active       : bool,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPaymentMethod {
    pub name            : String,
    pub tagline         : Option<String>,
    pub description     : Option<String>,
    pub integration_key : IntegrationKey,
    pub button_label    : Option<String>,
    pub icon            : Option<String>,
    pub currency        : String,
    pub config          : String,
    pub sort_order      : i32,
    pub is_active       : bool,
}
