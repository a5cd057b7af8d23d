use thiserror::Error;
use wildbeat_entities::{
    booking::NewBooking, donation::NewDonationType, gallery::NewGalleryImage, review::NewReview,
    support::*,
};

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

/// Normalizes a Kenyan mobile number to the `2547XXXXXXXX` format.
pub fn normalize_kenyan_phone(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let digits = match digits.strip_prefix('0') {
        Some(local) => format!("254{local}"),
        None if digits.len() == 9 => format!("254{digits}"),
        None => digits,
    };
    (digits.len() == 12 && digits.starts_with("254")).then_some(digits)
}

fn is_positive(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingInvalidation {
    #[error("Name is required")]
    Name,
    #[error("Invalid email")]
    EmailAddress,
    #[error("At least one guest is required")]
    Guests,
    #[error("Invalid total price")]
    TotalPrice,
}

impl Validate for NewBooking {
    type Error = BookingInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if !is_valid_email(self.email.as_str()) {
            return Err(Self::Error::EmailAddress);
        }
        if self.guests < 1 {
            return Err(Self::Error::Guests);
        }
        if let Some(price) = self.total_price {
            if !price.is_finite() || price < 0.0 {
                return Err(Self::Error::TotalPrice);
            }
        }
        Ok(())
    }
}

impl AutoCorrect for NewBooking {
    fn auto_correct(mut self) -> Self {
        self.name = self.name.trim().to_owned();
        self.phone = non_empty(self.phone);
        self.special_requests = non_empty(self.special_requests);
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewInvalidation {
    #[error("Name is required")]
    Name,
    #[error("Invalid email")]
    EmailAddress,
    #[error("Review text is required")]
    EmptyText,
}

impl Validate for NewReview {
    type Error = ReviewInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if !is_valid_email(self.email.as_str()) {
            return Err(Self::Error::EmailAddress);
        }
        if self.review_text.trim().is_empty() {
            return Err(Self::Error::EmptyText);
        }
        Ok(())
    }
}

impl AutoCorrect for NewGalleryImage {
    fn auto_correct(mut self) -> Self {
        self.image_url = self.image_url.trim().to_owned();
        self.title = non_empty(self.title);
        self.category = non_empty(self.category);
        self.alt_text = non_empty(self.alt_text);
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DonationTypeInvalidation {
    #[error("Title is required")]
    Title,
    #[error("Invalid amount")]
    Amount,
}

impl Validate for NewDonationType {
    type Error = DonationTypeInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.title.trim().is_empty() {
            return Err(Self::Error::Title);
        }
        if !is_positive(self.amount) {
            return Err(Self::Error::Amount);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SupportInvalidation {
    #[error("Hero title and subtitle are required")]
    Hero,
    #[error("Title and description are required")]
    Cause,
    #[error("Name and integration key are required")]
    PaymentMethod,
    #[error("Config must be a JSON object")]
    PaymentMethodConfig,
}

impl Validate for SupportSettings {
    type Error = SupportInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.hero_title.is_none() || self.hero_subtitle.is_none() {
            return Err(Self::Error::Hero);
        }
        Ok(())
    }
}

impl AutoCorrect for SupportSettings {
    fn auto_correct(self) -> Self {
        Self {
            hero_kicker: non_empty(self.hero_kicker),
            hero_title: non_empty(self.hero_title),
            hero_subtitle: non_empty(self.hero_subtitle),
            hero_description: non_empty(self.hero_description),
            hero_cta_label: non_empty(self.hero_cta_label),
            hero_cta_link: non_empty(self.hero_cta_link),
            stats_label_one: non_empty(self.stats_label_one),
            stats_value_one: non_empty(self.stats_value_one),
            stats_label_two: non_empty(self.stats_label_two),
            stats_value_two: non_empty(self.stats_value_two),
            stats_label_three: non_empty(self.stats_label_three),
            stats_value_three: non_empty(self.stats_value_three),
            custom_title: non_empty(self.custom_title),
            custom_description: non_empty(self.custom_description),
            custom_button_label: non_empty(self.custom_button_label),
            custom_button_link: non_empty(self.custom_button_link),
            updated_at: self.updated_at,
        }
    }
}

impl Validate for NewSupportCause {
    type Error = SupportInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(Self::Error::Cause);
        }
        Ok(())
    }
}

impl Validate for NewPaymentMethod {
    type Error = SupportInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() || self.integration_key.as_str().is_empty() {
            return Err(Self::Error::PaymentMethod);
        }
        match serde_json::from_str::<serde_json::Value>(&self.config) {
            Ok(serde_json::Value::Object(_)) => Ok(()),
            _ => Err(Self::Error::PaymentMethodConfig),
        }
    }
}

impl AutoCorrect for NewPaymentMethod {
    fn auto_correct(mut self) -> Self {
        self.name = self.name.trim().to_owned();
        self.tagline = non_empty(self.tagline);
        self.description = non_empty(self.description);
        self.button_label = non_empty(self.button_label);
        self.icon = non_empty(self.icon);
        self.currency = self.currency.trim().to_uppercase();
        if self.currency.is_empty() {
            self.currency = DEFAULT_CURRENCY.to_owned();
        }
        if self.config.trim().is_empty() {
            self.config = "{}".to_owned();
        }
        self
    }
}
