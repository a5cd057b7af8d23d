use crate::{
    gateways::payment::PaymentError,
    repositories,
    util::validate::{
        BookingInvalidation, DonationTypeInvalidation, ReviewInvalidation, SupportInvalidation,
    },
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Name is required")]
    Name,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Invalid phone number")]
    Phone,
    #[error("Invalid password")]
    Password,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid credentials")]
    Credentials,
    #[error("Admin access required")]
    Forbidden,
    #[error("Access denied")]
    Unauthorized,
    #[error("Invalid token")]
    TokenInvalid,
    #[error("Invalid date, expected YYYY-MM-DD")]
    Date,
    #[error("At least one guest is required")]
    Guests,
    #[error("Invalid price")]
    Price,
    #[error("Invalid booking status")]
    BookingStatus,
    #[error("Rating must be between 1 and 5")]
    RatingValue,
    #[error("Review text is required")]
    EmptyReviewText,
    #[error("Image URL is required")]
    ImageUrl,
    #[error("Title is required")]
    Title,
    #[error("Invalid amount")]
    Amount,
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid donation status")]
    DonationStatus,
    #[error("Tour not found")]
    TourNotFound,
    #[error("Booking not found")]
    BookingNotFound,
    #[error("Review not found or already approved")]
    ReviewNotFound,
    #[error("Donation type not found")]
    DonationTypeNotFound,
    #[error("Donation not found")]
    DonationNotFound,
    #[error("Support cause not found")]
    SupportCauseNotFound,
    #[error("Payment method not found")]
    PaymentMethodNotFound,
    #[error("{0}")]
    Support(#[from] SupportInvalidation),
    #[error("Phone number is required for M-Pesa payments")]
    MpesaPhone,
    #[error("The payment provider {0} is not configured")]
    PaymentProviderNotConfigured(&'static str),
    #[error("{0}")]
    PaymentProvider(String),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<wildbeat_entities::password::ParseError> for Error {
    fn from(_: wildbeat_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<wildbeat_entities::email::EmailAddressParseError> for Error {
    fn from(_: wildbeat_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<wildbeat_entities::booking::BookingDateParseError> for Error {
    fn from(_: wildbeat_entities::booking::BookingDateParseError) -> Self {
        Self::Date
    }
}

impl From<wildbeat_entities::nonce::NonceParseError> for Error {
    fn from(_: wildbeat_entities::nonce::NonceParseError) -> Self {
        Self::TokenInvalid
    }
}

impl From<BookingInvalidation> for Error {
    fn from(err: BookingInvalidation) -> Self {
        match err {
            BookingInvalidation::Name => Self::Name,
            BookingInvalidation::EmailAddress => Self::EmailAddress,
            BookingInvalidation::Guests => Self::Guests,
            BookingInvalidation::TotalPrice => Self::Price,
        }
    }
}

impl From<ReviewInvalidation> for Error {
    fn from(err: ReviewInvalidation) -> Self {
        match err {
            ReviewInvalidation::Name => Self::Name,
            ReviewInvalidation::EmailAddress => Self::EmailAddress,
            ReviewInvalidation::EmptyText => Self::EmptyReviewText,
        }
    }
}

impl From<DonationTypeInvalidation> for Error {
    fn from(err: DonationTypeInvalidation) -> Self {
        match err {
            DonationTypeInvalidation::Title => Self::Title,
            DonationTypeInvalidation::Amount => Self::Amount,
        }
    }
}

impl From<PaymentError> for Error {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::Provider(msg) => Self::PaymentProvider(msg),
            PaymentError::Other(err) => Self::PaymentProvider(err.to_string()),
        }
    }
}
