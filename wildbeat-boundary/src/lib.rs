use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

pub mod serde_util;

use serde_util::{bool_as_int, flexible_bool, flexible_list};

// ---------------------------------------------------------------------
// Generic responses
// ---------------------------------------------------------------------

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    pub error: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Message {
    pub message: String,
}

/// The id of a newly created or updated object.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Created {
    pub id: i64,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Health {
    pub status: String,
    pub message: String,
}

// ---------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Guest,
    Admin,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub role: UserRole,
}

#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct Signup {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    #[serde(rename = "adminCode", alias = "admin_code")]
    pub admin_code: Option<String>,
}

#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

// ---------------------------------------------------------------------
// Tours & bookings
// ---------------------------------------------------------------------

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Tour {
    pub id          : i64,
    pub title       : String,
    pub description : Option<String>,
    pub price       : f64,
    pub duration    : Option<String>,
    pub group_size  : Option<String>,
    pub location    : Option<String>,
    pub highlights  : Vec<String>,
    pub image_url   : Option<String>,
    pub rating      : f64,
    pub created_at  : i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Booking {
    pub id               : i64,
    pub tour_id          : Option<i64>,
    pub name             : String,
    pub email            : String,
    pub phone            : Option<String>,
    pub date             : String,
    pub guests           : u32,
    pub special_requests : Option<String>,
    pub status           : String,
    pub total_price      : Option<f64>,
    pub created_at       : i64,
}

#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct NewBooking {
    pub tour_id          : Option<i64>,
    pub name             : String,
    pub email            : String,
    pub phone            : Option<String>,
    pub date             : String,
    pub guests           : i64,
    pub special_requests : Option<String>,
    pub total_price      : Option<f64>,
}

#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct BookingStatusUpdate {
    pub status: String,
}

// ---------------------------------------------------------------------
// Reviews & gallery
// ---------------------------------------------------------------------

/// A published review without the contact data of its author.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Review {
    pub id          : i64,
    pub tour_id     : Option<i64>,
    pub name        : String,
    pub rating      : u8,
    pub review_text : String,
    pub created_at  : i64,
}

#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct NewReview {
    pub tour_id     : Option<i64>,
    pub name        : String,
    pub email       : String,
    pub rating      : i64,
    pub review_text : String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct GalleryImage {
    pub id         : i64,
    pub title      : Option<String>,
    pub image_url  : String,
    pub category   : Option<String>,
    pub alt_text   : Option<String>,
    pub created_at : i64,
}

#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct NewGalleryImage {
    pub title     : Option<String>,
    pub image_url : String,
    pub category  : Option<String>,
    pub alt_text  : Option<String>,
}

// ---------------------------------------------------------------------
// Donations
// ---------------------------------------------------------------------

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct DonationType {
    pub id          : i64,
    pub title       : String,
    pub amount      : f64,
    pub description : Option<String>,
    pub icon_color  : Option<String>,
    pub benefits    : Vec<String>,
    #[serde(with = "bool_as_int")]
    pub is_active   : bool,
    pub sort_order  : i32,
    pub created_at  : i64,
    pub updated_at  : i64,
}

/// Creates a new donation type or updates the one with the given id.
#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct StoreDonationType {
    pub id          : Option<i64>,
    pub title       : String,
    pub amount      : f64,
    pub description : Option<String>,
    pub icon_color  : Option<String>,
    #[serde(deserialize_with = "flexible_list::deserialize")]
    pub benefits    : Vec<String>,
    #[serde(deserialize_with = "flexible_bool::deserialize")]
    pub is_active   : Option<bool>,
    pub sort_order  : Option<i32>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Donation {
    pub id                   : i64,
    pub donation_type_id     : Option<i64>,
    pub name                 : Option<String>,
    pub email                : Option<String>,
    pub amount               : f64,
    pub payment_method       : String,
    pub transaction_id       : Option<String>,
    pub status               : String,
    pub message              : Option<String>,
    pub created_at           : i64,
    pub donation_type_title  : Option<String>,
    pub donation_type_amount : Option<f64>,
}

#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct NewDonation {
    pub donation_type_id : Option<i64>,
    pub name             : Option<String>,
    pub email            : Option<String>,
    pub amount           : f64,
    pub payment_method   : Option<String>,
    pub transaction_id   : Option<String>,
    pub status           : Option<String>,
    pub message          : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct DonationTypeStats {
    pub id          : i64,
    pub title       : String,
    pub count       : usize,
    pub total       : f64,
    pub type_amount : f64,
}

#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct ConfirmDonation {
    pub payment_intent_id : Option<String>,
    pub donation_type_id  : Option<i64>,
    pub name              : Option<String>,
    pub email             : Option<String>,
    pub message           : Option<String>,
    pub payment_method    : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct DonationConfirmed {
    pub success: bool,
    pub id: i64,
    pub message: String,
}

// ---------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------

#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct CreatePaymentIntent {
    pub amount           : Option<f64>,
    pub donation_type_id : Option<i64>,
    pub description      : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentCreated {
    pub client_secret: String,
    pub payment_intent_id: String,
}

#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct CreateDonorPaymentIntent {
    pub amount : Option<f64>,
    pub email  : Option<String>,
    pub name   : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct ClientSecret {
    pub client_secret: String,
}

#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct InitiatePayment {
    pub method_id        : Option<i64>,
    pub donation_type_id : Option<i64>,
    pub amount           : Option<f64>,
    pub currency         : Option<String>,
    pub name             : Option<String>,
    pub email            : Option<String>,
    pub phone            : Option<String>,
    pub message          : Option<String>,
    pub return_url       : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PaymentInitiation {
    Stripe {
        #[serde(rename = "clientSecret")]
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

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct WebhookReceived {
    pub received: bool,
}

// ---------------------------------------------------------------------
// Support page
// ---------------------------------------------------------------------

#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(default)]
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
    #[serde(skip_deserializing)]
    pub updated_at          : Option<i64>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SupportCause {
    pub id          : i64,
    pub title       : String,
    pub description : String,
    pub icon        : Option<String>,
    pub sort_order  : i32,
    #[serde(with = "bool_as_int")]
    pub is_active   : bool,
}

#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct StoreSupportCause {
    pub id          : Option<i64>,
    pub title       : String,
    pub description : String,
    pub icon        : Option<String>,
    pub sort_order  : Option<i32>,
    #[serde(deserialize_with = "flexible_bool::deserialize")]
    pub is_active   : Option<bool>,
}

/// A payment method including its private configuration.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PaymentMethod {
    pub id              : i64,
    pub name            : String,
    pub tagline         : Option<String>,
    pub description     : Option<String>,
    pub integration_key : String,
    pub button_label    : Option<String>,
    pub icon            : Option<String>,
    pub currency        : String,
    pub config          : serde_json::Value,
    pub sort_order      : i32,
    #[serde(with = "bool_as_int")]
    pub is_active       : bool,
}

/// A payment method as presented to donors.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct PublicPaymentMethod {
    pub id              : i64,
    pub name            : String,
    pub tagline         : Option<String>,
    pub description     : Option<String>,
    pub integration_key : String,
    pub button_label    : Option<String>,
    pub icon            : Option<String>,
    pub currency        : String,
}

#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct StorePaymentMethod {
    pub id              : Option<i64>,
    pub name            : String,
    pub tagline         : Option<String>,
    pub description     : Option<String>,
    pub integration_key : String,
    pub button_label    : Option<String>,
    pub icon            : Option<String>,
    pub currency        : Option<String>,
    /// Either a JSON object or its textual representation.
    pub config          : Option<serde_json::Value>,
    pub sort_order      : Option<i32>,
    #[serde(deserialize_with = "flexible_bool::deserialize")]
    pub is_active       : Option<bool>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct SupportPage {
    pub settings: SupportSettings,
    pub causes: Vec<SupportCause>,
    #[serde(rename = "donationTypes")]
    pub donation_types: Vec<DonationType>,
    #[serde(rename = "paymentMethods")]
    pub payment_methods: Vec<PublicPaymentMethod>,
}
