#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub name: Option<&'a str>,
    pub password: &'a str,
    pub role: i16,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub password: String,
    pub role: i16,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = sessions)]
pub struct NewSession {
    pub user_id: i64,
    pub token: String,
    pub expires_at: i64,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct SessionEntity {
    pub id: i64,
    pub user_id: i64,
    pub token: String,
    pub expires_at: i64,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = tours)]
pub struct NewTour<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub price: f64,
    pub duration: Option<&'a str>,
    pub group_size: Option<&'a str>,
    pub location: Option<&'a str>,
    pub highlights: String,
    pub image_url: Option<&'a str>,
    pub rating: f64,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct TourEntity {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub duration: Option<String>,
    pub group_size: Option<String>,
    pub location: Option<String>,
    pub highlights: String,
    pub image_url: Option<String>,
    pub rating: f64,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBooking<'a> {
    pub tour_id: Option<i64>,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub date: String,
    pub guests: i32,
    pub special_requests: Option<&'a str>,
    pub status: &'static str,
    pub total_price: Option<f64>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct BookingEntity {
    pub id: i64,
    pub tour_id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date: String,
    pub guests: i32,
    pub special_requests: Option<String>,
    pub status: String,
    pub total_price: Option<f64>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = reviews)]
pub struct NewReview<'a> {
    pub tour_id: Option<i64>,
    pub name: &'a str,
    pub email: &'a str,
    pub rating: i16,
    pub review_text: &'a str,
    pub approved: bool,
    pub approval_token: Option<String>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct ReviewEntity {
    pub id: i64,
    pub tour_id: Option<i64>,
    pub name: String,
    pub email: String,
    pub rating: i16,
    pub review_text: String,
    pub approved: bool,
    pub approval_token: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = gallery)]
pub struct NewGalleryImage<'a> {
    pub title: Option<&'a str>,
    pub image_url: &'a str,
    pub category: Option<&'a str>,
    pub alt_text: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct GalleryImageEntity {
    pub id: i64,
    pub title: Option<String>,
    pub image_url: String,
    pub category: Option<String>,
    pub alt_text: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = donation_types)]
pub struct NewDonationType<'a> {
    pub title: &'a str,
    pub amount: f64,
    pub description: Option<&'a str>,
    pub icon_color: Option<&'a str>,
    pub benefits: String,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = donation_types)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateDonationType<'a> {
    pub title: &'a str,
    pub amount: f64,
    pub description: Option<&'a str>,
    pub icon_color: Option<&'a str>,
    pub benefits: String,
    pub is_active: bool,
    pub sort_order: i32,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct DonationTypeEntity {
    pub id: i64,
    pub title: String,
    pub amount: f64,
    pub description: Option<String>,
    pub icon_color: Option<String>,
    pub benefits: String,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = donations)]
pub struct NewDonation<'a> {
    pub donation_type_id: Option<i64>,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub amount: f64,
    pub payment_method: &'a str,
    pub transaction_id: Option<&'a str>,
    pub status: &'static str,
    pub message: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct DonationEntity {
    pub id: i64,
    pub donation_type_id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub amount: f64,
    pub payment_method: String,
    pub transaction_id: Option<String>,
    pub status: String,
    pub message: Option<String>,
    pub created_at: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = support_settings)]
#[diesel(treat_none_as_null = true)]
pub struct SupportSettings<'a> {
    pub hero_kicker: Option<&'a str>,
    pub hero_title: Option<&'a str>,
    pub hero_subtitle: Option<&'a str>,
    pub hero_description: Option<&'a str>,
    pub hero_cta_label: Option<&'a str>,
    pub hero_cta_link: Option<&'a str>,
    pub stats_label_one: Option<&'a str>,
    pub stats_value_one: Option<&'a str>,
    pub stats_label_two: Option<&'a str>,
    pub stats_value_two: Option<&'a str>,
    pub stats_label_three: Option<&'a str>,
    pub stats_value_three: Option<&'a str>,
    pub custom_title: Option<&'a str>,
    pub custom_description: Option<&'a str>,
    pub custom_button_label: Option<&'a str>,
    pub custom_button_link: Option<&'a str>,
    pub updated_at: Option<i64>,
}

#[derive(Queryable)]
pub struct SupportSettingsEntity {
    pub id: i64,
    pub hero_kicker: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_description: Option<String>,
    pub hero_cta_label: Option<String>,
    pub hero_cta_link: Option<String>,
    pub stats_label_one: Option<String>,
    pub stats_value_one: Option<String>,
    pub stats_label_two: Option<String>,
    pub stats_value_two: Option<String>,
    pub stats_label_three: Option<String>,
    pub stats_value_three: Option<String>,
    pub custom_title: Option<String>,
    pub custom_description: Option<String>,
    pub custom_button_label: Option<String>,
    pub custom_button_link: Option<String>,
    pub updated_at: Option<i64>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = support_causes)]
#[diesel(treat_none_as_null = true)]
pub struct NewSupportCause<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub icon: Option<&'a str>,
    pub sort_order: i32,
    pub is_active: bool,
}

#[derive(Queryable)]
pub struct SupportCauseEntity {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = payment_methods)]
#[diesel(treat_none_as_null = true)]
pub struct NewPaymentMethod<'a> {
    pub name: &'a str,
    pub tagline: Option<&'a str>,
    pub description: Option<&'a str>,
    pub integration_key: &'a str,
    pub button_label: Option<&'a str>,
    pub icon: Option<&'a str>,
    pub currency: &'a str,
    pub config: &'a str,
    pub sort_order: i32,
    pub is_active: bool,
}

#[derive(Queryable)]
pub struct PaymentMethodEntity {
    pub id: i64,
    pub name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub integration_key: String,
    pub button_label: Option<String>,
    pub icon: Option<String>,
    pub currency: String,
    pub config: String,
    pub sort_order: i32,
    pub is_active: bool,
}
