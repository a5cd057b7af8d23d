// Low-level database access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id and
// never modified or loaded by another repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &NewUserAccount) -> Result<Id>;

    fn get_user(&self, id: Id) -> Result<User>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;

    fn count_users(&self) -> Result<usize>;
}

pub trait SessionRepo {
    fn create_session(&self, session: &NewSession) -> Result<Id>;
    fn get_session_by_token(&self, token: &Nonce) -> Result<Session>;
    fn delete_session_by_token(&self, token: &Nonce) -> Result<usize>;
    fn delete_expired_sessions(&self, expired_before: Timestamp) -> Result<usize>;
}

pub trait TourRepo {
    fn create_tour(&self, tour: &NewTour) -> Result<Id>;
    fn get_tour(&self, id: Id) -> Result<Tour>;

    // Ordered by creation
    fn all_tours(&self) -> Result<Vec<Tour>>;
    fn count_tours(&self) -> Result<usize>;
}

pub trait BookingRepo {
    fn create_booking(&self, booking: &NewBooking) -> Result<Id>;
    fn get_booking(&self, id: Id) -> Result<Booking>;
    fn update_booking_status(&self, id: Id, status: BookingStatus) -> Result<()>;

    fn all_bookings_newest_first(&self) -> Result<Vec<Booking>>;
}

pub trait ReviewRepo {
    fn create_review(&self, review: &NewReview) -> Result<Id>;
    fn get_review(&self, id: Id) -> Result<Review>;
    fn get_review_by_approval_token(&self, token: &Nonce) -> Result<Review>;

    // Sets the approved flag and removes the approval token.
    fn approve_review(&self, id: Id) -> Result<()>;

    fn approved_reviews_newest_first(&self) -> Result<Vec<Review>>;
    fn count_reviews(&self) -> Result<usize>;
}

pub trait GalleryRepo {
    fn create_gallery_image(&self, image: &NewGalleryImage) -> Result<Id>;

    // Returns all images if no category is given
    fn gallery_images_newest_first(&self, category: Option<&str>) -> Result<Vec<GalleryImage>>;
    fn count_gallery_images(&self) -> Result<usize>;
}

pub trait DonationTypeRepo {
    fn create_donation_type(&self, donation_type: &NewDonationType) -> Result<Id>;
    fn update_donation_type(&self, id: Id, donation_type: &NewDonationType) -> Result<()>;
    fn deactivate_donation_type(&self, id: Id) -> Result<()>;
    fn get_donation_type(&self, id: Id) -> Result<DonationType>;

    // Ordered by sort order
    fn all_donation_types(&self) -> Result<Vec<DonationType>>;
    fn active_donation_types(&self) -> Result<Vec<DonationType>>;
    fn count_donation_types(&self) -> Result<usize>;
}

pub trait DonationRepo {
    fn create_donation(&self, donation: &NewDonation) -> Result<Id>;
    fn get_donation(&self, id: Id) -> Result<Donation>;
    fn get_donation_by_transaction_id(&self, transaction_id: &str) -> Result<Donation>;
    fn update_donation_status(&self, id: Id, status: DonationStatus) -> Result<()>;

    fn all_donations_newest_first(&self) -> Result<Vec<Donation>>;
    fn completed_donations(&self) -> Result<Vec<Donation>>;
}

pub trait SupportRepo {
    fn get_support_settings(&self) -> Result<SupportSettings>;
    fn replace_support_settings(&self, settings: &SupportSettings) -> Result<()>;

    fn create_support_cause(&self, cause: &NewSupportCause) -> Result<Id>;
    fn update_support_cause(&self, id: Id, cause: &NewSupportCause) -> Result<()>;
    fn deactivate_support_cause(&self, id: Id) -> Result<()>;
    fn all_support_causes(&self) -> Result<Vec<SupportCause>>;
    fn active_support_causes(&self) -> Result<Vec<SupportCause>>;

    fn create_payment_method(&self, method: &NewPaymentMethod) -> Result<Id>;
    fn update_payment_method(&self, id: Id, method: &NewPaymentMethod) -> Result<()>;
    fn deactivate_payment_method(&self, id: Id) -> Result<()>;
    fn get_payment_method(&self, id: Id) -> Result<PaymentMethod>;
    fn all_payment_methods(&self) -> Result<Vec<PaymentMethod>>;
    fn active_payment_methods(&self) -> Result<Vec<PaymentMethod>>;
}
