use crate::repositories::*;

/// All repositories that are backed by the same database.
pub trait Db:
    UserRepo
    + SessionRepo
    + TourRepo
    + BookingRepo
    + ReviewRepo
    + GalleryRepo
    + DonationTypeRepo
    + DonationRepo
    + SupportRepo
{
}

impl<T> Db for T where
    T: UserRepo
        + SessionRepo
        + TourRepo
        + BookingRepo
        + ReviewRepo
        + GalleryRepo
        + DonationTypeRepo
        + DonationRepo
        + SupportRepo
{
}
