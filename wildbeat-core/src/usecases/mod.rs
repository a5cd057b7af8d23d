mod authorize;
mod bookings;
mod create_new_user;
mod donation_types;
mod donations;
mod error;
mod gallery;
mod login;
mod payments;
mod reviews;
mod signup;
mod support;
mod tours;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    authorize::*, bookings::*, create_new_user::*, donation_types::*, donations::*,
    error::Error, gallery::*, login::*, payments::*, reviews::*, signup::*, support::*, tours::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}

/// Maps a missing object onto a more specific error.
fn not_found_as(err: crate::repositories::Error, not_found: Error) -> Error {
    match err {
        crate::repositories::Error::NotFound => not_found,
        err => Error::Repo(err),
    }
}
