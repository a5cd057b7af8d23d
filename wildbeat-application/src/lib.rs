#[macro_use]
extern crate log;

mod accounts;
mod create_booking;
mod donations;
mod payments;
mod post_review;

pub mod prelude {
    pub use super::{
        accounts::*, create_booking::*, donations::*, payments::*, post_review::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use wildbeat_core::{entities::*, gateways, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use wildbeat_db_sqlite::Connections;
}
