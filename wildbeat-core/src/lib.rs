//! Business logic of the Wildbeat Safari backend.
//!
//! Storage and the outside world are only accessed through the
//! repository and gateway traits defined here.

pub mod db;
pub mod repositories;
pub mod usecases;

pub mod gateways {
    pub mod email;
    pub mod notify;
    pub mod payment;
}

pub mod util {
    pub mod validate;
}

pub mod entities {
    pub use wildbeat_entities::{
        booking::*, donation::*, email::*, gallery::*, id::*, list::*, nonce::*, password::*,
        review::*, session::*, support::*, time::*, tour::*, user::*,
    };
}
