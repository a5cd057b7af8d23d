#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # wildbeat-entities
//!
//! Reusable, agnostic domain entities for the Wildbeat Safari backend.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod booking;
pub mod donation;
pub mod email;
pub mod gallery;
pub mod id;
pub mod list;
pub mod nonce;
pub mod password;
pub mod review;
pub mod session;
pub mod support;
pub mod time;
pub mod tour;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
