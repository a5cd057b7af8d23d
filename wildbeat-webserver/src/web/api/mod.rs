use std::{fmt::Display, result};

use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes, Route, State,
};
use wildbeat_boundary::Error as JsonErrorResponse;
use wildbeat_db_sqlite::Connections;

use super::{guards::*, Cfg};
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{gateways::payment::PaymentGateways, prelude::*, usecases},
};
use wildbeat_application::prelude as flows;

mod bookings;
mod donations;
mod error;
mod gallery;
mod payments;
mod reviews;
mod support;
mod tours;
mod users;
mod util;

pub use self::error::Error as ApiError;
use self::error::ParameterError;
pub use self::util::API_NAME;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   server   --- //
        util::get_api,
        util::get_health,
        // ---   auth   --- //
        users::post_signup,
        users::post_login,
        users::post_logout,
        users::get_current_user,
        // ---   tours   --- //
        tours::get_tours,
        tours::get_tour,
        // ---   bookings   --- //
        bookings::post_booking,
        bookings::get_bookings,
        bookings::put_booking_status,
        // ---   reviews   --- //
        reviews::get_reviews,
        reviews::post_review,
        // ---   gallery   --- //
        gallery::get_gallery,
        gallery::post_gallery_image,
        // ---   donations   --- //
        donations::get_active_donation_types,
        donations::get_all_donation_types,
        donations::post_donation_type,
        donations::delete_donation_type,
        donations::post_donation,
        donations::get_donations,
        donations::get_donation_stats,
        donations::post_confirm_donation,
        // ---   payments   --- //
        payments::post_create_payment_intent,
        payments::post_create_donor_payment_intent,
        payments::post_webhook,
        payments::post_initiate_payment,
        // ---   support page   --- //
        support::get_support_page,
        support::put_support_settings,
        support::get_support_causes,
        support::post_support_cause,
        support::delete_support_cause,
        support::get_payment_methods,
        support::post_payment_method,
        support::delete_payment_method,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let boundary_error = JsonErrorResponse {
        error: err.to_string(),
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

fn created(id: Id, message: &str) -> Json<json::Created> {
    Json(json::Created {
        id,
        message: message.to_owned(),
    })
}

fn message(message: &str) -> Json<json::Message> {
    Json(json::Message {
        message: message.to_owned(),
    })
}
