use maud::Markup;
use rocket::{get, http::Status, routes, serde::json::Json, Route, State};
use wildbeat_db_sqlite::Connections;

use crate::{
    adapters::json,
    core::prelude::*,
    web::{api::API_NAME, guards::Version, Cfg},
};
use wildbeat_application::prelude as flows;
use wildbeat_core::usecases::Error as ParameterError;

mod view;


pub fn routes() -> Vec<Route> {
    routes![get_index, get_approve_review]
}

#[get("/")]
pub fn get_index(version: &State<Version>) -> Json<json::ApiInfo> {
    Json(json::ApiInfo {
        message: format!("{API_NAME} is running!"),
        version: version.0.to_owned(),
        endpoints: vec![],
    })
}

#[get("/approve-review/<token>")]
pub fn get_approve_review(
    db: &State<Connections>,
    cfg: &State<Cfg>,
    token: &str,
) -> (Status, Markup) {
    match flows::approve_review(db, token) {
        Ok(_) => (Status::Ok, view::review_approved(&cfg.frontend_url)),
        Err(AppError::Business(BError::Parameter(ParameterError::ReviewNotFound))) => {
            (Status::NotFound, view::review_not_found())
        }
        Err(err) => {
            error!("Unable to approve review: {err}");
            (Status::InternalServerError, view::review_approval_failed())
        }
    }
}
