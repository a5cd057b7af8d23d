use super::json_error_response;
use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use rocket::tokio::task::JoinError;
use std::io;
use thiserror::Error;
use wildbeat_application::error::{AppError, BError};
pub use wildbeat_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

fn parameter_status(err: &ParameterError) -> Status {
    use ParameterError as E;
    match err {
        E::Credentials | E::Unauthorized | E::TokenInvalid => Status::Unauthorized,
        E::Forbidden => Status::Forbidden,
        E::TourNotFound
        | E::BookingNotFound
        | E::ReviewNotFound
        | E::DonationTypeNotFound
        | E::DonationNotFound
        | E::SupportCauseNotFound
        | E::PaymentMethodNotFound => Status::NotFound,
        E::UserExists => Status::Conflict,
        E::PaymentProvider(_) => Status::BadGateway,
        E::PaymentProviderNotConfigured(_) => Status::ServiceUnavailable,
        E::Repo(err) => repo_status(err),
        _ => Status::BadRequest,
    }
}

fn repo_status(err: &RepoError) -> Status {
    match err {
        RepoError::NotFound => Status::NotFound,
        RepoError::AlreadyExists => Status::Conflict,
        RepoError::Other(_) => Status::InternalServerError,
    }
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Other(anyhow!(err))
    }
}

impl From<JoinError> for Error {
    fn from(err: JoinError) -> Self {
        Self::Other(anyhow!(err))
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(AppError::Business(err)) => {
                let status = match &err {
                    BError::Parameter(err) => parameter_status(err),
                    BError::Repo(err) => repo_status(err),
                    BError::Webhook(_) => {
                        // Stripe expects a plain text answer
                        return (Status::BadRequest, err.to_string()).respond_to(req);
                    }
                };
                if status == Status::InternalServerError {
                    error!("Error: {err}");
                    return json_error_response(req, &INTERNAL_ERROR_MESSAGE, status);
                }
                if status.code >= 500 {
                    warn!("{err}");
                }
                json_error_response(req, &err, status)
            }
            Error::App(AppError::Other(err)) | Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &INTERNAL_ERROR_MESSAGE, Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}
