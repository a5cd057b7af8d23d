use thiserror::Error;
use wildbeat_core::{
    gateways::payment::WebhookError, repositories::Error as RepoError,
    usecases::Error as ParameterError,
};

pub use wildbeat_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

impl From<WebhookError> for AppError {
    fn from(err: WebhookError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error("Webhook Error: {0}")]
    Webhook(#[from] WebhookError),
}
