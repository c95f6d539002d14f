use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use napomni_storage::StorageError;
use thiserror::Error;

/// Body of every 5xx response. Details only go to the log.
pub const INTERNAL_ERROR_BODY: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Reminder not found")]
    NotFound,

    #[error("Storage unavailable: {0}")]
    Storage(#[from] StorageError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            log::error!("{}", self);
            return (status, INTERNAL_ERROR_BODY).into_response();
        }

        (status, self.to_string()).into_response()
    }
}
