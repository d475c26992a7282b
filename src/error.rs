//! Error types shared across the crate

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors raised while building a countdown. These are configuration
/// errors and are meant to stop start-up, not to be shown to visitors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CountdownError {
    #[error("invalid countdown target {0:?}: expected RFC 3339 or YYYY-MM-DDTHH:MM[:SS]")]
    InvalidTarget(String),

    #[error("countdown target {0:?} does not exist in the local time zone")]
    NonexistentLocalTime(String),
}

/// An event identifier outside the published catalogue
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown event identifier {0:?}")]
pub struct UnknownEvent(pub String);

/// Errors surfaced by the HTTP layer
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MalformedPayload(rejection) => rejection.status(),
        };

        tracing::warn!("Rejecting request: {}", self);
        (status, self.to_string()).into_response()
    }
}
