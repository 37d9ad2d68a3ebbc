//! Error types for the Serene Wings server application.
//!
//! Each domain has its own `thiserror` enum (authentication, configuration, form validation,
//! scheduling, email delivery, record lookup). All of them implement `IntoResponse` so that
//! controllers can return `Result<impl IntoResponse, Error>` and rely on `?`.

pub mod auth;
pub mod config;
pub mod email;
pub mod form;
pub mod record;
pub mod schedule;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, email::EmailError, form::FormError,
        record::RecordError, schedule::ScheduleError,
    },
};

/// Main error type for the server application.
///
/// Aggregates the domain error types and external library errors so that the `?` operator
/// converts them automatically. Domain errors carry their own HTTP mapping; everything else
/// becomes a logged 500 response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization failure.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Submitted form failed validation.
    #[error(transparent)]
    FormError(#[from] FormError),
    /// Shift conflict or time clock misuse.
    #[error(transparent)]
    ScheduleError(#[from] ScheduleError),
    /// Transactional email API failure.
    #[error(transparent)]
    EmailError(#[from] EmailError),
    /// Requested record does not exist.
    #[error(transparent)]
    RecordError(#[from] RecordError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the application's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// HTTP client error talking to the hosted auth service.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Form validation failures, clocking out without an open entry
/// - 401 Unauthorized - Not logged in, invalid credentials
/// - 403 Forbidden - Deactivated account or missing role
/// - 404 Not Found - Missing user or record
/// - 409 Conflict - Overlapping shift
/// - 502 Bad Gateway - Email API failure
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::FormError(err) => err.into_response(),
            Self::ScheduleError(err) => err.into_response(),
            Self::EmailError(err) => err.into_response(),
            Self::RecordError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details never reach the
/// client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds the `{"error": "..."}` response used by every domain error.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::*;

    /// Expect database errors to be hidden behind a generic 500
    #[test]
    fn db_error_is_internal() {
        let response = Error::DbErr(sea_orm::DbErr::Custom("boom".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    /// Expect domain errors to keep their own status code
    #[test]
    fn domain_error_keeps_status() {
        let response = Error::ScheduleError(ScheduleError::ShiftConflict).into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
