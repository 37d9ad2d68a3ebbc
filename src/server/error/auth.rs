use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;
use uuid::Uuid;

use crate::server::error::error_response;

/// Message shown to users whose profile has been deactivated.
pub static DEACTIVATED_MESSAGE: &str =
    "Your account has been deactivated. Please contact an administrator for assistance.";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(Uuid),
    #[error("User ID {0:?} attempted to access a protected route while deactivated")]
    Deactivated(Uuid),
    #[error("User ID {user_id:?} lacks the required role: {required}")]
    Forbidden { user_id: Uuid, required: String },
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("Hosted auth service rejected the supplied credentials")]
    InvalidCredentials,
    #[error("Hosted auth service rejected the sign-up: {0}")]
    SignUpRejected(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession => error_response(
                StatusCode::UNAUTHORIZED,
                "You must be logged in to access this page.",
            ),
            Self::UserNotInDatabase(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
            Self::Deactivated(_) => error_response(StatusCode::FORBIDDEN, DEACTIVATED_MESSAGE),
            Self::Forbidden { required, .. } => error_response(
                StatusCode::FORBIDDEN,
                format!(
                    "You don't have permission to access this page. Required role: {}.",
                    required
                ),
            ),
            Self::MissingCredentials => {
                error_response(StatusCode::BAD_REQUEST, "Email and password are required.")
            }
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, "Invalid email or password.")
            }
            Self::SignUpRejected(reason) => error_response(StatusCode::BAD_REQUEST, reason),
        }
    }
}
