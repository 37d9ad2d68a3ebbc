use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug, PartialEq)]
pub enum FormError {
    /// Carries the user facing message naming the required fields.
    #[error("{0}")]
    MissingFields(&'static str),
    #[error("Rating {0} is outside 1 to 5 stars")]
    InvalidRating(i32),
    #[error("{0}")]
    InvalidField(String),
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected form submission: {}", self);

        match self {
            Self::MissingFields(message) => error_response(StatusCode::BAD_REQUEST, message),
            Self::InvalidRating(_) => error_response(
                StatusCode::BAD_REQUEST,
                "Rating must be between 1 and 5 stars.",
            ),
            Self::InvalidField(message) => error_response(StatusCode::BAD_REQUEST, message),
        }
    }
}
