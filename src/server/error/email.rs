use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

/// Business phone numbers offered whenever an email could not be delivered.
pub static FALLBACK_PHONES: &str = "+1(919)633-2118 or +1(919)888-1810";

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Email API rejected the request with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("Failed to reach the email API: {0}")]
    Request(#[from] reqwest::Error),
}

impl IntoResponse for EmailError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        let message = match self {
            Self::Rejected { .. } => format!(
                "Email service is temporarily unavailable. Please call us directly at {}.",
                FALLBACK_PHONES
            ),
            Self::Request(_) => format!(
                "There was an issue submitting your request. Please try again or call us directly at {}.",
                FALLBACK_PHONES
            ),
        };

        error_response(StatusCode::BAD_GATEWAY, message)
    }
}
