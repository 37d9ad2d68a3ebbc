use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug, PartialEq)]
pub enum ScheduleError {
    #[error("This worker already has a shift scheduled during this time")]
    ShiftConflict,
    #[error("No open time entry to clock out of")]
    NotClockedIn,
}

impl IntoResponse for ScheduleError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::ShiftConflict => error_response(StatusCode::CONFLICT, self.to_string()),
            Self::NotClockedIn => {
                error_response(StatusCode::BAD_REQUEST, "You are not clocked in.")
            }
        }
    }
}
