use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;
use uuid::Uuid;

use crate::server::error::error_response;

#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    #[error("{table} record {id:?} not found")]
    NotFound { table: &'static str, id: Uuid },
}

impl IntoResponse for RecordError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound { table, .. } => {
                error_response(StatusCode::NOT_FOUND, format!("{} not found", table))
            }
        }
    }
}
