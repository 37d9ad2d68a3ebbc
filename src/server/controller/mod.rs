//! HTTP controller endpoints for the Serene Wings JSON API.
//!
//! Axum handlers for the public forms, delegated authentication, the admin back-office and the
//! worker portal. Handlers check the session user's role, call into the services and return
//! JSON. Every handler carries a utoipa path annotation for the OpenAPI document.

pub mod analytics;
pub mod approval;
pub mod auth;
pub mod client;
pub mod invoice;
pub mod portal;
pub mod public;
pub mod shift;
pub mod util;
pub mod worker;
