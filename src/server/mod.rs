//! Server application core modules.
//!
//! This module contains all server-side functionality for Serene Wings: HTTP routing,
//! delegated authentication against the hosted auth service, the transactional email client,
//! database repositories for the care back-office, and the services computing dashboard and
//! report aggregates over fetched rows.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod provider;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
