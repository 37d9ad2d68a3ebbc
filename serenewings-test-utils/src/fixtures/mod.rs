//! Database and HTTP fixtures used while a test runs.
//!
//! - `auth` - hosted auth API endpoints (sign-in, sign-up, logout)
//! - `care` - clients, shifts, timesheets, invoices and the other care records
//! - `email` - transactional email API endpoints
//! - `factory` - in-memory models for tests that never touch the database
//! - `user` - worker and admin profiles

pub mod auth;
pub mod care;
pub mod email;
pub mod factory;
pub mod user;
