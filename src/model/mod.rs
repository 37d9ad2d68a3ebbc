//! Data transfer objects shared by the server API and the web front end.

pub mod api;
pub mod billing;
pub mod care;
pub mod dashboard;
pub mod public;
pub mod report;
pub mod schedule;
pub mod user;
