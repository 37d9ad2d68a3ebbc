//! Utility functions for controller request handling.
//!
//! Session user retrieval and the role guards protecting the admin and worker endpoints.

pub mod guard;
