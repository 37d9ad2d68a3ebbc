//! Utility functions and helpers for server operations.
//!
//! Case-insensitive search over fetched rows, money rounding, calendar helpers for the
//! dashboard and report date windows, and test helpers.

pub mod form;
pub mod money;
pub mod search;
pub mod time;
