//! Data access layer repositories.
//!
//! One repository per table. Repositories only issue queries; joins are resolved by the
//! services with follow-up `IN` queries over the IDs of the fetched rows.

pub mod audit_log;
pub mod client;
pub mod expense;
pub mod invoice;
pub mod shift;
pub mod testimonial;
pub mod time_entry;
pub mod timesheet;
pub mod user;
