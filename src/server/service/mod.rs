//! Service layer for business logic.
//!
//! Services validate input, coordinate repositories and the external email and auth APIs, and
//! convert database models into the DTOs returned by the controllers. Admin operations live in
//! one service per record type; the worker portal and the public forms have their own.

pub mod audit;
pub mod auth;
pub mod client;
pub mod consultation;
pub mod contact;
pub mod dashboard;
pub mod expense;
pub mod invoice;
pub mod lookup;
pub mod portal;
pub mod report;
pub mod shift;
pub mod testimonial;
pub mod timesheet;
pub mod worker;
