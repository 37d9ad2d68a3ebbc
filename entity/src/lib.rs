//! SeaORM entities for the Serene Wings database tables.

pub mod prelude;

pub mod audit_log;
pub mod client;
pub mod expense;
pub mod invoice;
pub mod sea_orm_active_enums;
pub mod shift;
pub mod testimonial;
pub mod time_entry;
pub mod timesheet;
pub mod user;
