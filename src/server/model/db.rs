//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate so that signatures across the
//! repositories and services stay readable.

/// Admin or worker profile (`users`).
pub type UserModel = entity::user::Model;

/// Care recipient (`clients`).
pub type ClientModel = entity::client::Model;

/// Scheduled visit of a worker to a client (`shifts`).
pub type ShiftModel = entity::shift::Model;

/// Weekly hours submitted by a worker (`timesheets`).
pub type TimesheetModel = entity::timesheet::Model;

/// Bill issued to a client (`invoices`).
pub type InvoiceModel = entity::invoice::Model;

/// Reimbursement claim submitted by a worker (`expenses`).
pub type ExpenseModel = entity::expense::Model;

/// Clock in/out pair (`time_entries`).
pub type TimeEntryModel = entity::time_entry::Model;

/// Public review (`testimonials`).
pub type TestimonialModel = entity::testimonial::Model;

/// Audit trail row (`audit_logs`).
pub type AuditLogModel = entity::audit_log::Model;
