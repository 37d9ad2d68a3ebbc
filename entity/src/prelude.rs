pub use super::audit_log::Entity as AuditLog;
pub use super::client::Entity as Client;
pub use super::expense::Entity as Expense;
pub use super::invoice::Entity as Invoice;
pub use super::shift::Entity as Shift;
pub use super::testimonial::Entity as Testimonial;
pub use super::time_entry::Entity as TimeEntry;
pub use super::timesheet::Entity as Timesheet;
pub use super::user::Entity as User;
