pub use sea_orm_migration::prelude::*;

mod m20250115_000001_users;
mod m20250115_000002_clients;
mod m20250115_000003_shifts;
mod m20250115_000004_timesheets;
mod m20250115_000005_invoices;
mod m20250115_000006_expenses;
mod m20250115_000007_time_entries;
mod m20250115_000008_testimonials;
mod m20250115_000009_audit_logs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250115_000001_users::Migration),
            Box::new(m20250115_000002_clients::Migration),
            Box::new(m20250115_000003_shifts::Migration),
            Box::new(m20250115_000004_timesheets::Migration),
            Box::new(m20250115_000005_invoices::Migration),
            Box::new(m20250115_000006_expenses::Migration),
            Box::new(m20250115_000007_time_entries::Migration),
            Box::new(m20250115_000008_testimonials::Migration),
            Box::new(m20250115_000009_audit_logs::Migration),
        ]
    }
}
