//! Admin dashboard aggregates.
//!
//! Each row set is fetched independently and concurrently, then counted in memory.

use entity::sea_orm_active_enums::{ExpenseStatus, InvoiceStatus, TimesheetStatus, UserRole};
use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::{DashboardDto, DashboardStatsDto},
    server::{
        data::{
            client::ClientRepository, expense::ExpenseRepository, invoice::InvoiceRepository,
            shift::ShiftRepository, timesheet::TimesheetRepository, user::UserRepository,
        },
        error::Error,
        model::db::{ClientModel, ExpenseModel, InvoiceModel, ShiftModel, TimesheetModel, UserModel},
        service::audit::AuditService,
        util::{money::round2, time},
    },
};

/// Number of audit entries shown as recent activity
pub const RECENT_ACTIVITY_LIMIT: u64 = 10;

/// Row sets the dashboard is computed from.
pub struct DashboardRows {
    pub workers: Vec<UserModel>,
    pub clients: Vec<ClientModel>,
    pub shifts_today: Vec<ShiftModel>,
    pub timesheets: Vec<TimesheetModel>,
    pub invoices: Vec<InvoiceModel>,
    pub expenses: Vec<ExpenseModel>,
}

/// Count and sum the dashboard figures.
pub fn compute_stats(rows: &DashboardRows) -> DashboardStatsDto {
    let submitted: Vec<&TimesheetModel> = rows
        .timesheets
        .iter()
        .filter(|t| t.status == TimesheetStatus::Submitted)
        .collect();
    let drafts: Vec<&InvoiceModel> = rows
        .invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Draft)
        .collect();

    DashboardStatsDto {
        total_workers: rows.workers.len() as u64,
        active_workers: rows.workers.iter().filter(|w| w.is_active).count() as u64,
        total_clients: rows.clients.len() as u64,
        active_clients: rows.clients.iter().filter(|c| c.is_active).count() as u64,
        shifts_today: rows.shifts_today.len() as u64,
        total_hours: round2(submitted.iter().map(|t| t.total_hours).sum()),
        pending_timesheets: submitted.len() as u64,
        draft_invoice_total: round2(drafts.iter().map(|i| i.total_amount).sum()),
        draft_invoices: drafts.len() as u64,
        pending_expenses: rows
            .expenses
            .iter()
            .filter(|e| e.status == ExpenseStatus::Pending)
            .count() as u64,
    }
}

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    /// Creates a new instance of [`DashboardService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch every row set concurrently and compute the dashboard.
    pub async fn dashboard(&self) -> Result<DashboardDto, Error> {
        let (today_start, today_end) = time::day_bounds(time::now().date());

        let user_repo = UserRepository::new(self.db);
        let client_repo = ClientRepository::new(self.db);
        let shift_repo = ShiftRepository::new(self.db);
        let timesheet_repo = TimesheetRepository::new(self.db);
        let invoice_repo = InvoiceRepository::new(self.db);
        let expense_repo = ExpenseRepository::new(self.db);

        let (workers, clients, shifts_today, timesheets, invoices, expenses) = futures::try_join!(
            user_repo.list_by_role(UserRole::Worker),
            client_repo.list(),
            shift_repo.list_starting_between(today_start, today_end),
            timesheet_repo.list(Some(TimesheetStatus::Submitted)),
            invoice_repo.list(),
            expense_repo.list(Some(ExpenseStatus::Pending)),
        )?;

        let recent_activity = AuditService::new(self.db)
            .recent_activity(RECENT_ACTIVITY_LIMIT)
            .await?;

        let stats = compute_stats(&DashboardRows {
            workers,
            clients,
            shifts_today,
            timesheets,
            invoices,
            expenses,
        });

        Ok(DashboardDto {
            stats,
            recent_activity,
        })
    }
}

#[cfg(test)]
mod tests {
    mod compute_stats {
        use chrono::{NaiveDate, Utc};
        use entity::sea_orm_active_enums::{CareLevel, InvoiceStatus, TimesheetStatus};
        use serenewings_test_utils::prelude::*;
        use uuid::Uuid;

        use crate::server::service::dashboard::{compute_stats, DashboardRows};

        /// Expect counts and sums over the relevant statuses only
        #[test]
        fn counts_rows() {
            let now = Utc::now().naive_utc();
            let week = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
            let mut inactive = factory::mock_worker_model("John Roe", Some(18.0));
            inactive.is_active = false;

            let rows = DashboardRows {
                workers: vec![factory::mock_worker_model("Jane Doe", Some(20.0)), inactive],
                clients: vec![factory::mock_client_model("Amy Pond", CareLevel::Companion)],
                shifts_today: Vec::new(),
                timesheets: vec![
                    factory::mock_timesheet_model(Uuid::new_v4(), week, 20.5, TimesheetStatus::Submitted),
                    factory::mock_timesheet_model(Uuid::new_v4(), week, 10.0, TimesheetStatus::Submitted),
                    factory::mock_timesheet_model(Uuid::new_v4(), week, 40.0, TimesheetStatus::Approved),
                ],
                invoices: vec![
                    factory::mock_invoice_model(100.0, InvoiceStatus::Draft, now),
                    factory::mock_invoice_model(8.25, InvoiceStatus::Draft, now),
                    factory::mock_invoice_model(500.0, InvoiceStatus::Paid, now),
                ],
                expenses: Vec::new(),
            };

            let stats = compute_stats(&rows);

            assert_eq!(stats.total_workers, 2);
            assert_eq!(stats.active_workers, 1);
            assert_eq!(stats.active_clients, 1);
            assert_eq!(stats.total_hours, 30.5);
            assert_eq!(stats.pending_timesheets, 2);
            assert_eq!(stats.draft_invoice_total, 108.25);
            assert_eq!(stats.draft_invoices, 2);
        }
    }

    mod dashboard {
        use chrono::{Duration, Utc};
        use entity::sea_orm_active_enums::{CareLevel, ExpenseStatus, ShiftStatus};
        use serenewings_test_utils::prelude::*;

        use crate::server::{service::dashboard::DashboardService, util::time};

        /// Expect figures from the database and recent activity
        #[tokio::test]
        async fn fetches_and_counts() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let admin = test.user().insert_admin("Ada Admin").await?;
            let worker = test.user().insert_worker("Jane Doe").await?;
            let client = test.care().insert_client("Amy Pond", CareLevel::Companion).await?;
            let (today, _) = time::day_bounds(Utc::now().date_naive());
            test.care()
                .insert_shift(
                    worker.id,
                    client.id,
                    today + Duration::hours(1),
                    today + Duration::hours(5),
                    ShiftStatus::Scheduled,
                )
                .await?;
            test.care()
                .insert_expense(worker.id, 12.0, ExpenseStatus::Pending)
                .await?;
            test.care()
                .insert_audit_log(Some(admin.id), "login", Utc::now().naive_utc())
                .await?;

            let dashboard = DashboardService::new(&test.db).dashboard().await.unwrap();

            assert_eq!(dashboard.stats.total_workers, 1);
            assert_eq!(dashboard.stats.total_clients, 1);
            assert_eq!(dashboard.stats.shifts_today, 1);
            assert_eq!(dashboard.stats.pending_expenses, 1);
            assert_eq!(dashboard.recent_activity.len(), 1);
            assert_eq!(
                dashboard.recent_activity[0].user_name.as_deref(),
                Some("Ada Admin")
            );

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let result = DashboardService::new(&test.db).dashboard().await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
