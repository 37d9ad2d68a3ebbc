//! Reports and analytics over an inclusive date range.

use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, NaiveDate};
use entity::sea_orm_active_enums::{InvoiceStatus, TimesheetStatus, UserRole};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{
        care::CareLevel,
        report::{
            CareDistributionDto, MonthlyRevenueDto, ReportDto, ReportQuery, WorkerPerformanceDto,
        },
    },
    server::{
        data::{
            client::ClientRepository, invoice::InvoiceRepository, shift::ShiftRepository,
            timesheet::TimesheetRepository, user::UserRepository,
        },
        error::{form::FormError, Error},
        model::db::{ClientModel, InvoiceModel, ShiftModel, TimesheetModel, UserModel},
        util::{money::round2, time},
    },
};

/// Number of workers listed under top performers
pub const TOP_WORKER_LIMIT: usize = 5;

/// Resolve the query into a concrete `(start, end)` pair, both inclusive.
///
/// Missing bounds default to the first of the month containing `today` through `today`.
pub fn resolve_range(
    query: &ReportQuery,
    today: NaiveDate,
) -> Result<(NaiveDate, NaiveDate), Error> {
    let start = match query.start {
        Some(start) => start,
        None => time::first_of_month(today)?,
    };
    let end = query.end.unwrap_or(today);

    if end < start {
        return Err(FormError::InvalidField(
            "End date must not be before the start date.".to_string(),
        )
        .into());
    }

    Ok((start, end))
}

/// Row sets a report is computed from, already limited to the range where the
/// repositories allow it.
pub struct ReportRows {
    pub invoices: Vec<InvoiceModel>,
    pub shifts: Vec<ShiftModel>,
    pub timesheets: Vec<TimesheetModel>,
    pub workers: Vec<UserModel>,
    pub clients: Vec<ClientModel>,
    /// Profiles of every worker with an approved timesheet in range
    pub timesheet_workers: Vec<UserModel>,
}

/// Aggregate a report for the inclusive `start..=end` range.
pub fn compute_report(start: NaiveDate, end: NaiveDate, rows: ReportRows) -> ReportDto {
    let range_start = time::start_of_day(start);
    let range_end = time::start_of_day(end) + Duration::days(1);

    let paid: Vec<&InvoiceModel> = rows
        .invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Paid)
        .collect();
    let total_revenue = round2(paid.iter().map(|i| i.total_amount).sum());

    let mut by_month: BTreeMap<String, f64> = BTreeMap::new();
    for invoice in &paid {
        *by_month.entry(time::month_key(invoice.created_at)).or_default() += invoice.total_amount;
    }
    let monthly_revenue = by_month
        .into_iter()
        .map(|(month, revenue)| MonthlyRevenueDto {
            month,
            revenue: round2(revenue),
        })
        .collect();

    let total_shifts = rows
        .shifts
        .iter()
        .filter(|s| s.start_time >= range_start && s.end_time < range_end)
        .count() as u64;

    let approved: Vec<&TimesheetModel> = rows
        .timesheets
        .iter()
        .filter(|t| t.status == TimesheetStatus::Approved)
        .filter(|t| t.week_start >= start && t.week_end <= end)
        .collect();
    let total_hours = round2(approved.iter().map(|t| t.total_hours).sum());

    let active_workers: Vec<&UserModel> = rows
        .workers
        .iter()
        .filter(|w| w.role == UserRole::Worker && w.is_active)
        .collect();
    let rate_sum: f64 = active_workers.iter().filter_map(|w| w.hourly_rate).sum();
    let average_hourly_rate = round2(rate_sum / active_workers.len().max(1) as f64);

    let active_clients: Vec<&ClientModel> = rows.clients.iter().filter(|c| c.is_active).collect();

    let mut hours_by_worker: HashMap<Uuid, f64> = HashMap::new();
    for timesheet in &approved {
        *hours_by_worker.entry(timesheet.worker_id).or_default() += timesheet.total_hours;
    }
    let profiles: HashMap<Uuid, &UserModel> =
        rows.timesheet_workers.iter().map(|w| (w.id, w)).collect();

    let mut top_workers: Vec<WorkerPerformanceDto> = hours_by_worker
        .into_iter()
        .map(|(worker_id, hours)| {
            let profile = profiles.get(&worker_id);
            let rate = profile.and_then(|w| w.hourly_rate).unwrap_or(0.0);

            WorkerPerformanceDto {
                worker_id,
                full_name: profile
                    .map(|w| w.full_name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                hours: round2(hours),
                revenue: round2(hours * rate),
            }
        })
        .collect();
    top_workers.sort_by(|a, b| {
        b.hours
            .total_cmp(&a.hours)
            .then_with(|| a.full_name.cmp(&b.full_name))
    });
    top_workers.truncate(TOP_WORKER_LIMIT);

    let care_distribution = CareLevel::ALL
        .into_iter()
        .filter_map(|level| {
            let count = active_clients
                .iter()
                .filter(|c| CareLevel::from(c.care_level.clone()) == level)
                .count() as u64;

            (count > 0).then(|| CareDistributionDto {
                care_level: level,
                label: level.label().to_string(),
                count,
            })
        })
        .collect();

    ReportDto {
        start,
        end,
        total_revenue,
        total_shifts,
        total_hours,
        active_workers: active_workers.len() as u64,
        active_clients: active_clients.len() as u64,
        average_hourly_rate,
        top_workers,
        care_distribution,
        monthly_revenue,
    }
}

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    /// Creates a new instance of [`ReportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Build the report for `query`, defaulting to month to date.
    ///
    /// # Returns
    /// - `Ok(ReportDto)` - Aggregated report
    /// - `Err(FormError::InvalidField)` - End date before start date
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn report(&self, query: &ReportQuery) -> Result<ReportDto, Error> {
        let (start, end) = resolve_range(query, time::now().date())?;
        let range_start = time::start_of_day(start);
        let range_end = time::start_of_day(end) + Duration::days(1);

        let user_repo = UserRepository::new(self.db);
        let client_repo = ClientRepository::new(self.db);
        let invoice_repo = InvoiceRepository::new(self.db);
        let shift_repo = ShiftRepository::new(self.db);
        let timesheet_repo = TimesheetRepository::new(self.db);

        let (invoices, shifts, timesheets, workers, clients) = futures::try_join!(
            invoice_repo.list_created_between(range_start, range_end),
            shift_repo.list_starting_between(range_start, range_end),
            timesheet_repo.list(Some(TimesheetStatus::Approved)),
            user_repo.list_by_role(UserRole::Worker),
            client_repo.list_active(),
        )?;

        let worker_ids: Vec<Uuid> = timesheets.iter().map(|t| t.worker_id).collect();
        let timesheet_workers = user_repo.find_by_ids(worker_ids).await?;

        Ok(compute_report(
            start,
            end,
            ReportRows {
                invoices,
                shifts,
                timesheets,
                workers,
                clients,
                timesheet_workers,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    mod resolve_range {
        use chrono::NaiveDate;

        use crate::{
            model::report::ReportQuery,
            server::{
                error::{form::FormError, Error},
                service::report::resolve_range,
            },
        };

        /// Expect month to date when no bounds are given
        #[test]
        fn defaults_to_month_to_date() {
            let today = NaiveDate::from_ymd_opt(2025, 3, 18).unwrap();

            let (start, end) = resolve_range(&ReportQuery::default(), today).unwrap();

            assert_eq!(start, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
            assert_eq!(end, today);
        }

        /// Expect InvalidField when the end precedes the start
        #[test]
        fn rejects_inverted_range() {
            let today = NaiveDate::from_ymd_opt(2025, 3, 18).unwrap();
            let query = ReportQuery {
                start: Some(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()),
                end: Some(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()),
            };

            let result = resolve_range(&query, today);

            assert!(matches!(
                result,
                Err(Error::FormError(FormError::InvalidField(_)))
            ));
        }
    }

    mod compute_report {
        use chrono::NaiveDate;
        use entity::sea_orm_active_enums::{
            CareLevel as DbCareLevel, InvoiceStatus, ShiftStatus, TimesheetStatus,
        };
        use serenewings_test_utils::prelude::*;

        use crate::{
            model::care::CareLevel,
            server::service::report::{compute_report, ReportRows},
        };

        fn date(day: u32) -> NaiveDate {
            NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
        }

        fn empty_rows() -> ReportRows {
            ReportRows {
                invoices: Vec::new(),
                shifts: Vec::new(),
                timesheets: Vec::new(),
                workers: Vec::new(),
                clients: Vec::new(),
                timesheet_workers: Vec::new(),
            }
        }

        /// Expect zeroes and no division by zero without data
        #[test]
        fn handles_empty_range() {
            let report = compute_report(date(1), date(31), empty_rows());

            assert_eq!(report.total_revenue, 0.0);
            assert_eq!(report.average_hourly_rate, 0.0);
            assert!(report.top_workers.is_empty());
            assert!(report.care_distribution.is_empty());
            assert!(report.monthly_revenue.is_empty());
        }

        /// Expect only paid invoices counted as revenue, grouped by month
        #[test]
        fn sums_paid_revenue() {
            let mut rows = empty_rows();
            rows.invoices = vec![
                factory::mock_invoice_model(100.0, InvoiceStatus::Paid, date(3).and_hms_opt(9, 0, 0).unwrap()),
                factory::mock_invoice_model(50.5, InvoiceStatus::Paid, date(20).and_hms_opt(9, 0, 0).unwrap()),
                factory::mock_invoice_model(999.0, InvoiceStatus::Sent, date(20).and_hms_opt(9, 0, 0).unwrap()),
            ];

            let report = compute_report(date(1), date(31), rows);

            assert_eq!(report.total_revenue, 150.5);
            assert_eq!(report.monthly_revenue.len(), 1);
            assert_eq!(report.monthly_revenue[0].month, "2025-03");
            assert_eq!(report.monthly_revenue[0].revenue, 150.5);
        }

        /// Expect shifts ending after the last day excluded and the last day itself included
        #[test]
        fn counts_shifts_inside_range() {
            let mut rows = empty_rows();
            rows.shifts = vec![
                factory::mock_shift_model(
                    date(10).and_hms_opt(20, 0, 0).unwrap(),
                    date(10).and_hms_opt(23, 0, 0).unwrap(),
                    ShiftStatus::Completed,
                ),
                factory::mock_shift_model(
                    date(10).and_hms_opt(22, 0, 0).unwrap(),
                    date(11).and_hms_opt(6, 0, 0).unwrap(),
                    ShiftStatus::Scheduled,
                ),
            ];

            let report = compute_report(date(1), date(10), rows);

            assert_eq!(report.total_shifts, 1);
        }

        /// Expect top workers ranked by approved hours with revenue at their rate
        #[test]
        fn ranks_workers_by_hours() {
            let jane = factory::mock_worker_model("Jane Doe", Some(20.0));
            let john = factory::mock_worker_model("John Roe", Some(18.0));
            let mut rows = empty_rows();
            rows.timesheets = vec![
                factory::mock_timesheet_model(jane.id, date(3), 30.0, TimesheetStatus::Approved),
                factory::mock_timesheet_model(john.id, date(3), 40.0, TimesheetStatus::Approved),
                factory::mock_timesheet_model(jane.id, date(10), 12.5, TimesheetStatus::Approved),
                factory::mock_timesheet_model(john.id, date(10), 99.0, TimesheetStatus::Submitted),
            ];
            rows.timesheet_workers = vec![jane.clone(), john.clone()];
            rows.workers = vec![jane.clone(), john.clone()];

            let report = compute_report(date(1), date(31), rows);

            assert_eq!(report.total_hours, 82.5);
            assert_eq!(report.average_hourly_rate, 19.0);
            assert_eq!(report.top_workers.len(), 2);
            assert_eq!(report.top_workers[0].worker_id, jane.id);
            assert_eq!(report.top_workers[0].hours, 42.5);
            assert_eq!(report.top_workers[0].revenue, 850.0);
            assert_eq!(report.top_workers[1].revenue, 720.0);
        }

        /// Expect timesheets reaching past the range left out
        #[test]
        fn ignores_weeks_outside_range() {
            let jane = factory::mock_worker_model("Jane Doe", Some(20.0));
            let mut rows = empty_rows();
            rows.timesheets = vec![factory::mock_timesheet_model(
                jane.id,
                date(28),
                40.0,
                TimesheetStatus::Approved,
            )];

            let report = compute_report(date(1), date(31), rows);

            assert_eq!(report.total_hours, 0.0);
            assert!(report.top_workers.is_empty());
        }

        /// Expect one entry per care level in use, in display order
        #[test]
        fn distributes_clients_by_care_level() {
            let mut rows = empty_rows();
            rows.clients = vec![
                factory::mock_client_model("Amy Pond", DbCareLevel::Respite),
                factory::mock_client_model("Rory Williams", DbCareLevel::Companion),
                factory::mock_client_model("Clara Oswald", DbCareLevel::Respite),
            ];

            let report = compute_report(date(1), date(31), rows);

            assert_eq!(report.active_clients, 3);
            assert_eq!(report.care_distribution.len(), 2);
            assert_eq!(report.care_distribution[0].care_level, CareLevel::Companion);
            assert_eq!(report.care_distribution[1].care_level, CareLevel::Respite);
            assert_eq!(report.care_distribution[1].count, 2);
            assert_eq!(report.care_distribution[1].label, "Respite Care");
        }
    }

    mod report {
        use chrono::{Duration, Utc};
        use entity::sea_orm_active_enums::{CareLevel, InvoiceStatus, TimesheetStatus};
        use serenewings_test_utils::prelude::*;

        use crate::{model::report::ReportQuery, server::service::report::ReportService};

        /// Expect revenue and hours for rows created today
        #[tokio::test]
        async fn reports_current_data() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let worker = test.user().insert_worker_with_rate("Jane Doe", 20.0).await?;
            let client = test.care().insert_client("Amy Pond", CareLevel::Personal).await?;
            test.care()
                .insert_invoice(client.id, "INV-202503-001", 250.0, InvoiceStatus::Paid)
                .await?;
            let today = Utc::now().date_naive();
            test.care()
                .insert_timesheet(worker.id, today - Duration::days(13), 10.0, TimesheetStatus::Approved)
                .await?;

            let query = ReportQuery {
                start: Some(today - Duration::days(20)),
                end: Some(today),
            };
            let report = ReportService::new(&test.db).report(&query).await.unwrap();

            assert_eq!(report.total_revenue, 250.0);
            assert_eq!(report.total_hours, 10.0);
            assert_eq!(report.active_workers, 1);
            assert_eq!(report.active_clients, 1);
            assert_eq!(report.top_workers[0].revenue, 200.0);

            Ok(())
        }
    }
}
