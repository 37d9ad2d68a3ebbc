use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::care::CareLevel;

/// Inclusive date range; defaults to the first of the current month through today
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
pub struct ReportQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct WorkerPerformanceDto {
    pub worker_id: Uuid,
    pub full_name: String,
    pub hours: f64,
    /// Approved hours multiplied by the worker's hourly rate
    pub revenue: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CareDistributionDto {
    pub care_level: CareLevel,
    pub label: String,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MonthlyRevenueDto {
    /// Month formatted as `YYYY-MM`
    pub month: String,
    pub revenue: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ReportDto {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_revenue: f64,
    pub total_shifts: u64,
    pub total_hours: f64,
    pub active_workers: u64,
    pub active_clients: u64,
    pub average_hourly_rate: f64,
    pub top_workers: Vec<WorkerPerformanceDto>,
    pub care_distribution: Vec<CareDistributionDto>,
    pub monthly_revenue: Vec<MonthlyRevenueDto>,
}
