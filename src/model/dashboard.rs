use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DashboardStatsDto {
    pub total_workers: u64,
    pub active_workers: u64,
    pub total_clients: u64,
    pub active_clients: u64,
    pub shifts_today: u64,
    /// Hours across submitted timesheets
    pub total_hours: f64,
    pub pending_timesheets: u64,
    pub draft_invoice_total: f64,
    pub draft_invoices: u64,
    pub pending_expenses: u64,
}

/// One audit log entry rendered as recent activity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ActivityDto {
    pub id: Uuid,
    pub user_name: Option<String>,
    pub action: String,
    pub table_name: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DashboardDto {
    pub stats: DashboardStatsDto,
    pub recent_activity: Vec<ActivityDto>,
}
