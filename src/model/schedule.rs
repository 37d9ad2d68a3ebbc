use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::user::UserDto;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl ShiftStatus {
    pub const ALL: [ShiftStatus; 4] = [
        Self::Scheduled,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// How a shift is presented to the worker relative to the current time
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ShiftPhase {
    Completed,
    Cancelled,
    InProgress,
    Upcoming,
    Past,
}

impl ShiftPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::InProgress => "In Progress",
            Self::Upcoming => "Upcoming",
            Self::Past => "Past",
        }
    }
}

/// Shift with the names of its worker and client resolved
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ShiftDto {
    pub id: Uuid,
    pub worker_id: Uuid,
    pub worker_name: Option<String>,
    pub client_id: Uuid,
    pub client_name: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: ShiftStatus,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ShiftFormDto {
    pub worker_id: Uuid,
    pub client_id: Uuid,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ShiftStatusDto {
    pub status: ShiftStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ShiftSummaryDto {
    /// Shifts starting today
    pub today: u64,
    /// Scheduled shifts starting after now
    pub upcoming: u64,
    /// Shifts starting today that are completed
    pub completed_today: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ShiftBoardDto {
    pub shifts: Vec<ShiftDto>,
    pub summary: ShiftSummaryDto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum TimesheetStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TimesheetDto {
    pub id: Uuid,
    pub worker_id: Uuid,
    pub worker_name: Option<String>,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub total_hours: f64,
    pub status: TimesheetStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TimesheetFormDto {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub total_hours: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TimesheetStatusDto {
    pub status: TimesheetStatus,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
pub struct TimesheetQuery {
    pub status: Option<TimesheetStatus>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum TimeEntryStatus {
    ClockedIn,
    ClockedOut,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TimeEntryDto {
    pub id: Uuid,
    pub worker_id: Uuid,
    pub shift_id: Option<Uuid>,
    pub clock_in: NaiveDateTime,
    pub clock_out: Option<NaiveDateTime>,
    pub status: TimeEntryStatus,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ClockInDto {
    pub shift_id: Option<Uuid>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PortalShiftDto {
    pub shift: ShiftDto,
    pub phase: ShiftPhase,
}

/// Everything the worker portal shows on one page
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct WorkerPortalDto {
    pub profile: UserDto,
    /// Shifts from the start of today onward, earliest first
    pub shifts: Vec<PortalShiftDto>,
    pub today_shifts: Vec<PortalShiftDto>,
    /// Next five shifts starting after now
    pub upcoming_shifts: Vec<PortalShiftDto>,
    /// Latest five timesheets, newest week first
    pub timesheets: Vec<TimesheetDto>,
    pub open_entry: Option<TimeEntryDto>,
    pub weekly_hours: f64,
}
