use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        billing::{ExpenseDto, ExpenseFormDto},
        schedule::{ClockInDto, TimeEntryDto, TimesheetDto, TimesheetFormDto, WorkerPortalDto},
    },
    server::{
        controller::util::guard::{require_role, Access},
        error::Error,
        model::app::AppState,
        service::{expense::ExpenseService, portal::PortalService, timesheet::TimesheetService},
    },
};

pub static PORTAL_TAG: &str = "portal";

/// The logged in worker's portal
///
/// Shifts from today on with their display phase, recent timesheets, this week's hours and the
/// open clock entry, if any.
#[utoipa::path(
    get,
    path = "/api/portal",
    tag = PORTAL_TAG,
    responses(
        (status = 200, description = "Worker portal", body = WorkerPortalDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Worker role required or account deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_portal(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let worker = require_role(&state, &session, Access::Worker).await?;

    let portal = PortalService::new(&state.db).portal(worker).await?;

    Ok((StatusCode::OK, Json(portal)))
}

/// Clock in, optionally against a shift
#[utoipa::path(
    post,
    path = "/api/portal/clock-in",
    tag = PORTAL_TAG,
    request_body = ClockInDto,
    responses(
        (status = 201, description = "Clocked in", body = TimeEntryDto),
        (status = 403, description = "Worker role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn clock_in(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<ClockInDto>,
) -> Result<impl IntoResponse, Error> {
    let worker = require_role(&state, &session, Access::Worker).await?;

    let entry = PortalService::new(&state.db)
        .clock_in(worker.id, body.shift_id)
        .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Clock out of the newest open entry
#[utoipa::path(
    post,
    path = "/api/portal/clock-out",
    tag = PORTAL_TAG,
    responses(
        (status = 200, description = "Clocked out", body = TimeEntryDto),
        (status = 400, description = "Not clocked in", body = ErrorDto),
        (status = 403, description = "Worker role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn clock_out(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let worker = require_role(&state, &session, Access::Worker).await?;

    let entry = PortalService::new(&state.db).clock_out(worker.id).await?;

    Ok((StatusCode::OK, Json(entry)))
}

/// Submit a timesheet for a week
#[utoipa::path(
    post,
    path = "/api/portal/timesheets",
    tag = PORTAL_TAG,
    request_body = TimesheetFormDto,
    responses(
        (status = 201, description = "Timesheet submitted", body = TimesheetDto),
        (status = 400, description = "Invalid week or hours", body = ErrorDto),
        (status = 403, description = "Worker role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_timesheet(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<TimesheetFormDto>,
) -> Result<impl IntoResponse, Error> {
    let worker = require_role(&state, &session, Access::Worker).await?;

    let timesheet = TimesheetService::new(&state.db)
        .submit(worker.id, &form)
        .await?;

    Ok((StatusCode::CREATED, Json(timesheet)))
}

/// Submit an expense claim
#[utoipa::path(
    post,
    path = "/api/portal/expenses",
    tag = PORTAL_TAG,
    request_body = ExpenseFormDto,
    responses(
        (status = 201, description = "Expense submitted", body = ExpenseDto),
        (status = 400, description = "Missing description or invalid amount", body = ErrorDto),
        (status = 403, description = "Worker role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_expense(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<ExpenseFormDto>,
) -> Result<impl IntoResponse, Error> {
    let worker = require_role(&state, &session, Access::Worker).await?;

    let expense = ExpenseService::new(&state.db)
        .submit(worker.id, &form)
        .await?;

    Ok((StatusCode::CREATED, Json(expense)))
}
