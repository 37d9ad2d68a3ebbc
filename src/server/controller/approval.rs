use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        billing::{ExpenseDto, ExpenseQuery, ExpenseStatusDto},
        schedule::{TimesheetDto, TimesheetQuery, TimesheetStatusDto},
    },
    server::{
        controller::util::guard::{require_role, Access},
        error::Error,
        model::app::AppState,
        service::{expense::ExpenseService, timesheet::TimesheetService},
    },
};

pub static APPROVAL_TAG: &str = "approval";

/// Timesheets, newest first, optionally filtered by status
#[utoipa::path(
    get,
    path = "/api/timesheets",
    tag = APPROVAL_TAG,
    params(TimesheetQuery),
    responses(
        (status = 200, description = "Timesheets", body = Vec<TimesheetDto>),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_timesheets(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<TimesheetQuery>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Access::Admin).await?;

    let timesheets = TimesheetService::new(&state.db).list(query.status).await?;

    Ok((StatusCode::OK, Json(timesheets)))
}

/// Approve, reject or otherwise change a timesheet's status
#[utoipa::path(
    put,
    path = "/api/timesheets/{id}/status",
    tag = APPROVAL_TAG,
    params(("id" = Uuid, Path, description = "Timesheet ID")),
    request_body = TimesheetStatusDto,
    responses(
        (status = 200, description = "Status changed", body = TimesheetDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Timesheet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_timesheet_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(body): Json<TimesheetStatusDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Access::Admin).await?;

    let timesheet = TimesheetService::new(&state.db)
        .update_status(id, body.status)
        .await?;

    Ok((StatusCode::OK, Json(timesheet)))
}

/// Expense claims, newest first, optionally filtered by status
#[utoipa::path(
    get,
    path = "/api/expenses",
    tag = APPROVAL_TAG,
    params(ExpenseQuery),
    responses(
        (status = 200, description = "Expenses", body = Vec<ExpenseDto>),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_expenses(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ExpenseQuery>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Access::Admin).await?;

    let expenses = ExpenseService::new(&state.db).list(query.status).await?;

    Ok((StatusCode::OK, Json(expenses)))
}

/// Change an expense claim's status
#[utoipa::path(
    put,
    path = "/api/expenses/{id}/status",
    tag = APPROVAL_TAG,
    params(("id" = Uuid, Path, description = "Expense ID")),
    request_body = ExpenseStatusDto,
    responses(
        (status = 200, description = "Status changed", body = ExpenseDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Expense not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_expense_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(body): Json<ExpenseStatusDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Access::Admin).await?;

    let expense = ExpenseService::new(&state.db)
        .update_status(id, body.status)
        .await?;

    Ok((StatusCode::OK, Json(expense)))
}
