use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        dashboard::DashboardDto,
        report::{ReportDto, ReportQuery},
    },
    server::{
        controller::util::guard::{require_role, Access},
        error::Error,
        model::app::AppState,
        service::{dashboard::DashboardService, report::ReportService},
    },
};

pub static ANALYTICS_TAG: &str = "analytics";

/// Admin dashboard figures and recent activity
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = ANALYTICS_TAG,
    responses(
        (status = 200, description = "Dashboard", body = DashboardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Access::Admin).await?;

    let dashboard = DashboardService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(dashboard)))
}

/// Report for a date range, month to date by default
///
/// Both ends of the range are inclusive.
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = ANALYTICS_TAG,
    params(ReportQuery),
    responses(
        (status = 200, description = "Report", body = ReportDto),
        (status = 400, description = "End date before start date", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_report(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Access::Admin).await?;

    let report = ReportService::new(&state.db).report(&query).await?;

    Ok((StatusCode::OK, Json(report)))
}
