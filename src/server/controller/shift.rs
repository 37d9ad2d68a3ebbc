use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, SearchQuery},
        schedule::{ShiftBoardDto, ShiftDto, ShiftFormDto, ShiftStatusDto},
    },
    server::{
        controller::util::guard::{require_role, Access},
        error::Error,
        model::app::AppState,
        service::{
            audit::{AuditEvent, AuditService, RequestMeta},
            shift::ShiftService,
        },
    },
};

pub static SHIFT_TAG: &str = "shift";

/// All shifts by start time with today's summary
#[utoipa::path(
    get,
    path = "/api/shifts",
    tag = SHIFT_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Shift board", body = ShiftBoardDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shifts(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Access::Admin).await?;

    let board = ShiftService::new(&state.db)
        .board(query.search.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(board)))
}

/// Schedule a shift
///
/// Refused when the worker already has a shift that is not cancelled starting inside the new
/// shift's window.
#[utoipa::path(
    post,
    path = "/api/shifts",
    tag = SHIFT_TAG,
    request_body = ShiftFormDto,
    responses(
        (status = 201, description = "Shift scheduled", body = ShiftDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 409, description = "Worker already has a shift during this time", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_shift(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(form): Json<ShiftFormDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_role(&state, &session, Access::Admin).await?;

    let shift = ShiftService::new(&state.db).create(&form).await?;

    AuditService::new(&state.db)
        .record(
            AuditEvent::new(admin.id, "create_shift").on("shifts", shift.id),
            &RequestMeta::from_headers(&headers),
        )
        .await;

    Ok((StatusCode::CREATED, Json(shift)))
}

/// Change a shift's status
#[utoipa::path(
    put,
    path = "/api/shifts/{id}/status",
    tag = SHIFT_TAG,
    params(("id" = Uuid, Path, description = "Shift ID")),
    request_body = ShiftStatusDto,
    responses(
        (status = 200, description = "Status changed", body = ShiftDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Shift not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_shift_status(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(body): Json<ShiftStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_role(&state, &session, Access::Admin).await?;

    let shift = ShiftService::new(&state.db)
        .update_status(id, body.status)
        .await?;

    AuditService::new(&state.db)
        .record(
            AuditEvent::new(admin.id, "update_shift_status").on("shifts", shift.id),
            &RequestMeta::from_headers(&headers),
        )
        .await;

    Ok((StatusCode::OK, Json(shift)))
}
