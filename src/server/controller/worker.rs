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
        api::{ErrorDto, SearchQuery, SetActiveDto},
        user::{UserDto, WorkerFormDto},
    },
    server::{
        controller::util::guard::{require_role, Access},
        error::Error,
        model::app::AppState,
        service::worker::WorkerService,
    },
};

pub static WORKER_TAG: &str = "worker";

/// List workers, newest first
#[utoipa::path(
    get,
    path = "/api/workers",
    tag = WORKER_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Workers matching the search", body = Vec<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workers(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Access::Admin).await?;

    let workers = WorkerService::new(&state.db)
        .list(query.search.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(workers)))
}

/// Add a worker
#[utoipa::path(
    post,
    path = "/api/workers",
    tag = WORKER_TAG,
    request_body = WorkerFormDto,
    responses(
        (status = 201, description = "Worker created", body = UserDto),
        (status = 400, description = "Invalid worker details", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_worker(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<WorkerFormDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Access::Admin).await?;

    let worker = WorkerService::new(&state.db).create(&form).await?;

    Ok((StatusCode::CREATED, Json(worker)))
}

/// Update a worker's details
#[utoipa::path(
    put,
    path = "/api/workers/{id}",
    tag = WORKER_TAG,
    params(("id" = Uuid, Path, description = "Worker ID")),
    request_body = WorkerFormDto,
    responses(
        (status = 200, description = "Worker updated", body = UserDto),
        (status = 400, description = "Invalid worker details", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Worker not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_worker(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(form): Json<WorkerFormDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Access::Admin).await?;

    let worker = WorkerService::new(&state.db).update(id, &form).await?;

    Ok((StatusCode::OK, Json(worker)))
}

/// Activate or deactivate a worker
///
/// Answers with the refreshed worker list.
#[utoipa::path(
    put,
    path = "/api/workers/{id}/active",
    tag = WORKER_TAG,
    params(("id" = Uuid, Path, description = "Worker ID")),
    request_body = SetActiveDto,
    responses(
        (status = 200, description = "Flag updated, all workers", body = Vec<UserDto>),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Worker not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_worker_active(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(body): Json<SetActiveDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Access::Admin).await?;

    let workers = WorkerService::new(&state.db)
        .set_active(id, body.is_active)
        .await?;

    Ok((StatusCode::OK, Json(workers)))
}
