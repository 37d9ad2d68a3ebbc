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
        care::{ClientDto, ClientFormDto},
    },
    server::{
        controller::util::guard::{require_role, Access},
        error::Error,
        model::app::AppState,
        service::client::ClientService,
    },
};

pub static CLIENT_TAG: &str = "client";

/// List clients, newest first
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = CLIENT_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Clients matching the search", body = Vec<ClientDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Access::Admin).await?;

    let clients = ClientService::new(&state.db)
        .list(query.search.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(clients)))
}

/// Active clients, by name
///
/// Used to fill the client selects of the shift and invoice forms.
#[utoipa::path(
    get,
    path = "/api/clients/active",
    tag = CLIENT_TAG,
    responses(
        (status = 200, description = "Active clients", body = Vec<ClientDto>),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_clients(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Access::Admin).await?;

    let clients = ClientService::new(&state.db).list_active().await?;

    Ok((StatusCode::OK, Json(clients)))
}

/// Add a client
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = CLIENT_TAG,
    request_body = ClientFormDto,
    responses(
        (status = 201, description = "Client created", body = ClientDto),
        (status = 400, description = "Invalid client details", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_client(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<ClientFormDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Access::Admin).await?;

    let client = ClientService::new(&state.db).create(&form).await?;

    Ok((StatusCode::CREATED, Json(client)))
}

/// Update a client's details
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(("id" = Uuid, Path, description = "Client ID")),
    request_body = ClientFormDto,
    responses(
        (status = 200, description = "Client updated", body = ClientDto),
        (status = 400, description = "Invalid client details", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_client(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(form): Json<ClientFormDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Access::Admin).await?;

    let client = ClientService::new(&state.db).update(id, &form).await?;

    Ok((StatusCode::OK, Json(client)))
}

/// Activate or deactivate a client
///
/// Answers with the refreshed client list.
#[utoipa::path(
    put,
    path = "/api/clients/{id}/active",
    tag = CLIENT_TAG,
    params(("id" = Uuid, Path, description = "Client ID")),
    request_body = SetActiveDto,
    responses(
        (status = 200, description = "Flag updated, all clients", body = Vec<ClientDto>),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_client_active(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(body): Json<SetActiveDto>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Access::Admin).await?;

    let clients = ClientService::new(&state.db)
        .set_active(id, body.is_active)
        .await?;

    Ok((StatusCode::OK, Json(clients)))
}
