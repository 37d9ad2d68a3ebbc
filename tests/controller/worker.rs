use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::EntityTrait;
use serenewings::{
    model::{
        api::{SearchQuery, SetActiveDto},
        user::{UserDto, WorkerFormDto},
    },
    server::controller::worker::{create_worker, get_workers, set_worker_active},
};

use super::*;

/// Expect the stored flag flipped and the refetched list returned
#[tokio::test]
async fn deactivating_returns_refreshed_list() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test.user().insert_admin("Grace Hopper").await?;
    let worker = test.user().insert_worker("Jane Doe").await?;
    sign_in_as(&test, admin.id).await;

    let result = set_worker_active(
        State(test.app_state()),
        test.session.clone(),
        Path(worker.id),
        Json(SetActiveDto { is_active: false }),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let workers: Vec<UserDto> = read_json(response).await;
    assert_eq!(workers.len(), 1);
    assert!(!workers[0].is_active);

    let stored = entity::prelude::User::find_by_id(worker.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(!stored.is_active);

    Ok(())
}

/// Expect 404 for an unknown worker ID
#[tokio::test]
async fn toggling_unknown_worker_fails() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test.user().insert_admin("Grace Hopper").await?;
    sign_in_as(&test, admin.id).await;

    let result = set_worker_active(
        State(test.app_state()),
        test.session.clone(),
        Path(Uuid::new_v4()),
        Json(SetActiveDto { is_active: true }),
    )
    .await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 and no change when the ID belongs to another admin
#[tokio::test]
async fn toggling_admin_fails() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test.user().insert_admin("Grace Hopper").await?;
    let other = test.user().insert_admin("Ada Lovelace").await?;
    sign_in_as(&test, admin.id).await;

    let result = set_worker_active(
        State(test.app_state()),
        test.session.clone(),
        Path(other.id),
        Json(SetActiveDto { is_active: false }),
    )
    .await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let stored = entity::prelude::User::find_by_id(other.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(stored.is_active);

    Ok(())
}

/// Expect 403 for a worker calling an admin endpoint
#[tokio::test]
async fn workers_cannot_list_workers() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let worker = test.user().insert_worker("Jane Doe").await?;
    sign_in_as(&test, worker.id).await;

    let result = get_workers(
        State(test.app_state()),
        test.session.clone(),
        Query(SearchQuery::default()),
    )
    .await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 403 for a deactivated admin
#[tokio::test]
async fn deactivated_admin_is_refused() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test
        .user()
        .insert_user("Grace Hopper", UserRole::Admin, false)
        .await?;
    sign_in_as(&test, admin.id).await;

    let result = get_workers(
        State(test.app_state()),
        test.session.clone(),
        Query(SearchQuery::default()),
    )
    .await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect only workers matching the search term
#[tokio::test]
async fn filters_by_search_term() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test.user().insert_admin("Grace Hopper").await?;
    test.user().insert_worker("Jane Doe").await?;
    test.user().insert_worker("Mary Smith").await?;
    sign_in_as(&test, admin.id).await;

    let result = get_workers(
        State(test.app_state()),
        test.session.clone(),
        Query(SearchQuery {
            search: Some("jane".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let workers: Vec<UserDto> = read_json(result.unwrap().into_response()).await;
    assert_eq!(workers.len(), 1);
    assert_eq!(workers[0].full_name, "Jane Doe");

    Ok(())
}

/// Expect 201 with an active worker profile
#[tokio::test]
async fn creates_worker() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test.user().insert_admin("Grace Hopper").await?;
    sign_in_as(&test, admin.id).await;

    let result = create_worker(
        State(test.app_state()),
        test.session.clone(),
        Json(WorkerFormDto {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            hourly_rate: Some(22.5),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);
    let worker: UserDto = read_json(response).await;
    assert!(worker.is_active);
    assert_eq!(worker.role, serenewings::model::user::Role::Worker);

    Ok(())
}
