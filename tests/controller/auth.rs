use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use sea_orm::EntityTrait;
use serenewings::{
    model::user::{LoginDto, Role, UserDto},
    server::{
        controller::auth::{get_user, login, logout},
        model::session::{auth::SessionAccessToken, user::SessionUserId},
    },
};
use serenewings_test_utils::constant::TEST_ACCESS_TOKEN;

use super::*;

fn credentials(email: &str) -> Json<LoginDto> {
    Json(LoginDto {
        email: email.to_string(),
        password: "secret".to_string(),
    })
}

/// Expect 200, the user and token in session and a login audit row
#[tokio::test]
async fn login_stores_user_in_session() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test.user().insert_admin("Grace Hopper").await?;
    let mock = test.auth().create_sign_in_endpoint(admin.id, &admin.email, 1);

    let result = login(
        State(test.app_state()),
        test.session.clone(),
        HeaderMap::new(),
        credentials(&admin.email),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let user: UserDto = read_json(response).await;
    assert_eq!(user.id, admin.id);

    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), Some(admin.id));
    assert_eq!(
        SessionAccessToken::get(&test.session).await.unwrap().as_deref(),
        Some(TEST_ACCESS_TOKEN)
    );
    let audit = entity::prelude::AuditLog::find().all(&test.db).await?;
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].action, "login");
    assert_eq!(audit[0].user_id, Some(admin.id));
    mock.assert();

    Ok(())
}

/// Expect 400 without calling the auth service when the password is blank
#[tokio::test]
async fn login_requires_credentials() -> Result<(), TestError> {
    let test = test_setup_with_care_tables!()?;

    let result = login(
        State(test.app_state()),
        test.session.clone(),
        HeaderMap::new(),
        Json(LoginDto {
            email: "jane@example.com".to_string(),
            password: "".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 401 when the auth service rejects the password
#[tokio::test]
async fn login_rejects_invalid_credentials() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let mock = test.auth().create_invalid_credentials_endpoint(1);

    let result = login(
        State(test.app_state()),
        test.session.clone(),
        HeaderMap::new(),
        credentials("jane@example.com"),
    )
    .await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());
    mock.assert();

    Ok(())
}

/// Expect 404 when the credentials are valid but no profile row exists
#[tokio::test]
async fn login_fails_without_profile() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let user_id = uuid::Uuid::new_v4();
    test.auth()
        .create_sign_in_endpoint(user_id, "ghost@example.com", 1);

    let result = login(
        State(test.app_state()),
        test.session.clone(),
        HeaderMap::new(),
        credentials("ghost@example.com"),
    )
    .await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the session cleared, the token revoked and a logout audit row
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let worker = test.user().insert_worker("Jane Doe").await?;
    let mock = test.auth().create_logout_endpoint(1);
    sign_in_as(&test, worker.id).await;
    SessionAccessToken::insert(&test.session, TEST_ACCESS_TOKEN)
        .await
        .unwrap();

    let result = logout(State(test.app_state()), test.session.clone(), HeaderMap::new()).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());
    let audit = entity::prelude::AuditLog::find().all(&test.db).await?;
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].action, "logout");
    mock.assert();

    Ok(())
}

/// Expect 200 even when nobody is logged in
#[tokio::test]
async fn logout_without_session_succeeds() -> Result<(), TestError> {
    let test = test_setup_with_care_tables!()?;

    let result = logout(State(test.app_state()), test.session.clone(), HeaderMap::new()).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);
    let audit = entity::prelude::AuditLog::find().all(&test.db).await?;
    assert!(audit.is_empty());

    Ok(())
}

/// Expect 401 when no user is in session
#[tokio::test]
async fn get_user_requires_session() -> Result<(), TestError> {
    let test = test_setup_with_care_tables!()?;

    let result = get_user(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the profile of the logged in user
#[tokio::test]
async fn get_user_returns_profile() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test.user().insert_admin("Grace Hopper").await?;
    sign_in_as(&test, admin.id).await;

    let result = get_user(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let user: UserDto = read_json(response).await;
    assert_eq!(user.full_name, "Grace Hopper");
    assert_eq!(user.role, Role::Admin);

    Ok(())
}
