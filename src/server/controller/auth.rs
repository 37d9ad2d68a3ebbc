use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, SignupDto, UpdateProfileDto, UserDto},
    },
    server::{
        controller::util::guard::{get_user_from_session, require_role, Access},
        error::Error,
        model::{
            app::AppState,
            session::{auth::SessionAccessToken, user::SessionUserId},
        },
        service::{
            audit::{AuditEvent, AuditService, RequestMeta},
            auth::AuthService,
        },
    },
};

pub static AUTH_TAG: &str = "auth";

/// Sign in with email and password
///
/// Credentials are checked by the hosted auth service. On success the user's ID and access
/// token are stored in the session and a `login` audit row is written.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = UserDto),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 404, description = "Credentials valid but no profile exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let outcome = AuthService::new(&state.db, &state.auth)
        .login(&credentials)
        .await?;

    // Drop whatever an earlier login left behind before storing the new user
    session.cycle_id().await?;
    SessionUserId::insert(&session, outcome.user.id).await?;
    SessionAccessToken::insert(&session, &outcome.session.access_token).await?;

    AuditService::new(&state.db)
        .record(
            AuditEvent::new(outcome.user.id, "login"),
            &RequestMeta::from_headers(&headers),
        )
        .await;

    Ok((StatusCode::OK, Json(UserDto::from(outcome.user))))
}

/// Create an account
///
/// Registers with the hosted auth service and creates an active worker profile. The new user
/// still has to sign in.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Missing fields or sign-up rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(form): Json<SignupDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db, &state.auth).signup(&form).await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// Sign out
///
/// Writes a `logout` audit row, revokes the access token upstream when possible and clears the
/// session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear session if there is actually a user in session
    if let Some(user_id) = maybe_user_id {
        AuditService::new(&state.db)
            .record(
                AuditEvent::new(user_id, "logout"),
                &RequestMeta::from_headers(&headers),
            )
            .await;

        if let Some(token) = SessionAccessToken::get(&session).await? {
            if let Err(err) = state.auth.sign_out(&token).await {
                tracing::warn!("Failed to revoke access token for user ID {}: {}", user_id, err);
            }
        }

        session.clear().await;
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Signed out.".to_string(),
        }),
    ))
}

/// Profile of the logged in user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found, session cleared", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Update the logged in user's own profile
#[utoipa::path(
    put,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Full name missing", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Account deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(profile): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_role(&state, &session, Access::AdminOrWorker).await?;

    let user = AuthService::new(&state.db, &state.auth)
        .update_profile(user.id, &profile)
        .await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}
