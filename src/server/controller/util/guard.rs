use dioxus_logger::tracing;
use entity::sea_orm_active_enums::UserRole;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, db::UserModel, session::user::SessionUserId},
};

/// Roles allowed through a guarded endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Admin,
    Worker,
    AdminOrWorker,
}

impl Access {
    fn allows(&self, role: &UserRole) -> bool {
        match self {
            Self::Admin => *role == UserRole::Admin,
            Self::Worker => *role == UserRole::Worker,
            Self::AdminOrWorker => true,
        }
    }

    /// Role named in the forbidden message.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Worker => "worker",
            Self::AdminOrWorker => "admin or worker",
        }
    }
}

/// Retrieves the session user's profile from the database
///
/// # Returns
/// - `Ok(UserModel)`: Profile of the logged in user
/// - `Err(AuthError::UserNotInSession)`: User ID not present in session
/// - `Err(AuthError::UserNotInDatabase)`: User ID exists in session but has no profile (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserModel, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let Some(user) = UserRepository::new(&state.db).get(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    Ok(user)
}

/// Retrieves the session user and checks that they are active and hold an allowed role
///
/// # Returns
/// - `Ok(UserModel)`: Active user with an allowed role
/// - `Err(AuthError::Deactivated)`: Profile has been deactivated
/// - `Err(AuthError::Forbidden)`: Role is not allowed by `access`
/// - `Err(Error)`: Any error of [`get_user_from_session`]
pub async fn require_role(
    state: &AppState,
    session: &Session,
    access: Access,
) -> Result<UserModel, Error> {
    let user = get_user_from_session(state, session).await?;

    if !user.is_active {
        return Err(AuthError::Deactivated(user.id).into());
    }

    if !access.allows(&user.role) {
        return Err(AuthError::Forbidden {
            user_id: user.id,
            required: access.label().to_string(),
        }
        .into());
    }

    Ok(user)
}
