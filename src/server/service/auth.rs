//! Delegated authentication.
//!
//! Passwords never touch this server's database: sign-in and sign-up are forwarded to the
//! hosted auth service and only the resulting user ID is used to find the `users` profile.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::user::{LoginDto, SignupDto, UpdateProfileDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, form::FormError, record::RecordError, Error},
        model::db::UserModel,
        provider::auth::{AuthSession, HostedAuthClient},
        util::form::all_present,
    },
};

pub static MISSING_SIGNUP_FIELDS: &str = "Full name, email, and password are required.";

/// Result of a successful sign-in.
pub struct LoginOutcome {
    /// Session issued by the hosted auth service
    pub session: AuthSession,
    /// Profile of the signed in user
    pub user: UserModel,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    auth: &'a HostedAuthClient,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, auth: &'a HostedAuthClient) -> Self {
        Self { db, auth }
    }

    /// Sign in with email and password.
    ///
    /// # Returns
    /// - `Ok(LoginOutcome)` - Credentials accepted and a profile exists
    /// - `Err(AuthError::MissingCredentials)` - Email or password is blank
    /// - `Err(AuthError::InvalidCredentials)` - Hosted auth rejected the credentials
    /// - `Err(AuthError::UserNotInDatabase)` - Credentials valid but no profile row exists
    pub async fn login(&self, credentials: &LoginDto) -> Result<LoginOutcome, Error> {
        if !all_present(&[&credentials.email, &credentials.password]) {
            return Err(AuthError::MissingCredentials.into());
        }

        let session = self
            .auth
            .sign_in(credentials.email.trim(), &credentials.password)
            .await?;

        let Some(user) = UserRepository::new(self.db).get(session.user.id).await? else {
            return Err(AuthError::UserNotInDatabase(session.user.id).into());
        };

        Ok(LoginOutcome { session, user })
    }

    /// Register with the hosted auth service and create a worker profile.
    ///
    /// New accounts always start as active workers; an admin promotes them if needed.
    pub async fn signup(&self, form: &SignupDto) -> Result<UserModel, Error> {
        if !all_present(&[&form.full_name, &form.email, &form.password]) {
            return Err(FormError::MissingFields(MISSING_SIGNUP_FIELDS).into());
        }

        let email = form.email.trim();
        let full_name = form.full_name.trim();

        let auth_user = self.auth.sign_up(email, &form.password, full_name).await?;
        let email = auth_user.email.as_deref().unwrap_or(email);

        let user = UserRepository::new(self.db)
            .upsert_profile(auth_user.id, email, full_name, UserRole::Worker)
            .await?;

        Ok(user)
    }

    /// Update the signed in user's own contact details.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        profile: &UpdateProfileDto,
    ) -> Result<UserModel, Error> {
        if !all_present(&[&profile.full_name]) {
            return Err(FormError::MissingFields("Full name is required.").into());
        }

        UserRepository::new(self.db)
            .update_profile(user_id, profile)
            .await?
            .ok_or_else(|| RecordError::NotFound { table: "User", id: user_id }.into())
    }
}
