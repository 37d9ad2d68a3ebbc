//! Hosted auth REST API client.
//!
//! Passwords never touch the database: they are forwarded to the hosted auth service, which
//! answers with the auth user's ID and an access token. The ID doubles as the primary key of
//! the `users` profile row.

use dioxus_logger::tracing;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::server::{
    config::AuthConfig,
    error::{auth::AuthError, Error},
};

/// User record returned by the hosted auth service.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthUser {
    /// Auth user ID, shared with the `users` table
    pub id: Uuid,
    /// Email the user signed in with
    pub email: Option<String>,
}

/// Result of a successful password sign-in.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthSession {
    /// Bearer token for the hosted auth API
    pub access_token: String,
    /// Signed in user
    pub user: AuthUser,
}

/// Sign-up answers with a full session when email confirmation is disabled and with the bare
/// user otherwise.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    WithSession { user: AuthUser },
    User(AuthUser),
}

#[derive(Default, Deserialize)]
struct AuthErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
}

impl AuthErrorBody {
    fn into_message(self) -> String {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .unwrap_or_else(|| "Unable to create account.".to_string())
    }
}

/// Client for the hosted auth REST API.
#[derive(Clone)]
pub struct HostedAuthClient {
    http: reqwest::Client,
    config: AuthConfig,
}

impl HostedAuthClient {
    /// Creates a new instance of [`HostedAuthClient`]
    pub fn new(http: reqwest::Client, config: AuthConfig) -> Self {
        Self { http, config }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.url.trim_end_matches('/'), path)
    }

    /// Exchange email and password for a session.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Credentials accepted
    /// - `Err(AuthError::InvalidCredentials)` - Service rejected the credentials
    /// - `Err(Error::ReqwestError)` - Service unreachable or answered with a server error
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, Error> {
        let response = self
            .http
            .post(self.endpoint("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.config.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        if response.status().is_client_error() {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(response.error_for_status()?.json::<AuthSession>().await?)
    }

    /// Register a new account with `full_name` stored as user metadata.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Account created
    /// - `Err(AuthError::SignUpRejected)` - Service refused the sign-up, e.g. duplicate email
    /// - `Err(Error::ReqwestError)` - Service unreachable or answered with a server error
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<AuthUser, Error> {
        let response = self
            .http
            .post(self.endpoint("signup"))
            .header("apikey", &self.config.anon_key)
            .json(&json!({
                "email": email,
                "password": password,
                "data": { "full_name": full_name },
            }))
            .send()
            .await?;

        if response.status().is_client_error() {
            let body = response.json::<AuthErrorBody>().await.unwrap_or_default();

            return Err(AuthError::SignUpRejected(body.into_message()).into());
        }

        let user = match response.error_for_status()?.json::<SignUpResponse>().await? {
            SignUpResponse::WithSession { user } => user,
            SignUpResponse::User(user) => user,
        };

        Ok(user)
    }

    /// Revoke `access_token` upstream.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), Error> {
        let response = self
            .http
            .post(self.endpoint("logout"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if response.status() != StatusCode::NO_CONTENT {
            tracing::debug!(status = %response.status(), "Unexpected logout response");
        }

        response.error_for_status()?;

        Ok(())
    }
}
