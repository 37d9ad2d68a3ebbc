use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key for the hosted auth access token.
pub const SESSION_ACCESS_TOKEN_KEY: &str = "serenewings:auth:access_token";

/// Access token issued by the hosted auth service at sign-in.
///
/// Only kept so that logout can revoke the token upstream.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAccessToken(pub String);

impl SessionAccessToken {
    /// Insert access token into session
    pub async fn insert(session: &Session, token: &str) -> Result<(), Error> {
        session
            .insert(SESSION_ACCESS_TOKEN_KEY, SessionAccessToken(token.to_string()))
            .await?;

        Ok(())
    }

    /// Get access token from session
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .get::<SessionAccessToken>(SESSION_ACCESS_TOKEN_KEY)
            .await?
            .map(|SessionAccessToken(token)| token))
    }
}
