use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::Error,
    provider::{auth::HostedAuthClient, email::EmailClient},
};

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Hosted Postgres connection pool
    pub db: DatabaseConnection,
    /// Transactional email API client
    pub email: EmailClient,
    /// Hosted auth REST API client
    pub auth: HostedAuthClient,
}

impl AppState {
    /// Build the external service clients from configuration.
    pub fn new(db: DatabaseConnection, config: &Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("serenewings/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            db,
            email: EmailClient::new(http.clone(), config.email.clone(), &config.business_email),
            auth: HostedAuthClient::new(http, config.auth.clone()),
        })
    }
}
