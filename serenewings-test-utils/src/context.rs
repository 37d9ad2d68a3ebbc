//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! Holds an in-memory SQLite database, a mockito server standing in for the email and hosted
//! auth APIs, and a session backed by `MemoryStore`.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{constant::*, error::TestError};

/// Test environment produced by `TestBuilder::build()`.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_care_tables().build().await?;
///
/// let worker = test.user().insert_worker("Jane Doe").await?;
/// let _mock = test.email().create_send_endpoint(1);
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by an in-memory store
    pub session: Session,

    /// Mock HTTP server for the email and hosted auth APIs
    pub(crate) server: ServerGuard,
    /// Mocks created by the builder, kept alive for the duration of the test
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context with an empty database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fresh context without any tables
    /// - `Err(TestError::DbErr)` - The in-memory database could not be opened
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect(TEST_DATABASE_URL).await?;

        Ok(TestContext {
            db,
            session,
            server,
            mocks: Vec::new(),
        })
    }

    /// Execute CREATE TABLE statements against the test database.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Environment lookup that points every external service at the mock server.
    ///
    /// Pass this to a configuration loader instead of mutating the process environment.
    pub fn env_var(&self, key: &str) -> Option<String> {
        let value = match key {
            "DATABASE_URL" => TEST_DATABASE_URL.to_string(),
            "VALKEY_URL" => TEST_VALKEY_URL.to_string(),
            "AUTH_URL" => self.server.url(),
            "AUTH_ANON_KEY" => TEST_AUTH_ANON_KEY.to_string(),
            "EMAILJS_API_URL" => format!("{}{}", self.server.url(), TEST_EMAIL_SEND_PATH),
            "EMAILJS_SERVICE_ID" => TEST_EMAIL_SERVICE_ID.to_string(),
            "EMAILJS_PUBLIC_KEY" => TEST_EMAIL_PUBLIC_KEY.to_string(),
            "EMAILJS_CONSULTATION_TEMPLATE_ID" => TEST_CONSULTATION_TEMPLATE_ID.to_string(),
            "EMAILJS_TESTIMONIAL_TEMPLATE_ID" => TEST_TESTIMONIAL_TEMPLATE_ID.to_string(),
            "EMAILJS_CONTACT_TEMPLATE_ID" => TEST_CONTACT_TEMPLATE_ID.to_string(),
            "BUSINESS_EMAIL" => TEST_BUSINESS_EMAIL.to_string(),
            _ => return None,
        };

        Some(value)
    }

    /// Assert all mock endpoints created by the builder were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
