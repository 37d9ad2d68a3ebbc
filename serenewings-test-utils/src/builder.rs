//! Declarative test builder.
//!
//! Every configuration method only queues work; tables are created and mock endpoints are
//! registered when [`TestBuilder::build`] is awaited.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use uuid::Uuid;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_care_tables: bool,

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    email_endpoints: Vec<usize>,
    rejected_email_endpoints: Vec<(usize, usize)>, // (status, expected_requests)
    sign_in_endpoints: Vec<(Uuid, String, usize)>,
    sign_up_endpoints: Vec<(Uuid, String, usize)>,
}

impl TestBuilder {
    /// Create a builder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_care_tables: false,
            mock_builders: Vec::new(),
            email_endpoints: Vec::new(),
            rejected_email_endpoints: Vec::new(),
            sign_in_endpoints: Vec::new(),
            sign_up_endpoints: Vec::new(),
        }
    }

    /// Create every table of the care schema.
    ///
    /// Tables are created in foreign key order: users, clients, shifts, timesheets, invoices,
    /// expenses, time entries, testimonials and audit logs.
    pub fn with_care_tables(mut self) -> Self {
        self.include_care_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use serenewings_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), serenewings_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Client)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add a mock email send endpoint that accepts every request.
    ///
    /// # Arguments
    /// - `expected_requests` - Number of emails the test expects to be sent
    pub fn with_email_endpoint(mut self, expected_requests: usize) -> Self {
        self.email_endpoints.push(expected_requests);
        self
    }

    /// Add a mock email send endpoint that rejects every request with `status`.
    pub fn with_rejected_email_endpoint(mut self, status: usize, expected_requests: usize) -> Self {
        self.rejected_email_endpoints
            .push((status, expected_requests));
        self
    }

    /// Add a mock password sign-in endpoint returning a session for the given auth user.
    pub fn with_sign_in_endpoint(
        mut self,
        user_id: Uuid,
        email: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.sign_in_endpoints
            .push((user_id, email.into(), expected_requests));
        self
    }

    /// Add a mock sign-up endpoint returning the given auth user.
    pub fn with_sign_up_endpoint(
        mut self,
        user_id: Uuid,
        email: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.sign_up_endpoints
            .push((user_id, email.into(), expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Create all configured tables and mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Database connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_care_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Client),
                schema.create_table_from_entity(entity::prelude::Shift),
                schema.create_table_from_entity(entity::prelude::Timesheet),
                schema.create_table_from_entity(entity::prelude::Invoice),
                schema.create_table_from_entity(entity::prelude::Expense),
                schema.create_table_from_entity(entity::prelude::TimeEntry),
                schema.create_table_from_entity(entity::prelude::Testimonial),
                schema.create_table_from_entity(entity::prelude::AuditLog),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        // Custom endpoints first so tests can stack several mocks on one path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut context.server));
        }

        for expected in self.email_endpoints {
            mocks.push(context.email().create_send_endpoint(expected));
        }

        for (status, expected) in self.rejected_email_endpoints {
            mocks.push(context.email().create_rejected_endpoint(status, expected));
        }

        for (user_id, email, expected) in self.sign_in_endpoints {
            mocks.push(
                context
                    .auth()
                    .create_sign_in_endpoint(user_id, &email, expected),
            );
        }

        for (user_id, email, expected) in self.sign_up_endpoints {
            mocks.push(
                context
                    .auth()
                    .create_sign_up_endpoint(user_id, &email, expected),
            );
        }

        context.mocks = mocks;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
