//! Test harness for the Serene Wings workspace.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the tables, fixtures and mock
//! HTTP endpoints a test needs, and the resulting [`TestContext`] exposes the in-memory SQLite
//! database, a memory-backed session and the mockito server standing in for the email and
//! hosted auth APIs.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::factory, test_setup_with_care_tables, test_setup_with_tables, TestBuilder,
        TestContext, TestError,
    };
}
