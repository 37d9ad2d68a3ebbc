//! Integration tests for the HTTP controllers.
//!
//! Handlers are called directly with extractors built from a [`TestContext`], so each test
//! covers the guard, the service and the status code mapping of one endpoint.

mod auth;
mod billing;
mod public;
mod schedule;
mod worker;

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;
use serenewings::server::model::session::user::SessionUserId;
use serenewings_test_utils::prelude::*;
use uuid::Uuid;

use crate::util::TestContextExt;

/// Put `user_id` in the test session as if they had logged in.
async fn sign_in_as(test: &TestContext, user_id: Uuid) {
    SessionUserId::insert(&test.session, user_id)
        .await
        .expect("failed to insert user ID into session");
}

async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");

    serde_json::from_slice(&bytes).expect("response body is valid JSON")
}
