use mockito::{Matcher, Mock};
use serde_json::json;
use uuid::Uuid;

use crate::{
    constant::{TEST_ACCESS_TOKEN, TEST_AUTH_ANON_KEY},
    TestContext,
};

impl TestContext {
    pub fn auth<'a>(&'a mut self) -> AuthFixtures<'a> {
        AuthFixtures { context: self }
    }
}

pub struct AuthFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> AuthFixtures<'a> {
    /// Mock a successful password grant for `email`.
    pub fn create_sign_in_endpoint(
        &mut self,
        user_id: Uuid,
        email: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "access_token": TEST_ACCESS_TOKEN,
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh_token_test",
            "user": {
                "id": user_id,
                "email": email,
            }
        });

        self.context
            .server
            .mock("POST", "/auth/v1/token")
            .match_query(Matcher::UrlEncoded(
                "grant_type".to_string(),
                "password".to_string(),
            ))
            .match_header("apikey", TEST_AUTH_ANON_KEY)
            .match_body(Matcher::PartialJson(json!({ "email": email })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock a rejected password grant.
    pub fn create_invalid_credentials_endpoint(&mut self, expected_requests: usize) -> Mock {
        let body = json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials",
        });

        self.context
            .server
            .mock("POST", "/auth/v1/token")
            .match_query(Matcher::UrlEncoded(
                "grant_type".to_string(),
                "password".to_string(),
            ))
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock a sign-up that returns the new user at the top level of the body.
    pub fn create_sign_up_endpoint(
        &mut self,
        user_id: Uuid,
        email: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "id": user_id,
            "email": email,
            "confirmation_sent_at": "2025-01-06T09:00:00Z",
        });

        self.context
            .server
            .mock("POST", "/auth/v1/signup")
            .match_header("apikey", TEST_AUTH_ANON_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock token revocation.
    pub fn create_logout_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.context
            .server
            .mock("POST", "/auth/v1/logout")
            .match_header(
                "authorization",
                format!("Bearer {}", TEST_ACCESS_TOKEN).as_str(),
            )
            .with_status(204)
            .expect(expected_requests)
            .create()
    }
}
