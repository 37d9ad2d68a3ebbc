use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{constant::TEST_EMAIL_SEND_PATH, TestContext};

impl TestContext {
    pub fn email<'a>(&'a mut self) -> EmailFixtures<'a> {
        EmailFixtures { context: self }
    }
}

pub struct EmailFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> EmailFixtures<'a> {
    /// Mock the send endpoint, accepting any request body with `200 OK`.
    pub fn create_send_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.context
            .server
            .mock("POST", TEST_EMAIL_SEND_PATH)
            .with_status(200)
            .with_body("OK")
            .expect(expected_requests)
            .create()
    }

    /// Mock the send endpoint, only matching bodies that contain `body` as a subset.
    pub fn create_send_endpoint_matching(&mut self, body: Value, expected_requests: usize) -> Mock {
        self.context
            .server
            .mock("POST", TEST_EMAIL_SEND_PATH)
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(body))
            .with_status(200)
            .with_body("OK")
            .expect(expected_requests)
            .create()
    }

    /// Mock the send endpoint, rejecting every request with `status`.
    pub fn create_rejected_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.context
            .server
            .mock("POST", TEST_EMAIL_SEND_PATH)
            .with_status(status)
            .with_body("The template ID is invalid")
            .expect(expected_requests)
            .create()
    }
}
