//! Placeholder configuration values shared by tests.
//!
//! None of these are real credentials; they only need to be stable so that mock endpoints can
//! match on them.

/// Path of the transactional email send endpoint on the mock server.
pub static TEST_EMAIL_SEND_PATH: &str = "/api/v1.0/email/send";

/// Email service identifier sent with every email request.
pub static TEST_EMAIL_SERVICE_ID: &str = "service_test";

/// Public key sent as `user_id` with every email request.
pub static TEST_EMAIL_PUBLIC_KEY: &str = "public_key_test";

pub static TEST_CONSULTATION_TEMPLATE_ID: &str = "template_consultation";
pub static TEST_TESTIMONIAL_TEMPLATE_ID: &str = "template_testimonial";
pub static TEST_CONTACT_TEMPLATE_ID: &str = "template_contact";

/// Business inbox placed in the `to_email` template parameter.
pub static TEST_BUSINESS_EMAIL: &str = "office@serenewings.test";

/// Anonymous key sent in the `apikey` header to the hosted auth API.
pub static TEST_AUTH_ANON_KEY: &str = "anon_key_test";

/// Access token returned by the mock sign-in endpoint.
pub static TEST_ACCESS_TOKEN: &str = "access_token_test";

/// Unused connection strings; tests never connect to Postgres or Valkey.
pub static TEST_DATABASE_URL: &str = "sqlite::memory:";
pub static TEST_VALKEY_URL: &str = "redis://127.0.0.1:6379";
