//! Transactional email API client.
//!
//! Every form submission becomes a single POST of a template ID plus a flat map of template
//! parameters. There is no retry: a failed send is reported to the visitor together with the
//! business phone numbers.

use std::collections::BTreeMap;

use dioxus_logger::tracing;
use serde::Serialize;

use crate::server::{config::EmailConfig, error::email::EmailError};

/// Flat, ordered map of template parameter names to values.
pub type TemplateParams = BTreeMap<String, String>;

/// Email templates configured on the email service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailTemplate {
    /// Free consultation request from the home page
    Consultation,
    /// Review submitted from the testimonials section
    Testimonial,
    /// Message from the contact page
    Contact,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a TemplateParams,
}

/// Client for the transactional email send endpoint.
#[derive(Clone)]
pub struct EmailClient {
    http: reqwest::Client,
    config: EmailConfig,
    business_email: String,
}

impl EmailClient {
    /// Creates a new instance of [`EmailClient`]
    pub fn new(http: reqwest::Client, config: EmailConfig, business_email: &str) -> Self {
        Self {
            http,
            config,
            business_email: business_email.to_string(),
        }
    }

    /// Inbox that receives form submissions, placed in `to_email`.
    pub fn business_email(&self) -> &str {
        &self.business_email
    }

    fn template_id(&self, template: EmailTemplate) -> &str {
        match template {
            EmailTemplate::Consultation => &self.config.consultation_template_id,
            EmailTemplate::Testimonial => &self.config.testimonial_template_id,
            EmailTemplate::Contact => &self.config.contact_template_id,
        }
    }

    /// Send one email using `template`.
    ///
    /// The request counts as delivered when the API answers `200` or its body is exactly `OK`.
    ///
    /// # Returns
    /// - `Ok(())` - Email accepted by the API
    /// - `Err(EmailError::Rejected)` - API answered with anything else
    /// - `Err(EmailError::Request)` - API could not be reached
    pub async fn send(
        &self,
        template: EmailTemplate,
        params: &TemplateParams,
    ) -> Result<(), EmailError> {
        let body = SendEmailRequest {
            service_id: &self.config.service_id,
            template_id: self.template_id(template),
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: params,
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status.as_u16() == 200 || text == "OK" {
            tracing::info!(template = ?template, "Email sent");

            return Ok(());
        }

        Err(EmailError::Rejected {
            status: status.as_u16(),
            body: text,
        })
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;
    use serenewings_test_utils::{
        constant::{
            TEST_CONSULTATION_TEMPLATE_ID, TEST_EMAIL_PUBLIC_KEY, TEST_EMAIL_SEND_PATH,
            TEST_EMAIL_SERVICE_ID,
        },
        prelude::*,
    };

    use super::{EmailTemplate, TemplateParams};
    use crate::server::{error::email::EmailError, util::test::TestContextExt};

    fn params() -> TemplateParams {
        TemplateParams::from([("from_name".to_string(), "Jane Doe".to_string())])
    }

    /// Expect Ok and a body carrying the configured service, template and key
    #[tokio::test]
    async fn sends_configured_identifiers() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", TEST_EMAIL_SEND_PATH)
                    .match_body(Matcher::PartialJson(json!({
                        "service_id": TEST_EMAIL_SERVICE_ID,
                        "template_id": TEST_CONSULTATION_TEMPLATE_ID,
                        "user_id": TEST_EMAIL_PUBLIC_KEY,
                        "template_params": { "from_name": "Jane Doe" },
                    })))
                    .with_status(200)
                    .with_body("OK")
                    .expect(1)
                    .create()
            })
            .build()
            .await?;

        let client = test.app_state().email;
        let result = client.send(EmailTemplate::Consultation, &params()).await;

        assert!(result.is_ok());
        test.assert_mocks();

        Ok(())
    }

    /// Expect Ok when the body is `OK` even though the status is not 200
    #[tokio::test]
    async fn accepts_ok_body_with_other_status() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", TEST_EMAIL_SEND_PATH)
                    .with_status(202)
                    .with_body("OK")
                    .expect(1)
                    .create()
            })
            .build()
            .await?;

        let result = test
            .app_state()
            .email
            .send(EmailTemplate::Contact, &params())
            .await;

        assert!(result.is_ok());
        test.assert_mocks();

        Ok(())
    }

    /// Expect a padded `OK` body on a non-200 status to be rejected
    #[tokio::test]
    async fn rejects_padded_ok_body() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", TEST_EMAIL_SEND_PATH)
                    .with_status(202)
                    .with_body(" OK\n")
                    .expect(1)
                    .create()
            })
            .build()
            .await?;

        let result = test
            .app_state()
            .email
            .send(EmailTemplate::Contact, &params())
            .await;

        assert!(matches!(result, Err(EmailError::Rejected { status: 202, .. })));
        test.assert_mocks();

        Ok(())
    }

    /// Expect Rejected carrying status and body for any other response
    #[tokio::test]
    async fn fails_when_rejected() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_rejected_email_endpoint(400, 1)
            .build()
            .await?;

        let result = test
            .app_state()
            .email
            .send(EmailTemplate::Testimonial, &params())
            .await;

        assert!(matches!(
            result,
            Err(EmailError::Rejected { status: 400, .. })
        ));
        test.assert_mocks();

        Ok(())
    }
}
