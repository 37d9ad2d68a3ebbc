//! Contact page messages, emailed to the business.

use crate::{
    model::public::ContactDto,
    server::{
        error::{form::FormError, Error},
        provider::email::{EmailClient, EmailTemplate, TemplateParams},
        service::consultation::TEAM_NAME,
        util::form::{all_present, or_fallback},
    },
};

pub static MISSING_CONTACT_FIELDS: &str = "Name, phone, email, and message are required.";

pub static CONTACT_RECEIVED: &str =
    "Message sent successfully! We'll get back to you within 24 hours.";

/// Validate `form` and build the email template parameters.
pub fn template_params(
    form: &ContactDto,
    business_email: &str,
) -> Result<TemplateParams, FormError> {
    if !all_present(&[&form.full_name, &form.phone, &form.email, &form.message]) {
        return Err(FormError::MissingFields(MISSING_CONTACT_FIELDS));
    }

    let name = form.full_name.trim();
    let email = form.email.trim();

    let params = [
        ("from_name", name.to_string()),
        ("from_email", email.to_string()),
        ("reply_to", email.to_string()),
        ("phone_number", form.phone.trim().to_string()),
        ("preferred_time", or_fallback(&form.preferred_time, "Not specified")),
        ("message", form.message.trim().to_string()),
        ("to_name", TEAM_NAME.to_string()),
        ("to_email", business_email.to_string()),
        ("subject", format!("New Contact Message from {}", name)),
    ];

    Ok(params
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect())
}

pub struct ContactService<'a> {
    email: &'a EmailClient,
}

impl<'a> ContactService<'a> {
    /// Creates a new instance of [`ContactService`]
    pub fn new(email: &'a EmailClient) -> Self {
        Self { email }
    }

    pub async fn submit(&self, form: &ContactDto) -> Result<(), Error> {
        let params = template_params(form, self.email.business_email())?;

        self.email.send(EmailTemplate::Contact, &params).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::public::ContactDto;

    fn valid_form() -> ContactDto {
        ContactDto {
            full_name: "Jane Doe".to_string(),
            phone: " (919) 555-0100 ".to_string(),
            email: "jane@example.com".to_string(),
            preferred_time: "".to_string(),
            message: " Do you cover Cary? ".to_string(),
        }
    }

    mod template_params {
        use crate::server::{
            error::form::FormError,
            service::contact::{template_params, MISSING_CONTACT_FIELDS},
        };

        use super::valid_form;

        #[test]
        fn builds_trimmed_params() {
            let params = template_params(&valid_form(), "office@example.com").unwrap();

            assert_eq!(params["phone_number"], "(919) 555-0100");
            assert_eq!(params["preferred_time"], "Not specified");
            assert_eq!(params["message"], "Do you cover Cary?");
            assert_eq!(params["subject"], "New Contact Message from Jane Doe");
        }

        #[test]
        fn rejects_missing_phone() {
            let mut form = valid_form();
            form.phone = "  ".to_string();

            assert_eq!(
                template_params(&form, "office@example.com"),
                Err(FormError::MissingFields(MISSING_CONTACT_FIELDS))
            );
        }
    }

    mod submit {
        use serde_json::json;
        use serenewings_test_utils::{constant::TEST_CONTACT_TEMPLATE_ID, prelude::*};

        use crate::server::{service::contact::ContactService, util::test::TestContextExt};

        use super::valid_form;

        /// Expect one email using the contact template
        #[tokio::test]
        async fn sends_with_contact_template() -> Result<(), TestError> {
            let mut test = TestBuilder::new().build().await?;
            let mock = test.email().create_send_endpoint_matching(
                json!({ "template_id": TEST_CONTACT_TEMPLATE_ID }),
                1,
            );

            let state = test.app_state();
            let result = ContactService::new(&state.email).submit(&valid_form()).await;

            assert!(result.is_ok());
            mock.assert();

            Ok(())
        }
    }
}
