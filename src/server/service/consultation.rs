//! Consultation requests from the home page.
//!
//! A valid request becomes exactly one email to the business; nothing is stored.

use chrono::NaiveDate;

use crate::{
    model::public::ConsultationDto,
    server::{
        error::{form::FormError, Error},
        provider::email::{EmailClient, EmailTemplate, TemplateParams},
        util::form::{all_present, capitalize_words, or_fallback},
    },
};

/// Recipient name shown in every business notification.
pub static TEAM_NAME: &str = "Serene Wings Team";

pub static MISSING_CONSULTATION_FIELDS: &str =
    "Name, email, date, time, and service type are required.";

pub static CONSULTATION_RECEIVED: &str = "Thank you! We've received your consultation request and will be in touch within 2-4 hours to confirm your appointment.";

/// `personal-care` becomes `Personal Care`.
pub fn service_type_display(service_type: &str) -> String {
    capitalize_words(&service_type.trim().replace('-', " "))
}

/// `2025-01-06` becomes `Monday, January 6, 2025`; anything unparseable is kept as entered.
pub fn preferred_date_display(preferred_date: &str) -> String {
    let preferred_date = preferred_date.trim();

    match NaiveDate::parse_from_str(preferred_date, "%Y-%m-%d") {
        Ok(date) => date.format("%A, %B %-d, %Y").to_string(),
        Err(_) => preferred_date.to_string(),
    }
}

/// Validate `form` and build the email template parameters.
///
/// # Returns
/// - `Ok(TemplateParams)` - Parameters holding the trimmed values
/// - `Err(FormError::MissingFields)` - Name, email, date, time or service type is blank
pub fn template_params(
    form: &ConsultationDto,
    business_email: &str,
) -> Result<TemplateParams, FormError> {
    if !all_present(&[
        &form.name,
        &form.email,
        &form.preferred_date,
        &form.preferred_time,
        &form.service_type,
    ]) {
        return Err(FormError::MissingFields(MISSING_CONSULTATION_FIELDS));
    }

    let name = form.name.trim();
    let email = form.email.trim();

    let params = [
        ("from_name", name.to_string()),
        ("from_email", email.to_string()),
        ("reply_to", email.to_string()),
        ("phone_number", or_fallback(&form.phone, "Not provided")),
        ("service_type", form.service_type.trim().to_string()),
        ("service_type_display", service_type_display(&form.service_type)),
        ("preferred_date", form.preferred_date.trim().to_string()),
        (
            "preferred_date_display",
            preferred_date_display(&form.preferred_date),
        ),
        ("preferred_time", form.preferred_time.trim().to_string()),
        ("client_address", or_fallback(&form.address, "Not provided")),
        (
            "message",
            or_fallback(&form.notes, "No additional notes provided"),
        ),
        ("to_name", TEAM_NAME.to_string()),
        ("to_email", business_email.to_string()),
        ("subject", format!("New Consultation Request from {}", name)),
    ];

    Ok(params
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect())
}

pub struct ConsultationService<'a> {
    email: &'a EmailClient,
}

impl<'a> ConsultationService<'a> {
    /// Creates a new instance of [`ConsultationService`]
    pub fn new(email: &'a EmailClient) -> Self {
        Self { email }
    }

    /// Validate the request and email it to the business.
    ///
    /// Validation runs first so an invalid request never reaches the email API.
    pub async fn submit(&self, form: &ConsultationDto) -> Result<(), Error> {
        let params = template_params(form, self.email.business_email())?;

        self.email
            .send(EmailTemplate::Consultation, &params)
            .await?;

        Ok(())
    }
}
