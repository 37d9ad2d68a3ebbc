//! Reviews submitted from the public pages.
//!
//! A review is emailed to the business first. Once the email is accepted the review is stored
//! as approved so it shows on the testimonials page; a failed insert is only logged because
//! the business already has the review.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::public::{TestimonialDto, TestimonialFormDto},
    server::{
        data::testimonial::TestimonialRepository,
        error::{form::FormError, Error},
        provider::email::{EmailClient, EmailTemplate, TemplateParams},
        service::consultation::TEAM_NAME,
        util::form::all_present,
    },
};

pub static MISSING_TESTIMONIAL_FIELDS: &str =
    "Name, email, location, and review text are required.";

pub static TESTIMONIAL_RECEIVED: &str = "Thank you for your feedback! We've received your review and will be in touch soon.";

/// Rating used when the form leaves it out
pub const DEFAULT_RATING: i32 = 5;

/// Validated review with trimmed fields
#[derive(Clone, Debug, PartialEq)]
pub struct Review {
    pub name: String,
    pub email: String,
    pub location: String,
    pub text: String,
    pub rating: i32,
}

impl Review {
    /// Validate a submitted form.
    ///
    /// # Returns
    /// - `Ok(Review)` - All fields present, rating within 1..=5
    /// - `Err(FormError::MissingFields)` - Name, email, location or text is blank
    /// - `Err(FormError::InvalidRating)` - Rating outside 1..=5
    pub fn parse(form: &TestimonialFormDto) -> Result<Self, FormError> {
        if !all_present(&[&form.name, &form.email, &form.location, &form.text]) {
            return Err(FormError::MissingFields(MISSING_TESTIMONIAL_FIELDS));
        }

        let rating = form.rating.unwrap_or(DEFAULT_RATING);
        if !(1..=5).contains(&rating) {
            return Err(FormError::InvalidRating(rating));
        }

        Ok(Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            location: form.location.trim().to_string(),
            text: form.text.trim().to_string(),
            rating,
        })
    }

    /// Star line, location and review text as shown in the notification email
    pub fn message(&self) -> String {
        format!(
            "{} ({}/5 stars)\n\nLocation: {}\n\nReview: {}",
            "⭐".repeat(self.rating as usize),
            self.rating,
            self.location,
            self.text
        )
    }

    pub fn template_params(&self, business_email: &str) -> TemplateParams {
        [
            ("from_name", self.name.clone()),
            ("from_email", self.email.clone()),
            ("reply_to", self.email.clone()),
            ("message", self.message()),
            ("to_name", TEAM_NAME.to_string()),
            ("to_email", business_email.to_string()),
            ("subject", format!("New Testimonial from {}", self.name)),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
    }
}

pub struct TestimonialService<'a> {
    db: &'a DatabaseConnection,
    email: &'a EmailClient,
}

impl<'a> TestimonialService<'a> {
    /// Creates a new instance of [`TestimonialService`]
    pub fn new(db: &'a DatabaseConnection, email: &'a EmailClient) -> Self {
        Self { db, email }
    }

    /// Approved testimonials, newest first.
    pub async fn list(&self) -> Result<Vec<TestimonialDto>, Error> {
        let testimonials = TestimonialRepository::new(self.db).list_approved().await?;

        Ok(testimonials.into_iter().map(TestimonialDto::from).collect())
    }

    /// Email the review to the business, then store it.
    ///
    /// # Returns
    /// - `Ok(Some(TestimonialDto))` - Review emailed and stored
    /// - `Ok(None)` - Review emailed, storing it failed
    /// - `Err(Error::FormError)` - Validation failed, no email was sent
    /// - `Err(Error::EmailError)` - Email API failed, nothing was stored
    pub async fn submit(&self, form: &TestimonialFormDto) -> Result<Option<TestimonialDto>, Error> {
        let review = Review::parse(form)?;

        self.email
            .send(
                EmailTemplate::Testimonial,
                &review.template_params(self.email.business_email()),
            )
            .await?;

        let stored = TestimonialRepository::new(self.db)
            .create(
                &review.name,
                &review.email,
                review.rating,
                &review.text,
                &review.location,
            )
            .await;

        match stored {
            Ok(testimonial) => Ok(Some(testimonial.into())),
            Err(err) => {
                tracing::warn!("Testimonial was emailed but could not be stored: {}", err);

                Ok(None)
            }
        }
    }
}
