//! Forms submitted from the public marketing pages.
//!
//! Every text field defaults to an empty string so that a missing field is reported as a
//! validation message rather than a deserialization failure.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct ConsultationDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub address: String,
    pub notes: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct ContactDto {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub preferred_time: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct TestimonialFormDto {
    pub name: String,
    pub email: String,
    pub location: String,
    pub text: String,
    /// Star rating from 1 to 5, defaults to 5
    pub rating: Option<i32>,
}

/// Approved testimonial as shown publicly; the submitter's email is never exposed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TestimonialDto {
    pub id: Option<Uuid>,
    pub name: String,
    pub rating: i32,
    pub text: String,
    pub location: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}
