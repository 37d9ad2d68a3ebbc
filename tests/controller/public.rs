use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serenewings::{
    model::{
        api::{ErrorDto, MessageDto},
        public::{ConsultationDto, ContactDto, TestimonialDto, TestimonialFormDto},
    },
    server::{
        controller::public::{
            get_testimonials, submit_consultation, submit_contact, submit_testimonial,
        },
        service::consultation::{CONSULTATION_RECEIVED, MISSING_CONSULTATION_FIELDS},
    },
};

use super::*;

fn consultation() -> ConsultationDto {
    ConsultationDto {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        service_type: "personal-care".to_string(),
        preferred_date: "2025-01-06".to_string(),
        preferred_time: "10:00 AM".to_string(),
        ..Default::default()
    }
}

/// Expect one email and the confirmation message
#[tokio::test]
async fn consultation_sends_one_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_email_endpoint(1).build().await?;

    let result = submit_consultation(State(test.app_state()), Json(consultation())).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let body: MessageDto = read_json(response).await;
    assert_eq!(body.message, CONSULTATION_RECEIVED);
    test.assert_mocks();

    Ok(())
}

/// Expect 400 with the validation message and no email call
#[tokio::test]
async fn consultation_requires_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_email_endpoint(0).build().await?;

    let mut form = consultation();
    form.preferred_time = "".to_string();
    let result = submit_consultation(State(test.app_state()), Json(form)).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = read_json(response).await;
    assert_eq!(body.error, MISSING_CONSULTATION_FIELDS);
    test.assert_mocks();

    Ok(())
}

/// Expect 502 when the email API rejects the message
#[tokio::test]
async fn contact_reports_email_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_rejected_email_endpoint(500, 1)
        .build()
        .await?;

    let result = submit_contact(
        State(test.app_state()),
        Json(ContactDto {
            full_name: "Jane Doe".to_string(),
            phone: "555-0100".to_string(),
            email: "jane@example.com".to_string(),
            preferred_time: "".to_string(),
            message: "Do you cover Cary?".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    test.assert_mocks();

    Ok(())
}

/// Expect a submitted review to be listed afterwards
#[tokio::test]
async fn testimonial_is_listed_after_submit() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_care_tables()
        .with_email_endpoint(1)
        .build()
        .await?;
    let state = test.app_state();

    let result = submit_testimonial(
        State(state.clone()),
        Json(TestimonialFormDto {
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            location: "North Raleigh".to_string(),
            text: "Kind and reliable caregivers.".to_string(),
            rating: Some(4),
        }),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = get_testimonials(State(state)).await;

    assert!(result.is_ok());
    let testimonials: Vec<TestimonialDto> = read_json(result.unwrap().into_response()).await;
    assert_eq!(testimonials.len(), 1);
    assert_eq!(testimonials[0].rating, 4);
    test.assert_mocks();

    Ok(())
}

/// Expect 400 and no email for a six star rating
#[tokio::test]
async fn testimonial_rejects_rating_out_of_range() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_care_tables()
        .with_email_endpoint(0)
        .build()
        .await?;

    let result = submit_testimonial(
        State(test.app_state()),
        Json(TestimonialFormDto {
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            location: "North Raleigh".to_string(),
            text: "Kind and reliable caregivers.".to_string(),
            rating: Some(6),
        }),
    )
    .await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}
