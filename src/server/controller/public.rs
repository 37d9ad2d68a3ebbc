use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        public::{ConsultationDto, ContactDto, TestimonialDto, TestimonialFormDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{
            consultation::{ConsultationService, CONSULTATION_RECEIVED},
            contact::{ContactService, CONTACT_RECEIVED},
            testimonial::{TestimonialService, TESTIMONIAL_RECEIVED},
        },
    },
};

pub static PUBLIC_TAG: &str = "public";

fn received(message: &str) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            message: message.to_string(),
        }),
    )
}

/// Request a free consultation
///
/// The request is emailed to the business; nothing is stored.
#[utoipa::path(
    post,
    path = "/api/consultation",
    tag = PUBLIC_TAG,
    request_body = ConsultationDto,
    responses(
        (status = 200, description = "Request sent", body = MessageDto),
        (status = 400, description = "Required fields missing", body = ErrorDto),
        (status = 502, description = "Email could not be sent", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_consultation(
    State(state): State<AppState>,
    Json(form): Json<ConsultationDto>,
) -> Result<impl IntoResponse, Error> {
    ConsultationService::new(&state.email).submit(&form).await?;

    Ok(received(CONSULTATION_RECEIVED))
}

/// Send a message from the contact page
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = PUBLIC_TAG,
    request_body = ContactDto,
    responses(
        (status = 200, description = "Message sent", body = MessageDto),
        (status = 400, description = "Required fields missing", body = ErrorDto),
        (status = 502, description = "Email could not be sent", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactDto>,
) -> Result<impl IntoResponse, Error> {
    ContactService::new(&state.email).submit(&form).await?;

    Ok(received(CONTACT_RECEIVED))
}

/// Approved testimonials, newest first
#[utoipa::path(
    get,
    path = "/api/testimonials",
    tag = PUBLIC_TAG,
    responses(
        (status = 200, description = "Approved testimonials", body = Vec<TestimonialDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_testimonials(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let testimonials = TestimonialService::new(&state.db, &state.email)
        .list()
        .await?;

    Ok((StatusCode::OK, Json(testimonials)))
}

/// Submit a review
///
/// The review is emailed to the business and then published.
#[utoipa::path(
    post,
    path = "/api/testimonials",
    tag = PUBLIC_TAG,
    request_body = TestimonialFormDto,
    responses(
        (status = 200, description = "Review sent", body = MessageDto),
        (status = 400, description = "Required fields missing or rating out of range", body = ErrorDto),
        (status = 502, description = "Email could not be sent", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_testimonial(
    State(state): State<AppState>,
    Json(form): Json<TestimonialFormDto>,
) -> Result<impl IntoResponse, Error> {
    TestimonialService::new(&state.db, &state.email)
        .submit(&form)
        .await?;

    Ok(received(TESTIMONIAL_RECEIVED))
}
