//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every JSON endpoint is registered here together with its utoipa path so the OpenAPI
//! document stays complete. Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

#[derive(OpenApi)]
#[openapi(info(title = "Serene Wings", description = "Serene Wings Caregiving API"), tags(
    (name = controller::public::PUBLIC_TAG, description = "Consultation, contact and testimonial forms"),
    (name = controller::auth::AUTH_TAG, description = "Delegated authentication and own profile"),
    (name = controller::worker::WORKER_TAG, description = "Worker management"),
    (name = controller::client::CLIENT_TAG, description = "Client management"),
    (name = controller::shift::SHIFT_TAG, description = "Shift scheduling"),
    (name = controller::invoice::INVOICE_TAG, description = "Invoicing"),
    (name = controller::approval::APPROVAL_TAG, description = "Timesheet and expense approval"),
    (name = controller::portal::PORTAL_TAG, description = "Worker portal and time clock"),
    (name = controller::analytics::ANALYTICS_TAG, description = "Dashboard and reports"),
))]
struct ApiDoc;

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState::new(db, &config)?;
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::public::submit_consultation))
        .routes(routes!(controller::public::submit_contact))
        .routes(routes!(
            controller::public::get_testimonials,
            controller::public::submit_testimonial
        ))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::signup))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::auth::update_profile))
        .routes(routes!(
            controller::worker::get_workers,
            controller::worker::create_worker
        ))
        .routes(routes!(controller::worker::update_worker))
        .routes(routes!(controller::worker::set_worker_active))
        .routes(routes!(
            controller::client::get_clients,
            controller::client::create_client
        ))
        .routes(routes!(controller::client::get_active_clients))
        .routes(routes!(controller::client::update_client))
        .routes(routes!(controller::client::set_client_active))
        .routes(routes!(
            controller::shift::get_shifts,
            controller::shift::create_shift
        ))
        .routes(routes!(controller::shift::update_shift_status))
        .routes(routes!(
            controller::invoice::get_invoices,
            controller::invoice::create_invoice
        ))
        .routes(routes!(controller::invoice::update_invoice_status))
        .routes(routes!(controller::approval::get_timesheets))
        .routes(routes!(controller::approval::update_timesheet_status))
        .routes(routes!(controller::approval::get_expenses))
        .routes(routes!(controller::approval::update_expense_status))
        .routes(routes!(controller::portal::get_portal))
        .routes(routes!(controller::portal::clock_in))
        .routes(routes!(controller::portal::clock_out))
        .routes(routes!(controller::portal::submit_timesheet))
        .routes(routes!(controller::portal::submit_expense))
        .routes(routes!(controller::analytics::get_dashboard))
        .routes(routes!(controller::analytics::get_report))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;

    use super::ApiDoc;

    /// Expect every documented tag to be present
    #[test]
    fn documents_all_tags() {
        let api = ApiDoc::openapi();
        let tags = api.tags.unwrap_or_default();

        assert_eq!(tags.len(), 9);
    }
}
