use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, SearchQuery},
        billing::{InvoiceLedgerDto, InvoiceDto, InvoiceFormDto, InvoiceStatusDto},
    },
    server::{
        controller::util::guard::{require_role, Access},
        error::Error,
        model::app::AppState,
        service::{
            audit::{AuditEvent, AuditService, RequestMeta},
            invoice::InvoiceService,
        },
    },
};

pub static INVOICE_TAG: &str = "invoice";

/// All invoices, newest first, with revenue totals
#[utoipa::path(
    get,
    path = "/api/invoices",
    tag = INVOICE_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Invoice ledger", body = InvoiceLedgerDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invoices(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, Error> {
    require_role(&state, &session, Access::Admin).await?;

    let ledger = InvoiceService::new(&state.db)
        .ledger(query.search.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(ledger)))
}

/// Create a draft invoice
///
/// Tax defaults to 8.25% and the due date to 30 days after the issue date. The invoice number
/// is generated.
#[utoipa::path(
    post,
    path = "/api/invoices",
    tag = INVOICE_TAG,
    request_body = InvoiceFormDto,
    responses(
        (status = 201, description = "Invoice created", body = InvoiceDto),
        (status = 400, description = "Negative amount or rate", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_invoice(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(form): Json<InvoiceFormDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_role(&state, &session, Access::Admin).await?;

    let invoice = InvoiceService::new(&state.db).create(&form).await?;

    AuditService::new(&state.db)
        .record(
            AuditEvent::new(admin.id, "create_invoice").on("invoices", invoice.id),
            &RequestMeta::from_headers(&headers),
        )
        .await;

    Ok((StatusCode::CREATED, Json(invoice)))
}

/// Change an invoice's status
#[utoipa::path(
    put,
    path = "/api/invoices/{id}/status",
    tag = INVOICE_TAG,
    params(("id" = Uuid, Path, description = "Invoice ID")),
    request_body = InvoiceStatusDto,
    responses(
        (status = 200, description = "Status changed", body = InvoiceDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_invoice_status(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(body): Json<InvoiceStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_role(&state, &session, Access::Admin).await?;

    let invoice = InvoiceService::new(&state.db)
        .update_status(id, body.status)
        .await?;

    AuditService::new(&state.db)
        .record(
            AuditEvent::new(admin.id, "update_invoice_status").on("invoices", invoice.id),
            &RequestMeta::from_headers(&headers),
        )
        .await;

    Ok((StatusCode::OK, Json(invoice)))
}
