use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::{
    CareLevel, ExpenseStatus as ExpenseStatusModel, InvoiceStatus as InvoiceStatusModel,
};
use sea_orm::EntityTrait;
use serenewings::{
    model::{
        api::SearchQuery,
        billing::{
            ExpenseDto, ExpenseFormDto, ExpenseStatus, ExpenseStatusDto, InvoiceDto,
            InvoiceFormDto, InvoiceLedgerDto, InvoiceStatus, InvoiceStatusDto,
        },
    },
    server::controller::{
        approval::update_expense_status,
        invoice::{create_invoice, get_invoices, update_invoice_status},
        portal::submit_expense,
    },
};

use super::*;

fn invoice_form(client_id: Uuid, subtotal: f64) -> InvoiceFormDto {
    InvoiceFormDto {
        client_id,
        subtotal,
        tax_rate: None,
        issue_date: None,
        due_date: None,
        notes: None,
    }
}

/// Expect 8.25% tax on a 100.00 subtotal and a create_invoice audit row
#[tokio::test]
async fn creates_draft_invoice_with_default_tax() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test.user().insert_admin("Grace Hopper").await?;
    let client = test.care().insert_client("Ada Lovelace", CareLevel::Personal).await?;
    sign_in_as(&test, admin.id).await;

    let result = create_invoice(
        State(test.app_state()),
        test.session.clone(),
        HeaderMap::new(),
        Json(invoice_form(client.id, 100.0)),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);
    let invoice: InvoiceDto = read_json(response).await;
    assert_eq!(invoice.tax_amount, 8.25);
    assert_eq!(invoice.total_amount, 108.25);
    assert_eq!(invoice.status, InvoiceStatus::Draft);
    assert_eq!(invoice.client_name.as_deref(), Some("Ada Lovelace"));
    assert!(invoice.invoice_number.starts_with("INV-"));

    let audit = entity::prelude::AuditLog::find().all(&test.db).await?;
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].action, "create_invoice");
    assert_eq!(audit[0].record_id, Some(invoice.id));

    Ok(())
}

/// Expect 400 and nothing stored for a negative subtotal
#[tokio::test]
async fn rejects_negative_subtotal() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test.user().insert_admin("Grace Hopper").await?;
    let client = test.care().insert_client("Ada Lovelace", CareLevel::Personal).await?;
    sign_in_as(&test, admin.id).await;

    let result = create_invoice(
        State(test.app_state()),
        test.session.clone(),
        HeaderMap::new(),
        Json(invoice_form(client.id, -5.0)),
    )
    .await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let invoices = entity::prelude::Invoice::find().all(&test.db).await?;
    assert!(invoices.is_empty());

    Ok(())
}

/// Expect paid invoices counted as revenue in the ledger summary
#[tokio::test]
async fn ledger_summarizes_by_status() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test.user().insert_admin("Grace Hopper").await?;
    let client = test.care().insert_client("Ada Lovelace", CareLevel::Personal).await?;
    test.care()
        .insert_invoice(client.id, "INV-1", 200.0, InvoiceStatusModel::Paid)
        .await?;
    test.care()
        .insert_invoice(client.id, "INV-2", 50.0, InvoiceStatusModel::Sent)
        .await?;
    test.care()
        .insert_invoice(client.id, "INV-3", 75.0, InvoiceStatusModel::Overdue)
        .await?;
    sign_in_as(&test, admin.id).await;

    let result = get_invoices(
        State(test.app_state()),
        test.session.clone(),
        Query(SearchQuery::default()),
    )
    .await;

    assert!(result.is_ok());
    let ledger: InvoiceLedgerDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(ledger.invoices.len(), 3);
    assert_eq!(ledger.summary.total_revenue, 200.0);
    assert_eq!(ledger.summary.pending_amount, 50.0);
    assert_eq!(ledger.summary.overdue_amount, 75.0);

    Ok(())
}

/// Expect 404 when marking an unknown invoice paid
#[tokio::test]
async fn status_update_requires_existing_invoice() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test.user().insert_admin("Grace Hopper").await?;
    sign_in_as(&test, admin.id).await;

    let result = update_invoice_status(
        State(test.app_state()),
        test.session.clone(),
        HeaderMap::new(),
        Path(Uuid::new_v4()),
        Json(InvoiceStatusDto {
            status: InvoiceStatus::Paid,
        }),
    )
    .await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 for a zero amount expense
#[tokio::test]
async fn rejects_zero_expense() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let worker = test.user().insert_worker("Jane Doe").await?;
    sign_in_as(&test, worker.id).await;

    let result = submit_expense(
        State(test.app_state()),
        test.session.clone(),
        Json(ExpenseFormDto {
            description: "Mileage".to_string(),
            category: None,
            amount: 0.0,
            expense_date: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect a pending expense that an admin can reject
#[tokio::test]
async fn submits_and_rejects_expense() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test.user().insert_admin("Grace Hopper").await?;
    let worker = test.user().insert_worker("Jane Doe").await?;
    sign_in_as(&test, worker.id).await;
    let state = test.app_state();

    let result = submit_expense(
        State(state.clone()),
        test.session.clone(),
        Json(ExpenseFormDto {
            description: "Mileage".to_string(),
            category: Some("travel".to_string()),
            amount: 18.4,
            expense_date: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);
    let expense: ExpenseDto = read_json(response).await;
    assert_eq!(expense.status, ExpenseStatus::Pending);

    sign_in_as(&test, admin.id).await;
    let result = update_expense_status(
        State(state),
        test.session.clone(),
        Path(expense.id),
        Json(ExpenseStatusDto {
            status: ExpenseStatus::Rejected,
        }),
    )
    .await;

    assert!(result.is_ok());
    let stored = entity::prelude::Expense::find_by_id(expense.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, ExpenseStatusModel::Rejected);

    Ok(())
}
