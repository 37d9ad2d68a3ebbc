//! Invoicing for admins.
//!
//! Tax and totals are computed here and stored on the invoice; they are never recomputed
//! when the invoice is read.

use chrono::{Datelike, Duration, NaiveDate};
use entity::sea_orm_active_enums::InvoiceStatus as DbInvoiceStatus;
use rand::Rng;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::billing::{
        InvoiceDto, InvoiceFormDto, InvoiceLedgerDto, InvoiceStatus, InvoiceSummaryDto,
    },
    server::{
        data::{
            client::ClientRepository,
            invoice::{InvoiceRepository, NewInvoice},
        },
        error::{form::FormError, record::RecordError, Error},
        model::{db::InvoiceModel, dto::invoice_dto},
        util::{money::round2, search::SearchTerm, time},
    },
};

/// North Carolina sales tax applied when the form leaves the rate out
pub const DEFAULT_TAX_RATE: f64 = 8.25;

/// Days between issue and due date when no due date is given
pub const PAYMENT_TERM_DAYS: i64 = 30;

/// Tax and total for `subtotal` at `tax_rate` percent, each rounded to cents.
pub fn compute_totals(subtotal: f64, tax_rate: f64) -> (f64, f64) {
    let tax_amount = round2(subtotal * tax_rate / 100.0);
    let total_amount = round2(subtotal + tax_amount);

    (tax_amount, total_amount)
}

/// `INV-YYYYMM-NNN` where `NNN` is a random number from 000 to 999.
pub fn invoice_number(date: NaiveDate, rng: &mut impl Rng) -> String {
    format!(
        "INV-{:04}{:02}-{:03}",
        date.year(),
        date.month(),
        rng.random_range(0..1000)
    )
}

/// Paid, sent and overdue sums across `invoices`.
pub fn summarize(invoices: &[InvoiceModel]) -> InvoiceSummaryDto {
    let sum = |status: DbInvoiceStatus| {
        round2(
            invoices
                .iter()
                .filter(|i| i.status == status)
                .map(|i| i.total_amount)
                .sum(),
        )
    };

    InvoiceSummaryDto {
        total_revenue: sum(DbInvoiceStatus::Paid),
        pending_amount: sum(DbInvoiceStatus::Sent),
        overdue_amount: sum(DbInvoiceStatus::Overdue),
    }
}

pub struct InvoiceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvoiceService<'a> {
    /// Creates a new instance of [`InvoiceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Invoices newest first with client names, and the ledger summary.
    ///
    /// `search` matches the invoice number or client name; the summary covers all invoices.
    pub async fn ledger(&self, search: Option<&str>) -> Result<InvoiceLedgerDto, Error> {
        let rows = InvoiceRepository::new(self.db).list_with_clients().await?;

        let invoices: Vec<InvoiceModel> = rows.iter().map(|(i, _)| i.clone()).collect();
        let summary = summarize(&invoices);

        let term = SearchTerm::new(search);
        let invoices = rows
            .into_iter()
            .map(|(invoice, client)| invoice_dto(invoice, client.map(|c| c.full_name)))
            .filter(|i| {
                term.matches([
                    Some(i.invoice_number.as_str()),
                    i.client_name.as_deref(),
                ])
            })
            .collect();

        Ok(InvoiceLedgerDto { invoices, summary })
    }

    /// Create a draft invoice for an existing client.
    ///
    /// # Returns
    /// - `Ok(InvoiceDto)` - Draft invoice with tax and total computed
    /// - `Err(FormError::InvalidField)` - Negative subtotal or tax rate
    /// - `Err(RecordError::NotFound)` - Client does not exist
    pub async fn create(&self, form: &InvoiceFormDto) -> Result<InvoiceDto, Error> {
        let tax_rate = form.tax_rate.unwrap_or(DEFAULT_TAX_RATE);
        if form.subtotal < 0.0 || tax_rate < 0.0 {
            return Err(FormError::InvalidField(
                "Subtotal and tax rate cannot be negative.".to_string(),
            )
            .into());
        }

        let Some(client) = ClientRepository::new(self.db).get(form.client_id).await? else {
            return Err(RecordError::NotFound {
                table: "Client",
                id: form.client_id,
            }
            .into());
        };

        let today = time::now().date();
        let issue_date = form.issue_date.unwrap_or(today);
        let due_date = form
            .due_date
            .unwrap_or(today + Duration::days(PAYMENT_TERM_DAYS));
        let (tax_amount, total_amount) = compute_totals(form.subtotal, tax_rate);
        // Numbered by the month the invoice is created, not its issue date
        let number = invoice_number(today, &mut rand::rng());

        let invoice = InvoiceRepository::new(self.db)
            .create(NewInvoice {
                client_id: client.id,
                invoice_number: number,
                issue_date,
                due_date,
                subtotal: form.subtotal,
                tax_amount,
                total_amount,
                notes: form.notes.clone().filter(|n| !n.trim().is_empty()),
            })
            .await?;

        Ok(invoice_dto(invoice, Some(client.full_name)))
    }

    pub async fn update_status(
        &self,
        invoice_id: Uuid,
        status: InvoiceStatus,
    ) -> Result<InvoiceDto, Error> {
        let Some(invoice) = InvoiceRepository::new(self.db)
            .update_status(invoice_id, status.into())
            .await?
        else {
            return Err(RecordError::NotFound {
                table: "Invoice",
                id: invoice_id,
            }
            .into());
        };

        let client = ClientRepository::new(self.db).get(invoice.client_id).await?;

        Ok(invoice_dto(invoice, client.map(|c| c.full_name)))
    }
}
