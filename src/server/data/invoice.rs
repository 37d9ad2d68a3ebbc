use chrono::{NaiveDate, NaiveDateTime, Utc};
use entity::sea_orm_active_enums::InvoiceStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Computed invoice values ready for insert
pub struct NewInvoice {
    pub client_id: Uuid,
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total_amount: f64,
    pub notes: Option<String>,
}

pub struct InvoiceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InvoiceRepository<'a, C> {
    /// Creates a new instance of [`InvoiceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a draft invoice
    pub async fn create(&self, invoice: NewInvoice) -> Result<entity::invoice::Model, DbErr> {
        let invoice = entity::invoice::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            client_id: ActiveValue::Set(invoice.client_id),
            invoice_number: ActiveValue::Set(invoice.invoice_number),
            issue_date: ActiveValue::Set(invoice.issue_date),
            due_date: ActiveValue::Set(invoice.due_date),
            subtotal: ActiveValue::Set(invoice.subtotal),
            tax_amount: ActiveValue::Set(invoice.tax_amount),
            total_amount: ActiveValue::Set(invoice.total_amount),
            status: ActiveValue::Set(InvoiceStatus::Draft),
            notes: ActiveValue::Set(invoice.notes),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        invoice.insert(self.db).await
    }

    /// All invoices newest first, each with its client if the client still exists
    pub async fn list_with_clients(
        &self,
    ) -> Result<Vec<(entity::invoice::Model, Option<entity::client::Model>)>, DbErr> {
        entity::prelude::Invoice::find()
            .find_also_related(entity::prelude::Client)
            .order_by_desc(entity::invoice::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// All invoices, without client names
    pub async fn list(&self) -> Result<Vec<entity::invoice::Model>, DbErr> {
        entity::prelude::Invoice::find()
            .order_by_desc(entity::invoice::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Invoices created within the half-open window `[start, end)`
    pub async fn list_created_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<entity::invoice::Model>, DbErr> {
        entity::prelude::Invoice::find()
            .filter(entity::invoice::Column::CreatedAt.gte(start))
            .filter(entity::invoice::Column::CreatedAt.lt(end))
            .order_by_asc(entity::invoice::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update_status(
        &self,
        invoice_id: Uuid,
        status: InvoiceStatus,
    ) -> Result<Option<entity::invoice::Model>, DbErr> {
        let Some(invoice) = entity::prelude::Invoice::find_by_id(invoice_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut invoice_am = invoice.into_active_model();
        invoice_am.status = ActiveValue::Set(status);

        Ok(Some(invoice_am.update(self.db).await?))
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use chrono::NaiveDate;
        use entity::sea_orm_active_enums::{CareLevel, InvoiceStatus};
        use serenewings_test_utils::prelude::*;

        use crate::server::data::invoice::{InvoiceRepository, NewInvoice};

        /// Expect the invoice to be inserted as a draft
        #[tokio::test]
        async fn creates_draft_invoice() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let client = test.care().insert_client("Amy Pond", CareLevel::Companion).await?;

            let invoice_repo = InvoiceRepository::new(&test.db);
            let invoice = invoice_repo
                .create(NewInvoice {
                    client_id: client.id,
                    invoice_number: "INV-202501-042".to_string(),
                    issue_date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
                    due_date: NaiveDate::from_ymd_opt(2025, 2, 5).unwrap(),
                    subtotal: 100.0,
                    tax_amount: 8.25,
                    total_amount: 108.25,
                    notes: None,
                })
                .await?;

            assert_eq!(invoice.status, InvoiceStatus::Draft);
            assert_eq!(invoice.total_amount, 108.25);

            Ok(())
        }
    }

    mod list_with_clients {
        use entity::sea_orm_active_enums::{CareLevel, InvoiceStatus};
        use serenewings_test_utils::prelude::*;

        use crate::server::data::invoice::InvoiceRepository;

        /// Expect each invoice to carry its client
        #[tokio::test]
        async fn joins_client() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let client = test.care().insert_client("Amy Pond", CareLevel::Companion).await?;
            test.care()
                .insert_invoice(client.id, "INV-202501-001", 108.25, InvoiceStatus::Sent)
                .await?;

            let invoice_repo = InvoiceRepository::new(&test.db);
            let invoices = invoice_repo.list_with_clients().await?;

            assert_eq!(invoices.len(), 1);
            let (_, invoice_client) = &invoices[0];
            assert_eq!(
                invoice_client.as_ref().map(|c| c.full_name.as_str()),
                Some("Amy Pond")
            );

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let invoice_repo = InvoiceRepository::new(&test.db);
            let result = invoice_repo.list_with_clients().await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod update_status {
        use entity::sea_orm_active_enums::{CareLevel, InvoiceStatus};
        use serenewings_test_utils::prelude::*;

        use crate::server::data::invoice::InvoiceRepository;

        /// Expect status to change from draft to paid directly
        #[tokio::test]
        async fn updates_status() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let client = test.care().insert_client("Amy Pond", CareLevel::Companion).await?;
            let invoice = test
                .care()
                .insert_invoice(client.id, "INV-202501-001", 50.0, InvoiceStatus::Draft)
                .await?;

            let invoice_repo = InvoiceRepository::new(&test.db);
            let updated = invoice_repo
                .update_status(invoice.id, InvoiceStatus::Paid)
                .await?;

            assert_eq!(updated.map(|i| i.status), Some(InvoiceStatus::Paid));

            Ok(())
        }
    }
}
