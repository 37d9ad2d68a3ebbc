use chrono::{NaiveDate, NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{
    CareLevel, ExpenseStatus, InvoiceStatus, ShiftStatus, TimeEntryStatus, TimesheetStatus,
};
use sea_orm::{ActiveModelTrait, ActiveValue};
use uuid::Uuid;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn care<'a>(&'a mut self) -> CareFixtures<'a> {
        CareFixtures { context: self }
    }
}

pub struct CareFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> CareFixtures<'a> {
    /// Insert an active client with the given care level.
    pub async fn insert_client(
        &self,
        full_name: &str,
        care_level: CareLevel,
    ) -> Result<entity::client::Model, TestError> {
        let client = entity::client::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            full_name: ActiveValue::Set(full_name.to_string()),
            email: ActiveValue::Set(Some(format!(
                "{}@example.com",
                full_name.to_lowercase().replace(' ', ".")
            ))),
            phone: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            emergency_contact_name: ActiveValue::Set(None),
            emergency_contact_phone: ActiveValue::Set(None),
            care_level: ActiveValue::Set(care_level),
            medical_conditions: ActiveValue::Set(None),
            medications: ActiveValue::Set(None),
            care_notes: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(None),
        };

        Ok(client.insert(&self.context.db).await?)
    }

    pub async fn insert_shift(
        &self,
        worker_id: Uuid,
        client_id: Uuid,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        status: ShiftStatus,
    ) -> Result<entity::shift::Model, TestError> {
        let shift = entity::shift::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            worker_id: ActiveValue::Set(worker_id),
            client_id: ActiveValue::Set(client_id),
            start_time: ActiveValue::Set(start_time),
            end_time: ActiveValue::Set(end_time),
            status: ActiveValue::Set(status),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(shift.insert(&self.context.db).await?)
    }

    /// Insert a timesheet covering the seven days starting at `week_start`.
    pub async fn insert_timesheet(
        &self,
        worker_id: Uuid,
        week_start: NaiveDate,
        total_hours: f64,
        status: TimesheetStatus,
    ) -> Result<entity::timesheet::Model, TestError> {
        let timesheet = entity::timesheet::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            worker_id: ActiveValue::Set(worker_id),
            week_start: ActiveValue::Set(week_start),
            week_end: ActiveValue::Set(week_start + chrono::Duration::days(6)),
            total_hours: ActiveValue::Set(total_hours),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(timesheet.insert(&self.context.db).await?)
    }

    /// Insert an invoice whose subtotal equals its total.
    pub async fn insert_invoice(
        &self,
        client_id: Uuid,
        invoice_number: &str,
        total_amount: f64,
        status: InvoiceStatus,
    ) -> Result<entity::invoice::Model, TestError> {
        let today = Utc::now().date_naive();

        let invoice = entity::invoice::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            client_id: ActiveValue::Set(client_id),
            invoice_number: ActiveValue::Set(invoice_number.to_string()),
            issue_date: ActiveValue::Set(today),
            due_date: ActiveValue::Set(today + chrono::Duration::days(30)),
            subtotal: ActiveValue::Set(total_amount),
            tax_amount: ActiveValue::Set(0.0),
            total_amount: ActiveValue::Set(total_amount),
            status: ActiveValue::Set(status),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(invoice.insert(&self.context.db).await?)
    }

    pub async fn insert_expense(
        &self,
        worker_id: Uuid,
        amount: f64,
        status: ExpenseStatus,
    ) -> Result<entity::expense::Model, TestError> {
        let expense = entity::expense::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            worker_id: ActiveValue::Set(worker_id),
            description: ActiveValue::Set("Mileage".to_string()),
            category: ActiveValue::Set(Some("travel".to_string())),
            amount: ActiveValue::Set(amount),
            expense_date: ActiveValue::Set(Utc::now().date_naive()),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(expense.insert(&self.context.db).await?)
    }

    pub async fn insert_time_entry(
        &self,
        worker_id: Uuid,
        clock_in: NaiveDateTime,
        status: TimeEntryStatus,
    ) -> Result<entity::time_entry::Model, TestError> {
        let clock_out = match status {
            TimeEntryStatus::ClockedIn => None,
            TimeEntryStatus::ClockedOut => Some(clock_in + chrono::Duration::hours(4)),
        };

        let time_entry = entity::time_entry::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            worker_id: ActiveValue::Set(worker_id),
            shift_id: ActiveValue::Set(None),
            clock_in: ActiveValue::Set(clock_in),
            clock_out: ActiveValue::Set(clock_out),
            status: ActiveValue::Set(status),
        };

        Ok(time_entry.insert(&self.context.db).await?)
    }

    pub async fn insert_testimonial(
        &self,
        name: &str,
        rating: i32,
        is_approved: bool,
    ) -> Result<entity::testimonial::Model, TestError> {
        let testimonial = entity::testimonial::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(format!(
                "{}@example.com",
                name.to_lowercase().replace(' ', ".")
            )),
            rating: ActiveValue::Set(rating),
            text: ActiveValue::Set("Wonderful caregivers.".to_string()),
            location: ActiveValue::Set(Some("Raleigh".to_string())),
            is_approved: ActiveValue::Set(is_approved),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(testimonial.insert(&self.context.db).await?)
    }

    pub async fn insert_audit_log(
        &self,
        user_id: Option<Uuid>,
        action: &str,
        created_at: NaiveDateTime,
    ) -> Result<entity::audit_log::Model, TestError> {
        let audit_log = entity::audit_log::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            action: ActiveValue::Set(action.to_string()),
            table_name: ActiveValue::Set(None),
            record_id: ActiveValue::Set(None),
            ip_address: ActiveValue::Set(None),
            user_agent: ActiveValue::Set(None),
            created_at: ActiveValue::Set(created_at),
        };

        Ok(audit_log.insert(&self.context.db).await?)
    }
}
