//! Factory functions for in-memory models.
//!
//! Used by unit tests of the pure aggregation and display logic; nothing here touches the
//! database.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{
    CareLevel, InvoiceStatus, ShiftStatus, TimesheetStatus, UserRole,
};
use uuid::Uuid;

/// Create an active worker model.
pub fn mock_worker_model(full_name: &str, hourly_rate: Option<f64>) -> entity::user::Model {
    entity::user::Model {
        id: Uuid::new_v4(),
        email: format!("{}@example.com", full_name.to_lowercase().replace(' ', ".")),
        full_name: full_name.to_string(),
        role: UserRole::Worker,
        phone: None,
        address: None,
        emergency_contact_name: None,
        emergency_contact_phone: None,
        hourly_rate,
        hire_date: None,
        is_active: true,
        created_at: Utc::now().naive_utc(),
        updated_at: None,
    }
}

/// Create an active client model.
pub fn mock_client_model(full_name: &str, care_level: CareLevel) -> entity::client::Model {
    entity::client::Model {
        id: Uuid::new_v4(),
        full_name: full_name.to_string(),
        email: None,
        phone: None,
        address: None,
        emergency_contact_name: None,
        emergency_contact_phone: None,
        care_level,
        medical_conditions: None,
        medications: None,
        care_notes: None,
        is_active: true,
        created_at: Utc::now().naive_utc(),
        updated_at: None,
    }
}

pub fn mock_shift_model(
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    status: ShiftStatus,
) -> entity::shift::Model {
    entity::shift::Model {
        id: Uuid::new_v4(),
        worker_id: Uuid::new_v4(),
        client_id: Uuid::new_v4(),
        start_time,
        end_time,
        status,
        notes: None,
        created_at: Utc::now().naive_utc(),
    }
}

pub fn mock_timesheet_model(
    worker_id: Uuid,
    week_start: NaiveDate,
    total_hours: f64,
    status: TimesheetStatus,
) -> entity::timesheet::Model {
    entity::timesheet::Model {
        id: Uuid::new_v4(),
        worker_id,
        week_start,
        week_end: week_start + chrono::Duration::days(6),
        total_hours,
        status,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create an invoice model created at `created_at`.
pub fn mock_invoice_model(
    total_amount: f64,
    status: InvoiceStatus,
    created_at: NaiveDateTime,
) -> entity::invoice::Model {
    entity::invoice::Model {
        id: Uuid::new_v4(),
        client_id: Uuid::new_v4(),
        invoice_number: "INV-202501-001".to_string(),
        issue_date: created_at.date(),
        due_date: created_at.date() + chrono::Duration::days(30),
        subtotal: total_amount,
        tax_amount: 0.0,
        total_amount,
        status,
        notes: None,
        created_at,
    }
}
