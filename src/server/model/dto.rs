//! Conversions between database models and the shared API DTOs.
//!
//! Status enums exist twice: once as SeaORM active enums in the `entity` crate and once as
//! plain serde enums in `crate::model` so the web front end can use them without the
//! database stack.

use entity::sea_orm_active_enums as db;

use crate::{
    model::{
        billing::{ExpenseDto, ExpenseStatus, InvoiceDto, InvoiceStatus},
        care::{CareLevel, ClientDto},
        public::TestimonialDto,
        schedule::{
            ShiftDto, ShiftStatus, TimeEntryDto, TimeEntryStatus, TimesheetDto, TimesheetStatus,
        },
        user::{Role, UserDto},
    },
    server::model::db::{
        ClientModel, ExpenseModel, InvoiceModel, ShiftModel, TestimonialModel, TimeEntryModel,
        TimesheetModel, UserModel,
    },
};

macro_rules! mirror_enum {
    ($api:ident, $db_mod:ident::$db:ident, [$($variant:ident),+ $(,)?]) => {
        impl From<$db_mod::$db> for $api {
            fn from(value: $db_mod::$db) -> Self {
                match value {
                    $($db_mod::$db::$variant => Self::$variant,)+
                }
            }
        }

        impl From<$api> for $db_mod::$db {
            fn from(value: $api) -> Self {
                match value {
                    $($api::$variant => Self::$variant,)+
                }
            }
        }
    };
}

mirror_enum!(Role, db::UserRole, [Admin, Worker]);
mirror_enum!(
    CareLevel,
    db::CareLevel,
    [Companion, Personal, Alzheimers, LiveIn, Respite]
);
mirror_enum!(
    ShiftStatus,
    db::ShiftStatus,
    [Scheduled, InProgress, Completed, Cancelled]
);
mirror_enum!(
    TimesheetStatus,
    db::TimesheetStatus,
    [Draft, Submitted, Approved, Rejected]
);
mirror_enum!(
    InvoiceStatus,
    db::InvoiceStatus,
    [Draft, Sent, Paid, Overdue, Cancelled]
);
mirror_enum!(ExpenseStatus, db::ExpenseStatus, [Pending, Approved, Rejected]);
mirror_enum!(TimeEntryStatus, db::TimeEntryStatus, [ClockedIn, ClockedOut]);

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role.into(),
            phone: user.phone,
            address: user.address,
            emergency_contact_name: user.emergency_contact_name,
            emergency_contact_phone: user.emergency_contact_phone,
            hourly_rate: user.hourly_rate,
            hire_date: user.hire_date,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

impl From<ClientModel> for ClientDto {
    fn from(client: ClientModel) -> Self {
        Self {
            id: client.id,
            full_name: client.full_name,
            email: client.email,
            phone: client.phone,
            address: client.address,
            emergency_contact_name: client.emergency_contact_name,
            emergency_contact_phone: client.emergency_contact_phone,
            care_level: client.care_level.into(),
            medical_conditions: client.medical_conditions,
            medications: client.medications,
            care_notes: client.care_notes,
            is_active: client.is_active,
            created_at: client.created_at,
        }
    }
}

impl From<TimeEntryModel> for TimeEntryDto {
    fn from(entry: TimeEntryModel) -> Self {
        Self {
            id: entry.id,
            worker_id: entry.worker_id,
            shift_id: entry.shift_id,
            clock_in: entry.clock_in,
            clock_out: entry.clock_out,
            status: entry.status.into(),
        }
    }
}

impl From<TestimonialModel> for TestimonialDto {
    fn from(testimonial: TestimonialModel) -> Self {
        Self {
            id: Some(testimonial.id),
            name: testimonial.name,
            rating: testimonial.rating,
            text: testimonial.text,
            location: testimonial.location,
            created_at: Some(testimonial.created_at),
        }
    }
}

/// Shift with its worker and client names resolved by the caller.
pub fn shift_dto(
    shift: ShiftModel,
    worker_name: Option<String>,
    client_name: Option<String>,
) -> ShiftDto {
    ShiftDto {
        id: shift.id,
        worker_id: shift.worker_id,
        worker_name,
        client_id: shift.client_id,
        client_name,
        start_time: shift.start_time,
        end_time: shift.end_time,
        status: shift.status.into(),
        notes: shift.notes,
    }
}

/// Timesheet with its worker's name resolved by the caller.
pub fn timesheet_dto(timesheet: TimesheetModel, worker_name: Option<String>) -> TimesheetDto {
    TimesheetDto {
        id: timesheet.id,
        worker_id: timesheet.worker_id,
        worker_name,
        week_start: timesheet.week_start,
        week_end: timesheet.week_end,
        total_hours: timesheet.total_hours,
        status: timesheet.status.into(),
        created_at: timesheet.created_at,
    }
}

/// Invoice with its client's name resolved by the caller.
pub fn invoice_dto(invoice: InvoiceModel, client_name: Option<String>) -> InvoiceDto {
    InvoiceDto {
        id: invoice.id,
        client_id: invoice.client_id,
        client_name,
        invoice_number: invoice.invoice_number,
        issue_date: invoice.issue_date,
        due_date: invoice.due_date,
        subtotal: invoice.subtotal,
        tax_amount: invoice.tax_amount,
        total_amount: invoice.total_amount,
        status: invoice.status.into(),
        notes: invoice.notes,
        created_at: invoice.created_at,
    }
}

/// Expense with its worker's name resolved by the caller.
pub fn expense_dto(expense: ExpenseModel, worker_name: Option<String>) -> ExpenseDto {
    ExpenseDto {
        id: expense.id,
        worker_id: expense.worker_id,
        worker_name,
        description: expense.description,
        category: expense.category,
        amount: expense.amount,
        expense_date: expense.expense_date,
        status: expense.status.into(),
        created_at: expense.created_at,
    }
}
