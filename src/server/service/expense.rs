//! Worker expenses: workers submit, admins review.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::billing::{ExpenseDto, ExpenseFormDto, ExpenseStatus},
    server::{
        data::expense::ExpenseRepository,
        error::{form::FormError, record::RecordError, Error},
        model::{db::ExpenseModel, dto::expense_dto},
        service::lookup,
        util::form::all_present,
    },
};

pub struct ExpenseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpenseService<'a> {
    /// Creates a new instance of [`ExpenseService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, status: Option<ExpenseStatus>) -> Result<Vec<ExpenseDto>, Error> {
        let expenses = ExpenseRepository::new(self.db)
            .list(status.map(Into::into))
            .await?;

        self.with_names(expenses).await
    }

    /// Submit an expense for reimbursement; it starts out pending.
    pub async fn submit(&self, worker_id: Uuid, form: &ExpenseFormDto) -> Result<ExpenseDto, Error> {
        if !all_present(&[&form.description]) {
            return Err(FormError::MissingFields("Description and amount are required.").into());
        }

        if form.amount <= 0.0 {
            return Err(
                FormError::InvalidField("Amount must be greater than zero.".to_string()).into(),
            );
        }

        let expense = ExpenseRepository::new(self.db).create(worker_id, form).await?;

        self.with_names(vec![expense])
            .await?
            .pop()
            .ok_or_else(|| Error::InternalError("Expense lost while resolving names".to_string()))
    }

    pub async fn update_status(
        &self,
        expense_id: Uuid,
        status: ExpenseStatus,
    ) -> Result<ExpenseDto, Error> {
        let Some(expense) = ExpenseRepository::new(self.db)
            .update_status(expense_id, status.into())
            .await?
        else {
            return Err(RecordError::NotFound {
                table: "Expense",
                id: expense_id,
            }
            .into());
        };

        self.with_names(vec![expense])
            .await?
            .pop()
            .ok_or_else(|| Error::InternalError("Expense lost while resolving names".to_string()))
    }

    async fn with_names(&self, expenses: Vec<ExpenseModel>) -> Result<Vec<ExpenseDto>, Error> {
        let names = lookup::user_names(self.db, expenses.iter().map(|e| e.worker_id)).await?;

        Ok(expenses
            .into_iter()
            .map(|e| {
                let worker_name = names.get(&e.worker_id).cloned();
                expense_dto(e, worker_name)
            })
            .collect())
    }
}
