use chrono::Utc;
use entity::sea_orm_active_enums::ExpenseStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::billing::ExpenseFormDto;

pub struct ExpenseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExpenseRepository<'a, C> {
    /// Creates a new instance of [`ExpenseRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a pending expense; a missing date means today
    pub async fn create(
        &self,
        worker_id: Uuid,
        form: &ExpenseFormDto,
    ) -> Result<entity::expense::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let expense = entity::expense::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            worker_id: ActiveValue::Set(worker_id),
            description: ActiveValue::Set(form.description.trim().to_string()),
            category: ActiveValue::Set(form.category.clone()),
            amount: ActiveValue::Set(form.amount),
            expense_date: ActiveValue::Set(form.expense_date.unwrap_or(now.date())),
            status: ActiveValue::Set(ExpenseStatus::Pending),
            created_at: ActiveValue::Set(now),
        };

        expense.insert(self.db).await
    }

    pub async fn list(
        &self,
        status: Option<ExpenseStatus>,
    ) -> Result<Vec<entity::expense::Model>, DbErr> {
        let mut query = entity::prelude::Expense::find();

        if let Some(status) = status {
            query = query.filter(entity::expense::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::expense::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update_status(
        &self,
        expense_id: Uuid,
        status: ExpenseStatus,
    ) -> Result<Option<entity::expense::Model>, DbErr> {
        let Some(expense) = entity::prelude::Expense::find_by_id(expense_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut expense_am = expense.into_active_model();
        expense_am.status = ActiveValue::Set(status);

        Ok(Some(expense_am.update(self.db).await?))
    }
}
