use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue};
use uuid::Uuid;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a profile with the given role and active flag.
    ///
    /// The email is derived from the name, e.g. `Jane Doe` becomes `jane.doe@example.com`.
    pub async fn insert_user(
        &self,
        full_name: &str,
        role: UserRole,
        is_active: bool,
    ) -> Result<entity::user::Model, TestError> {
        let email = format!(
            "{}@example.com",
            full_name.to_lowercase().replace(' ', ".")
        );

        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email: ActiveValue::Set(email),
            full_name: ActiveValue::Set(full_name.to_string()),
            role: ActiveValue::Set(role),
            phone: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            emergency_contact_name: ActiveValue::Set(None),
            emergency_contact_phone: ActiveValue::Set(None),
            hourly_rate: ActiveValue::Set(Some(20.0)),
            hire_date: ActiveValue::Set(None),
            is_active: ActiveValue::Set(is_active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(None),
        };

        Ok(user.insert(&self.context.db).await?)
    }

    /// Insert an active worker.
    pub async fn insert_worker(&self, full_name: &str) -> Result<entity::user::Model, TestError> {
        self.insert_user(full_name, UserRole::Worker, true).await
    }

    /// Insert an active admin.
    pub async fn insert_admin(&self, full_name: &str) -> Result<entity::user::Model, TestError> {
        self.insert_user(full_name, UserRole::Admin, true).await
    }

    /// Insert a worker with a specific hourly rate.
    pub async fn insert_worker_with_rate(
        &self,
        full_name: &str,
        hourly_rate: f64,
    ) -> Result<entity::user::Model, TestError> {
        let worker = self.insert_worker(full_name).await?;

        let mut worker_am: entity::user::ActiveModel = worker.into();
        worker_am.hourly_rate = ActiveValue::Set(Some(hourly_rate));

        Ok(worker_am.update(&self.context.db).await?)
    }
}
