use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::user::{UpdateProfileDto, WorkerFormDto};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert or refresh the profile of an auth user.
    ///
    /// A repeated sign-up only updates email and name, leaving role and active flag as an
    /// admin may have changed them.
    pub async fn upsert_profile(
        &self,
        user_id: Uuid,
        email: &str,
        full_name: &str,
        role: UserRole,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(user_id),
            email: ActiveValue::Set(email.to_string()),
            full_name: ActiveValue::Set(full_name.to_string()),
            role: ActiveValue::Set(role),
            phone: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            emergency_contact_name: ActiveValue::Set(None),
            emergency_contact_phone: ActiveValue::Set(None),
            hourly_rate: ActiveValue::Set(None),
            hire_date: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(Some(now)),
        };

        entity::prelude::User::insert(user)
            .on_conflict(
                OnConflict::column(entity::user::Column::Id)
                    .update_columns([
                        entity::user::Column::Email,
                        entity::user::Column::FullName,
                        entity::user::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        self.get(user_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Failed to find upserted user ID {}", user_id))
        })
    }

    /// Create a worker profile entered by an admin
    pub async fn create_worker(
        &self,
        form: &WorkerFormDto,
    ) -> Result<entity::user::Model, DbErr> {
        let worker = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email: ActiveValue::Set(form.email.trim().to_string()),
            full_name: ActiveValue::Set(form.full_name.trim().to_string()),
            role: ActiveValue::Set(UserRole::Worker),
            phone: ActiveValue::Set(form.phone.clone()),
            address: ActiveValue::Set(form.address.clone()),
            emergency_contact_name: ActiveValue::Set(form.emergency_contact_name.clone()),
            emergency_contact_phone: ActiveValue::Set(form.emergency_contact_phone.clone()),
            hourly_rate: ActiveValue::Set(form.hourly_rate),
            hire_date: ActiveValue::Set(form.hire_date),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(None),
        };

        worker.insert(self.db).await
    }

    pub async fn get(&self, user_id: Uuid) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Fetch users by ID, used to resolve worker names for other records
    pub async fn find_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<entity::user::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// All users with `role`, newest first
    pub async fn list_by_role(&self, role: UserRole) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role))
            .order_by_desc(entity::user::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update_worker(
        &self,
        user_id: Uuid,
        form: &WorkerFormDto,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(user_id)
            .filter(entity::user::Column::Role.eq(UserRole::Worker))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.full_name = ActiveValue::Set(form.full_name.trim().to_string());
        user_am.email = ActiveValue::Set(form.email.trim().to_string());
        user_am.phone = ActiveValue::Set(form.phone.clone());
        user_am.address = ActiveValue::Set(form.address.clone());
        user_am.emergency_contact_name = ActiveValue::Set(form.emergency_contact_name.clone());
        user_am.emergency_contact_phone = ActiveValue::Set(form.emergency_contact_phone.clone());
        user_am.hourly_rate = ActiveValue::Set(form.hourly_rate);
        user_am.hire_date = ActiveValue::Set(form.hire_date);
        user_am.updated_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Update the fields a user may change on their own profile
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        profile: &UpdateProfileDto,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.full_name = ActiveValue::Set(profile.full_name.trim().to_string());
        user_am.phone = ActiveValue::Set(profile.phone.clone());
        user_am.address = ActiveValue::Set(profile.address.clone());
        user_am.emergency_contact_name = ActiveValue::Set(profile.emergency_contact_name.clone());
        user_am.emergency_contact_phone =
            ActiveValue::Set(profile.emergency_contact_phone.clone());
        user_am.updated_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Set `is_active`, returning the number of rows updated
    pub async fn set_active(&self, user_id: Uuid, is_active: bool) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::IsActive, is_active.into())
            .col_expr(
                entity::user::Column::UpdatedAt,
                Some(Utc::now().naive_utc()).into(),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(entity::user::Column::Role.eq(UserRole::Worker))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
