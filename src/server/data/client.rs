use chrono::Utc;
use entity::sea_orm_active_enums::CareLevel;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::care::ClientFormDto;

pub struct ClientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClientRepository<'a, C> {
    /// Creates a new instance of [`ClientRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a new active client
    pub async fn create(&self, form: &ClientFormDto) -> Result<entity::client::Model, DbErr> {
        let client = entity::client::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            full_name: ActiveValue::Set(form.full_name.trim().to_string()),
            email: ActiveValue::Set(form.email.clone()),
            phone: ActiveValue::Set(form.phone.clone()),
            address: ActiveValue::Set(form.address.clone()),
            emergency_contact_name: ActiveValue::Set(form.emergency_contact_name.clone()),
            emergency_contact_phone: ActiveValue::Set(form.emergency_contact_phone.clone()),
            care_level: ActiveValue::Set(CareLevel::from(form.care_level)),
            medical_conditions: ActiveValue::Set(form.medical_conditions.clone()),
            medications: ActiveValue::Set(form.medications.clone()),
            care_notes: ActiveValue::Set(form.care_notes.clone()),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(None),
        };

        client.insert(self.db).await
    }

    pub async fn get(&self, client_id: Uuid) -> Result<Option<entity::client::Model>, DbErr> {
        entity::prelude::Client::find_by_id(client_id)
            .one(self.db)
            .await
    }

    /// All clients, newest first
    pub async fn list(&self) -> Result<Vec<entity::client::Model>, DbErr> {
        entity::prelude::Client::find()
            .order_by_desc(entity::client::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Active clients ordered by name, as offered by the shift and invoice forms
    pub async fn list_active(&self) -> Result<Vec<entity::client::Model>, DbErr> {
        entity::prelude::Client::find()
            .filter(entity::client::Column::IsActive.eq(true))
            .order_by_asc(entity::client::Column::FullName)
            .all(self.db)
            .await
    }

    pub async fn find_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<entity::client::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Client::find()
            .filter(entity::client::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// Replace the editable fields of a client, returning `None` when it does not exist
    pub async fn update(
        &self,
        client_id: Uuid,
        form: &ClientFormDto,
    ) -> Result<Option<entity::client::Model>, DbErr> {
        let Some(client) = self.get(client_id).await? else {
            return Ok(None);
        };

        let mut client_am = client.into_active_model();
        client_am.full_name = ActiveValue::Set(form.full_name.trim().to_string());
        client_am.email = ActiveValue::Set(form.email.clone());
        client_am.phone = ActiveValue::Set(form.phone.clone());
        client_am.address = ActiveValue::Set(form.address.clone());
        client_am.emergency_contact_name = ActiveValue::Set(form.emergency_contact_name.clone());
        client_am.emergency_contact_phone =
            ActiveValue::Set(form.emergency_contact_phone.clone());
        client_am.care_level = ActiveValue::Set(CareLevel::from(form.care_level));
        client_am.medical_conditions = ActiveValue::Set(form.medical_conditions.clone());
        client_am.medications = ActiveValue::Set(form.medications.clone());
        client_am.care_notes = ActiveValue::Set(form.care_notes.clone());
        client_am.updated_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        Ok(Some(client_am.update(self.db).await?))
    }

    /// Set `is_active`, returning the number of rows updated
    pub async fn set_active(&self, client_id: Uuid, is_active: bool) -> Result<u64, DbErr> {
        let result = entity::prelude::Client::update_many()
            .col_expr(entity::client::Column::IsActive, is_active.into())
            .col_expr(
                entity::client::Column::UpdatedAt,
                Some(Utc::now().naive_utc()).into(),
            )
            .filter(entity::client::Column::Id.eq(client_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use entity::sea_orm_active_enums::CareLevel;
        use serenewings_test_utils::prelude::*;

        use crate::{model::care::ClientFormDto, server::data::client::ClientRepository};

        /// Expect an active client with the default care level
        #[tokio::test]
        async fn creates_active_client() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Client)?;

            let client_repo = ClientRepository::new(&test.db);
            let form = ClientFormDto {
                full_name: "  Rose Tyler ".to_string(),
                ..Default::default()
            };
            let result = client_repo.create(&form).await;

            assert!(result.is_ok());
            let client = result.unwrap();
            assert_eq!(client.full_name, "Rose Tyler");
            assert_eq!(client.care_level, CareLevel::Companion);
            assert!(client.is_active);

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let client_repo = ClientRepository::new(&test.db);
            let result = client_repo.create(&ClientFormDto::default()).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod list_active {
        use entity::sea_orm_active_enums::CareLevel;
        use serenewings_test_utils::prelude::*;

        use crate::server::data::client::ClientRepository;

        /// Expect deactivated clients to be left out
        #[tokio::test]
        async fn excludes_inactive_clients() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let active = test.care().insert_client("Amy Pond", CareLevel::Personal).await?;
            let inactive = test.care().insert_client("Rory Williams", CareLevel::Respite).await?;

            let client_repo = ClientRepository::new(&test.db);
            client_repo.set_active(inactive.id, false).await?;
            let clients = client_repo.list_active().await?;

            assert_eq!(clients.len(), 1);
            assert_eq!(clients[0].id, active.id);

            Ok(())
        }
    }

    mod update {
        use entity::sea_orm_active_enums::CareLevel;
        use serenewings_test_utils::prelude::*;
        use uuid::Uuid;

        use crate::{
            model::care::{self, ClientFormDto},
            server::data::client::ClientRepository,
        };

        /// Expect updated fields to be persisted
        #[tokio::test]
        async fn updates_existing_client() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let client = test.care().insert_client("Amy Pond", CareLevel::Companion).await?;

            let client_repo = ClientRepository::new(&test.db);
            let form = ClientFormDto {
                full_name: "Amelia Pond".to_string(),
                care_level: care::CareLevel::Alzheimers,
                ..Default::default()
            };
            let updated = client_repo.update(client.id, &form).await?;

            assert!(updated.is_some());
            let updated = updated.unwrap();
            assert_eq!(updated.full_name, "Amelia Pond");
            assert_eq!(updated.care_level, CareLevel::Alzheimers);
            assert!(updated.updated_at.is_some());

            Ok(())
        }

        /// Expect Ok(None) when the client does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_client() -> Result<(), TestError> {
            let test = test_setup_with_care_tables!()?;

            let client_repo = ClientRepository::new(&test.db);
            let result = client_repo
                .update(Uuid::new_v4(), &ClientFormDto::default())
                .await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }
}
