use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::ShiftStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::schedule::ShiftFormDto;

pub struct ShiftRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShiftRepository<'a, C> {
    /// Creates a new instance of [`ShiftRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a shift with status `scheduled`
    pub async fn create(&self, form: &ShiftFormDto) -> Result<entity::shift::Model, DbErr> {
        let shift = entity::shift::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            worker_id: ActiveValue::Set(form.worker_id),
            client_id: ActiveValue::Set(form.client_id),
            start_time: ActiveValue::Set(form.start_time),
            end_time: ActiveValue::Set(form.end_time),
            status: ActiveValue::Set(ShiftStatus::Scheduled),
            notes: ActiveValue::Set(form.notes.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        shift.insert(self.db).await
    }

    pub async fn get(&self, shift_id: Uuid) -> Result<Option<entity::shift::Model>, DbErr> {
        entity::prelude::Shift::find_by_id(shift_id).one(self.db).await
    }

    /// Non-cancelled shifts of `worker_id` starting within `[start, end]`, bounds inclusive
    pub async fn find_conflicts(
        &self,
        worker_id: Uuid,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<entity::shift::Model>, DbErr> {
        entity::prelude::Shift::find()
            .filter(entity::shift::Column::WorkerId.eq(worker_id))
            .filter(entity::shift::Column::StartTime.gte(start))
            .filter(entity::shift::Column::StartTime.lte(end))
            .filter(entity::shift::Column::Status.ne(ShiftStatus::Cancelled))
            .all(self.db)
            .await
    }

    /// All shifts, earliest start first
    pub async fn list(&self) -> Result<Vec<entity::shift::Model>, DbErr> {
        entity::prelude::Shift::find()
            .order_by_asc(entity::shift::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Shifts starting within the half-open window `[start, end)`
    pub async fn list_starting_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<entity::shift::Model>, DbErr> {
        entity::prelude::Shift::find()
            .filter(entity::shift::Column::StartTime.gte(start))
            .filter(entity::shift::Column::StartTime.lt(end))
            .order_by_asc(entity::shift::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Shifts of `worker_id` starting at or after `from`, earliest first
    pub async fn list_for_worker_from(
        &self,
        worker_id: Uuid,
        from: NaiveDateTime,
    ) -> Result<Vec<entity::shift::Model>, DbErr> {
        entity::prelude::Shift::find()
            .filter(entity::shift::Column::WorkerId.eq(worker_id))
            .filter(entity::shift::Column::StartTime.gte(from))
            .order_by_asc(entity::shift::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Set the status of a shift, returning `None` when it does not exist
    pub async fn update_status(
        &self,
        shift_id: Uuid,
        status: ShiftStatus,
    ) -> Result<Option<entity::shift::Model>, DbErr> {
        let Some(shift) = self.get(shift_id).await? else {
            return Ok(None);
        };

        let mut shift_am = shift.into_active_model();
        shift_am.status = ActiveValue::Set(status);

        Ok(Some(shift_am.update(self.db).await?))
    }
}

#[cfg(test)]
mod tests {
    mod find_conflicts {
        use chrono::{Duration, NaiveDate, NaiveDateTime};
        use entity::sea_orm_active_enums::{CareLevel, ShiftStatus};
        use serenewings_test_utils::prelude::*;

        use crate::server::data::shift::ShiftRepository;

        fn at(hour: u32) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2025, 1, 6)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap()
        }

        /// Expect a shift starting inside the window to conflict
        #[tokio::test]
        async fn finds_shift_starting_in_window() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let worker = test.user().insert_worker("Jane Doe").await?;
            let client = test.care().insert_client("Amy Pond", CareLevel::Companion).await?;
            test.care()
                .insert_shift(worker.id, client.id, at(10), at(14), ShiftStatus::Scheduled)
                .await?;

            let shift_repo = ShiftRepository::new(&test.db);
            let conflicts = shift_repo.find_conflicts(worker.id, at(9), at(12)).await?;

            assert_eq!(conflicts.len(), 1);

            Ok(())
        }

        /// Expect a shift starting exactly at the window's end to conflict
        #[tokio::test]
        async fn window_end_is_inclusive() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let worker = test.user().insert_worker("Jane Doe").await?;
            let client = test.care().insert_client("Amy Pond", CareLevel::Companion).await?;
            test.care()
                .insert_shift(worker.id, client.id, at(12), at(16), ShiftStatus::Scheduled)
                .await?;

            let shift_repo = ShiftRepository::new(&test.db);
            let conflicts = shift_repo.find_conflicts(worker.id, at(8), at(12)).await?;

            assert_eq!(conflicts.len(), 1);

            Ok(())
        }

        /// Expect cancelled shifts and other workers' shifts to be ignored
        #[tokio::test]
        async fn ignores_cancelled_and_other_workers() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let worker = test.user().insert_worker("Jane Doe").await?;
            let other = test.user().insert_worker("John Roe").await?;
            let client = test.care().insert_client("Amy Pond", CareLevel::Companion).await?;
            test.care()
                .insert_shift(worker.id, client.id, at(10), at(14), ShiftStatus::Cancelled)
                .await?;
            test.care()
                .insert_shift(other.id, client.id, at(10), at(14), ShiftStatus::Scheduled)
                .await?;

            let shift_repo = ShiftRepository::new(&test.db);
            let conflicts = shift_repo.find_conflicts(worker.id, at(9), at(12)).await?;

            assert!(conflicts.is_empty());

            Ok(())
        }

        /// Expect a shift that started before the window to be missed by the start-time check
        #[tokio::test]
        async fn misses_shift_started_before_window() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let worker = test.user().insert_worker("Jane Doe").await?;
            let client = test.care().insert_client("Amy Pond", CareLevel::Companion).await?;
            test.care()
                .insert_shift(worker.id, client.id, at(8), at(16), ShiftStatus::Scheduled)
                .await?;

            let shift_repo = ShiftRepository::new(&test.db);
            let conflicts = shift_repo
                .find_conflicts(worker.id, at(10), at(10) + Duration::hours(2))
                .await?;

            assert!(conflicts.is_empty());

            Ok(())
        }
    }

    mod list_starting_between {
        use chrono::{Duration, Utc};
        use entity::sea_orm_active_enums::{CareLevel, ShiftStatus};
        use serenewings_test_utils::prelude::*;

        use crate::server::{data::shift::ShiftRepository, util::time};

        /// Expect only shifts starting today
        #[tokio::test]
        async fn returns_shifts_in_window() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let worker = test.user().insert_worker("Jane Doe").await?;
            let client = test.care().insert_client("Amy Pond", CareLevel::Companion).await?;
            let (start, end) = time::day_bounds(Utc::now().date_naive());
            test.care()
                .insert_shift(
                    worker.id,
                    client.id,
                    start + Duration::hours(9),
                    start + Duration::hours(13),
                    ShiftStatus::Scheduled,
                )
                .await?;
            test.care()
                .insert_shift(
                    worker.id,
                    client.id,
                    end + Duration::hours(9),
                    end + Duration::hours(13),
                    ShiftStatus::Scheduled,
                )
                .await?;

            let shift_repo = ShiftRepository::new(&test.db);
            let shifts = shift_repo.list_starting_between(start, end).await?;

            assert_eq!(shifts.len(), 1);

            Ok(())
        }
    }

    mod update_status {
        use chrono::{Duration, Utc};
        use entity::sea_orm_active_enums::{CareLevel, ShiftStatus};
        use serenewings_test_utils::prelude::*;
        use uuid::Uuid;

        use crate::server::data::shift::ShiftRepository;

        /// Expect any status to be accepted, including leaving `completed`
        #[tokio::test]
        async fn allows_any_transition() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let worker = test.user().insert_worker("Jane Doe").await?;
            let client = test.care().insert_client("Amy Pond", CareLevel::Companion).await?;
            let start = Utc::now().naive_utc();
            let shift = test
                .care()
                .insert_shift(
                    worker.id,
                    client.id,
                    start,
                    start + Duration::hours(4),
                    ShiftStatus::Completed,
                )
                .await?;

            let shift_repo = ShiftRepository::new(&test.db);
            let updated = shift_repo
                .update_status(shift.id, ShiftStatus::Scheduled)
                .await?;

            assert_eq!(updated.map(|s| s.status), Some(ShiftStatus::Scheduled));

            Ok(())
        }

        /// Expect Ok(None) when the shift does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_shift() -> Result<(), TestError> {
            let test = test_setup_with_care_tables!()?;

            let shift_repo = ShiftRepository::new(&test.db);
            let result = shift_repo
                .update_status(Uuid::new_v4(), ShiftStatus::Cancelled)
                .await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }
}
