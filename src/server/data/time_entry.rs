use chrono::Utc;
use entity::sea_orm_active_enums::TimeEntryStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct TimeEntryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimeEntryRepository<'a, C> {
    /// Creates a new instance of [`TimeEntryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert an open time entry clocked in now
    pub async fn create(
        &self,
        worker_id: Uuid,
        shift_id: Option<Uuid>,
    ) -> Result<entity::time_entry::Model, DbErr> {
        let entry = entity::time_entry::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            worker_id: ActiveValue::Set(worker_id),
            shift_id: ActiveValue::Set(shift_id),
            clock_in: ActiveValue::Set(Utc::now().naive_utc()),
            clock_out: ActiveValue::Set(None),
            status: ActiveValue::Set(TimeEntryStatus::ClockedIn),
        };

        entry.insert(self.db).await
    }

    /// Newest entry of `worker_id` that is still clocked in
    pub async fn find_open(
        &self,
        worker_id: Uuid,
    ) -> Result<Option<entity::time_entry::Model>, DbErr> {
        entity::prelude::TimeEntry::find()
            .filter(entity::time_entry::Column::WorkerId.eq(worker_id))
            .filter(entity::time_entry::Column::Status.eq(TimeEntryStatus::ClockedIn))
            .order_by_desc(entity::time_entry::Column::ClockIn)
            .one(self.db)
            .await
    }

    /// Close `entry` with a clock out time of now
    pub async fn clock_out(
        &self,
        entry: entity::time_entry::Model,
    ) -> Result<entity::time_entry::Model, DbErr> {
        let mut entry_am = entry.into_active_model();
        entry_am.clock_out = ActiveValue::Set(Some(Utc::now().naive_utc()));
        entry_am.status = ActiveValue::Set(TimeEntryStatus::ClockedOut);

        entry_am.update(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use entity::sea_orm_active_enums::TimeEntryStatus;
        use serenewings_test_utils::prelude::*;

        use crate::server::data::time_entry::TimeEntryRepository;

        /// Expect two clock ins to produce two open entries
        #[tokio::test]
        async fn allows_repeated_clock_in() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let worker = test.user().insert_worker("Jane Doe").await?;

            let entry_repo = TimeEntryRepository::new(&test.db);
            let first = entry_repo.create(worker.id, None).await?;
            let second = entry_repo.create(worker.id, None).await?;

            assert_ne!(first.id, second.id);
            assert_eq!(first.status, TimeEntryStatus::ClockedIn);
            assert!(second.clock_out.is_none());

            Ok(())
        }
    }

    mod find_open {
        use chrono::{Duration, Utc};
        use entity::sea_orm_active_enums::TimeEntryStatus;
        use serenewings_test_utils::prelude::*;

        use crate::server::data::time_entry::TimeEntryRepository;

        /// Expect the newest clocked in entry, skipping closed ones
        #[tokio::test]
        async fn finds_newest_open_entry() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let worker = test.user().insert_worker("Jane Doe").await?;
            let now = Utc::now().naive_utc();
            test.care()
                .insert_time_entry(worker.id, now - Duration::hours(8), TimeEntryStatus::ClockedIn)
                .await?;
            let newest = test
                .care()
                .insert_time_entry(worker.id, now - Duration::hours(1), TimeEntryStatus::ClockedIn)
                .await?;
            test.care()
                .insert_time_entry(worker.id, now, TimeEntryStatus::ClockedOut)
                .await?;

            let entry_repo = TimeEntryRepository::new(&test.db);
            let open = entry_repo.find_open(worker.id).await?;

            assert_eq!(open.map(|e| e.id), Some(newest.id));

            Ok(())
        }

        /// Expect Ok(None) when the worker is not clocked in
        #[tokio::test]
        async fn returns_none_when_not_clocked_in() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let worker = test.user().insert_worker("Jane Doe").await?;

            let entry_repo = TimeEntryRepository::new(&test.db);
            let open = entry_repo.find_open(worker.id).await;

            assert!(matches!(open, Ok(None)));

            Ok(())
        }
    }

    mod clock_out {
        use serenewings_test_utils::prelude::*;

        use entity::sea_orm_active_enums::TimeEntryStatus;

        use crate::server::data::time_entry::TimeEntryRepository;

        /// Expect the entry to be closed with a clock out time
        #[tokio::test]
        async fn closes_entry() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let worker = test.user().insert_worker("Jane Doe").await?;

            let entry_repo = TimeEntryRepository::new(&test.db);
            let entry = entry_repo.create(worker.id, None).await?;
            let closed = entry_repo.clock_out(entry).await?;

            assert_eq!(closed.status, TimeEntryStatus::ClockedOut);
            assert!(closed.clock_out.is_some());

            Ok(())
        }
    }
}
