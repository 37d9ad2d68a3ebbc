use chrono::Utc;
use entity::sea_orm_active_enums::TimesheetStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::model::schedule::TimesheetFormDto;

pub struct TimesheetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimesheetRepository<'a, C> {
    /// Creates a new instance of [`TimesheetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a timesheet submitted by `worker_id`
    pub async fn create(
        &self,
        worker_id: Uuid,
        form: &TimesheetFormDto,
    ) -> Result<entity::timesheet::Model, DbErr> {
        let timesheet = entity::timesheet::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            worker_id: ActiveValue::Set(worker_id),
            week_start: ActiveValue::Set(form.week_start),
            week_end: ActiveValue::Set(form.week_end),
            total_hours: ActiveValue::Set(form.total_hours),
            status: ActiveValue::Set(TimesheetStatus::Submitted),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        timesheet.insert(self.db).await
    }

    /// Timesheets newest first, optionally restricted to one status
    pub async fn list(
        &self,
        status: Option<TimesheetStatus>,
    ) -> Result<Vec<entity::timesheet::Model>, DbErr> {
        let mut query = entity::prelude::Timesheet::find();

        if let Some(status) = status {
            query = query.filter(entity::timesheet::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::timesheet::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Most recent weeks of `worker_id`, newest week first
    pub async fn latest_for_worker(
        &self,
        worker_id: Uuid,
        limit: u64,
    ) -> Result<Vec<entity::timesheet::Model>, DbErr> {
        entity::prelude::Timesheet::find()
            .filter(entity::timesheet::Column::WorkerId.eq(worker_id))
            .order_by_desc(entity::timesheet::Column::WeekStart)
            .limit(limit)
            .all(self.db)
            .await
    }

    pub async fn update_status(
        &self,
        timesheet_id: Uuid,
        status: TimesheetStatus,
    ) -> Result<Option<entity::timesheet::Model>, DbErr> {
        let Some(timesheet) = entity::prelude::Timesheet::find_by_id(timesheet_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut timesheet_am = timesheet.into_active_model();
        timesheet_am.status = ActiveValue::Set(status);

        Ok(Some(timesheet_am.update(self.db).await?))
    }
}

#[cfg(test)]
mod tests {
    mod list {
        use chrono::NaiveDate;
        use entity::sea_orm_active_enums::TimesheetStatus;
        use serenewings_test_utils::prelude::*;

        use crate::server::data::timesheet::TimesheetRepository;

        /// Expect the status filter to apply only when given
        #[tokio::test]
        async fn filters_by_status() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let worker = test.user().insert_worker("Jane Doe").await?;
            let week = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
            test.care()
                .insert_timesheet(worker.id, week, 40.0, TimesheetStatus::Submitted)
                .await?;
            test.care()
                .insert_timesheet(worker.id, week, 32.0, TimesheetStatus::Approved)
                .await?;

            let timesheet_repo = TimesheetRepository::new(&test.db);
            let all = timesheet_repo.list(None).await?;
            let submitted = timesheet_repo
                .list(Some(TimesheetStatus::Submitted))
                .await?;

            assert_eq!(all.len(), 2);
            assert_eq!(submitted.len(), 1);
            assert_eq!(submitted[0].total_hours, 40.0);

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let timesheet_repo = TimesheetRepository::new(&test.db);
            let result = timesheet_repo.list(None).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod latest_for_worker {
        use chrono::{Duration, NaiveDate};
        use entity::sea_orm_active_enums::TimesheetStatus;
        use serenewings_test_utils::prelude::*;

        use crate::server::data::timesheet::TimesheetRepository;

        /// Expect at most `limit` rows ordered by newest week
        #[tokio::test]
        async fn returns_newest_weeks() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let worker = test.user().insert_worker("Jane Doe").await?;
            let first_week = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
            for week in 0..6 {
                test.care()
                    .insert_timesheet(
                        worker.id,
                        first_week + Duration::weeks(week),
                        30.0 + week as f64,
                        TimesheetStatus::Approved,
                    )
                    .await?;
            }

            let timesheet_repo = TimesheetRepository::new(&test.db);
            let latest = timesheet_repo.latest_for_worker(worker.id, 5).await?;

            assert_eq!(latest.len(), 5);
            assert_eq!(latest[0].total_hours, 35.0);

            Ok(())
        }
    }
}
