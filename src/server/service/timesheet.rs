//! Weekly timesheets: workers submit, admins review.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::schedule::{TimesheetDto, TimesheetFormDto, TimesheetStatus},
    server::{
        data::timesheet::TimesheetRepository,
        error::{form::FormError, record::RecordError, Error},
        model::{db::TimesheetModel, dto::timesheet_dto},
        service::lookup,
    },
};

pub struct TimesheetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimesheetService<'a> {
    /// Creates a new instance of [`TimesheetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Timesheets newest first with worker names, optionally filtered by status.
    pub async fn list(&self, status: Option<TimesheetStatus>) -> Result<Vec<TimesheetDto>, Error> {
        let timesheets = TimesheetRepository::new(self.db)
            .list(status.map(Into::into))
            .await?;

        self.with_names(timesheets).await
    }

    /// Submit a week of hours for `worker_id`.
    pub async fn submit(&self, worker_id: Uuid, form: &TimesheetFormDto) -> Result<TimesheetDto, Error> {
        if form.week_end < form.week_start {
            return Err(FormError::InvalidField(
                "Week end must not be before week start.".to_string(),
            )
            .into());
        }

        if form.total_hours < 0.0 {
            return Err(
                FormError::InvalidField("Total hours cannot be negative.".to_string()).into(),
            );
        }

        let timesheet = TimesheetRepository::new(self.db)
            .create(worker_id, form)
            .await?;

        self.with_names(vec![timesheet])
            .await?
            .pop()
            .ok_or_else(|| Error::InternalError("Timesheet lost while resolving names".to_string()))
    }

    /// Set any status, e.g. approve or reject a submitted timesheet.
    pub async fn update_status(
        &self,
        timesheet_id: Uuid,
        status: TimesheetStatus,
    ) -> Result<TimesheetDto, Error> {
        let Some(timesheet) = TimesheetRepository::new(self.db)
            .update_status(timesheet_id, status.into())
            .await?
        else {
            return Err(RecordError::NotFound {
                table: "Timesheet",
                id: timesheet_id,
            }
            .into());
        };

        self.with_names(vec![timesheet])
            .await?
            .pop()
            .ok_or_else(|| Error::InternalError("Timesheet lost while resolving names".to_string()))
    }

    async fn with_names(&self, timesheets: Vec<TimesheetModel>) -> Result<Vec<TimesheetDto>, Error> {
        let names = lookup::user_names(self.db, timesheets.iter().map(|t| t.worker_id)).await?;

        Ok(timesheets
            .into_iter()
            .map(|t| {
                let worker_name = names.get(&t.worker_id).cloned();
                timesheet_dto(t, worker_name)
            })
            .collect())
    }
}
