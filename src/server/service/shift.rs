//! Shift scheduling for admins.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::ShiftStatus as DbShiftStatus;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::schedule::{
        ShiftBoardDto, ShiftDto, ShiftFormDto, ShiftStatus, ShiftSummaryDto,
    },
    server::{
        data::shift::ShiftRepository,
        error::{record::RecordError, schedule::ScheduleError, Error},
        model::{db::ShiftModel, dto::shift_dto},
        service::lookup,
        util::{search::SearchTerm, time},
    },
};

/// Count today's, upcoming and completed-today shifts relative to `now`.
pub fn summarize(shifts: &[ShiftModel], now: NaiveDateTime) -> ShiftSummaryDto {
    let (day_start, day_end) = time::day_bounds(now.date());
    let is_today = |shift: &&ShiftModel| shift.start_time >= day_start && shift.start_time < day_end;

    ShiftSummaryDto {
        today: shifts.iter().filter(is_today).count() as u64,
        upcoming: shifts
            .iter()
            .filter(|s| s.start_time > now && s.status == DbShiftStatus::Scheduled)
            .count() as u64,
        completed_today: shifts
            .iter()
            .filter(is_today)
            .filter(|s| s.status == DbShiftStatus::Completed)
            .count() as u64,
    }
}

pub struct ShiftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShiftService<'a> {
    /// Creates a new instance of [`ShiftService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All shifts with worker and client names, plus the daily summary.
    ///
    /// The summary always covers every shift; `search` only narrows the listed rows.
    pub async fn board(&self, search: Option<&str>) -> Result<ShiftBoardDto, Error> {
        let shifts = ShiftRepository::new(self.db).list().await?;
        let summary = summarize(&shifts, time::now());

        let term = SearchTerm::new(search);
        let dtos = self
            .with_names(shifts)
            .await?
            .into_iter()
            .filter(|s| term.matches([s.worker_name.as_deref(), s.client_name.as_deref()]))
            .collect();

        Ok(ShiftBoardDto {
            shifts: dtos,
            summary,
        })
    }

    /// Schedule a shift unless the worker already has one starting inside the new window.
    ///
    /// # Returns
    /// - `Ok(ShiftDto)` - Shift inserted with status scheduled
    /// - `Err(ScheduleError::ShiftConflict)` - A non-cancelled shift of the same worker starts
    ///   within `[start_time, end_time]`; nothing is inserted
    pub async fn create(&self, form: &ShiftFormDto) -> Result<ShiftDto, Error> {
        let shift_repo = ShiftRepository::new(self.db);

        let conflicts = shift_repo
            .find_conflicts(form.worker_id, form.start_time, form.end_time)
            .await?;

        if !conflicts.is_empty() {
            return Err(ScheduleError::ShiftConflict.into());
        }

        let shift = shift_repo.create(form).await?;

        self.single(shift).await
    }

    /// Set any status on a shift.
    pub async fn update_status(&self, shift_id: Uuid, status: ShiftStatus) -> Result<ShiftDto, Error> {
        let Some(shift) = ShiftRepository::new(self.db)
            .update_status(shift_id, status.into())
            .await?
        else {
            return Err(RecordError::NotFound {
                table: "Shift",
                id: shift_id,
            }
            .into());
        };

        self.single(shift).await
    }

    async fn single(&self, shift: ShiftModel) -> Result<ShiftDto, Error> {
        self.with_names(vec![shift])
            .await?
            .pop()
            .ok_or_else(|| Error::InternalError("Shift lost while resolving names".to_string()))
    }

    /// Resolve worker and client names for `shifts`, keeping their order.
    pub async fn with_names(&self, shifts: Vec<ShiftModel>) -> Result<Vec<ShiftDto>, Error> {
        let (workers, clients) = futures::try_join!(
            lookup::user_names(self.db, shifts.iter().map(|s| s.worker_id)),
            lookup::client_names(self.db, shifts.iter().map(|s| s.client_id)),
        )?;

        Ok(shifts
            .into_iter()
            .map(|shift| {
                let worker_name = workers.get(&shift.worker_id).cloned();
                let client_name = clients.get(&shift.client_id).cloned();
                shift_dto(shift, worker_name, client_name)
            })
            .collect())
    }
}
