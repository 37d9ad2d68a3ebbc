//! Worker portal: own schedule, timesheets and the time clock.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::ShiftStatus as DbShiftStatus;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{
        schedule::{PortalShiftDto, ShiftPhase, TimeEntryDto, WorkerPortalDto},
        user::UserDto,
    },
    server::{
        data::{
            shift::ShiftRepository, time_entry::TimeEntryRepository,
            timesheet::TimesheetRepository,
        },
        error::{schedule::ScheduleError, Error},
        model::{
            db::{ShiftModel, UserModel},
            dto::timesheet_dto,
        },
        service::shift::ShiftService,
        util::time,
    },
};

/// Number of recent timesheets shown in the portal
pub const PORTAL_TIMESHEET_LIMIT: u64 = 5;

/// Number of upcoming shifts shown in the portal
pub const PORTAL_UPCOMING_LIMIT: usize = 5;

/// How a shift is shown to the worker at `now`.
///
/// Completed and cancelled statuses win; otherwise the phase follows the clock, with both
/// ends of the shift counting as in progress.
pub fn shift_phase(shift: &ShiftModel, now: NaiveDateTime) -> ShiftPhase {
    match shift.status {
        DbShiftStatus::Completed => ShiftPhase::Completed,
        DbShiftStatus::Cancelled => ShiftPhase::Cancelled,
        _ if now >= shift.start_time && now <= shift.end_time => ShiftPhase::InProgress,
        _ if now < shift.start_time => ShiftPhase::Upcoming,
        _ => ShiftPhase::Past,
    }
}

pub struct PortalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PortalService<'a> {
    /// Creates a new instance of [`PortalService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Open a time entry for `worker_id`.
    ///
    /// Clocking in while already clocked in opens a second entry.
    pub async fn clock_in(&self, worker_id: Uuid, shift_id: Option<Uuid>) -> Result<TimeEntryDto, Error> {
        let entry = TimeEntryRepository::new(self.db)
            .create(worker_id, shift_id)
            .await?;

        Ok(entry.into())
    }

    /// Close the newest open time entry of `worker_id`.
    ///
    /// # Returns
    /// - `Ok(TimeEntryDto)` - Entry closed with the current time
    /// - `Err(ScheduleError::NotClockedIn)` - Worker has no open entry
    pub async fn clock_out(&self, worker_id: Uuid) -> Result<TimeEntryDto, Error> {
        let entry_repo = TimeEntryRepository::new(self.db);

        let Some(entry) = entry_repo.find_open(worker_id).await? else {
            return Err(ScheduleError::NotClockedIn.into());
        };

        Ok(entry_repo.clock_out(entry).await?.into())
    }

    /// Everything the worker portal shows for `worker`.
    pub async fn portal(&self, worker: UserModel) -> Result<WorkerPortalDto, Error> {
        let now = time::now();
        let (today_start, today_end) = time::day_bounds(now.date());

        let shift_repo = ShiftRepository::new(self.db);
        let timesheet_repo = TimesheetRepository::new(self.db);
        let entry_repo = TimeEntryRepository::new(self.db);

        let (shifts, timesheets, open_entry) = futures::try_join!(
            shift_repo.list_for_worker_from(worker.id, today_start),
            timesheet_repo.latest_for_worker(worker.id, PORTAL_TIMESHEET_LIMIT),
            entry_repo.find_open(worker.id),
        )?;

        let phases: Vec<ShiftPhase> = shifts.iter().map(|s| shift_phase(s, now)).collect();
        let shifts: Vec<PortalShiftDto> = ShiftService::new(self.db)
            .with_names(shifts)
            .await?
            .into_iter()
            .zip(phases)
            .map(|(shift, phase)| PortalShiftDto { shift, phase })
            .collect();

        let today_shifts = shifts
            .iter()
            .filter(|s| s.shift.start_time >= today_start && s.shift.start_time < today_end)
            .cloned()
            .collect();
        let upcoming_shifts = shifts
            .iter()
            .filter(|s| s.shift.start_time > now)
            .take(PORTAL_UPCOMING_LIMIT)
            .cloned()
            .collect();

        let weekly_hours = timesheets.first().map(|t| t.total_hours).unwrap_or(0.0);
        let timesheets = timesheets
            .into_iter()
            .map(|t| timesheet_dto(t, Some(worker.full_name.clone())))
            .collect();

        Ok(WorkerPortalDto {
            profile: UserDto::from(worker),
            shifts,
            today_shifts,
            upcoming_shifts,
            timesheets,
            open_entry: open_entry.map(TimeEntryDto::from),
            weekly_hours,
        })
    }
}

#[cfg(test)]
mod tests {
    mod shift_phase {
        use chrono::{Duration, NaiveDate};
        use entity::sea_orm_active_enums::ShiftStatus;
        use serenewings_test_utils::prelude::*;

        use crate::{model::schedule::ShiftPhase, server::service::portal::shift_phase};

        #[test]
        fn follows_status_then_clock() {
            let now = NaiveDate::from_ymd_opt(2025, 1, 6)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap();
            let hour = Duration::hours(1);

            let cases = [
                (now - hour, now + hour, ShiftStatus::Completed, ShiftPhase::Completed),
                (now + hour, now + hour * 2, ShiftStatus::Cancelled, ShiftPhase::Cancelled),
                (now - hour, now + hour, ShiftStatus::Scheduled, ShiftPhase::InProgress),
                (now, now + hour, ShiftStatus::Scheduled, ShiftPhase::InProgress),
                (now + hour, now + hour * 2, ShiftStatus::Scheduled, ShiftPhase::Upcoming),
                (now - hour * 3, now - hour, ShiftStatus::InProgress, ShiftPhase::Past),
            ];

            for (start, end, status, expected) in cases {
                let shift = factory::mock_shift_model(start, end, status);

                assert_eq!(shift_phase(&shift, now), expected);
            }
        }
    }

    mod clock {
        use serenewings_test_utils::prelude::*;

        use crate::{
            model::schedule::TimeEntryStatus,
            server::{
                error::{schedule::ScheduleError, Error},
                service::portal::PortalService,
            },
        };

        /// Expect clock out to close the entry opened by clock in
        #[tokio::test]
        async fn clocks_in_and_out() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let worker = test.user().insert_worker("Jane Doe").await?;

            let portal_service = PortalService::new(&test.db);
            let opened = portal_service.clock_in(worker.id, None).await.unwrap();
            let closed = portal_service.clock_out(worker.id).await.unwrap();

            assert_eq!(opened.id, closed.id);
            assert_eq!(closed.status, TimeEntryStatus::ClockedOut);
            assert!(closed.clock_out.is_some());

            Ok(())
        }

        /// Expect NotClockedIn without an open entry
        #[tokio::test]
        async fn clock_out_requires_open_entry() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let worker = test.user().insert_worker("Jane Doe").await?;

            let result = PortalService::new(&test.db).clock_out(worker.id).await;

            assert!(matches!(
                result,
                Err(Error::ScheduleError(ScheduleError::NotClockedIn))
            ));

            Ok(())
        }
    }

    mod portal {
        use chrono::{Duration, NaiveDate, Utc};
        use entity::sea_orm_active_enums::{CareLevel, ShiftStatus, TimesheetStatus};
        use serenewings_test_utils::prelude::*;

        use crate::server::service::portal::PortalService;

        /// Expect future shifts with client names and the newest timesheet's hours
        #[tokio::test]
        async fn assembles_portal() -> Result<(), TestError> {
            let mut test = test_setup_with_care_tables!()?;
            let worker = test.user().insert_worker("Jane Doe").await?;
            let other = test.user().insert_worker("John Roe").await?;
            let client = test.care().insert_client("Amy Pond", CareLevel::Companion).await?;
            let tomorrow = Utc::now().naive_utc() + Duration::days(1);
            test.care()
                .insert_shift(
                    worker.id,
                    client.id,
                    tomorrow,
                    tomorrow + Duration::hours(4),
                    ShiftStatus::Scheduled,
                )
                .await?;
            test.care()
                .insert_shift(
                    worker.id,
                    client.id,
                    tomorrow - Duration::days(5),
                    tomorrow - Duration::days(5) + Duration::hours(4),
                    ShiftStatus::Completed,
                )
                .await?;
            test.care()
                .insert_shift(
                    other.id,
                    client.id,
                    tomorrow,
                    tomorrow + Duration::hours(4),
                    ShiftStatus::Scheduled,
                )
                .await?;
            test.care()
                .insert_timesheet(
                    worker.id,
                    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
                    32.0,
                    TimesheetStatus::Approved,
                )
                .await?;
            test.care()
                .insert_timesheet(
                    worker.id,
                    NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
                    38.0,
                    TimesheetStatus::Submitted,
                )
                .await?;

            let portal = PortalService::new(&test.db).portal(worker).await.unwrap();

            assert_eq!(portal.shifts.len(), 1);
            assert_eq!(portal.upcoming_shifts.len(), 1);
            assert_eq!(
                portal.shifts[0].shift.client_name.as_deref(),
                Some("Amy Pond")
            );
            assert_eq!(portal.timesheets.len(), 2);
            assert_eq!(portal.weekly_hours, 38.0);
            assert!(portal.open_entry.is_none());

            Ok(())
        }
    }
}
