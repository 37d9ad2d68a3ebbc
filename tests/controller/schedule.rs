use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{Duration, NaiveDate, Utc};
use entity::sea_orm_active_enums::{
    CareLevel, ShiftStatus as ShiftStatusModel, TimesheetStatus as TimesheetStatusModel,
};
use sea_orm::EntityTrait;
use serenewings::{
    model::schedule::{
        ClockInDto, ShiftFormDto, TimeEntryDto, TimeEntryStatus, TimesheetDto, TimesheetFormDto,
        TimesheetStatus, TimesheetStatusDto, WorkerPortalDto,
    },
    server::controller::{
        approval::update_timesheet_status,
        portal::{clock_in, clock_out, get_portal, submit_timesheet},
        shift::create_shift,
    },
};

use super::*;

fn shift_form(worker_id: Uuid, client_id: Uuid, start_hour: u32, end_hour: u32) -> ShiftFormDto {
    let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

    ShiftFormDto {
        worker_id,
        client_id,
        start_time: day.and_hms_opt(start_hour, 0, 0).unwrap(),
        end_time: day.and_hms_opt(end_hour, 0, 0).unwrap(),
        notes: None,
    }
}

/// Expect 201 and a create_shift audit row pointing at the new shift
#[tokio::test]
async fn schedules_shift() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test.user().insert_admin("Grace Hopper").await?;
    let worker = test.user().insert_worker("Jane Doe").await?;
    let client = test.care().insert_client("Ada Lovelace", CareLevel::Companion).await?;
    sign_in_as(&test, admin.id).await;

    let result = create_shift(
        State(test.app_state()),
        test.session.clone(),
        HeaderMap::new(),
        Json(shift_form(worker.id, client.id, 9, 13)),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let shifts = entity::prelude::Shift::find().all(&test.db).await?;
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0].status, ShiftStatusModel::Scheduled);
    let audit = entity::prelude::AuditLog::find().all(&test.db).await?;
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].action, "create_shift");
    assert_eq!(audit[0].record_id, Some(shifts[0].id));

    Ok(())
}

/// Expect 409 and no insert when the worker has a shift starting inside the window
#[tokio::test]
async fn rejects_overlapping_shift() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test.user().insert_admin("Grace Hopper").await?;
    let worker = test.user().insert_worker("Jane Doe").await?;
    let client = test.care().insert_client("Ada Lovelace", CareLevel::Companion).await?;
    let existing = shift_form(worker.id, client.id, 10, 14);
    test.care()
        .insert_shift(
            worker.id,
            client.id,
            existing.start_time,
            existing.end_time,
            ShiftStatusModel::Scheduled,
        )
        .await?;
    sign_in_as(&test, admin.id).await;

    let result = create_shift(
        State(test.app_state()),
        test.session.clone(),
        HeaderMap::new(),
        Json(shift_form(worker.id, client.id, 9, 12)),
    )
    .await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let shifts = entity::prelude::Shift::find().all(&test.db).await?;
    assert_eq!(shifts.len(), 1);

    Ok(())
}

/// Expect a cancelled shift to leave the slot free
#[tokio::test]
async fn ignores_cancelled_shift() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test.user().insert_admin("Grace Hopper").await?;
    let worker = test.user().insert_worker("Jane Doe").await?;
    let client = test.care().insert_client("Ada Lovelace", CareLevel::Companion).await?;
    let existing = shift_form(worker.id, client.id, 10, 14);
    test.care()
        .insert_shift(
            worker.id,
            client.id,
            existing.start_time,
            existing.end_time,
            ShiftStatusModel::Cancelled,
        )
        .await?;
    sign_in_as(&test, admin.id).await;

    let result = create_shift(
        State(test.app_state()),
        test.session.clone(),
        HeaderMap::new(),
        Json(shift_form(worker.id, client.id, 9, 12)),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::CREATED);

    Ok(())
}

/// Expect clock in to open an entry and clock out to close it
#[tokio::test]
async fn clocks_in_and_out() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let worker = test.user().insert_worker("Jane Doe").await?;
    sign_in_as(&test, worker.id).await;
    let state = test.app_state();

    let result = clock_in(
        State(state.clone()),
        test.session.clone(),
        Json(ClockInDto { shift_id: None }),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);
    let entry: TimeEntryDto = read_json(response).await;
    assert_eq!(entry.status, TimeEntryStatus::ClockedIn);
    assert!(entry.clock_out.is_none());

    let result = clock_out(State(state), test.session.clone()).await;

    assert!(result.is_ok());
    let entry: TimeEntryDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(entry.status, TimeEntryStatus::ClockedOut);
    assert!(entry.clock_out.is_some());

    Ok(())
}

/// Expect 400 when clocking out without an open entry
#[tokio::test]
async fn clock_out_requires_open_entry() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let worker = test.user().insert_worker("Jane Doe").await?;
    sign_in_as(&test, worker.id).await;

    let result = clock_out(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 403 for an admin opening the worker portal
#[tokio::test]
async fn portal_is_worker_only() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test.user().insert_admin("Grace Hopper").await?;
    sign_in_as(&test, admin.id).await;

    let result = get_portal(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect the worker's own shifts and timesheets
#[tokio::test]
async fn portal_shows_own_records() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let worker = test.user().insert_worker("Jane Doe").await?;
    let other = test.user().insert_worker("Mary Smith").await?;
    let client = test.care().insert_client("Ada Lovelace", CareLevel::Companion).await?;
    let start = Utc::now().naive_utc() + Duration::days(2);
    test.care()
        .insert_shift(worker.id, client.id, start, start + Duration::hours(4), ShiftStatusModel::Scheduled)
        .await?;
    test.care()
        .insert_shift(other.id, client.id, start, start + Duration::hours(4), ShiftStatusModel::Scheduled)
        .await?;
    sign_in_as(&test, worker.id).await;

    let result = get_portal(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let portal: WorkerPortalDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(portal.profile.id, worker.id);
    assert_eq!(portal.shifts.len(), 1);
    assert!(portal.open_entry.is_none());

    Ok(())
}

/// Expect a submitted timesheet that an admin can then approve
#[tokio::test]
async fn submits_and_approves_timesheet() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let admin = test.user().insert_admin("Grace Hopper").await?;
    let worker = test.user().insert_worker("Jane Doe").await?;
    sign_in_as(&test, worker.id).await;
    let state = test.app_state();

    let week_start = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let result = submit_timesheet(
        State(state.clone()),
        test.session.clone(),
        Json(TimesheetFormDto {
            week_start,
            week_end: week_start + Duration::days(6),
            total_hours: 32.5,
        }),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);
    let timesheet: TimesheetDto = read_json(response).await;
    assert_eq!(timesheet.status, TimesheetStatus::Submitted);

    sign_in_as(&test, admin.id).await;
    let result = update_timesheet_status(
        State(state),
        test.session.clone(),
        Path(timesheet.id),
        Json(TimesheetStatusDto {
            status: TimesheetStatus::Approved,
        }),
    )
    .await;

    assert!(result.is_ok());
    let stored = entity::prelude::Timesheet::find_by_id(timesheet.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, TimesheetStatusModel::Approved);

    Ok(())
}

/// Expect 400 for a week that ends before it starts
#[tokio::test]
async fn rejects_inverted_week() -> Result<(), TestError> {
    let mut test = test_setup_with_care_tables!()?;
    let worker = test.user().insert_worker("Jane Doe").await?;
    sign_in_as(&test, worker.id).await;

    let week_start = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let result = submit_timesheet(
        State(test.app_state()),
        test.session.clone(),
        Json(TimesheetFormDto {
            week_start,
            week_end: week_start - Duration::days(1),
            total_hours: 8.0,
        }),
    )
    .await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
