//! Worker management for admins.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::user::{UserDto, WorkerFormDto},
    server::{
        data::user::UserRepository,
        error::{form::FormError, record::RecordError, Error},
        util::{form::all_present, search::SearchTerm},
    },
};

pub static MISSING_WORKER_FIELDS: &str = "Full name and email are required.";

pub struct WorkerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkerService<'a> {
    /// Creates a new instance of [`WorkerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Workers newest first, filtered by name or email when `search` is given.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<UserDto>, Error> {
        let term = SearchTerm::new(search);
        let workers = UserRepository::new(self.db)
            .list_by_role(UserRole::Worker)
            .await?;

        Ok(workers
            .into_iter()
            .filter(|w| term.matches([Some(w.full_name.as_str()), Some(w.email.as_str())]))
            .map(UserDto::from)
            .collect())
    }

    pub async fn create(&self, form: &WorkerFormDto) -> Result<UserDto, Error> {
        validate(form)?;

        let worker = UserRepository::new(self.db).create_worker(form).await?;

        Ok(worker.into())
    }

    pub async fn update(&self, worker_id: Uuid, form: &WorkerFormDto) -> Result<UserDto, Error> {
        validate(form)?;

        UserRepository::new(self.db)
            .update_worker(worker_id, form)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| not_found(worker_id))
    }

    /// Set a worker's active flag and return the refreshed worker list.
    ///
    /// Issues exactly one update; the list is then fetched again so the caller sees the
    /// stored state.
    pub async fn set_active(&self, worker_id: Uuid, is_active: bool) -> Result<Vec<UserDto>, Error> {
        let updated = UserRepository::new(self.db)
            .set_active(worker_id, is_active)
            .await?;

        if updated == 0 {
            return Err(not_found(worker_id));
        }

        self.list(None).await
    }
}

fn validate(form: &WorkerFormDto) -> Result<(), FormError> {
    if !all_present(&[&form.full_name, &form.email]) {
        return Err(FormError::MissingFields(MISSING_WORKER_FIELDS));
    }

    if form.hourly_rate.is_some_and(|rate| rate < 0.0) {
        return Err(FormError::InvalidField(
            "Hourly rate cannot be negative.".to_string(),
        ));
    }

    Ok(())
}

fn not_found(worker_id: Uuid) -> Error {
    RecordError::NotFound {
        table: "Worker",
        id: worker_id,
    }
    .into()
}
