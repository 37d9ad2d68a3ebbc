//! Audit trail for sign-ins and admin changes.
//!
//! Audit writes are best-effort: a failed insert is logged and never fails the request that
//! triggered it.

use axum::http::HeaderMap;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::dashboard::ActivityDto,
    server::{
        data::audit_log::{AuditLogRepository, NewAuditLog},
        error::Error,
        service::lookup,
    },
};

/// Origin of a request as recorded in the audit log.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestMeta {
    /// First address of `x-forwarded-for`
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl RequestMeta {
    /// Read the client address and user agent from request headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        Self {
            ip_address: header("x-forwarded-for")
                .and_then(|value| value.split(',').next().map(|ip| ip.trim().to_string()))
                .filter(|ip| !ip.is_empty()),
            user_agent: header("user-agent"),
        }
    }
}

/// A single auditable action.
pub struct AuditEvent<'a> {
    pub user_id: Option<Uuid>,
    pub action: &'a str,
    pub table_name: Option<&'a str>,
    pub record_id: Option<Uuid>,
}

impl<'a> AuditEvent<'a> {
    /// Action performed by `user_id` that is not tied to a record.
    pub fn new(user_id: Uuid, action: &'a str) -> Self {
        Self {
            user_id: Some(user_id),
            action,
            table_name: None,
            record_id: None,
        }
    }

    /// Attach the table and ID of the affected record.
    pub fn on(mut self, table_name: &'a str, record_id: Uuid) -> Self {
        self.table_name = Some(table_name);
        self.record_id = Some(record_id);
        self
    }
}

pub struct AuditService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditService<'a> {
    /// Creates a new instance of [`AuditService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Write an audit row, logging instead of failing when the insert does not succeed.
    pub async fn record(&self, event: AuditEvent<'_>, meta: &RequestMeta) {
        let log = NewAuditLog {
            user_id: event.user_id,
            action: event.action.to_string(),
            table_name: event.table_name.map(str::to_string),
            record_id: event.record_id,
            ip_address: meta.ip_address.clone(),
            user_agent: meta.user_agent.clone(),
        };

        if let Err(err) = AuditLogRepository::new(self.db).create(log).await {
            tracing::warn!(action = event.action, "Failed to write audit log: {}", err);
        }
    }

    /// Latest `limit` audit entries with the acting user's name resolved.
    pub async fn recent_activity(&self, limit: u64) -> Result<Vec<ActivityDto>, Error> {
        let logs = AuditLogRepository::new(self.db).latest(limit).await?;
        let names = lookup::user_names(self.db, logs.iter().filter_map(|l| l.user_id)).await?;

        Ok(logs
            .into_iter()
            .map(|log| ActivityDto {
                id: log.id,
                user_name: log.user_id.and_then(|id| names.get(&id).cloned()),
                action: log.action,
                table_name: log.table_name,
                created_at: log.created_at,
            })
            .collect())
    }
}
