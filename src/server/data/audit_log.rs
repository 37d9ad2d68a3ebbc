use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
};
use uuid::Uuid;

/// Audit row values; everything but `action` is optional
#[derive(Clone, Debug, Default)]
pub struct NewAuditLog {
    pub user_id: Option<Uuid>,
    pub action: String,
    pub table_name: Option<String>,
    pub record_id: Option<Uuid>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

pub struct AuditLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuditLogRepository<'a, C> {
    /// Creates a new instance of [`AuditLogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, log: NewAuditLog) -> Result<entity::audit_log::Model, DbErr> {
        let audit_log = entity::audit_log::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(log.user_id),
            action: ActiveValue::Set(log.action),
            table_name: ActiveValue::Set(log.table_name),
            record_id: ActiveValue::Set(log.record_id),
            ip_address: ActiveValue::Set(log.ip_address),
            user_agent: ActiveValue::Set(log.user_agent),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        audit_log.insert(self.db).await
    }

    /// Newest `limit` entries
    pub async fn latest(&self, limit: u64) -> Result<Vec<entity::audit_log::Model>, DbErr> {
        entity::prelude::AuditLog::find()
            .order_by_desc(entity::audit_log::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await
    }
}
