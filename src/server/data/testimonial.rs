use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

/// Upper bound on testimonials shown on the public page
pub const APPROVED_TESTIMONIAL_LIMIT: u64 = 50;

pub struct TestimonialRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TestimonialRepository<'a, C> {
    /// Creates a new instance of [`TestimonialRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        email: &str,
        rating: i32,
        text: &str,
        location: &str,
    ) -> Result<entity::testimonial::Model, DbErr> {
        let testimonial = entity::testimonial::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            rating: ActiveValue::Set(rating),
            text: ActiveValue::Set(text.to_string()),
            location: ActiveValue::Set(Some(location.to_string())),
            is_approved: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        testimonial.insert(self.db).await
    }

    /// Approved testimonials, newest first
    pub async fn list_approved(&self) -> Result<Vec<entity::testimonial::Model>, DbErr> {
        entity::prelude::Testimonial::find()
            .filter(entity::testimonial::Column::IsApproved.eq(true))
            .order_by_desc(entity::testimonial::Column::CreatedAt)
            .limit(APPROVED_TESTIMONIAL_LIMIT)
            .all(self.db)
            .await
    }
}
