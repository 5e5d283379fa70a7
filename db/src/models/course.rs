use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, TransactionTrait};
use serde::Serialize;

use crate::models::course_user::{Column as EnrollmentColumn, Entity as EnrollmentEntity};

/// Represents a scheduled course offering in the `courses` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    /// Primary key ID (auto-incremented, immutable after creation).
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub course_number: String,
    pub credit_hours: i32,
    /// Reference to the owning semester. Semester management lives outside
    /// this service, so no foreign key is enforced.
    pub semester_id: i64,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub subject: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub capacity: i32,
    pub enrollment_open: bool,
    pub asynchronous: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_user::Entity")]
    Enrollments,
}

impl Related<super::course_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Deletes the course together with all of its enrollment rows.
    ///
    /// The store does not cascade `course_users` automatically, so both
    /// deletes run inside one transaction.
    pub async fn delete_with_enrollments(
        db: &DatabaseConnection,
        course_id: i64,
    ) -> Result<(), DbErr> {
        let txn = db.begin().await?;
        EnrollmentEntity::delete_many()
            .filter(EnrollmentColumn::CourseId.eq(course_id))
            .exec(&txn)
            .await?;
        Entity::delete_by_id(course_id).exec(&txn).await?;
        txn.commit().await
    }
}
