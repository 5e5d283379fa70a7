use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::{Rng, rngs::OsRng};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, TransactionTrait};
use serde::Serialize;

use crate::models::course_user::{Column as EnrollmentColumn, Entity as EnrollmentEntity};

/// Represents an account in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Unique email address.
    pub email: String,
    pub preferred_name: Option<String>,
    pub gpa: f64,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Securely hashed password string. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the user has admin privileges.
    pub is_admin: bool,
    /// Unique school identifier derived from the name at creation.
    pub school_id: String,
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
    pub fn hash_password(password: &str) -> Result<String, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| DbErr::Custom(format!("password hashing failed: {}", e)))
    }

    pub fn verify_password(&self, password: &str) -> bool {
        PasswordHash::new(&self.password_hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find().filter(Column::Email.eq(email)).one(db).await
    }

    pub async fn find_by_school_id(
        db: &DatabaseConnection,
        school_id: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::SchoolId.eq(school_id))
            .one(db)
            .await
    }

    /// Derives a unique school id of the form `jlovelace0042` from the
    /// user's name, retrying the numeric suffix on collision.
    pub async fn generate_school_id(
        db: &DatabaseConnection,
        first_name: &str,
        last_name: &str,
    ) -> Result<String, DbErr> {
        let base: String = first_name
            .chars()
            .take(1)
            .chain(last_name.chars())
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        let base = if base.is_empty() {
            "student".to_string()
        } else {
            base
        };

        for _ in 0..32 {
            let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
            let candidate = format!("{}{:04}", base, suffix);
            if Self::find_by_school_id(db, &candidate).await?.is_none() {
                return Ok(candidate);
            }
        }

        Err(DbErr::Custom(format!(
            "could not allocate a unique school id for {} {}",
            first_name, last_name
        )))
    }

    /// Deletes the user together with all of their enrollment rows.
    ///
    /// The store does not cascade `course_users` automatically, so both
    /// deletes run inside one transaction.
    pub async fn delete_with_enrollments(
        db: &DatabaseConnection,
        user_id: i64,
    ) -> Result<(), DbErr> {
        let txn = db.begin().await?;
        EnrollmentEntity::delete_many()
            .filter(EnrollmentColumn::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        Entity::delete_by_id(user_id).exec(&txn).await?;
        txn.commit().await
    }
}
