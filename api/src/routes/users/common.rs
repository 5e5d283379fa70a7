use db::models::user::Model as UserModel;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,

    pub preferred_name: Option<String>,
    pub gpa: Option<f64>,
    pub address: Option<String>,
    pub phone: Option<String>,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    pub is_admin: Option<bool>,
}

/// Partial-update record for a user's own account. Every field is
/// explicitly optional; omitted keys keep the stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSelfRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub preferred_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

/// Partial-update record for the admin update path. Extends the
/// self-service fields with `email`, `gpa`, and `is_admin` — the latter
/// with explicit-presence semantics, so `"is_admin": false` demotes.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub preferred_name: Option<String>,
    pub gpa: Option<f64>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    pub id: Option<i64>,
    pub email: Option<String>,
}

/// Outgoing user representation. There is deliberately no password field
/// here: responses are built from this struct only.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub preferred_name: Option<String>,
    pub gpa: f64,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub is_admin: bool,
    pub school_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserModel> for UserResponse {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            preferred_name: user.preferred_name,
            gpa: user.gpa,
            address: user.address,
            phone: user.phone,
            is_admin: user.is_admin,
            school_id: user.school_id,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}
