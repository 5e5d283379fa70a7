//! # User Creation Route
//!
//! - `POST /api/user`: Create a single user. Admin-only.

use crate::response::ApiResponse;
use crate::routes::users::common::{CreateUserRequest, UserResponse};
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use db::models::user::{ActiveModel as UserActiveModel, Model as UserModel};
use sea_orm::{ActiveModelTrait, Set};
use validator::Validate;

/// POST /api/user
///
/// Creates a user. The password is hashed before storage, a unique
/// `school_id` is derived from the name, `gpa` defaults to 4.0 and
/// `is_admin` to false when omitted.
///
/// An existing account with the same email aborts the operation — nothing
/// is written.
///
/// ### Responses
/// - `201 Created` — the created user (no password field)
/// - `400 Bad Request` — validation failure
/// - `409 Conflict` — a user with that email already exists
/// - `500 Internal Server Error` — database error
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(common::format_validation_errors(
                &e,
            ))),
        )
            .into_response();
    }

    let db = app_state.db();

    match UserModel::find_by_email(db, &req.email).await {
        Ok(Some(_)) => {
            return (
                StatusCode::CONFLICT,
                Json(ApiResponse::<()>::error(
                    "A user with that email already exists.",
                )),
            )
                .into_response();
        }
        Ok(None) => {}
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response();
        }
    }

    let password_hash = match UserModel::hash_password(&req.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!(error = %e, "Failed to hash password");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("User was not created.")),
            )
                .into_response();
        }
    };

    let school_id = match UserModel::generate_school_id(db, &req.first_name, &req.last_name).await
    {
        Ok(school_id) => school_id,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response();
        }
    };

    let now = Utc::now();
    let user = UserActiveModel {
        first_name: Set(req.first_name),
        last_name: Set(req.last_name),
        email: Set(req.email),
        preferred_name: Set(req.preferred_name),
        gpa: Set(req.gpa.unwrap_or(4.0)),
        address: Set(req.address),
        phone: Set(req.phone),
        password_hash: Set(password_hash),
        is_admin: Set(req.is_admin.unwrap_or(false)),
        school_id: Set(school_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match user.insert(db).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                UserResponse::from(created),
                "User created successfully",
            )),
        )
            .into_response(),
        Err(e) => {
            // the email check above races with concurrent creates
            if e.to_string().contains("UNIQUE constraint failed") {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<()>::error(
                        "A user with that email already exists.",
                    )),
                )
                    .into_response();
            }
            tracing::error!(error = %e, "Failed to create user");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}
