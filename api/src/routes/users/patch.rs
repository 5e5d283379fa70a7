//! # User Update Routes
//!
//! - `PATCH /api/user`: Update the caller's own record (any authenticated user)
//! - `PATCH /api/user/{user_id}`: Update any record (admin only)
//!
//! Both paths use presence semantics: supplied fields are applied, omitted
//! fields keep their stored values. Supplied passwords are re-hashed.

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::routes::users::common::{UpdateSelfRequest, UpdateUserRequest, UserResponse};
use crate::state::AppState;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use db::models::user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

/// PATCH /api/user
///
/// Updates the caller's own record. The target id comes from the
/// authenticated claims, never from the request body.
///
/// ### Responses
/// - `200 OK` — the updated user (no password field)
/// - `404 Not Found` — the caller's record no longer exists
/// - `500 Internal Server Error` — database error
pub async fn update_self(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<UpdateSelfRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let user = match UserEntity::find_by_id(claims.sub).one(db).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("No account found.")),
            )
                .into_response();
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response();
        }
    };

    let mut updated = UserActiveModel {
        id: Set(user.id),
        updated_at: Set(Utc::now()),
        ..Default::default()
    };

    if let Some(first_name) = req.first_name {
        updated.first_name = Set(first_name);
    }
    if let Some(last_name) = req.last_name {
        updated.last_name = Set(last_name);
    }
    if let Some(preferred_name) = req.preferred_name {
        updated.preferred_name = Set(Some(preferred_name));
    }
    if let Some(address) = req.address {
        updated.address = Set(Some(address));
    }
    if let Some(phone) = req.phone {
        updated.phone = Set(Some(phone));
    }
    if let Some(password) = req.password {
        match UserModel::hash_password(&password) {
            Ok(hash) => updated.password_hash = Set(hash),
            Err(e) => {
                tracing::error!(error = %e, "Failed to hash password");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<()>::error("Failed to update user")),
                )
                    .into_response();
            }
        }
    }

    match updated.update(db).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "User updated successfully",
            )),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, user_id = claims.sub, "Failed to update user");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Failed to update user")),
            )
                .into_response()
        }
    }
}

/// PATCH /api/user/{user_id}
///
/// Admin update of any user. Extends the self-service fields with `email`,
/// `gpa`, and `is_admin`; an explicit `"is_admin": false` demotes.
///
/// ### Responses
/// - `200 OK` — the updated user (no password field)
/// - `404 Not Found` — no user with that id
/// - `409 Conflict` — the new email is already taken
/// - `500 Internal Server Error` — database error
pub async fn update_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let user = match UserEntity::find_by_id(user_id).one(db).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("No account found.")),
            )
                .into_response();
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response();
        }
    };

    let mut updated = UserActiveModel {
        id: Set(user.id),
        updated_at: Set(Utc::now()),
        ..Default::default()
    };

    if let Some(first_name) = req.first_name {
        updated.first_name = Set(first_name);
    }
    if let Some(last_name) = req.last_name {
        updated.last_name = Set(last_name);
    }
    if let Some(email) = req.email {
        updated.email = Set(email);
    }
    if let Some(preferred_name) = req.preferred_name {
        updated.preferred_name = Set(Some(preferred_name));
    }
    if let Some(gpa) = req.gpa {
        updated.gpa = Set(gpa);
    }
    if let Some(address) = req.address {
        updated.address = Set(Some(address));
    }
    if let Some(phone) = req.phone {
        updated.phone = Set(Some(phone));
    }
    if let Some(password) = req.password {
        match UserModel::hash_password(&password) {
            Ok(hash) => updated.password_hash = Set(hash),
            Err(e) => {
                tracing::error!(error = %e, "Failed to hash password");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<()>::error("Failed to update user")),
                )
                    .into_response();
            }
        }
    }
    if let Some(is_admin) = req.is_admin {
        updated.is_admin = Set(is_admin);
    }

    match updated.update(db).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "User updated successfully",
            )),
        )
            .into_response(),
        Err(e) => {
            if e.to_string().contains("UNIQUE constraint failed") {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<()>::error(
                        "A user with that email already exists.",
                    )),
                )
                    .into_response();
            }
            tracing::error!(error = %e, user_id, "Failed to update user");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Failed to update user")),
            )
                .into_response()
        }
    }
}
