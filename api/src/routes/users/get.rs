use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::routes::users::common::UserResponse;
use crate::state::AppState;
use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::user::{Entity as UserEntity, Model as UserModel};
use sea_orm::EntityTrait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GetUserQuery {
    pub id: Option<i64>,
    pub school_id: Option<String>,
    pub email: Option<String>,
}

/// GET /api/user
///
/// Resolves a single user by `id`, else `school_id`, else `email`. With
/// none of the three, falls back to the caller's own record. Admin-only.
///
/// ### Responses
/// - `200 OK` — the user (no password field)
/// - `404 Not Found` — nothing resolved
/// - `500 Internal Server Error` — database error
pub async fn get_user(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Query(query): Query<GetUserQuery>,
) -> impl IntoResponse {
    let db = app_state.db();

    let lookup = if let Some(id) = query.id {
        UserEntity::find_by_id(id).one(db).await
    } else if let Some(school_id) = &query.school_id {
        UserModel::find_by_school_id(db, school_id).await
    } else if let Some(email) = &query.email {
        UserModel::find_by_email(db, email).await
    } else {
        UserEntity::find_by_id(claims.sub).one(db).await
    };

    match lookup {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "User retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("No account found.")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}

/// GET /api/user/all
///
/// Returns every user record, passwords stripped. Admin-only.
pub async fn list_users(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    match UserEntity::find().all(db).await {
        Ok(users) => {
            let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(users, "Users retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}
