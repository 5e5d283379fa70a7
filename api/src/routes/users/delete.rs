use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::routes::users::common::{DeleteUserRequest, UserResponse};
use crate::state::AppState;
use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::user::{Entity as UserEntity, Model as UserModel};
use sea_orm::EntityTrait;

/// DELETE /api/user
///
/// Deletes the user identified by the body `id` or `email`, removing their
/// enrollment rows first. Both deletes run in a single transaction.
/// Admins cannot delete their own account.
///
/// ### Responses
/// - `200 OK` — the deleted user (no password field)
/// - `403 Forbidden` — the resolved target is the caller
/// - `404 Not Found` — nothing resolved
/// - `500 Internal Server Error` — database error
pub async fn delete_user(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<DeleteUserRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let lookup = if let Some(id) = req.id {
        UserEntity::find_by_id(id).one(db).await
    } else if let Some(email) = &req.email {
        UserModel::find_by_email(db, email).await
    } else {
        Ok(None)
    };

    let user = match lookup {
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

    if user.id == claims.sub {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::error(
                "You cannot delete your own account",
            )),
        )
            .into_response();
    }

    match UserModel::delete_with_enrollments(db, user.id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "User deleted successfully",
            )),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, user_id = user.id, "Failed to delete user");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}
