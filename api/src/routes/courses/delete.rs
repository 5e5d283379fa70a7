use crate::response::ApiResponse;
use crate::routes::courses::common::CourseResponse;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::course::{Entity as CourseEntity, Model as CourseModel};
use sea_orm::EntityTrait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DeleteCourseRequest {
    pub id: i64,
}

/// DELETE /api/course
///
/// Deletes the course identified by the body `id`, removing its enrollment
/// rows first. Both deletes run in a single transaction.
///
/// ### Responses
/// - `200 OK` — the deleted course
/// - `404 Not Found` — no course with that id
/// - `500 Internal Server Error` — database error
pub async fn delete_course(
    State(app_state): State<AppState>,
    Json(req): Json<DeleteCourseRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let course = match CourseEntity::find_by_id(req.id).one(db).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("No course with that id exists.")),
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

    match CourseModel::delete_with_enrollments(db, course.id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CourseResponse::from(course),
                "Course deleted successfully",
            )),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, course_id = course.id, "Failed to delete course");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}
