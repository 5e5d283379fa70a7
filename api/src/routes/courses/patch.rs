use crate::response::ApiResponse;
use crate::routes::courses::common::{CourseFieldPatch, CourseResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use db::models::course::{ActiveModel as CourseActiveModel, Entity as CourseEntity};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

/// PATCH /api/course/{course_id}
///
/// Partially updates a course. For each of the 16 mutable fields the
/// supplied value is applied when present — an explicit `false` for the
/// day and flag booleans counts as present — and the stored value is
/// retained otherwise.
///
/// ### Responses
/// - `200 OK` — the updated course
/// - `404 Not Found` — no course with that id
/// - `500 Internal Server Error` — database error
pub async fn update_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Json(req): Json<CourseFieldPatch>,
) -> impl IntoResponse {
    let db = app_state.db();

    let course = match CourseEntity::find_by_id(course_id).one(db).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Course not found.")),
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

    let resolved = req.resolve(&course);

    let updated = CourseActiveModel {
        id: Set(course.id),
        name: Set(resolved.name),
        course_number: Set(resolved.course_number),
        credit_hours: Set(resolved.credit_hours),
        semester_id: Set(resolved.semester_id),
        monday: Set(resolved.monday),
        tuesday: Set(resolved.tuesday),
        wednesday: Set(resolved.wednesday),
        thursday: Set(resolved.thursday),
        friday: Set(resolved.friday),
        start_time: Set(resolved.start_time),
        end_time: Set(resolved.end_time),
        subject: Set(resolved.subject),
        location: Set(resolved.location),
        description: Set(resolved.description),
        capacity: Set(resolved.capacity),
        enrollment_open: Set(resolved.enrollment_open),
        asynchronous: Set(resolved.asynchronous),
        updated_at: Set(Utc::now()),
        ..Default::default()
    };

    match updated.update(db).await {
        Ok(course) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CourseResponse::from(course),
                "Course updated successfully",
            )),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, course_id, "Failed to update course");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Failed to update course")),
            )
                .into_response()
        }
    }
}
