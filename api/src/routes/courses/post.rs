//! # Course Creation Routes
//!
//! - `POST /api/course`: Create a single course
//! - `POST /api/course/duplicate`: Copy an existing course with overrides
//!
//! All routes require admin privileges.

use crate::response::ApiResponse;
use crate::routes::courses::common::{
    CourseResponse, CreateCourseRequest, DuplicateCourseRequest, DuplicateCourseResponse,
};
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use db::models::course::{ActiveModel as CourseActiveModel, Entity as CourseEntity};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    EntityTrait,
};
use validator::Validate;

/// POST /api/course
///
/// Creates a course from the supplied fields. Fields that are omitted fall
/// back to the storage defaults; nothing else is defaulted here.
///
/// ### Responses
/// - `201 Created` — the created course
/// - `400 Bad Request` — validation failure
/// - `500 Internal Server Error` — persistence failure (logged; the client
///   receives only the generic failure message)
pub async fn create_course(
    State(app_state): State<AppState>,
    Json(req): Json<CreateCourseRequest>,
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
    let now = Utc::now();

    let course = CourseActiveModel {
        name: Set(req.name),
        course_number: Set(req.course_number),
        credit_hours: Set(req.credit_hours),
        semester_id: Set(req.semester_id),
        monday: req.monday.map(Set).unwrap_or(NotSet),
        tuesday: req.tuesday.map(Set).unwrap_or(NotSet),
        wednesday: req.wednesday.map(Set).unwrap_or(NotSet),
        thursday: req.thursday.map(Set).unwrap_or(NotSet),
        friday: req.friday.map(Set).unwrap_or(NotSet),
        start_time: Set(req.start_time),
        end_time: Set(req.end_time),
        subject: Set(req.subject),
        location: Set(req.location),
        description: Set(req.description),
        capacity: req.capacity.map(Set).unwrap_or(NotSet),
        enrollment_open: req.enrollment_open.map(Set).unwrap_or(NotSet),
        asynchronous: req.asynchronous.map(Set).unwrap_or(NotSet),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match course.insert(db).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                CourseResponse::from(created),
                "Course created successfully",
            )),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create course");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Course was not created.")),
            )
                .into_response()
        }
    }
}

/// POST /api/course/duplicate
///
/// Creates a copy of the course identified by `id`. Override fields that are
/// present in the request (including explicit `false` for the booleans) win;
/// everything else is copied from the source record.
///
/// ### Responses
/// - `201 Created` — `{ "duplicate_course": .., "course": .. }`
/// - `404 Not Found` — source id does not resolve; no write is performed
/// - `500 Internal Server Error` — database error
pub async fn duplicate_course(
    State(app_state): State<AppState>,
    Json(req): Json<DuplicateCourseRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let source = match CourseEntity::find_by_id(req.id).one(db).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Course was not duplicated.")),
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

    let resolved = req.fields.resolve(&source);
    let now = Utc::now();

    let duplicate = CourseActiveModel {
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
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match duplicate.insert(db).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                DuplicateCourseResponse {
                    duplicate_course: CourseResponse::from(created),
                    course: CourseResponse::from(source),
                },
                "Course duplicated successfully",
            )),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to duplicate course");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Course was not duplicated.")),
            )
                .into_response()
        }
    }
}
