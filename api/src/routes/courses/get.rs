use crate::response::ApiResponse;
use crate::routes::courses::common::CourseResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::course::Entity as CourseEntity;
use sea_orm::EntityTrait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GetCourseQuery {
    pub id: Option<i64>,
}

/// GET /api/course
///
/// Public. With an `id` query parameter, returns that single course;
/// without one, returns every course.
///
/// ### Responses
/// - `200 OK` — a course object, or an array of courses
/// - `404 Not Found` — `id` supplied but no such course
/// - `500 Internal Server Error` — database error
pub async fn get_courses(
    State(app_state): State<AppState>,
    Query(query): Query<GetCourseQuery>,
) -> impl IntoResponse {
    let db = app_state.db();

    match query.id {
        Some(id) => match CourseEntity::find_by_id(id).one(db).await {
            Ok(Some(course)) => (
                StatusCode::OK,
                Json(ApiResponse::success(
                    CourseResponse::from(course),
                    "Course retrieved successfully",
                )),
            )
                .into_response(),
            Ok(None) => (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("No course found.")),
            )
                .into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response(),
        },
        None => match CourseEntity::find().all(db).await {
            Ok(courses) => {
                let courses: Vec<CourseResponse> =
                    courses.into_iter().map(CourseResponse::from).collect();
                (
                    StatusCode::OK,
                    Json(ApiResponse::success(
                        courses,
                        "Courses retrieved successfully",
                    )),
                )
                    .into_response()
            }
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response(),
        },
    }
}
