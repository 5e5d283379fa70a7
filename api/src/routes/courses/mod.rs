//! # Course Routes Module
//!
//! Defines and wires up routes for the `/api/course` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (single course or full listing, public)
//! - `post.rs` — POST handlers (create, duplicate; admin only)
//! - `patch.rs` — PATCH handlers (partial update; admin only)
//! - `delete.rs` — DELETE handlers (cascading delete; admin only)

use crate::auth::guards::allow_admin;
use crate::state::AppState;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, patch, post},
};
use delete::delete_course;
use get::get_courses;
use patch::update_course;
use post::{create_course, duplicate_course};

pub mod common;
pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

/// Builds the `/course` route group.
///
/// - `GET /course` → `get_courses` (public)
/// - `POST /course` → `create_course` (admin only)
/// - `POST /course/duplicate` → `duplicate_course` (admin only)
/// - `PATCH /course/{course_id}` → `update_course` (admin only)
/// - `DELETE /course` → `delete_course` (admin only)
pub fn course_routes() -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_course).delete(delete_course))
        .route("/duplicate", post(duplicate_course))
        .route("/{course_id}", patch(update_course))
        .route_layer(from_fn(allow_admin));

    Router::new().route("/", get(get_courses)).merge(admin)
}
