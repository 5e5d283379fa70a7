//! HTTP route entry point for `/api/...`.
//!
//! This module defines all HTTP entry points under the `/api` namespace.
//! Routes are organized by domain (courses, users, health), each protected
//! via appropriate access control middleware.
//!
//! Route groups include:
//! - `/health` → Health check endpoint (public)
//! - `/course` → Course management endpoints (reads authenticated, writes admin-only)
//! - `/user` → User management endpoints (self-update authenticated, rest admin-only)

use crate::routes::{courses::course_routes, health::health_routes, users::user_routes};
use crate::state::AppState;
use axum::Router;

pub mod courses;
pub mod health;
pub mod users;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router mounts all route groups under their respective base
/// paths with `AppState` applied:
/// - `/health` → Health check endpoint (no authentication required).
/// - `/course` → Course CRUD and duplication.
/// - `/user` → User CRUD.
///
/// Per-route access control lives inside each group so that, for example,
/// `GET /course` stays open to any authenticated user while the write
/// operations on the same path require admin.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest(
            "/course",
            course_routes().with_state(app_state.clone()),
        )
        .nest("/user", user_routes().with_state(app_state))
}
