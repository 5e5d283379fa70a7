//! # User Routes Module
//!
//! Defines and wires up routes for the `/api/user` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (single lookup, full listing; admin only)
//! - `post.rs` — POST handlers (create; admin only)
//! - `patch.rs` — PATCH handlers (self-update for any authenticated user,
//!   arbitrary update for admins)
//! - `delete.rs` — DELETE handlers (cascading delete; admin only)

use crate::auth::guards::{allow_admin, allow_authenticated};
use crate::state::AppState;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, patch, post},
};
use delete::delete_user;
use get::{get_user, list_users};
use patch::{update_self, update_user};
use post::create_user;

pub mod common;
pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

/// Builds the `/user` route group.
///
/// - `POST /user` → `create_user` (admin only)
/// - `GET /user` → `get_user` (admin only)
/// - `GET /user/all` → `list_users` (admin only)
/// - `PATCH /user` → `update_self` (any authenticated user)
/// - `PATCH /user/{user_id}` → `update_user` (admin only)
/// - `DELETE /user` → `delete_user` (admin only)
pub fn user_routes() -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_user).get(get_user).delete(delete_user))
        .route("/all", get(list_users))
        .route("/{user_id}", patch(update_user))
        .route_layer(from_fn(allow_admin));

    let authenticated = Router::new()
        .route("/", patch(update_self))
        .route_layer(from_fn(allow_authenticated));

    admin.merge(authenticated)
}
