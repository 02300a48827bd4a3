//! Routes for the admin moderation surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/approve-claim/{id}", post(admin::approve_claim))
        .route("/reject-claim/{id}", post(admin::reject_claim))
        .route("/approve-item/{id}", post(admin::approve_item))
        .route("/delete-item/{id}", post(admin::delete_item))
        .route("/admin-data", get(admin::admin_data))
        .route("/admin-dashboard", get(admin::admin_dashboard))
}
