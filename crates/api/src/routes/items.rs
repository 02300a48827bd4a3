//! Routes for item submission and the public listing.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit-item", post(items::submit_item))
        .route("/items", get(items::list_items))
}
