//! Routes for admin login and logout.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin-login", post(auth::admin_login))
        .route("/admin-logout", get(auth::admin_logout))
}
