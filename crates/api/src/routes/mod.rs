pub mod admin;
pub mod auth;
pub mod claims;
pub mod health;
pub mod items;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Paths are flat (no version prefix) because the static frontend under
/// `public/` calls them relative to the same origin:
///
/// ```text
/// POST /submit-item            submit a found item (multipart, public)
/// GET  /items                  approved listings (public)
/// POST /submit-claim           submit a claim or inquiry (public)
///
/// POST /approve-claim/{id}     approve claim / resolve inquiry (admin)
/// POST /reject-claim/{id}      reject claim or inquiry (admin)
/// POST /approve-item/{id}      publish a listing (admin)
/// POST /delete-item/{id}       remove a listing (admin)
/// GET  /admin-data             full items + claims feed (admin)
/// GET  /admin-dashboard        dashboard page (admin, else redirect)
///
/// POST /admin-login            password login, sets session cookie
/// GET  /admin-logout           destroy session, clear cookie
/// ```
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(items::router())
        .merge(claims::router())
        .merge(admin::router())
        .merge(auth::router())
}
