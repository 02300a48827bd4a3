//! Handlers for admin login and logout.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{AppendHeaders, IntoResponse};
use axum::Form;
use lostfound_core::error::CoreError;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::session::Caller;
use crate::session::{clear_session_cookie, session_cookie};
use crate::state::AppState;

/// Form body for `POST /admin-login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

/// POST /admin-login
///
/// Compare the submitted password against the configured admin password.
/// On a match, mint an admin session and set the session cookie.
pub async fn admin_login(
    State(state): State<AppState>,
    Form(input): Form<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    if input.password != state.config.admin_password {
        tracing::info!("Rejected admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let token = state.sessions.create_admin();
    tracing::info!("Admin logged in");

    Ok((
        StatusCode::OK,
        AppendHeaders([(SET_COOKIE, session_cookie(&token))]),
    ))
}

/// GET /admin-logout
///
/// Destroy the caller's session (admin or not) and clear the cookie.
pub async fn admin_logout(caller: Caller, State(state): State<AppState>) -> impl IntoResponse {
    if let Some(token) = caller.token.as_deref() {
        state.sessions.destroy(token);
    }
    tracing::info!(was_admin = caller.is_admin, "Session destroyed");

    (
        StatusCode::OK,
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
    )
}
