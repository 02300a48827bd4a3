//! Session-cookie extractor for Axum handlers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;

use crate::session::SESSION_COOKIE;
use crate::state::AppState;

/// The caller's authorization context, resolved from the session cookie.
///
/// This extractor never rejects: an absent or unknown cookie simply yields
/// `is_admin = false`, and the lifecycle controller decides whether that is
/// acceptable for the operation. Handlers pass `caller.is_admin` on
/// explicitly rather than reading ambient session state.
#[derive(Debug, Clone)]
pub struct Caller {
    /// Whether the request carries a live admin session.
    pub is_admin: bool,
    /// The raw session token, when a session cookie was sent.
    pub token: Option<String>,
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|header| header.split(';'))
            .find_map(|pair| pair.trim().strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
            .map(str::to_string);

        let is_admin = token
            .as_deref()
            .map(|t| state.sessions.is_admin(t))
            .unwrap_or(false);

        Ok(Caller { is_admin, token })
    }
}
