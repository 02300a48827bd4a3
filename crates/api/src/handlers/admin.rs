//! Handlers for the admin moderation surface.
//!
//! Authorization is not checked here: each handler passes the caller's
//! resolved admin flag to the lifecycle controller, which is the single
//! place the gate is enforced.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use lostfound_core::types::EntityId;
use lostfound_store::lifecycle::{AdminView, Lifecycle};

use crate::error::{AppError, AppResult};
use crate::middleware::session::Caller;
use crate::state::AppState;

/// POST /approve-claim/{id}
///
/// Approve a claim or resolve an inquiry. For ownership claims this also
/// removes the claimed item from the catalog.
pub async fn approve_claim(
    caller: Caller,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    Lifecycle::approve_claim(&state.store, id, caller.is_admin)?;
    Ok(StatusCode::OK)
}

/// POST /reject-claim/{id}
pub async fn reject_claim(
    caller: Caller,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    Lifecycle::reject_claim(&state.store, id, caller.is_admin)?;
    Ok(StatusCode::OK)
}

/// POST /approve-item/{id}
///
/// Make a listing publicly visible.
pub async fn approve_item(
    caller: Caller,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    Lifecycle::approve_item(&state.store, id, caller.is_admin)?;
    Ok(StatusCode::OK)
}

/// POST /delete-item/{id}
///
/// Remove a listing. Deleting an id that is already gone still returns 200.
pub async fn delete_item(
    caller: Caller,
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    Lifecycle::delete_item(&state.store, id, caller.is_admin)?;
    Ok(StatusCode::OK)
}

/// GET /admin-data
///
/// The dashboard's data feed: both collections, unfiltered.
pub async fn admin_data(
    caller: Caller,
    State(state): State<AppState>,
) -> AppResult<Json<AdminView>> {
    let view = Lifecycle::admin_view(&state.store, caller.is_admin)?;
    Ok(Json(view))
}

/// GET /admin-dashboard
///
/// Serve the dashboard page to admins; everyone else is sent to the login
/// page instead of receiving a 403, since this is a browser navigation.
pub async fn admin_dashboard(caller: Caller, State(state): State<AppState>) -> Response {
    if !caller.is_admin {
        return Redirect::to("/admin-login.html").into_response();
    }

    let page = state.config.views_dir.join("admin-dashboard.html");
    match tokio::fs::read_to_string(&page).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            AppError::InternalError(format!("Failed to read {}: {e}", page.display()))
                .into_response()
        }
    }
}
