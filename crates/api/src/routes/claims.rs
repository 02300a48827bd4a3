//! Route for claim and inquiry submission.

use axum::routing::post;
use axum::Router;

use crate::handlers::claims;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/submit-claim", post(claims::submit_claim))
}
