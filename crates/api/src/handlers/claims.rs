//! Handlers for claim and inquiry submission.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use lostfound_core::types::EntityId;
use lostfound_store::models::{Claim, CreateClaim};
use lostfound_store::repositories::ClaimRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Form body for `POST /submit-claim`.
///
/// Everything defaults: missing fields are accepted as empty (or zero for
/// the item reference), matching the store-as-submitted posture. The
/// referenced item is not required to exist.
#[derive(Debug, Deserialize)]
pub struct SubmitClaimRequest {
    #[serde(default)]
    pub item_id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "requestType", default)]
    pub request_type: String,
    #[serde(default)]
    pub message: String,
}

/// POST /submit-claim
///
/// Record a claim (ownership assertion) or inquiry against a listed item.
/// The claim starts pending and waits for an admin decision.
pub async fn submit_claim(
    State(state): State<AppState>,
    Form(input): Form<SubmitClaimRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Claim>>)> {
    let claim = ClaimRepo::create(
        &state.store,
        &CreateClaim {
            item_id: input.item_id,
            name: input.name,
            email: input.email,
            request_type: input.request_type,
            message: input.message,
        },
    );

    tracing::info!(
        claim_id = claim.id,
        item_id = claim.item_id,
        request_type = %claim.request_type,
        "Claim submitted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: claim })))
}
