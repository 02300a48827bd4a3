//! Claim and inquiry model.

use lostfound_core::types::EntityId;
use serde::Serialize;

/// A claim or inquiry a student submitted against a listed item.
///
/// `item_id` is taken verbatim from the request and is never validated
/// against the item collection, so it may dangle from the moment of
/// submission or come to dangle later when the item is removed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: EntityId,
    pub item_id: EntityId,
    pub name: String,
    pub email: String,
    /// `"claim"` or `"inquiry"`, stored verbatim from the submission.
    #[serde(rename = "type")]
    pub request_type: String,
    pub message: String,
    /// `"pending"`, `"approved"`, or `"rejected"`.
    pub status: String,
}

/// DTO for submitting a new claim or inquiry.
#[derive(Debug, Clone)]
pub struct CreateClaim {
    pub item_id: EntityId,
    pub name: String,
    pub email: String,
    pub request_type: String,
    pub message: String,
}
