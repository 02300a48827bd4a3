//! Repository for the claim collection.

use lostfound_core::claim::STATUS_PENDING;
use lostfound_core::types::EntityId;

use crate::models::{Claim, CreateClaim};
use crate::Store;

/// Provides CRUD operations for claims and inquiries.
pub struct ClaimRepo;

impl ClaimRepo {
    /// Create a new claim, returning the full record.
    ///
    /// `item_id` is stored verbatim; it is not checked against the item
    /// collection, so a claim may reference an item that never existed.
    pub fn create(store: &Store, input: &CreateClaim) -> Claim {
        store.with(|catalog| {
            let claim = Claim {
                id: catalog.alloc_claim_id(),
                item_id: input.item_id,
                name: input.name.clone(),
                email: input.email.clone(),
                request_type: input.request_type.clone(),
                message: input.message.clone(),
                status: STATUS_PENDING.to_string(),
            };
            catalog.claims.push(claim.clone());
            claim
        })
    }

    /// Find a claim by id.
    pub fn find_by_id(store: &Store, id: EntityId) -> Option<Claim> {
        store.with(|catalog| catalog.claims.iter().find(|c| c.id == id).cloned())
    }

    /// List the full collection in insertion order.
    pub fn list_all(store: &Store) -> Vec<Claim> {
        store.with(|catalog| catalog.claims.clone())
    }

    /// Overwrite a claim's status. Returns `false` when the id is absent.
    ///
    /// No transition table is enforced here; the lifecycle controller is
    /// responsible for which transitions it requests.
    pub fn set_status(store: &Store, id: EntityId, status: &str) -> bool {
        store.with(
            |catalog| match catalog.claims.iter_mut().find(|c| c.id == id) {
                Some(claim) => {
                    claim.status = status.to_string();
                    true
                }
                None => false,
            },
        )
    }
}
