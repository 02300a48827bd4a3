//! Cross-entity lifecycle rules for items and claims.
//!
//! This is the one place where a mutation on one collection may depend on
//! or touch the other. Every gated operation takes an explicit `is_admin`
//! flag resolved by the caller — transport concerns (sessions, cookies)
//! stay outside. The collections share one mutex, so each operation below
//! is a single critical section over the pair: an approve-claim's
//! read-then-remove cannot interleave with a concurrent delete or a second
//! approval.

use lostfound_core::claim::{removes_item, STATUS_APPROVED, STATUS_REJECTED};
use lostfound_core::error::CoreError;
use lostfound_core::types::EntityId;
use serde::Serialize;

use crate::models::{Claim, Item};
use crate::repositories::{ClaimRepo, ItemRepo};
use crate::Store;

/// The admin's complete operational picture: both collections, unfiltered.
#[derive(Debug, Serialize)]
pub struct AdminView {
    pub items: Vec<Item>,
    pub claims: Vec<Claim>,
}

/// Lifecycle controller enforcing the legal item/claim transitions.
pub struct Lifecycle;

impl Lifecycle {
    /// Approve a claim, removing the referenced item when the claim is an
    /// ownership claim (inquiries never touch the item collection).
    ///
    /// The only transition that spans both collections, so it bypasses the
    /// repositories and works under one lock directly. Item removal is
    /// idempotent: the item may already be gone through an earlier delete
    /// or a prior claim's approval, and that is accepted. Re-approving an
    /// already-resolved claim is likewise accepted; it re-runs the removal,
    /// which is a no-op.
    pub fn approve_claim(store: &Store, id: EntityId, is_admin: bool) -> Result<(), CoreError> {
        ensure_admin(is_admin)?;
        store.with(|catalog| {
            let claim = catalog
                .claims
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or(CoreError::NotFound { entity: "Claim", id })?;

            claim.status = STATUS_APPROVED.to_string();
            let item_id = claim.item_id;
            let removing = removes_item(&claim.request_type);

            if removing {
                catalog.items.retain(|i| i.id != item_id);
            }

            tracing::info!(claim_id = id, item_id, removed_item = removing, "Claim approved");
            Ok(())
        })
    }

    /// Reject a claim. No other side effect: rejecting an already-approved
    /// claim overwrites its status and does not restore a removed item.
    pub fn reject_claim(store: &Store, id: EntityId, is_admin: bool) -> Result<(), CoreError> {
        ensure_admin(is_admin)?;
        if !ClaimRepo::set_status(store, id, STATUS_REJECTED) {
            return Err(CoreError::NotFound { entity: "Claim", id });
        }
        tracing::info!(claim_id = id, "Claim rejected");
        Ok(())
    }

    /// Mark an item approved for public listing.
    pub fn approve_item(store: &Store, id: EntityId, is_admin: bool) -> Result<(), CoreError> {
        ensure_admin(is_admin)?;
        if !ItemRepo::approve(store, id) {
            return Err(CoreError::NotFound { entity: "Item", id });
        }
        tracing::info!(item_id = id, "Item approved");
        Ok(())
    }

    /// Remove an item. Idempotent: deleting an absent id succeeds and
    /// changes nothing, so NotFound is never signaled here.
    pub fn delete_item(store: &Store, id: EntityId, is_admin: bool) -> Result<(), CoreError> {
        ensure_admin(is_admin)?;
        ItemRepo::delete(store, id);
        tracing::info!(item_id = id, "Item deleted");
        Ok(())
    }

    /// Approved items only, in insertion order. No authorization required.
    pub fn list_public_items(store: &Store) -> Vec<Item> {
        ItemRepo::list_approved(store)
    }

    /// Both collections, unfiltered — unapproved items and resolved claims
    /// included. Snapshotted under one lock so the two lists are consistent
    /// with each other.
    pub fn admin_view(store: &Store, is_admin: bool) -> Result<AdminView, CoreError> {
        ensure_admin(is_admin)?;
        Ok(store.with(|catalog| AdminView {
            items: catalog.items.clone(),
            claims: catalog.claims.clone(),
        }))
    }
}

/// Gate check shared by every mutating or privileged operation.
///
/// Runs before any state is read or mutated, so a denied caller observes
/// nothing and changes nothing.
fn ensure_admin(is_admin: bool) -> Result<(), CoreError> {
    if is_admin {
        Ok(())
    } else {
        Err(CoreError::Forbidden("Admin privileges required".into()))
    }
}
