//! Repository for the item collection.

use lostfound_core::types::EntityId;

use crate::models::{CreateItem, Item};
use crate::Store;

/// Provides CRUD operations for found-item listings.
pub struct ItemRepo;

impl ItemRepo {
    /// Create a new listing, returning the full record.
    ///
    /// Allocates the next id and appends; the listing starts unapproved.
    /// There is no duplicate detection — resubmitting the same fields
    /// creates an independent record.
    pub fn create(store: &Store, input: &CreateItem) -> Item {
        store.with(|catalog| {
            let item = Item {
                id: catalog.alloc_item_id(),
                name: input.name.clone(),
                description: input.description.clone(),
                category: input.category.clone(),
                date: input.date.clone(),
                student_name: input.student_name.clone(),
                student_email: input.student_email.clone(),
                photo: input.photo.clone(),
                approved: false,
            };
            catalog.items.push(item.clone());
            item
        })
    }

    /// Find an item by id.
    pub fn find_by_id(store: &Store, id: EntityId) -> Option<Item> {
        store.with(|catalog| catalog.items.iter().find(|i| i.id == id).cloned())
    }

    /// List approved items in insertion order.
    pub fn list_approved(store: &Store) -> Vec<Item> {
        store.with(|catalog| {
            catalog
                .items
                .iter()
                .filter(|i| i.approved)
                .cloned()
                .collect()
        })
    }

    /// List the full collection, approved or not, in insertion order.
    pub fn list_all(store: &Store) -> Vec<Item> {
        store.with(|catalog| catalog.items.clone())
    }

    /// Mark an item approved in place.
    ///
    /// Returns `false` when no item with `id` exists. Approving an
    /// already-approved item succeeds.
    pub fn approve(store: &Store, id: EntityId) -> bool {
        store.with(|catalog| match catalog.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.approved = true;
                true
            }
            None => false,
        })
    }

    /// Remove an item if present. Removing an absent id is a no-op.
    pub fn delete(store: &Store, id: EntityId) {
        store.with(|catalog| catalog.items.retain(|i| i.id != id));
    }
}
