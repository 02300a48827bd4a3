use std::sync::{Arc, Mutex};

use lostfound_core::types::EntityId;

use crate::models::{Claim, Item};

/// Shared handle to the in-memory catalog.
///
/// Cheaply cloneable; all clones see the same collections. Every operation
/// runs under a single lock acquisition, so a lifecycle operation's
/// read-then-mutate across both collections is atomic with respect to any
/// concurrent mutation. The raw collections never leave this crate.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Mutex<Catalog>>,
}

/// The two collections plus their id counters.
///
/// Counters are monotonic and independent of collection length: deleting an
/// item can shrink the collection below a previously issued id, and that id
/// must never be handed out again.
#[derive(Default)]
pub(crate) struct Catalog {
    pub(crate) items: Vec<Item>,
    pub(crate) claims: Vec<Claim>,
    next_item_id: EntityId,
    next_claim_id: EntityId,
}

impl Catalog {
    pub(crate) fn alloc_item_id(&mut self) -> EntityId {
        self.next_item_id += 1;
        self.next_item_id
    }

    pub(crate) fn alloc_claim_id(&mut self) -> EntityId {
        self.next_claim_id += 1;
        self.next_claim_id
    }
}

impl Store {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with exclusive access to the catalog.
    ///
    /// The only access path to the collections; holding the lock for the
    /// whole closure is what makes cross-collection operations atomic.
    pub(crate) fn with<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> R {
        let mut catalog = self.inner.lock().expect("catalog mutex poisoned");
        f(&mut catalog)
    }
}
