use std::sync::Arc;

use lostfound_store::Store;

use crate::blob::BlobStore;
use crate::config::ServerConfig;
use crate::session::SessionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// The in-memory item and claim catalog.
    pub store: Store,
    /// Session-token to admin-flag map.
    pub sessions: SessionStore,
    /// Photo upload storage.
    pub blobs: BlobStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
