//! Request handlers.
//!
//! Each submodule covers one resource. Handlers resolve the caller's admin
//! flag via the session extractor, delegate to the repositories or the
//! lifecycle controller in `lostfound_store`, and map errors via
//! [`crate::error::AppError`].

pub mod admin;
pub mod auth;
pub mod claims;
pub mod items;
