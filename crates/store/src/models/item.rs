//! Found-item listing model.

use lostfound_core::types::EntityId;
use serde::Serialize;

/// A found item submitted by a student.
///
/// Listings start unapproved and become publicly visible only after an
/// admin approves them. Field values are stored exactly as submitted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Date the item was found, free text as entered on the form.
    pub date: String,
    pub student_name: String,
    pub student_email: String,
    /// Blob-store reference to the uploaded photo, if one was supplied.
    pub photo: Option<String>,
    pub approved: bool,
}

/// DTO for creating a new item listing.
#[derive(Debug, Clone)]
pub struct CreateItem {
    pub name: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub student_name: String,
    pub student_email: String,
    pub photo: Option<String>,
}
