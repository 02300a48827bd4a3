//! Handlers for item submission and the public listing.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use lostfound_store::lifecycle::Lifecycle;
use lostfound_store::models::{CreateItem, Item};
use lostfound_store::repositories::ItemRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /submit-item
///
/// Accepts the found-item form as multipart (the photo rides along as a
/// file part). Fields are stored as submitted — absent fields become empty
/// strings, and the listing waits unapproved for admin review.
///
/// The photo is written to the blob store before the item is appended; if
/// the write fails no item is created.
pub async fn submit_item(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Item>>)> {
    let mut input = CreateItem {
        name: String::new(),
        description: String::new(),
        category: String::new(),
        date: String::new(),
        student_name: String::new(),
        student_email: String::new(),
        photo: None,
    };
    let mut photo_upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "photo" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                // A file input left empty still submits a zero-length part.
                if !filename.is_empty() && !data.is_empty() {
                    photo_upload = Some((filename, data.to_vec()));
                }
            }
            _ => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                match name.as_str() {
                    "item_name" => input.name = text,
                    "description" => input.description = text,
                    "category" => input.category = text,
                    "date" => input.date = text,
                    "name" => input.student_name = text,
                    "email" => input.student_email = text,
                    _ => {} // ignore unknown fields
                }
            }
        }
    }

    if let Some((filename, data)) = photo_upload {
        let reference = state
            .blobs
            .put(&filename, &data)
            .await
            .map_err(|e| AppError::InternalError(format!("Photo upload failed: {e}")))?;
        input.photo = Some(reference);
    }

    let item = ItemRepo::create(&state.store, &input);

    tracing::info!(item_id = item.id, has_photo = item.photo.is_some(), "Item submitted");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// GET /items
///
/// The public search listing: approved items only, insertion order.
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(Lifecycle::list_public_items(&state.store))
}
