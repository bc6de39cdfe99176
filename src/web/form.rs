//! Multipart form extraction for item submissions.
//!
//! Field names: `itemName` (text, required), `attachFile` (file, optional),
//! `imageFiles` (file, repeatable).

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::StatusCode;

use crate::file::UploadedFile;
use crate::item::ItemForm;
use crate::web::error::ApiError;

/// Read an item form from a multipart body.
pub async fn read_item_form(mut multipart: Multipart) -> Result<ItemForm, ApiError> {
    let mut item_name: Option<String> = None;
    let mut attach_file: Option<UploadedFile> = None;
    let mut image_files: Vec<UploadedFile> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "itemName" => {
                item_name = Some(field.text().await.map_err(multipart_error)?);
            }
            "attachFile" => {
                attach_file = Some(read_upload(field).await?);
            }
            "imageFiles" => {
                image_files.push(read_upload(field).await?);
            }
            _ => {
                tracing::debug!(field = %name, "ignoring unknown form field");
            }
        }
    }

    let item_name = item_name.ok_or_else(|| ApiError::bad_request("itemName is required"))?;

    Ok(ItemForm {
        item_name,
        attach_file,
        image_files,
    })
}

/// Read one file field in full.
async fn read_upload(field: Field<'_>) -> Result<UploadedFile, ApiError> {
    let file_name = field.file_name().unwrap_or("").to_string();
    let content = field.bytes().await.map_err(multipart_error)?;

    Ok(UploadedFile::new(file_name, content.to_vec()))
}

fn multipart_error(e: MultipartError) -> ApiError {
    tracing::warn!("Failed to read multipart data: {}", e);
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::payload_too_large("Upload is too large")
    } else {
        ApiError::bad_request("Invalid multipart data")
    }
}
