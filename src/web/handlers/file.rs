//! File download handlers.

use axum::{
    body::Body,
    extract::{Path, State},
    http::header,
    response::Response,
};
use std::sync::Arc;

use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// Generate a Content-Disposition header value that forces a download.
///
/// Plain ASCII names are sent as-is. Anything else is percent-encoded as
/// UTF-8 in both the `filename` parameter and the RFC 5987 `filename*`
/// parameter, so the header stays ASCII and control characters cannot
/// reach it.
fn content_disposition_header(filename: &str) -> String {
    let plain = filename.chars().all(|c| c.is_ascii_graphic() || c == ' ')
        && !filename.contains(['"', '\\', '%']);

    if plain {
        return format!("attachment; filename=\"{filename}\"");
    }

    let encoded = urlencoding::encode(filename);
    format!("attachment; filename=\"{encoded}\"; filename*=UTF-8''{encoded}")
}

fn file_response(
    content: Vec<u8>,
    content_type: String,
    disposition: Option<String>,
) -> Result<Response<Body>, ApiError> {
    let mut builder = Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, content.len());

    if let Some(disposition) = disposition {
        builder = builder.header(header::CONTENT_DISPOSITION, disposition);
    }

    builder.body(Body::from(content)).map_err(|e| {
        tracing::error!("Failed to build response: {}", e);
        ApiError::internal("Failed to build response")
    })
}

/// GET /images/:filename - Serve a stored image inline.
pub async fn download_image(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response<Body>, ApiError> {
    let content = state.item_service().image(&filename)?;

    let content_type = mime_guess::from_path(&filename)
        .first_or_octet_stream()
        .to_string();

    file_response(content, content_type, None)
}

/// GET /attach/:item_id - Download an item's attachment under its original name.
pub async fn download_attach(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<u64>,
) -> Result<Response<Body>, ApiError> {
    let download = state.item_service().attachment(item_id)?;

    let content_type = mime_guess::from_path(&download.original_name)
        .first_or_octet_stream()
        .to_string();
    let disposition = content_disposition_header(&download.original_name);

    file_response(download.content, content_type, Some(disposition))
}
