//! Router configuration.

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    download_attach, download_image, new_item_form, save_item, show_item, AppState,
};

/// Create the main router.
///
/// `max_upload_bytes` caps the size of a submission body.
pub fn create_router(app_state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    let item_routes = Router::new()
        .route("/items/new", get(new_item_form).post(save_item))
        .route("/items/:id", get(show_item));

    let file_routes = Router::new()
        .route("/images/:filename", get(download_image))
        .route("/attach/:item_id", get(download_attach));

    Router::new()
        .merge(item_routes)
        .merge(file_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
