//! Item page handlers.

use axum::{
    extract::{Multipart, Path, State},
    response::{Html, Redirect},
};
use std::sync::Arc;
use tera::Context;

use crate::web::error::ApiError;
use crate::web::form::read_item_form;
use crate::web::handlers::AppState;
use crate::web::templates;

/// GET /items/new - Show the registration form.
pub async fn new_item_form() -> Result<Html<String>, ApiError> {
    let html = templates::render("item/form.html", &Context::new())?;
    Ok(Html(html))
}

/// POST /items/new - Register an item and redirect to its page.
///
/// Request body: multipart/form-data with `itemName`, an optional
/// `attachFile` and any number of `imageFiles`.
pub async fn save_item(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Redirect, ApiError> {
    let form = read_item_form(multipart).await?;

    let item = state.item_service().register(&form)?;
    let item_id = item
        .id
        .ok_or_else(|| ApiError::internal("Item was saved without an id"))?;

    Ok(Redirect::to(&format!("/items/{item_id}")))
}

/// GET /items/:id - Show a registered item.
pub async fn show_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<u64>,
) -> Result<Html<String>, ApiError> {
    let item = state
        .item_service()
        .find(item_id)
        .ok_or_else(|| ApiError::not_found(format!("Item {item_id} not found")))?;

    let mut context = Context::new();
    context.insert("item", &item);

    let html = templates::render("item/view.html", &context)?;
    Ok(Html(html))
}
