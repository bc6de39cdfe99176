//! Web module for itembox.
//!
//! Serves the item registration form, item pages, inline images and
//! attachment downloads over HTTP.

pub mod error;
pub mod form;
pub mod handlers;
pub mod router;
pub mod server;
pub mod templates;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
