//! itembox - item registration with file uploads
//!
//! Accepts an item name with one attachment and any number of images, copies
//! the files to local disk under generated names, keeps item records in
//! memory, and serves the item page, inline images and attachment downloads.

pub mod config;
pub mod error;
pub mod file;
pub mod item;
pub mod logging;
pub mod web;

pub use config::Config;
pub use error::{ItemboxError, Result};
pub use file::{FileStore, StoredFile, UploadedFile};
pub use item::{Item, ItemForm, ItemRepository, ItemService};
pub use web::WebServer;
