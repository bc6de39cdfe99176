//! Item module for itembox.
//!
//! This module provides item registration and lookup:
//! - Item and form records
//! - In-memory repository with id assignment
//! - Service tying uploads to item records

mod model;
mod repository;
mod service;

pub use model::{Item, ItemForm};
pub use repository::ItemRepository;
pub use service::{AttachmentDownload, ItemService};
