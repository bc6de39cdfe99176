//! Request handlers.

pub mod file;
pub mod item;

pub use file::*;
pub use item::*;

use crate::file::FileStore;
use crate::item::{ItemRepository, ItemService};

/// Application state shared across handlers.
#[derive(Debug)]
pub struct AppState {
    /// Storage for uploaded files.
    pub file_store: FileStore,
    /// Registered items.
    pub items: ItemRepository,
}

impl AppState {
    /// Create a new application state with an empty item repository.
    pub fn new(file_store: FileStore) -> Self {
        Self {
            file_store,
            items: ItemRepository::new(),
        }
    }

    /// Item service over this state's store and repository.
    pub fn item_service(&self) -> ItemService<'_> {
        ItemService::new(&self.file_store, &self.items)
    }
}
