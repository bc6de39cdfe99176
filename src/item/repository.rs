//! In-memory item repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::model::Item;

/// Sequence counter and items, guarded together.
#[derive(Debug, Default)]
struct ItemStore {
    /// Last assigned id.
    sequence: u64,
    items: HashMap<u64, Item>,
}

/// Process-lifetime item storage keyed by an auto-incrementing id.
///
/// # Example
///
/// ```
/// use itembox::item::{Item, ItemRepository};
///
/// let repo = ItemRepository::new();
/// let saved = repo.save(Item::new("Widget", None, vec![]));
/// assert_eq!(saved.id, Some(1));
/// assert_eq!(repo.find_by_id(1), Some(saved));
/// assert_eq!(repo.find_by_id(2), None);
/// ```
#[derive(Debug, Default)]
pub struct ItemRepository {
    store: RwLock<ItemStore>,
}

impl ItemRepository {
    /// Create an empty repository. The first saved item gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next id to `item` and store it.
    ///
    /// The increment and the insert happen under one write lock, so concurrent
    /// callers always receive distinct ids.
    pub fn save(&self, mut item: Item) -> Item {
        let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);

        store.sequence += 1;
        let id = store.sequence;
        item.id = Some(id);
        store.items.insert(id, item.clone());

        item
    }

    /// Find an item by id.
    pub fn find_by_id(&self, id: u64) -> Option<Item> {
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);
        store.items.get(&id).cloned()
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);
        store.items.len()
    }

    /// Whether no item has been saved yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
