//! Item service for itembox.
//!
//! Sequences the file store and the item repository:
//! - Registration: store attachment, store images, save the item
//! - Retrieval of items, images and attachments

use crate::file::FileStore;
use crate::{ItemboxError, Result};

use super::model::{Item, ItemForm};
use super::repository::ItemRepository;

/// Result of an attachment download.
#[derive(Debug)]
pub struct AttachmentDownload {
    /// Filename the uploader supplied.
    pub original_name: String,
    /// File content.
    pub content: Vec<u8>,
}

/// Item service for registering and reading items.
pub struct ItemService<'a> {
    store: &'a FileStore,
    repository: &'a ItemRepository,
}

impl<'a> ItemService<'a> {
    /// Create a new ItemService.
    pub fn new(store: &'a FileStore, repository: &'a ItemRepository) -> Self {
        Self { store, repository }
    }

    /// Register a submitted item.
    ///
    /// Files are stored before the item is saved. If storing fails nothing is
    /// saved, but files already written are left on disk.
    pub fn register(&self, form: &ItemForm) -> Result<Item> {
        let attach_file = match &form.attach_file {
            Some(upload) => self.store.store_file(upload)?,
            None => None,
        };
        let image_files = self.store.store_files(&form.image_files)?;

        let item = self
            .repository
            .save(Item::new(form.item_name.clone(), attach_file, image_files));

        tracing::info!(
            item_id = item.id,
            item_name = %item.item_name,
            images = item.image_files.len(),
            has_attachment = item.attach_file.is_some(),
            "item registered"
        );

        Ok(item)
    }

    /// Find an item by id.
    pub fn find(&self, id: u64) -> Option<Item> {
        self.repository.find_by_id(id)
    }

    /// Load an image by its stored name.
    pub fn image(&self, stored_name: &str) -> Result<Vec<u8>> {
        self.store.load(stored_name)
    }

    /// Load the attachment of an item.
    ///
    /// # Errors
    ///
    /// `NotFound` if the item does not exist, has no attachment, or the
    /// attachment file is gone from disk.
    pub fn attachment(&self, item_id: u64) -> Result<AttachmentDownload> {
        let item = self
            .repository
            .find_by_id(item_id)
            .ok_or_else(|| ItemboxError::NotFound(format!("Item {item_id}")))?;

        let attach = item
            .attach_file
            .ok_or_else(|| ItemboxError::NotFound(format!("Attachment of item {item_id}")))?;

        let content = self.store.load(&attach.stored_name)?;
        tracing::info!(upload_file_name = %attach.original_name, "download file");

        Ok(AttachmentDownload {
            original_name: attach.original_name,
            content,
        })
    }
}
