//! Item records.

use serde::Serialize;

use crate::file::{StoredFile, UploadedFile};

/// A registered product with its stored attachment and images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Identifier assigned by the repository. `None` until saved.
    pub id: Option<u64>,
    /// Item name.
    pub item_name: String,
    /// Single attachment.
    pub attach_file: Option<StoredFile>,
    /// Images in upload order.
    pub image_files: Vec<StoredFile>,
}

impl Item {
    /// Create an item that has not been saved yet.
    pub fn new(
        item_name: impl Into<String>,
        attach_file: Option<StoredFile>,
        image_files: Vec<StoredFile>,
    ) -> Self {
        Self {
            id: None,
            item_name: item_name.into(),
            attach_file,
            image_files,
        }
    }
}

/// Submitted item form data.
#[derive(Debug, Clone, Default)]
pub struct ItemForm {
    /// Item name.
    pub item_name: String,
    /// Attachment field, if one was sent.
    pub attach_file: Option<UploadedFile>,
    /// Image fields, in the order they were sent.
    pub image_files: Vec<UploadedFile>,
}

impl ItemForm {
    /// Create a form with a name and no files.
    pub fn new(item_name: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            ..Default::default()
        }
    }

    /// Set the attachment.
    pub fn with_attach_file(mut self, file: UploadedFile) -> Self {
        self.attach_file = Some(file);
        self
    }

    /// Append an image.
    pub fn with_image_file(mut self, file: UploadedFile) -> Self {
        self.image_files.push(file);
        self
    }
}
