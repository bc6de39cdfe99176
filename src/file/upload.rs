//! Upload records.

use serde::Serialize;

/// A file field as received from a submission, before it is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadedFile {
    /// Filename supplied by the client. Empty when the client sent none.
    pub file_name: String,
    /// Raw file content.
    pub content: Vec<u8>,
}

impl UploadedFile {
    /// Create a new uploaded file.
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Whether the field carried no content.
    ///
    /// Browsers send an empty part for a file input left blank.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A file that has been copied into the storage directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredFile {
    /// Filename the uploader supplied. Used for display and as the download name.
    pub original_name: String,
    /// Server-generated `<uuid>.<ext>` name; the on-disk filename and lookup key.
    pub stored_name: String,
}

impl StoredFile {
    /// Create a new stored file record.
    pub fn new(original_name: impl Into<String>, stored_name: impl Into<String>) -> Self {
        Self {
            original_name: original_name.into(),
            stored_name: stored_name.into(),
        }
    }
}
