//! File storage for itembox.
//!
//! Uploaded files are copied flat into one directory under a UUID-based name:
//! ```text
//! {base_path}/
//! ├── 0b6f2a8e-2d7c-4c5e-9a43-5d1f0e7b9c21.png
//! ├── 7d3c9a10-8f4b-4b8e-a1c2-3e4f5a6b7c8d.pdf
//! └── ...
//! ```
//! No metadata is written next to the files; the item repository holds it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::upload::{StoredFile, UploadedFile};
use crate::{ItemboxError, Result};

/// File store that copies uploads into the storage directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Base directory for stored files.
    base_path: PathBuf,
}

impl FileStore {
    /// Create a new FileStore with the given base path.
    ///
    /// The base directory will be created if it doesn't exist.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)?;

        Ok(Self { base_path })
    }

    /// Get the base path of this store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the full path for a stored name.
    ///
    /// Pure composition of the base directory and the name; the file is not
    /// required to exist.
    pub fn full_path(&self, stored_name: &str) -> PathBuf {
        self.base_path.join(stored_name)
    }

    /// Copy one upload into storage.
    ///
    /// Returns `None` without touching the disk when the upload is empty.
    pub fn store_file(&self, upload: &UploadedFile) -> Result<Option<StoredFile>> {
        if upload.is_empty() {
            return Ok(None);
        }

        let stored_name = Self::create_stored_name(&upload.file_name);
        fs::write(self.full_path(&stored_name), &upload.content)?;

        tracing::debug!(
            original_name = %upload.file_name,
            stored_name = %stored_name,
            size = upload.content.len(),
            "stored upload"
        );

        Ok(Some(StoredFile::new(upload.file_name.clone(), stored_name)))
    }

    /// Copy several uploads into storage, in order.
    ///
    /// Empty uploads are skipped. The first failure aborts the remaining uploads;
    /// files written before it stay on disk.
    pub fn store_files(&self, uploads: &[UploadedFile]) -> Result<Vec<StoredFile>> {
        let mut stored = Vec::with_capacity(uploads.len());
        for upload in uploads {
            if let Some(file) = self.store_file(upload)? {
                stored.push(file);
            }
        }
        Ok(stored)
    }

    /// Load the content of a stored file.
    ///
    /// # Errors
    ///
    /// * `InvalidPath` if `stored_name` is not a single plain filename
    /// * `NotFound` if no such file exists
    pub fn load(&self, stored_name: &str) -> Result<Vec<u8>> {
        Self::validate_stored_name(stored_name)?;
        let file_path = self.full_path(stored_name);

        match fs::read(&file_path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ItemboxError::NotFound(format!("File {stored_name}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Reject names that would escape the storage directory or address a directory.
    fn validate_stored_name(stored_name: &str) -> Result<()> {
        let malformed = stored_name.is_empty()
            || stored_name == "."
            || stored_name == ".."
            || stored_name.contains(['/', '\\', '\0']);

        if malformed {
            return Err(ItemboxError::InvalidPath(stored_name.to_string()));
        }
        Ok(())
    }

    /// Generate a new `<uuid>.<ext>` name for an original filename.
    ///
    /// Originals without an extension get the bare UUID.
    pub fn create_stored_name(original_name: &str) -> String {
        let uuid = Uuid::new_v4();
        match Self::extract_extension(original_name) {
            "" => uuid.to_string(),
            ext => format!("{uuid}.{ext}"),
        }
    }

    /// Extract the extension: everything after the last '.' of the final path component.
    ///
    /// Returns an empty string when there is no '.'.
    fn extract_extension(original_name: &str) -> &str {
        let file_name = original_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(original_name);

        file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_store() -> (TempDir, FileStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path()).unwrap();
        (temp_dir, store)
    }

    fn dir_entries(store: &FileStore) -> usize {
        fs::read_dir(store.base_path()).unwrap().count()
    }

    #[test]
    fn test_new_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let storage_path = temp_dir.path().join("uploads").join("items");

        assert!(!storage_path.exists());

        let store = FileStore::new(&storage_path).unwrap();

        assert!(storage_path.is_dir());
        assert_eq!(store.base_path(), storage_path);
    }

    #[test]
    fn test_store_file_keeps_content_and_extension() {
        let (_temp_dir, store) = setup_store();
        let upload = UploadedFile::new("spec.pdf", b"%PDF-1.7 body".to_vec());

        let stored = store.store_file(&upload).unwrap().unwrap();

        assert_eq!(stored.original_name, "spec.pdf");
        assert!(stored.stored_name.ends_with(".pdf"));
        assert_ne!(stored.stored_name, "spec.pdf");

        let on_disk = fs::read(store.full_path(&stored.stored_name)).unwrap();
        assert_eq!(on_disk, upload.content);
    }

    #[test]
    fn test_store_file_empty_is_noop() {
        let (_temp_dir, store) = setup_store();

        let stored = store.store_file(&UploadedFile::new("blank.png", Vec::new())).unwrap();

        assert!(stored.is_none());
        assert_eq!(dir_entries(&store), 0);
    }

    #[test]
    fn test_store_file_generates_unique_names() {
        let (_temp_dir, store) = setup_store();
        let upload = UploadedFile::new("a.png", b"same".to_vec());

        let first = store.store_file(&upload).unwrap().unwrap();
        let second = store.store_file(&upload).unwrap().unwrap();

        assert_ne!(first.stored_name, second.stored_name);
        assert_eq!(dir_entries(&store), 2);
    }

    #[test]
    fn test_store_file_without_extension() {
        let (_temp_dir, store) = setup_store();

        let stored = store
            .store_file(&UploadedFile::new("README", b"text".to_vec()))
            .unwrap()
            .unwrap();

        assert!(!stored.stored_name.contains('.'));
        assert!(Uuid::parse_str(&stored.stored_name).is_ok());
        assert!(store.full_path(&stored.stored_name).is_file());
    }

    #[test]
    fn test_store_file_unicode_original_name() {
        let (_temp_dir, store) = setup_store();

        let stored = store
            .store_file(&UploadedFile::new("보고서.pdf", b"report".to_vec()))
            .unwrap()
            .unwrap();

        assert_eq!(stored.original_name, "보고서.pdf");
        assert!(stored.stored_name.ends_with(".pdf"));
        assert!(stored.stored_name.is_ascii());
    }

    #[test]
    fn test_store_file_write_failure() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("gone")).unwrap();
        fs::remove_dir(store.base_path()).unwrap();

        let result = store.store_file(&UploadedFile::new("a.png", b"png".to_vec()));

        assert!(matches!(result, Err(ItemboxError::Io(_))));
    }

    #[test]
    fn test_store_files_skips_empty_and_keeps_order() {
        let (_temp_dir, store) = setup_store();
        let uploads = vec![
            UploadedFile::new("a.png", b"first".to_vec()),
            UploadedFile::new("", Vec::new()),
            UploadedFile::new("b.jpg", b"second".to_vec()),
            UploadedFile::new("c.gif", Vec::new()),
            UploadedFile::new("d.webp", b"third".to_vec()),
        ];

        let stored = store.store_files(&uploads).unwrap();

        let originals: Vec<_> = stored.iter().map(|f| f.original_name.as_str()).collect();
        assert_eq!(originals, vec!["a.png", "b.jpg", "d.webp"]);
        assert_eq!(dir_entries(&store), 3);

        assert_eq!(store.load(&stored[1].stored_name).unwrap(), b"second");
    }

    #[test]
    fn test_store_files_empty_input() {
        let (_temp_dir, store) = setup_store();

        assert!(store.store_files(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_full_path() {
        let (_temp_dir, store) = setup_store();

        let stored_name = "0b6f2a8e-2d7c-4c5e-9a43-5d1f0e7b9c21.png";
        let path = store.full_path(stored_name);

        assert_eq!(path, store.base_path().join(stored_name));
        assert!(!path.exists());
    }

    #[test]
    fn test_load_not_found() {
        let (_temp_dir, store) = setup_store();

        let result = store.load("0b6f2a8e-2d7c-4c5e-9a43-5d1f0e7b9c21.png");

        assert!(matches!(result, Err(ItemboxError::NotFound(_))));
    }

    #[test]
    fn test_load_rejects_malformed_names() {
        let (_temp_dir, store) = setup_store();

        for name in ["", ".", "..", "../etc/passwd", "sub/file.png", "..\\boot.ini"] {
            assert!(
                matches!(store.load(name), Err(ItemboxError::InvalidPath(_))),
                "expected InvalidPath for {name:?}"
            );
        }
    }

    #[test]
    fn test_binary_content() {
        let (_temp_dir, store) = setup_store();
        let content: Vec<u8> = (0..=255).collect();

        let stored = store
            .store_file(&UploadedFile::new("binary.bin", content.clone()))
            .unwrap()
            .unwrap();

        assert_eq!(store.load(&stored.stored_name).unwrap(), content);
    }

    #[test]
    fn test_extract_extension() {
        assert_eq!(FileStore::extract_extension("test.txt"), "txt");
        assert_eq!(FileStore::extract_extension("document.PDF"), "PDF");
        assert_eq!(FileStore::extract_extension("file.tar.gz"), "gz");
        assert_eq!(FileStore::extract_extension(".hidden"), "hidden");
        assert_eq!(FileStore::extract_extension("no_ext"), "");
        assert_eq!(FileStore::extract_extension("trailing."), "");
        assert_eq!(FileStore::extract_extension(""), "");
        assert_eq!(FileStore::extract_extension("C:\\photos\\cat.jpeg"), "jpeg");
        assert_eq!(FileStore::extract_extension("dir.d/plain"), "");
    }

    #[test]
    fn test_create_stored_name() {
        let name1 = FileStore::create_stored_name("test.txt");
        let name2 = FileStore::create_stored_name("test.txt");

        assert_ne!(name1, name2);
        assert!(name1.ends_with(".txt"));

        let (uuid, ext) = name1.rsplit_once('.').unwrap();
        assert!(Uuid::parse_str(uuid).is_ok());
        assert_eq!(ext, "txt");
    }
}
