//! File storage module for itembox.
//!
//! Copies uploaded files into a server-managed directory under generated
//! UUID names and resolves those names back to paths and content.

mod storage;
mod upload;

pub use storage::FileStore;
pub use upload::{StoredFile, UploadedFile};
