//! File-backed document store with atomic replace.

use crate::domain::Document;
use crate::store::{DocumentStore, StoreError, StoreResult};
use log::debug;
use std::fs;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores the document as a single JSON file.
///
/// Saves write to a temporary file in the destination directory and
/// atomically rename into place, so a crashed writer can never leave a
/// half-written document visible to a concurrent loader.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file path. The file itself
    /// is created lazily on first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> StoreResult<Document> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // First contact: persist an empty document so later
                // loads never hit a missing file.
                let document = Document::new();
                self.save(&document)?;
                debug!("initialized empty document at {}", self.path.display());
                return Ok(document);
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let document: Document =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            "loaded {} topics / {} notes from {}",
            document.topics().len(),
            document.note_count(),
            self.path.display()
        );
        Ok(document)
    }

    fn save(&self, document: &Document) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(document).map_err(StoreError::Encode)?;

        let parent = self.parent_dir();
        fs::create_dir_all(parent).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;

        // The temp file lives next to the destination so the rename
        // stays on one filesystem and remains atomic.
        let mut temp = NamedTempFile::new_in(parent).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;

        temp.write_all(&bytes)
            .map_err(|source| StoreError::WriteFailed {
                path: self.path.clone(),
                source,
            })?;

        temp.persist(&self.path)
            .map_err(|e| StoreError::WriteFailed {
                path: self.path.clone(),
                source: e.error,
            })?;

        debug!(
            "persisted {} notes ({} bytes) to {}",
            document.note_count(),
            bytes.len(),
            self.path.display()
        );
        Ok(())
    }
}
