//! Document persistence: the DocumentStore trait and its implementations.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::domain::Document;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving the document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persisted document exists but its bytes cannot be parsed.
    ///
    /// A corrupt document is surfaced, never silently replaced with an
    /// empty one.
    #[error("corrupt document at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The persisted document could not be read.
    #[error("failed to read document at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document could not be durably written.
    #[error("failed to persist document at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document could not be encoded for persistence.
    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Load/save access to the single persisted document.
///
/// The store is whole-document: `save` always replaces the entire
/// persisted representation. Implementations are injected into
/// [`NoteService`](crate::service::NoteService) rather than reached as
/// ambient state, so tests can substitute [`MemoryStore`].
pub trait DocumentStore {
    /// Reads the persisted document. When none exists yet, synthesizes
    /// and persists an empty document so subsequent loads never hit a
    /// missing-resource condition.
    fn load(&self) -> StoreResult<Document>;

    /// Serializes the entire document and durably overwrites the
    /// persisted representation.
    fn save(&self, document: &Document) -> StoreResult<()>;
}
