//! In-memory document store.

use crate::domain::Document;
use crate::store::{DocumentStore, StoreResult};
use parking_lot::Mutex;

/// Holds the document in memory behind a mutex.
///
/// The injectable stand-in for [`FileStore`](crate::store::FileStore):
/// service tests run against it without touching the filesystem, and it
/// doubles as an ephemeral store for embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Document>,
}

impl MemoryStore {
    /// Creates a store holding an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a document.
    pub fn with_document(document: Document) -> Self {
        Self {
            document: Mutex::new(document),
        }
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> StoreResult<Document> {
        Ok(self.document.lock().clone())
    }

    fn save(&self, document: &Document) -> StoreResult<()> {
        *self.document.lock() = document.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Note;
    use chrono::Local;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_store_loads_an_empty_document() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), Document::new());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        let mut doc = Document::new();
        doc.add_note("math", Note::new("n1", "algebra", Local::now()));

        store.save(&doc).unwrap();
        assert_eq!(store.load().unwrap(), doc);
    }

    #[test]
    fn load_returns_a_snapshot_not_a_live_view() {
        let store = MemoryStore::new();
        let mut snapshot = store.load().unwrap();
        snapshot.add_note("math", Note::new("n1", "algebra", Local::now()));

        // Mutating the snapshot does not touch the stored document.
        assert_eq!(store.load().unwrap(), Document::new());
    }
}
