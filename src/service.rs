//! Operation boundary over the document store.

use crate::coordinator::MutationCoordinator;
use crate::domain::Note;
use crate::enrich::{LookupError, ReferenceLookup};
use crate::store::{DocumentStore, StoreError};
use chrono::Local;
use log::info;
use thiserror::Error;

/// Errors surfaced by service operations.
///
/// Query misses are not errors: `get_notes` and `search_notes` return
/// `Ok(None)` when they find nothing.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required field is missing or empty. Nothing was mutated.
    #[error("missing data for field: {field}")]
    MissingField { field: &'static str },

    /// Loading or persisting the document failed. On a failed persist
    /// the in-memory mutation is discarded.
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// The external reference lookup failed. Nothing was mutated.
    #[error("reference lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// The external reference lookup had no result for the term.
    /// Nothing was mutated.
    #[error("no reference found for \"{term}\"")]
    NoResultFound { term: String },
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// A search hit: a note paired with its owning topic's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub topic: String,
    pub note: Note,
}

/// The note-taking operations exposed to front ends.
///
/// Generic over the [`DocumentStore`] so tests run against
/// [`MemoryStore`](crate::store::MemoryStore) while the binary uses
/// [`FileStore`](crate::store::FileStore). Every operation runs its
/// whole load-mutate-save cycle inside one exclusive section of the
/// [`MutationCoordinator`]; queries share the section so they never
/// observe a document mid-replacement.
pub struct NoteService<S> {
    store: S,
    coordinator: MutationCoordinator,
}

impl<S: DocumentStore> NoteService<S> {
    /// Creates a service over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            coordinator: MutationCoordinator::new(),
        }
    }

    /// Adds a note under a topic, creating the topic on first use.
    ///
    /// All three fields must be non-empty after trimming; validation
    /// happens before the exclusive section is acquired. Returns the
    /// created note with its assigned timestamp.
    pub fn add_note(&self, topic: &str, name: &str, text: &str) -> ServiceResult<Note> {
        let topic = required(topic, "topic")?;
        let name = required(name, "name")?;
        let text = required(text, "text")?;

        self.coordinator.run(|| {
            let mut document = self.store.load()?;
            let note = Note::new(name, text, Local::now());
            document.add_note(topic, note.clone());
            self.store.save(&document)?;
            info!("added note \"{name}\" under topic \"{topic}\"");
            Ok(note)
        })
    }

    /// Returns the notes of the named topic in insertion order.
    ///
    /// `Ok(None)` when the topic does not exist. A topic emptied by
    /// [`delete_all_notes`](Self::delete_all_notes) still exists and
    /// yields `Ok(Some(vec![]))`.
    pub fn get_notes(&self, topic: &str) -> ServiceResult<Option<Vec<Note>>> {
        self.coordinator.run(|| {
            let document = self.store.load()?;
            Ok(document.topic(topic).map(|t| t.notes().to_vec()))
        })
    }

    /// Returns every note whose text contains `keyword`
    /// case-insensitively, paired with its owning topic's name.
    ///
    /// Topics come in document order, notes in insertion order.
    /// `Ok(None)` when nothing matches.
    pub fn search_notes(&self, keyword: &str) -> ServiceResult<Option<Vec<SearchMatch>>> {
        self.coordinator.run(|| {
            let document = self.store.load()?;
            let matches: Vec<SearchMatch> = document
                .search(keyword)
                .into_iter()
                .map(|(topic, note)| SearchMatch {
                    topic: topic.to_string(),
                    note: note.clone(),
                })
                .collect();
            Ok((!matches.is_empty()).then_some(matches))
        })
    }

    /// Removes every note from every topic and persists, returning how
    /// many notes were removed. Topic containers remain behind, empty.
    pub fn delete_all_notes(&self) -> ServiceResult<usize> {
        self.coordinator.run(|| {
            let mut document = self.store.load()?;
            let removed = document.clear_notes();
            self.store.save(&document)?;
            info!("deleted all notes ({removed} removed)");
            Ok(removed)
        })
    }

    /// Resolves `search_term` through the supplied lookup and appends
    /// the discovered reference as a note under `topic`.
    ///
    /// The lookup resolves fully before the exclusive section is
    /// entered, so a slow or failed lookup neither blocks other
    /// operations nor leaves a partial mutation behind. A not-found or
    /// failed lookup mutates nothing.
    pub fn add_enrichment(
        &self,
        topic: &str,
        search_term: &str,
        lookup: &dyn ReferenceLookup,
    ) -> ServiceResult<Note> {
        let topic = required(topic, "topic")?;
        let term = required(search_term, "search_term")?;

        let url = lookup
            .lookup(term)?
            .ok_or_else(|| ServiceError::NoResultFound {
                term: term.to_string(),
            })?;

        let name = format!("Reference: {term}");
        let text = format!("Reference link: {url}");
        // The section is re-entrant; add_note re-acquires it below.
        self.coordinator.run(|| self.add_note(topic, &name, &text))
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ServiceError::MissingField { field })
    } else {
        Ok(trimmed)
    }
}
