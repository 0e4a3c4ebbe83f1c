//! Root container of all topics and notes.

use crate::domain::{Note, Topic};
use serde::{Deserialize, Serialize};

/// The single root container of all topics and notes.
///
/// Topics keep document order (order of first appearance) and their
/// names are unique within a document: adding a note under an existing
/// name appends to that topic, adding under an unseen name creates the
/// topic at the end. One document exists per deployment; it is loaded
/// whole at the start of every operation and persisted whole at the end
/// of every mutating operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    topics: Vec<Topic>,
}

impl Document {
    /// Creates an empty document with no topics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the topics in document order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Looks up a topic by exact, case-sensitive name.
    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name() == name)
    }

    /// Appends a note under the named topic, creating the topic on
    /// first use.
    pub fn add_note(&mut self, topic: &str, note: Note) {
        self.ensure_topic(topic).push(note);
    }

    /// Removes every note from every topic, returning how many were
    /// removed. Topic containers remain behind, now empty.
    pub fn clear_notes(&mut self) -> usize {
        self.topics.iter_mut().map(Topic::clear).sum()
    }

    /// Returns the total number of notes across all topics.
    pub fn note_count(&self) -> usize {
        self.topics.iter().map(|t| t.notes().len()).sum()
    }

    /// Scans every note in every topic for a case-insensitive substring
    /// match against the note text.
    ///
    /// Results pair each matching note with its owning topic's name, in
    /// document order for topics and insertion order within a topic.
    pub fn search(&self, keyword: &str) -> Vec<(&str, &Note)> {
        self.topics
            .iter()
            .flat_map(|topic| {
                topic
                    .notes()
                    .iter()
                    .filter(|note| note.text_contains(keyword))
                    .map(move |note| (topic.name(), note))
            })
            .collect()
    }

    fn ensure_topic(&mut self, name: &str) -> &mut Topic {
        if let Some(idx) = self.topics.iter().position(|t| t.name() == name) {
            &mut self.topics[idx]
        } else {
            self.topics.push(Topic::new(name));
            self.topics.last_mut().expect("topic was just pushed")
        }
    }
}
