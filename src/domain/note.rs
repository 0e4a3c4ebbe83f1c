//! Immutable note record: name, text, and an insertion timestamp.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format of the timestamp assigned to a note at insertion time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A timestamped (name, text) record belonging to a topic.
///
/// Notes are immutable once created: the timestamp is assigned from the
/// clock at insertion and never supplied by the caller. Note names are
/// not unique within a topic; duplicates accumulate.
///
/// # Examples
///
/// ```
/// use chrono::Local;
/// use jotter::domain::Note;
///
/// let note = Note::new("n1", "algebra basics", Local::now());
/// assert_eq!(note.name(), "n1");
/// assert_eq!(note.timestamp().len(), 19);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    name: String,
    text: String,
    timestamp: String,
}

impl Note {
    /// Creates a note stamped with the given creation time.
    pub fn new(
        name: impl Into<String>,
        text: impl Into<String>,
        created: DateTime<Local>,
    ) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            timestamp: created.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Returns the note's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the note's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the formatted creation timestamp.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Case-insensitive substring match against the note's text.
    pub fn text_contains(&self, keyword: &str) -> bool {
        self.text.to_lowercase().contains(&keyword.to_lowercase())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.name, self.text, self.timestamp)
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("name", &self.name)
            .field("text", &self.text)
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn new_stamps_creation_time() {
        let note = Note::new("n1", "algebra basics", fixed_time());
        assert_eq!(note.timestamp(), "2024-01-15 10:30:00");
    }

    #[test]
    fn accessors_return_fields() {
        let note = Note::new("n1", "algebra basics", fixed_time());
        assert_eq!(note.name(), "n1");
        assert_eq!(note.text(), "algebra basics");
    }

    #[test]
    fn text_contains_is_case_insensitive() {
        let note = Note::new("tower", "The Eiffel Tower", fixed_time());
        assert!(note.text_contains("eiffel"));
        assert!(note.text_contains("EIFFEL"));
        assert!(!note.text_contains("louvre"));
    }

    #[test]
    fn text_contains_matches_empty_keyword() {
        let note = Note::new("n", "anything", fixed_time());
        assert!(note.text_contains(""));
    }

    #[test]
    fn display_includes_all_fields() {
        let note = Note::new("n1", "algebra basics", fixed_time());
        assert_eq!(
            format!("{}", note),
            "n1: algebra basics (2024-01-15 10:30:00)"
        );
    }

    #[test]
    fn serde_roundtrip() {
        let note = Note::new("n1", "algebra basics", fixed_time());
        let json = serde_json::to_string(&note).unwrap();
        let parsed: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(note, parsed);
    }

    #[test]
    fn serde_preserves_field_names() {
        let note = Note::new("n1", "algebra basics", fixed_time());
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"name\""));
        assert!(json.contains("\"text\""));
        assert!(json.contains("\"timestamp\""));
    }
}
