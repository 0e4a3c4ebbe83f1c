//! Core types: Document, Topic, Note

mod document;
mod note;
mod topic;

pub use document::Document;
pub use note::{Note, TIMESTAMP_FORMAT};
pub use topic::Topic;
