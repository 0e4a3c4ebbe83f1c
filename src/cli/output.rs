//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub name: String,
    pub text: String,
    pub timestamp: String,
}

/// A search hit in listing output.
#[derive(Debug, Serialize)]
pub struct SearchListing {
    pub topic: String,
    pub name: String,
    pub text: String,
    pub timestamp: String,
}

/// Result of a clear operation.
#[derive(Debug, Serialize)]
pub struct ClearListing {
    pub removed: usize,
}
