//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// jotter - topic-organized notes backed by a single document file
#[derive(Parser, Debug)]
#[command(name = "jotter", version, about, long_about = None)]
pub struct Cli {
    /// Store file (overrides config file)
    #[arg(short = 's', long, global = true)]
    pub store: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a note under a topic
    Add(AddArgs),

    /// Show all notes of a topic
    Get(GetArgs),

    /// Search note text for a keyword
    Search(SearchArgs),

    /// Append a Wikipedia reference note to a topic
    Wiki(WikiArgs),

    /// Delete every note from every topic
    Clear(ClearArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Topic the note belongs to
    pub topic: String,

    /// Note name
    pub name: String,

    /// Note text
    pub text: String,
}

/// Arguments for the `get` command
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Topic to retrieve notes for
    pub topic: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Keyword to look for in note text
    pub keyword: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `wiki` command
#[derive(Parser, Debug)]
pub struct WikiArgs {
    /// Topic to append the reference to
    pub topic: String,

    /// Term to look up on Wikipedia
    pub search_term: String,
}

/// Arguments for the `clear` command
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
