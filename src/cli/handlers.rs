//! Command handlers for the CLI.

use anyhow::{Context, Result};

use crate::cli::output::{ClearListing, NoteListing, Output, OutputFormat, SearchListing};
use crate::cli::{AddArgs, ClearArgs, GetArgs, SearchArgs, WikiArgs};
use crate::domain::Note;
use crate::enrich::WikipediaLookup;
use crate::service::{NoteService, SearchMatch, ServiceError};
use crate::store::FileStore;

pub fn handle_add(args: &AddArgs, service: &NoteService<FileStore>) -> Result<()> {
    let note = service
        .add_note(&args.topic, &args.name, &args.text)
        .context("failed to add note")?;

    println!(
        "Added \"{}\" to topic \"{}\" at {}",
        note.name(),
        args.topic.trim(),
        note.timestamp()
    );
    Ok(())
}

pub fn handle_get(args: &GetArgs, service: &NoteService<FileStore>) -> Result<()> {
    let notes = service
        .get_notes(&args.topic)
        .with_context(|| format!("failed to get notes for topic: {}", args.topic))?;

    match args.format {
        OutputFormat::Human => match notes {
            None => println!("Topic \"{}\" not found.", args.topic),
            Some(notes) if notes.is_empty() => {
                println!("Topic \"{}\" has no notes.", args.topic)
            }
            Some(notes) => {
                for note in &notes {
                    println!("{note}");
                }
                println!();
                println!("{} note(s)", notes.len());
            }
        },
        OutputFormat::Json => {
            let listings = notes.map(|notes| notes.iter().map(note_listing).collect::<Vec<_>>());
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }
    Ok(())
}

pub fn handle_search(args: &SearchArgs, service: &NoteService<FileStore>) -> Result<()> {
    let matches = service
        .search_notes(&args.keyword)
        .with_context(|| format!("search failed for keyword: {}", args.keyword))?;

    match args.format {
        OutputFormat::Human => match matches {
            None => println!("No notes found containing keyword \"{}\".", args.keyword),
            Some(matches) => {
                for m in &matches {
                    println!("[{}] {}", m.topic, m.note);
                }
                println!();
                println!("{} match(es)", matches.len());
            }
        },
        OutputFormat::Json => {
            let listings =
                matches.map(|matches| matches.iter().map(search_listing).collect::<Vec<_>>());
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }
    Ok(())
}

pub fn handle_wiki(
    args: &WikiArgs,
    service: &NoteService<FileStore>,
    endpoint: &str,
) -> Result<()> {
    let lookup =
        WikipediaLookup::with_endpoint(endpoint).context("failed to build lookup client")?;

    match service.add_enrichment(&args.topic, &args.search_term, &lookup) {
        Ok(note) => {
            println!("Added \"{}\" to topic \"{}\"", note.name(), args.topic.trim());
            Ok(())
        }
        // A term without an article is an ordinary outcome, not a failure.
        Err(ServiceError::NoResultFound { term }) => {
            println!("No Wikipedia article found for \"{term}\".");
            Ok(())
        }
        Err(err) => Err(err).context("failed to add Wikipedia reference"),
    }
}

pub fn handle_clear(args: &ClearArgs, service: &NoteService<FileStore>) -> Result<()> {
    let removed = service
        .delete_all_notes()
        .context("failed to delete notes")?;

    match args.format {
        OutputFormat::Human => println!("Deleted {removed} note(s)."),
        OutputFormat::Json => {
            let output = Output::new(ClearListing { removed });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn note_listing(note: &Note) -> NoteListing {
    NoteListing {
        name: note.name().to_string(),
        text: note.text().to_string(),
        timestamp: note.timestamp().to_string(),
    }
}

fn search_listing(m: &SearchMatch) -> SearchListing {
    SearchListing {
        topic: m.topic.clone(),
        name: m.note.name().to_string(),
        text: m.note.text().to_string(),
        timestamp: m.note.timestamp().to_string(),
    }
}
