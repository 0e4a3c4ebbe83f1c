//! jotter - topic-organized notes backed by a single document file

pub mod cli;
pub mod coordinator;
pub mod domain;
pub mod enrich;
pub mod service;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_add, handle_clear, handle_get, handle_search, handle_wiki},
};
use service::NoteService;
use store::FileStore;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let store = FileStore::new(config.store_path(cli.store.as_ref()));
    let service = NoteService::new(store);

    match &cli.command {
        Command::Add(args) => handle_add(args, &service),
        Command::Get(args) => handle_get(args, &service),
        Command::Search(args) => handle_search(args, &service),
        Command::Wiki(args) => handle_wiki(args, &service, config.wiki_endpoint()),
        Command::Clear(args) => handle_clear(args, &service),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Maps `-v` counts onto the log filter; RUST_LOG still wins.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}
