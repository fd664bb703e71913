//! keeper - single-user notes with live search and obfuscated storage

pub mod cli;
pub mod domain;
pub mod persist;
pub mod store;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use cli::{Cli, config::Config, shell::Shell};
use store::NoteStore;

/// Main entry point for the CLI application.
///
/// Loads the store once, runs the interactive shell over stdin, and saves
/// the authoritative list once on the way out.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let path = config.store_file(cli.file.as_ref());

    let notes = persist::load(&path)
        .with_context(|| format!("failed to load notes from {}", path.display()))?;

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let stdout = std::io::stdout();

    let mut shell = Shell::new(NoteStore::from_notes(notes), path.clone(), cli.verbose);
    shell.run(stdin.lock(), &mut stdout.lock(), interactive)?;

    persist::save(&path, shell.store().authoritative())
        .with_context(|| format!("failed to save notes to {}", path.display()))?;

    Ok(())
}
