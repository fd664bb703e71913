//! CLI argument definitions, configuration, and the interactive shell.

pub mod config;
pub mod shell;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// keeper - single-user notes with live search and obfuscated storage
#[derive(Parser, Debug)]
#[command(name = "keeper", version, about, long_about = None)]
pub struct Cli {
    /// Note store file (overrides config file)
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
