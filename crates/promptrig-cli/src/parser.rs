//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the promptrig bridge.
#[derive(Parser)]
#[command(name = "promptrig")]
#[command(about = "Run prompts against local ollama models and record the results")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}
