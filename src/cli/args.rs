//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Confab - Chat with an OpenAI-compatible model from your terminal
#[derive(Parser, Debug)]
#[command(name = "confab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the configuration file.
    /// Defaults to ./confab.json, then config.json in the user configuration directory.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory where conversation transcripts are stored.
    /// Overrides the "store_dir" configuration value.
    #[arg(short = 'd', long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Model to request completions from.
    /// Overrides the "model" configuration value.
    #[arg(short, long)]
    pub model: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List saved conversations and exit
    List,
}
