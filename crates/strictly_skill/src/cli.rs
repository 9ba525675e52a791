//! Command-line interface for strictly_skill.

use clap::{Parser, Subcommand};

/// Strictly Skill - guess-the-number voice skill handler
#[derive(Parser, Debug)]
#[command(name = "strictly_skill")]
#[command(about = "Guess-the-number voice skill request handler", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to environment, then built-in)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Handle a single event and print the response envelope
    Handle {
        /// Event JSON file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        event: std::path::PathBuf,

        /// Pretty-print the response envelope
        #[arg(long)]
        pretty: bool,
    },

    /// Play interactively, with this process acting as the voice host
    Play,
}
