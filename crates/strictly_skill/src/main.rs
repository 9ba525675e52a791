//! Strictly Skill - Unified CLI
//!
//! Local host for the guess-the-number skill handler.

#![warn(missing_docs)]

mod cli;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_skill::{Console, Skill, SkillConfig};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = SkillConfig::load(cli.config.as_deref())?;
    let skill = Skill::new(config);

    match cli.command {
        Command::Handle { event, pretty } => run_handle(&skill, &event, pretty),
        Command::Play => run_play(skill),
    }
}

/// Handle one event from a file or stdin
#[instrument(skip(skill), fields(event = %event.display()))]
fn run_handle(skill: &Skill, event: &Path, pretty: bool) -> Result<()> {
    let json = if event == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read event from stdin")?;
        buf
    } else {
        std::fs::read_to_string(event)
            .with_context(|| format!("Failed to read event file {}", event.display()))?
    };

    let value: serde_json::Value = serde_json::from_str(&json).context("Event is not valid JSON")?;

    match skill.handle_value(value)? {
        Some(envelope) => {
            let out = if pretty {
                serde_json::to_string_pretty(&envelope)?
            } else {
                serde_json::to_string(&envelope)?
            };
            println!("{out}");
        }
        None => info!("Request expects no response"),
    }

    Ok(())
}

/// Run the interactive console
#[instrument(skip(skill))]
fn run_play(skill: Skill) -> Result<()> {
    info!("Starting console host");
    let mut console = Console::new(skill);
    console.run(std::io::stdin().lock(), std::io::stdout().lock())?;
    Ok(())
}

/// Install the stderr tracing subscriber
#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,strictly_skill=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
