use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snapdeck_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "snapdeck")]
#[command(author, version, about = "A terminal section-deck viewer with animated snap scrolling")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deck file to view (shorthand for `run`)
    deck: Option<PathBuf>,

    /// Section id to open at (the address-fragment analog)
    #[arg(short = 's', long = "section")]
    section: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// View a deck (the default)
    Run {
        /// Deck file; the built-in sample when omitted
        deck: Option<PathBuf>,
        /// Section id to open at
        #[arg(short = 's', long)]
        section: Option<String>,
    },
    /// List the sections of a deck
    Sections {
        /// Deck file; the built-in sample when omitted
        deck: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    match cli.command {
        Some(Commands::Run { deck, section }) => commands::run::run(config, deck, section),
        None => commands::run::run(config, cli.deck, cli.section),
        Some(Commands::Sections { deck }) => commands::sections::run(deck),
    }
}
