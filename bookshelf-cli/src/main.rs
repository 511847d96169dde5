//! Bookshelf CLI - terminal front end for the personal book library

mod commands;
mod terminal;

use anyhow::{Context, Result};
use bookshelf_core::{BookInput, LibraryConfig, YearInput};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate capacity argument (must be at least 1)
fn parse_capacity(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("capacity must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Maximum number of books on the shelf (overrides config and environment)
    #[arg(long, global = true, value_parser = parse_capacity)]
    capacity: Option<usize>,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive library session
    Session {
        /// Read interactions from a file instead of stdin
        #[arg(long)]
        script: Option<PathBuf>,

        /// JSON array of books to shelve before the session starts
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Validate a book entry without shelving it
    Check {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        genre: Option<String>,

        #[arg(long)]
        year: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Defaults, then the config file, then the environment, then the command line
fn load_config(path: Option<&Path>, capacity: Option<usize>) -> Result<LibraryConfig> {
    let mut config = match path {
        Some(path) => LibraryConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => LibraryConfig::default(),
    }
    .with_env()
    .context("Invalid environment configuration")?;

    if let Some(capacity) = capacity {
        config.capacity = capacity;
    }
    config.validate()?;
    tracing::debug!("Using {:?}", config);
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookshelf_cli=debug,bookshelf_core=debug"
    } else {
        "bookshelf_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Session { script, seed } => {
            let config = load_config(cli.config.as_deref(), cli.capacity)?;
            commands::session(config, script.as_deref(), seed.as_deref())
        }

        Commands::Check {
            title,
            author,
            description,
            genre,
            year,
            json,
        } => {
            let input = BookInput {
                title,
                author,
                description,
                genre,
                year: year.map(YearInput::Text),
            };
            commands::check(input, json)
        }
    }
}
