//! irquiz CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod shell;

use commands::SessionOptions;
use shell::Screen;

#[derive(Parser)]
#[command(
    name = "irquiz",
    version,
    about = "Incident-response phase trainer and quiz"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu
    Start {
        #[command(flatten)]
        options: SessionOptions,
    },

    /// Jump straight into a quiz
    Quiz {
        #[command(flatten)]
        options: SessionOptions,
    },

    /// Print phase descriptions and example activities
    Learn {
        /// Only show this phase (e.g. "containment", "lessons-learned")
        #[arg(long)]
        phase: Option<String>,

        #[command(flatten)]
        options: SessionOptions,
    },

    /// Validate a taxonomy TOML file
    Validate {
        /// Path to the taxonomy file
        #[arg(long)]
        taxonomy: PathBuf,
    },

    /// Create a starter config and a copy of the reference taxonomy
    Init,
}

fn main() {
    // RUST_LOG replaces the default filter entirely when set.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("irquiz=warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Start { options } => commands::quiz::execute(Screen::Home, options),
        Commands::Quiz { options } => commands::quiz::execute(Screen::Quiz, options),
        Commands::Learn { phase, options } => commands::learn::execute(phase, options),
        Commands::Validate { taxonomy } => commands::validate::execute(taxonomy),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
