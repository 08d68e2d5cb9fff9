//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{inspect, scan};

#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about = "Tally tasks, habits, and workouts from plaintext daily notes")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory of notes and report per-date statistics
    Scan {
        /// Directory to scan (defaults to the configured notes dir, then cwd)
        dir: Option<PathBuf>,

        /// Year whose tag dates are accepted (defaults to config, then the current year)
        #[arg(long, env = "TALLY_YEAR")]
        year: Option<String>,

        /// Note file extensions, without dots
        #[arg(long, value_delimiter = ',')]
        extensions: Vec<String>,
    },

    /// Show how a single note resolves its dates and tasks
    Inspect {
        /// Note file to inspect
        file: PathBuf,

        /// Year whose tag dates are accepted (defaults to config, then the current year)
        #[arg(long, env = "TALLY_YEAR")]
        year: Option<String>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("tally starting");

    match cli.command {
        Commands::Scan {
            dir,
            year,
            extensions,
        } => scan::run(&output, dir.as_deref(), year.as_deref(), &extensions),

        Commands::Inspect { file, year } => inspect::run(&output, &file, year.as_deref()),
    }
}
