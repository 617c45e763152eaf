//! PPTM CLI - run randomized deciders against enumerated adversaries
//!
//! # Usage
//!
//! ```bash
//! # Evaluate every configuration up to length 5
//! pptm run --max-length 5
//!
//! # Reproducible run with a per-length breakdown
//! pptm run --seed 42 --breakdown
//!
//! # Evaluate a single configuration
//! pptm probe target-1,target-2,target-1
//!
//! # List configurations in enumeration order
//! pptm enumerate --max-length 3
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

mod commands;

use commands::{enumerate, probe, run};

/// PPTM - Partially Probabilistic Turing Machine simulation
///
/// Pits a composite decider, which draws one of two deterministic deciders
/// at random on every attempt, against every adversary configuration up to a
/// bound.
#[derive(Parser)]
#[command(
    name = "pptm",
    version,
    about = "PPTM - randomized deciders against exhaustive adversaries",
    long_about = "Each deterministic decider abstains on one adversary mode.\n\n\
                  The adversary encodes which decider it targets, but the\n\
                  composite decider picks its sub-decider at random on every\n\
                  attempt, so no configuration defeats it."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every configuration up to a maximum length
    #[command(name = "run")]
    Run(run::RunArgs),

    /// Evaluate a single configuration
    #[command(name = "probe")]
    Probe(probe::ProbeArgs),

    /// List configurations in enumeration order
    #[command(name = "enumerate")]
    Enumerate(enumerate::EnumerateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Run(args) => run::run(args),
        Commands::Probe(args) => probe::run(args),
        Commands::Enumerate(args) => enumerate::run(args),
    }
}

/// Setup logging based on verbosity level
fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();
}

/// Print a success message with a checkmark
pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("{} {}", "⚠".yellow().bold(), msg);
}
