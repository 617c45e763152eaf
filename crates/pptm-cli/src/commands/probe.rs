//! Probe command - Evaluate a single configuration
//!
//! Usage:
//! ```bash
//! pptm probe target-1,target-2
//! pptm probe 1,1,2 --seed 3
//! ```

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use pptm_core::{Configuration, EvaluationHarness};

use super::harness_config;

/// Arguments for the probe command
#[derive(Args)]
pub struct ProbeArgs {
    /// Comma-separated modes, e.g. `target-1,target-2` or `1,2`
    #[arg(value_name = "CONFIGURATION")]
    configuration: String,

    /// Seed for sub-decider draws
    #[arg(long, short = 's', value_name = "SEED")]
    seed: Option<u64>,

    /// Give up after this many draws
    #[arg(long, value_name = "K")]
    max_attempts: Option<u32>,
}

/// Run the probe command
pub fn run(args: ProbeArgs) -> Result<()> {
    let configuration: Configuration = args
        .configuration
        .parse()
        .with_context(|| format!("Invalid configuration: {}", args.configuration))?;

    let config = harness_config(None, args.seed, args.max_attempts);
    tracing::debug!(?config, "Resolved harness configuration");
    let mut harness =
        EvaluationHarness::new(config).context("Failed to set up evaluation harness")?;

    let probe = harness
        .probe(&configuration)
        .with_context(|| format!("Probe of {} failed", configuration))?;

    println!("{} {}", "Configuration:".dimmed(), probe.configuration);
    println!("{} {}", "Target:".dimmed(), probe.configuration.last().tag().cyan());
    println!("{} {}", "Expected:".dimmed(), probe.expected);
    println!(
        "{} {} (by {}, {} draw{})",
        "Decided:".dimmed(),
        probe.verdict.outcome,
        probe.verdict.decided_by.green(),
        probe.verdict.attempts,
        if probe.verdict.attempts == 1 { "" } else { "s" }
    );

    if probe.correct {
        crate::print_success("Composite decider answered correctly");
    } else {
        crate::print_warning("Composite decider was defeated");
    }

    Ok(())
}
