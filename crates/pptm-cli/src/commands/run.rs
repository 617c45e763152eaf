//! Run command - Evaluate every configuration up to a bound
//!
//! Usage:
//! ```bash
//! pptm run
//! pptm run --max-length 8 --seed 42 --breakdown
//! pptm run --json
//! ```

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};

use pptm_core::{EvaluationHarness, EvaluationReport};

use super::harness_config;

/// Arguments for the run command
#[derive(Args)]
pub struct RunArgs {
    /// Longest configuration to enumerate [env: PPTM_MAX_LENGTH, default: 5]
    #[arg(long, short = 'n', value_name = "N")]
    max_length: Option<u32>,

    /// Seed for sub-decider draws; omit for a non-reproducible run [env: PPTM_SEED]
    #[arg(long, short = 's', value_name = "SEED")]
    seed: Option<u64>,

    /// Give up on a configuration after this many draws [env: PPTM_MAX_ATTEMPTS]
    #[arg(long, value_name = "K")]
    max_attempts: Option<u32>,

    /// Print the full report as JSON
    #[arg(long, conflicts_with = "breakdown")]
    json: bool,

    /// Show per-length results and retry statistics
    #[arg(long)]
    breakdown: bool,
}

/// Run the run command
pub fn run(args: RunArgs) -> Result<()> {
    let config = harness_config(args.max_length, args.seed, args.max_attempts);
    tracing::debug!(?config, "Resolved harness configuration");
    let mut harness =
        EvaluationHarness::new(config).context("Failed to set up evaluation harness")?;

    let report = harness.run().context("Evaluation failed")?;

    if args.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("{}", report.tally);

    if args.breakdown {
        print_breakdown(&report);
    }

    Ok(())
}

fn print_breakdown(report: &EvaluationReport) {
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Length").fg(Color::Cyan),
            Cell::new("Correct").fg(Color::Cyan),
            Cell::new("Total").fg(Color::Cyan),
        ]);

    for row in &report.by_length {
        let color = if row.tally.is_perfect() {
            Color::Green
        } else {
            Color::Red
        };
        table.add_row(vec![
            Cell::new(row.length),
            Cell::new(row.tally.correct()).fg(color),
            Cell::new(row.tally.total()),
        ]);
    }

    println!("{table}");
    println!();

    let stats = &report.attempts;
    println!("{}", "Retry statistics:".bold());
    println!("  {} {}", "Draws:".dimmed(), stats.total_attempts);
    println!("  {} {}", "Abstentions:".dimmed(), stats.abstentions);
    println!(
        "  {} {:.3}",
        "Mean draws per configuration:".dimmed(),
        stats.mean_attempts(report.tally.total())
    );
    println!("  {} {}", "Longest retry run:".dimmed(), stats.max_attempts);
    match report.seed {
        Some(seed) => println!("  {} {}", "Seed:".dimmed(), seed),
        None => println!("  {} {}", "Seed:".dimmed(), "entropy".yellow()),
    }
    println!("  {} {}", "Run:".dimmed(), report.run_id);
    println!();

    if report.tally.is_perfect() {
        crate::print_success("No configuration defeated the composite decider");
    } else {
        crate::print_warning("Some configurations defeated the composite decider");
    }
}
