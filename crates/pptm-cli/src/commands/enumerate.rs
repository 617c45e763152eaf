//! Enumerate command - List adversary configurations
//!
//! Usage:
//! ```bash
//! pptm enumerate --max-length 3
//! pptm enumerate --max-length 40 --count
//! ```

use anyhow::{Context, Result};
use clap::Args;

use pptm_core::ConfigurationEnumerator;

use super::harness_config;

/// Arguments for the enumerate command
#[derive(Args)]
pub struct EnumerateArgs {
    /// Longest configuration to list [env: PPTM_MAX_LENGTH, default: 5]
    #[arg(long, short = 'n', value_name = "N")]
    max_length: Option<u32>,

    /// Only print how many configurations there are
    #[arg(long)]
    count: bool,
}

/// Run the enumerate command
pub fn run(args: EnumerateArgs) -> Result<()> {
    let max_length = harness_config(args.max_length, None, None).max_length;
    let enumerator = ConfigurationEnumerator::new(max_length)
        .with_context(|| format!("Cannot enumerate up to length {}", max_length))?;

    if args.count {
        println!("{}", enumerator.count());
        return Ok(());
    }

    for (index, configuration) in enumerator.iter().enumerate() {
        println!("{:>6}  {}", index + 1, configuration);
    }

    Ok(())
}
