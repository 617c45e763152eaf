//! # PPTM Core
//!
//! A randomized composite decider built from two deterministic deciders,
//! evaluated against every adversary configuration up to a bound.
//!
//! Each deterministic decider has a blind spot: an adversary mode on which it
//! abstains. The adversary encodes in its configuration which decider it is
//! tailored against, but the composite draws its sub-decider at random on
//! every attempt, so no fixed configuration defeats it.
//!
//! ## Key Types
//!
//! - [`ConfigurationEnumerator`] — every configuration of length `1..=N`
//! - [`Adversary`] / [`TargetedAdversary`] — the program under evaluation
//! - [`BlindSpotDecider`] — deterministic decider with one blind spot
//! - [`RandomizedDecider`] — retries random sub-decider draws until one commits
//! - [`EvaluationHarness`] — runs the full enumeration and tallies correctness
//!
//! ## Quick Start
//!
//! ```rust
//! use pptm_core::{EvaluationHarness, HarnessConfig};
//!
//! let config = HarnessConfig::new().with_max_length(3).with_seed(7);
//! let mut harness = EvaluationHarness::new(config).unwrap();
//! let report = harness.run().unwrap();
//!
//! assert_eq!(report.tally.total(), 14);
//! assert!(report.tally.is_perfect());
//! println!("{}", report.tally); // Correct: 14/14
//! ```

pub mod adversary;
pub mod config;
pub mod configuration;
pub mod decider;
pub mod enumerator;
pub mod error;
pub mod harness;
pub mod mode;
pub mod randomized;

pub use adversary::{Adversary, TargetedAdversary};
pub use config::{HarnessConfig, DEFAULT_MAX_LENGTH};
pub use configuration::Configuration;
pub use decider::{BlindSpotDecider, Decider};
pub use enumerator::{ConfigurationEnumerator, Configurations, MAX_SUPPORTED_LENGTH};
pub use error::{PptmError, Result};
pub use harness::{AttemptStats, EvaluationHarness, EvaluationReport, LengthTally, ProbeResult, Tally};
pub use mode::{Decision, Mode, Outcome};
pub use randomized::{
    ChoiceSource, RandomizedDecider, RandomizedVerdict, RetryPolicy, ScriptedChoice, SeededChoice,
};
