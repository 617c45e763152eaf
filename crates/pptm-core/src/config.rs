//! Configuration management for evaluation runs
//!
//! Values come from defaults, then environment variables, then explicit
//! overrides (the CLI applies its flags on top of [`HarnessConfig::from_env`]).

use serde::{Deserialize, Serialize};
use std::env;

use crate::enumerator::MAX_SUPPORTED_LENGTH;
use crate::error::{PptmError, Result};

/// Default enumeration bound
pub const DEFAULT_MAX_LENGTH: u32 = 5;

/// Evaluation harness configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Longest configuration to enumerate (env: PPTM_MAX_LENGTH)
    pub max_length: u32,
    /// Seed for the sub-decider draws; `None` seeds from entropy (env: PPTM_SEED)
    pub seed: Option<u64>,
    /// Attempt bound for the retry loop; `None` is unbounded (env: PPTM_MAX_ATTEMPTS)
    pub max_attempts: Option<u32>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            seed: None,
            max_attempts: None,
        }
    }
}

impl HarnessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment, ignoring unparseable values
    pub fn from_env() -> Self {
        Self {
            max_length: env::var("PPTM_MAX_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_LENGTH),
            seed: env::var("PPTM_SEED").ok().and_then(|v| v.parse().ok()),
            max_attempts: env::var("PPTM_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Check every bound before a full run
    pub fn validate(&self) -> Result<()> {
        if self.max_length == 0 || self.max_length > MAX_SUPPORTED_LENGTH {
            return Err(PptmError::InvalidMaxLength {
                requested: self.max_length,
                max: MAX_SUPPORTED_LENGTH,
            });
        }
        self.validate_attempts()
    }

    /// Check the retry bound alone; evaluating one configuration ignores `max_length`
    pub fn validate_attempts(&self) -> Result<()> {
        if self.max_attempts == Some(0) {
            return Err(PptmError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
