//! Adversary configurations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PptmError, Result};
use crate::mode::Mode;

/// An ordered, non-empty sequence of [`Mode`]s.
///
/// The last mode is the adversary's current target; the rest only make the
/// space of emulated strategies combinatorially large.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Mode>", into = "Vec<Mode>")]
pub struct Configuration {
    modes: Vec<Mode>,
}

impl Configuration {
    /// Create a configuration, rejecting an empty sequence
    pub fn new(modes: Vec<Mode>) -> Result<Self> {
        if modes.is_empty() {
            return Err(PptmError::EmptyConfiguration);
        }
        Ok(Self { modes })
    }

    /// Construction for callers that already guarantee a non-empty sequence
    pub(crate) fn from_non_empty(modes: Vec<Mode>) -> Self {
        debug_assert!(!modes.is_empty());
        Self { modes }
    }

    /// Single-mode configuration
    pub fn single(mode: Mode) -> Self {
        Self { modes: vec![mode] }
    }

    /// The load-bearing mode
    pub fn last(&self) -> Mode {
        // Non-empty by construction
        self.modes[self.modes.len() - 1]
    }

    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl TryFrom<Vec<Mode>> for Configuration {
    type Error = PptmError;

    fn try_from(modes: Vec<Mode>) -> Result<Self> {
        Self::new(modes)
    }
}

impl From<Configuration> for Vec<Mode> {
    fn from(configuration: Configuration) -> Self {
        configuration.modes
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&str> = self.modes.iter().map(Mode::tag).collect();
        f.write_str(&tags.join(","))
    }
}

/// Parses a comma-separated list of mode tags, e.g. `target-1,target-2` or `1,2`
impl FromStr for Configuration {
    type Err = PptmError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(PptmError::EmptyConfiguration);
        }
        let modes = s
            .split(',')
            .map(Mode::from_str)
            .collect::<Result<Vec<_>>>()?;
        Self::new(modes)
    }
}
