//! Adversary modes and decision results
//!
//! - [`Mode`] — which sub-decider an adversary configuration is tailored against
//! - [`Outcome`] — what the adversary actually does when evaluated
//! - [`Decision`] — what a sub-decider reports, including abstention

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PptmError;

/// A single adversary mode tag.
///
/// Only the last mode of a [`Configuration`](crate::Configuration) affects
/// behavior; earlier positions exist to widen the enumeration space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mode {
    /// Tailored to defeat the first sub-decider
    #[serde(rename = "target-1")]
    TargetFirst,
    /// Tailored to defeat the second sub-decider
    #[serde(rename = "target-2")]
    TargetSecond,
}

impl Mode {
    /// The fixed alphabet, in enumeration index order
    pub const ALL: [Mode; 2] = [Mode::TargetFirst, Mode::TargetSecond];

    /// Canonical tag
    pub fn tag(&self) -> &'static str {
        match self {
            Mode::TargetFirst => "target-1",
            Mode::TargetSecond => "target-2",
        }
    }

    /// Position in [`Mode::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Mode::TargetFirst => 0,
            Mode::TargetSecond => 1,
        }
    }

    /// The outcome an adversary whose last mode is `self` produces
    pub fn outcome(&self) -> Outcome {
        match self {
            Mode::TargetFirst => Outcome::Halts,
            Mode::TargetSecond => Outcome::DoesNotHalt,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Mode {
    type Err = PptmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "target-1" | "1" => Ok(Mode::TargetFirst),
            "target-2" | "2" => Ok(Mode::TargetSecond),
            _ => Err(PptmError::UnrecognizedMode(s.to_string())),
        }
    }
}

/// Observable behavior of an adversary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Halts,
    DoesNotHalt,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Halts => f.write_str("Halts"),
            Outcome::DoesNotHalt => f.write_str("Doesn't halt"),
        }
    }
}

/// Result reported by a single deterministic decider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Halts,
    DoesNotHalt,
    /// The decider recognized its blind spot and abstained
    CannotDecide,
}

impl Decision {
    /// The committed outcome, or `None` on abstention
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Decision::Halts => Some(Outcome::Halts),
            Decision::DoesNotHalt => Some(Outcome::DoesNotHalt),
            Decision::CannotDecide => None,
        }
    }

    pub fn is_abstention(&self) -> bool {
        matches!(self, Decision::CannotDecide)
    }
}

impl From<Outcome> for Decision {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Halts => Decision::Halts,
            Outcome::DoesNotHalt => Decision::DoesNotHalt,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome() {
            Some(outcome) => outcome.fmt(f),
            None => f.write_str("Cannot decide"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_outcome_table() {
        assert_eq!(Mode::TargetFirst.outcome(), Outcome::Halts);
        assert_eq!(Mode::TargetSecond.outcome(), Outcome::DoesNotHalt);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("target-1".parse::<Mode>().unwrap(), Mode::TargetFirst);
        assert_eq!(" 2 ".parse::<Mode>().unwrap(), Mode::TargetSecond);
        assert_eq!("TARGET-2".parse::<Mode>().unwrap(), Mode::TargetSecond);

        let err = "target-3".parse::<Mode>().unwrap_err();
        assert!(matches!(err, PptmError::UnrecognizedMode(tag) if tag == "target-3"));

        // The error carries the input as typed
        let err = " TARGET-3".parse::<Mode>().unwrap_err();
        assert!(matches!(err, PptmError::UnrecognizedMode(tag) if tag == " TARGET-3"));

        assert!(matches!(
            "".parse::<Mode>(),
            Err(PptmError::UnrecognizedMode(tag)) if tag.is_empty()
        ));
    }

    #[test]
    fn test_alphabet_order() {
        for (i, mode) in Mode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
        }
    }

    #[test]
    fn test_decision_outcome() {
        assert_eq!(Decision::Halts.outcome(), Some(Outcome::Halts));
        assert_eq!(Decision::CannotDecide.outcome(), None);
        assert!(Decision::CannotDecide.is_abstention());
        assert_eq!(Decision::from(Outcome::DoesNotHalt), Decision::DoesNotHalt);
    }

    #[test]
    fn test_serde_tags() {
        let json = serde_json::to_string(&Mode::TargetSecond).unwrap();
        assert_eq!(json, "\"target-2\"");
        let json = serde_json::to_string(&Outcome::DoesNotHalt).unwrap();
        assert_eq!(json, "\"does_not_halt\"");
    }
}
