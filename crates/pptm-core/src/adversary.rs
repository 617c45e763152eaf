//! Adversaries under evaluation
//!
//! An adversary encodes, in its configuration, which deterministic decider it
//! is currently tailored to defeat. The configuration is passed explicitly on
//! every evaluation rather than bound to the adversary.

use crate::configuration::Configuration;
use crate::mode::Outcome;

/// A program whose halting behavior deciders try to classify
pub trait Adversary {
    /// Short identifier used in logs
    fn name(&self) -> &str {
        "adversary"
    }

    /// Run the adversary under `configuration` and report what it does
    fn evaluate(&self, configuration: &Configuration) -> Outcome;
}

impl<A: Adversary + ?Sized> Adversary for &A {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn evaluate(&self, configuration: &Configuration) -> Outcome {
        (**self).evaluate(configuration)
    }
}

/// The canonical adversary: its outcome is a fixed function of the last mode
/// (`target-1` halts, `target-2` does not).
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetedAdversary;

impl Adversary for TargetedAdversary {
    fn name(&self) -> &str {
        "targeted"
    }

    fn evaluate(&self, configuration: &Configuration) -> Outcome {
        configuration.last().outcome()
    }
}
