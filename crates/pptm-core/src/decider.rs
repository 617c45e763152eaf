//! Deterministic sub-deciders

use serde::{Deserialize, Serialize};

use crate::adversary::Adversary;
use crate::configuration::Configuration;
use crate::mode::{Decision, Mode};

/// A procedure classifying an adversary as halting or not
pub trait Decider {
    /// Decider name
    fn name(&self) -> &str;

    /// The mode this decider abstains on, if any
    fn blind_spot(&self) -> Option<Mode> {
        None
    }

    /// Classify `adversary` running under `configuration`
    fn decide(&self, adversary: &dyn Adversary, configuration: &Configuration) -> Decision;
}

/// A deterministic decider with a single blind spot.
///
/// When the adversary's last mode equals the blind spot it abstains without
/// running the adversary; otherwise it runs it and reports the outcome verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindSpotDecider {
    pub name: String,
    pub blind_spot: Mode,
}

impl BlindSpotDecider {
    pub fn new(name: &str, blind_spot: Mode) -> Self {
        Self {
            name: name.to_string(),
            blind_spot,
        }
    }

    /// The two canonical deciders with complementary blind spots
    pub fn pair() -> [BlindSpotDecider; 2] {
        [
            Self::new("decider-1", Mode::TargetFirst),
            Self::new("decider-2", Mode::TargetSecond),
        ]
    }

    pub fn is_blind_to(&self, configuration: &Configuration) -> bool {
        configuration.last() == self.blind_spot
    }
}

impl Decider for BlindSpotDecider {
    fn name(&self) -> &str {
        &self.name
    }

    fn blind_spot(&self) -> Option<Mode> {
        Some(self.blind_spot)
    }

    fn decide(&self, adversary: &dyn Adversary, configuration: &Configuration) -> Decision {
        if self.is_blind_to(configuration) {
            return Decision::CannotDecide;
        }
        adversary.evaluate(configuration).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adversary::TargetedAdversary;
    use crate::mode::Outcome;
    use std::cell::Cell;

    /// Counts evaluations so abstention can be shown not to run the adversary
    struct CountingAdversary {
        calls: Cell<u32>,
    }

    impl Adversary for CountingAdversary {
        fn evaluate(&self, configuration: &Configuration) -> Outcome {
            self.calls.set(self.calls.get() + 1);
            configuration.last().outcome()
        }
    }

    #[test]
    fn test_pair_has_distinct_blind_spots() {
        let [first, second] = BlindSpotDecider::pair();
        assert_ne!(first.blind_spot, second.blind_spot);
        assert_eq!(first.name(), "decider-1");
        assert_eq!(second.name(), "decider-2");
    }

    #[test]
    fn test_abstains_on_blind_spot() {
        let [first, second] = BlindSpotDecider::pair();
        let config = Configuration::single(Mode::TargetFirst);

        assert_eq!(first.decide(&TargetedAdversary, &config), Decision::CannotDecide);
        assert_eq!(second.decide(&TargetedAdversary, &config), Decision::Halts);
    }

    #[test]
    fn test_reports_adversary_outcome() {
        let [first, _] = BlindSpotDecider::pair();
        let config = Configuration::new(vec![Mode::TargetFirst, Mode::TargetSecond]).unwrap();
        assert_eq!(first.decide(&TargetedAdversary, &config), Decision::DoesNotHalt);
    }

    #[test]
    fn test_abstention_skips_evaluation() {
        let adversary = CountingAdversary { calls: Cell::new(0) };
        let decider = BlindSpotDecider::new("blind", Mode::TargetSecond);

        decider.decide(&adversary, &Configuration::single(Mode::TargetSecond));
        assert_eq!(adversary.calls.get(), 0);

        decider.decide(&adversary, &Configuration::single(Mode::TargetFirst));
        assert_eq!(adversary.calls.get(), 1);
    }
}
