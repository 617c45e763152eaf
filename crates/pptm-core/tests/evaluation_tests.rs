//! Integration tests for the evaluation harness

use proptest::prelude::*;
use pptm_core::{
    Adversary, BlindSpotDecider, Configuration, ConfigurationEnumerator, Decider, Decision,
    EvaluationHarness, HarnessConfig, Mode, Outcome, RandomizedDecider, ScriptedChoice,
    SeededChoice, TargetedAdversary,
};

fn configuration_from_bits(bits: &[bool]) -> Configuration {
    let modes = bits
        .iter()
        .map(|&second| if second { Mode::TargetSecond } else { Mode::TargetFirst })
        .collect();
    Configuration::new(modes).unwrap()
}

#[test]
fn test_perfect_accuracy_for_every_bound() {
    for max_length in 1..=10u32 {
        let config = HarnessConfig::new().with_max_length(max_length);
        let mut harness = EvaluationHarness::new(config).unwrap();
        let report = harness.run().unwrap();

        let expected_total = (1u64 << (max_length + 1)) - 2;
        assert_eq!(report.tally.total(), expected_total, "bound {}", max_length);
        assert_eq!(report.tally.correct(), report.tally.total(), "bound {}", max_length);

        for length_tally in &report.by_length {
            assert_eq!(length_tally.tally.total(), 1u64 << length_tally.length);
            assert!(length_tally.tally.is_perfect());
        }
    }
}

#[test]
fn test_soundness_across_enumeration() {
    for max_length in 1..=5u32 {
        for seed in [0u64, 1, 42, u64::MAX] {
            let mut decider = RandomizedDecider::canonical(SeededChoice::from_seed(seed));
            let enumerator = ConfigurationEnumerator::new(max_length).unwrap();

            for configuration in &enumerator {
                let verdict = decider.decide(&TargetedAdversary, &configuration).unwrap();
                assert_eq!(verdict.outcome, configuration.last().outcome());
            }
        }
    }
}

#[test]
fn test_worst_case_alternation_over_enumeration() {
    // An alternating script never draws the same decider twice in a row
    let enumerator = ConfigurationEnumerator::new(4).unwrap();
    for start in [0usize, 1] {
        let mut decider = RandomizedDecider::canonical(ScriptedChoice::new(vec![start, 1 - start]));
        for configuration in &enumerator {
            let verdict = decider.decide(&TargetedAdversary, &configuration).unwrap();
            assert!(verdict.attempts <= 2);
            assert_eq!(verdict.outcome, TargetedAdversary.evaluate(&configuration));
        }
    }
}

#[test]
fn test_concrete_length_one_scenario() {
    let enumerator = ConfigurationEnumerator::new(1).unwrap();
    let configurations: Vec<_> = enumerator.iter().collect();
    assert_eq!(
        configurations,
        vec![
            Configuration::single(Mode::TargetFirst),
            Configuration::single(Mode::TargetSecond),
        ]
    );

    assert_eq!(TargetedAdversary.evaluate(&configurations[0]), Outcome::Halts);

    let mut decider = RandomizedDecider::canonical(SeededChoice::from_entropy());
    let verdict = decider.decide(&TargetedAdversary, &configurations[0]).unwrap();
    assert_eq!(verdict.outcome, Outcome::Halts);

    let mut harness = EvaluationHarness::new(HarnessConfig::new().with_max_length(1)).unwrap();
    assert_eq!(harness.run().unwrap().tally.to_string(), "Correct: 2/2");
}

#[test]
fn test_run_is_repeatable_with_seed() {
    let config = HarnessConfig::new().with_max_length(6).with_seed(1234);

    let first = EvaluationHarness::new(config.clone()).unwrap().run().unwrap();
    let second = EvaluationHarness::new(config).unwrap().run().unwrap();

    assert_eq!(first.tally, second.tally);
    assert_eq!(first.attempts, second.attempts);
    assert_ne!(first.run_id, second.run_id);
}

proptest! {
    #[test]
    fn prop_composite_matches_last_mode(
        bits in prop::collection::vec(any::<bool>(), 1..24),
        seed in any::<u64>(),
    ) {
        let configuration = configuration_from_bits(&bits);
        let mut decider = RandomizedDecider::canonical(SeededChoice::from_seed(seed));

        let verdict = decider.decide(&TargetedAdversary, &configuration).unwrap();
        prop_assert_eq!(verdict.outcome, configuration.last().outcome());
        prop_assert_eq!(verdict.attempts, verdict.abstentions + 1);
    }

    #[test]
    fn prop_sub_decider_abstains_only_on_blind_spot(
        bits in prop::collection::vec(any::<bool>(), 1..24),
    ) {
        let configuration = configuration_from_bits(&bits);

        for decider in BlindSpotDecider::pair() {
            let decision = decider.decide(&TargetedAdversary, &configuration);
            if configuration.last() == decider.blind_spot {
                prop_assert_eq!(decision, Decision::CannotDecide);
            } else {
                prop_assert_eq!(decision, Decision::from(TargetedAdversary.evaluate(&configuration)));
            }
        }
    }

    #[test]
    fn prop_harness_is_perfect_for_any_seed(seed in any::<u64>(), max_length in 1u32..=6) {
        let config = HarnessConfig::new().with_max_length(max_length).with_seed(seed);
        let report = EvaluationHarness::new(config).unwrap().run().unwrap();
        prop_assert!(report.tally.is_perfect());
        prop_assert_eq!(report.tally.total(), (1u64 << (max_length + 1)) - 2);
    }
}
