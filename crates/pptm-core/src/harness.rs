//! Exhaustive evaluation of a randomized decider against every adversary
//! configuration up to a bound.
//!
//! For each configuration the harness asks the composite decider for an
//! answer, then runs the adversary itself to obtain the self-reported
//! outcome, and tallies agreement.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::adversary::{Adversary, TargetedAdversary};
use crate::config::HarnessConfig;
use crate::configuration::Configuration;
use crate::enumerator::ConfigurationEnumerator;
use crate::error::{PptmError, Result};
use crate::mode::Outcome;
use crate::randomized::{ChoiceSource, RandomizedDecider, RandomizedVerdict, RetryPolicy, SeededChoice};

/// Running count of correct answers. `correct <= total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TallyFields")]
pub struct Tally {
    correct: u64,
    total: u64,
}

#[derive(Deserialize)]
struct TallyFields {
    correct: u64,
    total: u64,
}

impl TryFrom<TallyFields> for Tally {
    type Error = String;

    fn try_from(fields: TallyFields) -> std::result::Result<Self, Self::Error> {
        if fields.correct > fields.total {
            return Err(format!(
                "correct count {} exceeds total {}",
                fields.correct, fields.total
            ));
        }
        Ok(Self {
            correct: fields.correct,
            total: fields.total,
        })
    }
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one evaluation
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    pub fn correct(&self) -> u64 {
        self.correct
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Fraction answered correctly (0.0 when nothing was evaluated)
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }

    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Correct: {}/{}", self.correct, self.total)
    }
}

/// Tally restricted to configurations of one length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthTally {
    pub length: u32,
    pub tally: Tally,
}

/// Retry-loop statistics. These depend on the random source; outcomes do not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttemptStats {
    /// Draws across all configurations
    pub total_attempts: u64,
    /// Draws that ended in abstention
    pub abstentions: u64,
    /// Longest retry run for a single configuration
    pub max_attempts: u32,
}

impl AttemptStats {
    pub fn record(&mut self, verdict: &RandomizedVerdict) {
        self.total_attempts += u64::from(verdict.attempts);
        self.abstentions += u64::from(verdict.abstentions);
        self.max_attempts = self.max_attempts.max(verdict.attempts);
    }

    /// Mean draws per decided configuration
    pub fn mean_attempts(&self, decided: u64) -> f64 {
        if decided == 0 {
            return 0.0;
        }
        self.total_attempts as f64 / decided as f64
    }
}

/// Result of evaluating a single configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub configuration: Configuration,
    /// The adversary's own report
    pub expected: Outcome,
    pub verdict: RandomizedVerdict,
    pub correct: bool,
}

/// Summary of a full evaluation run
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub run_id: Uuid,
    pub max_length: u32,
    /// Configured seed; `None` means the draws were seeded from entropy
    pub seed: Option<u64>,
    pub tally: Tally,
    pub by_length: Vec<LengthTally>,
    pub attempts: AttemptStats,
}

impl EvaluationReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Drives the enumerator, the composite decider and the adversary
pub struct EvaluationHarness<A: Adversary = TargetedAdversary, C: ChoiceSource = SeededChoice> {
    config: HarnessConfig,
    adversary: A,
    decider: RandomizedDecider<C>,
}

impl EvaluationHarness {
    /// Canonical setup: [`TargetedAdversary`] against the two blind-spot
    /// deciders, drawn with a [`SeededChoice`] built from `config.seed`
    pub fn new(config: HarnessConfig) -> Result<Self> {
        let source = SeededChoice::new(config.seed);
        Self::with_parts(config, TargetedAdversary, RandomizedDecider::canonical(source))
    }
}

impl<A: Adversary, C: ChoiceSource> EvaluationHarness<A, C> {
    /// Assemble a harness from custom parts. The retry policy is taken from
    /// `config.max_attempts`; `config.max_length` is only checked by [`run`](Self::run).
    pub fn with_parts(
        config: HarnessConfig,
        adversary: A,
        decider: RandomizedDecider<C>,
    ) -> Result<Self> {
        config.validate_attempts()?;
        let policy = RetryPolicy::from_limit(config.max_attempts);
        let decider = decider.with_policy(policy);

        if !decider.covers_every_mode() {
            if policy == RetryPolicy::Unbounded {
                return Err(PptmError::InvalidConfig(
                    "some mode is a blind spot of every decider; an unbounded retry loop would never terminate"
                        .to_string(),
                ));
            }
            warn!(
                deciders = ?decider.decider_names(),
                "Deciders share a blind spot; some configurations will exhaust the attempt bound"
            );
        }

        Ok(Self {
            config,
            adversary,
            decider,
        })
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn decider(&self) -> &RandomizedDecider<C> {
        &self.decider
    }

    /// Evaluate one configuration: decide, then ask the adversary for its own answer
    pub fn probe(&mut self, configuration: &Configuration) -> Result<ProbeResult> {
        let verdict = self.decider.decide(&self.adversary, configuration)?;
        let expected = self.adversary.evaluate(configuration);
        let correct = verdict.outcome == expected;

        Ok(ProbeResult {
            configuration: configuration.clone(),
            expected,
            verdict,
            correct,
        })
    }

    /// Evaluate every configuration up to the configured bound
    pub fn run(&mut self) -> Result<EvaluationReport> {
        let enumerator = ConfigurationEnumerator::new(self.config.max_length)?;
        let run_id = Uuid::new_v4();
        let max_length = enumerator.max_length();

        info!(
            %run_id,
            max_length,
            configurations = enumerator.count(),
            adversary = self.adversary.name(),
            "Starting evaluation"
        );

        let mut tally = Tally::new();
        let mut attempts = AttemptStats::default();
        let mut by_length: Vec<LengthTally> = (1..=max_length)
            .map(|length| LengthTally {
                length,
                tally: Tally::new(),
            })
            .collect();

        for configuration in enumerator.iter() {
            let probe = self.probe(&configuration)?;

            tally.record(probe.correct);
            by_length[configuration.len() - 1].tally.record(probe.correct);
            attempts.record(&probe.verdict);

            metrics::counter!("pptm_configurations_evaluated_total").increment(1);
            if probe.correct {
                metrics::counter!("pptm_correct_total").increment(1);
            } else {
                warn!(
                    %configuration,
                    expected = %probe.expected,
                    decided = %probe.verdict.outcome,
                    "Composite decider answered incorrectly"
                );
            }

            debug!(
                %configuration,
                outcome = %probe.verdict.outcome,
                attempts = probe.verdict.attempts,
                decided_by = %probe.verdict.decided_by,
                "Configuration evaluated"
            );
        }

        metrics::gauge!("pptm_last_run_accuracy").set(tally.accuracy());
        info!(
            %run_id,
            correct = tally.correct(),
            total = tally.total(),
            mean_attempts = attempts.mean_attempts(tally.total()),
            "Evaluation complete"
        );

        Ok(EvaluationReport {
            run_id,
            max_length,
            seed: self.config.seed,
            tally,
            by_length,
            attempts,
        })
    }
}
