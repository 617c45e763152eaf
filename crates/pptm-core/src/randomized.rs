//! Randomized composite decider
//!
//! [`RandomizedDecider`] draws one sub-decider uniformly at random on every
//! attempt and retries until one of them commits to an answer. As long as no
//! mode is a blind spot of every sub-decider, each attempt succeeds with
//! probability at least `1 / deciders.len()`, so the loop terminates with
//! probability 1 even without an attempt bound.
//!
//! The random source is injected through [`ChoiceSource`]:
//! - [`SeededChoice`] — `StdRng`, seeded explicitly or from OS entropy
//! - [`ScriptedChoice`] — replays a fixed index script, for deterministic tests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::adversary::Adversary;
use crate::configuration::Configuration;
use crate::decider::{BlindSpotDecider, Decider};
use crate::error::{PptmError, Result};
use crate::mode::{Mode, Outcome};

/// Source of sub-decider draws
pub trait ChoiceSource {
    /// Return an index in `0..len`. Callers guarantee `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Pseudo-random draws backed by [`StdRng`]
#[derive(Debug, Clone)]
pub struct SeededChoice {
    rng: StdRng,
    seed: Option<u64>,
}

impl SeededChoice {
    /// Reproducible draws from a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Non-reproducible draws seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Seeded if `seed` is set, otherwise from entropy
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl ChoiceSource for SeededChoice {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
/// Indices larger than the decider count wrap around.
#[derive(Debug, Clone)]
pub struct ScriptedChoice {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedChoice {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// 0, 1, 0, 1, ...
    pub fn alternating() -> Self {
        Self::new(vec![0, 1])
    }

    /// Always draw the same index
    pub fn constant(index: usize) -> Self {
        Self::new(vec![index])
    }

    /// Number of draws made so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl ChoiceSource for ScriptedChoice {
    fn pick(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let index = self.script[self.cursor % self.script.len()] % len;
        self.cursor += 1;
        index
    }
}

/// How many attempts the composite may make before giving up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryPolicy {
    /// Retry until a decider commits
    #[default]
    Unbounded,
    /// Fail with [`PptmError::AttemptsExhausted`] after `max_attempts` abstentions
    Bounded { max_attempts: u32 },
}

impl RetryPolicy {
    pub fn from_limit(limit: Option<u32>) -> Self {
        match limit {
            Some(max_attempts) => RetryPolicy::Bounded { max_attempts },
            None => RetryPolicy::Unbounded,
        }
    }

    fn allows(&self, attempts: u32) -> bool {
        match self {
            RetryPolicy::Unbounded => true,
            RetryPolicy::Bounded { max_attempts } => attempts < *max_attempts,
        }
    }
}

/// Answer of the composite decider with retry bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RandomizedVerdict {
    /// The committed outcome; abstentions are never surfaced
    pub outcome: Outcome,
    /// Draws made, including the committing one
    pub attempts: u32,
    /// Draws that ended in abstention
    pub abstentions: u32,
    /// Name of the sub-decider that committed
    pub decided_by: String,
}

/// Composite decider drawing sub-deciders at random until one commits
pub struct RandomizedDecider<C: ChoiceSource = SeededChoice> {
    deciders: Vec<Box<dyn Decider>>,
    source: C,
    policy: RetryPolicy,
}

impl<C: ChoiceSource> RandomizedDecider<C> {
    /// Create a composite over `deciders`, which must be non-empty
    pub fn new(deciders: Vec<Box<dyn Decider>>, source: C) -> Result<Self> {
        if deciders.is_empty() {
            return Err(PptmError::NoDeciders);
        }
        Ok(Self {
            deciders,
            source,
            policy: RetryPolicy::default(),
        })
    }

    /// Composite over [`BlindSpotDecider::pair`]
    pub fn canonical(source: C) -> Self {
        let deciders = BlindSpotDecider::pair()
            .into_iter()
            .map(|d| Box::new(d) as Box<dyn Decider>)
            .collect();
        Self {
            deciders,
            source,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn source(&self) -> &C {
        &self.source
    }

    pub fn decider_names(&self) -> Vec<&str> {
        self.deciders.iter().map(|d| d.name()).collect()
    }

    /// True if no mode is a blind spot of every sub-decider
    pub fn covers_every_mode(&self) -> bool {
        Mode::ALL.iter().all(|mode| {
            self.deciders
                .iter()
                .any(|d| d.blind_spot() != Some(*mode))
        })
    }

    /// Draw sub-deciders until one commits to an outcome
    pub fn decide(
        &mut self,
        adversary: &dyn Adversary,
        configuration: &Configuration,
    ) -> Result<RandomizedVerdict> {
        let mut attempts = 0u32;
        let mut abstentions = 0u32;

        while self.policy.allows(attempts) {
            let index = self.source.pick(self.deciders.len()) % self.deciders.len();
            let decider = &self.deciders[index];
            attempts = attempts.saturating_add(1);

            let decision = decider.decide(adversary, configuration);
            trace!(
                attempt = attempts,
                decider = decider.name(),
                %decision,
                "Sub-decider drawn"
            );
            metrics::counter!("pptm_decider_attempts_total").increment(1);

            match decision.outcome() {
                Some(outcome) => {
                    return Ok(RandomizedVerdict {
                        outcome,
                        attempts,
                        abstentions,
                        decided_by: decider.name().to_string(),
                    });
                }
                None => {
                    abstentions += 1;
                    metrics::counter!("pptm_decider_abstentions_total").increment(1);
                }
            }
        }

        Err(PptmError::AttemptsExhausted { attempts })
    }
}
