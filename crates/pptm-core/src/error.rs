//! Error types for the evaluation harness

use thiserror::Error;

/// Errors that can occur while building or running an evaluation
#[derive(Debug, Error)]
pub enum PptmError {
    /// A configuration must contain at least one mode
    #[error("Configuration is empty: at least one mode is required")]
    EmptyConfiguration,

    /// A mode tag outside the two-element alphabet
    #[error("Unrecognized mode: {0:?} (expected target-1 or target-2)")]
    UnrecognizedMode(String),

    /// Enumeration bound outside the supported range
    #[error("Invalid max length {requested}: must be between 1 and {max}")]
    InvalidMaxLength { requested: u32, max: u32 },

    /// A bounded retry policy ran out before any decider committed
    #[error("No decider committed to an answer after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },

    /// A randomized decider needs at least one sub-decider to draw from
    #[error("Randomized decider has no sub-deciders")]
    NoDeciders,

    /// Invalid harness configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, PptmError>;
