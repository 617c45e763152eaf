//! Exhaustive enumeration of adversary configurations
//!
//! Lengths are produced in ascending order; within a length, configurations
//! follow lexicographic order over [`Mode::ALL`]. For a bound `N` the
//! enumeration yields `2^(N+1) - 2` configurations.

use crate::configuration::Configuration;
use crate::error::{PptmError, Result};
use crate::mode::Mode;

/// Largest bound whose configuration count still fits in a `u64`
pub const MAX_SUPPORTED_LENGTH: u32 = 62;

/// Produces every configuration of length `1..=max_length`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationEnumerator {
    max_length: u32,
}

impl ConfigurationEnumerator {
    /// Create an enumerator for the given maximum length
    pub fn new(max_length: u32) -> Result<Self> {
        if max_length == 0 || max_length > MAX_SUPPORTED_LENGTH {
            return Err(PptmError::InvalidMaxLength {
                requested: max_length,
                max: MAX_SUPPORTED_LENGTH,
            });
        }
        Ok(Self { max_length })
    }

    pub fn max_length(&self) -> u32 {
        self.max_length
    }

    /// Number of configurations of exactly `length` modes
    pub fn configurations_of_length(length: u32) -> u64 {
        1u64 << length
    }

    /// Total number of configurations, computed without enumerating
    pub fn count(&self) -> u64 {
        (1u64 << (self.max_length + 1)) - 2
    }

    /// Lazy iterator over the full enumeration. Each call starts from the beginning.
    pub fn iter(&self) -> Configurations {
        Configurations {
            max_length: self.max_length,
            length: 1,
            index: 0,
            remaining: self.count(),
        }
    }
}

impl IntoIterator for &ConfigurationEnumerator {
    type Item = Configuration;
    type IntoIter = Configurations;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`ConfigurationEnumerator::iter`]
#[derive(Debug, Clone)]
pub struct Configurations {
    max_length: u32,
    length: u32,
    /// Position within the current length; bit `length - 1 - i` selects mode `i`
    index: u64,
    remaining: u64,
}

impl Configurations {
    fn current(&self) -> Vec<Mode> {
        (0..self.length)
            .map(|pos| {
                let bit = (self.index >> (self.length - 1 - pos)) & 1;
                Mode::ALL[bit as usize]
            })
            .collect()
    }
}

impl Iterator for Configurations {
    type Item = Configuration;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let modes = self.current();

        self.remaining -= 1;
        self.index += 1;
        if self.index == ConfigurationEnumerator::configurations_of_length(self.length) {
            self.index = 0;
            self.length += 1;
        }

        debug_assert!(self.length <= self.max_length + 1);
        Some(Configuration::from_non_empty(modes))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
