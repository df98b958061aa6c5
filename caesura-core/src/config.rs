//! Decomposition configuration

use crate::error::{ConfigError, Result};
use crate::types::Round;

/// Validated configuration for [`crate::Decomposer`].
///
/// Construction is the only place a configuration error can surface; once a
/// `SplitConfig` exists, every processing call is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    /// Sentences at or above this character count are eligible for
    /// splitting and recursion.
    pub min_recursive_length: usize,
    /// Recursion ceiling.
    pub max_depth: usize,
    /// Most permissive relaxation round the selector may reach.
    pub max_degradation_round: Round,
}

impl SplitConfig {
    /// Default eligibility threshold, in characters.
    pub const DEFAULT_MIN_RECURSIVE_LENGTH: usize = 70;
    /// Default recursion ceiling.
    pub const DEFAULT_MAX_DEPTH: usize = 8;

    /// Build a validated configuration.
    pub fn new(
        min_recursive_length: usize,
        max_depth: usize,
        max_degradation_round: u8,
    ) -> Result<Self> {
        if min_recursive_length == 0 {
            return Err(ConfigError::MinRecursiveLength);
        }
        if max_depth == 0 {
            return Err(ConfigError::MaxDepth);
        }
        Ok(Self {
            min_recursive_length,
            max_depth,
            max_degradation_round: Round::new(max_degradation_round)?,
        })
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            min_recursive_length: Self::DEFAULT_MIN_RECURSIVE_LENGTH,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_degradation_round: Round::LAST,
        }
    }
}
