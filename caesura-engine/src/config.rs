//! Configuration types for the engine

use caesura_core::SplitConfig;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Engine configuration
///
/// Plain data that can be loaded from settings files; it is validated into a
/// [`SplitConfig`] when a splitter is built, so a bad value fails at
/// construction rather than mid-stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Lines at or above this character count are candidates for splitting
    pub min_recursive_length: usize,
    /// Recursion ceiling for nested splits
    pub max_depth: usize,
    /// Most permissive constraint-relaxation round the search may reach (1..=5)
    pub max_degradation_round: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_recursive_length: SplitConfig::DEFAULT_MIN_RECURSIVE_LENGTH,
            max_depth: SplitConfig::DEFAULT_MAX_DEPTH,
            max_degradation_round: 5,
        }
    }
}

impl EngineConfig {
    /// Create a strict configuration that never relaxes past the first round
    ///
    /// Only the highest-quality cuts are taken; long lines that need a
    /// relaxed round to split are left intact.
    pub fn strict() -> Self {
        Self {
            max_degradation_round: 1,
            ..Self::default()
        }
    }

    /// Create an eager configuration for very narrow displays
    ///
    /// Lowers the eligibility threshold so shorter lines are still broken
    /// up, with the full relaxation schedule available.
    pub fn eager() -> Self {
        Self {
            min_recursive_length: 40,
            ..Self::default()
        }
    }

    /// Validate into a core [`SplitConfig`]
    pub fn validate(&self) -> Result<SplitConfig> {
        Ok(SplitConfig::new(
            self.min_recursive_length,
            self.max_depth,
            self.max_degradation_round,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        let config = EngineConfig::default();
        let split = config.validate().unwrap();
        assert_eq!(split.min_recursive_length, 70);
        assert_eq!(split.max_depth, 8);
    }

    #[test]
    fn test_presets() {
        assert_eq!(EngineConfig::strict().max_degradation_round, 1);
        assert_eq!(EngineConfig::eager().min_recursive_length, 40);
        assert!(EngineConfig::strict().validate().is_ok());
        assert!(EngineConfig::eager().validate().is_ok());
    }

    #[test]
    fn test_invalid_round_rejected() {
        let config = EngineConfig {
            max_degradation_round: 6,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
