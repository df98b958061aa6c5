//! Configuration error types
//!
//! Construction is the only failable operation in this crate; per-sentence
//! processing is total and never errors.

use thiserror::Error;

/// Errors raised when building a [`crate::SplitConfig`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `min_recursive_length` must be a positive character count
    #[error("min_recursive_length must be positive")]
    MinRecursiveLength,

    /// `max_depth` must be a positive recursion bound
    #[error("max_depth must be positive")]
    MaxDepth,

    /// `max_degradation_round` must stay within the relaxation schedule
    #[error("max_degradation_round must be between 1 and 5, got {0}")]
    DegradationRound(u8),
}

/// Result type for configuration operations
pub type Result<T> = core::result::Result<T, ConfigError>;
