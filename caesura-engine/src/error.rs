//! Layered error types
//!
//! Construction is the only failable operation in the engine; once a
//! splitter exists, every processing call is total.

use caesura_core::ConfigError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core configuration rejected
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
