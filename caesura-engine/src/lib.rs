//! Orchestration layer for subtitle line decomposition
//!
//! This crate wraps the [`caesura_core`] decomposer with the pieces an
//! application needs: a serializable configuration with presets, a unified
//! [`Input`] abstraction over text blocks and line lists, and a
//! [`SentenceSplitter`] entry point that reports split statistics.
//!
//! # Example
//!
//! ```rust
//! use caesura_engine::{Input, SentenceSplitter};
//!
//! let splitter = SentenceSplitter::new()?;
//! let output = splitter.process(Input::from_text(
//!     "We finished the earlier work quickly, however the next phase \
//!      requires much more attention and care.",
//! ));
//! assert_eq!(output.lines.len(), 2);
//! assert_eq!(output.stats.split_count, 1);
//! # Ok::<(), caesura_engine::EngineError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod input;
pub mod splitter;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use input::Input;
pub use splitter::{Output, SentenceSplitter, SentenceSplitterBuilder, SplitStats};
