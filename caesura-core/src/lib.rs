//! Split-point discovery and recursive sentence decomposition
//!
//! This crate breaks a single already-punctuated sentence that is too long
//! for subtitle display into shorter, grammatically sensible lines, without
//! altering any character of the original text other than consuming
//! whitespace exactly at the chosen break points.
//!
//! The pipeline has four stages:
//! - the [`scanner`] finds every syntactically plausible break position,
//!   each tagged with a kind and a raw priority;
//! - the [`validity`] filter decides, per relaxation round, whether a
//!   candidate is usable and where the cut actually lands;
//! - the [`selector`] runs both across a five-round constraint-relaxation
//!   schedule and picks the best accepted candidate;
//! - the [`Decomposer`] recurses into the two halves under depth and
//!   length bounds.
//!
//! A sentence that cannot be split validly after every configured round is
//! returned unchanged; the engine never forces a low-quality cut.
//!
//! # Example
//!
//! ```rust
//! use caesura_core::{Decomposer, SplitConfig};
//!
//! let decomposer = Decomposer::new(SplitConfig::default());
//! let lines = decomposer.decompose(
//!     "We finished the earlier work quickly, however the next phase \
//!      requires much more attention and care.",
//! );
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines[0], "We finished the earlier work quickly,");
//! ```

pub mod config;
pub mod context;
pub mod decomposer;
pub mod error;
pub mod scanner;
pub mod selector;
pub mod types;
pub mod validity;
pub mod vocabulary;

pub use config::SplitConfig;
pub use decomposer::Decomposer;
pub use error::ConfigError;
pub use scanner::{scan, CandidateList};
pub use selector::select_best;
pub use types::{CutPoint, Round, SplitCandidate, SplitDecision, SplitKind};
