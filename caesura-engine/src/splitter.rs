//! Splitter entry point
//!
//! Wires the engine configuration, input abstraction, and core decomposer
//! together into the public processing surface.

use caesura_core::Decomposer;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::input::Input;

/// Aggregate statistics for one processing call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitStats {
    /// Lines handed to the splitter after input normalization
    pub original_line_count: usize,
    /// Lines produced
    pub final_line_count: usize,
    /// Net number of cuts applied across all lines
    pub split_count: usize,
    /// Output lines per input line; 0 when the input was empty
    pub split_ratio: f64,
}

impl SplitStats {
    fn from_counts(original: usize, final_count: usize) -> Self {
        Self {
            original_line_count: original,
            final_line_count: final_count,
            split_count: final_count - original,
            split_ratio: if original > 0 {
                final_count as f64 / original as f64
            } else {
                0.0
            },
        }
    }
}

/// Processing result: the split lines in order, plus statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    /// Split lines, in input order
    pub lines: Vec<String>,
    /// Aggregate statistics for this call
    pub stats: SplitStats,
}

/// Main entry point for subtitle line splitting
///
/// Holds a validated configuration; every processing call after construction
/// is infallible.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    config: EngineConfig,
    decomposer: Decomposer,
}

impl SentenceSplitter {
    /// Create a splitter with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a splitter with a custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        let decomposer = Decomposer::new(config.validate()?);
        Ok(Self { config, decomposer })
    }

    /// Start building a splitter with per-field overrides
    pub fn builder() -> SentenceSplitterBuilder {
        SentenceSplitterBuilder::new()
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Split a single line into display fragments
    pub fn split(&self, line: &str) -> Vec<String> {
        let line = line.trim();
        if line.is_empty() {
            return Vec::new();
        }
        self.decomposer
            .decompose(line)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Process input and return split lines with statistics
    pub fn process(&self, input: Input) -> Output {
        let lines: Vec<String> = input
            .into_lines()
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect();
        let original = lines.len();

        let mut out = Vec::with_capacity(original);
        for line in &lines {
            out.extend(self.split(line));
        }

        let stats = SplitStats::from_counts(original, out.len());
        Output { lines: out, stats }
    }

    /// Process an optional text block, preserving the missing-value sentinel
    ///
    /// Pipelines that thread `None` through to mark absent cues get it back
    /// untouched; blank text yields no lines at all.
    pub fn process_optional(&self, text: Option<&str>) -> Vec<Option<String>> {
        match text {
            None => vec![None],
            Some(text) if text.trim().is_empty() => Vec::new(),
            Some(text) => self
                .process(Input::from_text(text))
                .lines
                .into_iter()
                .map(Some)
                .collect(),
        }
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new().expect("default configuration is valid")
    }
}

/// Builder for [`SentenceSplitter`] with per-field overrides
#[derive(Debug, Clone, Default)]
pub struct SentenceSplitterBuilder {
    config: EngineConfig,
}

impl SentenceSplitterBuilder {
    /// Start from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the character count at which lines become split candidates
    pub fn min_recursive_length(mut self, chars: usize) -> Self {
        self.config.min_recursive_length = chars;
        self
    }

    /// Set the recursion ceiling
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Set the most permissive relaxation round (1..=5)
    pub fn max_degradation_round(mut self, round: u8) -> Self {
        self.config.max_degradation_round = round;
        self
    }

    /// Validate the configuration and build the splitter
    pub fn build(self) -> Result<SentenceSplitter> {
        SentenceSplitter::with_config(self.config)
    }
}
