//! Recursive sentence decomposition
//!
//! Applies best-split selection to a sentence and recurses into the two
//! halves under depth and length bounds. A sentence that cannot be split
//! validly is returned unchanged; no forced split is ever performed.

use crate::config::SplitConfig;
use crate::context::char_count;
use crate::selector;
use crate::types::Round;

/// Unsplittable lines longer than this get an advisory log event.
const ADVISORY_LEN: usize = 100;

/// Recursive decomposer over a validated [`SplitConfig`].
///
/// Stateless apart from the configuration; fragments borrow from the input
/// sentence and concatenate back to it minus the consumed separators.
#[derive(Debug, Clone)]
pub struct Decomposer {
    config: SplitConfig,
}

impl Decomposer {
    /// Create a decomposer from a validated configuration.
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Break a sentence into display fragments, in order.
    pub fn decompose<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        self.decompose_at(sentence, 0)
    }

    fn decompose_at<'a>(&self, sentence: &'a str, depth: usize) -> Vec<&'a str> {
        if depth >= self.config.max_depth
            || char_count(sentence) < self.config.min_recursive_length
        {
            return vec![sentence];
        }
        if !self.should_split(sentence) {
            return vec![sentence];
        }

        let Some(decision) = selector::select_best(sentence, self.config.max_degradation_round)
        else {
            // Graceful degradation: leave the line for human attention.
            if char_count(sentence) > ADVISORY_LEN {
                tracing::warn!(
                    len = char_count(sentence),
                    "no usable split point after all rounds; leaving long line intact"
                );
            }
            return vec![sentence];
        };

        let (left, right) = decision.cut.split(sentence);

        // Post-hoc guard: never let a split strand a near-empty fragment.
        let min_part = decision.round.min_part_chars();
        if char_count(left.trim()) < min_part || char_count(right.trim()) < min_part {
            return vec![sentence];
        }

        let mut fragments = Vec::new();
        for part in [left, right] {
            if char_count(part) >= self.config.min_recursive_length {
                fragments.extend(self.decompose_at(part, depth + 1));
            } else {
                fragments.push(part);
            }
        }
        fragments
    }

    /// Whether a sentence is worth handing to the selector at all.
    ///
    /// True when the strictest scan already finds a candidate, or under the
    /// fallback rule: some non-terminal comma leaves enough material on both
    /// sides to justify trying the relaxation rounds.
    fn should_split(&self, sentence: &str) -> bool {
        if char_count(sentence) < self.config.min_recursive_length {
            return false;
        }
        if !crate::scanner::scan(sentence, Round::FIRST).is_empty() {
            return true;
        }
        sentence.match_indices(',').any(|(pos, _)| {
            let before = sentence[..pos].trim();
            let after = sentence[pos + 1..].trim();
            char_count(after) > 10 && char_count(before) >= 20 && char_count(after) >= 20
        })
    }
}

impl Default for Decomposer {
    fn default() -> Self {
        Self::new(SplitConfig::default())
    }
}
