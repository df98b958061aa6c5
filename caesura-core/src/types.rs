//! Core value types for split-point discovery
//!
//! All types here are created fresh per scan and discarded when the call
//! returns; there is no cross-call state.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Classification of a split candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitKind {
    /// Non-comma punctuation (semicolon, colon, dash, ellipsis)
    Punctuation,
    /// A vocabulary conjunction matched as a whole word
    Conjunction,
    /// A comma immediately followed by a vocabulary conjunction
    CommaConjunction,
    /// A comma matched by one of the canonical comma patterns
    CommaSubordinatePattern,
    /// A comma with no recognized context
    CommaPlain,
}

/// One syntactically plausible break position, before validity filtering.
///
/// `position` is a byte offset into the scanned sentence, always on a
/// character boundary, with `0 < position < sentence.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitCandidate {
    /// Byte offset of the punctuation mark or conjunction start
    pub position: usize,
    /// What kind of break this is
    pub kind: SplitKind,
    /// Raw priority, boosts included; higher wins
    pub priority: u8,
    /// The matched vocabulary word, mark, or pattern name (diagnostics only)
    pub label: &'static str,
}

/// Resolved cut boundaries for an accepted split.
///
/// The left fragment ends at `left_end` and the right fragment starts at
/// `right_start`. The bytes in between are the consumed separator: a single
/// space for punctuation-based cuts, nothing for conjunction-based cuts.
/// `left + consumed + right` always reassembles the original sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutPoint {
    /// End of the left fragment (exclusive byte offset)
    pub left_end: usize,
    /// Start of the right fragment (byte offset)
    pub right_start: usize,
}

impl CutPoint {
    /// Slice a sentence into its left and right fragments.
    pub fn split(self, sentence: &str) -> (&str, &str) {
        (&sentence[..self.left_end], &sentence[self.right_start..])
    }

    /// The separator consumed by this cut (`""` or `" "`).
    pub fn consumed(self, sentence: &str) -> &str {
        &sentence[self.left_end..self.right_start]
    }
}

/// The accepted candidate for one decomposition step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitDecision {
    /// Adjusted cut boundaries
    pub cut: CutPoint,
    /// Kind of the winning candidate
    pub kind: SplitKind,
    /// Priority of the winning candidate
    pub priority: u8,
    /// Relaxation round that produced the decision
    pub round: Round,
}

/// One of the five relaxation rounds, ordered by decreasing strictness.
///
/// Round 1 enforces every suppression rule; round 2 drops subordinate-clause
/// suppression; round 3 additionally drops simple-enumeration suppression;
/// rounds 4 and 5 lower the length requirements. Numeric-context suppression
/// for commas is never relaxed and is handled outside this schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Round(u8);

impl Round {
    /// The strictest round.
    pub const FIRST: Round = Round(1);
    /// The most permissive round.
    pub const LAST: Round = Round(5);

    /// Validate a round number (1..=5).
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        if (1..=5).contains(&value) {
            Ok(Round(value))
        } else {
            Err(ConfigError::DegradationRound(value))
        }
    }

    /// The round number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Rounds from the strictest up to and including `max`.
    pub fn schedule(max: Round) -> impl Iterator<Item = Round> {
        (1..=max.0).map(Round)
    }

    /// Minimum trimmed length, in characters, for each half of a cut.
    pub fn min_segment_chars(self) -> usize {
        if self.0 >= 4 {
            10
        } else {
            15
        }
    }

    /// Minimum trimmed length, in characters, required on both sides of a
    /// conjunction before it is even emitted as a candidate.
    pub fn conjunction_margin_chars(self) -> usize {
        if self.0 >= 4 {
            10
        } else {
            20
        }
    }

    /// Post-hoc minimum trimmed length for the halves of an accepted split.
    pub fn min_part_chars(self) -> usize {
        if self.0 >= 4 {
            8
        } else {
            10
        }
    }

    /// Whether candidates inside a subordinate clause are suppressed.
    pub fn checks_subordinate_clause(self) -> bool {
        self.0 == 1
    }

    /// Whether simple-enumeration commas are suppressed.
    pub fn checks_enumeration(self) -> bool {
        self.0 < 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_validation() {
        assert!(Round::new(0).is_err());
        assert!(Round::new(6).is_err());
        for n in 1..=5 {
            assert_eq!(Round::new(n).unwrap().get(), n);
        }
    }

    #[test]
    fn test_relaxation_schedule() {
        let r1 = Round::FIRST;
        assert_eq!(r1.min_segment_chars(), 15);
        assert_eq!(r1.conjunction_margin_chars(), 20);
        assert_eq!(r1.min_part_chars(), 10);
        assert!(r1.checks_subordinate_clause());
        assert!(r1.checks_enumeration());

        let r2 = Round::new(2).unwrap();
        assert!(!r2.checks_subordinate_clause());
        assert!(r2.checks_enumeration());

        let r3 = Round::new(3).unwrap();
        assert!(!r3.checks_enumeration());
        assert_eq!(r3.min_segment_chars(), 15);

        let r4 = Round::new(4).unwrap();
        assert_eq!(r4.min_segment_chars(), 10);
        assert_eq!(r4.conjunction_margin_chars(), 10);
        assert_eq!(r4.min_part_chars(), 8);

        assert_eq!(Round::LAST.min_segment_chars(), 10);
    }

    #[test]
    fn test_schedule_iteration() {
        let rounds: Vec<u8> = Round::schedule(Round::new(3).unwrap())
            .map(Round::get)
            .collect();
        assert_eq!(rounds, vec![1, 2, 3]);
    }

    #[test]
    fn test_cut_point_reassembly() {
        let sentence = "left part, right part";
        let cut = CutPoint {
            left_end: 10,
            right_start: 11,
        };
        let (left, right) = cut.split(sentence);
        assert_eq!(left, "left part,");
        assert_eq!(right, "right part");
        assert_eq!(cut.consumed(sentence), " ");
        assert_eq!(format!("{left}{}{right}", cut.consumed(sentence)), sentence);
    }
}
