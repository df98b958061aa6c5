//! Validity filter
//!
//! Given a relaxation round, decides whether a candidate is usable and
//! resolves its adjusted cut boundaries.

use crate::context;
use crate::types::{CutPoint, Round, SplitCandidate};
use crate::vocabulary;

/// Resolve the cut boundaries for a raw candidate position.
///
/// A cut on a punctuation mark keeps the mark on the left fragment and
/// consumes one following space. A cut on the space right after a mark
/// consumes that space. A cut on anything else (a conjunction start) is
/// zero-width: the right fragment begins exactly at the position, so the
/// left fragment keeps its trailing space.
pub fn adjust(sentence: &str, position: usize) -> CutPoint {
    let Some(ch) = context::char_at(sentence, position) else {
        return CutPoint {
            left_end: position,
            right_start: position,
        };
    };
    if vocabulary::is_cut_mark(ch) {
        // For a comma followed by a subordinate marker the marker opens the
        // next fragment; the cut itself is the same either way.
        let left_end = position + ch.len_utf8();
        let right_start = if sentence[left_end..].starts_with(' ') {
            left_end + 1
        } else {
            left_end
        };
        CutPoint {
            left_end,
            right_start,
        }
    } else if ch == ' ' && context::prev_char(sentence, position).is_some_and(vocabulary::is_cut_mark)
    {
        CutPoint {
            left_end: position,
            right_start: position + 1,
        }
    } else {
        CutPoint {
            left_end: position,
            right_start: position,
        }
    }
}

/// Check a candidate under the given round; `Some(cut)` on acceptance.
pub fn validate(sentence: &str, candidate: &SplitCandidate, round: Round) -> Option<CutPoint> {
    let cut = adjust(sentence, candidate.position);

    let min_len = round.min_segment_chars();
    let left = sentence[..cut.left_end].trim();
    let right = sentence[cut.right_start..].trim();
    if context::char_count(left) < min_len || context::char_count(right) < min_len {
        return None;
    }

    let is_comma = context::char_at(sentence, candidate.position) == Some(',');

    // Numeric commas are normally dropped at scan time; re-checked here so
    // no caller-supplied candidate can ever cut a numeral.
    if is_comma && context::is_numeric_context(sentence, candidate.position) {
        return None;
    }

    if round.checks_enumeration()
        && is_comma
        && context::is_simple_enumeration(sentence, candidate.position)
    {
        return None;
    }

    if round.checks_subordinate_clause()
        && context::in_subordinate_clause(sentence, candidate.position)
    {
        return None;
    }

    Some(cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SplitKind;

    fn round(n: u8) -> Round {
        Round::new(n).unwrap()
    }

    fn candidate(position: usize, kind: SplitKind) -> SplitCandidate {
        SplitCandidate {
            position,
            kind,
            priority: 3,
            label: "test",
        }
    }

    #[test]
    fn test_adjust_consumes_space_after_punctuation() {
        let s = "We finished quickly, however more work remains.";
        let cut = adjust(s, s.find(',').unwrap());
        let (left, right) = cut.split(s);
        assert_eq!(left, "We finished quickly,");
        assert_eq!(right, "however more work remains.");
        assert_eq!(cut.consumed(s), " ");
    }

    #[test]
    fn test_adjust_without_following_space() {
        let s = "Ready now;go fast anyway.";
        let cut = adjust(s, s.find(';').unwrap());
        let (left, right) = cut.split(s);
        assert_eq!(left, "Ready now;");
        assert_eq!(right, "go fast anyway.");
        assert_eq!(cut.consumed(s), "");
    }

    #[test]
    fn test_adjust_on_space_after_mark() {
        let s = "Ready now; go fast anyway.";
        let cut = adjust(s, s.find(';').unwrap() + 1);
        let (left, right) = cut.split(s);
        assert_eq!(left, "Ready now;");
        assert_eq!(right, "go fast anyway.");
    }

    #[test]
    fn test_adjust_conjunction_is_zero_width() {
        let s = "The budget grew last year and nobody expected it.";
        let pos = s.find("and").unwrap();
        let cut = adjust(s, pos);
        assert_eq!(cut.left_end, pos);
        assert_eq!(cut.right_start, pos);
        let (left, right) = cut.split(s);
        assert!(left.ends_with(' '));
        assert!(right.starts_with("and"));
    }

    #[test]
    fn test_adjust_multibyte_dash() {
        let s = "One side stands firm—the other yields slowly.";
        let pos = s.find('—').unwrap();
        let cut = adjust(s, pos);
        let (left, right) = cut.split(s);
        assert_eq!(left, "One side stands firm—");
        assert_eq!(right, "the other yields slowly.");
    }

    #[test]
    fn test_minimum_segment_length_by_round() {
        // Right-hand side is 8 chars after the cut; too short at every round.
        let s = "Ready now; go fast.";
        let cand = candidate(s.find(';').unwrap(), SplitKind::Punctuation);
        for r in 1..=5 {
            assert!(validate(s, &cand, round(r)).is_none(), "round {r}");
        }

        // 12 chars per side: rejected while the minimum is 15, accepted at 10.
        let t = "aaaa bbb ccc; ddd eee fff";
        let cand = candidate(t.find(';').unwrap(), SplitKind::Punctuation);
        assert!(validate(t, &cand, round(3)).is_none());
        assert!(validate(t, &cand, round(4)).is_some());
    }

    #[test]
    fn test_enumeration_comma_rejected_until_round_three() {
        let s = "Extraordinarily incomprehensible, unquestionably counterproductive";
        let cand = candidate(s.find(',').unwrap(), SplitKind::CommaPlain);
        assert!(validate(s, &cand, round(1)).is_none());
        assert!(validate(s, &cand, round(2)).is_none());
        assert!(validate(s, &cand, round(3)).is_some());
    }

    #[test]
    fn test_numeric_comma_rejected_at_every_round() {
        let s = "The grand total reached 1,234,567 dollars by December yearly.";
        let cand = candidate(s.find(',').unwrap(), SplitKind::CommaPlain);
        for r in 1..=5 {
            assert!(validate(s, &cand, round(r)).is_none(), "round {r}");
        }
    }

    #[test]
    fn test_subordinate_clause_rejected_at_round_one_only() {
        let s = "The plan, which the board approved quickly, moved forward without any objection.";
        let second_comma = s.rfind(',').unwrap();
        let cand = candidate(second_comma, SplitKind::CommaPlain);
        assert!(validate(s, &cand, round(1)).is_none());
        assert!(validate(s, &cand, round(2)).is_some());
    }
}
