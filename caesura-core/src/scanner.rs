//! Split-point scanner
//!
//! Produces every syntactically plausible break position in a sentence,
//! tagged with a kind and a raw priority. Two passes: punctuation marks and
//! whole-word conjunctions, merged and ordered by position. The scanner is
//! deliberately permissive; the validity filter decides what is usable.

use std::sync::OnceLock;

use regex::Regex;
use smallvec::SmallVec;

use crate::context;
use crate::types::{Round, SplitCandidate, SplitKind};
use crate::vocabulary;

/// Candidate list for one scan; rarely spills to the heap.
pub type CandidateList = SmallVec<[SplitCandidate; 16]>;

/// How far past a comma the pattern probes look, in characters.
const COMMA_LOOKAHEAD: usize = 50;

/// Comma led by a subordinate marker, e.g. ", which ".
fn subordinate_led_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i),\s+(?:that|which|who|whom|whose|where|when|why|how)\s+")
            .expect("static regex")
    })
}

/// Comma led by a coordinator, e.g. ", and ".
fn coordinator_led_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i),\s+(?:and|or|but|so|yet|for|nor)\s+").expect("static regex")
    })
}

/// Comma led by a transition adverb, e.g. ", however ".
fn transition_led_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i),\s+(?:however|therefore|moreover|furthermore|meanwhile)\s+")
            .expect("static regex")
    })
}

/// Scan a sentence for split candidates under the given relaxation round.
///
/// The round only affects the conjunction pass: margins shrink from round 4
/// on, and subordinate-clause suppression applies at round 1 only. Numeric
/// commas are dropped outright and never reach the filter.
pub fn scan(sentence: &str, round: Round) -> CandidateList {
    let mut candidates = CandidateList::new();
    scan_punctuation(sentence, &mut candidates);
    scan_conjunctions(sentence, round, &mut candidates);
    candidates.sort_by_key(|c| c.position);
    candidates
}

fn scan_punctuation(sentence: &str, candidates: &mut CandidateList) {
    for &(mark, priority) in vocabulary::PUNCTUATION_PRIORITY {
        for (pos, _) in sentence.match_indices(mark) {
            if mark == ',' {
                if context::is_numeric_context(sentence, pos) {
                    continue;
                }
                candidates.push(classify_comma(sentence, pos, priority));
            } else {
                candidates.push(SplitCandidate {
                    position: pos,
                    kind: SplitKind::Punctuation,
                    priority,
                    label: mark_label(mark),
                });
            }
        }
    }
}

/// Grade a comma by what follows it.
///
/// A comma directly followed by a vocabulary conjunction is boosted: +6 for
/// subordinate markers, +4 for the contrast pair, +2 otherwise. Failing
/// that, the three canonical comma patterns are probed within a 50-char
/// window. A comma with no recognized context stays at base priority.
fn classify_comma(sentence: &str, pos: usize, base: u8) -> SplitCandidate {
    let after = sentence[pos + 1..].trim_start();

    for marker in vocabulary::SUBORDINATE_MARKERS {
        if starts_with_word(after, marker) {
            return comma_candidate(pos, SplitKind::CommaConjunction, base + 6, marker);
        }
    }
    for contrast in vocabulary::CONTRAST_CONJUNCTIONS {
        if starts_with_word(after, contrast) {
            return comma_candidate(pos, SplitKind::CommaConjunction, base + 4, contrast);
        }
    }
    for (word, _) in vocabulary::conjunctions() {
        if starts_with_word(after, word) {
            return comma_candidate(pos, SplitKind::CommaConjunction, base + 2, word);
        }
    }

    let window = context::char_window(sentence, pos, 0, COMMA_LOOKAHEAD);
    let patterns: [(&Regex, &'static str); 3] = [
        (subordinate_led_re(), "subordinate pattern"),
        (coordinator_led_re(), "coordinator pattern"),
        (transition_led_re(), "transition pattern"),
    ];
    for (re, label) in patterns {
        if re.is_match(window) {
            // The strong boost applies only when the subordinate pattern
            // matches right at this comma, not merely inside the window.
            let boost = if subordinate_led_re()
                .find(window)
                .is_some_and(|m| m.start() == 0)
            {
                6
            } else {
                2
            };
            return comma_candidate(pos, SplitKind::CommaSubordinatePattern, base + boost, label);
        }
    }

    comma_candidate(pos, SplitKind::CommaPlain, base, ",")
}

fn scan_conjunctions(sentence: &str, round: Round, candidates: &mut CandidateList) {
    let margin = round.conjunction_margin_chars();
    for (word, priority) in vocabulary::conjunctions() {
        for pos in context::whole_word_occurrences(sentence, word) {
            if pos == 0 {
                continue;
            }
            if context::in_fixed_phrase(sentence, pos, word) {
                continue;
            }
            // "that" right before a comma introduces nothing worth cutting.
            if word == "that" && context::char_at(sentence, pos + word.len()) == Some(',') {
                continue;
            }
            let before = sentence[..pos].trim();
            let after = sentence[pos + word.len()..].trim();
            if context::char_count(before) <= margin || context::char_count(after) <= margin {
                continue;
            }
            if round.checks_subordinate_clause() && context::in_subordinate_clause(sentence, pos) {
                continue;
            }
            candidates.push(SplitCandidate {
                position: pos,
                kind: SplitKind::Conjunction,
                priority,
                label: word,
            });
        }
    }
}

fn comma_candidate(pos: usize, kind: SplitKind, priority: u8, label: &'static str) -> SplitCandidate {
    SplitCandidate {
        position: pos,
        kind,
        priority,
        label,
    }
}

/// Case-insensitive "starts with `word` followed by a space".
fn starts_with_word(text: &str, word: &str) -> bool {
    text.get(..word.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(word))
        && text.as_bytes().get(word.len()) == Some(&b' ')
}

fn mark_label(mark: char) -> &'static str {
    match mark {
        ';' => ";",
        ':' => ":",
        '—' => "—",
        '–' => "–",
        '…' => "…",
        _ => "punctuation",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(n: u8) -> Round {
        Round::new(n).unwrap()
    }

    fn positions(candidates: &CandidateList) -> Vec<usize> {
        candidates.iter().map(|c| c.position).collect()
    }

    #[test]
    fn test_semicolon_candidate() {
        let s = "First clause stands alone; the second clause follows.";
        let found = scan(s, round(1));
        let semi = found.iter().find(|c| c.label == ";").unwrap();
        assert_eq!(semi.position, s.find(';').unwrap());
        assert_eq!(semi.kind, SplitKind::Punctuation);
        assert_eq!(semi.priority, 5);
    }

    #[test]
    fn test_comma_conjunction_boosts() {
        let s = "We finished the earlier work quickly, however the next phase needs care.";
        let found = scan(s, round(1));
        let comma = found
            .iter()
            .find(|c| c.position == s.find(',').unwrap())
            .unwrap();
        assert_eq!(comma.kind, SplitKind::CommaConjunction);
        assert_eq!(comma.priority, 3 + 2);
        assert_eq!(comma.label, "however");

        let t = "The claim held, which surprised almost everyone there.";
        let elevated = scan(t, round(1));
        let comma = elevated
            .iter()
            .find(|c| c.position == t.find(',').unwrap())
            .unwrap();
        assert_eq!(comma.priority, 3 + 6);

        let u = "The claim held firm, but almost everyone still doubted it.";
        let contrast = scan(u, round(1));
        let comma = contrast
            .iter()
            .find(|c| c.position == u.find(',').unwrap())
            .unwrap();
        assert_eq!(comma.priority, 3 + 4);
        assert_eq!(comma.label, "but");
    }

    #[test]
    fn test_plain_comma_base_priority() {
        let s = "The long report arrived yesterday morning, everyone read it slowly.";
        let found = scan(s, round(1));
        let comma = found
            .iter()
            .find(|c| c.position == s.find(',').unwrap())
            .unwrap();
        assert_eq!(comma.kind, SplitKind::CommaPlain);
        assert_eq!(comma.priority, 3);
    }

    #[test]
    fn test_numeric_comma_dropped_entirely() {
        let s = "The budget increased to $1,234,567 last year and nobody expected such dramatic growth this quarter.";
        for r in 1..=5 {
            let found = scan(s, round(r));
            for comma_pos in s.match_indices(',').map(|(p, _)| p) {
                assert!(
                    !positions(&found).contains(&comma_pos),
                    "numeric comma at {comma_pos} leaked in round {r}"
                );
            }
        }
    }

    #[test]
    fn test_fixed_phrase_suppresses_inner_words() {
        let s = "The committee reviewed several proposals as well as budget estimates from the previous quarter.";
        let phrase_pos = s.find("as well as").unwrap();
        let found = scan(s, round(1));
        let conjunctions: Vec<_> = found
            .iter()
            .filter(|c| c.kind == SplitKind::Conjunction)
            .collect();
        assert!(conjunctions
            .iter()
            .any(|c| c.position == phrase_pos && c.label == "as well as"));
        // Neither bare "as" inside the phrase may appear on its own.
        assert!(!conjunctions
            .iter()
            .any(|c| c.label == "as" && c.position >= phrase_pos));
    }

    #[test]
    fn test_conjunction_margins_relax_at_round_four() {
        let s = "aaaaaaaaaaaaaaaaaaaa and bbbbbbbbbbbbbbbbbbbbb";
        assert!(scan(s, round(1)).is_empty());
        let relaxed = scan(s, round(4));
        assert_eq!(relaxed.len(), 1);
        assert_eq!(relaxed[0].label, "and");
        assert_eq!(relaxed[0].position, 21);
    }

    #[test]
    fn test_that_before_comma_is_skipped() {
        let s = "Everyone understood that, despite the chaos outside the hall, progress was made.";
        let found = scan(s, round(3));
        assert!(!found
            .iter()
            .any(|c| c.kind == SplitKind::Conjunction && c.label == "that"));
    }

    #[test]
    fn test_round_one_suppresses_conjunctions_in_subordinate_clause() {
        let s = "The plan, which the board approved after much debate and careful review, moved forward.";
        let and_pos = s.find("and").unwrap();
        let strict = scan(s, round(1));
        assert!(!strict
            .iter()
            .any(|c| c.kind == SplitKind::Conjunction && c.position == and_pos));
        let relaxed = scan(s, round(2));
        assert!(relaxed
            .iter()
            .any(|c| c.kind == SplitKind::Conjunction && c.position == and_pos));
    }

    #[test]
    fn test_candidates_sorted_by_position() {
        let s = "First we waited patiently; then we argued loudly, and finally we agreed completely.";
        let found = scan(s, round(3));
        let pos = positions(&found);
        let mut sorted = pos.clone();
        sorted.sort_unstable();
        assert_eq!(pos, sorted);
    }
}
