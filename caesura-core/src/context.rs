//! Shared context heuristics
//!
//! Numeric-context, simple-enumeration, subordinate-clause, and fixed-phrase
//! detection, plus the character-boundary helpers used by the scanner and
//! the validity filter. Regexes are compiled once on first use.

use std::sync::OnceLock;

use regex::Regex;
use smallvec::SmallVec;

use crate::vocabulary::{CURRENCY_SYMBOLS, FIXED_PHRASES, SUBORDINATE_MARKERS};

/// Thousands-grouped numbers, e.g. `1,000` or `1,234,567`.
fn grouped_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{1,3}(?:,\d{3})+|\d+,\d{3}").expect("static regex"))
}

fn word_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w+").expect("static regex"))
}

/// The character at byte offset `pos`, if any.
pub(crate) fn char_at(s: &str, pos: usize) -> Option<char> {
    s.get(pos..).and_then(|rest| rest.chars().next())
}

/// The character ending at byte offset `pos`, if any.
pub(crate) fn prev_char(s: &str, pos: usize) -> Option<char> {
    s.get(..pos).and_then(|head| head.chars().next_back())
}

/// Character count of a string slice.
pub(crate) fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// A window of up to `back` characters before `pos` and `fwd` characters
/// from `pos` on, clamped to character boundaries.
pub(crate) fn char_window(s: &str, pos: usize, back: usize, fwd: usize) -> &str {
    let mut start = pos;
    for (i, _) in s[..pos].char_indices().rev().take(back) {
        start = i;
    }
    let end = s[pos..]
        .char_indices()
        .nth(fwd)
        .map_or(s.len(), |(i, _)| pos + i);
    &s[start..end]
}

/// Byte offsets of every whole-word, case-insensitive occurrence of `word`.
///
/// The vocabulary is ASCII, so a byte-wise case-insensitive comparison is
/// exact and every matched offset lies on a character boundary.
pub(crate) fn whole_word_occurrences(sentence: &str, word: &str) -> SmallVec<[usize; 4]> {
    let mut positions = SmallVec::new();
    let bytes = sentence.as_bytes();
    let needle = word.as_bytes();
    if needle.is_empty() || needle.len() > bytes.len() {
        return positions;
    }
    for pos in 0..=bytes.len() - needle.len() {
        if !bytes[pos..pos + needle.len()].eq_ignore_ascii_case(needle) {
            continue;
        }
        if prev_char(sentence, pos).is_some_and(char::is_alphanumeric) {
            continue;
        }
        if char_at(sentence, pos + needle.len()).is_some_and(char::is_alphanumeric) {
            continue;
        }
        positions.push(pos);
    }
    positions
}

/// Whether the comma at `pos` sits inside a numeral or currency amount.
///
/// Matches a comma flanked by digits, a comma right after a currency symbol
/// with digits following, or any thousands-grouped number within a ±10
/// character window. This exclusion is never relaxed, at any round.
pub fn is_numeric_context(sentence: &str, pos: usize) -> bool {
    let before = sentence[..pos].trim_end();
    let after = sentence[pos + 1..].trim_start();

    let digit_before = before.chars().next_back().is_some_and(|c| c.is_ascii_digit());
    let digit_after = after.chars().next().is_some_and(|c| c.is_ascii_digit());
    if digit_before && digit_after {
        return true;
    }

    if prev_char(sentence, pos).is_some_and(|c| CURRENCY_SYMBOLS.contains(&c)) && digit_after {
        return true;
    }

    grouped_number_re().is_match(char_window(sentence, pos, 10, 10))
}

/// Whether the comma at `pos` separates a short enumeration rather than a
/// clause: at most 2 word tokens on each side and at most 6 in total.
pub fn is_simple_enumeration(sentence: &str, pos: usize) -> bool {
    if is_numeric_context(sentence, pos) {
        return false;
    }
    let before = word_token_re().find_iter(&sentence[..pos]).count();
    let after = word_token_re().find_iter(&sentence[pos + 1..]).count();
    before <= 2 && after <= 2 && before + after <= 6
}

/// Whether `pos` is judged to lie inside a subordinate clause: a
/// subordinate-marker word occurs earlier in the sentence with a comma
/// somewhere before it.
pub fn in_subordinate_clause(sentence: &str, pos: usize) -> bool {
    let head = &sentence[..pos];
    for marker in SUBORDINATE_MARKERS {
        for marker_pos in whole_word_occurrences(head, marker) {
            if head[..marker_pos].contains(',') {
                return true;
            }
        }
    }
    false
}

/// Whether the vocabulary `word` matched at `pos` is actually part of a
/// fixed phrase. Checked both when the word opens the phrase and when it
/// closes it, by projecting the phrase span and comparing substrings.
pub(crate) fn in_fixed_phrase(sentence: &str, pos: usize, word: &str) -> bool {
    for fp in FIXED_PHRASES {
        if word.eq_ignore_ascii_case(fp.start_word)
            && sentence
                .get(pos..pos + fp.length)
                .is_some_and(|span| span.eq_ignore_ascii_case(fp.phrase))
        {
            return true;
        }
        if word.eq_ignore_ascii_case(fp.end_word) {
            let lead = fp.length - fp.end_word.len();
            if pos >= lead
                && sentence
                    .get(pos - lead..pos - lead + fp.length)
                    .is_some_and(|span| span.eq_ignore_ascii_case(fp.phrase))
            {
                return true;
            }
        }
    }
    false
}
