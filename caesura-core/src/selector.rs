//! Best-split selection across relaxation rounds
//!
//! Runs the scanner and validity filter round by round, stopping at the
//! first round that accepts at least one candidate.

use std::cmp::Reverse;

use crate::scanner;
use crate::types::{Round, SplitDecision};
use crate::validity;

/// Find the best valid split point, relaxing constraints up to `max_round`.
///
/// Within a round the winner is the accepted candidate with the highest
/// priority; ties go to the earliest position. Returns `None` when every
/// round up to `max_round` rejects every candidate.
pub fn select_best(sentence: &str, max_round: Round) -> Option<SplitDecision> {
    for round in Round::schedule(max_round) {
        let candidates = scanner::scan(sentence, round);
        let best = candidates
            .iter()
            .filter_map(|c| validity::validate(sentence, c, round).map(|cut| (c, cut)))
            .max_by_key(|(c, _)| (c.priority, Reverse(c.position)));
        if let Some((candidate, cut)) = best {
            tracing::debug!(
                round = round.get(),
                position = candidate.position,
                priority = candidate.priority,
                label = candidate.label,
                "selected split point"
            );
            return Some(SplitDecision {
                cut,
                kind: candidate.kind,
                priority: candidate.priority,
                round,
            });
        }
    }
    None
}
