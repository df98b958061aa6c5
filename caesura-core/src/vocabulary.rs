//! Static English vocabulary tables
//!
//! Process-wide constants: punctuation priorities, conjunction tiers, the
//! fixed-phrase table, and the character classes shared by the scanner and
//! the validity filter. Lookups are allocation-free.

/// Split priority for each recognized punctuation mark.
pub const PUNCTUATION_PRIORITY: &[(char, u8)] = &[
    (';', 5),
    (':', 4),
    (',', 3),
    ('—', 3),
    ('–', 3),
    ('…', 3),
];

/// Marks that terminate the left fragment when a cut lands on them.
///
/// Wider than [`PUNCTUATION_PRIORITY`]: terminal marks are never candidates
/// themselves but still get the skip-mark-and-space treatment if a cut
/// position sits on one.
pub const CUT_MARKS: &[char] = &[',', ':', ';', '.', '!', '?', '—', '–', '…'];

/// High-priority conjunctions (transition adverbs and the contrast pair).
pub const HIGH_CONJUNCTIONS: &[&str] = &[
    "however",
    "therefore",
    "moreover",
    "furthermore",
    "nevertheless",
    "meanwhile",
    "consequently",
    "but",
    "yet",
];

/// Mid-priority conjunctions (subordinators and subordinate markers).
pub const MID_CONJUNCTIONS: &[&str] = &[
    "because",
    "since",
    "although",
    "though",
    "unless",
    "until",
    "before",
    "after",
    "as",
    "if",
    "while",
    "that",
    "which",
    "who",
    "whom",
    "whose",
    "where",
    "when",
    "why",
    "how",
];

/// Low-priority conjunctions (coordinators, sequencers, fixed phrases).
pub const LOW_CONJUNCTIONS: &[&str] = &[
    "and",
    "or",
    "so",
    "for",
    "nor",
    "then",
    "next",
    "finally",
    "subsequently",
    "such as",
    "as well as",
    "in order to",
    "so that",
    "in case",
    "provided that",
    "even though",
    "as though",
    "as if",
];

/// Words that open a subordinate clause; a comma followed by one of these
/// gets the strongest boost.
pub const SUBORDINATE_MARKERS: &[&str] = &[
    "that", "which", "who", "whom", "whose", "where", "when", "why", "how",
];

/// Contrast conjunctions, boosted above ordinary coordinators after a comma.
pub const CONTRAST_CONJUNCTIONS: &[&str] = &["but", "yet"];

/// Currency symbols that mark a following comma as numeric.
pub const CURRENCY_SYMBOLS: &[char] = &[
    '$', '€', '£', '¥', '₹', '₽', '₩', '₪', '₨', '₦', '₡', '₱', '₫', '₴', '₸', '₼', '₾', '₿',
];

/// A multi-word idiom whose interior words must not be treated as
/// independent conjunctions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPhrase {
    /// The full phrase, lowercase
    pub phrase: &'static str,
    /// First word of the phrase
    pub start_word: &'static str,
    /// Last word of the phrase
    pub end_word: &'static str,
    /// Total phrase length in bytes
    pub length: usize,
}

/// The fixed-phrase protection table.
pub const FIXED_PHRASES: &[FixedPhrase] = &[
    FixedPhrase {
        phrase: "so that",
        start_word: "so",
        end_word: "that",
        length: 7,
    },
    FixedPhrase {
        phrase: "provided that",
        start_word: "provided",
        end_word: "that",
        length: 13,
    },
    FixedPhrase {
        phrase: "as though",
        start_word: "as",
        end_word: "though",
        length: 9,
    },
    FixedPhrase {
        phrase: "as if",
        start_word: "as",
        end_word: "if",
        length: 5,
    },
    FixedPhrase {
        phrase: "even though",
        start_word: "even",
        end_word: "though",
        length: 11,
    },
    FixedPhrase {
        phrase: "such as",
        start_word: "such",
        end_word: "as",
        length: 7,
    },
    FixedPhrase {
        phrase: "as well as",
        start_word: "as",
        end_word: "as",
        length: 10,
    },
    FixedPhrase {
        phrase: "in order to",
        start_word: "in",
        end_word: "to",
        length: 11,
    },
    FixedPhrase {
        phrase: "in case",
        start_word: "in",
        end_word: "case",
        length: 7,
    },
];

/// Priority of a punctuation mark, if it is a split candidate at all.
pub fn punctuation_priority(ch: char) -> Option<u8> {
    PUNCTUATION_PRIORITY
        .iter()
        .find(|(mark, _)| *mark == ch)
        .map(|(_, priority)| *priority)
}

/// Whether `ch` is consumed onto the left fragment when cut upon.
pub fn is_cut_mark(ch: char) -> bool {
    CUT_MARKS.contains(&ch)
}

/// Tier priority of a vocabulary conjunction.
pub fn conjunction_priority(word: &str) -> Option<u8> {
    if HIGH_CONJUNCTIONS.contains(&word) {
        Some(2)
    } else if MID_CONJUNCTIONS.contains(&word) {
        Some(1)
    } else if LOW_CONJUNCTIONS.contains(&word) {
        Some(0)
    } else {
        None
    }
}

/// All vocabulary conjunctions with their tier priorities, high tier first.
pub fn conjunctions() -> impl Iterator<Item = (&'static str, u8)> {
    HIGH_CONJUNCTIONS
        .iter()
        .map(|w| (*w, 2))
        .chain(MID_CONJUNCTIONS.iter().map(|w| (*w, 1)))
        .chain(LOW_CONJUNCTIONS.iter().map(|w| (*w, 0)))
}
