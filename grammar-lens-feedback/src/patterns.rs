//! Word lists and compiled word-boundary patterns used by the classifier.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "for", "to", "with", "by", "about", "under", "over",
];

pub(crate) const PRONOUNS: &[&str] = &[
    "he", "she", "it", "they", "him", "her", "them", "his", "hers", "their", "theirs",
];

pub(crate) const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would",
];

pub(crate) const TEMPORAL_CUES: &[&str] = &["yesterday", "ago", "last"];

const AGREEMENT_PAIRS: &[(&[&str], &[&str])] = &[
    (&["is"], &["are"]),
    (&["is"], &["am"]),
    (&["are"], &["is"]),
    (&["are"], &["am"]),
    (&["am"], &["is"]),
    (&["am"], &["are"]),
    (&["was"], &["were"]),
    (&["were"], &["was"]),
    (&["don't"], &["doesn't"]),
    (&["have"], &["has"]),
    (
        &[
            "go", "do", "play", "run", "walk", "have", "fly", "eat", "make", "come", "get",
        ],
        &[
            "goes", "does", "plays", "runs", "walks", "has", "flies", "eats", "makes", "comes",
            "gets",
        ],
    ),
];

const TENSE_PAIRS: &[(&[&str], &[&str])] = &[
    (&["go"], &["went"]),
    (&["eat"], &["ate"]),
    (&["come"], &["came"]),
    (&["is"], &["was"]),
    (&["finish"], &["finished"]),
    (&["are"], &["were"]),
];

const PARTICIPLE_PAIRS: &[(&[&str], &[&str])] = &[(
    &[
        "eat", "see", "go", "run", "write", "do", "make", "speak", "take", "give", "finish",
    ],
    &[
        "eaten", "seen", "gone", "run", "written", "done", "made", "spoken", "taken", "given",
        "finished",
    ],
)];

/// `\b(?:a|b|...)\b` over escaped alternatives.
pub(crate) fn word_regex(words: &[&str]) -> Result<Regex, regex::Error> {
    let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|")))
}

fn word_pattern(words: &[&str]) -> Regex {
    word_regex(words).unwrap()
}

fn compile(pairs: &[(&[&str], &[&str])]) -> Vec<(Regex, Regex)> {
    pairs
        .iter()
        .map(|(from, to)| (word_pattern(from), word_pattern(to)))
        .collect()
}

pub(crate) static AGREEMENT: Lazy<Vec<(Regex, Regex)>> = Lazy::new(|| compile(AGREEMENT_PAIRS));
pub(crate) static TENSE: Lazy<Vec<(Regex, Regex)>> = Lazy::new(|| compile(TENSE_PAIRS));
pub(crate) static PARTICIPLE: Lazy<Vec<(Regex, Regex)>> =
    Lazy::new(|| compile(PARTICIPLE_PAIRS));

pub(crate) static ARTICLE_A: Lazy<Regex> = Lazy::new(|| word_pattern(&["a"]));
pub(crate) static ARTICLE_AN: Lazy<Regex> = Lazy::new(|| word_pattern(&["an"]));
pub(crate) static ARTICLE_THE: Lazy<Regex> = Lazy::new(|| word_pattern(&["the"]));

pub(crate) static TEMPORAL: Lazy<Regex> = Lazy::new(|| word_pattern(TEMPORAL_CUES));
pub(crate) static PREPOSITION: Lazy<Regex> = Lazy::new(|| word_pattern(PREPOSITIONS));
pub(crate) static PRONOUN: Lazy<Regex> = Lazy::new(|| word_pattern(PRONOUNS));
pub(crate) static MODAL: Lazy<Regex> = Lazy::new(|| word_pattern(MODALS));

/// Anything that is neither a word character nor whitespace.
pub(crate) static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// One run of word characters.
pub(crate) static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Distinct matches of `pattern` in `text`.
pub(crate) fn matched_set<'t>(pattern: &Regex, text: &'t str) -> BTreeSet<&'t str> {
    pattern.find_iter(text).map(|m| m.as_str()).collect()
}

/// Whether some pair has its left side in `original` and its right side in
/// `corrected`.
pub(crate) fn any_pair(pairs: &[(Regex, Regex)], original: &str, corrected: &str) -> bool {
    pairs
        .iter()
        .any(|(from, to)| from.is_match(original) && to.is_match(corrected))
}
