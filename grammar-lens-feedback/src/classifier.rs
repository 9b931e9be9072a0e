//! Rule-based labeling of what a correction changed.
//!
//! Each rule looks at the lowercased original and corrected sentence and
//! either passes or fires. Rules are evaluated in a fixed order, all of them,
//! and every rule that fires contributes one record. When none fires a single
//! generic [`ErrorKind::Grammar`] record stands in.

use std::collections::HashSet;
use std::fmt;

use grammar_lens::{CollaboratorResult, SpellChecker, WordListSpellChecker};
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::patterns::{
    any_pair, matched_set, AGREEMENT, ARTICLE_A, ARTICLE_AN, ARTICLE_THE, MODAL, NON_WORD,
    PARTICIPLE, PREPOSITION, PRONOUN, TEMPORAL, TENSE, WORD,
};

/// Error categories, in rule-evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    Capitalization,
    MissingPunctuation,
    Spelling,
    SubjectVerbAgreement,
    ArticleUsage,
    VerbTense,
    VerbForm,
    PrepositionUsage,
    PluralSingular,
    PronounUsage,
    WordOrder,
    Punctuation,
    MissingWords,
    UnnecessaryWords,
    ModalVerbUsage,
    /// Fallback when no specific rule fired.
    Grammar,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 16] = [
        ErrorKind::Capitalization,
        ErrorKind::MissingPunctuation,
        ErrorKind::Spelling,
        ErrorKind::SubjectVerbAgreement,
        ErrorKind::ArticleUsage,
        ErrorKind::VerbTense,
        ErrorKind::VerbForm,
        ErrorKind::PrepositionUsage,
        ErrorKind::PluralSingular,
        ErrorKind::PronounUsage,
        ErrorKind::WordOrder,
        ErrorKind::Punctuation,
        ErrorKind::MissingWords,
        ErrorKind::UnnecessaryWords,
        ErrorKind::ModalVerbUsage,
        ErrorKind::Grammar,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Capitalization => "capitalization (sentence beginning)",
            ErrorKind::MissingPunctuation => "missing sentence punctuation",
            ErrorKind::Spelling => "spelling",
            ErrorKind::SubjectVerbAgreement => "subject-verb agreement",
            ErrorKind::ArticleUsage => "article usage",
            ErrorKind::VerbTense => "verb tense",
            ErrorKind::VerbForm => "verb form",
            ErrorKind::PrepositionUsage => "preposition usage",
            ErrorKind::PluralSingular => "plural/singular noun",
            ErrorKind::PronounUsage => "pronoun usage",
            ErrorKind::WordOrder => "word order",
            ErrorKind::Punctuation => "punctuation",
            ErrorKind::MissingWords => "missing word(s)",
            ErrorKind::UnnecessaryWords => "unnecessary word(s)",
            ErrorKind::ModalVerbUsage => "modal verb usage",
            ErrorKind::Grammar => "grammar",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One labeled difference between a sentence and its correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedError {
    pub original: String,
    pub corrected: String,
    pub kind: ErrorKind,
    /// Words behind the label, for spelling and missing/unnecessary words.
    pub detail: Option<String>,
}

impl ClassifiedError {
    /// `"label"` or `"label: detail"`.
    pub fn error_type(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{}: {}", self.kind, detail),
            None => self.kind.label().to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorRecord<'a> {
    original: &'a str,
    corrected: &'a str,
    error_type: String,
}

impl Serialize for ClassifiedError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ErrorRecord {
            original: &self.original,
            corrected: &self.corrected,
            error_type: self.error_type(),
        }
        .serialize(serializer)
    }
}

/// Outcome of one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Verdict {
    Pass,
    Fire,
    FireWith(String),
}

impl From<bool> for Verdict {
    fn from(fired: bool) -> Self {
        if fired {
            Verdict::Fire
        } else {
            Verdict::Pass
        }
    }
}

/// Both sentences, prepared once for every rule.
struct Comparison<'a> {
    original: &'a str,
    corrected: &'a str,
    original_lower: String,
    corrected_lower: String,
    /// `None` when the spell-checker failed.
    misspelled: Option<Vec<String>>,
}

impl<'a> Comparison<'a> {
    fn original_words(&self) -> Vec<&str> {
        self.original_lower.split_whitespace().collect()
    }

    fn corrected_words(&self) -> Vec<&str> {
        self.corrected_lower.split_whitespace().collect()
    }
}

type Rule = fn(&Comparison<'_>) -> Verdict;

const RULES: &[(ErrorKind, Rule)] = &[
    (ErrorKind::Capitalization, capitalization),
    (ErrorKind::MissingPunctuation, missing_punctuation),
    (ErrorKind::Spelling, spelling),
    (ErrorKind::SubjectVerbAgreement, agreement),
    (ErrorKind::ArticleUsage, articles),
    (ErrorKind::VerbTense, tense),
    (ErrorKind::VerbForm, verb_form),
    (ErrorKind::PrepositionUsage, prepositions),
    (ErrorKind::PluralSingular, plural_singular),
    (ErrorKind::PronounUsage, pronouns),
    (ErrorKind::WordOrder, word_order),
    (ErrorKind::Punctuation, punctuation),
    (ErrorKind::MissingWords, missing_words),
    (ErrorKind::UnnecessaryWords, unnecessary_words),
    (ErrorKind::ModalVerbUsage, modals),
];

const SENTENCE_END: [char; 3] = ['.', '!', '?'];

fn capitalization(c: &Comparison<'_>) -> Verdict {
    let first_lower = c.original.chars().next().map_or(false, char::is_lowercase);
    let first_upper = c.corrected.chars().next().map_or(false, char::is_uppercase);
    Verdict::from(first_lower && first_upper)
}

fn missing_punctuation(c: &Comparison<'_>) -> Verdict {
    let ends = |s: &str| s.chars().last().map(|ch| SENTENCE_END.contains(&ch));
    Verdict::from(ends(c.original) == Some(false) && ends(c.corrected) == Some(true))
}

fn spelling(c: &Comparison<'_>) -> Verdict {
    match &c.misspelled {
        Some(words) if !words.is_empty() => Verdict::FireWith(words.join(", ")),
        _ => Verdict::Pass,
    }
}

fn agreement(c: &Comparison<'_>) -> Verdict {
    Verdict::from(any_pair(&AGREEMENT, &c.original_lower, &c.corrected_lower))
}

fn articles(c: &Comparison<'_>) -> Verdict {
    let (o, r) = (c.original_lower.as_str(), c.corrected_lower.as_str());
    let swapped = (ARTICLE_A.is_match(o) && ARTICLE_AN.is_match(r))
        || (ARTICLE_AN.is_match(o) && ARTICLE_A.is_match(r));
    Verdict::from(swapped || ARTICLE_THE.is_match(o) != ARTICLE_THE.is_match(r))
}

fn tense(c: &Comparison<'_>) -> Verdict {
    Verdict::from(
        TEMPORAL.is_match(&c.original_lower)
            && any_pair(&TENSE, &c.original_lower, &c.corrected_lower),
    )
}

fn verb_form(c: &Comparison<'_>) -> Verdict {
    Verdict::from(any_pair(&PARTICIPLE, &c.original_lower, &c.corrected_lower))
}

fn prepositions(c: &Comparison<'_>) -> Verdict {
    Verdict::from(differs(&PREPOSITION, c))
}

fn plural_singular(c: &Comparison<'_>) -> Verdict {
    let corrected: HashSet<&str> = WORD
        .find_iter(&c.corrected_lower)
        .map(|m| m.as_str())
        .collect();
    let fired = c.original_words().into_iter().any(|word| {
        let singular = word
            .strip_suffix('s')
            .map_or(false, |stem| corrected.contains(stem));
        singular || corrected.contains(format!("{}s", word).as_str())
    });
    Verdict::from(fired)
}

fn pronouns(c: &Comparison<'_>) -> Verdict {
    Verdict::from(differs(&PRONOUN, c))
}

fn word_order(c: &Comparison<'_>) -> Verdict {
    let original = c.original_words();
    let corrected = c.corrected_words();
    if original == corrected {
        return Verdict::Pass;
    }
    let mut a = original;
    let mut b = corrected;
    a.sort_unstable();
    b.sort_unstable();
    Verdict::from(a == b)
}

fn punctuation(c: &Comparison<'_>) -> Verdict {
    let stripped_original = NON_WORD.replace_all(&c.original_lower, "");
    let stripped_corrected = NON_WORD.replace_all(&c.corrected_lower, "");
    Verdict::from(stripped_original == stripped_corrected && c.original != c.corrected)
}

fn missing_words(c: &Comparison<'_>) -> Verdict {
    word_difference(&c.corrected_words(), &c.original_words())
}

fn unnecessary_words(c: &Comparison<'_>) -> Verdict {
    word_difference(&c.original_words(), &c.corrected_words())
}

fn modals(c: &Comparison<'_>) -> Verdict {
    Verdict::from(differs(&MODAL, c))
}

fn differs(pattern: &Regex, c: &Comparison<'_>) -> bool {
    matched_set(pattern, &c.original_lower) != matched_set(pattern, &c.corrected_lower)
}

/// Fires when `longer` has more words than `shorter`, naming the words of
/// `longer` that `shorter` lacks.
fn word_difference(longer: &[&str], shorter: &[&str]) -> Verdict {
    if longer.len() <= shorter.len() {
        return Verdict::Pass;
    }
    let mut extra: Vec<&str> = Vec::new();
    for word in longer {
        if !shorter.contains(word) && !extra.contains(word) {
            extra.push(*word);
        }
    }
    if extra.is_empty() {
        Verdict::Pass
    } else {
        Verdict::FireWith(extra.join(", "))
    }
}

/// Words of `text` with surrounding punctuation trimmed, first occurrence
/// only.
fn spelling_candidates(text: &str) -> Vec<&str> {
    let mut words: Vec<&str> = Vec::new();
    for word in text
        .split_whitespace()
        .map(|w| w.trim_matches(|ch: char| !ch.is_alphanumeric()))
        .filter(|w| !w.is_empty())
    {
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words
}

/// Classifies corrections with an injected spell-checker.
#[derive(Debug, Clone)]
pub struct ErrorClassifier<S> {
    speller: S,
}

impl ErrorClassifier<WordListSpellChecker> {
    pub fn english() -> Self {
        Self::new(WordListSpellChecker::english())
    }
}

impl<S: SpellChecker> ErrorClassifier<S> {
    pub fn new(speller: S) -> Self {
        Self { speller }
    }

    /// Label every difference between `original` and `corrected`.
    ///
    /// Identical strings give no records. A spell-checker fault is logged
    /// and only the spelling rule is skipped.
    pub fn classify(&self, original: &str, corrected: &str) -> Vec<ClassifiedError> {
        if original == corrected {
            return Vec::new();
        }

        let original_lower = original.to_lowercase();
        let misspelled = match self.misspelled(&original_lower) {
            Ok(words) => Some(words),
            Err(error) => {
                tracing::warn!(%error, "spelling rule skipped");
                None
            }
        };
        self.apply_rules(original, corrected, original_lower, misspelled)
    }

    /// Like [`classify`](Self::classify), except that an unavailable
    /// spell-checker is returned as an error instead of skipping the
    /// spelling rule.
    pub fn try_classify(
        &self,
        original: &str,
        corrected: &str,
    ) -> CollaboratorResult<Vec<ClassifiedError>> {
        if original == corrected {
            return Ok(Vec::new());
        }

        let original_lower = original.to_lowercase();
        let misspelled = match self.misspelled(&original_lower) {
            Ok(words) => Some(words),
            Err(error) if error.is_unavailable() => return Err(error),
            Err(error) => {
                tracing::warn!(%error, "spelling rule skipped");
                None
            }
        };
        Ok(self.apply_rules(original, corrected, original_lower, misspelled))
    }

    fn misspelled(&self, original_lower: &str) -> CollaboratorResult<Vec<String>> {
        self.speller.unknown_words(&spelling_candidates(original_lower))
    }

    fn apply_rules(
        &self,
        original: &str,
        corrected: &str,
        original_lower: String,
        misspelled: Option<Vec<String>>,
    ) -> Vec<ClassifiedError> {
        let comparison = Comparison {
            original,
            corrected,
            original_lower,
            corrected_lower: corrected.to_lowercase(),
            misspelled,
        };

        let record = |kind: ErrorKind, detail: Option<String>| ClassifiedError {
            original: original.to_string(),
            corrected: corrected.to_string(),
            kind,
            detail,
        };

        let mut errors: Vec<ClassifiedError> = RULES
            .iter()
            .filter_map(|(kind, rule)| match rule(&comparison) {
                Verdict::Pass => None,
                Verdict::Fire => Some(record(*kind, None)),
                Verdict::FireWith(detail) => Some(record(*kind, Some(detail))),
            })
            .collect();

        if errors.is_empty() {
            errors.push(record(ErrorKind::Grammar, None));
        }
        tracing::debug!(errors = errors.len(), "classified correction");
        errors
    }
}
