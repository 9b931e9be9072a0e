//! Dictionary spell-checking contract and the bundled word-list checker.

use std::collections::HashSet;
use std::sync::Arc;

use crate::lexicon::TAGGED_WORDS;
use crate::CollaboratorResult;

static BUNDLED_WORDS: &str = include_str!("../data/words.txt");

/// Inflection endings tried when a word is not in the list verbatim,
/// with the stem endings that may have been replaced.
const INFLECTIONS: &[(&str, &[&str])] = &[
    ("'s", &[""]),
    ("ies", &["y"]),
    ("ied", &["y"]),
    ("es", &["", "e"]),
    ("s", &[""]),
    ("ed", &["", "e"]),
    ("ing", &["", "e"]),
    ("er", &["", "e"]),
    ("est", &["", "e"]),
    ("ly", &["", "le"]),
];

/// Verbs whose past tense does not take "-ed".
const IRREGULAR_VERBS: &[&str] = &[
    "be", "become", "begin", "bite", "blow", "break", "bring", "build", "buy", "catch",
    "choose", "come", "do", "draw", "drink", "drive", "eat", "fall", "feel", "fight", "find",
    "fly", "forget", "freeze", "get", "give", "go", "grow", "have", "hear", "hide", "hold",
    "keep", "know", "lead", "leave", "lend", "lose", "make", "meet", "pay", "ride", "ring",
    "rise", "run", "say", "see", "sell", "send", "shake", "shine", "sing", "sit", "sleep",
    "speak", "spend", "stand", "steal", "swim", "take", "teach", "tell", "think", "throw",
    "understand", "wake", "wear", "win", "write",
];

const VOWEL_SUFFIXES: &[&str] = &["ing", "ed", "er", "est"];

/// Reports the words a dictionary does not know.
pub trait SpellChecker {
    /// Unknown words among `words`, deduplicated, in first-appearance order.
    fn unknown_words(&self, words: &[&str]) -> CollaboratorResult<Vec<String>>;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn unknown_words(&self, words: &[&str]) -> CollaboratorResult<Vec<String>> {
        (**self).unknown_words(words)
    }
}

impl<T: SpellChecker + ?Sized> SpellChecker for Box<T> {
    fn unknown_words(&self, words: &[&str]) -> CollaboratorResult<Vec<String>> {
        (**self).unknown_words(words)
    }
}

impl<T: SpellChecker + ?Sized> SpellChecker for Arc<T> {
    fn unknown_words(&self, words: &[&str]) -> CollaboratorResult<Vec<String>> {
        (**self).unknown_words(words)
    }
}

/// Spell-checker backed by an in-memory word set.
///
/// Words are compared lowercase. Regular inflections ("cats", "studied",
/// "running") are accepted when their stem is listed and the form follows
/// the usual spelling changes, so "studyed", "runing" and "eated" are not.
/// Words without any letter (numbers, symbols) are always accepted. Stems
/// shorter than three letters are not inflected, so "iss" is not read as
/// "is" + "s".
#[derive(Debug, Clone, Default)]
pub struct WordListSpellChecker {
    words: HashSet<String>,
}

impl WordListSpellChecker {
    /// The bundled English word list plus every word the bundled tagger knows.
    pub fn english() -> Self {
        let listed = BUNDLED_WORDS
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));
        let tagged = TAGGED_WORDS.iter().flat_map(|(_, words)| words.iter().copied());
        Self::from_words(listed.chain(tagged))
    }

    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            words: words.into_iter().map(str::to_lowercase).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn is_known(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        if !lower.chars().any(char::is_alphabetic) || self.words.contains(&lower) {
            return true;
        }

        INFLECTIONS.iter().any(|(ending, replacements)| {
            let Some(stem) = lower.strip_suffix(ending) else {
                return false;
            };
            if stem.chars().count() < 3 {
                return false;
            }
            let replaced = replacements.iter().any(|r| {
                self.words.contains(&format!("{}{}", stem, r)) && spelled_regularly(stem, r, ending)
            });
            replaced
                || undoubled(stem).map_or(false, |base| {
                    VOWEL_SUFFIXES.contains(ending)
                        && ends_cvc(base)
                        && !(*ending == "ed" && IRREGULAR_VERBS.contains(&base))
                        && self.words.contains(base)
                })
        })
    }
}

impl SpellChecker for WordListSpellChecker {
    fn unknown_words(&self, words: &[&str]) -> CollaboratorResult<Vec<String>> {
        let mut unknown: Vec<String> = Vec::new();
        for word in words {
            let lower = word.to_lowercase();
            if !self.is_known(&lower) && !unknown.contains(&lower) {
                unknown.push(lower);
            }
        }
        tracing::debug!(checked = words.len(), unknown = unknown.len(), "spell-checked words");
        Ok(unknown)
    }
}

/// Whether `stem` + `replaced` + `ending` is how the listed word `stem` +
/// `replaced` regularly inflects.
fn spelled_regularly(stem: &str, replaced: &str, ending: &str) -> bool {
    let base = format!("{}{}", stem, replaced);
    if ending == "ed" && IRREGULAR_VERBS.contains(&base.as_str()) {
        return false;
    }
    match (ending, replaced) {
        ("'s", _) => true,
        ("ies" | "ied", _) => stem.chars().last().map_or(false, is_consonant),
        // "agreeing" keeps its "e"
        ("ing", "e") => !stem.ends_with('e'),
        (_, "") => {
            if ends_consonant_y(&base) && ending != "ing" {
                false
            } else if base.ends_with('e') && ending.starts_with(['e', 'i']) {
                ending == "ing" && ["ee", "ye", "oe"].iter().any(|e| base.ends_with(e))
            } else if ending == "es" {
                ends_sibilant(&base) || base.ends_with('o')
            } else if ending == "s" {
                !ends_sibilant(&base)
            } else {
                !(VOWEL_SUFFIXES.contains(&ending) && needs_doubling(&base))
            }
        }
        _ => true,
    }
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_consonant(ch: char) -> bool {
    ch.is_alphabetic() && !is_vowel(ch)
}

fn ends_consonant_y(word: &str) -> bool {
    let mut chars = word.chars().rev();
    chars.next() == Some('y') && chars.next().map_or(false, is_consonant)
}

fn ends_sibilant(word: &str) -> bool {
    word.ends_with(['s', 'x', 'z']) || word.ends_with("ch") || word.ends_with("sh")
}

/// Consonant, vowel, consonant at the end, the last not "w", "x" or "y".
fn ends_cvc(word: &str) -> bool {
    let tail: Vec<char> = word.chars().rev().take(3).collect();
    match tail.as_slice() {
        [last, vowel, first] => {
            is_consonant(*first)
                && is_vowel(*vowel)
                && is_consonant(*last)
                && !matches!(*last, 'w' | 'x' | 'y')
        }
        _ => false,
    }
}

/// One-syllable words ending consonant-vowel-consonant double the final
/// consonant before a vowel suffix: "run" -> "running".
fn needs_doubling(word: &str) -> bool {
    let mut syllables = 0;
    let mut previous_vowel = false;
    for ch in word.chars() {
        let vowel = is_vowel(ch);
        if vowel && !previous_vowel {
            syllables += 1;
        }
        previous_vowel = vowel;
    }
    syllables == 1 && ends_cvc(word)
}

/// "runn" -> "run", "stopp" -> "stop"
fn undoubled(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    if chars.next()? == last && last.is_alphabetic() {
        Some(&stem[..stem.len() - last.len_utf8()])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_list_loads() {
        let checker = WordListSpellChecker::english();
        assert!(checker.len() > 500);
        assert!(checker.is_known("cat"));
        assert!(checker.is_known("Paris"));
    }

    #[test]
    fn accepts_regular_inflections() {
        let checker = WordListSpellChecker::from_words(["cat", "study", "run", "like", "happy"]);
        assert!(checker.is_known("cats"));
        assert!(checker.is_known("studied"));
        assert!(checker.is_known("studies"));
        assert!(checker.is_known("running"));
        assert!(checker.is_known("liked"));
        assert!(!checker.is_known("happier"));
        assert!(!checker.is_known("dogs"));
    }

    #[test]
    fn rejects_irregular_spellings() {
        let checker = WordListSpellChecker::english();
        let unknown = checker
            .unknown_words(&[
                "studyed", "runing", "eated", "writed", "happyly", "comeing", "catss",
            ])
            .unwrap();
        assert_eq!(
            unknown,
            ["studyed", "runing", "eated", "writed", "happyly", "comeing", "catss"]
        );
    }

    #[test]
    fn keeps_regular_spellings() {
        let checker = WordListSpellChecker::from_words([
            "run", "stop", "hope", "agree", "play", "box", "visit", "begin", "eat",
        ]);
        for word in [
            "running", "stopped", "hoped", "hoping", "agreeing", "played", "plays", "boxes",
            "visited", "beginning", "eating",
        ] {
            assert!(checker.is_known(word), "{} should be known", word);
        }
        for word in ["stoping", "hopeing", "plaied", "boxs", "eatting", "runned", "agreing"] {
            assert!(!checker.is_known(word), "{} should be unknown", word);
        }
    }

    #[test]
    fn numbers_are_never_misspelled() {
        let checker = WordListSpellChecker::default();
        assert!(checker.is_known("1999"));
        assert!(checker.is_known("--"));
    }

    #[test]
    fn unknown_words_in_first_appearance_order() {
        let checker = WordListSpellChecker::from_words(["we", "the", "park"]);
        let unknown = checker
            .unknown_words(&["We", "iss", "walk", "the", "park", "iss"])
            .unwrap();
        assert_eq!(unknown, ["iss", "walk"]);
    }
}
