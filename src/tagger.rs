//! Part-of-speech tagging contract and the bundled lexicon tagger.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::lexicon::TAGGED_WORDS;
use crate::CollaboratorResult;

/// A word paired with the Penn Treebank tag assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedWord {
    pub word: String,
    pub tag: String,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    /// Noun tags: NN, NNS, NNP, NNPS.
    pub fn is_noun(&self) -> bool {
        self.tag.starts_with("NN")
    }

    /// Verb tags: VB, VBD, VBG, VBN, VBP, VBZ.
    pub fn is_verb(&self) -> bool {
        self.tag.starts_with("VB")
    }
}

/// Assigns a part-of-speech tag to every word of a sequence.
///
/// Implementations must return exactly one [`TaggedWord`] per input word, in
/// input order.
pub trait Tagger {
    fn tag(&self, words: &[&str]) -> CollaboratorResult<Vec<TaggedWord>>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, words: &[&str]) -> CollaboratorResult<Vec<TaggedWord>> {
        (**self).tag(words)
    }
}

impl<T: Tagger + ?Sized> Tagger for Box<T> {
    fn tag(&self, words: &[&str]) -> CollaboratorResult<Vec<TaggedWord>> {
        (**self).tag(words)
    }
}

impl<T: Tagger + ?Sized> Tagger for Arc<T> {
    fn tag(&self, words: &[&str]) -> CollaboratorResult<Vec<TaggedWord>> {
        (**self).tag(words)
    }
}

/// Word-list tagger with suffix heuristics for words it does not know.
///
/// Lookups are case-insensitive. A left-to-right pass lets the previous tag
/// steer a few choices, e.g. a base verb right after a determiner is read as
/// a noun ("the work").
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: HashMap<String, &'static str>,
}

/// First listed tag wins for words under several tags.
static BUNDLED_LEXICON: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut lexicon = HashMap::new();
    for (tag, words) in TAGGED_WORDS {
        for word in *words {
            lexicon.entry(word.to_string()).or_insert(*tag);
        }
    }
    lexicon
});

impl Default for LexiconTagger {
    fn default() -> Self {
        Self {
            lexicon: BUNDLED_LEXICON.clone(),
        }
    }
}

impl LexiconTagger {
    /// Add or override a lexicon entry.
    pub fn with_word(mut self, word: &str, tag: &'static str) -> Self {
        self.lexicon.insert(word.to_lowercase(), tag);
        self
    }

    fn tag_word(&self, word: &str, previous: Option<&str>) -> &'static str {
        if let Some(tag) = punctuation_tag(word) {
            return tag;
        }
        if word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return "CD";
        }

        let lower = word.to_lowercase();
        if let Some(&tag) = self.lexicon.get(&lower) {
            return match (tag, previous) {
                ("VB" | "VBP", Some("DT" | "PRP$" | "JJ")) => "NN",
                _ => tag,
            };
        }

        if matches!(previous, Some("TO" | "MD")) {
            return "VB";
        }
        guess_by_suffix(&lower, previous)
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, words: &[&str]) -> CollaboratorResult<Vec<TaggedWord>> {
        let mut tagged: Vec<TaggedWord> = Vec::with_capacity(words.len());
        for word in words {
            let previous = tagged.last().map(|t| t.tag.as_str());
            let tag = self.tag_word(word, previous);
            tagged.push(TaggedWord::new(*word, tag));
        }
        Ok(tagged)
    }
}

fn punctuation_tag(word: &str) -> Option<&'static str> {
    if word.is_empty() || word.chars().any(char::is_alphanumeric) {
        return None;
    }
    Some(match word {
        "." | "?" | "!" => ".",
        "," => ",",
        ";" | ":" | "-" | "--" => ":",
        "(" => "(",
        ")" => ")",
        _ => "SYM",
    })
}

fn guess_by_suffix(word: &str, previous: Option<&str>) -> &'static str {
    const ADJECTIVE_SUFFIXES: &[&str] = &[
        "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish",
    ];
    const NOUN_SUFFIXES: &[&str] = &["tion", "sion", "ment", "ness", "ity", "ism", "er", "or"];

    if word.ends_with("ing") {
        "VBG"
    } else if word.ends_with("ed") {
        "VBD"
    } else if word.ends_with("ly") {
        "RB"
    } else if ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        "JJ"
    } else if NOUN_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        "NN"
    } else if word.ends_with('s') && !word.ends_with("ss") {
        match previous {
            Some("PRP" | "NN" | "NNP") => "VBZ",
            _ => "NNS",
        }
    } else {
        "NN"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(words: &[&str]) -> Vec<String> {
        LexiconTagger::default()
            .tag(words)
            .unwrap()
            .into_iter()
            .map(|t| t.tag)
            .collect()
    }

    #[test]
    fn closed_class_words() {
        assert_eq!(tags(&["the", "big", "cat"]), ["DT", "JJ", "NN"]);
        assert_eq!(tags(&["she", "doesn't", "like", "cats"]), ["PRP", "VBZ", "VB", "NNS"]);
    }

    #[test]
    fn unknown_words_use_suffixes() {
        assert_eq!(
            tags(&["jumping", "happened", "gently", "famous", "creation"]),
            ["VBG", "VBD", "RB", "JJ", "NN"]
        );
    }

    #[test]
    fn previous_tag_steers_choice() {
        // "he walks" - unknown plural-looking word after a pronoun reads as a verb
        assert_eq!(tags(&["he", "jogs"]), ["PRP", "VBZ"]);
        assert_eq!(tags(&["to", "zorp"]), ["TO", "VB"]);
        assert_eq!(tags(&["the", "study"]), ["DT", "NN"]);
    }

    #[test]
    fn punctuation_and_numbers() {
        assert_eq!(tags(&["cats", ",", "42", "!"]), ["NNS", ",", "CD", "."]);
    }

    #[test]
    fn one_tag_per_word() {
        let words = ["a", "b", "c", "d"];
        assert_eq!(LexiconTagger::default().tag(&words).unwrap().len(), words.len());
    }
}
