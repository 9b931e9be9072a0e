//! Word categories, the parts of speech they report as, and confidence.

use std::fmt;

use serde::Serialize;

/// Preterminal categories a grammar can assign to a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Det,
    Noun,
    Verb,
    Adj,
    Adv,
    Pron,
    Prep,
    Conj,
    Interj,
    PropNoun,
    Aux,
    InfTo,
    Comp,
    Punc,
    Poss,
    Num,
    Be,
    Have,
    Modal,
    VerbIng,
    VerbPp,
    Very,
}

impl Category {
    /// Parse a grammar symbol name. Phrase labels (NP, VP, ...) are not categories.
    pub fn from_symbol_name(name: &str) -> Option<Self> {
        Some(match name {
            "DET" => Category::Det,
            "NOUN" => Category::Noun,
            "VERB" => Category::Verb,
            "ADJ" => Category::Adj,
            "ADV" => Category::Adv,
            "PRON" => Category::Pron,
            "PREP" => Category::Prep,
            "CONJ" => Category::Conj,
            "INTERJ" => Category::Interj,
            "PROP_NOUN" => Category::PropNoun,
            "AUX" => Category::Aux,
            "INFTO" => Category::InfTo,
            "COMP" => Category::Comp,
            "PUNC" => Category::Punc,
            "POSS" => Category::Poss,
            "NUM" => Category::Num,
            "BE" => Category::Be,
            "HAVE" => Category::Have,
            "MODAL" => Category::Modal,
            "VERB_ING" => Category::VerbIng,
            "VERB_PP" => Category::VerbPp,
            "VERY" => Category::Very,
            _ => return None,
        })
    }

    pub fn part_of_speech(self) -> PartOfSpeech {
        match self {
            Category::Noun => PartOfSpeech::Noun,
            Category::PropNoun => PartOfSpeech::ProperNoun,
            Category::Verb
            | Category::Aux
            | Category::Be
            | Category::Have
            | Category::Modal
            | Category::VerbIng
            | Category::VerbPp => PartOfSpeech::Verb,
            Category::Adj => PartOfSpeech::Adjective,
            Category::Adv | Category::Very => PartOfSpeech::Adverb,
            Category::Pron | Category::Poss => PartOfSpeech::Pronoun,
            Category::Prep | Category::InfTo => PartOfSpeech::Preposition,
            Category::Det => PartOfSpeech::Article,
            Category::Conj | Category::Comp => PartOfSpeech::Conjunction,
            Category::Interj => PartOfSpeech::Interjection,
            Category::Punc => PartOfSpeech::Punctuation,
            Category::Num => PartOfSpeech::Determiner,
        }
    }
}

/// The part of speech reported for each analyzed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Article,
    Determiner,
    Conjunction,
    Interjection,
    Punctuation,
}

impl PartOfSpeech {
    /// Map a Penn Treebank tag. Tags outside the table read as nouns.
    pub fn from_penn_tag(tag: &str) -> Self {
        match tag {
            "NN" | "NNS" => PartOfSpeech::Noun,
            "NNP" | "NNPS" => PartOfSpeech::ProperNoun,
            "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" | "MD" => PartOfSpeech::Verb,
            "JJ" | "JJR" | "JJS" => PartOfSpeech::Adjective,
            "RB" | "RBR" | "RBS" => PartOfSpeech::Adverb,
            "PRP" | "PRP$" | "WP" | "WP$" => PartOfSpeech::Pronoun,
            "IN" | "TO" => PartOfSpeech::Preposition,
            "DT" | "PDT" | "WDT" => PartOfSpeech::Article,
            "CC" => PartOfSpeech::Conjunction,
            "UH" => PartOfSpeech::Interjection,
            "CD" => PartOfSpeech::Determiner,
            "." | "," | ":" => PartOfSpeech::Punctuation,
            _ => PartOfSpeech::Noun,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::ProperNoun => "PROPER_NOUN",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Adjective => "ADJECTIVE",
            PartOfSpeech::Adverb => "ADVERB",
            PartOfSpeech::Pronoun => "PRONOUN",
            PartOfSpeech::Preposition => "PREPOSITION",
            PartOfSpeech::Article => "ARTICLE",
            PartOfSpeech::Determiner => "DETERMINER",
            PartOfSpeech::Conjunction => "CONJUNCTION",
            PartOfSpeech::Interjection => "INTERJECTION",
            PartOfSpeech::Punctuation => "PUNCTUATION",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a word's part of speech was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// The grammar knows exactly one category for the word.
    High,
    /// Several categories fit and context picked one.
    Medium,
    /// The grammar had nothing; the tagger supplied the tag.
    Low,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_labels_are_not_categories() {
        assert_eq!(Category::from_symbol_name("NOUN"), Some(Category::Noun));
        assert_eq!(Category::from_symbol_name("NP"), None);
        assert_eq!(Category::from_symbol_name("S"), None);
    }

    #[test]
    fn penn_tags_default_to_noun() {
        assert_eq!(PartOfSpeech::from_penn_tag("VBZ"), PartOfSpeech::Verb);
        assert_eq!(PartOfSpeech::from_penn_tag("PRP$"), PartOfSpeech::Pronoun);
        assert_eq!(PartOfSpeech::from_penn_tag("FW"), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::from_penn_tag("SYM"), PartOfSpeech::Noun);
    }

    #[test]
    fn serialized_names() {
        assert_eq!(
            serde_json::to_string(&PartOfSpeech::ProperNoun).unwrap(),
            "\"PROPER_NOUN\""
        );
        assert_eq!(serde_json::to_string(&Confidence::Medium).unwrap(), "\"medium\"");
    }
}
