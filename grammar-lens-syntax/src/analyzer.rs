//! Sentence analysis: CYK parse first, tagger fallback for the rest.
//!
//! A sentence the grammar accepts gets one item per word, labeled from the
//! lexical row of the parse table, followed by a `valid` structure item with
//! its subject, verb and object. Anything else is tagged by the injected
//! [`Tagger`] and closes with an `invalid` structure item carrying
//! suggestions.
//!
//! ```
//! use grammar_lens_syntax::{AnalysisItem, Confidence, SentenceAnalyzer};
//!
//! let analyzer = SentenceAnalyzer::english();
//! let items = analyzer.analyze("The cat is happy.");
//!
//! assert_eq!(items.len(), 5);
//! assert!(items.last().and_then(AnalysisItem::as_structure).unwrap().is_valid());
//! assert_eq!(items[1].as_word().unwrap().confidence, Confidence::High);
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use grammar_lens::{
    tokenize, Collaborator, CollaboratorError, CollaboratorResult, LexiconTagger, TaggedWord,
    Tagger, Token,
};
use serde::{Serialize, Serializer};

use crate::structure::{extract_components, suggest};
use crate::{
    english, Category, Component, Confidence, Grammar, ParseTable, PartOfSpeech, Suggestion,
    Symbol,
};

/// Part of speech for one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordAnalysis {
    pub word: String,
    pub pos: PartOfSpeech,
    pub confidence: Confidence,
}

impl WordAnalysis {
    pub fn new(word: impl Into<String>, pos: PartOfSpeech, confidence: Confidence) -> Self {
        Self {
            word: word.into(),
            pos,
            confidence,
        }
    }
}

/// Verdict on the sentence as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "value", rename_all = "lowercase")]
pub enum SentenceStructure {
    Valid { components: Vec<Component> },
    Invalid { suggestions: Vec<Suggestion> },
}

impl SentenceStructure {
    pub fn is_valid(&self) -> bool {
        matches!(self, SentenceStructure::Valid { .. })
    }

    pub fn components(&self) -> &[Component] {
        match self {
            SentenceStructure::Valid { components } => components,
            SentenceStructure::Invalid { .. } => &[],
        }
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            SentenceStructure::Valid { .. } => &[],
            SentenceStructure::Invalid { suggestions } => suggestions,
        }
    }
}

/// One entry of an analysis: a word, or the closing structure marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisItem {
    Word(WordAnalysis),
    Structure(SentenceStructure),
}

impl AnalysisItem {
    pub fn as_word(&self) -> Option<&WordAnalysis> {
        match self {
            AnalysisItem::Word(word) => Some(word),
            AnalysisItem::Structure(_) => None,
        }
    }

    pub fn as_structure(&self) -> Option<&SentenceStructure> {
        match self {
            AnalysisItem::Word(_) => None,
            AnalysisItem::Structure(structure) => Some(structure),
        }
    }
}

#[derive(Serialize)]
struct StructureRecord<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    structure: &'a SentenceStructure,
}

impl Serialize for AnalysisItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AnalysisItem::Word(word) => word.serialize(serializer),
            AnalysisItem::Structure(structure) => StructureRecord {
                kind: "sentence_structure",
                structure,
            }
            .serialize(serializer),
        }
    }
}

/// Analyzes sentences against a grammar, falling back to a tagger.
#[derive(Debug, Clone)]
pub struct SentenceAnalyzer<T> {
    grammar: Arc<Grammar>,
    tagger: T,
}

impl SentenceAnalyzer<LexiconTagger> {
    /// The built-in English grammar with the bundled tagger.
    pub fn english() -> Self {
        Self::new(english(), LexiconTagger::default())
    }
}

impl<T: Tagger> SentenceAnalyzer<T> {
    pub fn new(grammar: Arc<Grammar>, tagger: T) -> Self {
        Self { grammar, tagger }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Analyze one sentence.
    ///
    /// Never fails: empty input gives an empty list, and any tagger fault is
    /// logged and also gives an empty list.
    pub fn analyze(&self, text: &str) -> Vec<AnalysisItem> {
        self.try_analyze(text).unwrap_or_else(|error| {
            tracing::warn!(%error, "sentence analysis skipped");
            Vec::new()
        })
    }

    /// Like [`analyze`](Self::analyze), except that an unavailable tagger is
    /// returned as an error. A tagger that answers badly still degrades to an
    /// empty list.
    pub fn try_analyze(&self, text: &str) -> CollaboratorResult<Vec<AnalysisItem>> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        match self.analyze_tokens(&tokens) {
            Err(error) if !error.is_unavailable() => {
                tracing::warn!(%error, tokens = tokens.len(), "sentence analysis skipped");
                Ok(Vec::new())
            }
            result => result,
        }
    }

    fn analyze_tokens(&self, tokens: &[Token]) -> CollaboratorResult<Vec<AnalysisItem>> {
        let table = ParseTable::parse(&self.grammar, tokens);
        let valid = table.is_sentence(&self.grammar);
        tracing::debug!(tokens = tokens.len(), valid, "parsed sentence");

        if valid {
            self.describe_parse(tokens, &table)
        } else {
            self.describe_failure(tokens)
        }
    }

    fn describe_parse(
        &self,
        tokens: &[Token],
        table: &ParseTable,
    ) -> CollaboratorResult<Vec<AnalysisItem>> {
        let categories: Vec<Vec<Category>> = tokens
            .iter()
            .map(|t| categories_of(&self.grammar, table.labels(t.position())))
            .collect();
        let mut tagged: Option<Vec<TaggedWord>> = None;
        let mut items = Vec::with_capacity(tokens.len() + 1);

        for (i, token) in tokens.iter().enumerate() {
            let candidates = &categories[i];
            let word = match candidates.as_slice() {
                [] => {
                    if tagged.is_none() {
                        tagged = Some(self.tag_tokens(tokens)?);
                    }
                    let tag = tagged.as_ref().map_or("", |t| t[i].tag.as_str());
                    let pos = PartOfSpeech::from_penn_tag(tag);
                    WordAnalysis::new(token.text(), pos, Confidence::Low)
                }
                [only] => WordAnalysis::new(token.text(), only.part_of_speech(), Confidence::High),
                _ => {
                    let previous = i.checked_sub(1).map(|p| categories[p].as_slice());
                    let next = categories.get(i + 1).map(Vec::as_slice);
                    let chosen = resolve(candidates, previous, next);
                    WordAnalysis::new(token.text(), chosen.part_of_speech(), Confidence::Medium)
                }
            };
            items.push(AnalysisItem::Word(word));
        }

        let components = extract_components(&self.grammar, table, tokens);
        items.push(AnalysisItem::Structure(SentenceStructure::Valid { components }));
        Ok(items)
    }

    fn describe_failure(&self, tokens: &[Token]) -> CollaboratorResult<Vec<AnalysisItem>> {
        let tagged = self.tag_tokens(tokens)?;
        let suggestions = suggest(&tagged);

        let mut items: Vec<AnalysisItem> = tagged
            .iter()
            .map(|t| {
                AnalysisItem::Word(WordAnalysis::new(
                    t.word.clone(),
                    PartOfSpeech::from_penn_tag(&t.tag),
                    Confidence::Low,
                ))
            })
            .collect();
        items.push(AnalysisItem::Structure(SentenceStructure::Invalid { suggestions }));
        Ok(items)
    }

    fn tag_tokens(&self, tokens: &[Token]) -> CollaboratorResult<Vec<TaggedWord>> {
        let words: Vec<&str> = tokens.iter().map(Token::text).collect();
        let tagged = self.tagger.tag(&words)?;
        if tagged.len() != words.len() {
            return Err(CollaboratorError::failed(
                Collaborator::Tagger,
                format!("{} tags for {} words", tagged.len(), words.len()),
            ));
        }
        Ok(tagged)
    }
}

/// Grammar categories among a cell's symbols, in symbol order.
fn categories_of(grammar: &Grammar, labels: &BTreeSet<Symbol>) -> Vec<Category> {
    labels
        .iter()
        .filter_map(|&s| Category::from_symbol_name(grammar.name(s)))
        .collect()
}

/// Pick one category for an ambiguous word from its neighbours' candidates.
///
/// Noun after a determiner, else verb after a noun, else adjective before a
/// noun, else the first candidate.
fn resolve(
    candidates: &[Category],
    previous: Option<&[Category]>,
    next: Option<&[Category]>,
) -> Category {
    let previous_has = |c: Category| previous.map_or(false, |p| p.contains(&c));
    let next_has = |c: Category| next.map_or(false, |n| n.contains(&c));

    if candidates.contains(&Category::Noun) && previous_has(Category::Det) {
        Category::Noun
    } else if candidates.contains(&Category::Verb) && previous_has(Category::Noun) {
        Category::Verb
    } else if candidates.contains(&Category::Adj) && next_has(Category::Noun) {
        Category::Adj
    } else {
        candidates[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determiner_makes_a_noun() {
        let chosen = resolve(
            &[Category::Verb, Category::Noun],
            Some(&[Category::Det]),
            None,
        );
        assert_eq!(chosen, Category::Noun);
    }

    #[test]
    fn noun_makes_a_verb() {
        let chosen = resolve(
            &[Category::Noun, Category::Verb],
            Some(&[Category::Noun]),
            None,
        );
        assert_eq!(chosen, Category::Verb);
    }

    #[test]
    fn following_noun_makes_an_adjective() {
        let chosen = resolve(
            &[Category::Noun, Category::Adj],
            Some(&[Category::Prep]),
            Some(&[Category::Noun]),
        );
        assert_eq!(chosen, Category::Adj);
    }
}
