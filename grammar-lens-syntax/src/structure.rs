//! Sentence components for parsed input and suggestions for the rest.

use std::fmt;

use grammar_lens::{TaggedWord, Token};
use serde::{Serialize, Serializer};

use crate::{Grammar, ParseTable, Symbol};

/// Grammatical role of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentRole {
    Subject,
    Verb,
    Object,
}

impl fmt::Display for ComponentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ComponentRole::Subject => "subject",
            ComponentRole::Verb => "verb",
            ComponentRole::Object => "object",
        })
    }
}

/// A labeled part of a well-formed sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub role: ComponentRole,
    pub words: Vec<String>,
    pub position: usize,
}

impl Component {
    fn at(role: ComponentRole, token: &Token) -> Self {
        Self {
            role,
            words: vec![token.text().to_string()],
            position: token.position(),
        }
    }
}

/// A hint for a sentence the grammar could not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suggestion {
    MissingSubject,
    MissingVerb,
    /// A verb directly precedes a noun.
    WordOrder,
}

impl Suggestion {
    pub fn message(self) -> &'static str {
        match self {
            Suggestion::MissingSubject => "missing subject",
            Suggestion::MissingVerb => "missing verb",
            Suggestion::WordOrder => "check word order: a verb comes directly before a noun",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Suggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Subject, verb and object picked from the lexical row of a successful parse.
///
/// First match wins for each role: the first NP-labeled token is the subject,
/// the first VP-labeled token the verb, and the first NP-labeled token right
/// after a VP-labeled one the object. Roles with no match are left out.
pub fn extract_components(
    grammar: &Grammar,
    table: &ParseTable,
    tokens: &[Token],
) -> Vec<Component> {
    let np = grammar.symbol("NP");
    let vp = grammar.symbol("VP");
    let has = |position: usize, symbol: Option<Symbol>| {
        symbol.map_or(false, |s| table.labels(position).contains(&s))
    };

    let mut components = Vec::new();

    if let Some(token) = tokens.iter().find(|t| has(t.position(), np)) {
        components.push(Component::at(ComponentRole::Subject, token));
    }
    if let Some(token) = tokens.iter().find(|t| has(t.position(), vp)) {
        components.push(Component::at(ComponentRole::Verb, token));
    }
    if let Some(token) = tokens
        .iter()
        .skip(1)
        .find(|t| has(t.position(), np) && has(t.position() - 1, vp))
    {
        components.push(Component::at(ComponentRole::Object, token));
    }

    components
}

/// Suggestions from the tagger's view of an unparsed sentence.
pub fn suggest(tagged: &[TaggedWord]) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if !tagged.iter().any(TaggedWord::is_noun) {
        suggestions.push(Suggestion::MissingSubject);
    }
    if !tagged.iter().any(TaggedWord::is_verb) {
        suggestions.push(Suggestion::MissingVerb);
    }
    if tagged
        .windows(2)
        .any(|pair| pair[0].is_verb() && pair[1].is_noun())
    {
        suggestions.push(Suggestion::WordOrder);
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(pairs: &[(&str, &str)]) -> Vec<TaggedWord> {
        pairs.iter().map(|(w, t)| TaggedWord::new(*w, *t)).collect()
    }

    #[test]
    fn no_noun_and_no_verb() {
        let words = tagged(&[("very", "RB"), ("quickly", "RB")]);
        assert_eq!(
            suggest(&words),
            [Suggestion::MissingSubject, Suggestion::MissingVerb]
        );
    }

    #[test]
    fn word_order_reported_once() {
        let words = tagged(&[
            ("eat", "VB"),
            ("apples", "NNS"),
            ("likes", "VBZ"),
            ("john", "NNP"),
        ]);
        assert_eq!(suggest(&words), [Suggestion::WordOrder]);
    }

    #[test]
    fn complete_clause_has_no_suggestions() {
        let words = tagged(&[("dogs", "NNS"), ("bark", "VBP")]);
        assert!(suggest(&words).is_empty());
    }
}
