//! Built-in English grammar.
//!
//! Covers simple declarative sentences: noun phrases with determiners,
//! possessives, numerals and adjectives; verb phrases with objects,
//! auxiliaries, modals, the copula, progressive and perfect forms,
//! infinitives and complements; prepositional, adjective and adverb
//! phrases; coordination, interjections and clause-initial modifiers.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::Grammar;

/// Start symbol of the English grammar.
pub const SENTENCE: &str = "S";

const LEXICON: &[(&str, &[&str])] = &[
    (
        "DET",
        &[
            "the", "a", "an", "this", "that", "these", "those", "some", "any", "every", "each",
            "no", "all", "both", "few", "many", "several",
        ],
    ),
    ("POSS", &["my", "your", "his", "her", "its", "our", "their"]),
    (
        "NOUN",
        &[
            "book", "cat", "dog", "house", "car", "student", "teacher", "computer", "city",
            "country", "food", "water", "day", "time", "year", "person", "man", "woman",
            "child", "boy", "girl", "friend", "family", "school", "work", "job", "money",
            "life", "world", "way", "thing", "problem", "question", "answer", "idea", "mind",
            "fact", "case", "point", "system", "group", "company", "business", "market",
            "team", "customer", "product", "service", "price", "cost", "technology",
            "software", "data", "information", "research", "development", "management",
            "movie", "park", "english", "books", "cats", "dogs", "friends", "students",
            "people", "children", "movies",
        ],
    ),
    (
        "VERB",
        &[
            "is", "are", "am", "was", "were", "be", "been", "run", "walk", "read", "write",
            "study", "eat", "drink", "play", "work", "live", "go", "come", "see", "hear",
            "know", "think", "feel", "want", "need", "like", "love", "hate", "make", "take",
            "give", "find", "use", "help", "start", "stop", "create", "develop", "build",
            "design", "implement", "test", "analyze", "evaluate", "improve", "increase",
            "decrease", "change", "manage", "lead", "speak", "finish", "likes", "loves",
            "goes", "went", "speaks", "eats", "ate", "plays", "runs", "walks", "reads",
            "writes", "came", "finished", "wants", "needs",
        ],
    ),
    ("BE", &["is", "are", "am", "was", "were", "be", "been"]),
    ("HAVE", &["have", "has", "had"]),
    ("AUX", &["do", "does", "did", "don't", "doesn't", "didn't"]),
    (
        "MODAL",
        &["can", "could", "may", "might", "must", "shall", "should", "will", "would"],
    ),
    (
        "VERB_ING",
        &[
            "running", "walking", "eating", "sleeping", "studying", "working", "playing",
            "writing", "reading", "speaking", "going",
        ],
    ),
    (
        "VERB_PP",
        &[
            "run", "walked", "eaten", "slept", "studied", "worked", "played", "written",
            "read", "spoken", "gone", "been", "done", "seen", "finished",
        ],
    ),
    ("VERY", &["very", "really", "extremely", "quite", "rather"]),
    (
        "ADJ",
        &[
            "big", "small", "red", "blue", "happy", "sad", "smart", "beautiful", "ugly",
            "good", "bad", "new", "old", "young", "tall", "short", "rich", "poor", "busy",
            "free", "easy", "difficult", "important", "necessary", "possible", "impossible",
            "different", "efficient", "effective", "innovative", "creative", "productive",
            "successful", "professional", "technical", "scientific", "digital", "global",
            "local", "strategic", "operational",
        ],
    ),
    (
        "ADV",
        &[
            "quickly", "slowly", "carefully", "happily", "sadly", "very", "really", "too",
            "quite", "almost", "always", "never", "sometimes", "often", "rarely", "usually",
            "here", "there", "now", "then", "today", "yesterday", "tomorrow", "already",
            "still", "just", "only", "well", "better", "best", "badly", "worse", "worst",
            "effectively", "efficiently",
        ],
    ),
    (
        "PRON",
        &[
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
            "mine", "yours", "his", "hers", "ours", "theirs", "myself", "yourself", "himself",
            "herself", "itself", "ourselves", "yourselves", "themselves", "who", "whom",
            "whose",
        ],
    ),
    (
        "PREP",
        &[
            "in", "on", "at", "to", "from", "with", "by", "for", "of", "about", "between",
            "among", "through", "during", "before", "after", "above", "below", "under",
            "over", "behind", "beside", "near", "within", "without", "despite", "except",
        ],
    ),
    (
        "PROP_NOUN",
        &[
            "john", "mary", "london", "paris", "america", "china", "germany", "france",
            "japan", "russia", "google", "microsoft", "facebook", "twitter", "amazon",
            "apple", "monday", "tuesday", "wednesday", "thursday", "friday", "saturday",
            "sunday", "january", "february", "march", "april", "may", "june", "july",
            "august",
        ],
    ),
    (
        "CONJ",
        &[
            "and", "or", "but", "so", "because", "if", "when", "while", "although", "though",
            "since", "until", "unless", "as", "whether", "before", "after", "where",
            "whereas",
        ],
    ),
    (
        "INTERJ",
        &["oh", "wow", "ouch", "hello", "hi", "goodbye", "bye", "hey", "well", "ah"],
    ),
    ("INFTO", &["to"]),
    (
        "COMP",
        &["that", "which", "who", "whom", "whose", "where", "when", "why", "how"],
    ),
    ("PUNC", &[".", "?", "!", ",", ";", ":"]),
    (
        "NUM",
        &[
            "one", "two", "three", "four", "five", "first", "second", "third", "fourth",
            "fifth", "many", "few", "several", "some", "any", "all", "both", "half",
            "quarter",
        ],
    ),
];

/// Phrase labels a preterminal also carries on its own, in place of unit
/// rules such as `NP -> PRON`.
const PROJECTIONS: &[(&str, &[&str])] = &[
    ("NOUN", &["NOM", "NP"]),
    ("PRON", &["NP"]),
    ("PROP_NOUN", &["NP"]),
    ("VERB", &["VP"]),
    ("ADJ", &["ADJP"]),
    ("ADV", &["ADVP"]),
];

const BINARY: &[(&str, &str, &str)] = &[
    // Sentences
    ("S", "NP", "VP"),
    ("S", "NP", "ADVP_VP"),
    ("S", "S", "PP"),
    ("S", "S", "ADVP"),
    ("S", "ADVP", "S"),
    ("S", "PP", "S"),
    ("S", "INTERJ", "S"),
    ("S", "CONJ", "S"),
    ("S", "S", "CONJ_S"),
    ("S", "COMP", "S"),
    ("S", "S", "COMP_S"),
    ("S", "S", "PUNC"),
    ("S", "INFTO", "VP"),
    ("ADVP_VP", "ADVP", "VP"),
    ("CONJ_S", "CONJ", "S"),
    ("COMP_S", "COMP", "S"),
    // Noun phrases
    ("NP", "DET", "NOM"),
    ("NP", "POSS", "NOM"),
    ("NP", "NUM", "NOM"),
    ("NP", "ADJ", "NOM"),
    ("NP", "NOUN", "NOM"),
    ("NP", "PROP_NOUN", "NOM"),
    ("NP", "NP", "PP"),
    ("NP", "NP", "CONJ_NP"),
    ("NOM", "ADJ", "NOM"),
    ("NOM", "NUM", "NOM"),
    ("NOM", "NOUN", "NOM"),
    ("CONJ_NP", "CONJ", "NP"),
    // Verb phrases
    ("VP", "VERB", "NP"),
    ("VP", "VERB", "ADVP"),
    ("VP", "VERB", "PP"),
    ("VP", "VERB", "ADJP"),
    ("VP", "VERB", "INF"),
    ("VP", "VERB", "COMP"),
    ("VP", "VERB", "COMP_S"),
    ("VP", "VP", "NP"),
    ("VP", "VP", "PP"),
    ("VP", "VP", "ADVP"),
    ("VP", "VP", "INF"),
    ("VP", "VP", "CONJ_VP"),
    ("VP", "AUX", "VP"),
    ("VP", "MODAL", "VP"),
    ("VP", "MODAL", "HAVE_PP"),
    ("VP", "BE", "VERB_ING"),
    ("VP", "BE", "GER"),
    ("VP", "BE", "ADJP"),
    ("VP", "BE", "NP"),
    ("VP", "BE", "PP"),
    ("VP", "HAVE", "VERB_PP"),
    ("VP", "HAVE", "NP"),
    ("HAVE_PP", "HAVE", "VERB_PP"),
    ("INF", "INFTO", "VP"),
    ("CONJ_VP", "CONJ", "VP"),
    ("GER", "VERB_ING", "NP"),
    // Prepositional phrases
    ("PP", "PREP", "NP"),
    ("PP", "PREP", "GER"),
    // Adjective phrases
    ("ADJP", "ADV", "ADJP"),
    ("ADJP", "VERY", "ADJP"),
    ("ADJP", "ADJP", "CONJ_ADJP"),
    ("ADJP", "ADJP", "PP"),
    ("ADJP", "ADJP", "INF"),
    ("ADJP", "ADJ", "COMP_S"),
    ("CONJ_ADJP", "CONJ", "ADJP"),
    // Adverb phrases
    ("ADVP", "ADV", "ADVP"),
    ("ADVP", "VERY", "ADVP"),
    ("ADVP", "ADVP", "CONJ_ADVP"),
    ("ADVP", "ADV", "INF"),
    ("CONJ_ADVP", "CONJ", "ADVP"),
];

static ENGLISH: Lazy<Arc<Grammar>> = Lazy::new(|| Arc::new(build()));

/// The shared English grammar. Built on first use, read-only afterwards.
pub fn english() -> Arc<Grammar> {
    Arc::clone(&ENGLISH)
}

fn build() -> Grammar {
    let mut builder = Grammar::builder(SENTENCE);

    for (category, words) in LEXICON {
        let projections = PROJECTIONS
            .iter()
            .find(|(c, _)| c == category)
            .map_or(&[][..], |(_, phrases)| *phrases);

        for word in *words {
            builder.lexical(category, word);
            for phrase in projections {
                builder.lexical(phrase, word);
            }
        }
    }

    for (lhs, left, right) in BINARY {
        builder.binary(lhs, left, right);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preterminals_carry_their_phrase_labels() {
        let grammar = english();
        let labels: Vec<&str> = grammar
            .lexical_symbols("cat")
            .iter()
            .map(|&s| grammar.name(s))
            .collect();
        assert_eq!(labels, ["NOUN", "NOM", "NP"]);

        let labels: Vec<&str> = grammar
            .lexical_symbols("is")
            .iter()
            .map(|&s| grammar.name(s))
            .collect();
        assert_eq!(labels, ["VERB", "VP", "BE"]);
    }

    #[test]
    fn only_cnf_productions() {
        let grammar = english();
        assert_eq!(grammar.name(grammar.start()), SENTENCE);
        assert!(grammar.productions().len() > BINARY.len());
    }

    #[test]
    fn shared_instance() {
        assert!(Arc::ptr_eq(&english(), &english()));
    }
}
