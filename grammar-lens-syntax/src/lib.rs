#![doc(
    html_logo_url = "https://raw.githubusercontent.com/grammar-lens/grammar-lens/main/assets/grammar-lens.svg",
    issue_tracker_base_url = "https://github.com/grammar-lens/grammar-lens/issues/"
)]

//! Sentence-structure analysis for grammar-lens.
//!
//! ## Pieces
//!
//! - [`Grammar`] - immutable CNF rule table with lexical and pair indexes
//! - [`english()`] - the built-in English grammar, shared process-wide
//! - [`ParseTable`] - CYK chart for one token sequence
//! - [`extract_components`] / [`suggest`] - subject, verb and object for a
//!   parse, or hints when there is none
//! - [`SentenceAnalyzer`] - ties the above to an injected [`grammar_lens::Tagger`]
//! - [`AnalysisDisplay`] - column rendering for logs and snapshots
//!
//! ## Usage
//!
//! ```
//! use grammar_lens::tokenize;
//! use grammar_lens_syntax::{english, ParseTable};
//!
//! let grammar = english();
//! assert!(ParseTable::parse(&grammar, &tokenize("The cat is happy.")).is_sentence(&grammar));
//! assert!(!ParseTable::parse(&grammar, &tokenize("Cat the is.")).is_sentence(&grammar));
//! ```

mod analyzer;
mod category;
mod cyk;
mod display;
mod english;
mod grammar;
mod structure;

pub use analyzer::{AnalysisItem, SentenceAnalyzer, SentenceStructure, WordAnalysis};
pub use category::{Category, Confidence, PartOfSpeech};
pub use cyk::ParseTable;
pub use display::AnalysisDisplay;
pub use english::{english, SENTENCE};
pub use grammar::{Grammar, GrammarBuilder, GrammarError, Production, Rhs, Symbol};
pub use structure::{extract_components, suggest, Component, ComponentRole, Suggestion};

#[cfg(test)]
mod tests {
    mod analyzer;
    mod cyk;
}
