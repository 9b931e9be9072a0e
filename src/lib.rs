#![doc(
    html_logo_url = "https://raw.githubusercontent.com/grammar-lens/grammar-lens/main/assets/grammar-lens.svg",
    issue_tracker_base_url = "https://github.com/grammar-lens/grammar-lens/issues/"
)]

//! Shared primitives for grammar-lens.
//!
//! This crate holds what every analysis layer needs:
//!
//! - [`Token`] and [`tokenize`] - sentence normalization and word splitting
//! - [`Tagger`] - part-of-speech tagging contract, with the bundled [`LexiconTagger`]
//! - [`SpellChecker`] - dictionary contract, with the bundled [`WordListSpellChecker`]
//! - [`Corrector`] - the opaque text-to-text correction contract
//!
//! Collaborators are passed explicitly to the layers that use them, so a test
//! can swap any of them for a stub:
//!
//! ```
//! use grammar_lens::{tokenize, LexiconTagger, Tagger};
//!
//! let tokens = tokenize("The cat is happy.");
//! let words: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
//! assert_eq!(words, ["the", "cat", "is", "happy"]);
//!
//! let tagged = LexiconTagger::default().tag(&words).unwrap();
//! assert_eq!(tagged[1].tag, "NN");
//! ```

mod corrector;
mod error;
mod lexicon;
mod spelling;
mod tagger;
mod token;

pub use corrector::{Corrector, IdentityCorrector};
pub use error::{Collaborator, CollaboratorError, CollaboratorResult};
pub use spelling::{SpellChecker, WordListSpellChecker};
pub use tagger::{LexiconTagger, TaggedWord, Tagger};
pub use token::{normalize_sentence, tokenize, Token, TERMINAL_PUNCTUATION};

#[cfg(test)]
mod tests {
    mod token;
}
