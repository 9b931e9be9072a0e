//! Sentence normalization and word tokens.

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// Marks that end a sentence. At most one is stripped before tokenizing.
pub const TERMINAL_PUNCTUATION: &[char] = &['.', '?', '!'];

/// A word of the input and its index in the token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    text: String,
    position: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

/// Lowercase the sentence and drop a single trailing terminal punctuation mark.
///
/// ```
/// use grammar_lens::normalize_sentence;
///
/// assert_eq!(normalize_sentence("  Is it raining?! "), "is it raining?");
/// ```
pub fn normalize_sentence(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    match lowered.strip_suffix(TERMINAL_PUNCTUATION) {
        Some(rest) => rest.to_string(),
        None => lowered,
    }
}

/// Normalize `text` and split it into word tokens.
///
/// Splitting follows Unicode word boundaries, so contractions such as
/// "don't" stay whole and inner punctuation becomes its own token.
/// Whitespace never produces a token.
pub fn tokenize(text: &str) -> Vec<Token> {
    normalize_sentence(text)
        .split_word_bounds()
        .filter(|segment| !segment.chars().all(char::is_whitespace))
        .enumerate()
        .map(|(position, segment)| Token::new(segment, position))
        .collect()
}
