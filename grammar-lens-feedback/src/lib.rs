#![doc(
    html_logo_url = "https://raw.githubusercontent.com/grammar-lens/grammar-lens/main/assets/grammar-lens.svg",
    issue_tracker_base_url = "https://github.com/grammar-lens/grammar-lens/issues/"
)]

//! Feedback on a correction: what changed, and what kind of error it was.
//!
//! - [`compute_edits`] / [`opcodes`] - character-level diff of two strings
//! - [`ErrorClassifier`] - fixed battery of rules labeling the correction
//! - [`ErrorTally`] - counts of labeled errors per kind
//!
//! ```
//! use grammar_lens_feedback::{compute_edits, ErrorClassifier, ErrorKind};
//!
//! let edits = compute_edits("She go home.", "She goes home.");
//! assert_eq!(edits.len(), 1);
//! assert_eq!(edits[0].message, "Insert 'es'");
//!
//! let errors = ErrorClassifier::english().classify("She go home.", "She goes home.");
//! assert!(errors.iter().any(|e| e.kind == ErrorKind::SubjectVerbAgreement));
//! ```

mod classifier;
mod diff;
mod patterns;
mod tally;

pub use classifier::{ClassifiedError, ErrorClassifier, ErrorKind};
pub use diff::{compute_edits, opcodes, EditKind, EditOp, Opcode};
pub use tally::ErrorTally;

#[cfg(test)]
mod tests {
    mod classifier;
    mod diff;
}
