//! Errors raised by external collaborators.

use std::fmt;

use thiserror::Error;

/// The external components the analysis layers depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collaborator {
    /// Text-to-text correction model
    Corrector,
    /// Statistical part-of-speech tagger
    Tagger,
    /// Dictionary spell-checker
    SpellChecker,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Collaborator::Corrector => "corrector",
            Collaborator::Tagger => "tagger",
            Collaborator::SpellChecker => "spell-checker",
        })
    }
}

/// A collaborator could not serve a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// The collaborator is not loaded or cannot be reached.
    #[error("{collaborator} is unavailable")]
    Unavailable { collaborator: Collaborator },

    /// The collaborator was reached but produced no usable answer.
    #[error("{collaborator} failed: {message}")]
    Failed {
        collaborator: Collaborator,
        message: String,
    },
}

impl CollaboratorError {
    pub fn failed(collaborator: Collaborator, message: impl Into<String>) -> Self {
        CollaboratorError::Failed {
            collaborator,
            message: message.into(),
        }
    }

    /// Whether the collaborator could not be reached at all, as opposed to
    /// answering badly.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CollaboratorError::Unavailable { .. })
    }

    /// Which collaborator raised this error.
    pub fn collaborator(&self) -> Collaborator {
        match self {
            CollaboratorError::Unavailable { collaborator }
            | CollaboratorError::Failed { collaborator, .. } => *collaborator,
        }
    }
}

/// Result type for collaborator calls.
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;
