//! Errors surfaced by the correction service.

use std::io;

use grammar_lens::{Collaborator, CollaboratorError};
use thiserror::Error;

/// Failure to load a [`crate::ServiceConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors from building or running a [`crate::GrammarService`].
///
/// Degraded analysis is not an error. A missing or failing corrector, an
/// unreachable tagger or spell-checker, rejected input and an unreadable
/// config file are.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required collaborator was not supplied to the builder.
    #[error("no {0} configured")]
    MissingCollaborator(Collaborator),

    #[error("input has {chars} characters, the limit is {limit}")]
    InputTooLong { chars: usize, limit: usize },

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
