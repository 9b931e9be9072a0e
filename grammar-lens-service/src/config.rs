//! Service limits, loaded from TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Limits and switches for [`crate::GrammarService`].
///
/// ```toml
/// max_input_chars = 1000
/// max_parse_tokens = 40
/// split_sentences = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Longest accepted input, in characters.
    pub max_input_chars: usize,
    /// Sentences with more tokens skip structure analysis.
    pub max_parse_tokens: usize,
    /// Correct sentence by sentence instead of the whole text at once.
    pub split_sentences: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 1000,
            max_parse_tokens: 40,
            split_sentences: true,
        }
    }
}

impl ServiceConfig {
    /// Load from a TOML file. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
