//! Counts of classified errors per kind.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{ClassifiedError, ErrorKind};

/// Per-kind error counts, iterated in [`ErrorKind`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorTally {
    counts: BTreeMap<ErrorKind, usize>,
}

impl ErrorTally {
    pub fn from_errors<'a>(errors: impl IntoIterator<Item = &'a ClassifiedError>) -> Self {
        let mut tally = Self::default();
        for error in errors {
            tally.add(error.kind);
        }
        tally
    }

    pub fn add(&mut self, kind: ErrorKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    pub fn get(&self, kind: ErrorKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorKind, usize)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }
}

impl<'a> FromIterator<&'a ClassifiedError> for ErrorTally {
    fn from_iter<I: IntoIterator<Item = &'a ClassifiedError>>(iter: I) -> Self {
        Self::from_errors(iter)
    }
}
