//! The correction model contract.

use crate::CollaboratorResult;

/// Rewrites a sentence into its corrected form.
///
/// Implementations wrap a sequence-to-sequence model or a remote service.
/// Nothing is assumed about determinism across calls.
pub trait Corrector {
    fn correct(&self, text: &str) -> CollaboratorResult<String>;
}

impl<F> Corrector for F
where
    F: Fn(&str) -> CollaboratorResult<String>,
{
    fn correct(&self, text: &str) -> CollaboratorResult<String> {
        self(text)
    }
}

/// Returns its input unchanged. Useful when only analysis is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCorrector;

impl Corrector for IdentityCorrector {
    fn correct(&self, text: &str) -> CollaboratorResult<String> {
        Ok(text.to_string())
    }
}
