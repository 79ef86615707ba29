// Stemmer handle: language selection and the public stem entry point

use std::fmt;

use snowball_core::character::fold_case;
use snowball_core::{Algorithm, UnknownLanguage};
use snowball_vm::{RuleProgram, VmError};

#[cfg(feature = "norwegian")]
use crate::norwegian::NorwegianStemmer;

type Program = dyn RuleProgram + Send + Sync;

/// Errors from creating a [`Stemmer`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StemmerError {
    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguage),
    #[error("{0} stemmer is not compiled in (enable the `{code}` feature)", code = .0.name())]
    NotCompiled(Algorithm),
}

fn program_for(algorithm: Algorithm) -> Option<&'static Program> {
    match algorithm {
        #[cfg(feature = "norwegian")]
        Algorithm::Norwegian => Some(&NorwegianStemmer),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

/// A stemmer for one language.
///
/// The handle holds only a reference to an immutable rule program; every
/// call builds its own scan state. It is `Copy`, `Send` and `Sync`.
#[derive(Clone, Copy)]
pub struct Stemmer {
    algorithm: Algorithm,
    program: &'static Program,
}

impl Stemmer {
    pub fn new(algorithm: Algorithm) -> Result<Self, StemmerError> {
        let program = program_for(algorithm).ok_or(StemmerError::NotCompiled(algorithm))?;
        tracing::debug!(%algorithm, marks = program.mark_count(), "stemmer ready");
        Ok(Self { algorithm, program })
    }

    /// Look up a stemmer by language code or name (`"no"`, `"nb"`, `"norwegian"`, ...).
    pub fn for_language(code: &str) -> Result<Self, StemmerError> {
        let algorithm: Algorithm = code.parse()?;
        Self::new(algorithm)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Stem one word.
    ///
    /// The word is lowercased char by char before the rules run, so the
    /// result is always lowercase. Never fails on any input.
    ///
    /// # Panics
    ///
    /// Panics only if the rule program breaks an engine invariant, which
    /// is a defect in the program and not in the input.
    pub fn stem(&self, word: &str) -> String {
        match self.try_stem(word) {
            Ok(stem) => stem,
            Err(err) => {
                tracing::error!(
                    %err,
                    word,
                    algorithm = %self.algorithm,
                    "rule program broke an engine invariant"
                );
                panic!("{} stemmer failed on {word:?}: {err}", self.algorithm);
            }
        }
    }

    /// Stem one word, reporting engine invariant violations as errors.
    pub fn try_stem(&self, word: &str) -> Result<String, VmError> {
        if word.is_empty() {
            return Ok(String::new());
        }
        self.program.execute(fold_case(word))
    }
}

impl fmt::Debug for Stemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stemmer").field("algorithm", &self.algorithm).finish_non_exhaustive()
    }
}
