// Stemming algorithm identifiers

use std::fmt;
use std::str::FromStr;

/// A language whose stemming rule program ships with this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Norwegian (Bokmål and Nynorsk share one rule program).
    Norwegian,
}

/// Error returned when a language code names no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language code: {0:?}")]
pub struct UnknownLanguage(pub String);

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: &'static [Algorithm] = &[Algorithm::Norwegian];

    /// The canonical ISO 639-1 code for this algorithm.
    pub fn code(self) -> &'static str {
        match self {
            Algorithm::Norwegian => "no",
        }
    }

    /// The English name of the language.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Norwegian => "norwegian",
        }
    }

    /// Resolve a language code or name, case-insensitively.
    ///
    /// Accepts ISO 639-1 (`no`, `nb`, `nn`), ISO 639-2 (`nor`, `nob`, `nno`)
    /// and the English name.
    pub fn from_code(code: &str) -> Option<Algorithm> {
        match code.trim().to_ascii_lowercase().as_str() {
            "no" | "nb" | "nn" | "nor" | "nob" | "nno" | "norwegian" => {
                Some(Algorithm::Norwegian)
            }
            _ => None,
        }
    }
}

impl FromStr for Algorithm {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
