//! Snowball stemming virtual machine.
//!
//! Every Snowball stemmer is a small rewriting program over the characters
//! of one word. The programs differ per language only in their rule tables
//! and character groupings; the primitives they are built from live here.
//!
//! # Architecture
//!
//! - [`state`] -- Per-call scan state: buffer, cursor, window limits, slice bounds, region marks
//! - [`grouping`] -- Bitset character classes and single-character membership tests
//! - [`among`] -- Rule tables and the longest-match lookup with back-link chains
//! - [`region`] -- Narrowing the scan window to a region mark and restoring it
//! - [`slice`] -- Deleting, replacing and inserting text while keeping offsets consistent
//!
//! A [`RuleProgram`] holds only immutable tables. All mutable state of one
//! stem call lives in a [`ScanState`] created for that call, so a program can
//! be shared between threads without locking.

pub mod among;
pub mod grouping;
pub mod region;
pub mod slice;
pub mod state;

pub use among::{Among, Condition};
pub use grouping::{Grouping, Membership};
pub use region::RegionToken;
pub use state::{Mark, SavedCursor, ScanState};

/// Violation of the scan-state invariants.
///
/// These never depend on the input text; they signal a defect in a rule
/// program or a rule table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VmError {
    #[error("cursor {cursor} outside window [{limit_backward}, {limit}] (buffer length {len})")]
    CursorOutOfWindow {
        cursor: usize,
        limit_backward: usize,
        limit: usize,
        len: usize,
    },
    #[error("invalid slice [{bra}, {ket}) with limit {limit} (buffer length {len})")]
    InvalidSlice {
        bra: usize,
        ket: usize,
        limit: usize,
        len: usize,
    },
    #[error("region mark {mark} set to {value}, beyond buffer length {len}")]
    MarkOutOfBounds { mark: usize, value: usize, len: usize },
    #[error("malformed rule table at entry {index}: {reason}")]
    MalformedTable { index: usize, reason: &'static str },
}

/// Scan direction of a primitive.
///
/// Forward primitives look at the character at `cursor` and move right;
/// backward primitives look at the character at `cursor - 1` and move left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

/// A language's stemming program.
///
/// The `run` + `execute` pattern mirrors a prepared traversal: the program
/// is immutable, `execute` creates a fresh [`ScanState`] for each word and
/// `run` drives the rule groups over it.
pub trait RuleProgram {
    /// Number of region marks the program stores in the scan state.
    fn mark_count(&self) -> usize;

    /// Run every rule group over `state`.
    ///
    /// A rule group that does not apply is not an error; `Err` is reserved
    /// for invariant violations.
    fn run(&self, state: &mut ScanState) -> Result<(), VmError>;

    /// Stem an already case-folded word.
    fn execute(&self, word: Vec<char>) -> Result<String, VmError> {
        let mut state = ScanState::new(word, self.mark_count());
        self.run(&mut state)?;
        state.check_invariants()?;
        Ok(state.into_string())
    }
}
