//! Norwegian stemmer.
//!
//! Four rule groups run in order over a case-folded word:
//!
//! 1. `mark_regions` (forward) finds the region start `p1`: just past the
//!    first non-vowel that follows a vowel, but never before char 3.
//! 2. `main_suffix` (backward) removes or rewrites the longest inflectional
//!    ending inside the region.
//! 3. `consonant_pair` drops the `t` of a final `dt`/`vt` in the region.
//! 4. `other_suffix` removes one derivational ending inside the region.
//!
//! A group that does not apply leaves the word as it is; the next group
//! still runs.

pub mod tables;

use snowball_vm::{Direction, Mark, Membership, RuleProgram, ScanState, VmError};

use tables::{CONSONANT_PAIRS, MAIN_SUFFIXES, MainSuffix, OTHER_SUFFIXES, S_ENDING, VOWELS};

/// Start of the stemming region.
pub const P1: Mark = Mark::new(0);
/// Minimum region start: three chars into the word.
pub const X: Mark = Mark::new(1);

/// The rule groups of the Norwegian program, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleGroup {
    MarkRegions,
    MainSuffix,
    ConsonantPair,
    OtherSuffix,
}

impl RuleGroup {
    pub const ALL: [RuleGroup; 4] = [
        RuleGroup::MarkRegions,
        RuleGroup::MainSuffix,
        RuleGroup::ConsonantPair,
        RuleGroup::OtherSuffix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RuleGroup::MarkRegions => "mark_regions",
            RuleGroup::MainSuffix => "main_suffix",
            RuleGroup::ConsonantPair => "consonant_pair",
            RuleGroup::OtherSuffix => "other_suffix",
        }
    }

    /// Direction the group scans in.
    pub fn direction(self) -> Direction {
        match self {
            RuleGroup::MarkRegions => Direction::Forward,
            _ => Direction::Backward,
        }
    }

    /// Run the group once. `Ok(false)` means the group did not apply.
    pub fn apply(self, state: &mut ScanState) -> Result<bool, VmError> {
        match self {
            RuleGroup::MarkRegions => mark_regions(state),
            RuleGroup::MainSuffix => main_suffix(state),
            RuleGroup::ConsonantPair => consonant_pair(state),
            RuleGroup::OtherSuffix => other_suffix(state),
        }
    }
}

/// The Norwegian rule program. Holds no data; all tables are `const`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NorwegianStemmer;

impl RuleProgram for NorwegianStemmer {
    fn mark_count(&self) -> usize {
        2
    }

    fn run(&self, state: &mut ScanState) -> Result<(), VmError> {
        for group in RuleGroup::ALL {
            if group.direction() == Direction::Backward && state.mode() == Direction::Forward {
                state.enter_backward();
            }
            let applied = state.probe(|s| group.apply(s))?;
            tracing::trace!(group = group.name(), applied, len = state.len(), "rule group");
            if group == RuleGroup::MarkRegions {
                tracing::debug!(p1 = state.mark(P1), x = state.mark(X), "regions marked");
            }
        }
        state.leave_backward();
        Ok(())
    }
}

// -- Rule groups --

fn mark_regions(state: &mut ScanState) -> Result<bool, VmError> {
    state.set_mark(P1, state.limit())?;

    let long_enough = state.probe(|s| {
        if !s.hop(Direction::Forward, 3) {
            return Ok(false);
        }
        s.set_mark(X, s.cursor())?;
        Ok(true)
    })?;
    if !long_enough {
        return Ok(false);
    }

    if !VOWELS.go_to(state, Direction::Forward, Membership::In) {
        return Ok(false);
    }
    if !VOWELS.go_past(state, Direction::Forward, Membership::Out) {
        return Ok(false);
    }
    let p1 = state.cursor().max(state.mark(X));
    state.set_mark(P1, p1)?;
    Ok(true)
}

fn main_suffix(state: &mut ScanState) -> Result<bool, VmError> {
    let Some(outcome) = state.within_region(P1, Direction::Backward, |s| {
        s.find_among(MAIN_SUFFIXES, Direction::Backward)
    })?
    else {
        return Ok(false);
    };
    match outcome {
        MainSuffix::Delete => state.slice_del()?,
        MainSuffix::DeleteAfterSEnding => {
            if !after_s_ending(state) {
                return Ok(false);
            }
            state.slice_del()?;
        }
        MainSuffix::ReplaceWithEr => state.slice_from("er")?,
    }
    Ok(true)
}

/// Context for dropping a final `s`: an s-ending consonant, or `k` after a
/// non-vowel. Checked outside the region.
fn after_s_ending(state: &mut ScanState) -> bool {
    if S_ENDING.test(state, Direction::Backward, Membership::In) {
        return true;
    }
    state.eq_literal(Direction::Backward, "k")
        && VOWELS.test(state, Direction::Backward, Membership::Out)
}

fn consonant_pair(state: &mut ScanState) -> Result<bool, VmError> {
    let paired = state.probe(|s| {
        let hit = s.within_region(P1, Direction::Backward, |s| {
            s.find_among(CONSONANT_PAIRS, Direction::Backward)
        })?;
        Ok(hit.is_some())
    })?;
    if !paired {
        return Ok(false);
    }
    // ket was left at the end of the pair; drop only its last char
    if !state.step(Direction::Backward) {
        return Ok(false);
    }
    state.set_bra();
    state.slice_del()?;
    Ok(true)
}

fn other_suffix(state: &mut ScanState) -> Result<bool, VmError> {
    let hit = state.within_region(P1, Direction::Backward, |s| {
        s.find_among(OTHER_SUFFIXES, Direction::Backward)
    })?;
    if hit.is_none() {
        return Ok(false);
    }
    state.slice_del()?;
    Ok(true)
}
