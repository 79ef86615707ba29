// Scan-window restriction to region marks

use crate::state::{Mark, ScanState};
use crate::{Direction, VmError};

/// Proof that a window bound was narrowed; hand it back to
/// [`ScanState::restore`] to undo the restriction.
#[must_use = "a restricted window must be restored"]
#[derive(Debug, PartialEq, Eq)]
pub struct RegionToken {
    direction: Direction,
    saved: usize,
}

impl ScanState {
    /// Narrow the window to a region mark.
    ///
    /// Backward scans move `limit_backward` up to the mark, forward scans
    /// move `limit` down to it. Returns `None`, leaving the state untouched,
    /// when the cursor lies on the wrong side of the mark or the mark lies
    /// outside the current window.
    pub fn restrict_to(&mut self, mark: Mark, direction: Direction) -> Option<RegionToken> {
        let bound = self.mark(mark);
        match direction {
            Direction::Backward => {
                if bound > self.cursor || bound < self.limit_backward {
                    return None;
                }
                let saved = std::mem::replace(&mut self.limit_backward, bound);
                Some(RegionToken { direction, saved })
            }
            Direction::Forward => {
                if bound < self.cursor || bound > self.limit {
                    return None;
                }
                let saved = std::mem::replace(&mut self.limit, bound);
                Some(RegionToken { direction, saved })
            }
        }
    }

    /// Put back the window bound saved in `token`.
    pub fn restore(&mut self, token: RegionToken) -> Result<(), VmError> {
        match token.direction {
            Direction::Backward => self.limit_backward = token.saved,
            Direction::Forward => self.limit = token.saved,
        }
        self.check_invariants()
    }

    /// Run `f` with the window narrowed to `mark`, restoring the bound
    /// afterwards whatever `f` returns.
    ///
    /// Yields `Ok(None)` without calling `f` when the window cannot be
    /// narrowed to the mark.
    pub fn within_region<T, F>(
        &mut self,
        mark: Mark,
        direction: Direction,
        f: F,
    ) -> Result<Option<T>, VmError>
    where
        F: FnOnce(&mut Self) -> Option<T>,
    {
        let Some(token) = self.restrict_to(mark, direction) else {
            return Ok(None);
        };
        let outcome = f(self);
        self.restore(token)?;
        Ok(outcome)
    }
}
