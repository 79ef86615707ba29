// Slice edits: delete, replace, insert
//
// Every edit replaces a range [start, end) of the buffer and then moves all
// tracked offsets: offsets at or after `end` shift by the length change,
// offsets strictly inside the range collapse to `start`, the rest stay.

use crate::state::ScanState;
use crate::VmError;

#[inline]
fn shift(offset: usize, start: usize, end: usize, inserted: usize) -> usize {
    if offset >= end {
        offset - (end - start) + inserted
    } else if offset > start {
        start
    } else {
        offset
    }
}

impl ScanState {
    fn check_slice(&self) -> Result<(), VmError> {
        if self.bra > self.ket || self.ket > self.limit || self.limit > self.buffer.len() {
            return Err(VmError::InvalidSlice {
                bra: self.bra,
                ket: self.ket,
                limit: self.limit,
                len: self.buffer.len(),
            });
        }
        Ok(())
    }

    fn replace_range(&mut self, start: usize, end: usize, literal: &str) -> Result<(), VmError> {
        if start > end || end > self.buffer.len() {
            return Err(VmError::InvalidSlice {
                bra: start,
                ket: end,
                limit: self.limit,
                len: self.buffer.len(),
            });
        }
        let before = self.buffer.len();
        self.buffer.splice(start..end, literal.chars());
        let inserted = self.buffer.len() + (end - start) - before;

        self.cursor = shift(self.cursor, start, end, inserted);
        self.limit = shift(self.limit, start, end, inserted);
        self.limit_backward = shift(self.limit_backward, start, end, inserted);
        self.bra = shift(self.bra, start, end, inserted);
        self.ket = shift(self.ket, start, end, inserted);
        for mark in &mut self.marks {
            *mark = shift(*mark, start, end, inserted);
        }
        Ok(())
    }

    /// Delete the slice `[bra, ket)`.
    pub fn slice_del(&mut self) -> Result<(), VmError> {
        self.slice_from("")
    }

    /// Replace the slice `[bra, ket)` with `literal`.
    ///
    /// Afterwards the slice covers the inserted text.
    pub fn slice_from(&mut self, literal: &str) -> Result<(), VmError> {
        self.check_slice()?;
        self.replace_range(self.bra, self.ket, literal)
    }

    /// Insert `literal` at `position` without touching the slice contents.
    ///
    /// A cursor at `position` ends up after the inserted text.
    pub fn insert(&mut self, position: usize, literal: &str) -> Result<(), VmError> {
        self.replace_range(position, position, literal)
    }

    /// Copy of the current slice text.
    pub fn slice_text(&self) -> Result<String, VmError> {
        self.check_slice()?;
        Ok(self.buffer[self.bra..self.ket].iter().collect())
    }
}
