// Per-call scan state
//
// One `ScanState` is created for each word and dropped once the stem is
// returned. Every offset is a char index into `buffer`.

use crate::{Direction, VmError};

/// Index of a region mark slot in a [`ScanState`].
///
/// Rule programs declare their marks as constants, e.g.
/// `const P1: Mark = Mark::new(0);`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mark(usize);

impl Mark {
    pub const fn new(index: usize) -> Self {
        Mark(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// Cursor position saved by [`ScanState::save_cursor`].
///
/// In backward mode the position is stored as a distance from `limit`, so
/// it stays meaningful after edits that change the length of the word
/// behind the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedCursor {
    FromStart(usize),
    FromLimit(usize),
}

/// Mutable state of one stem call.
///
/// Invariant: `limit_backward <= cursor <= limit <= buffer.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanState {
    pub(crate) buffer: Vec<char>,
    pub(crate) cursor: usize,
    pub(crate) limit: usize,
    pub(crate) limit_backward: usize,
    pub(crate) bra: usize,
    pub(crate) ket: usize,
    pub(crate) marks: Vec<usize>,
    mode: Direction,
}

impl ScanState {
    /// Create the state for one word with `mark_count` region marks.
    ///
    /// The window spans the whole word, the cursor is at the start, the
    /// slice is `[0, len)` and every mark is 0.
    pub fn new(word: Vec<char>, mark_count: usize) -> Self {
        let len = word.len();
        Self {
            buffer: word,
            cursor: 0,
            limit: len,
            limit_backward: 0,
            bra: 0,
            ket: len,
            marks: vec![0; mark_count],
            mode: Direction::Forward,
        }
    }

    /// Create the state from a string slice.
    pub fn from_word(word: &str, mark_count: usize) -> Self {
        Self::new(word.chars().collect(), mark_count)
    }

    // -- Accessors --

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn limit_backward(&self) -> usize {
        self.limit_backward
    }

    pub fn bra(&self) -> usize {
        self.bra
    }

    pub fn ket(&self) -> usize {
        self.ket
    }

    /// Current scan mode, switched by [`enter_backward`](Self::enter_backward).
    pub fn mode(&self) -> Direction {
        self.mode
    }

    /// Consume the state and return the buffer contents.
    pub fn into_string(self) -> String {
        self.buffer.into_iter().collect()
    }

    // -- Cursor movement --

    /// Move the cursor to `position`, which must lie inside the window.
    pub fn set_cursor(&mut self, position: usize) -> Result<(), VmError> {
        if position < self.limit_backward || position > self.limit {
            return Err(VmError::CursorOutOfWindow {
                cursor: position,
                limit_backward: self.limit_backward,
                limit: self.limit,
                len: self.buffer.len(),
            });
        }
        self.cursor = position;
        Ok(())
    }

    /// The character adjacent to the cursor in `direction`, if it is inside
    /// the window.
    pub fn peek(&self, direction: Direction) -> Option<char> {
        match direction {
            Direction::Forward if self.cursor < self.limit => Some(self.buffer[self.cursor]),
            Direction::Backward if self.cursor > self.limit_backward => {
                Some(self.buffer[self.cursor - 1])
            }
            _ => None,
        }
    }

    /// Move the cursor one char without a window check.
    /// Callers must have seen `peek(direction)` return `Some`.
    #[inline]
    pub(crate) fn advance(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => self.cursor += 1,
            Direction::Backward => self.cursor -= 1,
        }
    }

    /// Move the cursor `n` chars in `direction`.
    ///
    /// Fails, leaving the cursor unchanged, if that would leave the window.
    pub fn hop(&mut self, direction: Direction, n: usize) -> bool {
        match direction {
            Direction::Forward => {
                if self.limit - self.cursor < n {
                    return false;
                }
                self.cursor += n;
            }
            Direction::Backward => {
                if self.cursor - self.limit_backward < n {
                    return false;
                }
                self.cursor -= n;
            }
        }
        true
    }

    /// Move the cursor one char in `direction`.
    pub fn step(&mut self, direction: Direction) -> bool {
        self.hop(direction, 1)
    }

    /// Test whether `literal` is adjacent to the cursor in `direction`; on
    /// success move the cursor past it.
    pub fn eq_literal(&mut self, direction: Direction, literal: &str) -> bool {
        let n = literal.chars().count();
        match direction {
            Direction::Forward => {
                if self.limit - self.cursor < n {
                    return false;
                }
                let span = &self.buffer[self.cursor..self.cursor + n];
                if !span.iter().copied().eq(literal.chars()) {
                    return false;
                }
                self.cursor += n;
            }
            Direction::Backward => {
                if self.cursor - self.limit_backward < n {
                    return false;
                }
                let span = &self.buffer[self.cursor - n..self.cursor];
                if !span.iter().copied().eq(literal.chars()) {
                    return false;
                }
                self.cursor -= n;
            }
        }
        true
    }

    // -- Save / restore --

    /// Save the cursor relative to the end that is stable in the current mode.
    pub fn save_cursor(&self) -> SavedCursor {
        match self.mode {
            Direction::Forward => SavedCursor::FromStart(self.cursor),
            Direction::Backward => SavedCursor::FromLimit(self.limit - self.cursor),
        }
    }

    /// Restore a cursor saved by [`save_cursor`](Self::save_cursor).
    pub fn restore_cursor(&mut self, saved: SavedCursor) -> Result<(), VmError> {
        let position = match saved {
            SavedCursor::FromStart(position) => Some(position),
            SavedCursor::FromLimit(distance) => self.limit.checked_sub(distance),
        };
        match position {
            Some(position) => self.set_cursor(position),
            None => Err(VmError::CursorOutOfWindow {
                cursor: 0,
                limit_backward: self.limit_backward,
                limit: self.limit,
                len: self.buffer.len(),
            }),
        }
    }

    /// Run `f` and put the cursor back where it was, whatever the outcome.
    ///
    /// Returns whether `f` succeeded. Edits made by `f` are kept. This is
    /// the building block for attempting a rule group (ignore the result)
    /// and for lookahead tests (propagate the result).
    pub fn probe<F>(&mut self, f: F) -> Result<bool, VmError>
    where
        F: FnOnce(&mut Self) -> Result<bool, VmError>,
    {
        let saved = self.save_cursor();
        let applied = f(self)?;
        self.restore_cursor(saved)?;
        Ok(applied)
    }

    /// Switch to backward mode: the window's lower bound becomes the
    /// cursor and the cursor moves to `limit`.
    pub fn enter_backward(&mut self) {
        self.limit_backward = self.cursor;
        self.cursor = self.limit;
        self.mode = Direction::Backward;
    }

    /// Leave backward mode: the cursor returns to the lower window bound.
    pub fn leave_backward(&mut self) {
        self.cursor = self.limit_backward;
        self.mode = Direction::Forward;
    }

    // -- Slice bounds --

    /// Set the start of the slice to the cursor.
    pub fn set_bra(&mut self) {
        self.bra = self.cursor;
    }

    /// Set the end of the slice to the cursor.
    pub fn set_ket(&mut self) {
        self.ket = self.cursor;
    }

    // -- Region marks --

    /// Read a region mark.
    ///
    /// # Panics
    ///
    /// Panics if `mark` is not below the mark count the state was created with.
    pub fn mark(&self, mark: Mark) -> usize {
        self.marks[mark.index()]
    }

    /// Store `value` in a region mark. The value must not exceed the buffer length.
    ///
    /// # Panics
    ///
    /// Panics if `mark` is not below the mark count the state was created with.
    pub fn set_mark(&mut self, mark: Mark, value: usize) -> Result<(), VmError> {
        if value > self.buffer.len() {
            return Err(VmError::MarkOutOfBounds {
                mark: mark.index(),
                value,
                len: self.buffer.len(),
            });
        }
        self.marks[mark.index()] = value;
        Ok(())
    }

    /// Check the window and mark invariants.
    pub fn check_invariants(&self) -> Result<(), VmError> {
        let len = self.buffer.len();
        if self.limit_backward > self.cursor || self.cursor > self.limit || self.limit > len {
            return Err(VmError::CursorOutOfWindow {
                cursor: self.cursor,
                limit_backward: self.limit_backward,
                limit: self.limit,
                len,
            });
        }
        if let Some((mark, &value)) = self.marks.iter().enumerate().find(|(_, v)| **v > len) {
            return Err(VmError::MarkOutOfBounds { mark, value, len });
        }
        Ok(())
    }
}
