// Character groupings: bitset membership over a bounded code-point range

use crate::state::ScanState;
use crate::Direction;

/// Whether a grouping test expects the character to be in or out of the grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    In,
    Out,
}

impl Membership {
    #[inline]
    fn accepts(self, is_member: bool) -> bool {
        match self {
            Membership::In => is_member,
            Membership::Out => !is_member,
        }
    }
}

/// A set of characters stored as a bitset over `min..=max`.
///
/// Bit `n` of the set (byte `n >> 3`, bit `n & 7`) stands for code point
/// `min + n`. Code points outside the range, and bits past the end of the
/// byte table, are not members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grouping {
    min: u32,
    max: u32,
    bits: &'static [u8],
}

impl Grouping {
    /// Define a grouping over code points `min..=max`.
    ///
    /// # Panics
    ///
    /// Panics (at compile time for `const` groupings) if `min > max`.
    pub const fn new(min: u32, max: u32, bits: &'static [u8]) -> Self {
        assert!(min <= max, "grouping range is empty");
        Self { min, max, bits }
    }

    /// Lowest code point of the range.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Highest code point of the range.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Check whether `c` belongs to the grouping.
    pub fn contains(&self, c: char) -> bool {
        let cp = c as u32;
        if cp < self.min || cp > self.max {
            return false;
        }
        let offset = cp - self.min;
        self.bits
            .get((offset >> 3) as usize)
            .is_some_and(|byte| byte & (1 << (offset & 7)) != 0)
    }

    /// Test the character adjacent to the cursor in `direction`.
    ///
    /// On success the cursor moves one char in `direction`; on failure, or
    /// when no character is left inside the window, it stays put.
    pub fn test(
        &self,
        state: &mut ScanState,
        direction: Direction,
        membership: Membership,
    ) -> bool {
        match state.peek(direction) {
            Some(c) if membership.accepts(self.contains(c)) => {
                state.advance(direction);
                true
            }
            _ => false,
        }
    }

    /// Advance until the next character would pass [`test`](Self::test),
    /// stopping in front of it (Snowball `goto`).
    ///
    /// Fails at the window edge; the cursor is then left at the edge.
    pub fn go_to(
        &self,
        state: &mut ScanState,
        direction: Direction,
        membership: Membership,
    ) -> bool {
        loop {
            match state.peek(direction) {
                None => return false,
                Some(c) if membership.accepts(self.contains(c)) => return true,
                Some(_) => state.advance(direction),
            }
        }
    }

    /// Advance until a character passes [`test`](Self::test), stopping
    /// just past it (Snowball `gopast`).
    ///
    /// Fails at the window edge; the cursor is then left at the edge.
    pub fn go_past(
        &self,
        state: &mut ScanState,
        direction: Direction,
        membership: Membership,
    ) -> bool {
        loop {
            match state.peek(direction) {
                None => return false,
                Some(c) => {
                    state.advance(direction);
                    if membership.accepts(self.contains(c)) {
                        return true;
                    }
                }
            }
        }
    }
}
