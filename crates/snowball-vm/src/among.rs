// Rule tables and the longest-match lookup
//
// A rule table is a flat array of entries sorted by pattern (by reversed
// pattern for backward tables). Each entry may link back to the longest
// earlier entry that is a proper suffix (backward) or prefix (forward) of its
// own pattern. The lookup binary-searches for the longest entry sharing the
// most characters with the text next to the cursor and then walks the
// back-link chain towards shorter entries until one matches in full and its
// side condition holds.

use std::fmt;

use crate::state::ScanState;
use crate::{Direction, VmError};

/// Side condition attached to a rule-table entry.
///
/// Called with the cursor already moved past the candidate match; the
/// cursor is reset to that position afterwards, whatever the condition did.
pub type Condition = fn(&mut ScanState) -> bool;

/// One entry of a rule table.
///
/// `R` is the outcome handed back to the rule program on a match; the
/// engine never inspects it.
#[derive(Clone, Copy)]
pub struct Among<R> {
    pattern: &'static str,
    len: usize,
    link: Option<usize>,
    result: R,
    condition: Option<Condition>,
}

impl<R: fmt::Debug> fmt::Debug for Among<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Among")
            .field("pattern", &self.pattern)
            .field("link", &self.link)
            .field("result", &self.result)
            .field("has_condition", &self.condition.is_some())
            .finish()
    }
}

/// Number of chars in a UTF-8 string, usable in `const` tables.
const fn char_count(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut count = 0;
    while i < bytes.len() {
        if bytes[i] & 0xC0 != 0x80 {
            count += 1;
        }
        i += 1;
    }
    count
}

impl<R: Copy> Among<R> {
    /// Define an entry. `link` is the index of the longest earlier entry
    /// whose pattern is an affix of this one.
    pub const fn new(pattern: &'static str, link: Option<usize>, result: R) -> Self {
        Self {
            pattern,
            len: char_count(pattern),
            link,
            result,
            condition: None,
        }
    }

    /// Attach a side condition to the entry.
    pub const fn with_condition(self, condition: Condition) -> Self {
        Self {
            condition: Some(condition),
            ..self
        }
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Pattern length in chars.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn link(&self) -> Option<usize> {
        self.link
    }

    pub fn result(&self) -> &R {
        &self.result
    }
}

/// Order patterns the way the binary search expects them: by chars for
/// forward tables, by reversed chars for backward tables.
fn table_order(a: &str, b: &str, direction: Direction) -> std::cmp::Ordering {
    match direction {
        Direction::Forward => a.chars().cmp(b.chars()),
        Direction::Backward => a.chars().rev().cmp(b.chars().rev()),
    }
}

fn is_affix(short: &str, long: &str, direction: Direction) -> bool {
    match direction {
        Direction::Forward => long.starts_with(short),
        Direction::Backward => long.ends_with(short),
    }
}

/// Check that a table is usable by [`ScanState::find_among`] in `direction`.
///
/// Entries must be strictly ordered (which also makes patterns unique) and
/// every entry must link to the longest other entry whose pattern is a
/// proper affix of its own, or to nothing if there is none.
pub fn validate<R>(table: &[Among<R>], direction: Direction) -> Result<(), VmError> {
    for (index, pair) in table.windows(2).enumerate() {
        if table_order(pair[0].pattern, pair[1].pattern, direction) != std::cmp::Ordering::Less {
            return Err(VmError::MalformedTable {
                index: index + 1,
                reason: "entries are not strictly ordered",
            });
        }
    }
    for (index, entry) in table.iter().enumerate() {
        let expected = table
            .iter()
            .enumerate()
            .filter(|(_, other)| {
                other.len < entry.len && is_affix(other.pattern, entry.pattern, direction)
            })
            .max_by_key(|(_, other)| other.len)
            .map(|(i, _)| i);
        if entry.link != expected {
            return Err(VmError::MalformedTable {
                index,
                reason: "back-link does not name the longest affix entry",
            });
        }
    }
    Ok(())
}

impl ScanState {
    /// Find the longest entry of `table` matching the text adjacent to the
    /// cursor in `direction`, inside the window.
    ///
    /// On a match the cursor moves past the matched text, `bra`/`ket` are
    /// set to its bounds and the entry's outcome is returned. Entries whose
    /// side condition fails are skipped in favour of the next shorter
    /// matching entry on the back-link chain. Without a match the cursor,
    /// `bra` and `ket` are left unchanged.
    pub fn find_among<R: Copy>(&mut self, table: &[Among<R>], direction: Direction) -> Option<R> {
        if table.is_empty() {
            return None;
        }
        let start = self.cursor;
        let (mut index, common) = match direction {
            Direction::Forward => self.search_forward(table),
            Direction::Backward => self.search_backward(table),
        };

        loop {
            let entry = &table[index];
            if common >= entry.len {
                let end = match direction {
                    Direction::Forward => start + entry.len,
                    Direction::Backward => start - entry.len,
                };
                self.cursor = end;
                let accepted = match entry.condition {
                    None => true,
                    Some(condition) => {
                        let holds = condition(self);
                        self.cursor = end;
                        holds
                    }
                };
                if accepted {
                    (self.bra, self.ket) = match direction {
                        Direction::Forward => (start, end),
                        Direction::Backward => (end, start),
                    };
                    tracing::trace!(
                        pattern = entry.pattern,
                        bra = self.bra,
                        ket = self.ket,
                        "rule matched"
                    );
                    return Some(entry.result);
                }
                tracing::trace!(pattern = entry.pattern, "side condition rejected match");
            }
            match entry.link {
                Some(next) => index = next,
                None => {
                    self.cursor = start;
                    return None;
                }
            }
        }
    }

    /// Binary search for the entry sharing the longest prefix with the text
    /// right of the cursor. Returns its index and the shared length.
    fn search_forward<R>(&self, table: &[Among<R>]) -> (usize, usize) {
        let c = self.cursor;
        let limit = self.limit;
        let (mut i, mut j) = (0, table.len());
        let (mut common_i, mut common_j) = (0, 0);
        let mut first_key_inspected = false;

        loop {
            let k = i + ((j - i) >> 1);
            let mut diff: i64 = 0;
            let mut common = common_i.min(common_j);
            for p in table[k].pattern.chars().skip(common) {
                if c + common == limit {
                    diff = -1;
                    break;
                }
                diff = self.buffer[c + common] as i64 - p as i64;
                if diff != 0 {
                    break;
                }
                common += 1;
            }
            if diff < 0 {
                j = k;
                common_j = common;
            } else {
                i = k;
                common_i = common;
            }
            if j - i <= 1 {
                if i > 0 || j == i || first_key_inspected {
                    break;
                }
                // Entry 0 has not been compared yet when the window is [0, 1)
                first_key_inspected = true;
            }
        }
        (i, common_i)
    }

    /// Mirror of [`search_forward`](Self::search_forward) for the text left
    /// of the cursor, comparing patterns from their last char.
    fn search_backward<R>(&self, table: &[Among<R>]) -> (usize, usize) {
        let c = self.cursor;
        let limit_backward = self.limit_backward;
        let (mut i, mut j) = (0, table.len());
        let (mut common_i, mut common_j) = (0, 0);
        let mut first_key_inspected = false;

        loop {
            let k = i + ((j - i) >> 1);
            let mut diff: i64 = 0;
            let mut common = common_i.min(common_j);
            for p in table[k].pattern.chars().rev().skip(common) {
                if c - common == limit_backward {
                    diff = -1;
                    break;
                }
                diff = self.buffer[c - 1 - common] as i64 - p as i64;
                if diff != 0 {
                    break;
                }
                common += 1;
            }
            if diff < 0 {
                j = k;
                common_j = common;
            } else {
                i = k;
                common_i = common;
            }
            if j - i <= 1 {
                if i > 0 || j == i || first_key_inspected {
                    break;
                }
                first_key_inspected = true;
            }
        }
        (i, common_i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Act {
        One,
        Two,
        Three,
    }

    // Backward table: "s" <- "es" <- "nes", plus "ne" and "t"
    const SUFFIXES: &[Among<Act>] = &[
        Among::new("ne", None, Act::One),
        Among::new("s", None, Act::Two),
        Among::new("es", Some(1), Act::One),
        Among::new("nes", Some(2), Act::Three),
        Among::new("t", None, Act::One),
    ];

    // Forward table: "un" <- "und" <- "under"
    const PREFIXES: &[Among<Act>] = &[
        Among::new("ab", None, Act::One),
        Among::new("un", None, Act::Two),
        Among::new("und", Some(1), Act::Three),
        Among::new("under", Some(2), Act::One),
    ];

    fn backward_state(word: &str) -> ScanState {
        let mut state = ScanState::from_word(word, 0);
        state.enter_backward();
        state
    }

    fn at_k(state: &mut ScanState) -> bool {
        state.peek(Direction::Backward) == Some('k')
    }

    fn never(_: &mut ScanState) -> bool {
        false
    }

    #[test]
    fn longest_backward_match_wins() {
        let mut state = backward_state("hestenes");
        assert_eq!(state.find_among(SUFFIXES, Direction::Backward), Some(Act::Three));
        assert_eq!(state.cursor(), 5);
        assert_eq!((state.bra(), state.ket()), (5, 8));
    }

    #[test]
    fn shorter_match_when_longer_does_not_fit() {
        let mut state = backward_state("hes");
        assert_eq!(state.find_among(SUFFIXES, Direction::Backward), Some(Act::One));
        assert_eq!((state.bra(), state.ket()), (1, 3));

        let mut state = backward_state("bas");
        assert_eq!(state.find_among(SUFFIXES, Direction::Backward), Some(Act::Two));
        assert_eq!((state.bra(), state.ket()), (2, 3));
    }

    #[test]
    fn no_match_leaves_state_untouched() {
        let mut state = backward_state("hund");
        let before = state.clone();
        assert_eq!(state.find_among(SUFFIXES, Direction::Backward), None);
        assert_eq!(state, before);
    }

    #[test]
    fn match_is_confined_to_window() {
        let mut state = ScanState::from_word("hestenes", 0);
        state.set_cursor(6).unwrap();
        state.enter_backward();
        // Only "es" lies inside [6, 8)
        assert_eq!(state.find_among(SUFFIXES, Direction::Backward), Some(Act::One));
        assert_eq!((state.bra(), state.ket()), (6, 8));
    }

    #[test]
    fn forward_longest_match() {
        let mut state = ScanState::from_word("underlig", 0);
        assert_eq!(state.find_among(PREFIXES, Direction::Forward), Some(Act::One));
        assert_eq!(state.cursor(), 5);
        assert_eq!((state.bra(), state.ket()), (0, 5));

        let mut state = ScanState::from_word("undre", 0);
        assert_eq!(state.find_among(PREFIXES, Direction::Forward), Some(Act::Three));
        assert_eq!(state.cursor(), 3);

        let mut state = ScanState::from_word("uten", 0);
        assert_eq!(state.find_among(PREFIXES, Direction::Forward), None);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn failed_condition_falls_back_to_shorter_entry() {
        let table: &[Among<Act>] = &[
            Among::new("s", None, Act::Two),
            Among::new("es", Some(0), Act::One).with_condition(never),
        ];
        let mut state = backward_state("hes");
        assert_eq!(state.find_among(table, Direction::Backward), Some(Act::Two));
        assert_eq!((state.bra(), state.ket()), (2, 3));
    }

    #[test]
    fn condition_sees_cursor_past_candidate() {
        let table: &[Among<Act>] = &[Among::new("s", None, Act::Two).with_condition(at_k)];
        let mut state = backward_state("kks");
        assert_eq!(state.find_among(table, Direction::Backward), Some(Act::Two));
        let mut state = backward_state("kas");
        assert_eq!(state.find_among(table, Direction::Backward), None);
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn all_conditions_failing_is_no_match() {
        let table: &[Among<Act>] = &[
            Among::new("s", None, Act::Two).with_condition(never),
            Among::new("es", Some(0), Act::One).with_condition(never),
        ];
        let mut state = backward_state("hes");
        let before = state.clone();
        assert_eq!(state.find_among(table, Direction::Backward), None);
        assert_eq!(state, before);
    }

    #[test]
    fn single_entry_table() {
        let table: &[Among<()>] = &[Among::new("dt", None, ())];
        let mut state = backward_state("kaldt");
        assert_eq!(state.find_among(table, Direction::Backward), Some(()));
        let mut state = backward_state("t");
        assert_eq!(state.find_among(table, Direction::Backward), None);
        let mut state = backward_state("");
        assert_eq!(state.find_among(table, Direction::Backward), None);
    }

    #[test]
    fn empty_table_never_matches() {
        let table: &[Among<()>] = &[];
        let mut state = backward_state("abc");
        assert_eq!(state.find_among(table, Direction::Backward), None);
    }

    #[test]
    fn non_ascii_patterns() {
        let table: &[Among<Act>] = &[
            Among::new("\u{00F8}k", None, Act::One),
            Among::new("\u{00E6}r", None, Act::Two),
        ];
        assert_eq!(table[0].len(), 2);
        let mut state = backward_state("b\u{00F8}k");
        assert_eq!(state.find_among(table, Direction::Backward), Some(Act::One));
        assert_eq!((state.bra(), state.ket()), (1, 3));
    }

    #[test]
    fn validate_accepts_well_formed_tables() {
        assert!(validate(SUFFIXES, Direction::Backward).is_ok());
        assert!(validate(PREFIXES, Direction::Forward).is_ok());
    }

    #[test]
    fn validate_rejects_unsorted_table() {
        let table: &[Among<()>] = &[Among::new("s", None, ()), Among::new("a", None, ())];
        assert_eq!(
            validate(table, Direction::Backward),
            Err(VmError::MalformedTable {
                index: 1,
                reason: "entries are not strictly ordered"
            })
        );
    }

    #[test]
    fn validate_rejects_wrong_link() {
        let table: &[Among<()>] = &[
            Among::new("s", None, ()),
            Among::new("es", None, ()),
            Among::new("nes", Some(0), ()),
        ];
        assert!(matches!(
            validate(table, Direction::Backward),
            Err(VmError::MalformedTable { index: 1, .. })
        ));
    }

    #[test]
    fn debug_output_names_pattern() {
        let entry = Among::new("het", Some(25), Act::One).with_condition(never);
        let text = format!("{entry:?}");
        assert!(text.contains("\"het\""));
        assert!(text.contains("has_condition: true"));
        assert!(!entry.is_empty());
        assert_eq!(entry.link(), Some(25));
        assert_eq!(*entry.result(), Act::One);
        assert_eq!(entry.pattern(), "het");
    }

    /// Longest full match by plain scan, ties resolved by table order.
    fn naive_backward(table: &[Among<Act>], word: &[char], lb: usize) -> Option<(Act, usize)> {
        let mut best: Option<(Act, usize)> = None;
        for entry in table {
            let pattern: Vec<char> = entry.pattern().chars().collect();
            if pattern.len() > word.len() - lb || !word.ends_with(&pattern) {
                continue;
            }
            if best.is_none_or(|(_, len)| pattern.len() > len) {
                best = Some((entry.result, pattern.len()));
            }
        }
        best
    }

    proptest! {
        #[test]
        fn binary_search_agrees_with_naive_scan(word in "[a-z]{0,8}", lb_seed in 0usize..9) {
            let chars: Vec<char> = word.chars().collect();
            let lb = lb_seed.min(chars.len());
            let mut state = ScanState::new(chars.clone(), 0);
            state.set_cursor(lb).unwrap();
            state.enter_backward();
            let expected = naive_backward(SUFFIXES, &chars, lb);
            let found = state.find_among(SUFFIXES, Direction::Backward);
            prop_assert_eq!(found, expected.map(|(act, _)| act));
            if let Some((_, len)) = expected {
                prop_assert_eq!(state.cursor(), chars.len() - len);
                prop_assert_eq!(state.bra(), chars.len() - len);
                prop_assert_eq!(state.ket(), chars.len());
            } else {
                prop_assert_eq!(state.cursor(), chars.len());
            }
        }
    }
}
