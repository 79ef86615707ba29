// Norwegian rule tables and groupings
//
// Backward tables: entries are sorted by reversed pattern and each link
// names the longest earlier entry that is a suffix of the pattern.

use snowball_vm::{Among, Grouping};

/// What the main-suffix group does with a matched ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainSuffix {
    /// Remove the ending.
    Delete,
    /// Remove the ending only after an s-ending consonant, or after a `k`
    /// that does not follow a vowel.
    DeleteAfterSEnding,
    /// Replace the ending with `er`.
    ReplaceWithEr,
}

use MainSuffix::{Delete, DeleteAfterSEnding, ReplaceWithEr};

pub const MAIN_SUFFIXES: &[Among<MainSuffix>] = &[
    Among::new("a", None, Delete),
    Among::new("e", None, Delete),
    Among::new("ede", Some(1), Delete),
    Among::new("ande", Some(1), Delete),
    Among::new("ende", Some(1), Delete),
    Among::new("ane", Some(1), Delete),
    Among::new("ene", Some(1), Delete),
    Among::new("hetene", Some(6), Delete),
    Among::new("erte", Some(1), ReplaceWithEr),
    Among::new("en", None, Delete),
    Among::new("heten", Some(9), Delete),
    Among::new("ar", None, Delete),
    Among::new("er", None, Delete),
    Among::new("heter", Some(12), Delete),
    Among::new("s", None, DeleteAfterSEnding),
    Among::new("as", Some(14), Delete),
    Among::new("es", Some(14), Delete),
    Among::new("edes", Some(16), Delete),
    Among::new("endes", Some(16), Delete),
    Among::new("enes", Some(16), Delete),
    Among::new("hetenes", Some(19), Delete),
    Among::new("ens", Some(14), Delete),
    Among::new("hetens", Some(21), Delete),
    Among::new("ers", Some(14), Delete),
    Among::new("ets", Some(14), Delete),
    Among::new("et", None, Delete),
    Among::new("het", Some(25), Delete),
    Among::new("ert", None, ReplaceWithEr),
    Among::new("ast", None, Delete),
];

/// Doubled-consonant neuter/adjective endings; only the last char is dropped.
pub const CONSONANT_PAIRS: &[Among<()>] = &[
    Among::new("dt", None, ()),
    Among::new("vt", None, ()),
];

/// Derivational endings removed after the inflectional ones.
pub const OTHER_SUFFIXES: &[Among<()>] = &[
    Among::new("leg", None, ()),
    Among::new("eleg", Some(0), ()),
    Among::new("ig", None, ()),
    Among::new("eig", Some(2), ()),
    Among::new("lig", Some(2), ()),
    Among::new("elig", Some(4), ()),
    Among::new("els", None, ()),
    Among::new("lov", None, ()),
    Among::new("elov", Some(7), ()),
    Among::new("slov", Some(7), ()),
    Among::new("hetslov", Some(9), ()),
];

/// Vowels: a e i o u y æ å ø (U+0061..=U+00F8).
pub const VOWELS: Grouping = Grouping::new(
    97,
    248,
    &[17, 65, 16, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 48, 0, 128],
);

/// Consonants after which a plural/genitive `s` is removed:
/// b c d f g h j l m n o p r t v y z (U+0062..=U+007A).
pub const S_ENDING: Grouping = Grouping::new(98, 122, &[119, 125, 149, 1]);
