// Character case folding shared by every stemmer
//
// Stemming programs compare characters by code point, so the input word is
// folded to lowercase before any rule group runs. The mapping is the
// locale-invariant *simple* one: each char maps to exactly one char, which
// keeps char offsets stable and guarantees the folded word is never longer
// than the input.

/// Convert a character to its simple lowercase equivalent.
///
/// Uses Rust's built-in Unicode case mapping. For characters with
/// multi-character lowercase expansions (e.g. U+0130 LATIN CAPITAL LETTER I
/// WITH DOT ABOVE), returns only the first character.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Fold a word to lowercase, one char at a time.
///
/// The result always has the same number of chars as `word`.
pub fn fold_case(word: &str) -> Vec<char> {
    word.chars().map(simple_lower).collect()
}
