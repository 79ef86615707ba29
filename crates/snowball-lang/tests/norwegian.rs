//! Norwegian stemmer: golden-file comparison and property tests.
//!
//! The golden file lists `word` -> `stem` pairs produced by the reference
//! Snowball Norwegian stemmer.
//!
//! Run: cargo test -p snowball-lang --test norwegian

use std::path::PathBuf;

use proptest::prelude::*;
use serde::Deserialize;
use snowball_core::character::fold_case;
use snowball_lang::{Algorithm, Stemmer};

// ---------------------------------------------------------------------------
// Golden file
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GoldenFile {
    language: String,
    cases: Vec<GoldenCase>,
}

#[derive(Debug, Deserialize)]
struct GoldenCase {
    word: String,
    stem: String,
}

fn load_golden(filename: &str) -> GoldenFile {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden").join(filename);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn stemmer() -> Stemmer {
    Stemmer::new(Algorithm::Norwegian).unwrap()
}

#[test]
fn golden_norwegian() {
    let golden = load_golden("norwegian.json");
    let stemmer = Stemmer::for_language(&golden.language).unwrap();
    assert!(!golden.cases.is_empty());

    let mismatches: Vec<String> = golden
        .cases
        .iter()
        .filter_map(|case| {
            let got = stemmer.stem(&case.word);
            (got != case.stem)
                .then(|| format!("{}: expected {:?}, got {:?}", case.word, case.stem, got))
        })
        .collect();
    assert!(
        mismatches.is_empty(),
        "{} of {} golden words differ:\n{}",
        mismatches.len(),
        golden.cases.len(),
        mismatches.join("\n")
    );
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn consonant_pair_scenario() {
    assert_eq!(stemmer().stem("kaldt"), "kald");
}

#[test]
fn definite_suffix_scenarios() {
    let stemmer = stemmer();
    assert_eq!(stemmer.stem("katten"), "katt");
    assert_eq!(stemmer.stem("huset"), "hus");
}

#[test]
fn short_word_is_unchanged() {
    assert_eq!(stemmer().stem("hus"), "hus");
}

#[test]
fn empty_input() {
    assert_eq!(stemmer().stem(""), "");
}

#[test]
fn uppercase_input_is_lowercased() {
    assert_eq!(stemmer().stem("KATTEN"), "katt");
}

#[test]
fn non_letters_pass_through() {
    let stemmer = stemmer();
    assert_eq!(stemmer.stem("123"), "123");
    assert_eq!(stemmer.stem("hei-en"), "hei-");
}

#[test]
fn side_condition_on_final_s() {
    let stemmer = stemmer();
    // s-ending consonant before s
    assert_eq!(stemmer.stem("skogs"), "skog");
    // k after a consonant
    assert_eq!(stemmer.stem("parks"), "park");
    // k after a vowel
    assert_eq!(stemmer.stem("taks"), "taks");
    // vowel before s
    assert_eq!(stemmer.stem("sj\u{00F8}s"), "sj\u{00F8}s");
}

#[test]
fn non_ascii_letters() {
    let stemmer = stemmer();
    assert_eq!(stemmer.stem("B\u{00D8}KENE"), "b\u{00F8}k");
    assert_eq!(stemmer.stem("\u{00D8}rken"), "\u{00F8}rk");
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn stem_is_total(word in any::<String>()) {
        prop_assert!(stemmer().try_stem(&word).is_ok());
    }

    #[test]
    fn stem_is_a_prefix_of_folded_word(word in "[a-zA-Z\u{00E6}\u{00F8}\u{00E5}\u{00C6}\u{00D8}\u{00C5}-]{0,16}") {
        let folded: String = fold_case(&word).into_iter().collect();
        let stem = stemmer().stem(&word);
        prop_assert!(folded.starts_with(&stem), "{} -> {}", folded, stem);
    }

    #[test]
    fn stem_never_grows(word in any::<String>()) {
        let stem = stemmer().stem(&word);
        prop_assert!(stem.chars().count() <= word.chars().count());
    }

    #[test]
    fn leading_three_chars_are_kept(word in "[a-z\u{00E6}\u{00F8}\u{00E5}]{0,16}") {
        let stem = stemmer().stem(&word);
        let keep: String = word.chars().take(3).collect();
        prop_assert!(stem.starts_with(&keep), "{} -> {}", word, stem);
    }

    #[test]
    fn case_insensitive(word in "[a-z\u{00E6}\u{00F8}\u{00E5}]{0,16}") {
        let stemmer = stemmer();
        prop_assert_eq!(stemmer.stem(&word.to_uppercase()), stemmer.stem(&word));
    }

    #[test]
    fn deterministic(word in "\\PC{0,20}") {
        let stemmer = stemmer();
        prop_assert_eq!(stemmer.stem(&word), stemmer.stem(&word));
    }
}
