// Criterion benchmarks for snowball-lang.
//
// Uses the words from the Norwegian golden file as the workload.
//
// Run:
//   cargo bench -p snowball-lang

use criterion::{Criterion, criterion_group, criterion_main};
use snowball_lang::{Algorithm, Stemmer};

fn load_words() -> Vec<String> {
    let path =
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/norwegian.json");
    let contents = std::fs::read_to_string(&path).unwrap_or_default();
    let Ok(value) = serde_json::from_str::<serde_json::Value>(&contents) else {
        return Vec::new();
    };
    value["cases"]
        .as_array()
        .map(|cases| {
            cases
                .iter()
                .filter_map(|c| c["word"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Stem every golden word once per iteration.
fn bench_stem_words(c: &mut Criterion) {
    let stemmer = Stemmer::new(Algorithm::Norwegian).expect("norwegian stemmer");
    let words = load_words();

    c.bench_function("stem_golden_words", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(stemmer.stem(word));
            }
        });
    });
}

/// Long words that exercise every rule group.
fn bench_stem_long(c: &mut Criterion) {
    let stemmer = Stemmer::new(Algorithm::Norwegian).expect("norwegian stemmer");
    let words = ["kj\u{00E6}rlighetene", "anmerkningene", "bevegelsens", "fjelltoppene"];

    c.bench_function("stem_long_words", |b| {
        b.iter(|| {
            for word in words {
                std::hint::black_box(stemmer.stem(std::hint::black_box(word)));
            }
        });
    });
}

/// Handle construction from a language code.
fn bench_for_language(c: &mut Criterion) {
    c.bench_function("for_language", |b| {
        b.iter(|| std::hint::black_box(Stemmer::for_language(std::hint::black_box("nb"))))
    });
}

criterion_group!(benches, bench_stem_words, bench_stem_long, bench_for_language);
criterion_main!(benches);
