// snowball-cli: shared utilities for CLI tools.

use std::process;
use std::sync::Once;

use hashbrown::HashMap;
use snowball_core::Algorithm;
use snowball_lang::Stemmer;

/// Environment variable consulted when no `--language` argument is given.
pub const LANGUAGE_ENV: &str = "SNOWBALL_LANGUAGE";

static TRACING_INIT: Once = Once::new();

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Create a stemmer for the requested language.
///
/// Search order:
/// 1. `language` argument (if provided)
/// 2. `SNOWBALL_LANGUAGE` environment variable
/// 3. Norwegian
pub fn load_stemmer(language: Option<&str>) -> Result<Stemmer, String> {
    let env_language = std::env::var(LANGUAGE_ENV).ok();
    let code = language.or(env_language.as_deref()).filter(|code| !code.trim().is_empty());

    tracing::debug!(language = code.unwrap_or("no"), "loading stemmer");
    let result = match code {
        Some(code) => Stemmer::for_language(code),
        None => Stemmer::new(Algorithm::Norwegian),
    };
    result.map_err(|e| format!("failed to create stemmer: {e}"))
}

/// Parse a `--language=CODE` or `-l CODE` argument from command line args.
///
/// Returns `(language, remaining_args)`.
pub fn parse_language(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut language = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--language=") {
            language = Some(val.to_string());
        } else if arg == "--language" || arg == "-l" {
            match iter.next() {
                Some(val) => language = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((language, remaining))
}

/// Split running text into words: maximal runs of alphabetic characters.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphabetic()).filter(|w| !w.is_empty())
}

/// Count stems over running text.
#[derive(Debug, Default)]
pub struct StemCounter {
    counts: HashMap<String, u64>,
}

impl StemCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stem every word of `text` and count the stems.
    pub fn add_text(&mut self, stemmer: &Stemmer, text: &str) {
        for word in words(text) {
            *self.counts.entry(stemmer.stem(word)).or_insert(0) += 1;
        }
    }

    /// Stems by descending count, ties broken alphabetically.
    pub fn into_sorted(self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self.counts.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
