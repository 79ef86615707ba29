// snowball-stem: Stem words from stdin or the command line.
//
// Default mode prints `word<TAB>stem` for each word. With --freq, reads
// running text from stdin, splits it into words and prints a stem
// frequency list, most frequent first.
//
// Usage:
//   snowball-stem [-l LANG] [--freq] [WORD...]
//
// Options:
//   -l, --language CODE   Language code (default: $SNOWBALL_LANGUAGE, then "no")
//       --freq            Print a stem frequency list instead
//   -h, --help            Print help
//
// Set RUST_LOG (e.g. RUST_LOG=snowball_lang=trace) to log rule execution.

use std::io::{self, BufRead, Write};

fn main() {
    snowball_cli::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (language, args) =
        snowball_cli::parse_language(&args).unwrap_or_else(|e| snowball_cli::fatal(&e));

    if snowball_cli::wants_help(&args) {
        println!("snowball-stem: Snowball stemmer.");
        println!();
        println!("Usage: snowball-stem [-l LANG] [--freq] [WORD...]");
        println!();
        println!("If WORD arguments are given, stems each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!(
            "  -l, --language CODE   Language code (default: ${}, then \"no\")",
            snowball_cli::LANGUAGE_ENV
        );
        println!("      --freq            Read running text and print stem frequencies");
        println!("  -h, --help            Print this help");
        return;
    }

    let freq = args.iter().any(|a| a == "--freq");
    let unknown = args.iter().find(|a| a.starts_with('-') && a.len() > 1 && *a != "--freq");
    if let Some(unknown) = unknown {
        snowball_cli::fatal(&format!("unknown option {unknown}"));
    }
    let words: Vec<&String> = args.iter().filter(|a| *a != "--freq").collect();

    let stemmer = snowball_cli::load_stemmer(language.as_deref())
        .unwrap_or_else(|e| snowball_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if freq {
        let mut counter = snowball_cli::StemCounter::new();
        if words.is_empty() {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(l) => counter.add_text(&stemmer, &l),
                    Err(e) => {
                        eprintln!("error reading stdin: {e}");
                        break;
                    }
                }
            }
        } else {
            for word in &words {
                counter.add_text(&stemmer, word);
            }
        }
        for (stem, count) in counter.into_sorted() {
            let _ = writeln!(out, "{count}\t{stem}");
        }
    } else if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{word}\t{}", stemmer.stem(word));
        }
    } else {
        for word in &words {
            let _ = writeln!(out, "{word}\t{}", stemmer.stem(word));
        }
    }

    let _ = out.flush();
}
