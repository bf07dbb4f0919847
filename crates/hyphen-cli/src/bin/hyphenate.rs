// hyphenate: Hyphenate words with a libhyphen pattern dictionary.
//
// Reads words from stdin (one per line) unless words are given as arguments,
// and prints one result line per word.
//
// Usage:
//   hyphenate [-d PATH] [-l LANG] [OPTIONS] [WORD...]

use std::io::{self, BufRead, Write};

fn print_help() {
    println!("hyphenate: Hyphenate words using a hyph_*.dic pattern dictionary.");
    println!();
    println!("Usage: hyphenate [-d PATH] [-l LANG] [OPTIONS] [WORD...]");
    println!();
    println!("If WORD arguments are given, hyphenates each word.");
    println!("Otherwise reads words from stdin (one per line).");
    println!();
    println!("Options:");
    println!("  -d, --dict PATH         Dictionary file, or directory containing hyph_LANG.dic");
    println!("  -l, --lang LANG         Dictionary language (default: en_US)");
    println!("  --lmin N                Minimum characters before the first break (0: dictionary)");
    println!("  --rmin N                Minimum characters after the last break (0: dictionary)");
    println!("  --compound-lmin N       Minimum characters after a compound boundary");
    println!("  --compound-rmin N       Minimum characters before a compound boundary");
    println!("  --separator SEP         Hyphen inserted at breaks (default: -)");
    println!("  --pairs                 Print every (before, after) split");
    println!("  --syllables             Print syllables separated by spaces");
    println!("  --wrap WIDTH            Print the longest split fitting WIDTH characters");
    println!("  --capitalize            Capitalize every printed piece instead of keeping the word's case");
    println!("  --upper                 Upper-case every printed piece instead of keeping the word's case");
    println!("  -h, --help              Print this help");
    println!();
    println!("The dictionary is also looked up in $HYPHEN_DICT_PATH and the system");
    println!("hyphenation directories. Set RUST_LOG=debug for loader diagnostics.");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if hyphen_cli::wants_help(&args) {
        print_help();
        return;
    }

    hyphen_cli::init_logging();
    let config = hyphen_cli::parse_args(&args).unwrap_or_else(|e| hyphen_cli::fatal(&e));
    let hyphenator =
        hyphen_cli::load_hyphenator(config.dict_path.as_deref(), &config.lang, config.options)
            .unwrap_or_else(|e| hyphen_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut hyphenate_word = |word: &str| match hyphen_cli::render(&hyphenator, &config, word) {
        Ok(line) => {
            let _ = writeln!(out, "{line}");
        }
        Err(e) => eprintln!("error: {word}: {e}"),
    };

    if config.words.is_empty() {
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
            hyphenate_word(word);
        }
    } else {
        for word in &config.words {
            hyphenate_word(word);
        }
    }
}
