// hyphen-cli: argument parsing and dictionary lookup for the `hyphenate` tool.

use std::path::{Path, PathBuf};
use std::process;

use hyphen::{HyphenError, HyphenOptions, Hyphenator, Mode, recase};

/// Environment variable naming a dictionary file or a directory of them.
pub const DICT_ENV: &str = "HYPHEN_DICT_PATH";

/// Language used when `--lang` is not given.
pub const DEFAULT_LANG: &str = "en_US";

/// System directories where distributions install hyphenation dictionaries.
const SYSTEM_DIRS: &[&str] = &[
    "/usr/share/hyphen",
    "/usr/share/myspell/dicts",
    "/usr/share/hunspell",
    "/usr/local/share/hyphen",
];

/// File name of the dictionary for `lang`, e.g. `hyph_en_US.dic`.
pub fn dictionary_file_name(lang: &str) -> String {
    format!("hyph_{lang}.dic")
}

/// Locate the dictionary for `lang`.
///
/// Search order:
/// 1. `dict_path` argument (a file, or a directory containing `hyph_<lang>.dic`)
/// 2. `HYPHEN_DICT_PATH` environment variable (same rules)
/// 3. `~/.local/share/hyphen`
/// 4. System dictionary directories
/// 5. Current working directory
pub fn find_dictionary(dict_path: Option<&str>, lang: &str) -> Result<PathBuf, String> {
    let env_path = std::env::var(DICT_ENV).ok();
    let search_paths = build_search_paths(dict_path, env_path.as_deref());
    let file_name = dictionary_file_name(lang);

    for path in &search_paths {
        if let Some(found) = resolve(path, &file_name) {
            return Ok(found);
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        file_name,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// `path` itself if it is a file, else `path/file_name` if that exists.
fn resolve(path: &Path, file_name: &str) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    let candidate = path.join(file_name);
    candidate.is_file().then_some(candidate)
}

fn build_search_paths(dict_path: Option<&str>, env_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }
    if let Some(p) = env_path {
        paths.push(PathBuf::from(p));
    }
    if let Some(home) = home_dir() {
        paths.push(home.join(".local").join("share").join("hyphen"));
    }
    paths.extend(SYSTEM_DIRS.iter().map(PathBuf::from));
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Find and load the dictionary for `lang`.
pub fn load_hyphenator(
    dict_path: Option<&str>,
    lang: &str,
    options: HyphenOptions,
) -> Result<Hyphenator, String> {
    let path = find_dictionary(dict_path, lang)?;
    Hyphenator::load(&path, options).map_err(|e| e.to_string())
}

/// What to print for each word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The word with the separator at every break.
    Insert,
    /// Every `(before, after)` split.
    Pairs,
    /// The word's syllables.
    Syllables,
    /// The best split for a line of this many characters.
    Wrap(usize),
}

/// Parsed command line of the `hyphenate` tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dict_path: Option<String>,
    pub lang: String,
    pub options: HyphenOptions,
    pub action: Action,
    pub separator: String,
    /// Case flags applied to every printed piece instead of the word's own case.
    pub case_mode: Mode,
    pub words: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dict_path: None,
            lang: DEFAULT_LANG.to_string(),
            options: HyphenOptions::default(),
            action: Action::Insert,
            separator: "-".to_string(),
            case_mode: Mode::INLINE,
            words: Vec::new(),
        }
    }
}

/// Parse the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut config = Config::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = || {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{arg} requires a value"))
        };
        match arg.as_str() {
            "-d" | "--dict" => config.dict_path = Some(value()?),
            "-l" | "--lang" => config.lang = value()?,
            "--lmin" => config.options.lmin = number(arg, &value()?)?,
            "--rmin" => config.options.rmin = number(arg, &value()?)?,
            "--compound-lmin" => config.options.compound_lmin = number(arg, &value()?)?,
            "--compound-rmin" => config.options.compound_rmin = number(arg, &value()?)?,
            "--separator" => config.separator = value()?,
            "--pairs" => config.action = Action::Pairs,
            "--syllables" => config.action = Action::Syllables,
            "--wrap" => config.action = Action::Wrap(number(arg, &value()?)?),
            "--capitalize" => config.case_mode = config.case_mode | Mode::CAPITALIZE,
            "--upper" => config.case_mode = config.case_mode | Mode::UPPERCASE,
            s if s.starts_with("--dict=") => config.dict_path = Some(s["--dict=".len()..].to_string()),
            s if s.starts_with('-') && s.len() > 1 => return Err(format!("unknown option: {s}")),
            _ => config.words.push(arg.clone()),
        }
    }

    Ok(config)
}

/// The output line for one word.
///
/// The action picks the pieces to print. `case_mode`, when set, recases
/// each piece on its own.
pub fn render(hyphenator: &Hyphenator, config: &Config, word: &str) -> Result<String, HyphenError> {
    let sep = config.separator.as_str();
    let case = |text: &str| recase(text, config.case_mode);

    Ok(match config.action {
        Action::Insert => case(&hyphenator.insert_hyphens(word, sep)?),
        Action::Pairs => hyphenator
            .pairs(word)?
            .iter()
            .map(|(before, after)| format!("{}{sep}{}", case(before), case(after)))
            .collect::<Vec<_>>()
            .join(" "),
        Action::Syllables => {
            let syllables = hyphenator.syllables(word)?;
            if syllables.is_empty() {
                case(word)
            } else {
                syllables.iter().map(|s| case(s)).collect::<Vec<_>>().join(" ")
            }
        }
        Action::Wrap(width) => match hyphenator.wrap(word, width, sep)? {
            Some((before, after)) => format!("{} {}", case(&before), case(&after)),
            None => case(word),
        },
    })
}

fn number(name: &str, value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("invalid number for {name}: {value}"))
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

/// Send `tracing` output to stderr, filtered by `RUST_LOG` (default: warnings).
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
