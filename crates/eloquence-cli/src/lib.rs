// eloquence-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use eloquence_core::report::TextStatistics;

/// Default vocabulary directory name, relative to the working directory.
pub const DEFAULT_VOCAB_DIR: &str = "vocabulaire";

/// Default output directory name for analysis documents.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Environment variable overriding the vocabulary directory.
pub const VOCAB_DIR_ENV: &str = "ELOQUENCE_VOCAB_DIR";

/// Resolve the vocabulary directory.
///
/// Search order:
/// 1. `--vocab-dir` argument (if provided)
/// 2. `ELOQUENCE_VOCAB_DIR` environment variable
/// 3. `./vocabulaire`
pub fn resolve_vocab_dir(arg: Option<&str>) -> PathBuf {
    if let Some(dir) = arg {
        return PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var(VOCAB_DIR_ENV) {
        return PathBuf::from(dir);
    }
    PathBuf::from(DEFAULT_VOCAB_DIR)
}

/// Parse a `--NAME=PATH`, `--NAME PATH` or `-X PATH` option out of `args`.
///
/// Returns `(value, remaining_args)`.
pub fn parse_path_option(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let long_flag = format!("--{long}");
    let long_prefix = format!("--{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&long_prefix) {
            value = Some(val.to_string());
        } else if arg == &long_flag || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Read the analysis input: the contents of `arg` when it names an existing
/// file, otherwise `arg` itself as literal text.
pub fn read_input(arg: &str) -> Result<String, String> {
    let path = PathBuf::from(arg);
    if path.is_file() {
        return std::fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()));
    }
    Ok(arg.to_string())
}

/// Print the human-readable statistics block.
pub fn print_statistics(stats: &TextStatistics) {
    println!();
    println!("Text Statistics:");
    println!("Word count: {}", stats.word_count);
    println!("Sentence count: {}", stats.sentence_count);
    println!("Unique words: {}", stats.unique_words);
    println!("Average word length: {:.2}", stats.avg_word_length);
}

/// Initialize the logger for a binary. Safe to call once per process.
pub fn init_logging() {
    let _ = env_logger::try_init();
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
