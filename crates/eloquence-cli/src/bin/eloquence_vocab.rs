// eloquence-vocab: Inspect the vocabulary store.
//
// Looks up a term (case-insensitive, exact match) or lists every row.
//
// Usage:
//   eloquence-vocab [OPTIONS] <TERM>
//   eloquence-vocab [OPTIONS] --list
//
// Options:
//   -v, --vocab-dir PATH   Vocabulary shard directory (default: ./vocabulaire)
//   -l, --list             Print every entry
//   -h, --help             Print help

use eloquence_core::SubstitutionEntry;
use eloquence_fr::store::{CsvShardStore, VocabularyStore};

fn print_entry(entry: &SubstitutionEntry) {
    print!(
        "{} -> {} [{}, {}]",
        entry.original, entry.improved, entry.category, entry.register
    );
    if entry.reason.is_empty() {
        println!();
    } else {
        println!(": {}", entry.reason);
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (vocab_dir, args) = eloquence_cli::parse_path_option(&args, "vocab-dir", "-v");

    if eloquence_cli::wants_help(&args) {
        println!("eloquence-vocab: Inspect the vocabulary store.");
        println!();
        println!("Usage: eloquence-vocab [OPTIONS] <TERM>");
        println!("       eloquence-vocab [OPTIONS] --list");
        println!();
        println!("Options:");
        println!("  -v, --vocab-dir PATH   Vocabulary shard directory (default: ./vocabulaire)");
        println!("  -l, --list             Print every entry");
        println!("  -h, --help             Print this help");
        return;
    }

    let list_all = args.iter().any(|a| a == "--list" || a == "-l");
    let term = args.iter().find(|a| !a.starts_with('-'));

    eloquence_cli::init_logging();

    let vocab_dir = eloquence_cli::resolve_vocab_dir(vocab_dir.as_deref());
    let store = CsvShardStore::new(vocab_dir);
    let vocabulary = store
        .load()
        .unwrap_or_else(|e| eloquence_cli::fatal(&e.to_string()));

    if list_all {
        for entry in vocabulary.entries() {
            print_entry(entry);
        }
        println!("{} entries", vocabulary.len());
        return;
    }

    let Some(term) = term else {
        eprintln!("Usage: eloquence-vocab [OPTIONS] <TERM|--list>");
        std::process::exit(1);
    };
    let matches = vocabulary.find(term);
    if matches.is_empty() {
        println!("no entry for {term:?}");
        std::process::exit(1);
    }
    for entry in matches {
        print_entry(entry);
    }
}
