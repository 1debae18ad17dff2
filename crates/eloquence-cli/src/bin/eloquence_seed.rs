// eloquence-seed: Write the starter vocabulary into the store.
//
// Creates a regular dated shard with the curated starter entries, skipping
// any pair the store already holds. Safe to run repeatedly.
//
// Usage:
//   eloquence-seed [-v VOCAB_DIR]

use eloquence_fr::seed::seed_store;
use eloquence_fr::store::CsvShardStore;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (vocab_dir, args) = eloquence_cli::parse_path_option(&args, "vocab-dir", "-v");

    if eloquence_cli::wants_help(&args) {
        println!("eloquence-seed: Write the starter vocabulary into the store.");
        println!();
        println!("Usage: eloquence-seed [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -v, --vocab-dir PATH   Vocabulary shard directory (default: ./vocabulaire)");
        println!("  -h, --help             Print this help");
        return;
    }

    eloquence_cli::init_logging();

    let vocab_dir = eloquence_cli::resolve_vocab_dir(vocab_dir.as_deref());
    let store = CsvShardStore::new(&vocab_dir);
    let written = seed_store(&store).unwrap_or_else(|e| eloquence_cli::fatal(&e.to_string()));

    println!(
        "Seeded {} vocabulary entries in {}.",
        written,
        vocab_dir.display()
    );
}
