// eloquence-stats: Compute text statistics for a transcription.
//
// Reads text from stdin and prints word count, sentence count, unique
// lemma count and average word length. No vocabulary store involved.
//
// Usage:
//   eloquence-stats < transcription.txt

use std::io::{self, Read};

use eloquence_fr::analyzer::{Analyzer, LexiconAnalyzer};
use eloquence_fr::statistics;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if eloquence_cli::wants_help(&args) {
        println!("eloquence-stats: Compute text statistics for a transcription.");
        println!();
        println!("Usage: eloquence-stats < transcription.txt");
        println!();
        println!("Reads text from stdin and prints descriptive statistics.");
        return;
    }

    eloquence_cli::init_logging();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| eloquence_cli::fatal(&format!("failed to read stdin: {e}")));

    let analyzer = LexiconAnalyzer::new();
    let analyzed = analyzer
        .analyze(&input)
        .unwrap_or_else(|e| eloquence_cli::fatal(&e.to_string()));

    eloquence_cli::print_statistics(&statistics::summarize(&analyzed));
}
