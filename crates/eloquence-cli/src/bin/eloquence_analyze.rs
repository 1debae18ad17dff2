// eloquence-analyze: Analyze a transcription and enrich the vocabulary store.
//
// Takes a file path or literal text, runs the full pipeline (candidate
// detection, statistics, enrichment), writes the analysis document to the
// output directory and prints a summary.
//
// Usage:
//   eloquence-analyze [OPTIONS] <FILE|TEXT>
//
// Options:
//   -v, --vocab-dir PATH    Vocabulary shard directory (default: ./vocabulaire)
//   -o, --output-dir PATH   Output directory (default: ./output)
//   -h, --help              Print help

use std::path::PathBuf;

use eloquence_fr::handle::EloquenceHandle;

/// Output document file name.
const RESULT_FILE: &str = "analysis_result.json";

fn print_usage() {
    eprintln!("Usage: eloquence-analyze [OPTIONS] <FILE|TEXT>");
    eprintln!();
    eprintln!("Pass the path of a transcription file, or the text itself.");
    eprintln!("Run with --help for the full option list.");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (vocab_dir, args) = eloquence_cli::parse_path_option(&args, "vocab-dir", "-v");
    let (output_dir, args) = eloquence_cli::parse_path_option(&args, "output-dir", "-o");

    if eloquence_cli::wants_help(&args) {
        println!("eloquence-analyze: Analyze a transcription and enrich the vocabulary store.");
        println!();
        println!("Usage: eloquence-analyze [OPTIONS] <FILE|TEXT>");
        println!();
        println!("The argument is read as a file when it names one, otherwise as");
        println!("literal text. The analysis document is written to");
        println!("<output-dir>/{RESULT_FILE}.");
        println!();
        println!("Options:");
        println!("  -v, --vocab-dir PATH    Vocabulary shard directory (default: ./vocabulaire)");
        println!("  -o, --output-dir PATH   Output directory (default: ./output)");
        println!("  -h, --help              Print this help");
        return;
    }

    let Some(input_arg) = args.first() else {
        print_usage();
        std::process::exit(1);
    };

    eloquence_cli::init_logging();

    let text = eloquence_cli::read_input(input_arg).unwrap_or_else(|e| eloquence_cli::fatal(&e));

    let vocab_dir = eloquence_cli::resolve_vocab_dir(vocab_dir.as_deref());
    let handle = EloquenceHandle::open(vocab_dir);

    let report = handle
        .run(&text)
        .unwrap_or_else(|e| eloquence_cli::fatal(&e.to_string()));

    let output_dir = PathBuf::from(
        output_dir.unwrap_or_else(|| eloquence_cli::DEFAULT_OUTPUT_DIR.to_string()),
    );
    std::fs::create_dir_all(&output_dir).unwrap_or_else(|e| {
        eloquence_cli::fatal(&format!(
            "failed to create output directory {}: {e}",
            output_dir.display()
        ))
    });

    let json = report
        .result
        .to_json()
        .unwrap_or_else(|e| eloquence_cli::fatal(&format!("failed to serialize result: {e}")));
    let output_file = output_dir.join(RESULT_FILE);
    std::fs::write(&output_file, json).unwrap_or_else(|e| {
        eloquence_cli::fatal(&format!("failed to write {}: {e}", output_file.display()))
    });

    println!(
        "Added {} new vocabulary entries to the database.",
        report.new_entries
    );
    println!("Analysis complete. Results saved to {}", output_file.display());
    println!(
        "Found {} potential vocabulary improvements.",
        report.result.improvements.len()
    );
    eloquence_cli::print_statistics(&report.result.statistics);
}
