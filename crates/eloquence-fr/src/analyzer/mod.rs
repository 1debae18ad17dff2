// Language analyzer module
//
// The pipeline consumes analyzer output ([`AnalyzedText`]) through the
// [`Analyzer`] trait and never depends on how the annotation was produced.
// The baseline [`LexiconAnalyzer`] is rule-based and self-contained; a
// model-backed analyzer plugs in by implementing the same trait and being
// handed to the pipeline at construction time.

mod constants;
mod lexicon;

pub use lexicon::LexiconAnalyzer;

use eloquence_core::AnalyzedText;

/// Error type for language analysis failures.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// The analyzer could not be reached or initialized.
    #[error("language analyzer unavailable: {0}")]
    Unavailable(String),

    /// Analysis of a specific text failed.
    #[error("analysis failed: {0}")]
    Analysis(String),
}

/// Trait for language analyzers.
///
/// Given raw text, produces the token sequence (surface form, lemma,
/// part-of-speech, stop-word/punctuation flags) and sentence boundaries.
/// Empty input must yield an empty [`AnalyzedText`], not an error.
pub trait Analyzer {
    /// Analyze one text.
    fn analyze(&self, text: &str) -> Result<AnalyzedText, AnalyzerError>;
}
