// EloquenceHandle: top-level integration point for the analysis pipeline.
//
// Owns the language analyzer and the vocabulary store, both injected at
// construction time, and runs the pipeline:
//   Load -> Detect -> (optional) Enrich -> Persist-if-nonempty.
// The handle is stateless across runs except through the store; there are
// no retries, and a store or analyzer failure aborts the run and surfaces
// to the caller.

use std::path::PathBuf;

use eloquence_core::report::{AnalysisResult, ImprovementCandidate};

use crate::analyzer::{Analyzer, AnalyzerError, LexiconAnalyzer};
use crate::detector;
use crate::enrich;
use crate::statistics;
use crate::store::{CsvShardStore, StoreError, VocabularyStore};

/// Error type for pipeline failures.
#[derive(Debug, thiserror::Error)]
pub enum EloquenceError {
    /// The language analyzer failed or is unavailable.
    #[error("language analyzer error: {0}")]
    Analyzer(#[from] AnalyzerError),

    /// The vocabulary store failed.
    #[error("vocabulary store error: {0}")]
    Store(#[from] StoreError),
}

/// Result of one full pipeline run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The analysis output document.
    pub result: AnalysisResult,
    /// Number of vocabulary rows the run added to the store.
    pub new_entries: usize,
}

/// Top-level handle owning the analyzer and the vocabulary store.
pub struct EloquenceHandle<A, S> {
    analyzer: A,
    store: S,
}

impl EloquenceHandle<LexiconAnalyzer, CsvShardStore> {
    /// Open a handle with the baseline analyzer over a shard directory.
    pub fn open(vocab_dir: impl Into<PathBuf>) -> Self {
        Self::new(LexiconAnalyzer::new(), CsvShardStore::new(vocab_dir))
    }
}

impl<A: Analyzer, S: VocabularyStore> EloquenceHandle<A, S> {
    /// Create a handle from an analyzer and a store.
    pub fn new(analyzer: A, store: S) -> Self {
        Self { analyzer, store }
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Analyze one text: detect improvement candidates against the current
    /// store snapshot and compute descriptive statistics. Does not write.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, EloquenceError> {
        let analyzed = self.analyzer.analyze(text)?;
        let vocabulary = self.store.load()?;
        Ok(AnalysisResult {
            improvements: detector::detect(&analyzed, &vocabulary),
            statistics: statistics::summarize(&analyzed),
        })
    }

    /// Enrich the store with candidates from an analysis run. Returns the
    /// number of net-new rows written.
    pub fn enrich(&self, candidates: &[ImprovementCandidate]) -> Result<usize, EloquenceError> {
        Ok(enrich::enrich(&self.analyzer, &self.store, candidates)?)
    }

    /// Run the full pipeline on one text.
    pub fn run(&self, text: &str) -> Result<RunReport, EloquenceError> {
        let result = self.analyze(text)?;
        let new_entries = self.enrich(&result.improvements)?;
        Ok(RunReport { result, new_entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eloquence_core::enums::{Category, Register};
    use eloquence_core::SubstitutionEntry;

    use crate::store::MemoryStore;

    fn handle_with(rows: Vec<SubstitutionEntry>) -> EloquenceHandle<LexiconAnalyzer, MemoryStore> {
        EloquenceHandle::new(LexiconAnalyzer::new(), MemoryStore::with_entries(rows))
    }

    fn row(original: &str, improved: &str) -> SubstitutionEntry {
        SubstitutionEntry::new(original, improved, "", Category::Autre, Register::Courant)
    }

    #[test]
    fn analyze_does_not_write() {
        let handle = handle_with(vec![row("truc", "objet")]);
        let result = handle.analyze("un truc, encore un truc").unwrap();
        assert_eq!(result.improvements.len(), 1);
        assert_eq!(handle.store().shard_count(), 1);
    }

    #[test]
    fn run_detects_and_enriches() {
        // The stored original is capitalized: the lookup still matches, but
        // the case-sensitive pair check does not, so the run persists the
        // lower-cased variant as a new row.
        let handle = handle_with(vec![row("Truc", "objet")]);
        let report = handle.run("un truc, encore un truc").unwrap();
        assert_eq!(report.result.improvements.len(), 1);
        assert_eq!(report.new_entries, 1);

        // The enriched row carries the inferred category and default register.
        let vocab = handle.store().load().unwrap();
        let added = vocab
            .entries()
            .iter()
            .find(|e| e.category != Category::Autre)
            .unwrap();
        assert_eq!(added.original, "truc");
        assert_eq!(added.category, Category::Nom);
        assert_eq!(added.register, Register::Courant);
    }

    #[test]
    fn candidates_from_lowercase_rows_are_never_re_added() {
        // Detection sources the suggestion from the store, so the exact
        // pair already exists and enrichment has nothing to write.
        let handle = handle_with(vec![row("truc", "objet")]);
        let report = handle.run("un truc, encore un truc").unwrap();
        assert_eq!(report.result.improvements.len(), 1);
        assert_eq!(report.new_entries, 0);
        assert_eq!(handle.store().shard_count(), 1);
    }

    #[test]
    fn second_run_adds_nothing() {
        let handle = handle_with(vec![row("Truc", "objet")]);
        let text = "un truc, encore un truc";
        assert_eq!(handle.run(text).unwrap().new_entries, 1);
        assert_eq!(handle.run(text).unwrap().new_entries, 0);
    }

    #[test]
    fn empty_text_runs_cleanly() {
        let handle = handle_with(vec![row("truc", "objet")]);
        let report = handle.run("").unwrap();
        assert!(report.result.improvements.is_empty());
        assert_eq!(report.result.statistics.word_count, 0);
        assert_eq!(report.new_entries, 0);
    }
}
