//! French vocabulary-improvement engine.
//!
//! Analyzes transcribed speech, suggests vocabulary improvements backed by
//! a persistent substitution store, and grows that store from observed
//! usage.
//!
//! # Architecture
//!
//! - [`analyzer`] -- the [`analyzer::Analyzer`] trait and the baseline
//!   rule-based [`analyzer::LexiconAnalyzer`]
//! - [`store`] -- vocabulary persistence: [`store::VocabularyStore`],
//!   CSV shard files, in-memory snapshot with first-match-wins lookup
//! - [`detector`] -- overused word/phrase candidate detection
//! - [`statistics`] -- descriptive text metrics
//! - [`enrich`] -- category inference and deduplicated persistence of
//!   newly observed substitutions
//! - [`seed`] -- curated starter vocabulary
//! - [`handle`] -- [`handle::EloquenceHandle`], the pipeline facade
//!
//! The typical entry point:
//!
//! ```no_run
//! use eloquence_fr::handle::EloquenceHandle;
//!
//! let handle = EloquenceHandle::open("vocabulaire");
//! let report = handle.run("c'est bon, vraiment bon, très bon")?;
//! println!("{}", report.result.to_json()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analyzer;
pub mod detector;
pub mod enrich;
pub mod handle;
pub mod seed;
pub mod statistics;
pub mod store;

pub use analyzer::{Analyzer, AnalyzerError, LexiconAnalyzer};
pub use handle::{EloquenceError, EloquenceHandle, RunReport};
pub use store::{CsvShardStore, MemoryStore, StoreError, Vocabulary, VocabularyStore};
