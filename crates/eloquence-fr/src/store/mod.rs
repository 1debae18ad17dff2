// Vocabulary store: persistence of substitution entries
//
// The store is an append-only log of shards. Each enrichment run adds at
// most one shard; the logical store is rebuilt by concatenating every shard
// on load and is never mutated in place. Lookups run against the loaded
// in-memory snapshot ([`Vocabulary`]) with first-match-wins semantics.

mod csv;
mod shard;

pub use shard::CsvShardStore;

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;

use eloquence_core::SubstitutionEntry;

/// Error type for vocabulary store failures.
///
/// Only I/O failures writing a shard or walking the store directory are
/// hard errors; unreadable or malformed shards encountered during `load`
/// are logged and skipped.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create vocabulary directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to list vocabulary directory {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write vocabulary shard {path}: {source}")]
    WriteShard {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ---------------------------------------------------------------------------
// VocabularyStore
// ---------------------------------------------------------------------------

/// Trait for vocabulary persistence backends.
///
/// The contract both implementations share: `load` rebuilds the whole
/// logical store by concatenation, `append` adds one shard holding the full
/// existing store plus the new rows, and an empty `rows` slice is a no-op
/// (no shard is created).
pub trait VocabularyStore {
    /// Load every persisted shard into one ordered snapshot.
    fn load(&self) -> Result<Vocabulary, StoreError>;

    /// Persist `rows` as one new shard. No-op when `rows` is empty.
    fn append(&self, rows: &[SubstitutionEntry]) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// In-memory snapshot of the vocabulary store, as produced by one `load`.
///
/// Entries keep shard order (shard discovery order, then row order within
/// each shard) and are not deduplicated; `find` callers take the first
/// match as canonical.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Vec<SubstitutionEntry>,
}

impl Vocabulary {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a snapshot from entries already in load order.
    pub fn from_entries(entries: Vec<SubstitutionEntry>) -> Self {
        Self { entries }
    }

    /// All entries, in load order.
    pub fn entries(&self) -> &[SubstitutionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All rows whose `original` matches `term`, case-insensitively.
    pub fn find(&self, term: &str) -> Vec<&SubstitutionEntry> {
        self.entries.iter().filter(|e| e.matches_term(term)).collect()
    }

    /// First row whose `original` matches `term` (first match wins).
    pub fn find_first(&self, term: &str) -> Option<&SubstitutionEntry> {
        self.entries.iter().find(|e| e.matches_term(term))
    }

    /// Whether a row with exactly this (`original`, `improved`) pair exists.
    pub fn contains_pair(&self, original: &str, improved: &str) -> bool {
        self.entries.iter().any(|e| e.same_pair(original, improved))
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory store, mainly for tests and embedding.
///
/// Mirrors the shard semantics of [`CsvShardStore`]: each `append` pushes a
/// shard holding the previous logical store plus the new rows, and `load`
/// concatenates every shard. There is no date-collision concept, so every
/// append creates a distinct shard.
#[derive(Debug, Default)]
pub struct MemoryStore {
    shards: RefCell<Vec<Vec<SubstitutionEntry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one initial shard.
    pub fn with_entries(entries: Vec<SubstitutionEntry>) -> Self {
        Self {
            shards: RefCell::new(vec![entries]),
        }
    }

    /// Number of shards written so far.
    pub fn shard_count(&self) -> usize {
        self.shards.borrow().len()
    }
}

impl VocabularyStore for MemoryStore {
    fn load(&self) -> Result<Vocabulary, StoreError> {
        let entries = self.shards.borrow().iter().flatten().cloned().collect();
        Ok(Vocabulary::from_entries(entries))
    }

    fn append(&self, rows: &[SubstitutionEntry]) -> Result<(), StoreError> {
        if rows.is_empty() {
            return Ok(());
        }
        let mut shard = self.load()?.entries;
        shard.extend_from_slice(rows);
        self.shards.borrow_mut().push(shard);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eloquence_core::enums::{Category, Register};

    fn entry(original: &str, improved: &str) -> SubstitutionEntry {
        SubstitutionEntry::new(original, improved, "", Category::Autre, Register::Courant)
    }

    #[test]
    fn find_is_case_insensitive_and_ordered() {
        let vocab = Vocabulary::from_entries(vec![
            entry("bon", "excellent"),
            entry("Bon", "remarquable"),
        ]);
        let hits = vocab.find("BON");
        assert_eq!(hits.len(), 2);
        // First match wins for callers.
        assert_eq!(vocab.find_first("BON").unwrap().improved, "excellent");
    }

    #[test]
    fn contains_pair_is_case_sensitive() {
        let vocab = Vocabulary::from_entries(vec![entry("bon", "excellent")]);
        assert!(vocab.contains_pair("bon", "excellent"));
        assert!(!vocab.contains_pair("Bon", "excellent"));
        assert!(!vocab.contains_pair("bon", "EXCELLENT"));
    }

    #[test]
    fn memory_store_empty_append_is_noop() {
        let store = MemoryStore::new();
        store.append(&[]).unwrap();
        assert_eq!(store.shard_count(), 0);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn memory_store_append_includes_previous_store() {
        let store = MemoryStore::with_entries(vec![entry("bon", "excellent")]);
        store.append(&[entry("truc", "\u{00E9}l\u{00E9}ment")]).unwrap();
        assert_eq!(store.shard_count(), 2);

        // The new shard holds the old store plus the new row, and load
        // concatenates both shards without deduplication.
        let vocab = store.load().unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.entries()[0].original, "bon");
        assert_eq!(vocab.entries()[1].original, "bon");
        assert_eq!(vocab.entries()[2].original, "truc");
    }
}
