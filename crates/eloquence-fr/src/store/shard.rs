// CSV shard store: one dated shard file per enrichment run

use std::path::{Path, PathBuf};

use chrono::Local;

use eloquence_core::entry::FIELDS;
use eloquence_core::enums::{Category, Register};
use eloquence_core::SubstitutionEntry;

use super::csv;
use super::{StoreError, Vocabulary, VocabularyStore};

/// Shard file name prefix.
const SHARD_PREFIX: &str = "vocabulaire_enrichi_";

/// Shard file extension.
const SHARD_EXT: &str = "csv";

/// Vocabulary store backed by a directory of CSV shard files.
///
/// `load` merges every `*.csv` file in the directory in sorted file-name
/// order. `append` writes one shard named after the current date
/// (`vocabulaire_enrichi_YYYYMMDD.csv`); a second append on the same
/// calendar day overwrites the same-day shard, which is safe because each
/// shard holds the full store as of its write. Existing shard files are
/// never modified.
#[derive(Debug, Clone)]
pub struct CsvShardStore {
    dir: PathBuf,
}

impl CsvShardStore {
    /// Create a store over the given directory. The directory is created
    /// lazily on first append; a missing directory loads as an empty store.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Shard file name for today's date.
    fn today_shard_name() -> String {
        format!(
            "{}{}.{}",
            SHARD_PREFIX,
            Local::now().format("%Y%m%d"),
            SHARD_EXT
        )
    }

    /// List shard paths in sorted file-name order.
    fn shard_paths(&self) -> Result<Vec<PathBuf>, StoreError> {
        let read_dir = std::fs::read_dir(&self.dir).map_err(|source| StoreError::ListDir {
            path: self.dir.clone(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == SHARD_EXT))
            .collect();
        paths.sort();
        Ok(paths)
    }

    /// Parse one shard's content into entries. Returns `None` when the
    /// header is missing or wrong (the whole shard is unusable); malformed
    /// rows within a valid shard are skipped individually.
    fn parse_shard(path: &Path, content: &str) -> Option<Vec<SubstitutionEntry>> {
        let mut records = csv::parse(content).into_iter();

        let header = records.next()?;
        if header != FIELDS {
            log::warn!(
                "skipping vocabulary shard {}: unexpected header {:?}",
                path.display(),
                header
            );
            return None;
        }

        let mut entries = Vec::new();
        for record in records {
            match parse_row(&record) {
                Some(entry) => entries.push(entry),
                None => {
                    log::warn!(
                        "skipping malformed row in vocabulary shard {}: {:?}",
                        path.display(),
                        record
                    );
                }
            }
        }
        Some(entries)
    }

    /// Serialize the full shard content: header plus every entry.
    fn render_shard(entries: &[SubstitutionEntry]) -> String {
        let mut out = String::new();
        csv::write_record(&mut out, &FIELDS);
        for e in entries {
            csv::write_record(
                &mut out,
                &[
                    e.original.as_str(),
                    e.improved.as_str(),
                    e.reason.as_str(),
                    e.category.as_str(),
                    e.register.as_str(),
                ],
            );
        }
        out
    }
}

fn parse_row(record: &[String]) -> Option<SubstitutionEntry> {
    let [original, improved, reason, category, register] = record else {
        return None;
    };
    if original.is_empty() || improved.is_empty() {
        return None;
    }
    Some(SubstitutionEntry::new(
        original.as_str(),
        improved.as_str(),
        reason.as_str(),
        Category::parse(category)?,
        Register::parse(register)?,
    ))
}

impl VocabularyStore for CsvShardStore {
    fn load(&self) -> Result<Vocabulary, StoreError> {
        if !self.dir.is_dir() {
            return Ok(Vocabulary::new());
        }

        let mut entries = Vec::new();
        for path in self.shard_paths()? {
            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    log::warn!("skipping unreadable vocabulary shard {}: {}", path.display(), e);
                    continue;
                }
            };
            if let Some(rows) = Self::parse_shard(&path, &content) {
                entries.extend(rows);
            }
        }
        Ok(Vocabulary::from_entries(entries))
    }

    fn append(&self, rows: &[SubstitutionEntry]) -> Result<(), StoreError> {
        if rows.is_empty() {
            return Ok(());
        }

        // Rebuild by concatenation: the new shard carries the full store as
        // of this write, plus the new rows.
        let mut all = self.load()?.entries().to_vec();
        all.extend_from_slice(rows);

        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(Self::today_shard_name());
        std::fs::write(&path, Self::render_shard(&all))
            .map_err(|source| StoreError::WriteShard { path: path.clone(), source })?;
        Ok(())
    }
}
