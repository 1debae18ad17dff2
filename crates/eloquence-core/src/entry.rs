// SubstitutionEntry: one row of the vocabulary store

use crate::enums::{Category, Register};

// ---------------------------------------------------------------------------
// Wire field names (CSV shard header)
// ---------------------------------------------------------------------------

pub const FIELD_ORIGINAL: &str = "motOriginal";
pub const FIELD_IMPROVED: &str = "motAmeliore";
pub const FIELD_REASON: &str = "raison";
pub const FIELD_CATEGORY: &str = "categorie";
pub const FIELD_REGISTER: &str = "niveau";

/// The shard header fields, in column order.
pub const FIELDS: [&str; 5] = [
    FIELD_ORIGINAL,
    FIELD_IMPROVED,
    FIELD_REASON,
    FIELD_CATEGORY,
    FIELD_REGISTER,
];

// ---------------------------------------------------------------------------
// SubstitutionEntry
// ---------------------------------------------------------------------------

/// One known substitution: an overused term and its suggested improvement.
///
/// `original` is stored lower-cased; lookup matches it case-insensitively,
/// but deduplication compares both `original` and `improved` exactly as
/// stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionEntry {
    /// Source term or phrase, normalized to lower case.
    pub original: String,
    /// Suggested replacement.
    pub improved: String,
    /// Human-readable justification. May be empty.
    pub reason: String,
    /// Grammatical category.
    pub category: Category,
    /// Formality register.
    pub register: Register,
}

impl SubstitutionEntry {
    /// Create a new entry.
    pub fn new(
        original: impl Into<String>,
        improved: impl Into<String>,
        reason: impl Into<String>,
        category: Category,
        register: Register,
    ) -> Self {
        Self {
            original: original.into(),
            improved: improved.into(),
            reason: reason.into(),
            category,
            register,
        }
    }

    /// Case-insensitive exact match on `original`, used for lookups.
    pub fn matches_term(&self, term: &str) -> bool {
        self.original.to_lowercase() == term.to_lowercase()
    }

    /// Case-sensitive match on the (`original`, `improved`) pair, the
    /// natural key used for deduplication.
    pub fn same_pair(&self, original: &str, improved: &str) -> bool {
        self.original == original && self.improved == improved
    }
}
