// Enrichment engine: persist newly observed substitutions
//
// Candidates that are not yet in the store get a grammatical category
// inferred from the analyzer's tagging of their original term, the default
// register, and are appended as one shard. Nothing existing is ever
// rewritten; a run that discovers nothing new writes nothing.

use eloquence_core::enums::{Category, PartOfSpeech, Register};
use eloquence_core::report::ImprovementCandidate;
use eloquence_core::SubstitutionEntry;

use crate::analyzer::Analyzer;
use crate::store::{StoreError, VocabularyStore};

/// Register assigned to every enriched row.
const DEFAULT_REGISTER: Register = Register::Courant;

/// Enrich the store with the candidates of one analysis run.
///
/// Deduplication is two-fold: against the pre-enrichment store snapshot
/// (case-sensitive on the (original, improved) pair) and against rows
/// already accepted within this run. Returns the number of rows written.
pub fn enrich<A: Analyzer, S: VocabularyStore>(
    analyzer: &A,
    store: &S,
    candidates: &[ImprovementCandidate],
) -> Result<usize, StoreError> {
    let snapshot = store.load()?;

    let mut new_rows: Vec<SubstitutionEntry> = Vec::new();
    for candidate in candidates {
        if snapshot.contains_pair(&candidate.original, &candidate.suggestion) {
            continue;
        }
        if new_rows
            .iter()
            .any(|row| row.same_pair(&candidate.original, &candidate.suggestion))
        {
            continue;
        }

        let Some(category) = infer_category(analyzer, &candidate.original) else {
            continue;
        };

        new_rows.push(SubstitutionEntry::new(
            candidate.original.clone(),
            candidate.suggestion.clone(),
            candidate.reason.clone(),
            category,
            DEFAULT_REGISTER,
        ));
    }

    let written = new_rows.len();
    store.append(&new_rows)?;
    Ok(written)
}

/// Infer the category of a term by re-analyzing it in isolation.
///
/// The first token's part-of-speech decides for the open classes; anything
/// else is an expression when the term has several tokens, otherwise the
/// fallback bucket. Returns `None` when the term cannot be classified at
/// all (analyzer failure or zero tokens), in which case the candidate is
/// skipped.
fn infer_category<A: Analyzer>(analyzer: &A, original: &str) -> Option<Category> {
    let analyzed = match analyzer.analyze(original) {
        Ok(analyzed) => analyzed,
        Err(e) => {
            log::debug!("skipping enrichment of {original:?}: {e}");
            return None;
        }
    };

    let first = analyzed.tokens.first()?;
    let category = match first.pos {
        PartOfSpeech::Noun => Category::Nom,
        PartOfSpeech::Verb => Category::Verbe,
        PartOfSpeech::Adjective => Category::Adjectif,
        PartOfSpeech::Adverb => Category::Adverbe,
        _ if analyzed.tokens.len() > 1 => Category::Expression,
        _ => Category::Autre,
    };
    Some(category)
}
