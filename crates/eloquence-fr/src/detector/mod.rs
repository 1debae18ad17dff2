// Candidate detection: overused words and phrases with known improvements
//
// The detector never invents suggestions. It surfaces substitutions the
// vocabulary store already knows, for terms that are repeated in this text;
// a word that appears once is never a candidate, however well known it is.

use hashbrown::HashMap;

use eloquence_core::report::ImprovementCandidate;
use eloquence_core::token::AnalyzedText;

use crate::store::Vocabulary;

/// A term must appear at least this often to count as overused.
pub const MIN_REPEAT_COUNT: usize = 2;

/// Number of most-frequent bigrams inspected per text.
pub const TOP_BIGRAMS: usize = 3;

/// Bigram detection is skipped for token streams of this size or smaller.
pub const MIN_TOKENS_FOR_BIGRAMS: usize = 4;

/// Frequency record: occurrence count plus first-seen rank, so emission
/// order is deterministic (text order, not hash order).
struct Frequency {
    count: usize,
    first_seen: usize,
}

/// Detect improvement candidates for one analyzed text.
///
/// Word candidates come first, in the order the repeated words first appear
/// in the text; phrase candidates follow. The two lists are not
/// cross-deduplicated.
pub fn detect(text: &AnalyzedText, vocabulary: &Vocabulary) -> Vec<ImprovementCandidate> {
    let mut candidates = word_candidates(text, vocabulary);
    candidates.extend(phrase_candidates(text, vocabulary));
    candidates
}

// ---------------------------------------------------------------------------
// Single-word candidates
// ---------------------------------------------------------------------------

fn word_candidates(text: &AnalyzedText, vocabulary: &Vocabulary) -> Vec<ImprovementCandidate> {
    let mut frequencies: HashMap<String, Frequency> = HashMap::new();
    let mut rank = 0;
    for token in &text.tokens {
        if !token.is_alpha || token.is_stop {
            continue;
        }
        let word = token.text.to_lowercase();
        frequencies
            .entry(word)
            .and_modify(|f| f.count += 1)
            .or_insert(Frequency {
                count: 1,
                first_seen: rank,
            });
        rank += 1;
    }

    let mut repeated: Vec<(&String, &Frequency)> = frequencies
        .iter()
        .filter(|(_, f)| f.count >= MIN_REPEAT_COUNT)
        .collect();
    repeated.sort_by_key(|(_, f)| f.first_seen);

    repeated
        .into_iter()
        .filter_map(|(word, _)| {
            vocabulary
                .find_first(word)
                .map(|row| {
                    ImprovementCandidate::new(word.clone(), row.improved.clone(), row.reason.clone())
                })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Phrase (bigram) candidates
// ---------------------------------------------------------------------------

fn phrase_candidates(text: &AnalyzedText, vocabulary: &Vocabulary) -> Vec<ImprovementCandidate> {
    if text.tokens.len() < MIN_TOKENS_FOR_BIGRAMS {
        return Vec::new();
    }

    // Bigrams run over the whole token stream, punctuation included; the
    // store only ever matches the joined forms it actually contains.
    let lowered: Vec<String> = text.tokens.iter().map(|t| t.text.to_lowercase()).collect();

    let mut frequencies: HashMap<String, Frequency> = HashMap::new();
    for (rank, pair) in lowered.windows(2).enumerate() {
        let phrase = format!("{} {}", pair[0], pair[1]);
        frequencies
            .entry(phrase)
            .and_modify(|f| f.count += 1)
            .or_insert(Frequency {
                count: 1,
                first_seen: rank,
            });
    }

    let mut ranked: Vec<(&String, &Frequency)> = frequencies.iter().collect();
    // Most frequent first; ties broken by first appearance in the text.
    ranked.sort_by_key(|(_, f)| (usize::MAX - f.count, f.first_seen));

    ranked
        .into_iter()
        .take(TOP_BIGRAMS)
        .filter(|(_, f)| f.count >= MIN_REPEAT_COUNT)
        .filter_map(|(phrase, _)| {
            vocabulary
                .find_first(phrase)
                .map(|row| {
                    ImprovementCandidate::new(
                        phrase.clone(),
                        row.improved.clone(),
                        row.reason.clone(),
                    )
                })
        })
        .collect()
}
