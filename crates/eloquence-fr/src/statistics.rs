// Descriptive statistics over one analyzed text

use hashbrown::HashSet;

use eloquence_core::report::TextStatistics;
use eloquence_core::token::AnalyzedText;

/// Compute descriptive metrics for one text. Pure function of the analyzer
/// output; store state plays no part.
pub fn summarize(text: &AnalyzedText) -> TextStatistics {
    let word_count = text
        .tokens
        .iter()
        .filter(|t| !t.is_punct && !t.is_space)
        .count();

    let mut lemmas: HashSet<&str> = HashSet::new();
    let mut alpha_count = 0usize;
    let mut alpha_chars = 0usize;
    for token in &text.tokens {
        if !token.is_alpha {
            continue;
        }
        lemmas.insert(token.lemma.as_str());
        alpha_count += 1;
        alpha_chars += token.text.chars().count();
    }

    // Guard the division: no alphabetic tokens means length 0, not NaN.
    let avg_word_length = if alpha_count > 0 {
        alpha_chars as f64 / alpha_count as f64
    } else {
        0.0
    };

    TextStatistics {
        word_count,
        sentence_count: text.sentence_count(),
        unique_words: lemmas.len(),
        avg_word_length,
    }
}
