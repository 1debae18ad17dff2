// Analysis report types: ImprovementCandidate, TextStatistics, AnalysisResult
//
// These are the types serialized into the analysis output document. Field
// names follow the wire format: candidates carry `original`, `suggestion`
// and `raison`; statistics use snake_case English names.

use serde::Serialize;

// ---------------------------------------------------------------------------
// ImprovementCandidate
// ---------------------------------------------------------------------------

/// A detected, store-backed improvement suggestion for one analysis run.
///
/// Transient: produced by the candidate detector, consumed by the
/// enrichment engine and the output serializer, never persisted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImprovementCandidate {
    /// The surface form seen in the text, in the form matched.
    pub original: String,
    /// The `improved` value of the first matching store row.
    pub suggestion: String,
    /// The `reason` value of that row.
    #[serde(rename = "raison")]
    pub reason: String,
}

impl ImprovementCandidate {
    /// Create a new candidate.
    pub fn new(
        original: impl Into<String>,
        suggestion: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            original: original.into(),
            suggestion: suggestion.into(),
            reason: reason.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// TextStatistics
// ---------------------------------------------------------------------------

/// Descriptive metrics over one analyzed text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStatistics {
    /// Tokens that are neither punctuation nor whitespace.
    pub word_count: usize,
    /// Sentence boundaries reported by the analyzer.
    pub sentence_count: usize,
    /// Distinct lemma forms among alphabetic tokens.
    pub unique_words: usize,
    /// Mean surface-form character length over alphabetic tokens.
    /// 0.0 when the text has no alphabetic tokens.
    pub avg_word_length: f64,
}

impl TextStatistics {
    /// Statistics for empty or unanalyzable input.
    pub fn empty() -> Self {
        Self {
            word_count: 0,
            sentence_count: 0,
            unique_words: 0,
            avg_word_length: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// AnalysisResult
// ---------------------------------------------------------------------------

/// The complete result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Improvement candidates, in detection order (words first, phrases after).
    pub improvements: Vec<ImprovementCandidate>,
    /// Descriptive statistics.
    pub statistics: TextStatistics,
}

impl AnalysisResult {
    /// Serialize as the pretty-printed UTF-8 JSON output document.
    /// Non-Latin characters are written as-is, not ASCII-escaped.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_serializes_with_raison_field() {
        let c = ImprovementCandidate::new("bon", "excellent", "Plus pr\u{00E9}cis");
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["original"], "bon");
        assert_eq!(json["suggestion"], "excellent");
        assert_eq!(json["raison"], "Plus pr\u{00E9}cis");
        assert!(json.get("reason").is_none());
    }

    #[test]
    fn result_document_shape() {
        let result = AnalysisResult {
            improvements: vec![ImprovementCandidate::new("truc", "\u{00E9}l\u{00E9}ment", "")],
            statistics: TextStatistics {
                word_count: 10,
                sentence_count: 2,
                unique_words: 8,
                avg_word_length: 4.5,
            },
        };
        let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert_eq!(json["improvements"].as_array().unwrap().len(), 1);
        assert_eq!(json["statistics"]["word_count"], 10);
        assert_eq!(json["statistics"]["avg_word_length"], 4.5);
    }

    #[test]
    fn json_keeps_non_latin_characters() {
        let result = AnalysisResult {
            improvements: vec![ImprovementCandidate::new("tr\u{00E8}s", "extr\u{00EA}mement", "")],
            statistics: TextStatistics::empty(),
        };
        let json = result.to_json().unwrap();
        assert!(json.contains("tr\u{00E8}s"));
        assert!(json.contains("extr\u{00EA}mement"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn empty_statistics_are_all_zero() {
        let s = TextStatistics::empty();
        assert_eq!(s.word_count, 0);
        assert_eq!(s.sentence_count, 0);
        assert_eq!(s.unique_words, 0);
        assert_eq!(s.avg_word_length, 0.0);
    }
}
