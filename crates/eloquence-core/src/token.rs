// Token, Sentence and AnalyzedText: the language-analyzer output types

use crate::enums::PartOfSpeech;

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// One token of analyzed text.
///
/// The flags mirror what downstream consumers need: the candidate detector
/// filters on `is_alpha` / `is_stop`, the statistics summarizer on
/// `is_punct` / `is_space`. Analyzers that do not emit whitespace tokens
/// simply never set `is_space`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form, exactly as it appears in the text.
    pub text: String,
    /// Lemma (base form). Best-effort for rule-based analyzers.
    pub lemma: String,
    /// Part-of-speech tag.
    pub pos: PartOfSpeech,
    /// True for purely alphabetic tokens.
    pub is_alpha: bool,
    /// True for stop words (function words carrying no lexical signal).
    pub is_stop: bool,
    /// True for punctuation tokens.
    pub is_punct: bool,
    /// True for whitespace tokens.
    pub is_space: bool,
}

impl Token {
    /// Create a word token.
    pub fn word(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PartOfSpeech,
        is_stop: bool,
    ) -> Self {
        let text = text.into();
        let is_alpha = !text.is_empty() && text.chars().all(char::is_alphabetic);
        Self {
            text,
            lemma: lemma.into(),
            pos,
            is_alpha,
            is_stop,
            is_punct: false,
            is_space: false,
        }
    }

    /// Create a punctuation token.
    pub fn punctuation(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            lemma: text.clone(),
            text,
            pos: PartOfSpeech::Punctuation,
            is_alpha: false,
            is_stop: false,
            is_punct: true,
            is_space: false,
        }
    }

    /// Create a numeric token.
    pub fn number(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            lemma: text.clone(),
            text,
            pos: PartOfSpeech::Number,
            is_alpha: false,
            is_stop: false,
            is_punct: false,
            is_space: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Sentence
// ---------------------------------------------------------------------------

/// A detected sentence, as a span over the token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence {
    /// Index of the first token of the sentence.
    pub start: usize,
    /// Number of tokens in the sentence (terminators included).
    pub len: usize,
}

impl Sentence {
    /// Create a new sentence span.
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }
}

// ---------------------------------------------------------------------------
// AnalyzedText
// ---------------------------------------------------------------------------

/// Complete analyzer output for one text: the token sequence plus the
/// detected sentence boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalyzedText {
    pub tokens: Vec<Token>,
    pub sentences: Vec<Sentence>,
}

impl AnalyzedText {
    /// Create an empty analysis (the result for empty input).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of detected sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// True when the text produced no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
