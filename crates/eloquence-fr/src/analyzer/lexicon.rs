// Rule-based French analyzer: tokenizer, sentence detection, POS tagging
//
// Design notes:
// - Tokenization is a character-class scan. French elision splits after the
//   apostrophe ("c'est" -> "c'", "est") with the apostrophe staying on the
//   elided clitic; hyphenated compounds stay one token.
// - Part-of-speech is closed-class lexicon first, then suffix heuristics,
//   with noun as the default class for unknown alphabetic tokens.
// - Lemmatization is a lower-casing plus a plural-stripping rule. This is
//   best-effort: the trait contract, not the heuristics, is what the rest
//   of the pipeline relies on.

use hashbrown::{HashMap, HashSet};

use eloquence_core::character::{get_char_type, is_apostrophe, is_sentence_terminator, CharType};
use eloquence_core::enums::PartOfSpeech;
use eloquence_core::token::{AnalyzedText, Sentence, Token};

use super::constants::{
    ADJECTIVE_SUFFIXES, COMMON_ADVERBS, COMMON_VERB_FORMS, CONJUNCTIONS, DETERMINERS,
    EXTRA_STOP_WORDS, MIN_ADVERB_SUFFIX_LEN, MIN_VERB_SUFFIX_LEN, NOUN_SUFFIXES, PREPOSITIONS,
    PRONOUNS, VERB_SUFFIXES,
};
use super::{Analyzer, AnalyzerError};

/// Lemmas for elided clitic forms.
const ELISION_LEMMAS: &[(&str, &str)] = &[
    ("c'", "ce"),
    ("d'", "de"),
    ("j'", "je"),
    ("jusqu'", "jusque"),
    ("l'", "le"),
    ("m'", "me"),
    ("n'", "ne"),
    ("qu'", "que"),
    ("s'", "se"),
    ("t'", "te"),
];

/// Baseline rule-based French analyzer.
///
/// Self-contained (no model files, no network); construction is infallible.
/// Swappable with any other [`Analyzer`] implementation at pipeline
/// construction time.
pub struct LexiconAnalyzer {
    stop_words: HashSet<&'static str>,
    closed_class: HashMap<&'static str, PartOfSpeech>,
    elision_lemmas: HashMap<&'static str, &'static str>,
}

impl LexiconAnalyzer {
    /// Build the analyzer with its word tables.
    pub fn new() -> Self {
        let mut closed_class = HashMap::new();
        for &(words, pos) in &[
            (DETERMINERS, PartOfSpeech::Determiner),
            (PRONOUNS, PartOfSpeech::Pronoun),
            (PREPOSITIONS, PartOfSpeech::Preposition),
            (CONJUNCTIONS, PartOfSpeech::Conjunction),
            (COMMON_ADVERBS, PartOfSpeech::Adverb),
            (COMMON_VERB_FORMS, PartOfSpeech::Verb),
        ] {
            for &word in words {
                // First table wins: "en" stays a preposition even though it
                // also appears in the pronoun table.
                closed_class.entry(word).or_insert(pos);
            }
        }

        let mut stop_words: HashSet<&'static str> = HashSet::new();
        for words in [
            DETERMINERS,
            PRONOUNS,
            PREPOSITIONS,
            CONJUNCTIONS,
            COMMON_ADVERBS,
            COMMON_VERB_FORMS,
            EXTRA_STOP_WORDS,
        ] {
            stop_words.extend(words.iter().copied());
        }

        Self {
            stop_words,
            closed_class,
            elision_lemmas: ELISION_LEMMAS.iter().copied().collect(),
        }
    }

    // -----------------------------------------------------------------------
    // Tokenization
    // -----------------------------------------------------------------------

    fn tokenize(&self, text: &str) -> Vec<Token> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            let c = chars[pos];
            match get_char_type(c) {
                CharType::Whitespace => {
                    pos += 1;
                }
                CharType::Letter => {
                    let len = word_length(&chars[pos..]);
                    let surface: String = chars[pos..pos + len].iter().collect();
                    tokens.push(self.word_token(&surface));
                    pos += len;
                }
                CharType::Digit => {
                    let len = number_length(&chars[pos..]);
                    let surface: String = chars[pos..pos + len].iter().collect();
                    tokens.push(Token::number(surface));
                    pos += len;
                }
                CharType::Punctuation | CharType::Unknown => {
                    tokens.push(Token::punctuation(c.to_string()));
                    pos += 1;
                }
            }
        }

        tokens
    }

    fn word_token(&self, surface: &str) -> Token {
        // Typographic apostrophes normalize to ASCII so elided forms match
        // the word tables however the text was typed.
        let lower = surface.to_lowercase().replace('\u{2019}', "'");
        let pos = self.tag(&lower);
        let lemma = self.lemmatize(&lower);
        let is_stop = self.stop_words.contains(lower.as_str());
        Token::word(surface, lemma, pos, is_stop)
    }

    // -----------------------------------------------------------------------
    // Part-of-speech tagging
    // -----------------------------------------------------------------------

    fn tag(&self, lower: &str) -> PartOfSpeech {
        if let Some(&pos) = self.closed_class.get(lower) {
            return pos;
        }

        let len = lower.chars().count();
        if len >= MIN_ADVERB_SUFFIX_LEN && lower.ends_with("ment") {
            return PartOfSpeech::Adverb;
        }
        if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return PartOfSpeech::Noun;
        }
        if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return PartOfSpeech::Adjective;
        }
        if len >= MIN_VERB_SUFFIX_LEN && VERB_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return PartOfSpeech::Verb;
        }

        // Unknown alphabetic tokens default to the majority class.
        PartOfSpeech::Noun
    }

    // -----------------------------------------------------------------------
    // Lemmatization
    // -----------------------------------------------------------------------

    fn lemmatize(&self, lower: &str) -> String {
        if let Some(&lemma) = self.elision_lemmas.get(lower) {
            return lemma.to_string();
        }

        let chars: Vec<char> = lower.chars().collect();
        let len = chars.len();
        if len >= 4 {
            // Plural in -aux / -eux / -oux: drop the x.
            if chars[len - 1] == 'x' {
                let stem_vowels = (chars[len - 3], chars[len - 2]);
                if matches!(stem_vowels, ('a', 'u') | ('e', 'u') | ('o', 'u')) {
                    return chars[..len - 1].iter().collect();
                }
            }
            // Regular plural in -s, avoiding lexical finals like "-ss" or "-us".
            if chars[len - 1] == 's' && chars[len - 2] != 's' && chars[len - 2] != 'u' {
                return chars[..len - 1].iter().collect();
            }
        }
        lower.to_string()
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Result<AnalyzedText, AnalyzerError> {
        let tokens = self.tokenize(text);
        let sentences = detect_sentences(&tokens);
        Ok(AnalyzedText { tokens, sentences })
    }
}

// ---------------------------------------------------------------------------
// Scanning helpers
// ---------------------------------------------------------------------------

/// Length of the word starting at the beginning of `text`.
///
/// A word is a letter run. An apostrophe after at least one letter ends the
/// word and is included in it when a letter follows (elision); a hyphen
/// between letters continues the word (compounds like "porte-monnaie").
fn word_length(text: &[char]) -> usize {
    let mut len = 0;
    while len < text.len() {
        let c = text[len];
        match get_char_type(c) {
            CharType::Letter => len += 1,
            CharType::Punctuation => {
                if is_apostrophe(c) && len > 0 {
                    if len + 1 < text.len() && get_char_type(text[len + 1]) == CharType::Letter {
                        return len + 1;
                    }
                    return len;
                }
                if c == '-'
                    && len > 0
                    && len + 1 < text.len()
                    && get_char_type(text[len + 1]) == CharType::Letter
                {
                    len += 1;
                    continue;
                }
                return len;
            }
            _ => return len,
        }
    }
    len
}

/// Length of the number starting at the beginning of `text`. Includes
/// separators between digits ("3,14", "1.000").
fn number_length(text: &[char]) -> usize {
    let mut len = 0;
    while len < text.len() {
        let c = text[len];
        if get_char_type(c) == CharType::Digit {
            len += 1;
        } else if (c == ',' || c == '.')
            && len + 1 < text.len()
            && get_char_type(text[len + 1]) == CharType::Digit
        {
            len += 1;
        } else {
            break;
        }
    }
    len
}

/// Detect sentence spans over the token sequence.
///
/// A sentence closes at the end of a run of terminator punctuation
/// (". ", "?!", "..."). A trailing unterminated span counts as a sentence
/// when it contains at least one non-punctuation token; a trailing span of
/// pure punctuation attaches to the previous sentence.
fn detect_sentences(tokens: &[Token]) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < tokens.len() {
        let tok = &tokens[i];
        let is_terminator =
            tok.is_punct && tok.text.chars().all(is_sentence_terminator) && !tok.text.is_empty();
        if is_terminator {
            // Swallow the whole terminator run.
            let mut end = i + 1;
            while end < tokens.len() {
                let next = &tokens[end];
                let next_term = next.is_punct
                    && next.text.chars().all(is_sentence_terminator)
                    && !next.text.is_empty();
                if !next_term {
                    break;
                }
                end += 1;
            }
            sentences.push(Sentence::new(start, end - start));
            start = end;
            i = end;
        } else {
            i += 1;
        }
    }

    if start < tokens.len() {
        let trailing_has_words = tokens[start..].iter().any(|t| !t.is_punct && !t.is_space);
        if trailing_has_words {
            sentences.push(Sentence::new(start, tokens.len() - start));
        } else if let Some(last) = sentences.last_mut() {
            last.len += tokens.len() - start;
        }
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> AnalyzedText {
        LexiconAnalyzer::new().analyze(text).unwrap()
    }

    fn texts(doc: &AnalyzedText) -> Vec<&str> {
        doc.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn tokenizes_simple_sentence() {
        let doc = analyze("Le chat dort.");
        assert_eq!(texts(&doc), ["Le", "chat", "dort", "."]);
    }

    #[test]
    fn splits_elision_after_apostrophe() {
        let doc = analyze("c'est bon");
        assert_eq!(texts(&doc), ["c'", "est", "bon"]);
        assert_eq!(doc.tokens[0].lemma, "ce");
        assert!(doc.tokens[0].is_stop);
    }

    #[test]
    fn typographic_apostrophe_elision() {
        let doc = analyze("l\u{2019}ann\u{00E9}e");
        assert_eq!(doc.tokens.len(), 2);
        assert_eq!(doc.tokens[1].text, "ann\u{00E9}e");
    }

    #[test]
    fn keeps_hyphenated_compound_together() {
        let doc = analyze("un porte-monnaie");
        assert_eq!(texts(&doc), ["un", "porte-monnaie"]);
    }

    #[test]
    fn numbers_are_single_tokens() {
        let doc = analyze("il y a 3,14 raisons");
        assert!(doc.tokens.iter().any(|t| t.text == "3,14"));
    }

    #[test]
    fn empty_text_yields_empty_analysis() {
        let doc = analyze("");
        assert!(doc.is_empty());
        assert_eq!(doc.sentence_count(), 0);
    }

    #[test]
    fn whitespace_only_yields_empty_analysis() {
        let doc = analyze("   \n\t  ");
        assert!(doc.is_empty());
    }

    // -- Sentence detection --

    #[test]
    fn counts_sentences() {
        let doc = analyze("Il fait beau. Tr\u{00E8}s beau. Vraiment.");
        assert_eq!(doc.sentence_count(), 3);
    }

    #[test]
    fn unterminated_sentence_counts() {
        let doc = analyze("Bonjour tout le monde");
        assert_eq!(doc.sentence_count(), 1);
    }

    #[test]
    fn terminator_run_is_one_boundary() {
        let doc = analyze("Quoi ?! Vraiment...");
        assert_eq!(doc.sentence_count(), 2);
    }

    #[test]
    fn sentence_spans_cover_all_tokens() {
        let doc = analyze("Un. Deux. Trois");
        let covered: usize = doc.sentences.iter().map(|s| s.len).sum();
        assert_eq!(covered, doc.tokens.len());
    }

    // -- POS tagging --

    #[test]
    fn closed_class_tags() {
        let doc = analyze("je parle avec les gens et eux");
        assert_eq!(doc.tokens[0].pos, PartOfSpeech::Pronoun);
        assert_eq!(doc.tokens[2].pos, PartOfSpeech::Preposition);
        assert_eq!(doc.tokens[3].pos, PartOfSpeech::Determiner);
        assert_eq!(doc.tokens[5].pos, PartOfSpeech::Conjunction);
    }

    #[test]
    fn suffix_tags() {
        let analyzer = LexiconAnalyzer::new();
        assert_eq!(analyzer.tag("captivant"), PartOfSpeech::Adjective);
        assert_eq!(analyzer.tag("rapidement"), PartOfSpeech::Adverb);
        assert_eq!(analyzer.tag("accomplir"), PartOfSpeech::Verb);
        assert_eq!(analyzer.tag("formation"), PartOfSpeech::Noun);
        assert_eq!(analyzer.tag("difficult\u{00E9}"), PartOfSpeech::Noun);
    }

    #[test]
    fn unknown_word_defaults_to_noun() {
        let analyzer = LexiconAnalyzer::new();
        assert_eq!(analyzer.tag("truc"), PartOfSpeech::Noun);
    }

    // -- Stop words and lemmas --

    #[test]
    fn stop_word_flags() {
        let doc = analyze("le chat est tr\u{00E8}s joli");
        let stops: Vec<bool> = doc.tokens.iter().map(|t| t.is_stop).collect();
        assert_eq!(stops, [true, false, true, true, false]);
    }

    #[test]
    fn plural_lemmas() {
        let analyzer = LexiconAnalyzer::new();
        assert_eq!(analyzer.lemmatize("probl\u{00E8}mes"), "probl\u{00E8}me");
        assert_eq!(analyzer.lemmatize("chevaux"), "chevau");
        assert_eq!(analyzer.lemmatize("pas"), "pas");
        assert_eq!(analyzer.lemmatize("classe"), "classe");
    }
}
