// Character classification utilities for French text

// ---------------------------------------------------------------------------
// French orthographic constants
// ---------------------------------------------------------------------------

/// French vowels (lowercase, including accented forms).
pub const FRENCH_VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'y', '\u{00E0}', '\u{00E2}', '\u{00E4}', '\u{00E8}', '\u{00E9}',
    '\u{00EA}', '\u{00EB}', '\u{00EE}', '\u{00EF}', '\u{00F4}', '\u{00F6}', '\u{00F9}',
    '\u{00FB}', '\u{00FC}',
];

/// Check whether a character is a French vowel (case-insensitive).
pub fn is_french_vowel(c: char) -> bool {
    let lower = c.to_lowercase().next().unwrap_or(c);
    FRENCH_VOWELS.contains(&lower)
}

/// Check whether a character is an apostrophe as written in French text.
/// Both the ASCII apostrophe and the typographic right single quotation
/// mark (U+2019) mark elision.
pub fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification used by tokenizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
///
/// Letters cover ASCII plus the Latin-1 Supplement and Latin Extended-A
/// ranges, which include every accented letter and ligature used in French
/// (é, è, ê, ç, œ, ...).
pub fn get_char_type(c: char) -> CharType {
    let cp = c as u32;
    if (0x41..=0x5A).contains(&cp)           // A-Z
        || (0x61..=0x7A).contains(&cp)       // a-z
        || (0xC0..=0xD6).contains(&cp)       // À-Ö
        || (0xD8..=0xF6).contains(&cp)       // Ø-ö
        || (0x00F8..=0x017F).contains(&cp)   // ø-ſ (covers œ, Œ, ÿ)
    {
        return CharType::Letter;
    }
    if c.is_whitespace() {
        return CharType::Whitespace;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    if c.is_ascii_digit() {
        return CharType::Digit;
    }
    CharType::Unknown
}

/// Check whether a character is punctuation.
fn is_punctuation_char(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | ';'
            | ':'
            | '!'
            | '?'
            | '-'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '/'
            | '\u{2026}' // …
            | '\u{2013}' // –
            | '\u{2014}' // —
            | '\u{00AB}' // «
            | '\u{00BB}' // »
            | '"'
            | '\u{201C}' // “
            | '\u{201D}' // ”
    ) || is_apostrophe(c)
}

/// Check whether a character terminates a sentence.
pub fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\u{2026}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters() {
        assert_eq!(get_char_type('a'), CharType::Letter);
        assert_eq!(get_char_type('Z'), CharType::Letter);
    }

    #[test]
    fn accented_letters() {
        for c in ['\u{00E9}', '\u{00E8}', '\u{00E7}', '\u{00EA}', '\u{0153}', '\u{00FF}'] {
            assert_eq!(get_char_type(c), CharType::Letter, "{c:?}");
        }
    }

    #[test]
    fn digits_and_whitespace() {
        assert_eq!(get_char_type('7'), CharType::Digit);
        assert_eq!(get_char_type(' '), CharType::Whitespace);
        assert_eq!(get_char_type('\n'), CharType::Whitespace);
        assert_eq!(get_char_type('\t'), CharType::Whitespace);
    }

    #[test]
    fn punctuation() {
        for c in ['.', ',', '!', '?', '\u{2026}', '\u{00AB}', '\u{00BB}', '\''] {
            assert_eq!(get_char_type(c), CharType::Punctuation, "{c:?}");
        }
    }

    #[test]
    fn multiplication_sign_is_unknown() {
        assert_eq!(get_char_type('\u{00D7}'), CharType::Unknown);
    }

    #[test]
    fn apostrophe_variants() {
        assert!(is_apostrophe('\''));
        assert!(is_apostrophe('\u{2019}'));
        assert!(!is_apostrophe('`'));
    }

    #[test]
    fn sentence_terminators() {
        assert!(is_sentence_terminator('.'));
        assert!(is_sentence_terminator('!'));
        assert!(is_sentence_terminator('?'));
        assert!(is_sentence_terminator('\u{2026}'));
        assert!(!is_sentence_terminator(','));
    }

    #[test]
    fn vowels() {
        assert!(is_french_vowel('a'));
        assert!(is_french_vowel('\u{00E9}'));
        assert!(is_french_vowel('E'));
        assert!(!is_french_vowel('b'));
    }
}
