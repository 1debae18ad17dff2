// Shared enums: PartOfSpeech, Category, Register

use std::fmt;

/// Part-of-speech tags produced by the language analyzer.
///
/// This is the coarse tag set consumed by the enrichment engine; analyzers
/// with richer tag sets map down to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// Noun.
    Noun,
    /// Verb (any finite or non-finite form).
    Verb,
    /// Adjective.
    Adjective,
    /// Adverb.
    Adverb,
    /// Pronoun, including elided clitics ("c'", "j'", ...).
    Pronoun,
    /// Determiner or article.
    Determiner,
    /// Preposition.
    Preposition,
    /// Conjunction (coordinating or subordinating).
    Conjunction,
    /// Interjection.
    Interjection,
    /// Numeric token.
    Number,
    /// Punctuation token.
    Punctuation,
    /// Anything the analyzer could not classify.
    Other,
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Grammatical category of a vocabulary entry.
///
/// Closed set; the wire values (CSV `categorie` column) are the French
/// names returned by [`Category::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Adjectif,
    Adverbe,
    Connecteur,
    Expression,
    Nom,
    Verbe,
    /// Fallback bucket for single tokens the analyzer cannot classify.
    Autre,
}

impl Category {
    /// All categories, in canonical order.
    pub const ALL: [Category; 7] = [
        Category::Adjectif,
        Category::Adverbe,
        Category::Connecteur,
        Category::Expression,
        Category::Nom,
        Category::Verbe,
        Category::Autre,
    ];

    /// The wire name of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Adjectif => "adjectif",
            Category::Adverbe => "adverbe",
            Category::Connecteur => "connecteur",
            Category::Expression => "expression",
            Category::Nom => "nom",
            Category::Verbe => "verbe",
            Category::Autre => "autre",
        }
    }

    /// Parse a wire name. Returns `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<Category> {
        match s {
            "adjectif" => Some(Category::Adjectif),
            "adverbe" => Some(Category::Adverbe),
            "connecteur" => Some(Category::Connecteur),
            "expression" => Some(Category::Expression),
            "nom" => Some(Category::Nom),
            "verbe" => Some(Category::Verbe),
            "autre" => Some(Category::Autre),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Register
// ---------------------------------------------------------------------------

/// Formality register of a vocabulary entry.
///
/// Ordered `Familier < Courant < Soutenu`. The ordering is metadata only:
/// nothing in the pipeline ranks entries by register, but the relation is
/// part of the data model and kept comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Register {
    Familier,
    Courant,
    Soutenu,
}

impl Register {
    /// The wire name of this register (CSV `niveau` column).
    pub fn as_str(self) -> &'static str {
        match self {
            Register::Familier => "familier",
            Register::Courant => "courant",
            Register::Soutenu => "soutenu",
        }
    }

    /// Parse a wire name. Returns `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<Register> {
        match s {
            "familier" => Some(Register::Familier),
            "courant" => Some(Register::Courant),
            "soutenu" => Some(Register::Soutenu),
            _ => None,
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
