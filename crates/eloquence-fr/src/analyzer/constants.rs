// Shared French word lists used by the baseline analyzer.
//
// Closed-class words get their part-of-speech from these tables; everything
// else goes through suffix heuristics. The stop-word list is the union of
// the closed classes plus high-frequency adverbs and verb forms that carry
// no lexical signal for vocabulary improvement.

/// Determiners and articles, including the elided article.
pub(crate) const DETERMINERS: &[&str] = &[
    "le", "la", "les", "l'", "un", "une", "des", "du", "au", "aux", "ce", "cet", "cette", "ces",
    "mon", "ma", "mes", "ton", "ta", "tes", "son", "sa", "ses", "notre", "nos", "votre", "vos",
    "leur", "leurs", "quel", "quelle", "quels", "quelles", "chaque", "plusieurs", "quelques",
    "tout", "toute", "tous", "toutes", "aucun", "aucune",
];

/// Pronouns, including elided clitics.
pub(crate) const PRONOUNS: &[&str] = &[
    "je", "tu", "il", "elle", "on", "nous", "vous", "ils", "elles", "me", "te", "se", "moi",
    "toi", "lui", "eux", "soi", "y", "en", "qui", "quoi", "dont", "o\u{00F9}", "celui", "celle",
    "ceux", "celles", "cela", "\u{00E7}a", "ceci", "rien", "chacun", "chacune", "c'", "j'", "m'",
    "t'", "s'",
];

/// Prepositions, including elided forms.
pub(crate) const PREPOSITIONS: &[&str] = &[
    "\u{00E0}", "de", "d'", "dans", "sur", "sous", "vers", "avec", "sans", "chez", "pour", "par",
    "entre", "derri\u{00E8}re", "devant", "avant", "apr\u{00E8}s", "depuis", "pendant", "contre",
    "malgr\u{00E9}", "selon", "jusqu'", "parmi",
];

/// Coordinating and subordinating conjunctions.
pub(crate) const CONJUNCTIONS: &[&str] = &[
    "et", "ou", "mais", "donc", "or", "ni", "car", "que", "qu'", "quand", "lorsque", "puisque",
    "quoique", "si", "comme", "parce",
];

/// High-frequency adverbs tagged directly instead of via suffix rules.
pub(crate) const COMMON_ADVERBS: &[&str] = &[
    "tr\u{00E8}s", "bien", "mal", "vraiment", "beaucoup", "trop", "peu", "assez", "plus",
    "moins", "aussi", "alors", "d\u{00E9}j\u{00E0}", "encore", "toujours", "jamais", "souvent",
    "parfois", "vite", "ici", "l\u{00E0}", "ensuite", "puis", "enfin", "maintenant", "hier",
    "demain", "ne", "n'", "pas", "non", "oui",
];

/// Frequent verb forms (auxiliaries and a few very common lexical verbs)
/// that would otherwise be mis-tagged by the suffix rules.
pub(crate) const COMMON_VERB_FORMS: &[&str] = &[
    "est", "sont", "suis", "es", "sommes", "\u{00EA}tes", "\u{00E9}tait", "\u{00E9}taient",
    "\u{00EA}tre", "\u{00E9}t\u{00E9}", "a", "as", "ai", "avons", "avez", "ont", "avait",
    "avaient", "avoir", "eu", "fait", "faire", "dit", "dire", "va", "vais", "vont", "aller",
    "peut", "peux", "pouvoir", "veut", "veux", "vouloir", "doit", "dois", "devoir", "faut",
    "sait", "savoir", "voit", "voir", "prend", "prendre", "met", "mettre",
];

/// Stop words beyond the closed classes above. The full stop list is the
/// union of every table in this file plus these.
pub(crate) const EXTRA_STOP_WORDS: &[&str] = &[
    "m\u{00EA}me", "autre", "autres", "\u{00E9}tant", "ayant", "cependant", "pourtant",
    "toutefois", "ainsi", "entre", "voici", "voil\u{00E0}",
];

// ---------------------------------------------------------------------------
// Suffix heuristics
// ---------------------------------------------------------------------------

/// Nominal suffixes, checked before the adjectival and verbal ones.
pub(crate) const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ssement", "isme", "ance", "ence", "age", "ure", "t\u{00E9}", "eur", "euse",
];

/// Adjectival suffixes.
pub(crate) const ADJECTIVE_SUFFIXES: &[&str] = &[
    "eux", "ive", "if", "ique", "able", "ible", "ante", "ant", "aine", "ain", "elle", "el",
    "iste", "al", "ale",
];

/// Infinitive endings recognized as verbs.
pub(crate) const VERB_SUFFIXES: &[&str] = &["er", "ir", "oir"];

/// Minimum word length for the `-ment` adverb rule.
pub(crate) const MIN_ADVERB_SUFFIX_LEN: usize = 5;

/// Minimum word length for the infinitive-ending verb rule.
pub(crate) const MIN_VERB_SUFFIX_LEN: usize = 4;
