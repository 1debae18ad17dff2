// Starter vocabulary: curated substitutions for a fresh store
//
// Five entries per category. Written through the normal `append` path so
// seeding an empty directory produces a regular dated shard, and seeding an
// already-seeded store writes nothing new.

use eloquence_core::enums::{Category, Register};
use eloquence_core::SubstitutionEntry;

use crate::store::{StoreError, VocabularyStore};

type SeedRow = (&'static str, &'static str, &'static str, Category, Register);

const SEED_ROWS: &[SeedRow] = &[
    // Adjectifs
    ("bon", "excellent", "Plus précis et expressif", Category::Adjectif, Register::Courant),
    ("mauvais", "déplorable", "Plus formel et descriptif", Category::Adjectif, Register::Courant),
    ("petit", "minuscule", "Plus précis pour une petite taille", Category::Adjectif, Register::Courant),
    ("grand", "imposant", "Plus élégant que simplement 'grand'", Category::Adjectif, Register::Courant),
    ("joli", "ravissant", "Plus recherché que 'joli'", Category::Adjectif, Register::Courant),
    // Adverbes
    ("très", "extrêmement", "Plus soutenu et précis", Category::Adverbe, Register::Soutenu),
    ("beaucoup", "considérablement", "Adverbe plus élégant", Category::Adverbe, Register::Soutenu),
    ("bien", "admirablement", "Expression plus soignée", Category::Adverbe, Register::Courant),
    ("mal", "médiocrement", "Registre plus soutenu", Category::Adverbe, Register::Courant),
    ("vraiment", "effectivement", "Plus formel et précis", Category::Adverbe, Register::Courant),
    // Connecteurs
    ("et", "ainsi que", "Connecteur plus élégant", Category::Connecteur, Register::Courant),
    ("mais", "néanmoins", "Conjonction plus sophistiquée", Category::Connecteur, Register::Soutenu),
    ("donc", "par conséquent", "Plus formel que 'donc'", Category::Connecteur, Register::Courant),
    ("ensuite", "ultérieurement", "Marque mieux la progression", Category::Connecteur, Register::Courant),
    ("parce que", "en raison de", "Explicitation plus précise", Category::Connecteur, Register::Courant),
    // Expressions
    ("il y a", "il existe", "Formulation plus élégante", Category::Expression, Register::Courant),
    ("en fait", "en réalité", "Plus précis et formel", Category::Expression, Register::Courant),
    ("c'est-à-dire", "plus précisément", "Expression plus académique", Category::Expression, Register::Courant),
    ("à peu près", "approximativement", "Plus précis que 'à peu près'", Category::Expression, Register::Courant),
    ("en gros", "globalement", "Registre plus soutenu", Category::Expression, Register::Courant),
    // Noms
    ("chose", "élément", "Terme plus précis", Category::Nom, Register::Courant),
    ("truc", "objet", "Évite le registre familier", Category::Nom, Register::Familier),
    ("personne", "individu", "Terme plus formel", Category::Nom, Register::Courant),
    ("temps", "période", "Plus précis que le mot 'temps'", Category::Nom, Register::Courant),
    ("problème", "difficulté", "Désignation plus précise", Category::Nom, Register::Courant),
    // Verbes
    ("faire", "accomplir", "Verbe plus précis et expressif", Category::Verbe, Register::Courant),
    ("dire", "exprimer", "Plus élégant que 'dire'", Category::Verbe, Register::Courant),
    ("aller", "se rendre", "Formulation plus élégante", Category::Verbe, Register::Courant),
    ("mettre", "installer", "Plus précis que 'mettre'", Category::Verbe, Register::Courant),
    ("voir", "observer", "Verbe plus soutenu", Category::Verbe, Register::Courant),
];

/// The starter vocabulary, in canonical order.
pub fn seed_entries() -> Vec<SubstitutionEntry> {
    SEED_ROWS
        .iter()
        .map(|&(original, improved, reason, category, register)| {
            SubstitutionEntry::new(original, improved, reason, category, register)
        })
        .collect()
}

/// Write the starter vocabulary into `store`, skipping pairs it already
/// holds. Returns the number of rows written.
pub fn seed_store<S: VocabularyStore>(store: &S) -> Result<usize, StoreError> {
    let snapshot = store.load()?;
    let rows: Vec<SubstitutionEntry> = seed_entries()
        .into_iter()
        .filter(|e| !snapshot.contains_pair(&e.original, &e.improved))
        .collect();
    store.append(&rows)?;
    Ok(rows.len())
}
