//! End-to-end pipeline tests over a real shard directory.
//!
//! Each test gets its own temporary vocabulary directory; the store, the
//! baseline analyzer and the handle run exactly as the CLI drives them.

use eloquence_fr::handle::EloquenceHandle;
use eloquence_fr::seed::seed_store;
use eloquence_fr::store::{CsvShardStore, VocabularyStore};

const TEXT: &str = "Alors voilà, c'est un truc que je trouve bon, vraiment bon, très bon. \
                    En fait ce truc me semble utile et en fait je le garde.";

#[test]
fn seeded_store_detects_overused_words_and_phrases() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvShardStore::new(dir.path());
    assert_eq!(seed_store(&store).unwrap(), 30);

    let handle = EloquenceHandle::open(dir.path());
    let result = handle.analyze(TEXT).unwrap();

    let originals: Vec<&str> = result
        .improvements
        .iter()
        .map(|c| c.original.as_str())
        .collect();
    // "truc" (2x) and "bon" (3x) are repeated known words, in text order;
    // "en fait" (2x) is a repeated known bigram and comes after the words.
    assert_eq!(originals, ["truc", "bon", "en fait"]);

    let bon = &result.improvements[1];
    assert_eq!(bon.suggestion, "excellent");
    assert_eq!(bon.reason, "Plus précis et expressif");
}

#[test]
fn statistics_come_from_the_same_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let handle = EloquenceHandle::open(dir.path());
    let result = handle.analyze("Le chat dort. Le chien aboie.").unwrap();

    assert_eq!(result.statistics.word_count, 6);
    assert_eq!(result.statistics.sentence_count, 2);
    assert!(result.statistics.avg_word_length > 0.0);
}

#[test]
fn enrichment_persists_only_net_new_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvShardStore::new(dir.path());
    seed_store(&store).unwrap();

    let handle = EloquenceHandle::open(dir.path());

    // Candidates sourced from lower-cased seed rows reproduce existing
    // pairs exactly, so the first run writes nothing new.
    let report = handle.run(TEXT).unwrap();
    assert_eq!(report.new_entries, 0);

    // A capitalized store row makes the detected lower-cased pair novel.
    store
        .append(&[eloquence_core::SubstitutionEntry::new(
            "Machin",
            "dispositif",
            "Terme plus précis",
            eloquence_core::enums::Category::Nom,
            eloquence_core::enums::Register::Courant,
        )])
        .unwrap();

    let report = handle.run("ce machin et encore ce machin").unwrap();
    assert_eq!(report.new_entries, 1);

    let vocab = store.load().unwrap();
    assert!(vocab.contains_pair("machin", "dispositif"));

    // Idempotence: the same text against the same store adds nothing more.
    let report = handle.run("ce machin et encore ce machin").unwrap();
    assert_eq!(report.new_entries, 0);
}

#[test]
fn output_document_has_the_wire_shape() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvShardStore::new(dir.path());
    seed_store(&store).unwrap();

    let handle = EloquenceHandle::open(dir.path());
    let result = handle.analyze("c'est bon, vraiment bon, très bon").unwrap();
    let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();

    let improvements = json["improvements"].as_array().unwrap();
    assert_eq!(improvements.len(), 1);
    assert_eq!(improvements[0]["original"], "bon");
    assert_eq!(improvements[0]["suggestion"], "excellent");
    assert!(improvements[0]["raison"].is_string());

    let stats = &json["statistics"];
    for key in ["word_count", "sentence_count", "unique_words", "avg_word_length"] {
        assert!(stats.get(key).is_some(), "{key}");
    }
}

#[test]
fn fresh_directory_analyzes_with_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let handle = EloquenceHandle::open(dir.path().join("vocabulaire"));
    let report = handle.run("bon bon bon bon").unwrap();
    // Repeated but unknown: no candidates, nothing persisted.
    assert!(report.result.improvements.is_empty());
    assert_eq!(report.new_entries, 0);
    assert!(!dir.path().join("vocabulaire").exists());
}
