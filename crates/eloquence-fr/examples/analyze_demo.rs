// Full pipeline demo: seed an in-memory store, analyze a transcription,
// enrich, and print the output document.
use eloquence_fr::handle::EloquenceHandle;
use eloquence_fr::seed::seed_entries;
use eloquence_fr::store::MemoryStore;
use eloquence_fr::LexiconAnalyzer;

fn main() {
    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let text = if text.is_empty() {
        "Alors en fait c'est bon, vraiment bon, très bon. \
         En fait il y a un truc et encore un truc à dire."
            .to_string()
    } else {
        text
    };

    let store = MemoryStore::with_entries(seed_entries());
    let handle = EloquenceHandle::new(LexiconAnalyzer::new(), store);

    let report = handle.run(&text).expect("pipeline failed");
    println!("{}", report.result.to_json().expect("serialization failed"));
    println!();
    println!("new entries: {}", report.new_entries);
    println!("shards in store: {}", handle.store().shard_count());
}
