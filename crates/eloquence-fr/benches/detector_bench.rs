// Criterion benchmarks for the analysis hot path.
//
// Run:
//   cargo bench -p eloquence-fr

use criterion::{criterion_group, criterion_main, Criterion};

use eloquence_fr::analyzer::{Analyzer, LexiconAnalyzer};
use eloquence_fr::detector;
use eloquence_fr::seed::seed_entries;
use eloquence_fr::statistics;
use eloquence_fr::store::Vocabulary;

/// Build a transcription-sized text by cycling a few spoken-style sentences.
fn sample_text(sentences: usize) -> String {
    let base = [
        "Alors en fait je trouve que c'est un truc vraiment bon.",
        "Il y a beaucoup de choses à dire sur ce problème.",
        "Donc voilà, on va faire le point et mettre tout en place.",
        "C'est une bonne chose, vraiment, je trouve ça très bien.",
    ];
    let mut text = String::new();
    for i in 0..sentences {
        text.push_str(base[i % base.len()]);
        text.push(' ');
    }
    text
}

fn bench_analyze(c: &mut Criterion) {
    let analyzer = LexiconAnalyzer::new();
    let text = sample_text(200);

    c.bench_function("analyze_200_sentences", |b| {
        b.iter(|| analyzer.analyze(&text).unwrap())
    });
}

fn bench_detect(c: &mut Criterion) {
    let analyzer = LexiconAnalyzer::new();
    let vocabulary = Vocabulary::from_entries(seed_entries());
    let doc = analyzer.analyze(&sample_text(200)).unwrap();

    c.bench_function("detect_200_sentences", |b| {
        b.iter(|| detector::detect(&doc, &vocabulary))
    });
}

fn bench_summarize(c: &mut Criterion) {
    let analyzer = LexiconAnalyzer::new();
    let doc = analyzer.analyze(&sample_text(200)).unwrap();

    c.bench_function("summarize_200_sentences", |b| {
        b.iter(|| statistics::summarize(&doc))
    });
}

criterion_group!(benches, bench_analyze, bench_detect, bench_summarize);
criterion_main!(benches);
