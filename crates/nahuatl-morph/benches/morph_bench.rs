// Criterion benchmarks for nahuatl-morph.
//
// Run:
//   cargo bench -p nahuatl-morph
//   cargo bench -p nahuatl-morph --features parallel

use criterion::{Criterion, criterion_group, criterion_main};
use nahuatl_morph::{Lexicon, Morphology, TokenizeConfig};

const WORDS: &[&str] = &[
    "nikochi", "nikkwa", "nokal", "kalli", "tepeL", "axnimowalitta", "tiwetzitoj", "kochises",
    "nikochiltiaj", "tinokaLi", "kalzin", "nokalwan", "nokalwazin", "inkikal", "kiiwa",
    "tiwetzij", "xiwetzi", "mayanowa", "wetzike", "kinitta", "nomil", "ayozin", "tiwetzis",
    "ewa", "niittasewa",
];

fn lexicon() -> Lexicon {
    Lexicon::new()
        .with_basic(["wan", "ika", "ipan"])
        .with_verbs(["kochi", "itta", "wetzi", "kwa", "chiwa"])
        .with_nouns(["kal", "tepe", "ayo", "mil"])
}

/// A text of a few hundred tokens built by cycling through `WORDS`.
fn sample_text() -> String {
    WORDS
        .iter()
        .cycle()
        .take(400)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_inventory(c: &mut Criterion) {
    c.bench_function("compile_inventory", |b| {
        b.iter(|| std::hint::black_box(Morphology::new().expect("inventory")));
    });
}

fn bench_segment_words(c: &mut Criterion) {
    let morphology = Morphology::new().expect("inventory");
    c.bench_function("segment_verb_and_noun", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(morphology.segment_verb(word));
                std::hint::black_box(morphology.segment_noun(word));
            }
        });
    });
}

fn bench_classify_words(c: &mut Criterion) {
    let morphology = Morphology::new().expect("inventory");
    let lexicon = lexicon();
    c.bench_function("classify_words", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(morphology.classify(word, &lexicon));
            }
        });
    });
}

fn bench_tokenize(c: &mut Criterion) {
    let morphology = Morphology::new().expect("inventory");
    let text = sample_text();
    let plain = TokenizeConfig::new().with_lexicon(lexicon());
    let compounds = plain
        .clone()
        .with_noun_compound_check(true)
        .with_verb_compound_check(true)
        .with_orthography_name("modern");

    let mut group = c.benchmark_group("tokenize_text");
    group.bench_function("plain", |b| {
        b.iter(|| std::hint::black_box(morphology.tokenize_text(&text, &plain)));
    });
    group.bench_function("compounds_and_orthography", |b| {
        b.iter(|| std::hint::black_box(morphology.tokenize_text(&text, &compounds)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_inventory,
    bench_segment_words,
    bench_classify_words,
    bench_tokenize,
);
criterion_main!(benches);
