use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use docsift::core::config::IndexConfig;
use docsift::core::types::{DocId, Document};
use docsift::index::builder::IndexBuilder;
use docsift::index::search_index::SearchIndex;
use docsift::query::resolver::QueryResolver;
use docsift::query::types::QueryMode;

const VOCABULARY: &[&str] = &[
    "setup", "install", "configure", "deploy", "administration", "project",
    "product", "subscription", "credential", "architecture", "troubleshoot",
    "bootstrap", "description", "management", "authoring", "question",
];

// Helper to generate a synthetic documentation corpus
fn generate_corpus(doc_count: usize, body_words: usize) -> Vec<Document> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..doc_count)
        .map(|i| {
            let mut doc = Document::new(DocId(i as u64));
            let title: Vec<&str> = (0..3)
                .map(|_| VOCABULARY[rng.gen_range(0..VOCABULARY.len())])
                .collect();
            let body: Vec<&str> = (0..body_words)
                .map(|_| VOCABULARY[rng.gen_range(0..VOCABULARY.len())])
                .collect();
            doc.add_field("title", &title.join(" "));
            doc.add_field("body", &body.join(" "));
            doc.add_field("breadcrumbs", &format!("Chapter {} » {}", i, title.join(" ")));
            doc
        })
        .collect()
}

fn build_index(docs: &[Document]) -> SearchIndex {
    let mut builder = IndexBuilder::new(IndexConfig::default());
    builder.add_documents(docs).unwrap();
    builder.build()
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for &doc_count in &[100usize, 1000] {
        let docs = generate_corpus(doc_count, 50);
        group.bench_with_input(
            BenchmarkId::new("build", format!("{}_docs", doc_count)),
            &docs,
            |b, docs| {
                b.iter(|| {
                    let index = build_index(docs);
                    black_box(index);
                });
            },
        );
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let docs = generate_corpus(1000, 50);
    let index = build_index(&docs);
    let resolver = QueryResolver::new(&IndexConfig::default());

    let mut group = c.benchmark_group("search");

    group.bench_function("exact_or", |b| {
        b.iter(|| {
            let results = resolver.search(&index, "configure deployment", QueryMode::Or);
            black_box(results);
        });
    });

    group.bench_function("exact_and", |b| {
        b.iter(|| {
            let results = resolver.search(&index, "configure deployment", QueryMode::And);
            black_box(results);
        });
    });

    // Short prefix: widest subtree fan-out the resolver will see.
    group.bench_function("prefix_expand", |b| {
        b.iter(|| {
            let results = resolver.search(&index, "co", QueryMode::Or);
            black_box(results);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_index_build, bench_search);
criterion_main!(benches);
