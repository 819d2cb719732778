//! Benchmarks for evidence_core extraction

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evidence_core::document::{DocumentId, SourceDocument, SourceInfo};
use evidence_core::extraction::{ContextExtractor, DatePattern, ExtractionConfig, LcsRatio, SimilarityMeasure};

/// A page with `notices` admission notices separated by boilerplate.
fn generate_page(notices: usize) -> String {
    (0..notices)
        .map(|i| {
            format!(
                "Notice {i}: applications close on {:02}.{:02}.2025 and the merit list is out by {} May 2025.\n{}",
                (i % 28) + 1,
                (i % 12) + 1,
                (i % 28) + 1,
                vec!["general instructions for candidates"; 30].join(" ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let extractor = ContextExtractor::new(ExtractionConfig::default()).unwrap();
    let pattern = DatePattern::admission_default();

    for notices in [10, 100, 500] {
        let page = generate_page(notices);
        group.bench_with_input(BenchmarkId::new("notices", notices), &page, |b, page| {
            b.iter(|| extractor.extract(black_box(page), &pattern))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let extractor = ContextExtractor::new(ExtractionConfig::default()).unwrap();
    let pattern = DatePattern::admission_default();
    let documents: Vec<SourceDocument> = (0..64)
        .map(|i| {
            SourceDocument::ingest(
                DocumentId::new(format!("doc-{i}")),
                generate_page(20).into_bytes(),
                SourceInfo::default(),
            )
            .unwrap()
        })
        .collect();

    c.bench_function("batch_64x20", |b| {
        b.iter(|| extractor.extract_batch(black_box(&documents), &pattern))
    });
}

fn bench_similarity(c: &mut Criterion) {
    let page = generate_page(2);
    let (a, b) = page.split_at(page.len() / 2);
    c.bench_function("lcs_ratio_half_pages", |bench| {
        bench.iter(|| LcsRatio.ratio(black_box(a), black_box(b)))
    });
}

criterion_group!(benches, bench_extract, bench_batch, bench_similarity);
criterion_main!(benches);
