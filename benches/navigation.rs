//! Benchmarks for TOC construction and structural navigation.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use folio::navigation::{Direction, ElementKind, SemanticElement, SemanticElements};
use folio::{NavigationSession, OutlineEntry, build_toc_tree};

/// A three-level outline with `chapters` chapters, each holding sections and
/// subsections, spread over a 2000 page document.
fn sample_outline(chapters: usize) -> Vec<OutlineEntry> {
    let mut outline = Vec::new();
    let mut page = 1;
    for c in 0..chapters {
        outline.push(OutlineEntry::new(1, format!("Chapter {c}"), page));
        for s in 0..4 {
            page += 2;
            outline.push(OutlineEntry::new(2, format!("Section {c}.{s}"), page));
            for sub in 0..3 {
                page += 1;
                outline.push(OutlineEntry::new(3, format!("Part {c}.{s}.{sub}"), page));
            }
        }
        page += 1;
    }
    outline
}

/// One element every 40 characters, cycling through kinds.
fn sample_elements(count: usize) -> SemanticElements {
    const KINDS: [ElementKind; 4] = [
        ElementKind::Heading2,
        ElementKind::Link,
        ElementKind::Link,
        ElementKind::Table,
    ];
    (0..count)
        .map(|i| SemanticElement::new(KINDS[i % KINDS.len()], i * 40, i * 40 + 25))
        .collect()
}

// ============================================================================
// TOC Benchmarks
// ============================================================================

fn bench_build_toc(c: &mut Criterion) {
    let outline = sample_outline(40);
    c.bench_function("build_toc_tree_680_entries", |b| {
        b.iter(|| build_toc_tree(&outline, "Benchmark", 2000));
    });
}

fn bench_section_at_page(c: &mut Criterion) {
    let root = build_toc_tree(&sample_outline(40), "Benchmark", 2000);
    c.bench_function("section_at_page", |b| {
        b.iter(|| {
            for page in (0..2000).step_by(97) {
                let _ = root.section_at_page(page);
            }
        });
    });
}

// ============================================================================
// Navigation Benchmarks
// ============================================================================

fn bench_next_heading_walk(c: &mut Criterion) {
    let elements = sample_elements(5000);
    c.bench_function("next_heading_walk_5000", |b| {
        b.iter(|| {
            let mut session = NavigationSession::new();
            let mut from = 0;
            while let Some(hit) =
                session.locate(&elements, ElementKind::Heading, Direction::Forward, from)
            {
                from = hit.range.start;
            }
        });
    });
}

fn bench_previous_link(c: &mut Criterion) {
    let elements = sample_elements(5000);
    c.bench_function("previous_link_from_end", |b| {
        b.iter(|| elements.locate(ElementKind::Link, Direction::Backward, 200_000));
    });
}

criterion_group!(
    benches,
    bench_build_toc,
    bench_section_at_page,
    bench_next_heading_walk,
    bench_previous_link
);
criterion_main!(benches);
