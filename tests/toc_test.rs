//! Table-of-contents construction tests.
//!
//! Covers page-range bounds, nesting, degradation on malformed outlines, and
//! tree well-formedness over arbitrary outlines.

use folio::{OutlineEntry, Section, SectionId, TocBuilder, build_toc_tree};
use proptest::prelude::*;

fn outline(items: &[(u32, &str, usize)]) -> Vec<OutlineEntry> {
    items
        .iter()
        .map(|&(level, title, page)| OutlineEntry::new(level, title, page))
        .collect()
}

fn find<'a>(root: &'a Section, title: &str) -> &'a Section {
    root.iter()
        .map(|(_, _, section)| section)
        .find(|section| section.title == title)
        .unwrap_or_else(|| panic!("no section titled {title}"))
}

fn range(section: &Section) -> (usize, usize) {
    (section.pager.first(), section.pager.last())
}

// ============================================================================
// Page Range Tests
// ============================================================================

#[test]
fn test_sibling_bounds() {
    let root = build_toc_tree(
        &outline(&[(1, "A", 1), (1, "B", 10), (1, "C", 20)]),
        "Book",
        30,
    );

    assert_eq!(range(find(&root, "A")), (0, 7));
    assert_eq!(range(find(&root, "B")), (9, 17));
    assert_eq!(range(find(&root, "C")), (19, 29));
}

#[test]
fn test_current_page_starts_at_first() {
    let root = build_toc_tree(&outline(&[(1, "A", 1), (1, "B", 10)]), "Book", 30);
    for (_, _, section) in root.iter() {
        assert_eq!(section.pager.current(), section.pager.first());
    }
}

#[test]
fn test_root_spans_document() {
    let root = build_toc_tree(&outline(&[(1, "A", 3)]), "Book", 42);
    assert_eq!(root.title, "Book");
    assert_eq!(range(&root), (0, 41));
}

// ============================================================================
// Nesting Tests
// ============================================================================

#[test]
fn test_nesting() {
    let root = build_toc_tree(
        &outline(&[(1, "A", 1), (2, "A.1", 2), (1, "B", 5)]),
        "Book",
        10,
    );

    let a = find(&root, "A");
    assert_eq!(a.children().len(), 1);
    assert_eq!(a.children()[0].title, "A.1");
    assert_eq!(root.children().len(), 2);
}

#[test]
fn test_fifty_page_scenario() {
    let root = TocBuilder::new("Guide", 50)
        .entry(1, "Intro", 1)
        .entry(1, "Ch1", 3)
        .entry(2, "Ch1.1", 5)
        .entry(1, "Ch2", 12)
        .finish();

    assert_eq!(root.children().len(), 3);
    let ch1 = find(&root, "Ch1");
    assert_eq!(ch1.children().len(), 1);
    assert_eq!(ch1.children()[0].title, "Ch1.1");
    assert_eq!(range(ch1), (2, 10));
    assert_eq!(range(find(&root, "Ch1.1")), (4, 10));
    assert_eq!(range(find(&root, "Ch2")), (11, 49));
}

#[test]
fn test_section_lookup_by_page() {
    let root = TocBuilder::new("Guide", 50)
        .entry(1, "Intro", 1)
        .entry(1, "Ch1", 3)
        .entry(2, "Ch1.1", 5)
        .entry(1, "Ch2", 12)
        .finish();

    let title_at = |page| root.get(root.section_at_page(page).unwrap()).unwrap().title.clone();
    assert_eq!(title_at(0), "Intro");
    assert_eq!(title_at(3), "Ch1");
    assert_eq!(title_at(7), "Ch1.1");
    assert_eq!(title_at(49), "Ch2");
    assert!(root.section_at_page(50).is_err());
}

// ============================================================================
// Malformed Outline Tests
// ============================================================================

#[test]
fn test_empty_outline() {
    let root = build_toc_tree::<()>(&[], "Book", 5);
    assert!(root.is_leaf());
    assert_eq!(root.len(), 1);
    assert_eq!(root.section_at_page(3).unwrap(), SectionId::ROOT);
}

#[test]
fn test_level_gap_does_not_panic() {
    let root = build_toc_tree(
        &outline(&[(1, "A", 1), (3, "A.x.1", 2), (4, "A.x.1.a", 3), (1, "B", 6)]),
        "Book",
        10,
    );
    let a = find(&root, "A");
    assert_eq!(a.children()[0].title, "A.x.1");
    assert_eq!(a.children()[0].children()[0].title, "A.x.1.a");
}

#[test]
fn test_outline_starting_deep() {
    let root = build_toc_tree(&outline(&[(3, "Deep", 1), (2, "Mid", 4)]), "Book", 10);
    let titles: Vec<_> = root.children().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Deep", "Mid"]);
}

// ============================================================================
// Property Tests
// ============================================================================

fn check_well_formed(section: &Section) {
    assert!(section.pager.first() <= section.pager.last());
    for child in section.children() {
        assert!(
            section.pager.encloses(&child.pager),
            "{:?} {:?} escapes parent {:?} {:?}",
            child.title,
            range(child),
            section.title,
            range(section)
        );
        check_well_formed(child);
    }
}

proptest! {
    #[test]
    fn prop_tree_is_well_formed(
        entries in prop::collection::vec((0u32..6, 0usize..80), 0..40),
        total_pages in 0usize..64,
    ) {
        let outline: Vec<_> = entries
            .iter()
            .enumerate()
            .map(|(i, &(level, page))| OutlineEntry::new(level, format!("entry {i}"), page))
            .collect();
        let root = build_toc_tree(&outline, "Book", total_pages);

        check_well_formed(&root);
        prop_assert_eq!(root.len(), outline.len() + 1);
    }

    #[test]
    fn prop_flat_outline_ranges_partition(
        mut starts in prop::collection::vec(1usize..100, 1..20),
    ) {
        starts.sort_unstable();
        starts.dedup();
        let outline: Vec<_> = starts
            .iter()
            .map(|&page| OutlineEntry::new(1, format!("p{page}"), page))
            .collect();
        let root = build_toc_tree(&outline, "Book", 100);

        let sections = root.children();
        prop_assert_eq!(sections.len(), starts.len());
        for pair in sections.windows(2) {
            prop_assert_eq!(pair[0].pager.last() + 1, pair[1].pager.first());
        }
        prop_assert_eq!(sections[sections.len() - 1].pager.last(), 99);
    }
}
