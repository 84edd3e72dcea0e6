//! Table-of-contents reconstruction from flat outlines.
//!
//! Document formats expose their outline as a flat, ordered list of
//! `(level, title, start_page)` records. This module nests those records into
//! a [`Section`] tree and gives every section a page range that ends just
//! before its next sibling starts.
//!
//! Outlines found in the wild are often irregular: levels skip, pages go
//! backwards, entries point past the end of the document. None of that is an
//! error here. Every irregularity is repaired locally and logged, and the
//! builder always returns a usable tree.

use log::{debug, trace, warn};

use crate::model::{Pager, Section};

/// A heading record supplied by a document adapter.
///
/// `start_page` is 1-based, as outlines usually are. `extra` carries whatever
/// the adapter attaches to the entry (a destination, a link target) and is
/// ignored by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry<E = ()> {
    pub level: u32,
    pub title: String,
    pub start_page: usize,
    pub extra: E,
}

impl OutlineEntry {
    pub fn new(level: u32, title: impl Into<String>, start_page: usize) -> Self {
        Self {
            level,
            title: title.into(),
            start_page,
            extra: (),
        }
    }
}

impl<E> OutlineEntry<E> {
    pub fn with_extra<F>(self, extra: F) -> OutlineEntry<F> {
        OutlineEntry {
            level: self.level,
            title: self.title,
            start_page: self.start_page,
            extra,
        }
    }
}

/// Build a section tree from a flat outline.
///
/// The root spans the whole document (`0..=total_pages - 1`) and is titled
/// `document_title`. An empty outline yields a root without children, and
/// callers fall back to page-by-page navigation.
pub fn build_toc_tree<E>(
    entries: &[OutlineEntry<E>],
    document_title: &str,
    total_pages: usize,
) -> Section {
    let max_page = match total_pages.checked_sub(1) {
        Some(max_page) => max_page,
        None => {
            warn!("document reports zero pages, treating it as a single page");
            0
        }
    };
    let mut root = Section::new(document_title, Pager::new(0, max_page));

    let levels: Vec<u32> = entries
        .iter()
        .map(|entry| {
            if entry.level == 0 {
                warn!("outline entry {:?} has level 0, treating it as level 1", entry.title);
                1
            } else {
                entry.level
            }
        })
        .collect();

    // Sections still open for children, innermost last.
    let mut open: Vec<(u32, Section)> = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let level = levels[index];
        let first = page_index(entry, max_page);
        let last = match next_sibling(&levels, index) {
            Some(sibling) => entries[sibling].start_page.saturating_sub(2).min(max_page),
            None => max_page,
        };
        if last < first {
            debug!(
                "outline entry {:?} ends before it starts ({} < {}), collapsing to one page",
                entry.title, last, first
            );
        }
        let mut pager = Pager::new(first, last);

        while open.last().is_some_and(|(open_level, _)| *open_level >= level) {
            close_innermost(&mut open, &mut root);
        }

        let (parent_level, parent_pager) = match open.last() {
            Some((open_level, section)) => (*open_level, section.pager),
            None => (0, root.pager),
        };
        if parent_level + 1 != level {
            warn!(
                "outline entry {:?} at level {} has no level {} parent, attaching to level {}",
                entry.title,
                level,
                level - 1,
                parent_level
            );
        }
        if pager.clamp_to(&parent_pager) {
            warn!(
                "outline entry {:?} pages fall outside its parent, clamped to [{}, {}]",
                entry.title,
                pager.first(),
                pager.last()
            );
        }

        trace!(
            "outline entry {:?}: level {}, pages [{}, {}]",
            entry.title,
            level,
            pager.first(),
            pager.last()
        );
        open.push((level, Section::new(entry.title.clone(), pager)));
    }

    while !open.is_empty() {
        close_innermost(&mut open, &mut root);
    }

    root
}

/// Convert a 1-based outline page into a 0-based content index.
fn page_index<E>(entry: &OutlineEntry<E>, max_page: usize) -> usize {
    if entry.start_page == 0 {
        warn!("outline entry {:?} starts on page 0, using the first page", entry.title);
        return 0;
    }
    let index = entry.start_page - 1;
    if index > max_page {
        warn!(
            "outline entry {:?} starts on page {} past the end of the document",
            entry.title, entry.start_page
        );
        return max_page;
    }
    index
}

/// Find the entry that bounds the page range of `entries[index]`: the next
/// entry on exactly the same level, wherever it is.
///
/// Entries on other levels are passed over, shallower ones included. A range
/// that runs past the end of its parent is cut back by the parent clamp.
fn next_sibling(levels: &[u32], index: usize) -> Option<usize> {
    let level = levels[index];
    levels
        .iter()
        .enumerate()
        .skip(index + 1)
        .find(|(_, other)| **other == level)
        .map(|(position, _)| position)
}

/// Pop the innermost open section and attach it to its parent.
fn close_innermost(open: &mut Vec<(u32, Section)>, root: &mut Section) {
    let Some((_, section)) = open.pop() else {
        return;
    };
    match open.last_mut() {
        Some((_, parent)) => parent.append(section),
        None => root.append(section),
    }
}

/// Incremental front end to [`build_toc_tree`].
///
/// Collects entries as an adapter walks its outline, then builds the tree in
/// one pass once the outline is complete (page bounds depend on later
/// entries).
#[derive(Debug, Clone)]
pub struct TocBuilder<E = ()> {
    title: String,
    total_pages: usize,
    entries: Vec<OutlineEntry<E>>,
}

impl<E> TocBuilder<E> {
    pub fn new(title: impl Into<String>, total_pages: usize) -> Self {
        Self {
            title: title.into(),
            total_pages,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: OutlineEntry<E>) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn finish(self) -> Section {
        build_toc_tree(&self.entries, &self.title, self.total_pages)
    }
}

impl TocBuilder {
    /// Chainable shorthand for entries without an extra payload.
    pub fn entry(mut self, level: u32, title: impl Into<String>, start_page: usize) -> Self {
        self.push(OutlineEntry::new(level, title, start_page));
        self
    }
}

impl<E> Extend<OutlineEntry<E>> for TocBuilder<E> {
    fn extend<I: IntoIterator<Item = OutlineEntry<E>>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
