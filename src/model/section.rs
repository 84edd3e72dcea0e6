//! Table-of-contents sections.
//!
//! A [`Section`] tree is built once per document by [`crate::build_toc_tree`].
//! The root owns every node; views that need to refer back to a node (a tree
//! widget, a selection) hold a [`SectionId`] instead of a reference.

use crate::error::{Error, Result};

use super::pager::Pager;

/// Preorder position of a section within its root. The root is `SectionId(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct SectionId(pub usize);

impl SectionId {
    pub const ROOT: SectionId = SectionId(0);
}

/// A node in the reconstructed table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Section {
    pub title: String,
    pub pager: Pager,
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Vec::is_empty"))]
    children: Vec<Section>,
}

impl Section {
    pub fn new(title: impl Into<String>, pager: Pager) -> Self {
        Self {
            title: title.into(),
            pager,
            children: Vec::new(),
        }
    }

    pub fn append(&mut self, child: Section) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Section] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Section] {
        &mut self.children
    }

    pub fn last_child(&self) -> Option<&Section> {
        self.children.last()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True for a document with a single page, where callers navigate by
    /// text position rather than by page.
    pub fn is_single_page(&self) -> bool {
        self.pager.len() == 1
    }

    /// Number of sections in this subtree, including `self`.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(Section::len).sum::<usize>()
    }

    /// Always false; a subtree contains at least its own node.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Resolve a preorder id relative to this section.
    pub fn get(&self, id: SectionId) -> Option<&Section> {
        let mut node = self;
        let mut remaining = id.0;
        'descend: while remaining > 0 {
            remaining -= 1;
            for child in &node.children {
                let size = child.len();
                if remaining < size {
                    node = child;
                    continue 'descend;
                }
                remaining -= size;
            }
            return None;
        }
        Some(node)
    }

    /// Mutable variant of [`Section::get`], used to move a section's pager.
    pub fn get_mut(&mut self, id: SectionId) -> Option<&mut Section> {
        if id.0 == 0 {
            return Some(self);
        }
        let mut remaining = id.0 - 1;
        for child in &mut self.children {
            let size = child.len();
            if remaining < size {
                return child.get_mut(SectionId(remaining));
            }
            remaining -= size;
        }
        None
    }

    /// Walk the subtree in preorder.
    pub fn iter(&self) -> DfsIter<'_> {
        DfsIter {
            stack: vec![(0, self)],
            next_id: 0,
        }
    }

    /// Find the deepest section whose page range contains `page`.
    ///
    /// When sibling ranges overlap the later sibling wins, since it is the
    /// most recently started section at that page.
    pub fn section_at_page(&self, page: usize) -> Result<SectionId> {
        if !self.pager.contains(page) {
            return Err(Error::PositionOutOfBounds {
                position: page,
                len: self.pager.last() + 1,
            });
        }

        let mut node = self;
        let mut id = 0;
        loop {
            let mut offset = id + 1;
            let mut found = None;
            for child in &node.children {
                if child.pager.contains(page) {
                    found = Some((offset, child));
                }
                offset += child.len();
            }
            match found {
                Some((child_id, child)) => {
                    id = child_id;
                    node = child;
                }
                None => return Ok(SectionId(id)),
            }
        }
    }
}

/// Preorder iterator over a section subtree.
///
/// Yields `(id, depth, section)`; the starting section has depth 0.
pub struct DfsIter<'a> {
    stack: Vec<(usize, &'a Section)>,
    next_id: usize,
}

impl<'a> Iterator for DfsIter<'a> {
    type Item = (SectionId, usize, &'a Section);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, section) = self.stack.pop()?;
        self.stack
            .extend(section.children.iter().rev().map(|c| (depth + 1, c)));
        let id = SectionId(self.next_id);
        self.next_id += 1;
        Some((id, depth, section))
    }
}
