//! Page ranges for table-of-contents sections.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// The first, last and current page of a section.
///
/// Pages are 0-based content indices. The invariant
/// `first <= current <= last` holds for every constructed pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Pager {
    first: usize,
    last: usize,
    current: usize,
}

impl Pager {
    /// Create a pager positioned on its first page.
    ///
    /// A `last` before `first` collapses the range to the single page `first`.
    pub fn new(first: usize, last: usize) -> Self {
        let last = last.max(first);
        Self {
            first,
            last,
            current: first,
        }
    }

    /// Create a pager positioned on `current`.
    pub fn with_current(first: usize, last: usize, current: usize) -> Result<Self> {
        let mut pager = Self::new(first, last);
        pager.set_current(current)?;
        Ok(pager)
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn last(&self) -> usize {
        self.last
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of pages in the range. Never zero.
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    /// Always false; a pager spans at least one page.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, page: usize) -> bool {
        (self.first..=self.last).contains(&page)
    }

    /// True when `other` lies entirely inside this range.
    pub fn encloses(&self, other: &Pager) -> bool {
        self.first <= other.first && other.last <= self.last
    }

    pub fn is_first(&self) -> bool {
        self.current == self.first
    }

    pub fn is_last(&self) -> bool {
        self.current == self.last
    }

    /// Move to `page`. Pages outside the range are rejected and leave the
    /// pager untouched.
    pub fn set_current(&mut self, page: usize) -> Result<()> {
        if !self.contains(page) {
            return Err(Error::PageOutOfRange {
                page,
                first: self.first,
                last: self.last,
            });
        }
        self.current = page;
        Ok(())
    }

    /// Step forward one page. Returns the new page, or `None` on the last page.
    pub fn next_page(&mut self) -> Option<usize> {
        if self.is_last() {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    /// Step back one page. Returns the new page, or `None` on the first page.
    pub fn prev_page(&mut self) -> Option<usize> {
        if self.is_first() {
            return None;
        }
        self.current -= 1;
        Some(self.current)
    }

    pub fn reset(&mut self) {
        self.current = self.first;
    }

    /// Iterate the page indices of the range.
    pub fn iter(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }

    /// Narrow this range so it lies inside `parent`.
    ///
    /// Returns true if the range had to change.
    pub(crate) fn clamp_to(&mut self, parent: &Pager) -> bool {
        let first = self.first.clamp(parent.first, parent.last);
        let last = self.last.clamp(first, parent.last);
        let changed = first != self.first || last != self.last;
        self.first = first;
        self.last = last;
        self.current = self.current.clamp(first, last);
        changed
    }
}

impl IntoIterator for &Pager {
    type Item = usize;
    type IntoIter = RangeInclusive<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
