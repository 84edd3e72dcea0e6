//! Repeat detection across consecutive navigation requests.
//!
//! The presentation policy may put the cursor back at the start of a line,
//! before the element just announced. The next "next heading" press would then
//! find the same heading again. A [`NavigationSession`] remembers the last
//! match and the cursor it was presented at. A request from that cursor
//! continues from the match itself, and a request that would repeat the last
//! answer exactly restarts from the end of the previous match.

use log::debug;

use super::element::{Direction, ElementHit, ElementKind, SemanticElements, TextRange};

/// The last successful navigation: the cursor position it is tied to and
/// what it found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationMemento {
    pub from: usize,
    pub range: TextRange,
    pub kind: ElementKind,
}

/// Navigation state owned by the caller for one reading session.
///
/// Clear it whenever the cursor moves by other means (a TOC selection, a seek,
/// a page turn).
#[derive(Debug, Clone, Default)]
pub struct NavigationSession {
    last: Option<NavigationMemento>,
    /// Cursor the caller left after presenting `last`.
    placed: Option<usize>,
}

impl NavigationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn memento(&self) -> Option<&NavigationMemento> {
        self.last.as_ref()
    }

    pub fn clear(&mut self) {
        self.last = None;
        self.placed = None;
    }

    /// Record where the caller left the cursor after presenting the last
    /// match.
    ///
    /// A later request from exactly this cursor searches from the match
    /// instead (its start going forward, its end going backward), so a cursor
    /// moved back to the start of a line does not bring earlier elements on
    /// that line into play again.
    pub fn placed_cursor(&mut self, cursor: usize) {
        if self.last.is_some() {
            self.placed = Some(cursor);
        }
    }

    pub fn placed(&self) -> Option<usize> {
        self.placed
    }

    /// The position a request from `cursor` actually searches from.
    fn resume_from(&self, direction: Direction, cursor: usize) -> usize {
        match (self.last, self.placed) {
            (Some(last), Some(placed)) if placed == cursor => match direction {
                Direction::Forward => last.range.start,
                Direction::Backward => last.range.stop,
            },
            _ => cursor,
        }
    }

    /// Locate the next element of `kind`, skipping a result identical to the
    /// previous one.
    ///
    /// Repeats are keyed on the starting position together with the resolved
    /// range and kind, so the same cursor over changed content is not treated
    /// as a repeat. A `None` result leaves the session as it was; a match
    /// forgets the placed cursor until the caller reports a new one.
    pub fn locate(
        &mut self,
        elements: &SemanticElements,
        kind: ElementKind,
        direction: Direction,
        from: usize,
    ) -> Option<ElementHit> {
        let mut from = self.resume_from(direction, from);
        loop {
            let hit = elements.locate(kind, direction, from)?;
            let memento = NavigationMemento {
                from,
                range: hit.range,
                kind: hit.kind,
            };
            if self.last == Some(memento) {
                debug!(
                    "repeated {:?} match at {} from {}, searching again from {}",
                    hit.kind, hit.range, from, hit.range.stop
                );
                // `from` changes here, so the retry cannot match the memento again.
                from = hit.range.stop;
                continue;
            }
            self.last = Some(memento);
            self.placed = None;
            return Some(hit);
        }
    }
}
