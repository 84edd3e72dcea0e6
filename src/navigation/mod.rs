//! Structural navigation: jump to the next or previous heading, link, table.
//!
//! Three layers, usable separately:
//! - [`SemanticElements::locate`] is the stateless search over a page's
//!   elements.
//! - [`NavigationSession`] adds repeat detection across keystrokes.
//! - [`announce`] applies the per-kind [`PresentationTable`].
//!
//! [`navigate`] runs all three the way a reader's key handler does.

mod element;
mod presentation;
mod session;

pub use element::{
    Direction, ElementHit, ElementKind, SemanticElement, SemanticElements, TextRange,
};
pub use presentation::{
    Announcement, Presentation, PresentationTable, announce, char_slice, containing_line,
    not_found_message,
};
pub use session::{NavigationMemento, NavigationSession};

use crate::error::Result;

/// Result of one navigation keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
#[cfg_attr(feature = "cli", serde(tag = "outcome", rename_all = "snake_case"))]
pub enum NavigationOutcome {
    Found(Announcement),
    /// Nothing qualifies; the message reads e.g. "No next heading".
    NotFound { message: String },
}

/// Handle a "next/previous element" request at `cursor`.
///
/// `text` is the currently displayed flow and `elements` its semantic
/// elements. The session is told where the cursor was placed, so the next
/// press from there moves on. Errors only when the elements point outside
/// `text`.
pub fn navigate(
    session: &mut NavigationSession,
    elements: &SemanticElements,
    text: &str,
    table: &PresentationTable,
    kind: ElementKind,
    direction: Direction,
    cursor: usize,
) -> Result<NavigationOutcome> {
    match session.locate(elements, kind, direction, cursor) {
        Some(hit) => {
            let announcement = announce(hit, text, table)?;
            session.placed_cursor(announcement.cursor);
            Ok(NavigationOutcome::Found(announcement))
        }
        None => Ok(NavigationOutcome::NotFound {
            message: not_found_message(kind, direction, table),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Intro\nChapter One\nbody text with a link\nChapter Two\nend";

    fn elements() -> SemanticElements {
        SemanticElements::new(vec![
            SemanticElement::new(ElementKind::Heading1, 0, 5),
            SemanticElement::new(ElementKind::Heading2, 6, 17),
            SemanticElement::new(ElementKind::Link, 35, 39),
            SemanticElement::new(ElementKind::Heading2, 40, 51),
        ])
    }

    fn cursor_of(outcome: &NavigationOutcome) -> usize {
        match outcome {
            NavigationOutcome::Found(announcement) => announcement.cursor,
            NavigationOutcome::NotFound { message } => panic!("unexpected: {message}"),
        }
    }

    #[test]
    fn next_heading_walks_the_document() {
        let elements = elements();
        let table = PresentationTable::default();
        let mut session = NavigationSession::new();
        let mut cursor = 0;
        let mut spoken = Vec::new();
        loop {
            let outcome = navigate(
                &mut session,
                &elements,
                TEXT,
                &table,
                ElementKind::Heading,
                Direction::Forward,
                cursor,
            )
            .unwrap();
            match outcome {
                NavigationOutcome::Found(announcement) => {
                    spoken.push(announcement.message.clone());
                    cursor = announcement.cursor;
                }
                NavigationOutcome::NotFound { message } => {
                    assert_eq!(message, "No next heading");
                    break;
                }
            }
        }
        assert_eq!(
            spoken,
            vec!["Chapter One: heading level 2", "Chapter Two: heading level 2"]
        );
    }

    #[test]
    fn link_cursor_lands_on_start() {
        let table = PresentationTable::default();
        let mut session = NavigationSession::new();
        let outcome = navigate(
            &mut session,
            &elements(),
            TEXT,
            &table,
            ElementKind::Link,
            Direction::Forward,
            0,
        )
        .unwrap();
        assert_eq!(cursor_of(&outcome), 35);
    }

    #[test]
    fn previous_without_match() {
        let table = PresentationTable::default();
        let mut session = NavigationSession::new();
        let outcome = navigate(
            &mut session,
            &elements(),
            TEXT,
            &table,
            ElementKind::Table,
            Direction::Backward,
            30,
        )
        .unwrap();
        assert_eq!(
            outcome,
            NavigationOutcome::NotFound {
                message: "No previous table".to_string()
            }
        );
    }
}
