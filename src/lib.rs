//! # folio
//!
//! Table-of-contents reconstruction and structural navigation for accessible
//! ebook readers.
//!
//! ## Features
//!
//! - Rebuild a section tree with page ranges from a flat document outline
//! - Jump to the next or previous heading, link, table, list or quote
//! - Repeat detection so "next heading" always makes progress
//! - Configurable per-kind presentation (what is spoken, where the cursor goes)
//!
//! ## Building a table of contents
//!
//! ```
//! use folio::{OutlineEntry, build_toc_tree};
//!
//! let outline = vec![
//!     OutlineEntry::new(1, "Intro", 1),
//!     OutlineEntry::new(1, "Chapter 1", 3),
//!     OutlineEntry::new(2, "Section 1.1", 5),
//!     OutlineEntry::new(1, "Chapter 2", 12),
//! ];
//! let root = build_toc_tree(&outline, "My Book", 50);
//!
//! assert_eq!(root.children().len(), 3);
//! let chapter = &root.children()[1];
//! assert_eq!((chapter.pager.first(), chapter.pager.last()), (2, 10));
//! ```
//!
//! ## Structural navigation
//!
//! ```
//! use folio::navigation::{
//!     Direction, ElementKind, NavigationSession, SemanticElement, SemanticElements,
//! };
//!
//! let elements = SemanticElements::new(vec![
//!     SemanticElement::new(ElementKind::Heading1, 0, 5),
//!     SemanticElement::new(ElementKind::Heading2, 10, 20),
//! ]);
//! let mut session = NavigationSession::new();
//! let hit = session
//!     .locate(&elements, ElementKind::Heading, Direction::Forward, 0)
//!     .unwrap();
//! assert_eq!(hit.kind, ElementKind::Heading2);
//! ```

pub mod document;
pub mod error;
pub mod model;
pub mod navigation;
pub mod progress;
pub mod toc;

pub use document::{
    CachedToc, MemoryDocument, OutlineSource, PageContent, fallback_title, toc_tree,
};
pub use error::{Error, Result};
pub use model::{Pager, Section, SectionId};
pub use navigation::{Direction, ElementKind, NavigationOutcome, NavigationSession, navigate};
pub use toc::{OutlineEntry, TocBuilder, build_toc_tree};
