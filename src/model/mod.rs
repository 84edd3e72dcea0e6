//! Core data model for table-of-contents navigation.
//!
//! This module contains:
//! - Page ranges ([`Pager`])
//! - The section tree ([`Section`]) and its preorder ids

mod pager;
mod section;

pub use pager::Pager;
pub use section::{DfsIter, Section, SectionId};
