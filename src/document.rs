//! The contract between format adapters and the TOC builder.
//!
//! Format adapters (PDF, EPUB, plain text) live outside this crate. They hand
//! over an already materialized outline and page count through
//! [`OutlineSource`]; the tree is built once and cached for as long as the
//! document stays open.

use std::path::Path;

use crate::error::Result;
use crate::model::{Section, SectionId};
use crate::navigation::{SemanticElement, SemanticElements};
use crate::toc::{OutlineEntry, build_toc_tree};

/// What a document adapter must provide to get a table of contents.
pub trait OutlineSource {
    /// Adapter-specific payload carried by each outline entry.
    type Extra;

    /// Display title. May be empty when the document has no title metadata.
    fn title(&self) -> &str;

    fn page_count(&self) -> usize;

    /// The flat outline in document order, with 1-based start pages.
    fn outline(&self) -> Vec<OutlineEntry<Self::Extra>>;
}

/// Build the TOC tree for any adapter.
pub fn toc_tree<S: OutlineSource + ?Sized>(source: &S) -> Section {
    build_toc_tree(&source.outline(), source.title(), source.page_count())
}

/// The title to show for a document: its metadata title, or the file name
/// without extension when the metadata has none.
pub fn fallback_title(title: &str, path: &Path) -> String {
    let title = title.trim();
    if !title.is_empty() {
        return title.to_string();
    }
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// An adapter over an outline that is already in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    pub title: String,
    pub page_count: usize,
    pub outline: Vec<OutlineEntry>,
}

impl MemoryDocument {
    pub fn new(title: impl Into<String>, page_count: usize) -> Self {
        Self {
            title: title.into(),
            page_count,
            outline: Vec::new(),
        }
    }

    pub fn with_entry(mut self, level: u32, title: impl Into<String>, start_page: usize) -> Self {
        self.outline.push(OutlineEntry::new(level, title, start_page));
        self
    }
}

#[cfg(feature = "cli")]
#[derive(serde::Deserialize)]
struct OutlineFile {
    #[serde(default)]
    title: String,
    pages: usize,
    /// `[level, title, start_page]` triples, as PDF outlines are usually dumped.
    #[serde(default)]
    outline: Vec<(u32, String, usize)>,
}

#[cfg(feature = "cli")]
impl MemoryDocument {
    /// Read `{"title": ..., "pages": N, "outline": [[level, title, page], ...]}`.
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let file: OutlineFile = serde_json::from_reader(reader)?;
        Ok(Self {
            title: file.title,
            page_count: file.pages,
            outline: file
                .outline
                .into_iter()
                .map(|(level, title, page)| OutlineEntry::new(level, title, page))
                .collect(),
        })
    }

    /// Load an outline file, titling the document after the file when the
    /// JSON carries no title.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let mut doc = Self::from_json_reader(std::io::BufReader::new(file))?;
        doc.title = fallback_title(&doc.title, path);
        Ok(doc)
    }
}

impl OutlineSource for MemoryDocument {
    type Extra = ();

    fn title(&self) -> &str {
        &self.title
    }

    fn page_count(&self) -> usize {
        self.page_count
    }

    fn outline(&self) -> Vec<OutlineEntry> {
        self.outline.clone()
    }
}

/// The displayed text of a page or flow together with its semantic elements.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    pub text: String,
    pub elements: SemanticElements,
}

impl PageContent {
    pub fn new(text: impl Into<String>, elements: Vec<SemanticElement>) -> Self {
        Self {
            text: text.into(),
            elements: SemanticElements::new(elements),
        }
    }
}

#[cfg(feature = "cli")]
#[derive(serde::Deserialize)]
struct PageFile {
    text: String,
    #[serde(default)]
    elements: Vec<SemanticElement>,
}

#[cfg(feature = "cli")]
impl PageContent {
    /// Read `{"text": ..., "elements": [{"kind": ..., "range": {"start": .., "stop": ..}}]}`.
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let file: PageFile = serde_json::from_reader(reader)?;
        Ok(Self::new(file.text, file.elements))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }
}

/// The TOC tree of the open document, built on first use.
#[derive(Debug, Clone, Default)]
pub struct CachedToc {
    tree: Option<Section>,
}

impl CachedToc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build<S: OutlineSource + ?Sized>(&mut self, source: &S) -> &mut Section {
        self.tree.get_or_insert_with(|| toc_tree(source))
    }

    pub fn get(&self) -> Option<&Section> {
        self.tree.as_ref()
    }

    pub fn is_built(&self) -> bool {
        self.tree.is_some()
    }

    /// Select the section holding `page` and move its pager there.
    ///
    /// Returns `None` before the tree is built.
    pub fn seek_page(&mut self, page: usize) -> Option<Result<SectionId>> {
        let tree = self.tree.as_mut()?;
        Some(tree.section_at_page(page).and_then(|id| {
            if let Some(section) = tree.get_mut(id) {
                section.pager.set_current(page)?;
            }
            Ok(id)
        }))
    }

    /// Drop the tree when the document is unloaded.
    pub fn clear(&mut self) {
        self.tree = None;
    }
}
