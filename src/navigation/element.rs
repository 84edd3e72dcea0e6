//! Semantic elements and the directional element search.

use std::fmt;

use log::warn;

/// The kind of a semantic element, or of a navigation request.
///
/// [`ElementKind::Heading`] is a family: as a request it matches a heading of
/// any level. Documents normally tag headings with their level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
#[cfg_attr(feature = "cli", serde(rename_all = "snake_case"))]
pub enum ElementKind {
    Heading,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Link,
    Table,
    List,
    Quote,
    Landmark,
    Graphic,
}

impl ElementKind {
    pub const ALL: [ElementKind; 13] = [
        ElementKind::Heading,
        ElementKind::Heading1,
        ElementKind::Heading2,
        ElementKind::Heading3,
        ElementKind::Heading4,
        ElementKind::Heading5,
        ElementKind::Heading6,
        ElementKind::Link,
        ElementKind::Table,
        ElementKind::List,
        ElementKind::Quote,
        ElementKind::Landmark,
        ElementKind::Graphic,
    ];

    /// Heading kind for an `<hN>` level. Levels outside 1-6 map to the
    /// generic heading family.
    pub fn heading(level: u8) -> Self {
        match level {
            1 => ElementKind::Heading1,
            2 => ElementKind::Heading2,
            3 => ElementKind::Heading3,
            4 => ElementKind::Heading4,
            5 => ElementKind::Heading5,
            6 => ElementKind::Heading6,
            _ => ElementKind::Heading,
        }
    }

    pub fn is_heading(self) -> bool {
        self.heading_level().is_some() || self == ElementKind::Heading
    }

    pub fn heading_level(self) -> Option<u8> {
        match self {
            ElementKind::Heading1 => Some(1),
            ElementKind::Heading2 => Some(2),
            ElementKind::Heading3 => Some(3),
            ElementKind::Heading4 => Some(4),
            ElementKind::Heading5 => Some(5),
            ElementKind::Heading6 => Some(6),
            _ => None,
        }
    }

    /// Whether an element of kind `actual` satisfies a request for `self`.
    pub fn matches(self, actual: ElementKind) -> bool {
        self == actual || (self == ElementKind::Heading && actual.is_heading())
    }

    /// Position of this kind in [`ElementKind::ALL`], for enum-keyed tables.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// A half-open `[start, stop)` span of character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRange {
    pub start: usize,
    pub stop: usize,
}

impl TextRange {
    pub fn new(start: usize, stop: usize) -> Self {
        Self { start, stop }
    }

    pub fn len(&self) -> usize {
        self.stop.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.stop <= self.start
    }

    pub fn contains(&self, pos: usize) -> bool {
        (self.start..self.stop).contains(&pos)
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.stop)
    }
}

/// A typed span of document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
pub struct SemanticElement {
    pub kind: ElementKind,
    pub range: TextRange,
}

impl SemanticElement {
    pub fn new(kind: ElementKind, start: usize, stop: usize) -> Self {
        Self {
            kind,
            range: TextRange::new(start, stop),
        }
    }
}

/// Search direction for structural navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn from_forward(forward: bool) -> Self {
        if forward {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    pub fn is_forward(self) -> bool {
        self == Direction::Forward
    }
}

/// A located element: its exact range and its actual kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct ElementHit {
    pub range: TextRange,
    pub kind: ElementKind,
}

/// The semantic elements of one page or flow, in document order.
#[derive(Debug, Clone, Default)]
pub struct SemanticElements {
    elements: Vec<SemanticElement>,
}

impl SemanticElements {
    /// Take ownership of an adapter's elements and sort them into document
    /// order. Elements with the same start keep their relative order.
    pub fn new(mut elements: Vec<SemanticElement>) -> Self {
        elements.retain(|element| {
            let valid = element.range.start <= element.range.stop;
            if !valid {
                warn!(
                    "dropping {:?} element with inverted range {}",
                    element.kind, element.range
                );
            }
            valid
        });
        elements.sort_by_key(|element| element.range.start);
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SemanticElement> {
        self.elements.iter()
    }

    /// Whether any element satisfies a request for `kind`.
    pub fn supports(&self, kind: ElementKind) -> bool {
        self.elements.iter().any(|element| kind.matches(element.kind))
    }

    /// Find the nearest element of `kind` strictly after or before `from`.
    ///
    /// Forward, an element qualifies when it starts after `from`. Backward, it
    /// must end before `from`. `None` means nothing qualifies in that
    /// direction, whether the document has no such elements at all or the
    /// search ran off the end.
    pub fn locate(
        &self,
        kind: ElementKind,
        direction: Direction,
        from: usize,
    ) -> Option<ElementHit> {
        let found = match direction {
            Direction::Forward => {
                let begin = self.elements.partition_point(|e| e.range.start <= from);
                self.elements[begin..]
                    .iter()
                    .find(|e| kind.matches(e.kind))
            }
            Direction::Backward => {
                let end = self.elements.partition_point(|e| e.range.start < from);
                self.elements[..end]
                    .iter()
                    .rev()
                    .find(|e| e.range.stop < from && kind.matches(e.kind))
            }
        };
        found.map(|e| ElementHit {
            range: e.range,
            kind: e.kind,
        })
    }
}

impl From<Vec<SemanticElement>> for SemanticElements {
    fn from(elements: Vec<SemanticElement>) -> Self {
        Self::new(elements)
    }
}

impl FromIterator<SemanticElement> for SemanticElements {
    fn from_iter<I: IntoIterator<Item = SemanticElement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SemanticElements {
    type Item = &'a SemanticElement;
    type IntoIter = std::slice::Iter<'a, SemanticElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
