//! How a located element is presented to the user.
//!
//! The navigator reports exact ranges. What the user hears, and where the
//! cursor ends up, is decided per element kind by a [`PresentationTable`]:
//! headings are read as whole lines with the cursor at the line start, links
//! are read exactly, and so on.

use memchr::{memchr, memrchr};

use crate::error::{Error, Result};

use super::element::{Direction, ElementHit, ElementKind, TextRange};

/// Presentation policy for one element kind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
pub struct Presentation {
    /// Human-readable name, e.g. "heading level 2".
    pub label: String,
    /// Speak the whole line holding the element instead of its exact range.
    pub read_whole_line: bool,
    /// Place the cursor at the start of the line holding the element's end.
    pub cursor_to_line_start: bool,
}

impl Presentation {
    pub fn new(
        label: impl Into<String>,
        read_whole_line: bool,
        cursor_to_line_start: bool,
    ) -> Self {
        Self {
            label: label.into(),
            read_whole_line,
            cursor_to_line_start,
        }
    }
}

/// Enum-keyed presentation table with one entry per [`ElementKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationTable {
    entries: [Presentation; ElementKind::ALL.len()],
}

impl Default for PresentationTable {
    fn default() -> Self {
        Self {
            entries: ElementKind::ALL.map(default_presentation),
        }
    }
}

fn default_presentation(kind: ElementKind) -> Presentation {
    match kind {
        ElementKind::Heading => Presentation::new("heading", true, true),
        ElementKind::Heading1
        | ElementKind::Heading2
        | ElementKind::Heading3
        | ElementKind::Heading4
        | ElementKind::Heading5
        | ElementKind::Heading6 => {
            let level = kind.heading_level().unwrap_or_default();
            Presentation::new(format!("heading level {level}"), true, true)
        }
        ElementKind::Link => Presentation::new("link", false, false),
        ElementKind::Table => Presentation::new("table", false, true),
        ElementKind::List => Presentation::new("list", false, true),
        ElementKind::Quote => Presentation::new("quote", false, true),
        ElementKind::Landmark => Presentation::new("landmark", true, true),
        ElementKind::Graphic => Presentation::new("graphic", false, false),
    }
}

impl PresentationTable {
    pub fn get(&self, kind: ElementKind) -> &Presentation {
        &self.entries[kind.index()]
    }

    pub fn set(&mut self, kind: ElementKind, presentation: Presentation) {
        self.entries[kind.index()] = presentation;
    }

    /// Load overrides from a JSON object keyed by kind name. Kinds that are
    /// not mentioned keep their default policy.
    ///
    /// ```
    /// use folio::navigation::{ElementKind, PresentationTable};
    ///
    /// let table = PresentationTable::from_json_str(
    ///     r#"{"link": {
    ///         "label": "hyperlink",
    ///         "read_whole_line": true,
    ///         "cursor_to_line_start": false
    ///     }}"#,
    /// ).unwrap();
    /// assert_eq!(table.get(ElementKind::Link).label, "hyperlink");
    /// assert_eq!(table.get(ElementKind::Table).label, "table");
    /// ```
    #[cfg(feature = "cli")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let overrides: std::collections::HashMap<ElementKind, Presentation> =
            serde_json::from_str(json)?;
        let mut table = Self::default();
        for (kind, presentation) in overrides {
            table.set(kind, presentation);
        }
        Ok(table)
    }
}

/// What to tell the user about a located element.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Announcement {
    /// The element as found.
    pub hit: ElementHit,
    /// The range that is spoken: the whole line or the exact element.
    pub spoken: TextRange,
    pub text: String,
    pub label: String,
    /// `"{text}: {label}"`.
    pub message: String,
    /// Where the cursor goes.
    pub cursor: usize,
}

/// Apply the presentation policy for `hit.kind` to a located element.
///
/// Fails with [`Error::PositionOutOfBounds`] when the hit does not lie inside
/// `text`, which means the elements and the text are out of sync.
pub fn announce(hit: ElementHit, text: &str, table: &PresentationTable) -> Result<Announcement> {
    let presentation = table.get(hit.kind);
    let char_count = text.chars().count();
    if hit.range.stop > char_count {
        return Err(Error::PositionOutOfBounds {
            position: hit.range.stop,
            len: char_count,
        });
    }

    // The line is looked up one past the start, so an element beginning on a
    // line terminator reads the line that follows.
    let spoken = if presentation.read_whole_line {
        containing_line(text, (hit.range.start + 1).min(char_count))?
    } else {
        hit.range
    };
    let spoken_text = char_slice(text, spoken).trim().to_string();

    let cursor = if presentation.cursor_to_line_start {
        let last_char = hit.range.stop.saturating_sub(1).max(hit.range.start);
        containing_line(text, last_char)?.start
    } else {
        hit.range.start
    };

    Ok(Announcement {
        hit,
        spoken,
        message: format!("{}: {}", spoken_text, presentation.label),
        text: spoken_text,
        label: presentation.label.clone(),
        cursor,
    })
}

/// The message spoken when nothing qualifies in the requested direction.
pub fn not_found_message(
    kind: ElementKind,
    direction: Direction,
    table: &PresentationTable,
) -> String {
    let label = &table.get(kind).label;
    match direction {
        Direction::Forward => format!("No next {label}"),
        Direction::Backward => format!("No previous {label}"),
    }
}

/// Character-offset bounds of the line holding `pos`, without its line
/// terminator (`\n` or `\r\n`).
///
/// `pos` may equal the character count, which addresses the (possibly empty)
/// last line.
pub fn containing_line(text: &str, pos: usize) -> Result<TextRange> {
    let char_count = text.chars().count();
    if pos > char_count {
        return Err(Error::PositionOutOfBounds {
            position: pos,
            len: char_count,
        });
    }

    let bytes = text.as_bytes();
    let at = byte_offset(text, pos);
    let line_start = memrchr(b'\n', &bytes[..at]).map_or(0, |i| i + 1);
    let mut line_end = memchr(b'\n', &bytes[at..]).map_or(bytes.len(), |i| at + i);
    if line_end > line_start && bytes[line_end - 1] == b'\r' {
        line_end -= 1;
    }

    let start = text[..line_start].chars().count();
    let stop = start + text[line_start..line_end.max(line_start)].chars().count();
    Ok(TextRange::new(start, stop))
}

/// Slice `text` by a character range, clamped to the text.
pub fn char_slice(text: &str, range: TextRange) -> &str {
    let start = byte_offset(text, range.start);
    let stop = byte_offset(text, range.stop).max(start);
    &text[start..stop]
}

fn byte_offset(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map_or(text.len(), |(offset, _)| offset)
}
