//! Error types for folio operations.

use thiserror::Error;

/// Errors that can occur when querying a TOC tree or navigating text.
///
/// Malformed outlines are not errors: the builder degrades and logs instead.
/// Running out of elements during navigation is not an error either, it is a
/// `None` result.
#[derive(Error, Debug)]
pub enum Error {
    #[error("page {page} is out of range [{first}, {last}]")]
    PageOutOfRange {
        page: usize,
        first: usize,
        last: usize,
    },

    #[error("position {position} is out of bounds (length {len})")]
    PositionOutOfBounds { position: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "cli")]
    #[error("JSON error: {0}")]
    Json(serde_json::Error),
}

#[cfg(feature = "cli")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
