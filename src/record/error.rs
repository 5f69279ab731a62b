//! Error types for reading and converting award records.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while turning XML text into a [`Node`](super::Node) tree.
#[derive(Debug, Error)]
pub enum XmlError {
    /// Tokenizer-level failure (bad syntax, mismatched end tag, ...)
    #[error(transparent)]
    Syntax(#[from] quick_xml::Error),

    /// Text or attribute value holds an entity that cannot be unescaped
    #[error(transparent)]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// Input ended while an element was still open
    #[error("element <{element}> is never closed")]
    Unclosed {
        /// Innermost element left open
        element: String,
    },

    /// Closing tag without a matching opening tag
    #[error("closing tag without a matching opening tag")]
    Unbalanced,

    /// Document contains no element at all
    #[error("document has no root element")]
    NoRootElement,
}

/// Errors that can occur when reading a single record file.
///
/// None of these abort a corpus scan: the dataset layer logs them and
/// excludes the file.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Record file is missing at read time
    #[error("record file not found: {}", path.display())]
    NotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Record file exists but could not be read
    #[error("failed to read record '{}': {source}", path.display())]
    Io {
        /// Path that was requested
        path: PathBuf,
        /// Underlying IO failure
        source: io::Error,
    },

    /// Record file is not well-formed XML
    #[error("malformed XML in '{}': {source}", path.display())]
    Xml {
        /// Path that was parsed
        path: PathBuf,
        /// Conversion failure
        source: XmlError,
    },
}

impl RecordError {
    /// Classifies an IO failure, keeping "missing file" distinct.
    #[must_use]
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Returns true when the record file did not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
