//! Error types for corpus construction and retrieval.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::record::{MissingSection, RecordError};

/// Errors that can occur when building or reading a [`CorpusDataset`](super::CorpusDataset).
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus directory itself cannot be listed
    #[error("cannot list corpus directory '{}': {source}", dir.display())]
    ListDir {
        /// Configured corpus directory
        dir: PathBuf,
        /// Underlying IO failure
        source: io::Error,
    },

    /// Caller asked for a position past the end of the corpus
    #[error("index {index} out of range for corpus of {len} records")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Number of retained records
        len: usize,
    },

    /// Record could not be read or parsed
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Record has no award section
    #[error("record '{}' has no {section} section", path.display())]
    MissingAward {
        /// Record path
        path: PathBuf,
        /// Which level of the lookup failed
        section: MissingSection,
    },

    /// Record has no abstract, or the abstract is null
    #[error("record '{}' has no abstract", path.display())]
    MissingAbstract {
        /// Record path
        path: PathBuf,
    },
}

impl CorpusError {
    /// Returns true for the caller-side contract violation (bad index), as
    /// opposed to a data-quality problem with a record.
    #[must_use]
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}
