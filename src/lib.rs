//! Abstracts Core Library
//!
//! This library turns a directory of grant-award XML records into a corpus of
//! normalized abstracts ready for a bag-of-words topic model.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`record`] - XML record parsing and award lookup
//! - [`clean`] - Abstract normalization pipeline (hyphens, stop words, lemmas)
//! - [`corpus`] - Lazy, filtered, index-addressable dataset over a directory
//! - [`stats`] - Field census, label tallies, word and length statistics

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod clean;
pub mod corpus;
pub mod record;
pub mod stats;

// Re-export commonly used types
pub use clean::{AbstractCleaner, CleanOptions, ensure_ready, normalize_hyphens};
pub use corpus::{CorpusDataset, CorpusError, CorpusOptions, sample_indices};
pub use record::{AwardLookup, AwardMetadata, MissingSection, Node, RecordError, extract_award, parse};
pub use stats::{KeyCensus, LabelKind, LabelTally, LengthSummary, WordFrequencies};
