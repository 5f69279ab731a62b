//! Abstract text normalization.
//!
//! This module turns a raw award abstract into a space-separated sequence of
//! lowercase content tokens suitable for a bag-of-words topic model:
//! markup and links are stripped, punctuation removed, hyphenated tokens
//! disambiguated, and stop words dropped (optionally lemmatizing the rest).
//!
//! # Example
//!
//! ```
//! use abstracts_core::clean::{AbstractCleaner, CleanOptions};
//!
//! let cleaner = AbstractCleaner::new(CleanOptions::default());
//! assert_eq!(
//!     cleaner.clean("The COVID-19 kelp forest.&lt;br/&gt; https://example.org"),
//!     "covid19 kelp forest"
//! );
//! ```

mod cleaner;
mod hyphen;
mod lemma;
mod resources;

pub use cleaner::{AbstractCleaner, CleanOptions, LINE_BREAK_MARKUP};
pub use hyphen::normalize_hyphens;
pub use lemma::Lemmatizer;
pub use resources::{LinguisticResources, ensure_ready};
