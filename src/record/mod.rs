//! Record accessor: read one award XML file and reach into its award section.
//!
//! Records are parsed fresh on every call and never cached. Absence of a file
//! or of expected structure is reported as a value, never a panic, so callers
//! can decide to skip the record.
//!
//! # Example
//!
//! ```
//! use abstracts_core::record::{abstract_text, extract_award, parse_document};
//!
//! let doc = parse_document(
//!     "<rootTag><Award><AbstractNarration>Kelp forests.</AbstractNarration></Award></rootTag>",
//! )
//! .unwrap();
//! let award = extract_award(&doc).found().unwrap();
//! assert_eq!(abstract_text(award), Some("Kelp forests."));
//! ```

mod award;
mod error;
mod node;
mod xml;

pub use award::{
    ABSTRACT_KEY, AWARD_KEY, AwardLookup, AwardMetadata, MissingSection, ROOT_KEY, abstract_text,
    extract_award,
};
pub use error::{RecordError, XmlError};
pub use node::{Mapping, Node};
pub use xml::parse_document;

use std::fs;
use std::path::Path;

use tracing::instrument;

/// Reads the file at `path` and converts its XML content into a [`Node`].
///
/// # Errors
///
/// - [`RecordError::NotFound`] when the file does not exist
/// - [`RecordError::Io`] for any other read failure
/// - [`RecordError::Xml`] when the content is not well-formed XML
#[instrument(level = "trace", skip_all, fields(path = %path.display()))]
pub fn parse(path: &Path) -> Result<Node, RecordError> {
    let raw = fs::read_to_string(path).map_err(|source| RecordError::from_io(path, source))?;
    parse_document(&raw).map_err(|source| RecordError::Xml {
        path: path.to_path_buf(),
        source,
    })
}
