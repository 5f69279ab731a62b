//! Award sub-record lookup and metadata extraction.

use std::fmt;

use serde::Serialize;

use super::node::Node;

/// Key of the document root element.
pub const ROOT_KEY: &str = "rootTag";
/// Key of the award record under the root.
pub const AWARD_KEY: &str = "Award";
/// Key of the free-text abstract inside an award.
pub const ABSTRACT_KEY: &str = "AbstractNarration";

/// Which expected section of a document was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSection {
    /// Document root is not `rootTag`
    RootTag,
    /// `rootTag` holds no `Award`
    Award,
}

impl fmt::Display for MissingSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::RootTag => ROOT_KEY,
            Self::Award => AWARD_KEY,
        };
        write!(f, "{label}")
    }
}

/// Result of looking up the award record in a parsed document.
///
/// `Absent` is a soft failure: the document contributes nothing and callers
/// skip it. It is never conflated with an award that is present but empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardLookup<'a> {
    Found(&'a Node),
    Absent(MissingSection),
}

impl<'a> AwardLookup<'a> {
    /// Returns the award node when present.
    #[must_use]
    pub fn found(self) -> Option<&'a Node> {
        match self {
            Self::Found(award) => Some(award),
            Self::Absent(_) => None,
        }
    }
}

/// Looks up `rootTag` → `Award` in a parsed document.
///
/// A repeated `Award` element resolves to its first occurrence.
#[must_use]
pub fn extract_award(document: &Node) -> AwardLookup<'_> {
    let Some(root) = document.get(ROOT_KEY) else {
        return AwardLookup::Absent(MissingSection::RootTag);
    };
    match root.get(AWARD_KEY) {
        Some(award) => AwardLookup::Found(award.first()),
        None => AwardLookup::Absent(MissingSection::Award),
    }
}

/// Returns the abstract text of an award, or `None` when the field is absent
/// or null.
#[must_use]
pub fn abstract_text(award: &Node) -> Option<&str> {
    award.get(ABSTRACT_KEY).and_then(Node::as_text)
}

/// Categorical fields used to label an abstract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AwardMetadata {
    /// `AwardID`
    pub award_id: Option<String>,
    /// `AwardTitle`
    pub title: Option<String>,
    /// `Organization.Directorate.LongName`
    pub directorate: Option<String>,
    /// `ProgramElement.Text` (first element when repeated)
    pub program: Option<String>,
}

impl AwardMetadata {
    #[must_use]
    pub fn from_award(award: &Node) -> Self {
        let text_at = |path: &[&str]| {
            award
                .lookup(path)
                .and_then(Node::as_text)
                .map(str::to_string)
        };

        Self {
            award_id: text_at(&["AwardID"]),
            title: text_at(&["AwardTitle"]),
            directorate: text_at(&["Organization", "Directorate", "LongName"]),
            program: text_at(&["ProgramElement", "Text"]),
        }
    }
}
