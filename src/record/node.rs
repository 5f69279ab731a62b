//! Nested mapping produced from an XML award document.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Shared placeholder returned when a list turns out to be empty.
static NULL_NODE: Node = Node::Null;

/// One value in a converted XML document.
///
/// Conversion follows the usual XML-to-dict rules: an element holding only
/// text becomes [`Node::Text`], an empty or self-closing element becomes
/// [`Node::Null`], an element with children or attributes becomes
/// [`Node::Map`], and repeated sibling tags collapse into a [`Node::List`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Empty or self-closing element.
    Null,
    /// Text-only element (already unescaped and trimmed).
    Text(String),
    /// Element with child elements and/or attributes.
    Map(Mapping),
    /// Repeated sibling elements, in document order.
    List(Vec<Node>),
}

impl Node {
    /// Looks up a child by key. Only maps have children.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Self::Map(mapping) => mapping.get(key),
            _ => None,
        }
    }

    /// Returns the first element of a list, or the node itself otherwise.
    ///
    /// Fields like `ProgramElement` are a single mapping in some records and a
    /// list of mappings in others; callers normalize through this.
    #[must_use]
    pub fn first(&self) -> &Node {
        match self {
            Self::List(items) => items.first().unwrap_or(&NULL_NODE),
            other => other,
        }
    }

    /// Walks `path` from this node, taking the first element of any list met
    /// along the way.
    #[must_use]
    pub fn lookup(&self, path: &[&str]) -> Option<&Node> {
        path.iter()
            .try_fold(self, |node, key| node.first().get(key))
    }

    /// Text content of this node.
    ///
    /// Elements that carry attributes keep their text under `#text`.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Map(mapping) => mapping.get("#text").and_then(Node::as_text),
            Self::List(_) => self.first().as_text(),
            Self::Null => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&Mapping> {
        match self {
            Self::Map(mapping) => Some(mapping),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Insertion-ordered string-keyed children of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(String, Node)>,
}

impl Mapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, node)| node)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts a child. A key seen before turns into a [`Node::List`] holding
    /// every value in arrival order.
    pub fn push(&mut self, key: String, value: Node) {
        let Some((_, existing)) = self
            .entries
            .iter_mut()
            .find(|(candidate, _)| *candidate == key)
        else {
            self.entries.push((key, value));
            return;
        };

        match existing {
            Node::List(items) => items.push(value),
            _ => {
                let previous = std::mem::replace(existing, Node::Null);
                *existing = Node::List(vec![previous, value]);
            }
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Map(mapping) => mapping.serialize(serializer),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, node) in self.iter() {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}
