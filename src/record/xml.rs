//! XML-to-mapping conversion for award documents.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::trace;

use super::error::XmlError;
use super::node::{Mapping, Node};

/// Element being filled while its children stream in.
struct Frame {
    name: String,
    children: Mapping,
    text: String,
}

impl Frame {
    fn open(start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let mut children = Mapping::new();
        for attr in start.attributes().flatten() {
            let key = format!("@{}", String::from_utf8_lossy(attr.key.as_ref()));
            let value = attr.unescape_value()?.into_owned();
            children.push(key, Node::Text(value));
        }

        Ok(Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            children,
            text: String::new(),
        })
    }

    fn close(self) -> (String, Node) {
        let Frame {
            name,
            mut children,
            text,
        } = self;
        let text = text.trim();

        let node = if children.is_empty() {
            if text.is_empty() {
                Node::Null
            } else {
                Node::Text(text.to_string())
            }
        } else {
            if !text.is_empty() {
                children.push("#text".to_string(), Node::Text(text.to_string()));
            }
            Node::Map(children)
        };

        (name, node)
    }
}

fn attach(stack: &mut [Frame], root: &mut Mapping, name: String, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(name, node),
        None => root.push(name, node),
    }
}

/// Converts an XML document into a [`Node::Map`] keyed by its root element.
///
/// Text is unescaped exactly once, so double-escaped markup such as
/// `&amp;lt;br/&amp;gt;` surfaces as the literal `&lt;br/&gt;`.
///
/// # Errors
///
/// Returns [`XmlError`] for malformed or unbalanced input, or a document with
/// no element.
pub fn parse_document(text: &str) -> Result<Node, XmlError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root = Mapping::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(Frame::open(&start)?),
            Event::Empty(start) => {
                let (name, node) = Frame::open(&start)?.close();
                attach(&mut stack, &mut root, name, node);
            }
            Event::End(_) => {
                let frame = stack.pop().ok_or(XmlError::Unbalanced)?;
                let (name, node) = frame.close();
                trace!(element = %name, "closed element");
                attach(&mut stack, &mut root, name, node);
            }
            Event::Text(content) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&content.unescape()?);
                }
            }
            Event::CData(content) => {
                if let Some(frame) = stack.last_mut() {
                    frame
                        .text
                        .push_str(&String::from_utf8_lossy(&content.into_inner()));
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(XmlError::Unclosed { element: open.name });
    }
    if root.is_empty() {
        return Err(XmlError::NoRootElement);
    }

    Ok(Node::Map(root))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_text_only_element_becomes_text() {
        let doc = parse_document("<rootTag><Award><AwardID>2023523</AwardID></Award></rootTag>")
            .unwrap();
        let id = doc.lookup(&["rootTag", "Award", "AwardID"]).unwrap();
        assert_eq!(id, &Node::Text("2023523".to_string()));
    }

    #[test]
    fn test_empty_and_self_closing_elements_become_null() {
        let doc = parse_document(
            "<rootTag><Award><ARRAAmount/><AbstractNarration></AbstractNarration></Award></rootTag>",
        )
        .unwrap();
        let award = doc.lookup(&["rootTag", "Award"]).unwrap();
        assert!(award.get("ARRAAmount").unwrap().is_null());
        assert!(award.get("AbstractNarration").unwrap().is_null());
    }

    #[test]
    fn test_whitespace_only_text_is_null() {
        let doc = parse_document("<a><b>   \n  </b></a>").unwrap();
        assert!(doc.lookup(&["a", "b"]).unwrap().is_null());
    }

    #[test]
    fn test_repeated_siblings_become_list() {
        let doc = parse_document(
            r"<rootTag><Award>
                <ProgramElement><Code>1650</Code><Text>BIOLOGICAL OCEANOGRAPHY</Text></ProgramElement>
                <ProgramElement><Code>1174</Code><Text>POPULATION DYNAMICS</Text></ProgramElement>
            </Award></rootTag>",
        )
        .unwrap();
        let programs = doc.lookup(&["rootTag", "Award", "ProgramElement"]).unwrap();
        match programs {
            Node::List(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(
                    items[1].get("Text").and_then(Node::as_text),
                    Some("POPULATION DYNAMICS")
                );
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_attributes_are_prefixed_and_text_kept() {
        let doc = parse_document(r#"<a><b kind="x">value</b><c id="7"/></a>"#).unwrap();
        let b = doc.lookup(&["a", "b"]).unwrap();
        assert_eq!(b.get("@kind").and_then(Node::as_text), Some("x"));
        assert_eq!(b.as_text(), Some("value"));
        let c = doc.lookup(&["a", "c"]).unwrap();
        assert_eq!(c.get("@id").and_then(Node::as_text), Some("7"));
    }

    #[test]
    fn test_text_is_unescaped_once() {
        let doc = parse_document(
            "<a><t>Intro.&amp;lt;br/&amp;gt;&amp;lt;br/&amp;gt;Body &amp; more</t></a>",
        )
        .unwrap();
        assert_eq!(
            doc.lookup(&["a", "t"]).and_then(Node::as_text),
            Some("Intro.&lt;br/&gt;&lt;br/&gt;Body & more")
        );
    }

    #[test]
    fn test_cdata_is_kept_verbatim() {
        let doc = parse_document("<a><t><![CDATA[x < y]]></t></a>").unwrap();
        assert_eq!(doc.lookup(&["a", "t"]).and_then(Node::as_text), Some("x < y"));
    }

    #[test]
    fn test_declaration_and_comments_are_ignored() {
        let doc = parse_document(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!-- export --><rootTag><Award/></rootTag>",
        )
        .unwrap();
        assert!(doc.lookup(&["rootTag", "Award"]).unwrap().is_null());
    }

    #[test]
    fn test_unclosed_element_is_error() {
        let result = parse_document("<rootTag><Award>");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_document_is_error() {
        assert!(matches!(parse_document(""), Err(XmlError::NoRootElement)));
        assert!(matches!(
            parse_document("<!-- nothing here -->"),
            Err(XmlError::NoRootElement)
        ));
    }
}
