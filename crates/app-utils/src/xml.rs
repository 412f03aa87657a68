//! Minimal XML element tree on top of `quick-xml` events
//!
//! Policy documents carry rule kinds as attribute *names*
//! (`<topics publish="ALLOW">`), which does not map onto serde fields, so
//! they are read into this tree first and interpreted afterwards.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// An XML element with its attributes, child elements and text content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Element name
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order
    pub children: Vec<Element>,
    /// Text content as written; whitespace between child elements is dropped
    pub text: String,
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(Error::xml)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value().map_err(Error::xml)?.into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    /// Value of attribute `key`, if present
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Parse `input` into its root element
///
/// Comments, processing instructions and the XML declaration are skipped.
/// Leaf text is kept exactly as written, including surrounding whitespace.
///
/// # Errors
///
/// Returns `Error::Xml` for malformed input, an empty document or more
/// than one root element.
pub fn parse_element_tree(input: &str) -> Result<Element> {
    let mut reader = Reader::from_str(input);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event().map_err(Error::xml)? {
            Event::Start(start) => stack.push(Element::from_start(&start)?),
            Event::Empty(start) => {
                let element = Element::from_start(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let mut element = stack
                    .pop()
                    .ok_or_else(|| Error::Xml("unexpected closing tag".to_string()))?;
                if !element.children.is_empty() && element.text.trim().is_empty() {
                    element.text.clear();
                }
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text.unescape().map_err(Error::xml)?);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current
                        .text
                        .push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(Error::Xml("unexpected end of document".to_string()));
    }
    root.ok_or_else(|| Error::Xml("document has no root element".to_string()))
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(Error::Xml("document has more than one root element".to_string())),
    }
    Ok(())
}
