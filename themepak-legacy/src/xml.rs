//! Minimal XML element tree
//!
//! The legacy formats use tiny documents (a handful of nested elements
//! holding text), so a full DOM is overkill. This builds a plain element
//! tree from quick-xml events, enough for name lookups and text extraction.

use crate::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use themepak_core::color;

/// A parsed XML element
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// Element tag name
    pub name: String,
    /// Concatenated direct text content
    pub text: String,
    /// Direct child elements, in document order
    pub children: Vec<Element>,
}

impl Element {
    /// Finds the first direct child with the given tag name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }
}

/// Parses an XML document and returns its root element
pub fn parse(document: &str) -> Result<Element> {
    let mut reader = Reader::from_str(document);
    // stack[0] is a synthetic holder for the root
    let mut stack = vec![Element::default()];

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                stack.push(Element {
                    name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
                    ..Element::default()
                });
            }
            Event::Empty(start) => {
                let element = Element {
                    name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
                    ..Element::default()
                };
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(element);
                }
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&text));
                }
            }
            Event::End(_) => {
                let element = stack.pop().unwrap_or_default();
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(element);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let mut holder = stack.pop().ok_or(Error::NoRootElement)?;
    if holder.children.is_empty() {
        return Err(Error::NoRootElement);
    }
    Ok(holder.children.remove(0))
}

/// Reads a packed RGB color from an element with `red`/`green`/`blue`
/// decimal text children. A missing or unparsable channel is an error.
pub fn color_from_elem(element: &Element) -> Result<u32> {
    let channel = |name: &'static str| -> Result<u32> {
        let child = element.child(name).ok_or(Error::MissingColorChannel(name))?;
        Ok(child.text.trim().parse()?)
    };

    Ok(color::pack_rgb(
        channel("red")?,
        channel("green")?,
        channel("blue")?,
    ))
}
