//! Spreadsheet XML reader
//!
//! Builds an [`Element`] tree from document bytes. Whitespace-only text
//! between elements is dropped; entity references and CDATA sections are
//! decoded.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::element::Element;
use crate::error::{XmlError, XmlResult};

/// Read a document from a file path
pub fn read_file<P: AsRef<Path>>(path: P) -> XmlResult<Element> {
    let file = File::open(path)?;
    read_document(BufReader::new(file))
}

/// Read a document from a string
pub fn read_str(xml: &str) -> XmlResult<Element> {
    read_document(xml.as_bytes())
}

/// Read a document from a buffered reader, returning its root element
pub fn read_document<R: BufRead>(reader: R) -> XmlResult<Element> {
    let mut xml_reader = Reader::from_reader(reader);
    xml_reader.trim_text(false);

    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match xml_reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                stack.push(open_element(&e)?);
            }
            Event::Empty(e) => {
                let element = open_element(&e)?;
                close_element(element, &mut stack, &mut root);
            }
            Event::End(e) => {
                let found = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let element = match stack.pop() {
                    Some(element) => element,
                    None => {
                        return Err(XmlError::MismatchedTag {
                            expected: String::new(),
                            found,
                        })
                    }
                };
                if element.name != found {
                    return Err(XmlError::MismatchedTag {
                        expected: element.name,
                        found,
                    });
                }
                close_element(element, &mut stack, &mut root);
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                push_text(&text, &mut stack);
            }
            Event::CData(e) => {
                let bytes = e.into_inner();
                push_text(&String::from_utf8_lossy(&bytes), &mut stack);
            }
            Event::Eof => break,
            // Declarations, processing instructions (mso-application), comments
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.pop() {
        return Err(XmlError::UnclosedElement(open.name));
    }

    root.ok_or(XmlError::NoRoot)
}

fn open_element(e: &BytesStart<'_>) -> XmlResult<Element> {
    let mut element = Element::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());
    for attr in e.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn close_element(element: Element, stack: &mut [Element], root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_some() {
                log::warn!("Ignoring extra top-level element <{}>", element.name);
            } else {
                *root = Some(element);
            }
        }
    }
}

fn push_text(text: &str, stack: &mut [Element]) {
    if text.trim().is_empty() {
        return;
    }
    let Some(current) = stack.last_mut() else {
        return;
    };
    match current.children.last_mut() {
        Some(previous) => previous.tail.push_str(text),
        None => current.text.push_str(text),
    }
}
