//! XML text to element tree.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::ast::*;
use crate::error::{CrushError, Result};

/// Parse an XML document and return its root element.
pub fn parse_xml(svg: &str) -> Result<Element> {
    let mut reader = Reader::from_str(svg);

    loop {
        match reader.read_event()? {
            Event::Start(start) => return parse_element(&mut reader, &start),
            Event::Empty(start) => return parse_element_start(&start),
            Event::Eof => return Err(CrushError::InvalidSvg("No root element found".into())),
            // declarations, doctypes, comments and whitespace before the root
            _ => {}
        }
    }
}

fn parse_element(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Element> {
    let mut element = parse_element_start(start)?;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                element.children.push(parse_element(reader, &start)?);
            }
            Event::Empty(start) => {
                element.children.push(parse_element_start(&start)?);
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(CrushError::InvalidSvg("Unexpected end of file".into()));
            }
            _ => {}
        }
    }

    Ok(element)
}

fn parse_element_start(start: &BytesStart) -> Result<Element> {
    let name_bytes = start.name();
    let name = std::str::from_utf8(name_bytes.as_ref())?;

    let mut element = Element {
        name: QName::parse(name),
        attributes: Vec::new(),
        children: Vec::new(),
    };

    for attr in start.attributes() {
        let attr = attr.map_err(|e| CrushError::InvalidSvg(format!("Invalid attribute: {}", e)))?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        element.attributes.push(Attribute {
            name: QName::parse(key),
            value: value.into_owned(),
        });
    }

    Ok(element)
}
