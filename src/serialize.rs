//! Writing the output document.

use crate::ast::Element;
use crate::normalize::GRID_SIZE;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Build the output document: a single path on the canonical grid.
pub fn output_document(path_data: &str) -> Element {
    let size = format!("{}", GRID_SIZE);
    Element::new("svg")
        .with_attr("width", size.as_str())
        .with_attr("height", size.as_str())
        .with_attr("viewBox", format!("0 0 {size} {size}"))
        .with_attr("xmlns", SVG_NAMESPACE)
        .with_child(Element::new("path").with_attr("d", path_data))
}

/// Serialize an element tree to compact XML.
pub fn serialize(root: &Element) -> String {
    let mut out = String::new();
    serialize_element(&mut out, root);
    out
}

fn serialize_element(out: &mut String, elem: &Element) {
    out.push('<');
    out.push_str(&elem.name.full_name());

    for attr in &elem.attributes {
        out.push(' ');
        out.push_str(&attr.name.full_name());
        out.push_str("=\"");
        push_escaped_attr(out, &attr.value);
        out.push('"');
    }

    if elem.children.is_empty() {
        out.push_str("/>");
    } else {
        out.push('>');
        for child in &elem.children {
            serialize_element(out, child);
        }
        out.push_str("</");
        out.push_str(&elem.name.full_name());
        out.push('>');
    }
}

fn push_escaped_attr(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
