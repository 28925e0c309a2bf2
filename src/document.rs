//! The geometry of a parsed SVG document.

use crate::ast::Element;
use crate::error::{CrushError, Result};
use crate::group::Group;
use crate::number::{parse_plain_number, parse_unit_number};
use crate::parse::parse_xml;
use crate::shapes::convert_element;

/// A `viewBox`: `minX minY width height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Parse four whitespace separated numbers. Returns `None` if the value
    /// does not have that shape.
    pub fn parse(s: &str) -> Option<ViewBox> {
        let mut parts = s.split_whitespace().map(|p| parse_plain_number(p).ok());
        let vb = ViewBox {
            x: parts.next()??,
            y: parts.next()??,
            width: parts.next()??,
            height: parts.next()??,
        };
        Some(vb)
    }
}

/// A parsed document: its size in pixels, how its view box maps onto that
/// size, and its shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    /// Declared width over view box width.
    pub scale: f64,
    /// View box origin.
    pub tx: f64,
    pub ty: f64,
    pub root: Group,
}

impl Document {
    /// Parse SVG text.
    pub fn parse(svg: &str) -> Result<Document> {
        let root = parse_xml(svg)?;
        Document::from_element(&root)
    }

    /// Build a document from an already parsed `<svg>` element.
    pub fn from_element(svg: &Element) -> Result<Document> {
        if !svg.is("svg") {
            return Err(CrushError::InvalidSvg(format!(
                "root element is <{}>, expected <svg>",
                svg.name.full_name()
            )));
        }

        let view_box = svg.get_attr("viewBox").and_then(|vb| {
            let parsed = ViewBox::parse(vb);
            if parsed.is_none() {
                tracing::debug!(view_box = vb, "ignoring malformed viewBox");
            }
            parsed
        });
        let width = svg.get_attr("width").map(parse_unit_number).transpose()?;
        let height = svg.get_attr("height").map(parse_unit_number).transpose()?;

        let width = width
            .or(view_box.map(|vb| vb.width))
            .ok_or_else(|| CrushError::InvalidSvg("document has neither width nor viewBox".into()))?;
        let height = height.or(view_box.map(|vb| vb.height)).unwrap_or(width);
        if width <= 0.0 {
            return Err(CrushError::InvalidSvg(format!("width must be positive, got {width}")));
        }

        let (scale, tx, ty) = match view_box {
            Some(vb) if vb.width <= 0.0 => {
                return Err(CrushError::InvalidSvg(format!(
                    "viewBox width must be positive, got {}",
                    vb.width
                )));
            }
            Some(vb) => (width / vb.width, vb.x, vb.y),
            None => (1.0, 0.0, 0.0),
        };

        let children = svg
            .children
            .iter()
            .map(convert_element)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(width, height, scale, tx, ty, children = children.len(), "parsed document");

        Ok(Document {
            width,
            height,
            scale,
            tx,
            ty,
            root: Group::new(children),
        })
    }
}
