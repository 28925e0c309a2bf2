//! Conversion of SVG shape elements into paths.

use crate::ast::Element;
use crate::error::{CrushError, Result};
use crate::group::{Drawable, Group};
use crate::number::parse_unit_number;
use crate::path::Path;
use crate::path_data::{parse_path_data, parse_points};
use crate::transform::parse_transform_attr;

/// Convert an element, and for groups all of its descendants.
pub fn convert_element(el: &Element) -> Result<Drawable> {
    match el.kind() {
        "g" => {
            if el.get_attr("transform").is_some() {
                tracing::debug!("group transform is not applied to its children");
            }
            let children = el
                .children
                .iter()
                .map(convert_element)
                .collect::<Result<Vec<_>>>()?;
            Ok(Group::new(children).into())
        }
        "path" => convert_path(el).map(Drawable::Path),
        "polygon" | "polyline" => convert_polygon(el).map(Drawable::Path),
        "rect" => convert_rect(el).map(Drawable::Path),
        "ellipse" => convert_ellipse(el).map(Drawable::Path),
        "circle" => convert_circle(el).map(Drawable::Path),
        other => Err(CrushError::UnsupportedElement(other.to_string())),
    }
}

pub fn convert_path(el: &Element) -> Result<Path> {
    let d = required(el, "path", "d")?;
    let path = parse_path_data(d)?;
    Ok(apply_transform(el, path))
}

pub fn convert_polygon(el: &Element) -> Result<Path> {
    let kind = if el.is("polyline") { "polyline" } else { "polygon" };
    let points = required(el, kind, "points")?;
    let path = parse_points(points)?;
    Ok(apply_transform(el, path))
}

pub fn convert_rect(el: &Element) -> Result<Path> {
    let x = number_or(el, "x", 0.0)?;
    let y = number_or(el, "y", 0.0)?;
    let width = parse_unit_number(required(el, "rect", "width")?)?;
    let height = parse_unit_number(required(el, "rect", "height")?)?;

    let mut path = Path::new();
    path.move_to(x, y);
    path.line_to(x + width, y);
    path.line_to(x + width, y + height);
    path.line_to(x, y + height);
    path.close();
    Ok(apply_transform(el, path))
}

// Ellipses and circles ignore their transform attribute.
pub fn convert_ellipse(el: &Element) -> Result<Path> {
    let cx = number_or(el, "cx", 0.0)?;
    let cy = number_or(el, "cy", 0.0)?;
    let rx = parse_unit_number(required(el, "ellipse", "rx")?)?;
    let ry = parse_unit_number(required(el, "ellipse", "ry")?)?;

    let mut path = Path::new();
    path.add_ellipse(cx, cy, rx, ry);
    Ok(path)
}

pub fn convert_circle(el: &Element) -> Result<Path> {
    let cx = number_or(el, "cx", 0.0)?;
    let cy = number_or(el, "cy", 0.0)?;
    let r = parse_unit_number(required(el, "circle", "r")?)?;

    let mut path = Path::new();
    path.add_ellipse(cx, cy, r, r);
    Ok(path)
}

fn apply_transform(el: &Element, path: Path) -> Path {
    match parse_transform_attr(el.get_attr("transform")) {
        Some(t) => t.transform_path(&path),
        None => path,
    }
}

fn required<'a>(el: &'a Element, element: &'static str, attr: &'static str) -> Result<&'a str> {
    el.get_attr(attr)
        .ok_or(CrushError::MissingAttribute { element, attr })
}

fn number_or(el: &Element, attr: &str, default: f64) -> Result<f64> {
    el.get_attr(attr).map_or(Ok(default), parse_unit_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Command;

    #[test]
    fn test_rect() {
        let el = Element::new("rect")
            .with_attr("x", "10")
            .with_attr("y", "20")
            .with_attr("width", "30")
            .with_attr("height", "40");
        let path = convert_rect(&el).unwrap();
        assert_eq!(
            path.commands(),
            &[
                Command::MoveTo { x: 10.0, y: 20.0 },
                Command::LineTo { x: 40.0, y: 20.0 },
                Command::LineTo { x: 40.0, y: 60.0 },
                Command::LineTo { x: 10.0, y: 60.0 },
                Command::ClosePath,
            ]
        );
    }

    #[test]
    fn test_rect_defaults_and_transform() {
        let el = Element::new("rect")
            .with_attr("width", "2px")
            .with_attr("height", "3")
            .with_attr("transform", "matrix(2 0 0 2 100 0)");
        let path = convert_rect(&el).unwrap();
        assert_eq!(path.commands()[0], Command::MoveTo { x: 100.0, y: 0.0 });
        assert_eq!(path.commands()[2], Command::LineTo { x: 104.0, y: 6.0 });
    }

    #[test]
    fn test_rect_requires_size() {
        let el = Element::new("rect").with_attr("width", "10");
        assert!(matches!(
            convert_rect(&el),
            Err(CrushError::MissingAttribute { attr: "height", .. })
        ));
    }

    #[test]
    fn test_polygon_is_left_open() {
        let el = Element::new("polygon").with_attr("points", "0,0 10,0 5,8");
        let path = convert_polygon(&el).unwrap();
        assert_eq!(path.len(), 3);
        assert!(!path.commands().contains(&Command::ClosePath));
    }

    #[test]
    fn test_circle_matches_add_ellipse() {
        let el = Element::new("circle")
            .with_attr("cx", "50")
            .with_attr("cy", "25")
            .with_attr("r", "10");
        let mut expected = Path::new();
        expected.add_ellipse(50.0, 25.0, 10.0, 10.0);
        assert_eq!(convert_circle(&el).unwrap(), expected);
    }

    #[test]
    fn test_ellipse_ignores_transform() {
        let el = Element::new("ellipse")
            .with_attr("rx", "4")
            .with_attr("ry", "2")
            .with_attr("transform", "matrix(1 0 0 1 100 100)");
        let path = convert_ellipse(&el).unwrap();
        assert_eq!(path.commands()[0], Command::MoveTo { x: -4.0, y: 0.0 });
    }

    #[test]
    fn test_path_applies_transform() {
        let el = Element::new("path")
            .with_attr("d", "M1 1 L2 2")
            .with_attr("transform", "matrix(1 0 0 1 10 20)");
        let path = convert_path(&el).unwrap();
        assert_eq!(path.commands()[1], Command::LineTo { x: 12.0, y: 22.0 });
    }

    #[test]
    fn test_nested_groups() {
        let el = Element::new("g")
            .with_child(Element::new("path").with_attr("d", "M0 0 H5"))
            .with_child(
                Element::new("g")
                    .with_attr("transform", "matrix(2 0 0 2 0 0)")
                    .with_child(Element::new("path").with_attr("d", "M1 1 V5")),
            );
        let drawable = convert_element(&el).unwrap();
        let flat = drawable.flatten();
        assert_eq!(flat.len(), 4);
        // the inner group's transform is not propagated
        assert_eq!(flat.commands()[3], Command::LineTo { x: 1.0, y: 5.0 });
    }

    #[test]
    fn test_unsupported_element() {
        let el = Element::new("g").with_child(Element::new("text"));
        assert!(matches!(
            convert_element(&el),
            Err(CrushError::UnsupportedElement(kind)) if kind == "text"
        ));
    }
}
