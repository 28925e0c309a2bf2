//! Mapping a document onto the canonical output grid.

use crate::Options;
use crate::document::Document;
use crate::path::Path;

/// Side length of the output coordinate grid.
pub const GRID_SIZE: f64 = 1000.0;

/// Flatten `doc` into one path on the `GRID_SIZE` x `GRID_SIZE` grid.
///
/// The steps run in a fixed order, each in the space produced by the one
/// before: view box scale, view box origin, grid scale, rounding.
pub fn normalize(doc: &Document, options: &Options) -> Path {
    let mut path = doc.root.flatten();

    path = path.scale_uniform(doc.scale);
    if doc.tx != 0.0 || doc.ty != 0.0 {
        path = path.translate(-doc.tx, -doc.ty);
    }

    let factor = GRID_SIZE / doc.width;
    path = path.scale_uniform(factor);
    tracing::debug!(
        view_box_scale = doc.scale,
        grid_factor = factor,
        commands = path.len(),
        "normalized path"
    );

    if options.round {
        path.round_off();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Command;

    fn doc(svg: &str) -> Document {
        Document::parse(svg).unwrap()
    }

    #[test]
    fn test_view_box_and_grid_compose() {
        let d = doc(
            r#"<svg width="100" viewBox="0 0 200 100"><path d="M10 10 L20 30"/></svg>"#,
        );
        let path = normalize(&d, &Options::default());
        // 0.5 for the view box, then 10 for the grid
        assert_eq!(
            path.commands(),
            &[
                Command::MoveTo { x: 50.0, y: 50.0 },
                Command::LineTo { x: 100.0, y: 150.0 },
            ]
        );
    }

    #[test]
    fn test_view_box_origin_is_removed() {
        let d = doc(r#"<svg viewBox="-50 100 500 500"><rect x="-50" y="100" width="500" height="500"/></svg>"#);
        let path = normalize(&d, &Options::default());
        assert_eq!(path.commands()[0], Command::MoveTo { x: 0.0, y: 0.0 });
        assert_eq!(path.commands()[2], Command::LineTo { x: 1000.0, y: 1000.0 });
    }

    #[test]
    fn test_origin_is_removed_after_view_box_scale() {
        let d = doc(
            r#"<svg width="100" viewBox="10 20 200 100"><path d="M10 20 L210 20"/></svg>"#,
        );
        let path = normalize(&d, &Options::default());
        // (10, 20) scales to (5, 10) before the origin is subtracted
        assert_eq!(
            path.commands(),
            &[
                Command::MoveTo { x: -50.0, y: -100.0 },
                Command::LineTo { x: 950.0, y: -100.0 },
            ]
        );
    }

    #[test]
    fn test_rounding_can_be_disabled() {
        let d = doc(r#"<svg width="3"><path d="M1 1 L2 2"/></svg>"#);
        let rounded = normalize(&d, &Options::default());
        assert_eq!(rounded.commands()[0], Command::MoveTo { x: 333.0, y: 333.0 });

        let options = Options {
            round: false,
            ..Options::default()
        };
        let exact = normalize(&d, &options);
        match exact.commands()[0] {
            Command::MoveTo { x, .. } => assert!((x - 1000.0 / 3.0).abs() < 1e-9),
            other => panic!("expected MoveTo, got {other:?}"),
        }
    }
}
