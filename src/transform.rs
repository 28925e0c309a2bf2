//! 2D affine transforms.

use crate::number::parse_plain_number;
use crate::path::{Command, Path};

/// An affine matrix `[a, b, c, d, e, f]`:
///
/// ```text
/// x' = a*x + c*y + e
/// y' = b*x + d*y + f
/// ```
///
/// `translate` and `scale` compose in the current local frame, so calls
/// apply to the input coordinates in reverse call order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub m: [f64; 6],
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        m: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub fn new(m: [f64; 6]) -> Self {
        Self { m }
    }

    pub fn translate(&mut self, tx: f64, ty: f64) {
        let m = &mut self.m;
        m[4] += m[0] * tx + m[2] * ty;
        m[5] += m[1] * tx + m[3] * ty;
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        let m = &mut self.m;
        m[0] *= sx;
        m[1] *= sx;
        m[2] *= sy;
        m[3] *= sy;
    }

    pub fn scale_uniform(&mut self, s: f64) {
        self.scale(s, s);
    }

    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let m = &self.m;
        (x * m[0] + y * m[2] + m[4], x * m[1] + y * m[3] + m[5])
    }

    /// Map every coordinate of `path` through this matrix.
    pub fn transform_path(&self, path: &Path) -> Path {
        let commands = path
            .commands()
            .iter()
            .map(|cmd| match *cmd {
                Command::MoveTo { x, y } => {
                    let (x, y) = self.apply(x, y);
                    Command::MoveTo { x, y }
                }
                Command::LineTo { x, y } => {
                    let (x, y) = self.apply(x, y);
                    Command::LineTo { x, y }
                }
                Command::QuadTo { x1, y1, x, y } => {
                    let (x1, y1) = self.apply(x1, y1);
                    let (x, y) = self.apply(x, y);
                    Command::QuadTo { x1, y1, x, y }
                }
                Command::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    let (x1, y1) = self.apply(x1, y1);
                    let (x2, y2) = self.apply(x2, y2);
                    let (x, y) = self.apply(x, y);
                    Command::CurveTo {
                        x1,
                        y1,
                        x2,
                        y2,
                        x,
                        y,
                    }
                }
                Command::ClosePath => Command::ClosePath,
            })
            .collect();
        Path::from_commands(commands)
    }
}

/// Parse a `transform` attribute.
///
/// Only `matrix(a b c d e f)` with whitespace separated numbers is understood.
/// The call may appear anywhere in the value, and any amount of whitespace is
/// accepted around the arguments inside the parentheses, so
/// `matrix( 1 0 0 1 0 0 )` parses. Commas are not. Anything else is treated
/// as no transform at all.
pub fn parse_transform_attr(value: Option<&str>) -> Option<Transform> {
    let value = value?;
    let parsed = parse_matrix(value);
    if parsed.is_none() {
        tracing::debug!(transform = value, "ignoring unsupported transform");
    }
    parsed
}

fn parse_matrix(value: &str) -> Option<Transform> {
    let start = value.find("matrix(")? + "matrix(".len();
    let len = value[start..].find(')')?;
    let args = &value[start..start + len];
    if args.contains(',') {
        return None;
    }

    let mut m = [0.0; 6];
    let mut parts = args.split_whitespace();
    for slot in m.iter_mut() {
        *slot = parse_plain_number(parts.next()?).ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Transform::new(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_path() -> Path {
        let mut p = Path::new();
        p.move_to(1.0, 2.0);
        p.line_to(3.0, -4.0);
        p.curve_to(5.0, 6.0, 7.0, 8.0, 9.0, 10.0);
        p.close();
        p
    }

    #[test]
    fn test_translate_then_scale() {
        let mut t = Transform::default();
        t.translate(10.0, 20.0);
        t.scale(2.0, 3.0);
        // scale applies first, then the translation
        assert_eq!(t.apply(1.0, 1.0), (12.0, 23.0));
    }

    #[test]
    fn test_scale_then_translate() {
        let mut t = Transform::default();
        t.scale(2.0, 3.0);
        t.translate(10.0, 20.0);
        assert_eq!(t.apply(1.0, 1.0), (22.0, 63.0));
    }

    #[test]
    fn test_identity_is_noop() {
        let p = sample_path();
        assert_eq!(Transform::IDENTITY.transform_path(&p), p);
    }

    #[test]
    fn test_close_passes_through() {
        let mut t = Transform::default();
        t.translate(5.0, 5.0);
        let out = t.transform_path(&sample_path());
        assert_eq!(out.commands()[3], Command::ClosePath);
        assert_eq!(out.commands()[0], Command::MoveTo { x: 6.0, y: 7.0 });
    }

    #[test]
    fn test_composition_matches_sequential_application() {
        let p = sample_path();

        let mut a = Transform::default();
        a.translate(3.0, -1.0);
        a.scale(2.0, 2.0);
        let mut b = Transform::default();
        b.scale(0.5, 4.0);
        b.translate(-7.0, 2.0);

        // Applying A to the output of B is the single matrix A followed by B's ops.
        let sequential = a.transform_path(&b.transform_path(&p));

        let mut composed = Transform::default();
        composed.translate(3.0, -1.0);
        composed.scale(2.0, 2.0);
        composed.scale(0.5, 4.0);
        composed.translate(-7.0, 2.0);

        assert_eq!(composed.transform_path(&p), sequential);
    }

    #[test]
    fn test_parse_matrix() {
        let t = parse_transform_attr(Some("matrix(1 0 0 1 10 -20)")).unwrap();
        assert_eq!(t.m, [1.0, 0.0, 0.0, 1.0, 10.0, -20.0]);

        let t = parse_transform_attr(Some("  matrix(0.5 0 0 0.5 .25 1)  ")).unwrap();
        assert_eq!(t.apply(2.0, 2.0), (1.25, 2.0));

        let t = parse_transform_attr(Some("matrix( 1 0 0 1 0 0 )")).unwrap();
        assert_eq!(t, Transform::IDENTITY);

        let t = parse_transform_attr(Some("matrix(2\t0\n0 2  3 4)")).unwrap();
        assert_eq!(t.m, [2.0, 0.0, 0.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_unsupported_transforms_are_ignored() {
        assert_eq!(parse_transform_attr(None), None);
        assert_eq!(parse_transform_attr(Some("translate(10 20)")), None);
        assert_eq!(parse_transform_attr(Some("rotate(45)")), None);
        assert_eq!(parse_transform_attr(Some("matrix(1,0,0,1,10,20)")), None);
        assert_eq!(parse_transform_attr(Some("matrix(1 0 0 1 10)")), None);
        assert_eq!(parse_transform_attr(Some("matrix(1 0 0 1 10 20 30)")), None);
    }
}
