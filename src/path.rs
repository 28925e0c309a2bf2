//! Absolute path commands and their shortest path-data encoding.
//!
//! SVG path syntax: https://www.w3.org/TR/SVG/paths.html

use crate::number::{join_numbers, quantize, shortest};
use crate::transform::Transform;

/// Control point offset for a quarter-circle cubic: `4/3 * (sqrt(2) - 1)`.
pub const KAPPA: f64 = 0.552_284_749_830_793_6;

/// A path command. All coordinates are absolute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// M - Move to
    MoveTo { x: f64, y: f64 },
    /// L - Line to
    LineTo { x: f64, y: f64 },
    /// Q - Quadratic bezier
    QuadTo { x1: f64, y1: f64, x: f64, y: f64 },
    /// C - Cubic bezier
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    /// Z - Close path
    ClosePath,
}

impl Command {
    fn round_off(&mut self) {
        match self {
            Command::MoveTo { x, y } | Command::LineTo { x, y } => {
                round_all([x, y]);
            }
            Command::QuadTo { x1, y1, x, y } => {
                round_all([x1, y1, x, y]);
            }
            Command::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                round_all([x1, y1, x2, y2, x, y]);
            }
            Command::ClosePath => {}
        }
    }
}

fn round_all<const N: usize>(values: [&mut f64; N]) {
    for v in values {
        *v = v.round();
    }
}

/// An owned sequence of absolute commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<Command>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_commands(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(Command::MoveTo { x, y });
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(Command::LineTo { x, y });
    }

    pub fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        self.commands.push(Command::QuadTo { x1, y1, x, y });
    }

    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.commands.push(Command::CurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        });
    }

    pub fn close(&mut self) {
        self.commands.push(Command::ClosePath);
    }

    /// Append all of `other`'s commands.
    pub fn extend(&mut self, other: Path) {
        self.commands.extend(other.commands);
    }

    /// Append a closed ellipse made of four cubic arcs, starting at its
    /// leftmost point and running through the top first.
    pub fn add_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) {
        let dx = rx * KAPPA;
        let dy = ry * KAPPA;
        self.move_to(cx - rx, cy);
        self.curve_to(cx - rx, cy - dy, cx - dx, cy - ry, cx, cy - ry);
        self.curve_to(cx + dx, cy - ry, cx + rx, cy - dy, cx + rx, cy);
        self.curve_to(cx + rx, cy + dy, cx + dx, cy + ry, cx, cy + ry);
        self.curve_to(cx - dx, cy + ry, cx - rx, cy + dy, cx - rx, cy);
        self.close();
    }

    pub fn transform(&self, t: &Transform) -> Path {
        t.transform_path(self)
    }

    pub fn translate(&self, tx: f64, ty: f64) -> Path {
        let mut t = Transform::default();
        t.translate(tx, ty);
        t.transform_path(self)
    }

    pub fn scale(&self, sx: f64, sy: f64) -> Path {
        let mut t = Transform::default();
        t.scale(sx, sy);
        t.transform_path(self)
    }

    pub fn scale_uniform(&self, s: f64) -> Path {
        self.scale(s, s)
    }

    /// Round every coordinate, control points included, to an integer.
    pub fn round_off(&mut self) {
        for cmd in &mut self.commands {
            cmd.round_off();
        }
    }

    /// A path is already flat.
    pub fn flatten(&self) -> Path {
        self.clone()
    }

    /// Serialize to path data with `digits` decimal places.
    ///
    /// Lines pick the shortest of their absolute, relative, and horizontal or
    /// vertical encodings. Everything else is written in absolute form.
    ///
    /// The current point is tracked at output precision, so relative segments
    /// re-parse onto the printed grid instead of accumulating rounding error.
    pub fn to_path_data(&self, digits: u8) -> String {
        let q = |v: f64| quantize(v, digits);
        let mut out = String::new();
        let (mut x, mut y) = (0.0, 0.0);
        let (mut start_x, mut start_y) = (0.0, 0.0);

        for cmd in &self.commands {
            match *cmd {
                Command::MoveTo { x: nx, y: ny } => {
                    out.push('M');
                    out.push_str(&join_numbers(digits, &[nx, ny]));
                    (x, y) = (q(nx), q(ny));
                    (start_x, start_y) = (x, y);
                }
                Command::LineTo { x: nx, y: ny } => {
                    let to = (q(nx), q(ny));
                    out.push_str(&line_data(digits, (x, y), to));
                    (x, y) = to;
                }
                Command::QuadTo { x1, y1, x: nx, y: ny } => {
                    out.push('Q');
                    out.push_str(&join_numbers(digits, &[x1, y1, nx, ny]));
                    (x, y) = (q(nx), q(ny));
                }
                Command::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x: nx,
                    y: ny,
                } => {
                    out.push('C');
                    out.push_str(&join_numbers(digits, &[x1, y1, x2, y2, nx, ny]));
                    (x, y) = (q(nx), q(ny));
                }
                Command::ClosePath => {
                    out.push('z');
                    (x, y) = (start_x, start_y);
                }
            }
        }

        out
    }
}

// Both points are already quantized to `digits`.
fn line_data(digits: u8, from: (f64, f64), to: (f64, f64)) -> String {
    let (x, y) = from;
    let (nx, ny) = to;

    let mut candidates = vec![
        format!("L{}", join_numbers(digits, &[nx, ny])),
        format!("l{}", join_numbers(digits, &[nx - x, ny - y])),
    ];
    if nx == x {
        candidates.push(format!("V{}", join_numbers(digits, &[ny])));
        candidates.push(format!("v{}", join_numbers(digits, &[ny - y])));
    }
    if ny == y {
        candidates.push(format!("H{}", join_numbers(digits, &[nx])));
        candidates.push(format!("h{}", join_numbers(digits, &[nx - x])));
    }

    shortest(candidates).unwrap_or_default()
}
