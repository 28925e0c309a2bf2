//! Path data and point list parsing.
//!
//! Only a subset of the path grammar is understood: `M m L l H h V v C c S s
//! Z z`. Every coordinate group needs its own command letter, and numbers
//! have no exponent.

use crate::error::{CrushError, Result};
use crate::number::is_number_char;
use crate::path::Path;

/// A lexical token of path data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Command(char),
    Number(f64),
}

/// Split path data into command letters and numbers.
pub fn tokenize_path_data(d: &str) -> Result<Vec<Token>> {
    Lexer::new(d).collect()
}

/// Split a `points` list into numbers. Letters are not allowed.
pub fn tokenize_points(points: &str) -> Result<Vec<f64>> {
    let mut lexer = Lexer::new(points);
    let mut numbers = Vec::new();
    while let Some(c) = lexer.skip_separators() {
        if !starts_number(c) {
            return Err(CrushError::UnknownToken(c));
        }
        numbers.push(lexer.lex_number()?);
    }
    Ok(numbers)
}

fn starts_number(c: char) -> bool {
    is_number_char(c) || c == '-'
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Skip commas and whitespace, returning the next significant character.
    fn skip_separators(&mut self) -> Option<char> {
        while matches!(self.peek()?, ',' | ' ' | '\t' | '\n' | '\r') {
            self.bump();
        }
        self.peek()
    }

    fn lex_number(&mut self) -> Result<f64> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.bump();
        }
        while self.peek().is_some_and(is_number_char) {
            self.bump();
        }

        let s = &self.input[start..self.pos];
        s.parse()
            .map_err(|_| CrushError::MalformedNumber(s.to_string()))
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.skip_separators()?;
        if c.is_ascii_alphabetic() {
            self.bump();
            return Some(Ok(Token::Command(c)));
        }
        if starts_number(c) {
            return Some(self.lex_number().map(Token::Number));
        }
        // Poison the lexer so iteration stops after the error.
        self.pos = self.input.len();
        Some(Err(CrushError::UnknownToken(c)))
    }
}

/// Parser state carried between commands.
#[derive(Debug, Default)]
struct Cursor {
    x: f64,
    y: f64,
    /// Start of the current subpath, where `z` returns to.
    start: (f64, f64),
    /// Second control point of the previous command, if it was a cubic.
    ctrl: Option<(f64, f64)>,
}

impl Cursor {
    /// First control point of a smooth cubic: the previous second control
    /// point mirrored about the current point, or the current point itself
    /// when the previous command was not a cubic.
    fn reflected_ctrl(&self) -> (f64, f64) {
        match self.ctrl {
            Some((x2, y2)) => (self.x + (self.x - x2), self.y + (self.y - y2)),
            None => (self.x, self.y),
        }
    }
}

/// Parse path data into an absolute [`Path`].
pub fn parse_path_data(d: &str) -> Result<Path> {
    let tokens = tokenize_path_data(d)?;
    let mut args = Args {
        tokens: tokens.into_iter(),
        cmd: ' ',
    };
    let mut cur = Cursor::default();
    let mut path = Path::new();

    while let Some(token) = args.tokens.next() {
        let cmd = match token {
            Token::Command(c) => c,
            Token::Number(n) => return Err(CrushError::UnexpectedNumber(n)),
        };
        args.cmd = cmd;

        let mut ctrl = None;
        match cmd {
            'M' | 'm' => {
                let (x, y) = args.pair()?;
                (cur.x, cur.y) = if cmd == 'm' {
                    (cur.x + x, cur.y + y)
                } else {
                    (x, y)
                };
                cur.start = (cur.x, cur.y);
                path.move_to(cur.x, cur.y);
            }
            'L' => {
                (cur.x, cur.y) = args.pair()?;
                path.line_to(cur.x, cur.y);
            }
            'l' => {
                let (dx, dy) = args.pair()?;
                cur.x += dx;
                cur.y += dy;
                path.line_to(cur.x, cur.y);
            }
            'H' => {
                cur.x = args.number()?;
                path.line_to(cur.x, cur.y);
            }
            'h' => {
                cur.x += args.number()?;
                path.line_to(cur.x, cur.y);
            }
            'V' => {
                cur.y = args.number()?;
                path.line_to(cur.x, cur.y);
            }
            'v' => {
                cur.y += args.number()?;
                path.line_to(cur.x, cur.y);
            }
            'C' | 'c' => {
                let (ox, oy) = if cmd == 'c' { (cur.x, cur.y) } else { (0.0, 0.0) };
                let (x1, y1) = args.pair()?;
                let (x2, y2) = args.pair()?;
                let (x, y) = args.pair()?;
                let (x1, y1, x2, y2) = (ox + x1, oy + y1, ox + x2, oy + y2);
                (cur.x, cur.y) = (ox + x, oy + y);
                path.curve_to(x1, y1, x2, y2, cur.x, cur.y);
                ctrl = Some((x2, y2));
            }
            'S' | 's' => {
                let (x1, y1) = cur.reflected_ctrl();
                let (ox, oy) = if cmd == 's' { (cur.x, cur.y) } else { (0.0, 0.0) };
                let (x2, y2) = args.pair()?;
                let (x, y) = args.pair()?;
                let (x2, y2) = (ox + x2, oy + y2);
                (cur.x, cur.y) = (ox + x, oy + y);
                path.curve_to(x1, y1, x2, y2, cur.x, cur.y);
                ctrl = Some((x2, y2));
            }
            'Z' | 'z' => {
                (cur.x, cur.y) = cur.start;
                path.close();
            }
            c => return Err(CrushError::UnknownCommand(c)),
        }
        cur.ctrl = ctrl;
    }

    Ok(path)
}

struct Args {
    tokens: std::vec::IntoIter<Token>,
    cmd: char,
}

impl Args {
    fn number(&mut self) -> Result<f64> {
        match self.tokens.next() {
            Some(Token::Number(n)) => Ok(n),
            _ => Err(CrushError::MissingArgument(self.cmd)),
        }
    }

    fn pair(&mut self) -> Result<(f64, f64)> {
        Ok((self.number()?, self.number()?))
    }
}

/// Parse a `points` list into a polyline: a move to the first pair, then a
/// line to each following pair. The path is left open.
pub fn parse_points(points: &str) -> Result<Path> {
    let values = tokenize_points(points)?;
    let pairs = values.chunks_exact(2);
    if let [dangling] = pairs.remainder() {
        return Err(CrushError::MalformedNumber(format!(
            "odd number of coordinates, dangling {dangling}"
        )));
    }

    let mut path = Path::new();
    for (i, pair) in pairs.enumerate() {
        let (x, y) = (pair[0], pair[1]);
        if i == 0 {
            path.move_to(x, y);
        } else {
            path.line_to(x, y);
        }
    }
    Ok(path)
}
