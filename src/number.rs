//! Number formatting and parsing shared by the path, transform and document
//! layers.

use crate::error::{CrushError, Result};

/// Format a number with exactly `digits` decimal places.
///
/// Negative zero (which rounding of small negative values produces) is printed
/// as `0` so that it never eats a separator.
pub fn format_number(n: f64, digits: u8) -> String {
    let s = format!("{:.prec$}", n, prec = digits as usize);
    match s.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => s,
    }
}

/// Snap a value to the number `format_number` would print for it.
pub fn quantize(n: f64, digits: u8) -> f64 {
    format_number(n, digits).parse().unwrap_or(n)
}

/// Join numbers into path-data argument form.
///
/// A comma goes before every non-negative value after the first; negative
/// values are already delimited by their `-`.
pub fn join_numbers(digits: u8, values: &[f64]) -> String {
    let mut out = String::new();
    for (i, v) in values.iter().enumerate() {
        let formatted = format_number(*v, digits);
        if i > 0 && !formatted.starts_with('-') {
            out.push(',');
        }
        out.push_str(&formatted);
    }
    out
}

/// Pick the shortest candidate. Ties keep the earliest one.
pub fn shortest<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let mut best: Option<String> = None;
    for candidate in candidates {
        match &best {
            Some(b) if b.len() <= candidate.len() => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// True for characters that may continue a number run.
pub(crate) fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Parse a bare `-?[0-9.]+` number.
pub fn parse_plain_number(s: &str) -> Result<f64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.chars().all(is_number_char) {
        return Err(CrushError::MalformedNumber(s.to_string()));
    }
    s.parse()
        .map_err(|_| CrushError::MalformedNumber(s.to_string()))
}

/// Parse a length attribute: a plain number, optionally suffixed with `px`.
pub fn parse_unit_number(s: &str) -> Result<f64> {
    let s = s.trim();
    let split = s
        .char_indices()
        .find(|&(i, c)| !(is_number_char(c) || (i == 0 && c == '-')))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let (number, unit) = s.split_at(split);

    match unit {
        "" | "px" => parse_plain_number(number),
        u if !number.is_empty() && u.chars().all(|c| c.is_ascii_alphabetic() || c == '%') => {
            Err(CrushError::UnsupportedUnit(u.to_string()))
        }
        _ => Err(CrushError::MalformedNumber(s.to_string())),
    }
}
