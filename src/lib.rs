//! svgcrush - crush an SVG document into a single path
//!
//! Every shape in the document is converted to path commands, flattened into
//! one path, mapped onto a 1000x1000 grid, rounded, and written back as the
//! shortest path data svgcrush knows how to produce.

mod ast;
mod document;
mod error;
mod group;
mod normalize;
mod number;
mod parse;
mod path;
mod path_data;
mod serialize;
mod shapes;
mod transform;

pub use ast::*;
pub use document::*;
pub use error::*;
pub use group::*;
pub use normalize::*;
pub use number::{
    format_number, join_numbers, parse_plain_number, parse_unit_number, quantize, shortest,
};
pub use parse::*;
pub use path::*;
pub use path_data::*;
pub use serialize::*;
pub use shapes::*;
pub use transform::*;

/// Crush an SVG string into path data with default settings.
pub fn crush(svg: &str) -> Result<String> {
    crush_with_options(svg, &Options::default())
}

/// Crush an SVG string into path data with custom options.
pub fn crush_with_options(svg: &str, options: &Options) -> Result<String> {
    let doc = Document::parse(svg)?;
    let path = normalize(&doc, options);
    Ok(path.to_path_data(options.precision))
}

/// Crush an SVG string into a complete SVG document holding one path.
pub fn crush_to_svg(svg: &str, options: &Options) -> Result<String> {
    let d = crush_with_options(svg, options)?;
    Ok(serialize(&output_document(&d)))
}

/// Name for the crushed copy of `name`: `icon.svg` becomes `icon.min.svg`.
pub fn min_file_name(name: &str) -> String {
    let base_start = name.rfind('/').map_or(0, |i| i + 1);
    match name[base_start..].rfind('.') {
        Some(dot) => {
            let (stem, ext) = name.split_at(base_start + dot);
            format!("{stem}.min{ext}")
        }
        None => format!("{name}.min"),
    }
}

/// Crushing options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Number of decimal places for coordinates (default: 0)
    pub precision: u8,
    /// Round coordinates to integers before serializing (default: true)
    pub round: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            precision: 0,
            round: true,
        }
    }
}
