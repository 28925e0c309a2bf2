use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrushError {
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid SVG: {0}")]
    InvalidSvg(String),

    #[error("Could not parse number: {0}")]
    MalformedNumber(String),

    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(String),

    #[error("Unknown token: {0:?}")]
    UnknownToken(char),

    #[error("Unknown path command: {0}")]
    UnknownCommand(char),

    #[error("Expected a command letter, found number {0}")]
    UnexpectedNumber(f64),

    #[error("Missing argument for path command {0}")]
    MissingArgument(char),

    #[error("<{element}> is missing required attribute {attr:?}")]
    MissingAttribute {
        element: &'static str,
        attr: &'static str,
    },

    #[error("Unsupported SVG element: <{0}>")]
    UnsupportedElement(String),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

pub type Result<T, E = CrushError> = std::result::Result<T, E>;
