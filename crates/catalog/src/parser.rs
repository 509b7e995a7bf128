//! Parsing of attribute names into catalog enums.
//!
//! Matching is case-insensitive and ignores surrounding whitespace, so
//! "Green", " green " and "GREEN" all parse to `Color::Green`.

use crate::error::{CatalogError, Result};
use crate::types::{Color, Size};
use std::str::FromStr;

/// Parse a color name
///
/// Example: "blue" -> Ok(Color::Blue)
pub fn parse_color(s: &str) -> Result<Color> {
    match s.trim().to_ascii_lowercase().as_str() {
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "blue" => Ok(Color::Blue),
        _ => Err(CatalogError::InvalidValue {
            field: "color".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parse a size name
///
/// Example: "Large" -> Ok(Size::Large)
pub fn parse_size(s: &str) -> Result<Size> {
    match s.trim().to_ascii_lowercase().as_str() {
        "small" => Ok(Size::Small),
        "medium" => Ok(Size::Medium),
        "large" => Ok(Size::Large),
        _ => Err(CatalogError::InvalidValue {
            field: "size".to_string(),
            value: s.to_string(),
        }),
    }
}

impl FromStr for Color {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

impl FromStr for Size {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        parse_size(s)
    }
}
