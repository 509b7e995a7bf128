//! Error types for the catalog crate.
//!
//! The catalog itself never fails: every lookup and scan is total.
//! Errors only show up at the text boundary, when attribute names typed
//! by a user are turned into `Color` or `Size` values.

use thiserror::Error;

/// Errors that can occur while reading catalog attributes from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// An attribute name did not match any known variant
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
