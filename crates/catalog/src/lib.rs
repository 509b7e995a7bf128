//! # Catalog Crate
//!
//! This crate holds the in-memory product catalog that the predicate
//! engine filters.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Item, Color, Size, Catalog)
//! - **parser**: Parse attribute names into `Color` / `Size`
//! - **error**: Error types for attribute parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, Color};
//!
//! let catalog = Catalog::sample();
//! let green = catalog.iter().filter(|item| item.color() == Color::Green).count();
//!
//! println!("{} of {} items are green", green, catalog.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    // Core types
    Item,
    Catalog,
    // Enums
    Color,
    Size,
};
