//! Specification-based filtering of catalog items.
//!
//! This crate provides:
//! - Specification trait and its attribute implementations
//! - Combinators (and / or / not) for compound conditions
//! - BetterFilter, the generic filter that accepts any specification
//! - LegacyFilter, the per-attribute methods it replaces
//!
//! ## Architecture
//! Filtering is closed for modification and open for extension:
//! `BetterFilter::filter` is written once, and every new criterion is a
//! new `Specification` implementation or a composition of existing ones.
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{Catalog, Color, Size};
//! use predicates::specs::*;
//! use predicates::{BetterFilter, SpecificationExt};
//!
//! let catalog = Catalog::sample();
//! let spec = SizeSpecification::new(Size::Large).and(ColorSpecification::new(Color::Blue));
//!
//! for item in BetterFilter::new().filter(&catalog, &spec) {
//!     println!("- {} is {}", item.name(), spec.describe());
//! }
//! ```

pub mod traits;
pub mod specs;
pub mod filter;
pub mod legacy;

// Re-export main types
pub use traits::{Specification, SpecificationExt};
pub use filter::BetterFilter;
pub use legacy::LegacyFilter;
pub use specs::{
    AndSpecification, ColorSpecification, NotSpecification, OrSpecification, SizeSpecification,
};
