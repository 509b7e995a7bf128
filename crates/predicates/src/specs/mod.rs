//! Specification implementations.
//!
//! Attribute specifications:
//! - ColorSpecification: item has a given color
//! - SizeSpecification: item has a given size
//!
//! Combinators:
//! - AndSpecification: both children hold
//! - OrSpecification: at least one child holds
//! - NotSpecification: the child does not hold

pub mod and;
pub mod color;
pub mod not;
pub mod or;
pub mod size;

pub use and::AndSpecification;
pub use color::ColorSpecification;
pub use not::NotSpecification;
pub use or::OrSpecification;
pub use size::SizeSpecification;
