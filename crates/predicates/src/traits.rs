//! Core traits for the predicate engine.
//!
//! This module defines the Specification trait that every filter
//! criterion implements, plus the builder-style combinators available on
//! all of them.

use crate::specs::{AndSpecification, NotSpecification, OrSpecification};
use catalog::Item;

/// A reusable condition evaluated against a single catalog item.
///
/// New filter criteria are added by implementing this trait; the generic
/// filter never changes.
///
/// ## Design Note
/// - `Send + Sync` lets a specification be shared with the parallel filter
/// - Evaluation borrows the item, so specifications never mutate the catalog
pub trait Specification: Send + Sync {
    /// Returns true if `item` satisfies this condition.
    fn is_satisfied(&self, item: &Item) -> bool;

    /// Human-readable description of the condition, as it appears after
    /// "is" in an output line (e.g. "large and blue").
    fn describe(&self) -> String;

    /// True for combinators, whose description must be parenthesised
    /// when it appears inside another combinator.
    fn is_compound(&self) -> bool {
        false
    }
}

/// Description of `spec` as the operand of a combinator.
///
/// Compound operands are wrapped in parentheses so that
/// "not (large and blue)" and "(not large) and blue" stay distinct.
pub(crate) fn describe_operand<S: Specification + ?Sized>(spec: &S) -> String {
    if spec.is_compound() {
        format!("({})", spec.describe())
    } else {
        spec.describe()
    }
}

impl<S: Specification + ?Sized> Specification for &S {
    fn is_satisfied(&self, item: &Item) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn is_compound(&self) -> bool {
        (**self).is_compound()
    }
}

impl<S: Specification + ?Sized> Specification for Box<S> {
    fn is_satisfied(&self, item: &Item) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn is_compound(&self) -> bool {
        (**self).is_compound()
    }
}

/// Combinators for building compound specifications.
///
/// ## Usage
/// ```ignore
/// let spec = SizeSpecification::new(Size::Large).and(ColorSpecification::new(Color::Blue));
/// ```
pub trait SpecificationExt: Specification + Sized {
    /// Both `self` and `other` must hold.
    fn and<O: Specification>(self, other: O) -> AndSpecification<Self, O> {
        AndSpecification::new(self, other)
    }

    /// Either `self` or `other` must hold.
    fn or<O: Specification>(self, other: O) -> OrSpecification<Self, O> {
        OrSpecification::new(self, other)
    }

    /// `self` must not hold.
    fn not(self) -> NotSpecification<Self> {
        NotSpecification::new(self)
    }

    /// Erase the concrete type, for specifications assembled at runtime.
    fn boxed(self) -> Box<dyn Specification>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<S: Specification> SpecificationExt for S {}
