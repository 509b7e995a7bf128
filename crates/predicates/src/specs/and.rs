//! Logical AND over two specifications.

use crate::traits::{describe_operand, Specification};
use catalog::Item;

/// Satisfied when both children are satisfied.
///
/// ## Algorithm
/// Evaluates `first`, then `second` only if `first` held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A: Specification, B: Specification> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Specification, B: Specification> Specification for AndSpecification<A, B> {
    fn is_satisfied(&self, item: &Item) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!(
            "{} and {}",
            describe_operand(&self.first),
            describe_operand(&self.second)
        )
    }

    fn is_compound(&self) -> bool {
        true
    }
}
