//! Logical OR over two specifications.

use crate::traits::{describe_operand, Specification};
use catalog::Item;

/// Satisfied when at least one child is satisfied; `second` is skipped
/// once `first` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrSpecification<A, B> {
    first: A,
    second: B,
}

impl<A: Specification, B: Specification> OrSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Specification, B: Specification> Specification for OrSpecification<A, B> {
    fn is_satisfied(&self, item: &Item) -> bool {
        self.first.is_satisfied(item) || self.second.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!(
            "{} or {}",
            describe_operand(&self.first),
            describe_operand(&self.second)
        )
    }

    fn is_compound(&self) -> bool {
        true
    }
}
