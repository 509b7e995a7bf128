//! Negation of a specification.

use crate::traits::{describe_operand, Specification};
use catalog::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotSpecification<S> {
    inner: S,
}

impl<S: Specification> NotSpecification<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Specification> Specification for NotSpecification<S> {
    fn is_satisfied(&self, item: &Item) -> bool {
        !self.inner.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("not {}", describe_operand(&self.inner))
    }

    fn is_compound(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::{ColorSpecification, SizeSpecification};
    use crate::traits::SpecificationExt;
    use catalog::{Color, Size};

    #[test]
    fn test_not_inverts_for_every_item() {
        for size in Size::ALL {
            let inner = SizeSpecification::new(size);
            let spec = NotSpecification::new(inner);
            for actual_size in Size::ALL {
                for color in Color::ALL {
                    let item = Item::new("x", color, actual_size);
                    assert_eq!(spec.is_satisfied(&item), !inner.is_satisfied(&item));
                }
            }
        }
    }

    #[test]
    fn test_describe() {
        let spec = NotSpecification::new(SizeSpecification::new(Size::Small));
        assert_eq!(spec.describe(), "not small");
    }

    #[test]
    fn test_describe_groups_compound_operands() {
        let negated_pair = SizeSpecification::new(Size::Large)
            .and(ColorSpecification::new(Color::Blue))
            .not();
        let negated_size = SizeSpecification::new(Size::Large)
            .not()
            .and(ColorSpecification::new(Color::Blue));

        assert_eq!(negated_pair.describe(), "not (large and blue)");
        assert_eq!(negated_size.describe(), "(not large) and blue");

        let tree = Item::new("Tree", Color::Green, Size::Large);
        assert!(negated_pair.is_satisfied(&tree));
        assert!(!negated_size.is_satisfied(&tree));
    }
}
