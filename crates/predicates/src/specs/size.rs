//! Specification matching items of one size.

use crate::traits::Specification;
use catalog::{Item, Size};

/// Satisfied by items whose size equals the stored size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Specification for SizeSpecification {
    fn is_satisfied(&self, item: &Item) -> bool {
        item.size() == self.size
    }

    fn describe(&self) -> String {
        self.size.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Color;

    #[test]
    fn test_matches_exactly_its_size() {
        for wanted in Size::ALL {
            let spec = SizeSpecification::new(wanted);
            for actual in Size::ALL {
                let item = Item::new("x", Color::Red, actual);
                assert_eq!(spec.is_satisfied(&item), actual == wanted);
            }
        }
    }

    #[test]
    fn test_describe() {
        let spec = SizeSpecification::new(Size::Large);
        assert_eq!(spec.size(), Size::Large);
        assert_eq!(spec.describe(), "large");
        assert!(!spec.is_compound());
    }
}
