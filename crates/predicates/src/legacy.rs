//! Hand-written, one-method-per-attribute filtering.
//!
//! Every new filter dimension needs a new method here, so this type has
//! to be edited each time the criteria grow. [`crate::BetterFilter`]
//! replaces it; it stays as the point of comparison.

use catalog::{Color, Item, Size};

#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyFilter;

impl LegacyFilter {
    pub fn new() -> Self {
        Self
    }

    /// Items with the given color, in input order.
    pub fn filter_by_color<'a>(&self, items: &'a [Item], color: Color) -> Vec<&'a Item> {
        let mut result = Vec::new();
        for item in items {
            if item.color() == color {
                result.push(item);
            }
        }
        result
    }

    /// Items with the given size, in input order.
    pub fn filter_by_size<'a>(&self, items: &'a [Item], size: Size) -> Vec<&'a Item> {
        let mut result = Vec::new();
        for item in items {
            if item.size() == size {
                result.push(item);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    #[test]
    fn test_legacy_filter_by_color() {
        let catalog = Catalog::sample();
        let filtered = LegacyFilter::new().filter_by_color(catalog.items(), Color::Green);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name(), "Apple");
        assert_eq!(filtered[1].name(), "Tree");
    }

    #[test]
    fn test_legacy_filter_by_size() {
        let catalog = Catalog::sample();
        let filter = LegacyFilter::new();

        assert_eq!(filter.filter_by_size(catalog.items(), Size::Large).len(), 2);
        assert!(filter.filter_by_size(catalog.items(), Size::Medium).is_empty());
        assert!(filter.filter_by_size(&[], Size::Small).is_empty());
    }
}
