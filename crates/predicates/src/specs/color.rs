//! Specification matching items of one color.

use crate::traits::Specification;
use catalog::{Color, Item};

/// Satisfied by items whose color equals the stored color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Specification for ColorSpecification {
    fn is_satisfied(&self, item: &Item) -> bool {
        item.color() == self.color
    }

    fn describe(&self) -> String {
        self.color.to_string()
    }
}
