//! Core domain types for the product catalog.
//!
//! - Enums for the fixed attribute sets (Color, Size)
//! - An immutable Item record
//! - Catalog, the owned, ordered, read-only collection everything is filtered from

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Attribute Enums
// =============================================================================

/// Product color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// Every color, in declaration order
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// Lowercase name used in output lines and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Every size, in declaration order
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Item
// =============================================================================

/// A single product in the catalog.
///
/// Fields are private and only readable through accessors, so an item
/// cannot change once it has been built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    color: Color,
    size: Size,
}

impl Item {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Ordered, read-only collection of items.
///
/// The catalog owns its items for its whole lifetime. Consumers only ever
/// get shared borrows (`&Item`, `&[Item]`), so results handed out by a
/// filter stay valid for as long as the catalog does and the catalog can
/// be shared freely between readers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The demonstration catalog: Apple, Tree and House.
    pub fn sample() -> Self {
        [
            Item::new("Apple", Color::Green, Size::Small),
            Item::new("Tree", Color::Green, Size::Large),
            Item::new("House", Color::Blue, Size::Large),
        ]
        .into_iter()
        .collect()
    }

    /// All items, in catalog order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by exact name (first match in catalog order)
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }
}

impl From<Vec<Item>> for Catalog {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
