//! The generic, specification-driven filter.
//!
//! `BetterFilter` scans items in order and keeps borrowed references to
//! the ones a specification accepts. It never needs to change when new
//! criteria appear: those arrive as new `Specification` implementations.

use crate::traits::Specification;
use catalog::Item;
use rayon::prelude::*;
use tracing;

/// Filters items with any `Specification`.
///
/// ## Usage
/// ```ignore
/// let catalog = Catalog::sample();
/// let green = BetterFilter::new().filter(&catalog, &ColorSpecification::new(Color::Green));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BetterFilter;

impl BetterFilter {
    pub fn new() -> Self {
        Self
    }

    /// Keep every item satisfying `spec`.
    ///
    /// ## Algorithm
    /// Linear scan in input order; each accepted item is pushed as a
    /// reference, so the result is an order-preserving subsequence of the
    /// input with no copies of item data. An empty input, or no match,
    /// yields an empty Vec.
    ///
    /// # Arguments
    /// * `items` - Anything yielding `&Item`: a `&Catalog`, a slice, or a
    ///   previous result via `.iter().copied()`
    /// * `spec` - The condition to test
    pub fn filter<'a, I, S>(&self, items: I, spec: &S) -> Vec<&'a Item>
    where
        I: IntoIterator<Item = &'a Item>,
        S: Specification + ?Sized,
    {
        let mut scanned = 0usize;
        let result: Vec<&'a Item> = items
            .into_iter()
            .inspect(|_| scanned += 1)
            .filter(|item| spec.is_satisfied(item))
            .collect();

        tracing::debug!(
            "Filter applied: {} (input count: {}, output count: {})",
            spec.describe(),
            scanned,
            result.len()
        );
        result
    }

    /// Same contract as [`BetterFilter::filter`], evaluated in parallel
    /// with Rayon. Output order matches the input order.
    pub fn par_filter<'a, S>(&self, items: &'a [Item], spec: &S) -> Vec<&'a Item>
    where
        S: Specification + ?Sized,
    {
        let result: Vec<&'a Item> = items
            .par_iter()
            .filter(|item| spec.is_satisfied(item))
            .collect();

        tracing::debug!(
            "Parallel filter applied: {} (input count: {}, output count: {})",
            spec.describe(),
            items.len(),
            result.len()
        );
        result
    }
}
