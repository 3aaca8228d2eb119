//! Composite sorter: an ordered chain of strategies where ties in one
//! strategy fall through to the next.

use crate::strategy::SortStrategy;
use itertools::Itertools;
use std::cmp::Ordering;

/// Inputs at least this long are sorted with rayon in [`CompositeSorter::par_sort`]
pub const PARALLEL_THRESHOLD: usize = 8192;

type BoxedStrategy<T> = Box<dyn SortStrategy<T> + Send + Sync>;

/// Lexicographic combination of strategies.
///
/// Strategies are consulted in the order they were added. The first one that
/// reports a difference decides; if all report `Equal` (or none are
/// configured) the items are equal, and sorting keeps them in input order.
pub struct CompositeSorter<T: ?Sized> {
    strategies: Vec<BoxedStrategy<T>>,
}

impl<T: ?Sized> CompositeSorter<T> {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Append a strategy with the lowest priority so far
    pub fn add_strategy<S>(mut self, strategy: S) -> Self
    where
        S: SortStrategy<T> + Send + Sync + 'static,
    {
        self.push_strategy(strategy);
        self
    }

    /// In-place form of [`add_strategy`](Self::add_strategy)
    pub fn push_strategy<S>(&mut self, strategy: S)
    where
        S: SortStrategy<T> + Send + Sync + 'static,
    {
        self.strategies.push(Box::new(strategy));
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.strategies
            .iter()
            .map(|strategy| strategy.compare(a, b))
            .find(|cmp| *cmp != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl<T> CompositeSorter<T> {
    /// Stable sort into a new vector; `items` is left untouched
    pub fn sort(&self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        let mut sorted = items.to_vec();
        if sorted.len() < 2 {
            return sorted;
        }

        log::debug!(
            "sorting {} items with {} strategies",
            sorted.len(),
            self.strategies.len()
        );
        self.sort_in_place(&mut sorted);
        sorted
    }

    /// Stable sort of a caller-owned slice
    pub fn sort_in_place(&self, items: &mut [T]) {
        items.sort_by(|a, b| self.compare(a, b));
    }

    /// Same result as [`sort`](Self::sort), using rayon for large inputs
    pub fn par_sort(&self, items: &[T]) -> Vec<T>
    where
        T: Clone + Send + Sync,
    {
        use rayon::prelude::*;

        if items.len() < PARALLEL_THRESHOLD || num_cpus::get() < 2 {
            return self.sort(items);
        }

        log::debug!(
            "parallel sort of {} items with {} strategies",
            items.len(),
            self.strategies.len()
        );
        let mut sorted = items.to_vec();
        // par_sort_by is a stable merge sort
        sorted.par_sort_by(|a, b| self.compare(a, b));
        sorted
    }

    /// 1-based position of the first item ordered before its predecessor
    pub fn first_disorder(&self, items: &[T]) -> Option<usize> {
        items
            .iter()
            .tuple_windows()
            .position(|(prev, next)| self.compare(prev, next) == Ordering::Greater)
            .map(|idx| idx + 2)
    }

    pub fn is_sorted(&self, items: &[T]) -> bool {
        self.first_disorder(items).is_none()
    }
}

impl<T: ?Sized> Default for CompositeSorter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> std::fmt::Debug for CompositeSorter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeSorter")
            .field("strategies", &self.strategies.len())
            .finish()
    }
}

impl<T: ?Sized> SortStrategy<T> for CompositeSorter<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        CompositeSorter::compare(self, a, b)
    }
}
