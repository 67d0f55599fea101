//! The wall engine: lazily sorted, filterable brick collections.
//!
//! # Invariants
//!
//! - Sorting is stable: bricks equal under every criterion keep their
//!   relative input order.
//! - The sorted view is computed once per wall and cached.
//! - Filtering never re-sorts and never mutates the original wall.

mod comparator;
mod filters;

pub use comparator::{SortDirection, SortKey};
pub use filters::FilterMode;

use std::ops::Index;
use std::sync::OnceLock;

use crate::brick::Brick;

/// Ordered, lazily-sorted, filterable collection of bricks.
#[derive(Debug)]
pub struct Wall {
    bricks: Vec<Brick>,
    criteria: Vec<SortKey>,
    sorted: OnceLock<Vec<Brick>>,
}

impl Wall {
    /// Creates a wall over the given bricks. An empty criteria list keeps
    /// the input order as-is.
    pub fn new(bricks: Vec<Brick>, criteria: Vec<SortKey>) -> Self {
        Self {
            bricks,
            criteria,
            sorted: OnceLock::new(),
        }
    }

    /// Reconstructs a wall from a previously sorted brick sequence.
    ///
    /// This is the persistable form of a wall: the criteria (which may
    /// hold arbitrary closures) are gone, the sorted view is already warm.
    pub fn from_sorted(bricks: Vec<Brick>) -> Self {
        let sorted = OnceLock::new();
        let _ = sorted.set(bricks.clone());
        Self {
            bricks,
            criteria: Vec::new(),
            sorted,
        }
    }

    /// Number of bricks. Consistent with the content after filtering.
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// The criteria this wall sorts by.
    pub fn criteria(&self) -> &[SortKey] {
        &self.criteria
    }

    /// The bricks sorted by the criteria.
    ///
    /// Computed on first access and cached for the lifetime of the wall;
    /// under concurrent access the computation races harmlessly to the
    /// same result and only one wins the cache.
    pub fn sorted(&self) -> &[Brick] {
        self.sorted.get_or_init(|| {
            let mut bricks = self.bricks.clone();
            // slice::sort_by is stable, which equal-brick ordering relies on
            bricks.sort_by(|left, right| {
                comparator::compare_bricks(left, right, &self.criteria)
            });
            bricks
        })
    }

    /// The sorted sequence as an owned value, suitable for
    /// [`Wall::from_sorted`].
    pub fn sorted_bricks(&self) -> Vec<Brick> {
        self.sorted().to_vec()
    }

    /// The brick at the given position of the sorted view.
    pub fn get(&self, index: usize) -> Option<&Brick> {
        self.sorted().get(index)
    }

    /// Iterates the sorted view in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Brick> {
        self.sorted().iter()
    }

    /// Keeps the bricks matching the predicate. See [`Wall::filter_with`].
    pub fn filter<F>(&self, predicate: F) -> Wall
    where
        F: Fn(&Brick) -> bool,
    {
        self.filter_with(&[&predicate as &dyn Fn(&Brick) -> bool], FilterMode::And)
    }

    /// Returns a new wall keeping only the bricks accepted by the
    /// predicates: with [`FilterMode::And`] every predicate must accept,
    /// with [`FilterMode::Or`] at least one.
    ///
    /// Survivors keep their sorted-view order and the new wall's cache is
    /// pre-filled with them, so further sorts are no-ops. The original
    /// wall is left untouched.
    pub fn filter_with(
        &self,
        predicates: &[&dyn Fn(&Brick) -> bool],
        mode: FilterMode,
    ) -> Wall {
        let filtered = filters::apply(self.sorted(), predicates, mode);
        let sorted = OnceLock::new();
        let _ = sorted.set(filtered.clone());
        Wall {
            bricks: filtered,
            criteria: self.criteria.clone(),
            sorted,
        }
    }
}

impl Index<usize> for Wall {
    type Output = Brick;

    fn index(&self, index: usize) -> &Brick {
        &self.sorted()[index]
    }
}

impl<'a> IntoIterator for &'a Wall {
    type Item = &'a Brick;
    type IntoIter = std::slice::Iter<'a, Brick>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
