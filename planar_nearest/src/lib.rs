// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Nearest: closest pair between two sets of axis-aligned boxes.
//!
//! Given two sets of [`CenterBox`]es, find the pair `(a, b)` with `a` from the
//! first set and `b` from the second that are closest together, and report the
//! distance along with a representative point on each box.
//!
//! - [`compute_distance_between_boxes`] defines the per-pair distance.
//! - [`find_nearest_naive`] compares every pair.
//! - [`find_nearest_grid`] buckets the second set into a uniform grid and
//!   compares each box of the first set only against nearby buckets.
//! - [`find_nearest_points_between_box_sets`] picks between the two.
//!
//! # Example
//!
//! ```rust
//! use planar_nearest::{CenterBox, Point, find_nearest_points_between_box_sets};
//!
//! let set_a = [
//!     CenterBox::new(Point::new(1.0, 1.0), 2.0, 2.0),
//!     CenterBox::new(Point::new(5.0, 5.0), 2.0, 2.0),
//! ];
//! let set_b = [
//!     CenterBox::new(Point::new(5.0, 2.0), 2.0, 2.0),
//!     CenterBox::new(Point::new(8.0, 8.0), 2.0, 2.0),
//! ];
//!
//! let nearest = find_nearest_points_between_box_sets(&set_a, &set_b);
//! assert_eq!(nearest.distance, 1.0);
//! ```
//!
//! ## Empty sets
//!
//! If either set is empty the result is [`BoxPairDistance::NONE`]: an infinite
//! distance with both points at the origin. Check
//! [`BoxPairDistance::is_found`] before using the points.
//!
//! ## Choosing a strategy
//!
//! - `Naive`: exact, `O(|A|·|B|)`. Best for small sets.
//! - `Grid`: near-linear when boxes are of similar size and spread evenly. It is
//!   a heuristic and can miss a global minimum that lies more than about one
//!   cell away; see [`find_nearest_grid`].
//! - `Auto` *(default)*: `Naive` while `|A|·|B|` is at most
//!   [`NearestParams::grid_threshold`], `Grid` above it.

#![no_std]

extern crate alloc;

mod grid;
mod naive;
mod pair;

pub use grid::find_nearest_grid;
pub use naive::find_nearest_naive;
pub use pair::{BoxPairDistance, compute_distance_between_boxes, compute_gap_between_boxes};

pub use planar_bounds::{CenterBox, Point};

/// How [`find_nearest_points_between_box_sets_with`] searches.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SearchStrategy {
    /// Pick by input size; see [`NearestParams::grid_threshold`].
    #[default]
    Auto,
    /// Compare every pair.
    Naive,
    /// Use the uniform bucket grid.
    Grid,
}

/// Parameters for [`find_nearest_points_between_box_sets_with`].
#[derive(Clone, Copy, Debug)]
pub struct NearestParams {
    /// Search strategy.
    pub strategy: SearchStrategy,
    /// With [`SearchStrategy::Auto`], the largest pair count `|A|·|B|` that is
    /// still searched exhaustively.
    pub grid_threshold: usize,
}

impl Default for NearestParams {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::Auto,
            grid_threshold: 64,
        }
    }
}

impl NearestParams {
    fn resolve(&self, len_a: usize, len_b: usize) -> SearchStrategy {
        match self.strategy {
            SearchStrategy::Auto if len_a.saturating_mul(len_b) <= self.grid_threshold => {
                SearchStrategy::Naive
            }
            SearchStrategy::Auto => SearchStrategy::Grid,
            other => other,
        }
    }
}

/// Nearest pair between two box sets using default [`NearestParams`].
#[inline]
pub fn find_nearest_points_between_box_sets(
    set_a: &[CenterBox],
    set_b: &[CenterBox],
) -> BoxPairDistance {
    find_nearest_points_between_box_sets_with(set_a, set_b, &NearestParams::default())
}

/// Nearest pair between two box sets.
pub fn find_nearest_points_between_box_sets_with(
    set_a: &[CenterBox],
    set_b: &[CenterBox],
    params: &NearestParams,
) -> BoxPairDistance {
    let strategy = params.resolve(set_a.len(), set_b.len());
    log::trace!(
        "nearest box search: {} x {} boxes, {strategy:?}",
        set_a.len(),
        set_b.len()
    );
    match strategy {
        SearchStrategy::Grid => find_nearest_grid(set_a, set_b),
        SearchStrategy::Naive | SearchStrategy::Auto => find_nearest_naive(set_a, set_b),
    }
}
