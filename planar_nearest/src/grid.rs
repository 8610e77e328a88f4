// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform bucket grid for the accelerated nearest-pair search.
//!
//! The grid is built once per query over the second box set and discarded on
//! return. Cells are stored sparsely, so large empty regions between clusters
//! cost nothing.

use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::{HashMap, HashSet};
use planar_bounds::{Bounds, CenterBox};
use smallvec::SmallVec;

use crate::naive::find_nearest_naive;
use crate::pair::{BoxPairDistance, compute_distance_between_boxes};

/// Map a coordinate to a grid coordinate along one axis, rounding towards -∞.
///
/// Cell keys are `i32`, so values beyond that range clamp to `i32::MIN` or
/// `i32::MAX` and stay ordered; the neighborhood ring is then added with
/// saturating arithmetic. NaN maps to cell `0`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Grid cell indices are intentionally i32; out-of-range values are saturated."
)]
#[inline]
fn cell_coord(value: f64, origin: f64, cell_size: f64) -> i32 {
    debug_assert!(cell_size > 0.0, "grid cell_size must be strictly positive");
    let t = (value - origin) / cell_size;
    let coord = t as i32;

    // Round towards -∞ (the cast above has already truncated).
    if t < 0.0 && f64::from(coord) > t {
        coord.saturating_sub(1)
    } else {
        coord
    }
}

#[derive(Default)]
struct Cell {
    slots: SmallVec<[usize; 8]>,
}

/// Sparse uniform grid holding indices into a box slice.
pub(crate) struct BucketGrid {
    cell_size: f64,
    origin_x: f64,
    origin_y: f64,
    cells: HashMap<(i32, i32), Cell>,
}

impl Debug for BucketGrid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BucketGrid")
            .field("cell_size", &self.cell_size)
            .field("origin_x", &self.origin_x)
            .field("origin_y", &self.origin_y)
            .field("cells", &self.cells.len())
            .finish_non_exhaustive()
    }
}

/// Inclusive cell index ranges along x and y.
type CellRange = ((i32, i32), (i32, i32));

impl BucketGrid {
    pub(crate) fn new(cell_size: f64, origin_x: f64, origin_y: f64) -> Self {
        debug_assert!(cell_size > 0.0, "cell_size must be strictly positive");
        Self {
            cell_size,
            origin_x,
            origin_y,
            cells: HashMap::new(),
        }
    }

    fn axis_range(&self, min: f64, max: f64, origin: f64) -> (i32, i32) {
        let c0 = cell_coord(min, origin, self.cell_size);
        let c1 = cell_coord(max, origin, self.cell_size);
        if c0 <= c1 { (c0, c1) } else { (c1, c0) }
    }

    fn covered_cells(&self, bounds: &Bounds) -> CellRange {
        (
            self.axis_range(bounds.min_x, bounds.max_x, self.origin_x),
            self.axis_range(bounds.min_y, bounds.max_y, self.origin_y),
        )
    }

    /// Add `slot` to every cell overlapped by `bounds`.
    pub(crate) fn insert(&mut self, slot: usize, bounds: &Bounds) {
        let ((ix0, ix1), (iy0, iy1)) = self.covered_cells(bounds);
        for ix in ix0..=ix1 {
            for iy in iy0..=iy1 {
                self.cells.entry((ix, iy)).or_default().slots.push(slot);
            }
        }
    }

    /// Visit each slot stored in the cells covered by `bounds`, widened by
    /// `ring` cells on every side. Each slot is reported at most once per call.
    pub(crate) fn visit_neighborhood<F: FnMut(usize)>(
        &self,
        bounds: &Bounds,
        ring: i32,
        seen: &mut HashSet<usize>,
        mut f: F,
    ) {
        seen.clear();
        let ((ix0, ix1), (iy0, iy1)) = self.covered_cells(bounds);
        for ix in ix0.saturating_sub(ring)..=ix1.saturating_add(ring) {
            for iy in iy0.saturating_sub(ring)..=iy1.saturating_add(ring) {
                if let Some(cell) = self.cells.get(&(ix, iy)) {
                    for &slot in &cell.slots {
                        if seen.insert(slot) {
                            f(slot);
                        }
                    }
                }
            }
        }
    }

    pub(crate) fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// Mean of every box's average extent `(width + height) / 2`.
fn mean_extent(set_a: &[CenterBox], set_b: &[CenterBox]) -> f64 {
    let count = set_a.len() + set_b.len();
    let total: f64 = set_a
        .iter()
        .chain(set_b)
        .map(|b| (b.width + b.height) / 2.0)
        .sum();
    total / count as f64
}

/// Grid-accelerated nearest pair between `set_a` and `set_b`.
///
/// Boxes from `set_b` are bucketed into a uniform grid whose cell size is the
/// mean box extent. Each box from `set_a` is compared only against `set_b`
/// boxes found in its own cells and one ring of neighbors.
///
/// This is a heuristic. A pair separated by more than about one cell can be
/// missed even when it is the global minimum, so the result may be larger
/// than [`find_nearest_naive`] for inputs with widely varying box sizes or
/// sparse clusters. If no `set_a` box has any `set_b` neighbor at all, or the
/// boxes are all degenerate so no cell size exists, the naive scan answers
/// instead.
pub fn find_nearest_grid(set_a: &[CenterBox], set_b: &[CenterBox]) -> BoxPairDistance {
    if set_a.is_empty() || set_b.is_empty() {
        return BoxPairDistance::NONE;
    }

    let cell_size = mean_extent(set_a, set_b);
    if !(cell_size > 0.0 && cell_size.is_finite()) {
        log::debug!("nearest box grid: unusable cell size {cell_size}, scanning all pairs");
        return find_nearest_naive(set_a, set_b);
    }

    let b_bounds: Vec<Bounds> = set_b.iter().map(CenterBox::bounds).collect();
    let world = set_a
        .iter()
        .map(CenterBox::bounds)
        .chain(b_bounds.iter().copied())
        .reduce(|acc, b| acc.union(&b))
        .unwrap_or(Bounds::new(0.0, 0.0, 0.0, 0.0));

    let mut grid = BucketGrid::new(cell_size, world.min_x, world.min_y);
    for (slot, bounds) in b_bounds.iter().enumerate() {
        grid.insert(slot, bounds);
    }
    log::trace!(
        "nearest box grid: cell size {cell_size}, {} occupied cells for {} boxes",
        grid.cell_count(),
        set_b.len()
    );

    let mut best = BoxPairDistance::NONE;
    let mut seen = HashSet::new();
    for a in set_a {
        grid.visit_neighborhood(&a.bounds(), 1, &mut seen, |slot| {
            let candidate = compute_distance_between_boxes(a, &set_b[slot]);
            if candidate.distance < best.distance {
                best = candidate;
            }
        });
    }

    if !best.is_found() {
        log::debug!("nearest box grid: no pair within one cell, scanning all pairs");
        return find_nearest_naive(set_a, set_b);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Point;

    const EPSILON: f64 = 1e-9;

    fn cbox(x: f64, y: f64, w: f64, h: f64) -> CenterBox {
        CenterBox::new(Point::new(x, y), w, h)
    }

    #[test]
    fn cell_coord_floors_negative_values() {
        assert_eq!(cell_coord(-0.5, 0.0, 1.0), -1);
        assert_eq!(cell_coord(-1.0, 0.0, 1.0), -1);
        assert_eq!(cell_coord(0.0, 0.0, 1.0), 0);
        assert_eq!(cell_coord(2.5, 0.0, 1.0), 2);
        assert_eq!(cell_coord(7.0, 2.0, 2.5), 2);
    }

    #[test]
    fn cell_coord_saturates() {
        assert_eq!(cell_coord(1e20, 0.0, 1.0), i32::MAX);
        assert_eq!(cell_coord(-1e20, 0.0, 1.0), i32::MIN);
        assert_eq!(cell_coord(f64::NAN, 0.0, 1.0), 0);
    }

    #[test]
    fn neighborhood_reports_each_slot_once() {
        let mut grid = BucketGrid::new(1.0, 0.0, 0.0);
        // Spans a 3x3 block of cells.
        grid.insert(7, &Bounds::new(0.5, 0.5, 2.5, 2.5));
        grid.insert(9, &Bounds::new(10.0, 10.0, 10.5, 10.5));

        let mut seen = HashSet::new();
        let mut hits = vec![];
        grid.visit_neighborhood(&Bounds::new(1.0, 1.0, 1.5, 1.5), 1, &mut seen, |s| {
            hits.push(s);
        });
        assert_eq!(hits, vec![7]);
    }

    #[test]
    fn neighborhood_includes_adjacent_ring_only() {
        let mut grid = BucketGrid::new(1.0, 0.0, 0.0);
        grid.insert(0, &Bounds::new(2.2, 0.2, 2.8, 0.8)); // cell (2, 0)
        grid.insert(1, &Bounds::new(3.2, 0.2, 3.8, 0.8)); // cell (3, 0)

        let mut seen = HashSet::new();
        let mut hits = vec![];
        // Query box sits in cell (1, 0); ring 1 reaches cell (2, 0) only.
        grid.visit_neighborhood(&Bounds::new(1.2, 0.2, 1.8, 0.8), 1, &mut seen, |s| {
            hits.push(s);
        });
        assert_eq!(hits, vec![0]);
    }

    #[test]
    fn grid_finds_aligned_pair() {
        let a = [cbox(1.0, 1.0, 2.0, 2.0), cbox(5.0, 5.0, 2.0, 2.0)];
        let b = [cbox(5.0, 2.0, 2.0, 2.0), cbox(8.0, 8.0, 2.0, 2.0)];
        let r = find_nearest_grid(&a, &b);
        assert!((r.distance - 1.0).abs() < EPSILON);
    }

    #[test]
    fn grid_falls_back_when_nothing_is_nearby() {
        let a = [cbox(0.0, 0.0, 1.0, 1.0)];
        let b = [cbox(100.0, 0.0, 1.0, 1.0)];
        let r = find_nearest_grid(&a, &b);
        assert!((r.distance - 99.0).abs() < EPSILON);
    }

    #[test]
    fn grid_handles_degenerate_boxes() {
        let a = [cbox(0.0, 0.0, 0.0, 0.0)];
        let b = [cbox(3.0, 4.0, 0.0, 0.0)];
        let r = find_nearest_grid(&a, &b);
        assert!((r.distance - 5.0).abs() < EPSILON);
    }

    #[test]
    fn grid_search_can_miss_pairs_outside_the_neighborhood() {
        // Unit boxes give a unit cell size with the grid origin at (0, 0).
        // The (a0, b0) pair is 2.05 apart but three cells away from each
        // other. The (a1, b1) pair is farther apart yet sits in adjacent
        // cells, so the grid reports it.
        let a = [cbox(0.5, 0.5, 1.0, 1.0), cbox(10.5, 0.5, 1.0, 1.0)];
        let b = [cbox(3.55, 0.5, 1.0, 1.0), cbox(13.4, 3.4, 1.0, 1.0)];

        let exact = find_nearest_naive(&a, &b);
        let approx = find_nearest_grid(&a, &b);
        assert!((exact.distance - 2.05).abs() < EPSILON);
        assert!(approx.distance > exact.distance + 0.5);
    }
}
