// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-form bounds arithmetic.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::Bounds;

/// Determines whether two bounds overlap in any way.
///
/// Edges are part of the bounds, so bounds that only share an edge or a
/// corner are considered to overlap.
///
/// # Examples
///
/// ```
/// use planar_bounds::{Bounds, bounds_overlap};
///
/// let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
/// assert!(bounds_overlap(&a, &Bounds::new(5.0, 5.0, 15.0, 15.0)));
/// assert!(bounds_overlap(&a, &Bounds::new(10.0, 0.0, 20.0, 10.0)));
/// assert!(!bounds_overlap(&a, &Bounds::new(11.0, 0.0, 20.0, 10.0)));
/// ```
#[inline]
pub fn bounds_overlap(b1: &Bounds, b2: &Bounds) -> bool {
    !(b1.max_x < b2.min_x || b2.max_x < b1.min_x || b1.max_y < b2.min_y || b2.max_y < b1.min_y)
}

/// The overlapping region of two bounds, or `None` if they are disjoint.
///
/// Touching bounds produce a zero-width or zero-height result.
#[inline]
pub fn bounds_intersection(b1: &Bounds, b2: &Bounds) -> Option<Bounds> {
    let min_x = b1.min_x.max(b2.min_x);
    let min_y = b1.min_y.max(b2.min_y);
    let max_x = b1.max_x.min(b2.max_x);
    let max_y = b1.max_y.min(b2.max_y);

    if min_x > max_x || min_y > max_y {
        return None;
    }
    Some(Bounds::new(min_x, min_y, max_x, max_y))
}

/// Area of the overlapping region. Zero for disjoint or touching bounds.
#[inline]
pub fn bounds_area_overlap(b1: &Bounds, b2: &Bounds) -> f64 {
    let overlap_x = (b1.max_x.min(b2.max_x) - b1.min_x.max(b2.min_x)).max(0.0);
    let overlap_y = (b1.max_y.min(b2.max_y) - b1.min_y.max(b2.min_y)).max(0.0);
    overlap_x * overlap_y
}

/// Minimum Euclidean distance between two bounds; zero when they overlap or touch.
#[inline]
pub fn bounds_distance(b1: &Bounds, b2: &Bounds) -> f64 {
    let dx = if b1.max_x < b2.min_x {
        b2.min_x - b1.max_x
    } else if b2.max_x < b1.min_x {
        b1.min_x - b2.max_x
    } else {
        0.0
    };
    let dy = if b1.max_y < b2.min_y {
        b2.min_y - b1.max_y
    } else if b2.max_y < b1.min_y {
        b1.min_y - b2.max_y
    } else {
        0.0
    };
    (dx * dx + dy * dy).sqrt()
}

/// Whether `p` lies inside or on the boundary of `bounds`.
#[inline]
pub fn point_in_bounds(p: Point, bounds: &Bounds) -> bool {
    bounds.contains_point(p)
}

/// The tightest bounds around `points`, or `None` if there are none.
pub fn bounds_from_points(points: &[Point]) -> Option<Bounds> {
    let (first, rest) = points.split_first()?;
    let mut bounds = Bounds::new(first.x, first.y, first.x, first.y);
    for p in rest {
        if p.x < bounds.min_x {
            bounds.min_x = p.x;
        }
        if p.y < bounds.min_y {
            bounds.min_y = p.y;
        }
        if p.x > bounds.max_x {
            bounds.max_x = p.x;
        }
        if p.y > bounds.max_y {
            bounds.max_y = p.y;
        }
    }
    Some(bounds)
}
