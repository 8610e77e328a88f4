// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimum distances from segments and points to other shapes.
//!
//! Every function returns exactly `0.0` when the two shapes touch or overlap.

use kurbo::{Circle, Point};
use planar_bounds::{Bounds, CenterBox, distance};

use crate::predicates::{do_segments_intersect, point_to_segment_distance};

/// Minimum distance between segments `a b` and `u v`.
///
/// Zero when they intersect. Otherwise the closest approach of two disjoint
/// segments is always between an endpoint of one and the other segment, so
/// the minimum of those four candidates is exact.
pub fn segment_to_segment_min_distance(a: Point, b: Point, u: Point, v: Point) -> f64 {
    if a == b {
        return point_to_segment_distance(a, u, v);
    }
    if u == v {
        return point_to_segment_distance(u, a, b);
    }

    if do_segments_intersect(a, b, u, v) {
        return 0.0;
    }

    point_to_segment_distance(a, u, v)
        .min(point_to_segment_distance(b, u, v))
        .min(point_to_segment_distance(u, a, b))
        .min(point_to_segment_distance(v, a, b))
}

/// Minimum distance between segment `a b` and the rectangle `bounds`.
pub fn segment_to_bounds_min_distance(a: Point, b: Point, bounds: &Bounds) -> f64 {
    let a_inside = bounds.contains_point(a);
    let b_inside = bounds.contains_point(b);
    if a_inside || b_inside {
        return 0.0;
    }
    if bounds
        .edges()
        .iter()
        .any(|&(start, end)| do_segments_intersect(a, b, start, end))
    {
        return 0.0;
    }

    // Disjoint: the closest pair is either a corner against the segment or an
    // endpoint against its projection onto the rectangle.
    let mut min = f64::INFINITY;
    for corner in bounds.corners() {
        min = min.min(point_to_segment_distance(corner, a, b));
    }
    for endpoint in [a, b] {
        min = min.min(distance(endpoint, bounds.clamp_point(endpoint)));
    }
    min
}

/// Minimum distance between segment `a b` and a center-form box.
#[inline]
pub fn segment_to_box_min_distance(a: Point, b: Point, rect: &CenterBox) -> f64 {
    segment_to_bounds_min_distance(a, b, &rect.bounds())
}

/// Minimum distance between segment `a b` and the disk of `circle`.
///
/// Zero when the segment reaches into or through the circle.
#[inline]
pub fn segment_to_circle_min_distance(a: Point, b: Point, circle: &Circle) -> f64 {
    let to_center = point_to_segment_distance(circle.center, a, b);
    (to_center - circle.radius).max(0.0)
}

/// Minimum distance from `p` to a center-form box; zero inside or on the edge.
#[inline]
pub fn point_to_box_distance(p: Point, rect: &CenterBox) -> f64 {
    point_to_bounds_distance(p, &rect.bounds())
}

/// Minimum distance from `p` to `bounds`; zero inside or on the edge.
pub fn point_to_bounds_distance(p: Point, bounds: &Bounds) -> f64 {
    if bounds.contains_point(p) {
        return 0.0;
    }
    distance(p, bounds.clamp_point(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn segment_to_segment_cases() {
        // Crossing.
        assert_eq!(
            segment_to_segment_min_distance(pt(0.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0), pt(10.0, 0.0)),
            0.0
        );
        // Parallel.
        assert_eq!(
            segment_to_segment_min_distance(pt(0.0, 0.0), pt(10.0, 0.0), pt(0.0, 5.0), pt(10.0, 5.0)),
            5.0
        );
        // Perpendicular, not touching.
        assert_eq!(
            segment_to_segment_min_distance(pt(0.0, 0.0), pt(0.0, 10.0), pt(5.0, 5.0), pt(15.0, 5.0)),
            5.0
        );
        // Degenerate first segment.
        assert_eq!(
            segment_to_segment_min_distance(pt(0.0, 0.0), pt(0.0, 0.0), pt(3.0, 0.0), pt(10.0, 0.0)),
            3.0
        );
        // Closest points are endpoints (1, 0) and (3, 1).
        let d = segment_to_segment_min_distance(pt(0.0, 0.0), pt(1.0, 0.0), pt(3.0, 1.0), pt(4.0, 2.0));
        assert!((d - 5.0_f64.sqrt()).abs() < EPSILON);
    }

    #[test]
    fn segment_to_segment_is_symmetric() {
        let (a, b, u, v) = (pt(0.0, 0.0), pt(1.0, 0.0), pt(3.0, 1.0), pt(4.0, 2.0));
        let d = segment_to_segment_min_distance(a, b, u, v);
        for other in [
            segment_to_segment_min_distance(u, v, a, b),
            segment_to_segment_min_distance(b, a, u, v),
            segment_to_segment_min_distance(a, b, v, u),
            segment_to_segment_min_distance(v, u, b, a),
        ] {
            assert!((d - other).abs() < EPSILON);
        }
    }

    #[test]
    fn segment_to_bounds_cases() {
        let bounds = Bounds::new(5.0, 0.0, 15.0, 10.0);
        // Crossing.
        assert_eq!(segment_to_bounds_min_distance(pt(0.0, 5.0), pt(10.0, 5.0), &bounds), 0.0);
        // Fully inside.
        assert_eq!(segment_to_bounds_min_distance(pt(6.0, 5.0), pt(10.0, 5.0), &bounds), 0.0);
        // Outside, parallel to the top edge.
        assert_eq!(segment_to_bounds_min_distance(pt(0.0, 15.0), pt(10.0, 15.0), &bounds), 5.0);
        // One endpoint inside.
        assert_eq!(segment_to_bounds_min_distance(pt(6.0, 5.0), pt(20.0, 5.0), &bounds), 0.0);
    }

    #[test]
    fn segment_to_bounds_corner_is_nearest() {
        // The segment passes diagonally by the (15, 10) corner.
        let bounds = Bounds::new(5.0, 0.0, 15.0, 10.0);
        let d = segment_to_bounds_min_distance(pt(14.0, 15.0), pt(20.0, 9.0), &bounds);
        // Line x + y = 29; corner (15, 10) sits at |15 + 10 - 29| / sqrt(2).
        assert!((d - 4.0 / 2.0_f64.sqrt()).abs() < EPSILON);
    }

    #[test]
    fn segment_to_box_cases() {
        let rect = CenterBox::new(pt(10.0, 5.0), 10.0, 10.0);
        assert_eq!(segment_to_box_min_distance(pt(0.0, 5.0), pt(10.0, 5.0), &rect), 0.0);
        assert_eq!(segment_to_box_min_distance(pt(6.0, 5.0), pt(10.0, 5.0), &rect), 0.0);
        assert_eq!(segment_to_box_min_distance(pt(0.0, 15.0), pt(10.0, 15.0), &rect), 5.0);
        assert_eq!(segment_to_box_min_distance(pt(6.0, 5.0), pt(20.0, 5.0), &rect), 0.0);
    }

    #[test]
    fn segment_to_circle_cases() {
        let circle = Circle::new((5.0, 0.0), 2.0);
        // Through the center.
        assert_eq!(segment_to_circle_min_distance(pt(0.0, 0.0), pt(10.0, 0.0), &circle), 0.0);
        // Passing above.
        assert_eq!(segment_to_circle_min_distance(pt(0.0, 5.0), pt(10.0, 5.0), &circle), 3.0);
        // Endpoint inside.
        assert_eq!(segment_to_circle_min_distance(pt(4.0, 0.0), pt(10.0, 0.0), &circle), 0.0);
        // Degenerate segment.
        assert_eq!(segment_to_circle_min_distance(pt(10.0, 0.0), pt(10.0, 0.0), &circle), 3.0);

        let above = Circle::new((5.0, 10.0), 2.0);
        assert_eq!(segment_to_circle_min_distance(pt(0.0, 5.0), pt(10.0, 5.0), &above), 3.0);
    }

    #[test]
    fn point_distances() {
        let rect = CenterBox::new(pt(0.0, 0.0), 4.0, 2.0);
        assert_eq!(point_to_box_distance(pt(1.0, 0.5), &rect), 0.0);
        assert_eq!(point_to_box_distance(pt(2.0, 1.0), &rect), 0.0);
        assert_eq!(point_to_box_distance(pt(5.0, 0.0), &rect), 3.0);
        assert_eq!(point_to_box_distance(pt(5.0, 5.0), &rect), 5.0);

        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(point_to_bounds_distance(pt(5.0, 5.0), &bounds), 0.0);
        assert_eq!(point_to_bounds_distance(pt(-3.0, 5.0), &bounds), 3.0);
        assert_eq!(point_to_bounds_distance(pt(13.0, 14.0), &bounds), 5.0);
    }

    #[test]
    fn overlap_implies_zero_distance() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let rect = CenterBox::from_bounds(bounds);
        let circle = Circle::new((5.0, 5.0), 1.0);
        let segments = [
            (pt(-5.0, 5.0), pt(15.0, 5.0)),
            (pt(-1.0, -1.0), pt(0.0, 0.0)),
            (pt(5.0, 5.0), pt(5.0, 5.0)),
            (pt(2.0, 2.0), pt(8.0, 8.0)),
        ];
        for (a, b) in segments {
            assert_eq!(segment_to_bounds_min_distance(a, b, &bounds), 0.0);
            assert_eq!(segment_to_box_min_distance(a, b, &rect), 0.0);
            assert_eq!(segment_to_segment_min_distance(a, b, pt(0.0, 0.0), pt(10.0, 10.0)), 0.0);
        }
        assert_eq!(
            segment_to_circle_min_distance(pt(0.0, 0.0), pt(10.0, 10.0), &circle),
            0.0
        );
    }
}
