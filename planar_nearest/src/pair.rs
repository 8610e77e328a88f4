// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance between a single pair of boxes.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;
use planar_bounds::{CenterBox, distance};

/// Result of a box-pair distance or a nearest-pair search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxPairDistance {
    /// Distance between [`point_a`](Self::point_a) and [`point_b`](Self::point_b).
    pub distance: f64,
    /// Representative point for the box from the first set.
    pub point_a: Point,
    /// Representative point for the box from the second set.
    pub point_b: Point,
}

impl BoxPairDistance {
    /// Result of searching an empty set: infinite distance, both points at the origin.
    pub const NONE: Self = Self {
        distance: f64::INFINITY,
        point_a: Point::ORIGIN,
        point_b: Point::ORIGIN,
    };

    /// Whether this is a real result rather than [`NONE`](Self::NONE).
    #[inline]
    pub fn is_found(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Separation along one axis, zero where the extents overlap.
///
/// NaN if either extent has a NaN edge; `f64::max` alone would discard it.
#[inline]
fn axis_gap(a_min: f64, a_max: f64, b_min: f64, b_max: f64) -> f64 {
    let before = a_min - b_max;
    let after = b_min - a_max;
    if before.is_nan() || after.is_nan() {
        return f64::NAN;
    }
    before.max(after).max(0.0)
}

/// Axis separations between two boxes, zero on axes where they overlap.
#[inline]
fn axis_gaps(a: &CenterBox, b: &CenterBox) -> (f64, f64) {
    let a = a.bounds();
    let b = b.bounds();
    (
        axis_gap(a.min_x, a.max_x, b.min_x, b.max_x),
        axis_gap(a.min_y, a.max_y, b.min_y, b.max_y),
    )
}

/// Distance between two boxes, with a representative point on each.
///
/// When the boxes overlap or touch the distance is `0.0` and the points are
/// the boxes' own centers, not points of the shared region.
///
/// Otherwise `point_a` is the center of `a` clamped into `b`, and `point_b`
/// is the center of `b` clamped into `a`; the distance is measured between
/// those two points. That is exact when the boxes are aligned on one axis but
/// can exceed the true gap for diagonal separations. Use
/// [`compute_gap_between_boxes`] for the true gap.
///
/// A NaN coordinate or extent yields a NaN distance with the two centers as
/// points, which the nearest-pair searches never pick.
pub fn compute_distance_between_boxes(a: &CenterBox, b: &CenterBox) -> BoxPairDistance {
    let (dx, dy) = axis_gaps(a, b);
    if dx.is_nan() || dy.is_nan() {
        return BoxPairDistance {
            distance: f64::NAN,
            point_a: a.center,
            point_b: b.center,
        };
    }
    if dx == 0.0 && dy == 0.0 {
        return BoxPairDistance {
            distance: 0.0,
            point_a: a.center,
            point_b: b.center,
        };
    }

    let point_a = b.bounds().clamp_point(a.center);
    let point_b = a.bounds().clamp_point(b.center);
    BoxPairDistance {
        distance: distance(point_a, point_b),
        point_a,
        point_b,
    }
}

/// True gap between two boxes: `hypot(dx, dy)` of the axis separations.
///
/// `point_a` is the center of `b` clamped onto `a`, and `point_b` is the
/// center of `a` clamped onto `b`.
pub fn compute_gap_between_boxes(a: &CenterBox, b: &CenterBox) -> BoxPairDistance {
    let (dx, dy) = axis_gaps(a, b);
    BoxPairDistance {
        distance: (dx * dx + dy * dy).sqrt(),
        point_a: a.bounds().clamp_point(b.center),
        point_b: b.bounds().clamp_point(a.center),
    }
}
