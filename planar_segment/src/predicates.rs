// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orientation and segment intersection predicates.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, Point};
use planar_bounds::{Bounds, distance};

use crate::distance::segment_to_segment_min_distance;

/// Determinants with a magnitude below this are treated as parallel in
/// [`segment_intersection`].
pub const PARALLEL_EPSILON: f64 = 1e-10;

/// Slack allowed on the `[0, 1]` segment parameters in [`segment_intersection`].
pub const PARAMETER_EPSILON: f64 = 1e-9;

/// Cross-product tolerance used by [`point_on_segment`].
pub const ON_SEGMENT_EPSILON: f64 = 1e-9;

/// Turn direction of three ordered points.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// The points lie on one line.
    Collinear,
    /// `p -> q -> r` turns clockwise (in a y-up frame).
    Clockwise,
    /// `p -> q -> r` turns counterclockwise (in a y-up frame).
    CounterClockwise,
}

/// Orientation of the ordered triple `(p, q, r)`.
///
/// This is the sign of `(q - p) × (r - q)`. A cross product of exactly zero is
/// collinear; there is no tolerance, so nearly-collinear floating point inputs
/// may classify either way.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Whether `q` lies within the axis-aligned box spanned by `p` and `r`.
///
/// Only meaningful once [`orientation`] has reported the three points as
/// collinear.
#[inline]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Whether segment `p1 q1` and segment `p2 q2` share at least one point.
///
/// Crossing, touching at an endpoint, and collinear overlap all count.
///
/// # Examples
///
/// ```
/// use planar_segment::{Point, do_segments_intersect};
///
/// let crossing = do_segments_intersect(
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
///     Point::new(10.0, 0.0),
/// );
/// assert!(crossing);
/// ```
pub fn do_segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear triples: intersect iff the third point falls on the segment.
    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

/// The single point where segments `a b` and `u v` meet.
///
/// Returns `None` when the segments miss each other, and also when they are
/// parallel or collinear (`|det| < PARALLEL_EPSILON`), even if they overlap.
/// Use [`do_segments_intersect`] to detect collinear overlap. Endpoints are
/// included with a slack of [`PARAMETER_EPSILON`] on each segment parameter.
pub fn segment_intersection(a: Point, b: Point, u: Point, v: Point) -> Option<Point> {
    let dx1 = b.x - a.x;
    let dy1 = b.y - a.y;
    let dx2 = v.x - u.x;
    let dy2 = v.y - u.y;

    let det = dx1 * dy2 - dy1 * dx2;
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }

    let wx = u.x - a.x;
    let wy = u.y - a.y;
    let t = (wx * dy2 - wy * dx2) / det;
    let s = (wx * dy1 - wy * dx1) / det;

    let in_range = |p: f64| (-PARAMETER_EPSILON..=1.0 + PARAMETER_EPSILON).contains(&p);
    if in_range(t) && in_range(s) {
        Some(Point::new(a.x + t * dx1, a.y + t * dy1))
    } else {
        None
    }
}

/// Whether `point` lies on the segment `start end`, within
/// [`ON_SEGMENT_EPSILON`] of the supporting line.
pub fn point_on_segment(point: Point, start: Point, end: Point) -> bool {
    let ex = end.x - start.x;
    let ey = end.y - start.y;
    let px = point.x - start.x;
    let py = point.y - start.y;

    let cross = py * ex - px * ey;
    if cross.abs() > ON_SEGMENT_EPSILON {
        return false;
    }

    let dot = px * ex + py * ey;
    dot >= 0.0 && dot <= ex * ex + ey * ey
}

/// Minimum distance from `p` to the segment `v w`.
///
/// Projects `p` onto the supporting line, clamps to the segment, and measures
/// to the clamped point. A zero-length segment degrades to point distance.
pub fn point_to_segment_distance(p: Point, v: Point, w: Point) -> f64 {
    let vx = w.x - v.x;
    let vy = w.y - v.y;
    let l2 = vx * vx + vy * vy;
    if l2 == 0.0 {
        return distance(p, v);
    }

    let t = ((p.x - v.x) * vx + (p.y - v.y) * vy) / l2;
    let t = t.max(0.0).min(1.0);
    let projection = Point::new(v.x + t * vx, v.y + t * vy);
    distance(p, projection)
}

/// Parameters for [`do_lines_intersect`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LineIntersectParams {
    /// Lines closer than this count as intersecting. Zero means an exact
    /// segment intersection test.
    pub line_thickness: f64,
}

/// Whether two lines touch, optionally treating them as having thickness.
pub fn do_lines_intersect(a: Line, b: Line, params: &LineIntersectParams) -> bool {
    if params.line_thickness == 0.0 {
        return do_segments_intersect(a.p0, a.p1, b.p0, b.p1);
    }
    segment_to_segment_min_distance(a.p0, a.p1, b.p0, b.p1) <= params.line_thickness
}

/// Whether the segment `a b` touches `bounds`: an endpoint inside, or a
/// crossing of any edge (corners included).
pub fn does_segment_intersect_bounds(a: Point, b: Point, bounds: &Bounds) -> bool {
    if bounds.contains_point(a) || bounds.contains_point(b) {
        return true;
    }
    bounds
        .edges()
        .iter()
        .any(|&(start, end)| do_segments_intersect(a, b, start, end))
}
