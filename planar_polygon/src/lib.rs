// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Polygon: point-in-polygon and rectangle/polygon relationship tests.
//!
//! A polygon is a slice of [`Point`]s, implicitly closed: the last vertex
//! connects back to the first. Polygons with fewer than three vertices have
//! no interior, and every test here answers `false` for them.
//!
//! Polygons are expected to be simple (not self-intersecting). Concave
//! polygons are fine.
//!
//! # Boundary semantics
//!
//! A point exactly on an edge counts as inside. The edge check runs before the
//! even-odd ray cast, so boundary points never depend on ray parity.
//!
//! # Example
//!
//! ```rust
//! use planar_polygon::{Bounds, Point, are_bounds_overlapping_polygon, is_point_inside_polygon};
//!
//! let square = [
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! ];
//!
//! assert!(is_point_inside_polygon(Point::new(5.0, 5.0), &square));
//! assert!(is_point_inside_polygon(Point::new(0.0, 5.0), &square));
//! assert!(are_bounds_overlapping_polygon(&Bounds::new(8.0, 8.0, 12.0, 12.0), &square));
//! ```

#![no_std]

use planar_segment::{do_segments_intersect, point_on_segment};

pub use planar_bounds::{Bounds, CenterBox, Point, Rect2};

/// Iterate the edges of a closed polygon as `(start, end)` pairs.
///
/// The final edge joins the last vertex back to the first. An empty polygon
/// yields no edges.
pub fn polygon_edges(polygon: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| (polygon[i], polygon[(i + 1) % n]))
}

/// Whether `point` is inside `polygon` or on its boundary.
pub fn is_point_inside_polygon(point: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    if polygon_edges(polygon).any(|(start, end)| point_on_segment(point, start, end)) {
        return true;
    }

    // Even-odd rule with a ray towards +x.
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for (i, pi) in polygon.iter().enumerate() {
        let pj = polygon[j];
        let crosses = (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn polygon_crosses_bounds(bounds: &Bounds, polygon: &[Point]) -> bool {
    let bounds_edges = bounds.edges();
    polygon_edges(polygon).any(|(start, end)| {
        bounds_edges
            .iter()
            .any(|&(rect_start, rect_end)| do_segments_intersect(start, end, rect_start, rect_end))
    })
}

/// Whether `bounds` and `polygon` share any area or boundary.
///
/// True when a polygon vertex lies in the bounds, a bounds corner lies in the
/// polygon, or any polygon edge crosses a bounds edge. The last case catches
/// an edge passing through the rectangle with no vertex of either shape inside
/// the other.
pub fn are_bounds_overlapping_polygon(bounds: &Bounds, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    if polygon.iter().any(|&p| bounds.contains_point(p)) {
        return true;
    }

    if bounds
        .corners()
        .iter()
        .any(|&corner| is_point_inside_polygon(corner, polygon))
    {
        return true;
    }

    polygon_crosses_bounds(bounds, polygon)
}

/// Whether `bounds` lies entirely within `polygon`.
///
/// All four corners must be inside, and no polygon edge may cross a bounds
/// edge; the second check rejects a concave polygon notching into the
/// rectangle between corners.
pub fn are_bounds_completely_inside_polygon(bounds: &Bounds, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    if !bounds
        .corners()
        .iter()
        .all(|&corner| is_point_inside_polygon(corner, polygon))
    {
        return false;
    }

    !polygon_crosses_bounds(bounds, polygon)
}

/// [`are_bounds_overlapping_polygon`] for a rectangle in either bounds or center form.
#[inline]
pub fn is_rect_overlapping_polygon(rect: impl Into<Rect2>, polygon: &[Point]) -> bool {
    are_bounds_overlapping_polygon(&rect.into().to_bounds(), polygon)
}

/// [`are_bounds_completely_inside_polygon`] for a rectangle in either bounds or center form.
#[inline]
pub fn is_rect_completely_inside_polygon(rect: impl Into<Rect2>, polygon: &[Point]) -> bool {
    are_bounds_completely_inside_polygon(&rect.into().to_bounds(), polygon)
}
