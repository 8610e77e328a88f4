// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Segment: exact segment predicates and segment-to-shape distances.
//!
//! This crate is the narrow-phase kernel of Planar. It answers two kinds of
//! questions about straight segments in 2D:
//!
//! - Do they touch? [`orientation`], [`do_segments_intersect`],
//!   [`segment_intersection`], [`point_on_segment`], and
//!   [`does_segment_intersect_bounds`].
//! - How far apart are they? [`point_to_segment_distance`],
//!   [`segment_to_segment_min_distance`], and the segment-to-bounds, box, and
//!   circle variants.
//!
//! Segments are passed as their two endpoints. A segment whose endpoints
//! coincide behaves as a point.
//!
//! # Example
//!
//! ```rust
//! use planar_segment::{Circle, Point, segment_intersection, segment_to_circle_min_distance};
//!
//! let hit = segment_intersection(
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//!     Point::new(10.0, 0.0),
//! );
//! assert_eq!(hit, Some(Point::new(5.0, 5.0)));
//!
//! let circle = Circle::new((5.0, 0.0), 2.0);
//! let d = segment_to_circle_min_distance(Point::new(0.0, 5.0), Point::new(10.0, 5.0), &circle);
//! assert_eq!(d, 3.0);
//! ```
//!
//! ## Precision
//!
//! [`orientation`] compares the cross product against exactly zero. Nearly
//! collinear inputs in floating point can therefore classify either way.
//! [`segment_intersection`] and [`point_on_segment`] use the fixed tolerances
//! [`PARALLEL_EPSILON`], [`PARAMETER_EPSILON`], and [`ON_SEGMENT_EPSILON`].

#![no_std]

mod distance;
mod predicates;

pub use distance::{
    point_to_bounds_distance, point_to_box_distance, segment_to_bounds_min_distance,
    segment_to_box_min_distance, segment_to_circle_min_distance, segment_to_segment_min_distance,
};
pub use predicates::{
    LineIntersectParams, ON_SEGMENT_EPSILON, Orientation, PARALLEL_EPSILON, PARAMETER_EPSILON,
    do_lines_intersect, do_segments_intersect, does_segment_intersect_bounds, on_segment,
    orientation, point_on_segment, point_to_segment_distance, segment_intersection,
};

pub use planar_bounds::{Bounds, CenterBox, Circle, Line, Point, distance};
