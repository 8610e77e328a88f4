// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Bounds: rectangle types and closed-form helpers shared by the Planar crates.
//!
//! - [`Bounds`] stores an axis-aligned rectangle as min/max coordinates.
//! - [`CenterBox`] stores one as a center point plus width and height.
//! - [`Rect2`] accepts either form and normalizes to [`Bounds`].
//!
//! Points, vectors, and circles are [`kurbo`] types and are re-exported here so
//! downstream crates share one vocabulary.
//!
//! # Example
//!
//! ```rust
//! use planar_bounds::{Bounds, CenterBox, Point, bounds_distance, bounds_intersection};
//!
//! let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
//! let b = CenterBox::new(Point::new(20.0, 5.0), 10.0, 10.0).bounds();
//!
//! assert_eq!(bounds_distance(&a, &b), 5.0);
//! assert!(bounds_intersection(&a, &b).is_none());
//! ```
//!
//! ## Float semantics
//!
//! Coordinates are `f64`. Functions are total: NaN and infinite inputs flow
//! through the arithmetic instead of being rejected, and nothing panics.

#![no_std]

mod ops;
mod point;
mod types;

pub use kurbo::{Circle, Line, Point, Rect, Vec2};
pub use ops::{
    bounds_area_overlap, bounds_distance, bounds_from_points, bounds_intersection,
    bounds_overlap, point_in_bounds,
};
pub use point::{Direction, clamp, distance, midpoint, unit_vector};
pub use types::{Bounds, CenterBox, Rect2};
