// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point and vector helpers.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}

/// The point halfway between `a` and `b`.
#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics; if `min > max` the result is `min`.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(value))
}

/// Unit vector pointing from `a` towards `b`.
///
/// Coincident points have no direction and yield NaN components.
#[inline]
pub fn unit_vector(a: Point, b: Point) -> Vec2 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let magnitude = (dx * dx + dy * dy).sqrt();
    Vec2::new(dx / magnitude, dy / magnitude)
}

/// Cardinal direction in a y-up frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// +y
    Up,
    /// -y
    Down,
    /// -x
    Left,
    /// +x
    Right,
}

impl Direction {
    /// Unit vector for this direction.
    #[inline]
    pub const fn unit_vector(self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, 1.0),
            Self::Down => Vec2::new(0.0, -1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }
}
