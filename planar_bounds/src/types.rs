// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle types: min/max [`Bounds`], center-form [`CenterBox`], and the
//! [`Rect2`] union accepted by functions that take either.

use kurbo::{Point, Rect};

/// Axis-aligned rectangle stored as min/max coordinates.
///
/// Callers are expected to keep `min_x <= max_x` and `min_y <= max_y`.
/// Zero width or height is allowed and describes a line or a point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    /// Minimum x (left)
    pub min_x: f64,
    /// Minimum y
    pub min_y: f64,
    /// Maximum x (right)
    pub max_x: f64,
    /// Maximum y
    pub max_y: f64,
}

impl Bounds {
    /// Create new bounds from min/max coordinates.
    #[inline(always)]
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Horizontal extent.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The center point of the bounds.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Whether the point lies inside or on the boundary.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// The four corners, counter-clockwise in a y-up frame starting at
    /// `(min_x, min_y)`.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
        ]
    }

    /// The four edges as `(start, end)` pairs, following [`corners`](Self::corners).
    #[inline]
    pub fn edges(&self) -> [(Point, Point); 4] {
        let [c0, c1, c2, c3] = self.corners();
        [(c0, c1), (c1, c2), (c2, c3), (c3, c0)]
    }

    /// The smallest bounds enclosing both.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Clamp a point onto the rectangle, axis by axis.
    ///
    /// Points inside are returned unchanged.
    #[inline]
    pub fn clamp_point(&self, p: Point) -> Point {
        Point::new(
            crate::clamp(p.x, self.min_x, self.max_x),
            crate::clamp(p.y, self.min_y, self.max_y),
        )
    }
}

impl From<Rect> for Bounds {
    fn from(r: Rect) -> Self {
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

impl From<Bounds> for Rect {
    fn from(b: Bounds) -> Self {
        Self::new(b.min_x, b.min_y, b.max_x, b.max_y)
    }
}

/// Axis-aligned rectangle stored as a center point plus full width and height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CenterBox {
    /// Center of the box.
    pub center: Point,
    /// Full width (non-negative).
    pub width: f64,
    /// Full height (non-negative).
    pub height: f64,
}

impl CenterBox {
    /// Create a box from its center and size.
    #[inline(always)]
    pub const fn new(center: Point, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Min/max form: `center ± (width / 2, height / 2)`.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;
        Bounds {
            min_x: self.center.x - half_width,
            min_y: self.center.y - half_height,
            max_x: self.center.x + half_width,
            max_y: self.center.y + half_height,
        }
    }

    /// Center form of `bounds`.
    #[inline]
    pub fn from_bounds(bounds: Bounds) -> Self {
        Self {
            center: bounds.center(),
            width: bounds.width(),
            height: bounds.height(),
        }
    }
}

impl From<CenterBox> for Bounds {
    fn from(b: CenterBox) -> Self {
        b.bounds()
    }
}

/// A rectangle given either as min/max bounds or as a center box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Rect2 {
    /// Min/max form.
    Bounds(Bounds),
    /// Center + size form.
    Center(CenterBox),
}

impl Rect2 {
    /// Normalize to min/max form.
    #[inline]
    pub fn to_bounds(self) -> Bounds {
        match self {
            Self::Bounds(b) => b,
            Self::Center(c) => c.bounds(),
        }
    }
}

impl From<Bounds> for Rect2 {
    fn from(b: Bounds) -> Self {
        Self::Bounds(b)
    }
}

impl From<CenterBox> for Rect2 {
    fn from(b: CenterBox) -> Self {
        Self::Center(b)
    }
}

impl From<Rect> for Rect2 {
    fn from(r: Rect) -> Self {
        Self::Bounds(r.into())
    }
}
