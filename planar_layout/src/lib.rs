// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Layout: grid cell generation and small numeric helpers.
//!
//! - [`grid`] lays out `rows * cols` equally sized cells and reports each
//!   cell's center and corners. See [`GridOptions`] for sizing, offsets,
//!   centering, and the y direction.
//! - [`range`] produces an arithmetic sequence of `f64`s.
//! - [`normalize_degrees`] wraps an angle into `[0, 360)`.
//!
//! None of these depend on the intersection or distance crates; they only
//! share the point and bounds types from `planar_bounds`.

#![no_std]

extern crate alloc;

mod grid;
mod numeric;

pub use grid::{GridCell, GridOptions, YDirection, grid};
pub use numeric::{RangeError, normalize_degrees, range, range_to};

pub use planar_bounds::{Bounds, Point};
