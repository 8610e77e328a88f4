// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid layout of rectangular cells.

use alloc::vec::Vec;

use kurbo::Point;
use planar_bounds::Bounds;

/// Which way rows advance along y.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum YDirection {
    /// y grows upwards: row 0 is the top row and has the largest y.
    #[default]
    Cartesian,
    /// y grows downwards, as in screen coordinates: row 0 has the smallest y.
    UpIsNegative,
}

/// Parameters for [`grid`].
///
/// Cell width is `width / cols` when `width` is set and non-zero, otherwise
/// `x_spacing`, otherwise `1.0`. Cell height follows the same rule with
/// `height`, `rows`, and `y_spacing`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridOptions {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Cell width, when `width` is not given.
    pub x_spacing: Option<f64>,
    /// Cell height, when `height` is not given.
    pub y_spacing: Option<f64>,
    /// Total grid width, split evenly between columns.
    pub width: Option<f64>,
    /// Total grid height, split evenly between rows.
    pub height: Option<f64>,
    /// Shift applied to every cell along x.
    pub offset_x: f64,
    /// Shift applied to every cell along y.
    pub offset_y: f64,
    /// Row direction along y.
    pub y_direction: YDirection,
    /// Center the whole grid on `(offset_x, offset_y)` instead of starting
    /// there.
    pub centered: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 1,
            x_spacing: None,
            y_spacing: None,
            width: None,
            height: None,
            offset_x: 0.0,
            offset_y: 0.0,
            y_direction: YDirection::Cartesian,
            centered: true,
        }
    }
}

/// One cell produced by [`grid`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    /// Row-major index, `row * cols + col`.
    pub index: usize,
    /// Cell center.
    pub center: Point,
    /// Left edge and the cell's larger y.
    pub top_left: Point,
    /// Right edge and the cell's smaller y.
    pub bottom_right: Point,
}

impl GridCell {
    /// The cell as min/max bounds.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.top_left.x,
            self.bottom_right.y,
            self.bottom_right.x,
            self.top_left.y,
        )
    }
}

fn cell_extent(total: Option<f64>, count: usize, spacing: Option<f64>) -> f64 {
    match total {
        Some(total) if total != 0.0 => total / count as f64,
        _ => spacing.unwrap_or(1.0),
    }
}

/// Lay out `rows * cols` cells in row-major order.
///
/// # Examples
///
/// ```
/// use planar_layout::{GridOptions, Point, grid};
///
/// let cells = grid(&GridOptions {
///     rows: 2,
///     cols: 2,
///     x_spacing: Some(10.0),
///     y_spacing: Some(10.0),
///     ..GridOptions::default()
/// });
/// assert_eq!(cells.len(), 4);
/// assert_eq!(cells[0].center, Point::new(-5.0, 5.0));
/// ```
pub fn grid(options: &GridOptions) -> Vec<GridCell> {
    let rows = options.rows;
    let cols = options.cols;
    let cell_width = cell_extent(options.width, cols, options.x_spacing);
    let cell_height = cell_extent(options.height, rows, options.y_spacing);

    let (shift_x, shift_y) = if options.centered {
        (
            cols as f64 * cell_width / 2.0,
            rows as f64 * cell_height / 2.0,
        )
    } else {
        (0.0, 0.0)
    };

    let mut cells = Vec::with_capacity(rows.saturating_mul(cols));
    for row in 0..rows {
        let y_slot = match options.y_direction {
            YDirection::Cartesian => rows - 1 - row,
            YDirection::UpIsNegative => row,
        };
        let center_y = options.offset_y + y_slot as f64 * cell_height + cell_height / 2.0 - shift_y;

        for col in 0..cols {
            let center_x = options.offset_x + col as f64 * cell_width + cell_width / 2.0 - shift_x;
            cells.push(GridCell {
                index: row * cols + col,
                center: Point::new(center_x, center_y),
                top_left: Point::new(center_x - cell_width / 2.0, center_y + cell_height / 2.0),
                bottom_right: Point::new(center_x + cell_width / 2.0, center_y - cell_height / 2.0),
            });
        }
    }
    cells
}
