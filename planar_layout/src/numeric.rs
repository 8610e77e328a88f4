// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric sequence and angle helpers.

use alloc::vec::Vec;

/// Errors produced by [`range`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RangeError {
    /// A zero step would never reach the end.
    #[error("range step cannot be zero")]
    ZeroStep,
    /// `start` or `end` is infinite or NaN.
    #[error("range bounds must be finite")]
    NonFiniteBound,
    /// Adding `step` no longer changes the running value at its magnitude.
    #[error("range step is too small to advance at this magnitude")]
    StepTooSmall,
}

/// Values from `start` towards `end` in increments of `step`, end exclusive.
///
/// With `end == None` the sequence runs from `0` to `start`. A positive step
/// counts up while below `end`; a negative step counts down while above it.
/// Values are produced by repeated addition, so fractional steps accumulate
/// rounding error.
///
/// # Errors
///
/// - [`RangeError::ZeroStep`] if `step` is zero.
/// - [`RangeError::NonFiniteBound`] if `start` or `end` is infinite or NaN.
/// - [`RangeError::StepTooSmall`] if adding `step` stops changing the value
///   before `end` is reached.
///
/// # Examples
///
/// ```
/// use planar_layout::range;
///
/// assert_eq!(range(0.0, Some(10.0), 2.0), Ok(vec![0.0, 2.0, 4.0, 6.0, 8.0]));
/// assert_eq!(range(5.0, Some(1.0), -1.0), Ok(vec![5.0, 4.0, 3.0, 2.0]));
/// assert!(range(0.0, Some(1.0), 0.0).is_err());
/// ```
pub fn range(start: f64, end: Option<f64>, step: f64) -> Result<Vec<f64>, RangeError> {
    if step == 0.0 {
        return Err(RangeError::ZeroStep);
    }
    let (start, end) = match end {
        Some(end) => (start, end),
        None => (0.0, start),
    };
    if !start.is_finite() || !end.is_finite() {
        return Err(RangeError::NonFiniteBound);
    }

    let before_end = |i: f64| if step > 0.0 { i < end } else { i > end };
    let mut out = Vec::new();
    let mut i = start;
    while before_end(i) {
        out.push(i);
        let next = i + step;
        if next == i {
            return Err(RangeError::StepTooSmall);
        }
        i = next;
    }
    Ok(out)
}

/// `0, 1, ..` up to but excluding `end`.
///
/// # Errors
///
/// As [`range`] with a step of `1.0`.
#[inline]
pub fn range_to(end: f64) -> Result<Vec<f64>, RangeError> {
    range(end, None, 1.0)
}

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}
