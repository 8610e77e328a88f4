// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exhaustive pairwise search.

use planar_bounds::CenterBox;

use crate::pair::{BoxPairDistance, compute_distance_between_boxes};

/// Exhaustive nearest pair between `set_a` and `set_b`, in `O(|A|·|B|)`.
///
/// Ties keep the first minimal pair in iteration order.
pub fn find_nearest_naive(set_a: &[CenterBox], set_b: &[CenterBox]) -> BoxPairDistance {
    let mut best = BoxPairDistance::NONE;
    for a in set_a {
        for b in set_b {
            let candidate = compute_distance_between_boxes(a, b);
            if candidate.distance < best.distance {
                best = candidate;
            }
        }
    }
    best
}
