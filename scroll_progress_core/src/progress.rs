// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll position to progress fraction.

use crate::geometry::Geometry;

/// Returns how far `scroll` has advanced between the start and end trigger
/// configuration, clamped to `0.0..=1.0`.
///
/// The numerator is the distance the start trigger point has been scrolled
/// past the start viewport line; the denominator is [`Geometry::travel`].
///
/// Degenerate geometry (zero, negative, or non-finite travel) and non-finite
/// inputs yield `0.0`, so the result is never NaN.
#[must_use]
pub fn progress(scroll: f64, geometry: &Geometry) -> f64 {
    let travel = geometry.travel();
    if !travel.is_finite() || travel <= 0.0 {
        return 0.0;
    }

    let scrolled = scroll + geometry.offsets.start_viewport
        - geometry.target.start
        - geometry.offsets.start_target;
    if !scrolled.is_finite() {
        return 0.0;
    }
    (scrolled / travel).clamp(0.0, 1.0)
}

/// Returns `true` when `progress` lies strictly between the two edges.
#[must_use]
pub fn is_between_edges(progress: f64) -> bool {
    progress > 0.0 && progress < 1.0
}
