// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger edges on the tracked element.
//!
//! A [`TargetEdge`] names a point along the element's main-axis extent. The
//! start edge is measured from the element's leading edge, the end edge from
//! its trailing edge inward, so the same name maps to opposite fractions
//! depending on which end it anchors:
//!
//! | Edge       | [`start_fraction`](TargetEdge::start_fraction) | [`end_fraction`](TargetEdge::end_fraction) |
//! |------------|-----|-----|
//! | `Start`    | 0   | 1   |
//! | `Center`   | 0.5 | 0.5 |
//! | `End`      | 1   | 0   |
//! | `Fraction(f)` | f | f |
//!
//! Unknown names and non-finite fractions resolve to 0 instead of failing.

/// A trigger point along the tracked element's main axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TargetEdge {
    /// The element's leading edge.
    Start,
    /// The element's midpoint.
    Center,
    /// The element's trailing edge.
    End,
    /// An explicit fraction of the element's main-axis size, usually 0..=1.
    Fraction(f64),
}

impl TargetEdge {
    /// Parses a named edge (`"start"`, `"center"`, `"end"`).
    ///
    /// Any other name yields `Fraction(0.0)`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "start" => Self::Start,
            "center" => Self::Center,
            "end" => Self::End,
            _ => Self::Fraction(0.0),
        }
    }

    /// Fraction of the element size used when this edge starts tracking.
    #[must_use]
    pub fn start_fraction(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
            Self::Fraction(f) => finite_or_zero(f),
        }
    }

    /// Fraction of the element size used when this edge ends tracking.
    #[must_use]
    pub fn end_fraction(self) -> f64 {
        match self {
            Self::Start => 1.0,
            Self::Center => 0.5,
            Self::End => 0.0,
            Self::Fraction(f) => finite_or_zero(f),
        }
    }
}

impl From<f64> for TargetEdge {
    fn from(fraction: f64) -> Self {
        Self::Fraction(fraction)
    }
}

/// Replaces NaN and infinities with 0.
#[must_use]
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
