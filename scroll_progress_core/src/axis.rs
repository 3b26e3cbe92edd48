// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Main-axis selection.
//!
//! [`Axis`] picks which dimension of a bounding box and of the viewport
//! participates in progress math. The block axis is vertical scrolling, the
//! inline axis is horizontal scrolling.

use kurbo::{Rect, Size};

/// The scroll direction being tracked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Vertical scrolling (top/height on the main axis).
    #[default]
    Block,
    /// Horizontal scrolling (left/width on the main axis).
    Inline,
}

impl Axis {
    /// Returns the leading edge of `rect` along this axis.
    ///
    /// The rectangle is normalized first, so a rectangle with swapped corners
    /// still reports its smaller coordinate.
    #[must_use]
    pub fn leading_edge(self, rect: Rect) -> f64 {
        let rect = rect.abs();
        match self {
            Self::Block => rect.y0,
            Self::Inline => rect.x0,
        }
    }

    /// Returns the extent of `rect` along this axis.
    #[must_use]
    pub fn main_extent(self, rect: Rect) -> f64 {
        let rect = rect.abs();
        match self {
            Self::Block => rect.height(),
            Self::Inline => rect.width(),
        }
    }

    /// Returns the extent of `rect` perpendicular to this axis.
    #[must_use]
    pub fn cross_extent(self, rect: Rect) -> f64 {
        self.cross().main_extent(rect)
    }

    /// Returns the viewport extent along this axis.
    #[must_use]
    pub fn viewport_extent(self, viewport: Size) -> f64 {
        match self {
            Self::Block => viewport.height,
            Self::Inline => viewport.width,
        }
    }

    /// Returns the perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Block => Self::Inline,
            Self::Inline => Self::Block,
        }
    }
}
