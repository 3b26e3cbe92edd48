// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element geometry and trigger-edge offsets.
//!
//! [`Geometry::measure`] turns a viewport-relative bounding box, the current
//! scroll offset, and the viewport size into the numbers progress math needs:
//!
//! - [`TargetGeometry`]: the element's document-space leading edge and its
//!   extents. Adding the scroll offset to the bounding-box leading edge makes
//!   `start` independent of where the page is currently scrolled.
//! - [`EdgeOffsets`]: the four trigger offsets derived from the
//!   [`ObserverConfig`] edges.
//!
//! Geometry is recomputed on construction, on resize signals, and on manual
//! refresh. It never touches tracking state.

use kurbo::{Rect, Size};

use crate::config::ObserverConfig;
use crate::edge::finite_or_zero;

/// The tracked element's position and size along the configured axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TargetGeometry {
    /// Document-space offset of the element's leading edge.
    pub start: f64,
    /// Extent along the main axis.
    pub size_main: f64,
    /// Extent along the cross axis. Not used by progress math.
    pub size_cross: f64,
}

/// Absolute trigger offsets along the main axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeOffsets {
    /// Distance from the element's leading edge to the start trigger point.
    pub start_target: f64,
    /// Distance from the element's trailing edge to the end trigger point.
    pub end_target: f64,
    /// Distance from the viewport's leading edge to the start trigger line.
    pub start_viewport: f64,
    /// Distance from the viewport's leading edge to the end trigger line.
    pub end_viewport: f64,
}

/// Measured element geometry plus derived edge offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    /// Element position and extents.
    pub target: TargetGeometry,
    /// Trigger offsets derived from `target`, the viewport, and the config.
    pub offsets: EdgeOffsets,
}

impl Geometry {
    /// Measures geometry from a viewport-relative bounding box.
    ///
    /// `scroll` is the current scroll offset along `config.axis`.
    #[must_use]
    pub fn measure(bounds: Rect, scroll: f64, viewport: Size, config: &ObserverConfig) -> Self {
        let axis = config.axis;
        let target = TargetGeometry {
            start: axis.leading_edge(bounds) + scroll,
            size_main: axis.main_extent(bounds),
            size_cross: axis.cross_extent(bounds),
        };

        let viewport_main = axis.viewport_extent(viewport);
        let offsets = EdgeOffsets {
            start_target: target.size_main * config.start_target_edge.start_fraction(),
            end_target: target.size_main * config.end_target_edge.end_fraction(),
            start_viewport: finite_or_zero(config.start_viewport_edge) * viewport_main,
            end_viewport: finite_or_zero(config.end_viewport_edge) * viewport_main,
        };

        Self { target, offsets }
    }

    /// Total scroll travel between the start and end trigger configuration.
    ///
    /// Zero or negative travel means the configuration is degenerate.
    #[must_use]
    pub fn travel(&self) -> f64 {
        let o = &self.offsets;
        self.target.size_main + o.start_viewport - o.end_viewport - o.start_target - o.end_target
    }
}
