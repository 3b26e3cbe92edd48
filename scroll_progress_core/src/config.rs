// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observer configuration.
//!
//! [`ObserverConfig`] holds the plain-data tracking parameters and is `Copy`.
//! [`Options`] bundles a config with the parts that are not plain data: the
//! [`ProgressListener`](crate::listener::ProgressListener) that receives
//! events and an optional scroll-position override.

use alloc::boxed::Box;
use core::fmt;

use crate::axis::Axis;
use crate::edge::TargetEdge;

/// Tracking parameters for a [`ScrollProgressObserver`](crate::observer::ScrollProgressObserver).
///
/// Trigger lines are described twice: once on the element (target edges) and
/// once on the viewport (viewport edges). Tracking starts when the start
/// target edge crosses the start viewport edge while scrolling forward, and
/// ends when the end target edge crosses the end viewport edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverConfig {
    /// Which scroll direction is tracked.
    pub axis: Axis,
    /// Recompute progress on every frame while in view. When `false`, a
    /// single tick runs after each entry into view.
    pub continuous_tracking: bool,
    /// Recompute geometry on element and viewport resize signals. Hosts that
    /// disable this call
    /// [`resize`](crate::observer::ScrollProgressObserver::resize) manually.
    pub watch_resize: bool,
    /// Element edge that starts tracking, measured from the leading edge.
    pub start_target_edge: TargetEdge,
    /// Element edge that ends tracking, measured from the trailing edge.
    pub end_target_edge: TargetEdge,
    /// Viewport line (fraction of the viewport size, 0..=1) that starts
    /// tracking.
    pub start_viewport_edge: f64,
    /// Viewport line (fraction of the viewport size, 0..=1) that ends
    /// tracking.
    pub end_viewport_edge: f64,
}

impl ObserverConfig {
    /// Default configuration: block axis, continuous tracking, resize
    /// watching, element start/end against viewport bottom/top.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            axis: Axis::Block,
            continuous_tracking: true,
            watch_resize: true,
            start_target_edge: TargetEdge::Start,
            end_target_edge: TargetEdge::End,
            start_viewport_edge: 1.0,
            end_viewport_edge: 0.0,
        }
    }

    /// Sets the tracked axis.
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Enables or disables per-frame tracking.
    #[must_use]
    pub const fn with_continuous_tracking(mut self, continuous: bool) -> Self {
        self.continuous_tracking = continuous;
        self
    }

    /// Enables or disables automatic geometry recomputation on resize.
    #[must_use]
    pub const fn with_watch_resize(mut self, watch: bool) -> Self {
        self.watch_resize = watch;
        self
    }

    /// Sets both target edges.
    #[must_use]
    pub const fn with_target_edges(mut self, start: TargetEdge, end: TargetEdge) -> Self {
        self.start_target_edge = start;
        self.end_target_edge = end;
        self
    }

    /// Sets both viewport edges.
    #[must_use]
    pub const fn with_viewport_edges(mut self, start: f64, end: f64) -> Self {
        self.start_viewport_edge = start;
        self.end_viewport_edge = end;
        self
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Supplies the current scroll offset in place of the default provider.
pub type ScrollOverride = Box<dyn Fn() -> f64>;

/// Construction options: configuration, event listener, scroll override.
pub struct Options<L> {
    /// Tracking parameters.
    pub config: ObserverConfig,
    /// Receives enter/leave/progress events.
    pub listener: L,
    /// Replaces the environment's scroll position provider when set.
    pub scroll_position_override: Option<ScrollOverride>,
}

impl<L> Options<L> {
    /// Creates options with the default configuration.
    #[must_use]
    pub fn new(listener: L) -> Self {
        Self {
            config: ObserverConfig::new(),
            listener,
            scroll_position_override: None,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ObserverConfig) -> Self {
        self.config = config;
        self
    }

    /// Reads the scroll offset from `f` instead of the environment.
    #[must_use]
    pub fn with_scroll_position_override(mut self, f: impl Fn() -> f64 + 'static) -> Self {
        self.scroll_position_override = Some(Box::new(f));
        self
    }
}

impl<L: fmt::Debug> fmt::Debug for Options<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("config", &self.config)
            .field("listener", &self.listener)
            .field(
                "scroll_position_override",
                &self.scroll_position_override.is_some(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ObserverConfig::default();
        assert_eq!(config.axis, Axis::Block);
        assert!(config.continuous_tracking, "tracking is continuous by default");
        assert!(config.watch_resize, "resize is watched by default");
        assert_eq!(config.start_target_edge, TargetEdge::Start);
        assert_eq!(config.end_target_edge, TargetEdge::End);
        assert_eq!(config.start_viewport_edge, 1.0);
        assert_eq!(config.end_viewport_edge, 0.0);
    }

    #[test]
    fn builders_override_single_fields() {
        let config = ObserverConfig::new()
            .with_axis(Axis::Inline)
            .with_continuous_tracking(false)
            .with_target_edges(TargetEdge::Center, TargetEdge::Fraction(0.2))
            .with_viewport_edges(0.75, 0.25);
        assert_eq!(config.axis, Axis::Inline);
        assert!(!config.continuous_tracking, "continuous tracking disabled");
        assert!(config.watch_resize, "untouched field keeps its default");
        assert_eq!(config.start_target_edge, TargetEdge::Center);
        assert_eq!(config.end_target_edge, TargetEdge::Fraction(0.2));
        assert_eq!(config.start_viewport_edge, 0.75);
        assert_eq!(config.end_viewport_edge, 0.25);
    }

    #[test]
    fn scroll_override_is_optional() {
        let options = Options::new(()).with_scroll_position_override(|| 42.0);
        let scroll = options
            .scroll_position_override
            .as_ref()
            .map(|f| f());
        assert_eq!(scroll, Some(42.0));
        assert!(Options::new(()).scroll_position_override.is_none(), "no override by default");
    }
}
