// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host collaborator contracts.
//!
//! The observer never reads global environment state. Everything it needs
//! from the host comes through these traits:
//!
//! - **[`TargetElement`]**: the tracked element's viewport-relative bounding
//!   box.
//! - **[`ScrollPositionProvider`]**: the current scroll offset along an axis.
//! - **[`ViewportSizeProvider`]**: the current viewport size.
//! - **[`FrameScheduler`]**: a cancelable one-shot "next frame" request. When
//!   the frame arrives the host calls
//!   [`ScrollProgressObserver::tick`](crate::observer::ScrollProgressObserver::tick).
//! - **[`Subscription`]**: a live registration with a visibility source,
//!   resize source, or event target, disconnected on teardown.
//!
//! Signals flow the other way: the host calls
//! [`intersection_changed`](crate::observer::ScrollProgressObserver::intersection_changed),
//! [`element_resized`](crate::observer::ScrollProgressObserver::element_resized), and
//! [`viewport_resized`](crate::observer::ScrollProgressObserver::viewport_resized)
//! as its sources report changes.
//!
//! Closures implement the query traits, so tests and simple hosts can pass
//! `move || rect` or `|_axis| scroll` directly.

use alloc::boxed::Box;

use kurbo::{Rect, Size};

use crate::axis::Axis;

/// The tracked element.
pub trait TargetElement {
    /// Returns the element's bounding box relative to the viewport.
    fn bounding_rect(&self) -> Rect;
}

impl<F: Fn() -> Rect> TargetElement for F {
    fn bounding_rect(&self) -> Rect {
        self()
    }
}

/// Reads the current absolute scroll offset.
pub trait ScrollPositionProvider {
    /// Returns the scroll offset along `axis`.
    fn scroll_position(&self, axis: Axis) -> f64;
}

impl<F: Fn(Axis) -> f64> ScrollPositionProvider for F {
    fn scroll_position(&self, axis: Axis) -> f64 {
        self(axis)
    }
}

/// Reads the current viewport size.
pub trait ViewportSizeProvider {
    /// Returns the viewport size in the same units as [`TargetElement`]
    /// bounds.
    fn viewport_size(&self) -> Size;
}

impl<F: Fn() -> Size> ViewportSizeProvider for F {
    fn viewport_size(&self) -> Size {
        self()
    }
}

/// A cancelable one-shot frame request.
pub trait FrameScheduler {
    /// Requests a single frame callback. At most one request is outstanding
    /// at a time; the caller never requests twice without an intervening
    /// tick or cancel.
    fn request_frame(&mut self);

    /// Cancels the outstanding request, if any. The host must not deliver a
    /// tick for a cancelled request.
    fn cancel_frame(&mut self);
}

/// A live registration with an external signal source.
pub trait Subscription {
    /// Stops delivery of further signals. Called once on teardown.
    fn disconnect(&mut self);
}

impl<F: FnMut()> Subscription for F {
    fn disconnect(&mut self) {
        self();
    }
}

/// Scroll and viewport providers shared by all observers of one host.
pub struct Environment<S> {
    /// Schedules frame ticks.
    pub scheduler: S,
    /// Reads the scroll offset.
    pub scroll: Box<dyn ScrollPositionProvider>,
    /// Reads the viewport size.
    pub viewport: Box<dyn ViewportSizeProvider>,
}

impl<S> Environment<S> {
    /// Bundles a scheduler with scroll and viewport providers.
    #[must_use]
    pub fn new(
        scheduler: S,
        scroll: impl ScrollPositionProvider + 'static,
        viewport: impl ViewportSizeProvider + 'static,
    ) -> Self {
        Self {
            scheduler,
            scroll: Box::new(scroll),
            viewport: Box::new(viewport),
        }
    }
}

impl<S: core::fmt::Debug> core::fmt::Debug for Environment<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Environment")
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}
