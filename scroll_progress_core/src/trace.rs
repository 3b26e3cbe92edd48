// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the observer.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! observer calls as geometry is measured, visibility changes, and ticks run.
//! All method bodies default to no-ops, so implementing only the events you
//! care about is fine.
//!
//! [`Tracer`] owns an optional boxed [`TraceSink`]. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing and
//! [`Tracer::set_sink`] drops the sink. When **on**, each method performs a
//! single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use alloc::boxed::Box;

use crate::geometry::Geometry;
use crate::transition::EdgeCrossing;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Why geometry was recomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecomputeReason {
    /// Initial measurement during construction.
    Construct,
    /// Explicit [`resize`](crate::observer::ScrollProgressObserver::resize).
    Manual,
    /// The resize source reported an element size change.
    ElementResize,
    /// The host reported a viewport size change.
    ViewportResize,
}

/// Which host signal was delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalKind {
    /// Visibility source.
    Intersection,
    /// Element resize source.
    ElementResize,
    /// Viewport resize source.
    ViewportResize,
    /// Frame scheduler.
    Tick,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after geometry is measured.
#[derive(Clone, Copy, Debug)]
pub struct GeometryEvent {
    /// What triggered the measurement.
    pub reason: RecomputeReason,
    /// The new geometry.
    pub geometry: Geometry,
}

/// Emitted on a visibility transition.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityEvent {
    /// `true` when entering view, `false` when leaving.
    pub entered: bool,
    /// Progress before the transition reset it.
    pub last_progress: Option<f64>,
    /// Whether between-edges state was cleared by this transition.
    pub was_between_edges: bool,
}

/// Emitted for every tick that ran.
#[derive(Clone, Copy, Debug)]
pub struct TickEvent {
    /// Monotonic count of ticks run by this observer.
    pub frame_index: u64,
    /// Scroll offset read for this tick.
    pub scroll: f64,
    /// Computed progress.
    pub progress: f64,
    /// Whether progress differed from the stored value.
    pub changed: bool,
    /// Whether geometry travel was zero, negative, or non-finite.
    pub degenerate: bool,
}

/// Emitted when progress enters or leaves the open interval (0, 1).
#[derive(Clone, Copy, Debug)]
pub struct EdgeCrossingEvent {
    /// Tick that caused the crossing.
    pub frame_index: u64,
    /// Crossing direction.
    pub crossing: EdgeCrossing,
    /// Progress after the crossing.
    pub progress: f64,
}

/// Emitted when a signal arrives after teardown and is dropped.
#[derive(Clone, Copy, Debug)]
pub struct IgnoredSignalEvent {
    /// The late signal.
    pub signal: SignalKind,
}

/// Emitted once on teardown.
#[derive(Clone, Copy, Debug)]
pub struct TeardownEvent {
    /// Number of subscriptions disconnected.
    pub subscriptions: u32,
    /// Whether an outstanding frame request was cancelled.
    pub cancelled_frame: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the observer.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after geometry is measured.
    fn on_geometry(&mut self, e: &GeometryEvent) {
        _ = e;
    }

    /// Called on a visibility transition.
    fn on_visibility(&mut self, e: &VisibilityEvent) {
        _ = e;
    }

    /// Called for every tick that ran.
    fn on_tick(&mut self, e: &TickEvent) {
        _ = e;
    }

    /// Called when progress crosses an edge.
    fn on_edge_crossing(&mut self, e: &EdgeCrossingEvent) {
        _ = e;
    }

    /// Called when a late signal is dropped.
    fn on_ignored_signal(&mut self, e: &IgnoredSignalEvent) {
        _ = e;
    }

    /// Called on teardown.
    fn on_teardown(&mut self, e: &TeardownEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Owning wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
#[derive(Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Tracer {
    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Routes subsequent events to `sink`, replacing any previous sink.
    #[inline]
    pub fn set_sink(&mut self, sink: Box<dyn TraceSink>) {
        #[cfg(feature = "trace")]
        {
            self.sink = Some(sink);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
        }
    }

    /// Removes and returns the current sink.
    #[inline]
    pub fn take_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        #[cfg(feature = "trace")]
        {
            self.sink.take()
        }
        #[cfg(not(feature = "trace"))]
        {
            None
        }
    }

    /// Emits a [`GeometryEvent`].
    #[inline]
    pub fn geometry(&mut self, e: &GeometryEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_geometry(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`VisibilityEvent`].
    #[inline]
    pub fn visibility(&mut self, e: &VisibilityEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_visibility(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TickEvent`].
    #[inline]
    pub fn tick(&mut self, e: &TickEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_tick(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`EdgeCrossingEvent`].
    #[inline]
    pub fn edge_crossing(&mut self, e: &EdgeCrossingEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_edge_crossing(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`IgnoredSignalEvent`].
    #[inline]
    pub fn ignored_signal(&mut self, e: &IgnoredSignalEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_ignored_signal(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TeardownEvent`].
    #[inline]
    pub fn teardown(&mut self, e: &TeardownEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_teardown(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tick() -> TickEvent {
        TickEvent {
            frame_index: 3,
            scroll: 640.0,
            progress: 0.25,
            changed: true,
            degenerate: false,
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_tick(&sample_tick());
        sink.on_geometry(&GeometryEvent {
            reason: RecomputeReason::Construct,
            geometry: Geometry::default(),
        });
        sink.on_teardown(&TeardownEvent {
            subscriptions: 0,
            cancelled_frame: false,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.tick(&sample_tick());
        tracer.ignored_signal(&IgnoredSignalEvent {
            signal: SignalKind::Tick,
        });
        assert!(tracer.take_sink().is_none(), "no sink installed");
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::rc::Rc;
        use alloc::vec::Vec;
        use core::cell::RefCell;

        struct RecordingSink {
            ticks: Rc<RefCell<Vec<u64>>>,
        }
        impl TraceSink for RecordingSink {
            fn on_tick(&mut self, e: &TickEvent) {
                self.ticks.borrow_mut().push(e.frame_index);
            }
        }

        let ticks = Rc::new(RefCell::new(Vec::new()));
        let mut tracer = Tracer::none();
        tracer.set_sink(Box::new(RecordingSink {
            ticks: Rc::clone(&ticks),
        }));
        tracer.tick(&sample_tick());
        assert_eq!(*ticks.borrow(), [3]);
    }
}
