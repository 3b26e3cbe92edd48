// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use scroll_progress_core::trace::{
    EdgeCrossingEvent, GeometryEvent, IgnoredSignalEvent, RecomputeReason, SignalKind,
    TeardownEvent, TickEvent, TraceSink, VisibilityEvent,
};
use scroll_progress_core::transition::EdgeCrossing;

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

pub(crate) fn reason_name(reason: RecomputeReason) -> &'static str {
    match reason {
        RecomputeReason::Construct => "construct",
        RecomputeReason::Manual => "manual",
        RecomputeReason::ElementResize => "element-resize",
        RecomputeReason::ViewportResize => "viewport-resize",
    }
}

pub(crate) fn signal_name(signal: SignalKind) -> &'static str {
    match signal {
        SignalKind::Intersection => "intersection",
        SignalKind::ElementResize => "element-resize",
        SignalKind::ViewportResize => "viewport-resize",
        SignalKind::Tick => "tick",
    }
}

pub(crate) fn crossing_name(crossing: EdgeCrossing) -> &'static str {
    match crossing {
        EdgeCrossing::Entered => "entered",
        EdgeCrossing::Left => "left",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_geometry(&mut self, e: &GeometryEvent) {
        let t = &e.geometry.target;
        let o = &e.geometry.offsets;
        let _ = writeln!(
            self.writer,
            "[geometry] reason={} start={:.1} size={:.1}x{:.1} offsets=({:.1}, {:.1}, {:.1}, {:.1}) travel={:.1}",
            reason_name(e.reason),
            t.start,
            t.size_main,
            t.size_cross,
            o.start_target,
            o.end_target,
            o.start_viewport,
            o.end_viewport,
            e.geometry.travel(),
        );
    }

    fn on_visibility(&mut self, e: &VisibilityEvent) {
        let tag = if e.entered { "enter" } else { "leave" };
        let _ = write!(self.writer, "[{tag}]");
        if let Some(p) = e.last_progress {
            let _ = write!(self.writer, " last_progress={p:.4}");
        }
        if e.was_between_edges {
            let _ = write!(self.writer, " was_between_edges");
        }
        let _ = writeln!(self.writer);
    }

    fn on_tick(&mut self, e: &TickEvent) {
        let _ = write!(
            self.writer,
            "[tick] frame={} scroll={:.1} progress={:.4}",
            e.frame_index, e.scroll, e.progress,
        );
        if e.changed {
            let _ = write!(self.writer, " changed");
        }
        if e.degenerate {
            let _ = write!(self.writer, " degenerate");
        }
        let _ = writeln!(self.writer);
    }

    fn on_edge_crossing(&mut self, e: &EdgeCrossingEvent) {
        let _ = writeln!(
            self.writer,
            "[edge] frame={} {} progress={:.4}",
            e.frame_index,
            crossing_name(e.crossing),
            e.progress,
        );
    }

    fn on_ignored_signal(&mut self, e: &IgnoredSignalEvent) {
        let _ = writeln!(self.writer, "[ignored] signal={}", signal_name(e.signal));
    }

    fn on_teardown(&mut self, e: &TeardownEvent) {
        let _ = writeln!(
            self.writer,
            "[teardown] subscriptions={} cancelled_frame={}",
            e.subscriptions, e.cancelled_frame,
        );
    }
}
