// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].
//!
//! Each record is a one-byte tag followed by the event's fields in
//! declaration order. `f64` values are stored as their IEEE-754 bit pattern,
//! so NaN payloads and signed zeros survive a round trip.

use scroll_progress_core::geometry::{EdgeOffsets, Geometry, TargetGeometry};
use scroll_progress_core::trace::{
    EdgeCrossingEvent, GeometryEvent, IgnoredSignalEvent, RecomputeReason, SignalKind,
    TeardownEvent, TickEvent, TraceSink, VisibilityEvent,
};
use scroll_progress_core::transition::EdgeCrossing;

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_GEOMETRY: u8 = 1;
const TAG_VISIBILITY: u8 = 2;
const TAG_TICK: u8 = 3;
const TAG_EDGE_CROSSING: u8 = 4;
const TAG_IGNORED_SIGNAL: u8 = 5;
const TAG_TEARDOWN: u8 = 6;

const TICK_CHANGED: u8 = 1 << 0;
const TICK_DEGENERATE: u8 = 1 << 1;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_option_f64(&mut self, v: Option<f64>) {
        match v {
            Some(val) => {
                self.write_u8(1);
                self.write_f64(val);
            }
            None => {
                self.write_u8(0);
                self.write_f64(0.0);
            }
        }
    }

    fn write_reason(&mut self, r: RecomputeReason) {
        self.write_u8(match r {
            RecomputeReason::Construct => 0,
            RecomputeReason::Manual => 1,
            RecomputeReason::ElementResize => 2,
            RecomputeReason::ViewportResize => 3,
        });
    }

    fn write_signal(&mut self, s: SignalKind) {
        self.write_u8(match s {
            SignalKind::Intersection => 0,
            SignalKind::ElementResize => 1,
            SignalKind::ViewportResize => 2,
            SignalKind::Tick => 3,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_geometry(&mut self, e: &GeometryEvent) {
        let target = &e.geometry.target;
        let offsets = &e.geometry.offsets;
        self.write_u8(TAG_GEOMETRY);
        self.write_reason(e.reason);
        self.write_f64(target.start);
        self.write_f64(target.size_main);
        self.write_f64(target.size_cross);
        self.write_f64(offsets.start_target);
        self.write_f64(offsets.end_target);
        self.write_f64(offsets.start_viewport);
        self.write_f64(offsets.end_viewport);
    }

    fn on_visibility(&mut self, e: &VisibilityEvent) {
        self.write_u8(TAG_VISIBILITY);
        self.write_u8(u8::from(e.entered));
        self.write_option_f64(e.last_progress);
        self.write_u8(u8::from(e.was_between_edges));
    }

    fn on_tick(&mut self, e: &TickEvent) {
        let mut flags = 0;
        if e.changed {
            flags |= TICK_CHANGED;
        }
        if e.degenerate {
            flags |= TICK_DEGENERATE;
        }
        self.write_u8(TAG_TICK);
        self.write_u64(e.frame_index);
        self.write_f64(e.scroll);
        self.write_f64(e.progress);
        self.write_u8(flags);
    }

    fn on_edge_crossing(&mut self, e: &EdgeCrossingEvent) {
        self.write_u8(TAG_EDGE_CROSSING);
        self.write_u64(e.frame_index);
        self.write_u8(match e.crossing {
            EdgeCrossing::Entered => 0,
            EdgeCrossing::Left => 1,
        });
        self.write_f64(e.progress);
    }

    fn on_ignored_signal(&mut self, e: &IgnoredSignalEvent) {
        self.write_u8(TAG_IGNORED_SIGNAL);
        self.write_signal(e.signal);
    }

    fn on_teardown(&mut self, e: &TeardownEvent) {
        self.write_u8(TAG_TEARDOWN);
        self.write_u32(e.subscriptions);
        self.write_u8(u8::from(e.cancelled_frame));
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug)]
pub enum RecordedEvent {
    /// A [`GeometryEvent`].
    Geometry(GeometryEvent),
    /// A [`VisibilityEvent`].
    Visibility(VisibilityEvent),
    /// A [`TickEvent`].
    Tick(TickEvent),
    /// An [`EdgeCrossingEvent`].
    EdgeCrossing(EdgeCrossingEvent),
    /// An [`IgnoredSignalEvent`].
    IgnoredSignal(IgnoredSignalEvent),
    /// A [`TeardownEvent`].
    Teardown(TeardownEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first truncated record or unknown tag.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let end = self.pos.checked_add(N)?;
        let bytes = self.data.get(self.pos..end)?.try_into().ok()?;
        self.pos = end;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[v]| v)
    }

    fn read_bool(&mut self) -> Option<bool> {
        self.read_u8().map(|v| v != 0)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.read_u64().map(f64::from_bits)
    }

    fn read_option_f64(&mut self) -> Option<Option<f64>> {
        let present = self.read_u8()?;
        let val = self.read_f64()?;
        Some(if present != 0 { Some(val) } else { None })
    }

    fn read_reason(&mut self) -> Option<RecomputeReason> {
        Some(match self.read_u8()? {
            0 => RecomputeReason::Construct,
            1 => RecomputeReason::Manual,
            2 => RecomputeReason::ElementResize,
            _ => RecomputeReason::ViewportResize,
        })
    }

    fn read_signal(&mut self) -> Option<SignalKind> {
        Some(match self.read_u8()? {
            0 => SignalKind::Intersection,
            1 => SignalKind::ElementResize,
            2 => SignalKind::ViewportResize,
            _ => SignalKind::Tick,
        })
    }

    fn decode_geometry(&mut self) -> Option<RecordedEvent> {
        let reason = self.read_reason()?;
        let target = TargetGeometry {
            start: self.read_f64()?,
            size_main: self.read_f64()?,
            size_cross: self.read_f64()?,
        };
        let offsets = EdgeOffsets {
            start_target: self.read_f64()?,
            end_target: self.read_f64()?,
            start_viewport: self.read_f64()?,
            end_viewport: self.read_f64()?,
        };
        Some(RecordedEvent::Geometry(GeometryEvent {
            reason,
            geometry: Geometry { target, offsets },
        }))
    }

    fn decode_visibility(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Visibility(VisibilityEvent {
            entered: self.read_bool()?,
            last_progress: self.read_option_f64()?,
            was_between_edges: self.read_bool()?,
        }))
    }

    fn decode_tick(&mut self) -> Option<RecordedEvent> {
        let frame_index = self.read_u64()?;
        let scroll = self.read_f64()?;
        let progress = self.read_f64()?;
        let flags = self.read_u8()?;
        Some(RecordedEvent::Tick(TickEvent {
            frame_index,
            scroll,
            progress,
            changed: flags & TICK_CHANGED != 0,
            degenerate: flags & TICK_DEGENERATE != 0,
        }))
    }

    fn decode_edge_crossing(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::EdgeCrossing(EdgeCrossingEvent {
            frame_index: self.read_u64()?,
            crossing: if self.read_u8()? == 0 {
                EdgeCrossing::Entered
            } else {
                EdgeCrossing::Left
            },
            progress: self.read_f64()?,
        }))
    }

    fn decode_ignored_signal(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::IgnoredSignal(IgnoredSignalEvent {
            signal: self.read_signal()?,
        }))
    }

    fn decode_teardown(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Teardown(TeardownEvent {
            subscriptions: self.read_u32()?,
            cancelled_frame: self.read_bool()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_GEOMETRY => self.decode_geometry(),
            TAG_VISIBILITY => self.decode_visibility(),
            TAG_TICK => self.decode_tick(),
            TAG_EDGE_CROSSING => self.decode_edge_crossing(),
            TAG_IGNORED_SIGNAL => self.decode_ignored_signal(),
            TAG_TEARDOWN => self.decode_teardown(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
