// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exporter for recorded sessions.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes a JSON array with one object per event, in recording order.
//! Every object carries a `"type"` field naming the event. Non-finite floats
//! are written as `null`.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::pretty::{crossing_name, reason_name, signal_name};
use crate::recorder::{RecordedEvent, decode};

/// Converts a single recorded event to a JSON object.
#[must_use]
pub fn to_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::Geometry(e) => {
            let t = &e.geometry.target;
            let o = &e.geometry.offsets;
            json!({
                "type": "geometry",
                "reason": reason_name(e.reason),
                "target": {
                    "start": t.start,
                    "size_main": t.size_main,
                    "size_cross": t.size_cross,
                },
                "offsets": {
                    "start_target": o.start_target,
                    "end_target": o.end_target,
                    "start_viewport": o.start_viewport,
                    "end_viewport": o.end_viewport,
                },
                "travel": e.geometry.travel(),
            })
        }
        RecordedEvent::Visibility(e) => json!({
            "type": if e.entered { "enter" } else { "leave" },
            "last_progress": e.last_progress,
            "was_between_edges": e.was_between_edges,
        }),
        RecordedEvent::Tick(e) => json!({
            "type": "tick",
            "frame": e.frame_index,
            "scroll": e.scroll,
            "progress": e.progress,
            "changed": e.changed,
            "degenerate": e.degenerate,
        }),
        RecordedEvent::EdgeCrossing(e) => json!({
            "type": "edge",
            "frame": e.frame_index,
            "crossing": crossing_name(e.crossing),
            "progress": e.progress,
        }),
        RecordedEvent::IgnoredSignal(e) => json!({
            "type": "ignored",
            "signal": signal_name(e.signal),
        }),
        RecordedEvent::Teardown(e) => json!({
            "type": "teardown",
            "subscriptions": e.subscriptions,
            "cancelled_frame": e.cancelled_frame,
        }),
    }
}

/// Exports recorded events as a pretty-printed JSON array.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = decode(bytes).map(|e| to_value(&e)).collect();
    serde_json::to_writer_pretty(writer, &events).map_err(io::Error::other)
}
