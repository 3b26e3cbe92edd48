// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll progress tracking for animation and UI code.
//!
//! `scroll_progress_core` measures how far an element has scrolled through
//! the viewport and reports it as a clamped fraction plus discrete
//! enter/leave/between-edges transitions. It is `no_std` compatible (with
//! `alloc`) and never touches a live host environment: every host capability
//! is injected through the traits in [`host`].
//!
//! # Architecture
//!
//! ```text
//!   ObserverConfig ──► Geometry::measure() ──► Geometry
//!                                                 │
//!   FrameScheduler ──► tick() ──► progress() ◄────┘
//!                                     │
//!                                     ▼
//!                      TrackingState::advance() ──► ProgressListener
//! ```
//!
//! **[`config`]**: Plain-data [`ObserverConfig`](config::ObserverConfig)
//! with documented defaults, plus [`Options`](config::Options) carrying the
//! listener and an optional scroll override.
//!
//! **[`edge`]**: Named or fractional trigger edges on the tracked element.
//!
//! **[`geometry`]**: Element position/size and the four trigger offsets,
//! recomputed on construction and resize.
//!
//! **[`progress`]**: The pure scroll-to-progress function with its
//! degenerate-geometry guard.
//!
//! **[`transition`]**: Visibility and between-edges state machine.
//!
//! **[`frame_loop`]**: Start/stop/tick bookkeeping over an injected
//! [`FrameScheduler`](host::FrameScheduler), including one-shot mode and
//! cancellation.
//!
//! **[`observer`]**: [`ScrollProgressObserver`](observer::ScrollProgressObserver),
//! which wires the above to host signals and a
//! [`ProgressListener`](listener::ProgressListener).
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! observer instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod axis;
pub mod config;
pub mod edge;
pub mod error;
pub mod frame_loop;
pub mod geometry;
pub mod host;
pub mod listener;
pub mod observer;
pub mod progress;
pub mod trace;
pub mod transition;

pub use axis::Axis;
pub use config::{ObserverConfig, Options};
pub use edge::TargetEdge;
pub use error::InvalidConfiguration;
pub use host::Environment;
pub use listener::{Callbacks, NoopListener, ProgressListener};
pub use observer::ScrollProgressObserver;
