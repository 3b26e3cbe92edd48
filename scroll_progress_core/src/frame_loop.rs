// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Start/stop/tick bookkeeping over a [`FrameScheduler`].
//!
//! [`FrameLoop`] tracks whether a frame request is outstanding so that:
//!
//! - [`start`](FrameLoop::start) never double-requests,
//! - [`stop`](FrameLoop::stop) cancels exactly the outstanding request,
//! - a tick delivered after a cancel is rejected by
//!   [`begin_tick`](FrameLoop::begin_tick) instead of running.
//!
//! In one-shot mode (`continuous == false`) the loop runs a single tick per
//! start/stop cycle and never reschedules.

use crate::host::FrameScheduler;

/// Frame loop controller.
#[derive(Debug)]
pub struct FrameLoop<S> {
    scheduler: S,
    continuous: bool,
    pending: bool,
    ticked: bool,
}

impl<S: FrameScheduler> FrameLoop<S> {
    /// Creates a stopped loop.
    #[must_use]
    pub fn new(scheduler: S, continuous: bool) -> Self {
        Self {
            scheduler,
            continuous,
            pending: false,
            ticked: false,
        }
    }

    /// Requests the next tick.
    ///
    /// No-op while a request is outstanding, and in one-shot mode once a tick
    /// has run since the last [`stop`](Self::stop).
    pub fn start(&mut self) {
        if self.pending || (!self.continuous && self.ticked) {
            return;
        }
        self.scheduler.request_frame();
        self.pending = true;
    }

    /// Cancels any outstanding request. Safe to call when idle.
    pub fn stop(&mut self) {
        if self.pending {
            self.scheduler.cancel_frame();
            self.pending = false;
        }
        self.ticked = false;
    }

    /// Claims a delivered tick.
    ///
    /// Returns `false` when no request is outstanding (the tick was cancelled
    /// or is spurious); the caller must then skip all per-tick work.
    pub fn begin_tick(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.ticked = true;
        true
    }

    /// Reschedules after a claimed tick in continuous mode.
    pub fn end_tick(&mut self) {
        if self.continuous && !self.pending {
            self.scheduler.request_frame();
            self.pending = true;
        }
    }

    /// Returns `true` while a frame request is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Returns a reference to the scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct CountingScheduler {
        requests: u32,
        cancels: u32,
    }

    impl FrameScheduler for CountingScheduler {
        fn request_frame(&mut self) {
            self.requests += 1;
        }

        fn cancel_frame(&mut self) {
            self.cancels += 1;
        }
    }

    #[test]
    fn start_does_not_double_request() {
        let mut frame_loop = FrameLoop::new(CountingScheduler::default(), true);
        frame_loop.start();
        frame_loop.start();
        assert_eq!(frame_loop.scheduler().requests, 1);
        assert!(frame_loop.is_pending(), "request outstanding");
    }

    #[test]
    fn continuous_loop_reschedules() {
        let mut frame_loop = FrameLoop::new(CountingScheduler::default(), true);
        frame_loop.start();
        for _ in 0..3 {
            assert!(frame_loop.begin_tick(), "tick was requested");
            frame_loop.end_tick();
        }
        assert_eq!(frame_loop.scheduler().requests, 4);
        assert!(frame_loop.is_pending(), "next tick requested");
    }

    #[test]
    fn one_shot_loop_ticks_once_per_start() {
        let mut frame_loop = FrameLoop::new(CountingScheduler::default(), false);
        frame_loop.start();
        assert!(frame_loop.begin_tick(), "first tick runs");
        frame_loop.end_tick();
        assert!(!frame_loop.is_pending(), "one-shot does not reschedule");

        frame_loop.start();
        assert_eq!(frame_loop.scheduler().requests, 1, "already ticked");

        frame_loop.stop();
        frame_loop.start();
        assert_eq!(frame_loop.scheduler().requests, 2, "stop re-arms one-shot");
    }

    #[test]
    fn stop_cancels_and_rejects_late_tick() {
        let mut frame_loop = FrameLoop::new(CountingScheduler::default(), true);
        frame_loop.start();
        frame_loop.stop();
        assert_eq!(frame_loop.scheduler().cancels, 1);
        assert!(!frame_loop.begin_tick(), "cancelled tick must not run");
    }

    #[test]
    fn stop_when_idle_does_not_cancel() {
        let mut frame_loop = FrameLoop::new(CountingScheduler::default(), true);
        frame_loop.stop();
        assert_eq!(frame_loop.scheduler().cancels, 0);
    }
}
