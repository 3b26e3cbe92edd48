// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event delivery to application code.
//!
//! [`ProgressListener`] has one method per event, each defaulting to a
//! no-op, so implementors override only what they use. [`Callbacks`] is a
//! ready-made listener built from optional closures.

use alloc::boxed::Box;
use core::fmt;

/// Receives tracking events from a
/// [`ScrollProgressObserver`](crate::observer::ScrollProgressObserver).
///
/// Within one tick, [`on_progress`](Self::on_progress) fires before
/// [`on_enter_between_edges`](Self::on_enter_between_edges) or
/// [`on_leave_between_edges`](Self::on_leave_between_edges).
pub trait ProgressListener {
    /// The element started intersecting the viewport.
    fn on_enter_view(&mut self) {}

    /// The element stopped intersecting the viewport. No separate
    /// [`on_leave_between_edges`](Self::on_leave_between_edges) fires, even
    /// if progress was between edges.
    fn on_leave_view(&mut self) {}

    /// Progress moved strictly inside (0, 1).
    fn on_enter_between_edges(&mut self) {}

    /// Progress reached 0 or 1 from strictly inside.
    fn on_leave_between_edges(&mut self) {}

    /// Progress changed. `progress` is in `0.0..=1.0`.
    fn on_progress(&mut self, progress: f64) {
        _ = progress;
    }
}

/// A listener that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopListener;

impl ProgressListener for NoopListener {}

impl<L: ProgressListener + ?Sized> ProgressListener for Box<L> {
    fn on_enter_view(&mut self) {
        (**self).on_enter_view();
    }

    fn on_leave_view(&mut self) {
        (**self).on_leave_view();
    }

    fn on_enter_between_edges(&mut self) {
        (**self).on_enter_between_edges();
    }

    fn on_leave_between_edges(&mut self) {
        (**self).on_leave_between_edges();
    }

    fn on_progress(&mut self, progress: f64) {
        (**self).on_progress(progress);
    }
}

type Hook = Box<dyn FnMut()>;
type ProgressHook = Box<dyn FnMut(f64)>;

/// A [`ProgressListener`] assembled from optional closures.
///
/// ```rust,ignore
/// let listener = Callbacks::new()
///     .with_enter_view(|| log("entered"))
///     .with_progress(|p| set_opacity(p));
/// ```
#[derive(Default)]
pub struct Callbacks {
    enter_view: Option<Hook>,
    leave_view: Option<Hook>,
    enter_between_edges: Option<Hook>,
    leave_between_edges: Option<Hook>,
    progress: Option<ProgressHook>,
}

impl Callbacks {
    /// Creates a listener with no hooks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the enter-view hook.
    #[must_use]
    pub fn with_enter_view(mut self, f: impl FnMut() + 'static) -> Self {
        self.enter_view = Some(Box::new(f));
        self
    }

    /// Sets the leave-view hook.
    #[must_use]
    pub fn with_leave_view(mut self, f: impl FnMut() + 'static) -> Self {
        self.leave_view = Some(Box::new(f));
        self
    }

    /// Sets the enter-between-edges hook.
    #[must_use]
    pub fn with_enter_between_edges(mut self, f: impl FnMut() + 'static) -> Self {
        self.enter_between_edges = Some(Box::new(f));
        self
    }

    /// Sets the leave-between-edges hook.
    #[must_use]
    pub fn with_leave_between_edges(mut self, f: impl FnMut() + 'static) -> Self {
        self.leave_between_edges = Some(Box::new(f));
        self
    }

    /// Sets the progress hook.
    #[must_use]
    pub fn with_progress(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.progress = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("enter_view", &self.enter_view.is_some())
            .field("leave_view", &self.leave_view.is_some())
            .field("enter_between_edges", &self.enter_between_edges.is_some())
            .field("leave_between_edges", &self.leave_between_edges.is_some())
            .field("progress", &self.progress.is_some())
            .finish()
    }
}

impl ProgressListener for Callbacks {
    fn on_enter_view(&mut self) {
        if let Some(f) = &mut self.enter_view {
            f();
        }
    }

    fn on_leave_view(&mut self) {
        if let Some(f) = &mut self.leave_view {
            f();
        }
    }

    fn on_enter_between_edges(&mut self) {
        if let Some(f) = &mut self.enter_between_edges {
            f();
        }
    }

    fn on_leave_between_edges(&mut self) {
        if let Some(f) = &mut self.leave_between_edges {
            f();
        }
    }

    fn on_progress(&mut self, progress: f64) {
        if let Some(f) = &mut self.progress {
            f(progress);
        }
    }
}
