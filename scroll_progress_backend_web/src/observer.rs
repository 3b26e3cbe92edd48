// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser-wired scroll progress observer.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};

use scroll_progress_core::trace::TraceSink;
use scroll_progress_core::{
    Environment, InvalidConfiguration, Options, ProgressListener, ScrollProgressObserver,
};
use web_sys::Element;

use crate::dom::{DomTarget, WindowScroll, WindowViewport};
use crate::error::WebObserverError;
use crate::raf::RafScheduler;
use crate::shared::SharedObserver;
use crate::signals::{connect_element_resize, connect_intersection, connect_viewport_resize};

/// Options accepted by [`WebScrollProgressObserver::new`].
pub type WebOptions<L> = Options<L>;

/// The core observer type behind a [`WebScrollProgressObserver`].
pub type DomObserver<L> = ScrollProgressObserver<DomTarget, L, RafScheduler>;

/// A [`ScrollProgressObserver`] driven by browser signal sources.
///
/// Construction wires:
///
/// - `requestAnimationFrame` as the frame scheduler,
/// - an `IntersectionObserver` on the element for visibility,
/// - a `ResizeObserver` on the element and a window `resize` listener when
///   [`watch_resize`](scroll_progress_core::ObserverConfig::watch_resize) is
///   set.
///
/// Browser callbacks hold only weak references, so dropping this handle
/// tears the observer down.
///
/// Listener code runs while the observer is dispatching a signal. From there,
/// [`destroy`](Self::destroy) (or dropping the handle) takes effect as soon as
/// the current signal has been handled, so no further frame is scheduled. The
/// queries return `None`, and [`resize`](Self::resize),
/// [`set_trace_sink`](Self::set_trace_sink), and [`with`](Self::with) do
/// nothing until the dispatch returns.
pub struct WebScrollProgressObserver<L: ProgressListener + 'static> {
    inner: Rc<SharedObserver<DomObserver<L>>>,
}

impl<L: ProgressListener + 'static> WebScrollProgressObserver<L> {
    /// Creates an observer for `target` and connects it to the browser.
    ///
    /// # Errors
    ///
    /// - [`WebObserverError::Config`] when `target` is `None`.
    /// - [`WebObserverError::NoWindow`] outside a window context.
    /// - [`WebObserverError::Js`] when a browser observer cannot be created.
    ///   Sources connected before the failure are disconnected again.
    pub fn new(
        target: Option<Element>,
        options: WebOptions<L>,
    ) -> Result<Self, WebObserverError> {
        let element = target.ok_or(InvalidConfiguration::MissingTarget)?;
        let window = web_sys::window().ok_or(WebObserverError::NoWindow)?;
        let watch_resize = options.config.watch_resize;

        let env = Environment::new(
            RafScheduler::new(),
            WindowScroll::new(window.clone()),
            WindowViewport::new(window.clone()),
        );
        let target = DomTarget::new(element.clone());
        let observer = ScrollProgressObserver::new(Some(target), options, env)?;
        let inner = Rc::new(SharedObserver::new(observer));
        let weak = Rc::downgrade(&inner);

        if let Some(observer) = inner.get() {
            observer.scheduler().set_callback(forward(&weak, |o| o.tick()));
        }

        let visibility = connect_intersection(&element, {
            let weak = weak.clone();
            move |is_intersecting| {
                with_observer(&weak, |o| o.intersection_changed(is_intersecting));
            }
        })?;
        inner.dispatch(|o| o.attach_subscription(visibility));

        if watch_resize {
            let element_resize =
                connect_element_resize(&element, forward(&weak, |o| o.element_resized()))?;
            inner.dispatch(|o| o.attach_subscription(element_resize));

            let viewport_resize =
                connect_viewport_resize(&window, forward(&weak, |o| o.viewport_resized()))?;
            inner.dispatch(|o| o.attach_subscription(viewport_resize));
        }

        Ok(Self { inner })
    }

    /// Recomputes geometry from the element's current bounds.
    pub fn resize(&self) {
        self.inner.dispatch(|o| o.resize());
    }

    /// Disconnects every browser source and cancels any pending frame.
    ///
    /// Called from a listener, teardown happens once the signal being
    /// dispatched has been handled.
    pub fn destroy(&self) {
        self.inner.destroy();
    }

    /// Whether the element intersects the viewport.
    #[must_use]
    pub fn is_in_view(&self) -> Option<bool> {
        self.inner.get()?.is_in_view()
    }

    /// Whether progress is strictly between 0 and 1.
    #[must_use]
    pub fn is_between_edges(&self) -> Option<bool> {
        self.inner.get()?.is_between_edges()
    }

    /// Latest progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.inner.get()?.progress()
    }

    /// Routes trace events to `sink`.
    pub fn set_trace_sink(&self, sink: Box<dyn TraceSink>) {
        self.inner.dispatch(|o| o.set_trace_sink(sink));
    }

    /// Runs `f` with the underlying observer, unless it is busy.
    pub fn with<R>(&self, f: impl FnOnce(&mut DomObserver<L>) -> R) -> Option<R> {
        self.inner.dispatch(f)
    }
}

impl<L: ProgressListener + 'static> Drop for WebScrollProgressObserver<L> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<L: ProgressListener + core::fmt::Debug + 'static> core::fmt::Debug
    for WebScrollProgressObserver<L>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.inner.get() {
            Some(o) => f
                .debug_struct("WebScrollProgressObserver")
                .field("observer", &*o)
                .finish(),
            None => f
                .debug_struct("WebScrollProgressObserver")
                .finish_non_exhaustive(),
        }
    }
}

/// Runs `f` on the observer if it is still alive and not already busy.
fn with_observer<L: ProgressListener + 'static>(
    weak: &Weak<SharedObserver<DomObserver<L>>>,
    f: impl FnOnce(&mut DomObserver<L>),
) {
    if let Some(shared) = weak.upgrade() {
        shared.dispatch(f);
    }
}

/// Builds a reusable browser callback that forwards to the observer.
fn forward<L: ProgressListener + 'static>(
    weak: &Weak<SharedObserver<DomObserver<L>>>,
    f: fn(&mut DomObserver<L>),
) -> impl FnMut() + 'static {
    let weak = weak.clone();
    move || with_observer(&weak, f)
}
