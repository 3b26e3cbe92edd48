// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroll progress observer.
//!
//! [`ScrollProgressObserver`] wires configuration, geometry, the transition
//! state machine, and the frame loop together. The host owns the signal
//! sources and forwards their signals:
//!
//! ```text
//!   visibility source ──► intersection_changed(bool) ──► FrameLoop::start/stop
//!   resize source     ──► element_resized() ─┐
//!   viewport source   ──► viewport_resized() ┴► Geometry::measure (synchronous)
//!   frame scheduler   ──► tick() ──► progress() ──► TrackingState::advance
//!                                                        │
//!                                    ProgressListener ◄──┘
//! ```
//!
//! After [`destroy`](ScrollProgressObserver::destroy) every entry point is
//! inert: late signals are dropped and no listener method runs again.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::config::{ObserverConfig, Options, ScrollOverride};
use crate::error::InvalidConfiguration;
use crate::frame_loop::FrameLoop;
use crate::geometry::Geometry;
use crate::host::{
    Environment, FrameScheduler, ScrollPositionProvider, Subscription, TargetElement,
    ViewportSizeProvider,
};
use crate::listener::ProgressListener;
use crate::progress::progress;
use crate::trace::{
    EdgeCrossingEvent, GeometryEvent, IgnoredSignalEvent, RecomputeReason, SignalKind,
    TeardownEvent, TickEvent, TraceSink, Tracer, VisibilityEvent,
};
use crate::transition::{EdgeCrossing, TrackingState};

/// Tracks one element's scroll progress through the viewport.
///
/// # Usage
///
/// ```rust,ignore
/// let mut observer = ScrollProgressObserver::new(Some(element), options, env)?;
/// observer.attach_subscription(intersection_registration);
///
/// // From the host's signal sources:
/// observer.intersection_changed(true);
/// observer.tick();
/// assert!(observer.progress().is_some());
///
/// observer.destroy();
/// ```
pub struct ScrollProgressObserver<T, L, S: FrameScheduler> {
    target: T,
    config: ObserverConfig,
    listener: L,
    scroll: Box<dyn ScrollPositionProvider>,
    scroll_override: Option<ScrollOverride>,
    viewport: Box<dyn ViewportSizeProvider>,
    frame_loop: FrameLoop<S>,
    geometry: Geometry,
    state: TrackingState,
    subscriptions: Vec<Box<dyn Subscription>>,
    frame_index: u64,
    destroyed: bool,
    tracer: Tracer,
}

impl<T, L, S> ScrollProgressObserver<T, L, S>
where
    T: TargetElement,
    L: ProgressListener,
    S: FrameScheduler,
{
    /// Creates an observer and measures the target's initial geometry.
    ///
    /// Nothing is scheduled until the first intersecting signal.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration::MissingTarget`] when `target` is
    /// `None`.
    pub fn new(
        target: Option<T>,
        options: Options<L>,
        env: Environment<S>,
    ) -> Result<Self, InvalidConfiguration> {
        let target = target.ok_or(InvalidConfiguration::MissingTarget)?;
        let Options {
            config,
            listener,
            scroll_position_override,
        } = options;

        let mut observer = Self {
            target,
            config,
            listener,
            scroll: env.scroll,
            scroll_override: scroll_position_override,
            viewport: env.viewport,
            frame_loop: FrameLoop::new(env.scheduler, config.continuous_tracking),
            geometry: Geometry::default(),
            state: TrackingState::new(),
            subscriptions: Vec::new(),
            frame_index: 0,
            destroyed: false,
            tracer: Tracer::none(),
        };
        observer.recompute(RecomputeReason::Construct);
        Ok(observer)
    }

    // -- signals -----------------------------------------------------------

    /// Handles a visibility signal from the host's intersection source.
    pub fn intersection_changed(&mut self, is_intersecting: bool) {
        if self.reject_late(SignalKind::Intersection) {
            return;
        }
        if is_intersecting {
            self.enter_view();
        } else {
            self.leave_view();
        }
    }

    /// Handles an element resize signal. Ignored unless
    /// [`ObserverConfig::watch_resize`] is set.
    pub fn element_resized(&mut self) {
        if self.reject_late(SignalKind::ElementResize) || !self.config.watch_resize {
            return;
        }
        self.recompute(RecomputeReason::ElementResize);
    }

    /// Handles a viewport resize signal. Ignored unless
    /// [`ObserverConfig::watch_resize`] is set.
    pub fn viewport_resized(&mut self) {
        if self.reject_late(SignalKind::ViewportResize) || !self.config.watch_resize {
            return;
        }
        self.recompute(RecomputeReason::ViewportResize);
    }

    /// Runs one frame: reads the scroll position, computes progress, and
    /// fires progress and edge-crossing events.
    ///
    /// A tick that was not requested (or was cancelled) does nothing.
    pub fn tick(&mut self) {
        if self.reject_late(SignalKind::Tick) || !self.frame_loop.begin_tick() {
            return;
        }
        if self.state.is_in_view() != Some(true) {
            return;
        }

        let scroll = self.scroll_position();
        let next = progress(scroll, &self.geometry);
        let travel = self.geometry.travel();
        let outcome = self.state.advance(next);

        let frame_index = self.frame_index;
        self.frame_index += 1;
        self.tracer.tick(&TickEvent {
            frame_index,
            scroll,
            progress: next,
            changed: outcome.progress_changed.is_some(),
            degenerate: !travel.is_finite() || travel <= 0.0,
        });

        if let Some(p) = outcome.progress_changed {
            self.listener.on_progress(p);
        }
        if let Some(crossing) = outcome.crossing {
            self.tracer.edge_crossing(&EdgeCrossingEvent {
                frame_index,
                crossing,
                progress: next,
            });
            match crossing {
                EdgeCrossing::Entered => self.listener.on_enter_between_edges(),
                EdgeCrossing::Left => self.listener.on_leave_between_edges(),
            }
        }

        self.frame_loop.end_tick();
    }

    // -- operations --------------------------------------------------------

    /// Recomputes geometry from the target's current bounds.
    ///
    /// Tracking state and the frame loop are left untouched. No-op after
    /// [`destroy`](Self::destroy).
    pub fn resize(&mut self) {
        if self.destroyed {
            return;
        }
        self.recompute(RecomputeReason::Manual);
    }

    /// Cancels any pending frame, disconnects every attached subscription,
    /// and makes the observer inert. Calling it again does nothing.
    pub fn destroy(&mut self) {
        if let Some(event) = self.teardown() {
            self.tracer.teardown(&event);
        }
    }

    /// Registers a signal-source subscription to disconnect on teardown.
    ///
    /// After [`destroy`](Self::destroy) the subscription is disconnected
    /// immediately.
    pub fn attach_subscription(&mut self, subscription: impl Subscription + 'static) {
        let mut subscription: Box<dyn Subscription> = Box::new(subscription);
        if self.destroyed {
            subscription.disconnect();
        } else {
            self.subscriptions.push(subscription);
        }
    }

    /// Routes trace events to `sink`. Events are only emitted with the
    /// `trace` feature enabled.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.tracer.set_sink(sink);
    }

    /// Removes and returns the trace sink.
    pub fn take_trace_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        self.tracer.take_sink()
    }

    // -- accessors ---------------------------------------------------------

    /// Whether the element intersects the viewport; `None` before the first
    /// visibility signal.
    #[must_use]
    pub fn is_in_view(&self) -> Option<bool> {
        self.state.is_in_view()
    }

    /// Whether progress is strictly between 0 and 1; `None` before the first
    /// tick.
    #[must_use]
    pub fn is_between_edges(&self) -> Option<bool> {
        self.state.is_between_edges()
    }

    /// Latest progress in `0.0..=1.0`; `None` before the element first
    /// enters view.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.state.progress()
    }

    /// The full tracking state.
    #[must_use]
    pub fn state(&self) -> &TrackingState {
        &self.state
    }

    /// The most recently measured geometry.
    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The configuration this observer was built with.
    #[must_use]
    pub fn config(&self) -> &ObserverConfig {
        &self.config
    }

    /// The event listener.
    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutable access to the event listener.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// The tracked element.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    /// The frame scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        self.frame_loop.scheduler()
    }

    /// Whether a frame request is outstanding.
    #[must_use]
    pub fn is_frame_pending(&self) -> bool {
        self.frame_loop.is_pending()
    }

    /// Whether [`destroy`](Self::destroy) has run.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    // -- internals ---------------------------------------------------------

    fn enter_view(&mut self) {
        if !self.state.enter() {
            return;
        }
        self.tracer.visibility(&VisibilityEvent {
            entered: true,
            last_progress: None,
            was_between_edges: false,
        });
        self.frame_loop.start();
        self.listener.on_enter_view();
    }

    fn leave_view(&mut self) {
        let Some(outcome) = self.state.leave() else {
            return;
        };
        self.tracer.visibility(&VisibilityEvent {
            entered: false,
            last_progress: outcome.last_progress,
            was_between_edges: outcome.was_between_edges,
        });
        self.frame_loop.stop();
        self.listener.on_leave_view();
    }

    fn recompute(&mut self, reason: RecomputeReason) {
        let bounds = self.target.bounding_rect();
        let scroll = self.scroll_position();
        let viewport = self.viewport.viewport_size();
        self.geometry = Geometry::measure(bounds, scroll, viewport, &self.config);
        self.tracer.geometry(&GeometryEvent {
            reason,
            geometry: self.geometry,
        });
    }

    fn scroll_position(&self) -> f64 {
        match &self.scroll_override {
            Some(f) => f(),
            None => self.scroll.scroll_position(self.config.axis),
        }
    }

    /// Returns `true` (and traces the drop) when the observer is destroyed.
    fn reject_late(&mut self, signal: SignalKind) -> bool {
        if self.destroyed {
            self.tracer.ignored_signal(&IgnoredSignalEvent { signal });
        }
        self.destroyed
    }
}

impl<T, L, S: FrameScheduler> ScrollProgressObserver<T, L, S> {
    /// Releases the frame request and subscriptions exactly once.
    fn teardown(&mut self) -> Option<TeardownEvent> {
        if self.destroyed {
            return None;
        }
        self.destroyed = true;

        let cancelled_frame = self.frame_loop.is_pending();
        self.frame_loop.stop();

        let mut subscriptions = 0_u32;
        for mut subscription in self.subscriptions.drain(..) {
            subscription.disconnect();
            subscriptions += 1;
        }

        Some(TeardownEvent {
            subscriptions,
            cancelled_frame,
        })
    }
}

impl<T, L, S: FrameScheduler> Drop for ScrollProgressObserver<T, L, S> {
    fn drop(&mut self) {
        _ = self.teardown();
    }
}

impl<T, L: fmt::Debug, S: FrameScheduler + fmt::Debug> fmt::Debug
    for ScrollProgressObserver<T, L, S>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollProgressObserver")
            .field("config", &self.config)
            .field("listener", &self.listener)
            .field("frame_loop", &self.frame_loop)
            .field("geometry", &self.geometry)
            .field("state", &self.state)
            .field("subscriptions", &self.subscriptions.len())
            .field("frame_index", &self.frame_index)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    use kurbo::{Rect, Size};

    use crate::axis::Axis;
    use crate::edge::TargetEdge;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Event {
        EnterView,
        LeaveView,
        EnterBetween,
        LeaveBetween,
        Progress(f64),
    }

    #[derive(Debug, Default)]
    struct RecordingListener {
        events: Vec<Event>,
    }

    impl RecordingListener {
        fn take(&mut self) -> Vec<Event> {
            core::mem::take(&mut self.events)
        }
    }

    impl ProgressListener for RecordingListener {
        fn on_enter_view(&mut self) {
            self.events.push(Event::EnterView);
        }
        fn on_leave_view(&mut self) {
            self.events.push(Event::LeaveView);
        }
        fn on_enter_between_edges(&mut self) {
            self.events.push(Event::EnterBetween);
        }
        fn on_leave_between_edges(&mut self) {
            self.events.push(Event::LeaveBetween);
        }
        fn on_progress(&mut self, progress: f64) {
            self.events.push(Event::Progress(progress));
        }
    }

    #[derive(Debug, Default)]
    struct ManualScheduler {
        requests: u32,
        cancels: u32,
    }

    impl FrameScheduler for ManualScheduler {
        fn request_frame(&mut self) {
            self.requests += 1;
        }

        fn cancel_frame(&mut self) {
            self.cancels += 1;
        }
    }

    /// Host state shared between the test and the observer's providers.
    #[derive(Clone)]
    struct Page {
        scroll: Rc<Cell<f64>>,
        bounds: Rc<Cell<Rect>>,
        viewport: Rc<Cell<Size>>,
    }

    impl Page {
        /// A 200px-tall element at document offset 1000 in a 1000px viewport.
        fn new() -> Self {
            Self {
                scroll: Rc::new(Cell::new(0.0)),
                bounds: Rc::new(Cell::new(Rect::new(0.0, 1000.0, 400.0, 1200.0))),
                viewport: Rc::new(Cell::new(Size::new(800.0, 1000.0))),
            }
        }

        /// Scrolls the page, moving the viewport-relative bounds with it.
        fn scroll_to(&self, scroll: f64) {
            let delta = scroll - self.scroll.get();
            let b = self.bounds.get();
            self.bounds
                .set(Rect::new(b.x0, b.y0 - delta, b.x1, b.y1 - delta));
            self.scroll.set(scroll);
        }

        fn target(&self) -> impl Fn() -> Rect + use<> {
            let bounds = Rc::clone(&self.bounds);
            move || bounds.get()
        }

        fn env(&self) -> Environment<ManualScheduler> {
            let scroll = Rc::clone(&self.scroll);
            let viewport = Rc::clone(&self.viewport);
            Environment::new(
                ManualScheduler::default(),
                move |_axis: Axis| scroll.get(),
                move || viewport.get(),
            )
        }
    }

    type TestObserver =
        ScrollProgressObserver<Box<dyn Fn() -> Rect>, RecordingListener, ManualScheduler>;

    fn observer_with(page: &Page, config: ObserverConfig) -> TestObserver {
        let target: Box<dyn Fn() -> Rect> = Box::new(page.target());
        let options = Options::new(RecordingListener::default()).with_config(config);
        ScrollProgressObserver::new(Some(target), options, page.env())
            .expect("target is present")
    }

    fn observer(page: &Page) -> TestObserver {
        observer_with(page, ObserverConfig::new())
    }

    /// Delivers the pending frame, as a host would.
    fn frame(observer: &mut TestObserver) {
        assert!(observer.is_frame_pending(), "no frame was requested");
        observer.tick();
    }

    #[test]
    fn missing_target_is_rejected() {
        let page = Page::new();
        let result = ScrollProgressObserver::<Box<dyn Fn() -> Rect>, _, _>::new(
            None,
            Options::new(RecordingListener::default()),
            page.env(),
        );
        assert_eq!(result.err(), Some(InvalidConfiguration::MissingTarget));
    }

    #[test]
    fn construction_measures_geometry_without_state() {
        let page = Page::new();
        page.scroll_to(250.0);
        let observer = observer(&page);
        assert_eq!(observer.geometry().target.start, 1000.0);
        assert_eq!(observer.geometry().target.size_main, 200.0);
        assert_eq!(observer.geometry().offsets.start_viewport, 1000.0);
        assert_eq!(observer.is_in_view(), None);
        assert_eq!(observer.is_between_edges(), None);
        assert_eq!(observer.progress(), None);
        assert!(!observer.is_frame_pending(), "nothing scheduled before entry");
    }

    #[test]
    fn enter_starts_loop_and_fires_once() {
        let page = Page::new();
        let mut observer = observer(&page);
        observer.intersection_changed(true);
        observer.intersection_changed(true);
        assert_eq!(observer.listener_mut().take(), [Event::EnterView]);
        assert_eq!(observer.is_in_view(), Some(true));
        assert_eq!(observer.progress(), Some(0.0));
        assert_eq!(observer.scheduler().requests, 1);
    }

    #[test]
    fn scrolling_through_fires_progress_then_crossings() {
        let page = Page::new();
        let mut observer = observer(&page);
        observer.intersection_changed(true);
        observer.listener_mut().take();

        // Element top at viewport bottom: progress stays 0.
        frame(&mut observer);
        assert!(observer.listener_mut().take().is_empty(), "no events");
        assert_eq!(observer.is_between_edges(), Some(false));

        page.scroll_to(600.0);
        frame(&mut observer);
        assert_eq!(
            observer.listener_mut().take(),
            [Event::Progress(0.5), Event::EnterBetween]
        );

        page.scroll_to(900.0);
        frame(&mut observer);
        assert_eq!(observer.listener_mut().take(), [Event::Progress(0.75)]);

        page.scroll_to(1500.0);
        frame(&mut observer);
        assert_eq!(
            observer.listener_mut().take(),
            [Event::Progress(1.0), Event::LeaveBetween]
        );

        // Unchanged progress fires nothing.
        page.scroll_to(1600.0);
        frame(&mut observer);
        assert!(observer.listener_mut().take().is_empty(), "no events");
        assert_eq!(observer.progress(), Some(1.0));
    }

    #[test]
    fn worked_example_progress() {
        let page = Page::new();
        let mut observer = observer(&page);
        observer.intersection_changed(true);
        page.scroll_to(1000.0);
        frame(&mut observer);
        assert_eq!(observer.progress(), Some(1000.0 / 1200.0));
    }

    #[test]
    fn leave_resets_progress_without_leave_between_edges() {
        let page = Page::new();
        let mut observer = observer(&page);
        observer.intersection_changed(true);
        page.scroll_to(600.0);
        frame(&mut observer);
        assert_eq!(observer.is_between_edges(), Some(true));
        observer.listener_mut().take();

        observer.intersection_changed(false);
        assert_eq!(observer.listener_mut().take(), [Event::LeaveView]);
        assert_eq!(observer.is_in_view(), Some(false));
        assert_eq!(observer.is_between_edges(), Some(false));
        assert_eq!(observer.progress(), Some(0.0));
        assert!(!observer.is_frame_pending(), "loop stopped on leave");
        assert_eq!(observer.scheduler().cancels, 1);

        // A tick that slipped through after the cancel is dropped.
        observer.tick();
        assert!(observer.listener_mut().take().is_empty(), "no events");

        observer.intersection_changed(false);
        assert!(observer.listener_mut().take().is_empty(), "no duplicate leave");
    }

    #[test]
    fn first_non_intersecting_signal_is_silent() {
        let page = Page::new();
        let mut observer = observer(&page);
        observer.intersection_changed(false);
        assert!(observer.listener_mut().take().is_empty(), "no events");
        assert_eq!(observer.is_in_view(), Some(false));
        assert_eq!(observer.progress(), None);
    }

    #[test]
    fn one_shot_mode_ticks_once_per_entry() {
        let page = Page::new();
        let config = ObserverConfig::new().with_continuous_tracking(false);
        let mut observer = observer_with(&page, config);
        page.scroll_to(600.0);
        observer.intersection_changed(true);
        frame(&mut observer);
        assert!(!observer.is_frame_pending(), "one-shot does not reschedule");
        assert_eq!(observer.progress(), Some(0.5));

        observer.intersection_changed(false);
        page.scroll_to(900.0);
        observer.intersection_changed(true);
        frame(&mut observer);
        assert_eq!(observer.progress(), Some(0.75));
        assert_eq!(observer.scheduler().requests, 2);
    }

    #[test]
    fn resize_signal_is_observed_by_next_tick() {
        let page = Page::new();
        let mut observer = observer(&page);
        observer.intersection_changed(true);
        page.scroll_to(600.0);
        frame(&mut observer);
        assert_eq!(observer.progress(), Some(0.5));

        // Element grows to 400px; travel becomes 1400.
        let b = page.bounds.get();
        page.bounds.set(Rect::new(b.x0, b.y0, b.x1, b.y0 + 400.0));
        observer.element_resized();
        assert_eq!(observer.geometry().target.size_main, 400.0);
        assert!(observer.is_frame_pending(), "resize leaves the loop running");

        frame(&mut observer);
        assert_eq!(observer.progress(), Some(600.0 / 1400.0));
    }

    #[test]
    fn viewport_resize_recomputes_viewport_offsets() {
        let page = Page::new();
        let mut observer = observer(&page);
        page.viewport.set(Size::new(800.0, 500.0));
        observer.viewport_resized();
        assert_eq!(observer.geometry().offsets.start_viewport, 500.0);
    }

    #[test]
    fn resize_signals_ignored_when_not_watching() {
        let page = Page::new();
        let config = ObserverConfig::new().with_watch_resize(false);
        let mut observer = observer_with(&page, config);
        let before = *observer.geometry();

        page.viewport.set(Size::new(800.0, 500.0));
        observer.viewport_resized();
        observer.element_resized();
        assert_eq!(*observer.geometry(), before);

        observer.resize();
        assert_eq!(observer.geometry().offsets.start_viewport, 500.0);
    }

    #[test]
    fn manual_resize_with_unchanged_geometry_is_identity() {
        let page = Page::new();
        let mut observer = observer(&page);
        observer.intersection_changed(true);
        page.scroll_to(600.0);
        frame(&mut observer);

        let geometry = *observer.geometry();
        let state = *observer.state();
        observer.resize();
        assert_eq!(*observer.geometry(), geometry);
        assert_eq!(*observer.state(), state);
        assert!(observer.is_frame_pending(), "loop untouched");
    }

    #[test]
    fn scroll_override_replaces_provider() {
        let page = Page::new();
        let override_scroll = Rc::new(Cell::new(600.0));
        let shared = Rc::clone(&override_scroll);
        let target: Box<dyn Fn() -> Rect> =
            Box::new(|| Rect::new(0.0, 1000.0, 400.0, 1200.0));
        let options = Options::new(RecordingListener::default())
            .with_scroll_position_override(move || shared.get());
        let mut observer = ScrollProgressObserver::new(Some(target), options, page.env())
            .expect("target is present");

        // start = 1000 + 600 from the override, not the provider's 0.
        assert_eq!(observer.geometry().target.start, 1600.0);

        observer.intersection_changed(true);
        override_scroll.set(1800.0);
        frame(&mut observer);
        assert_eq!(observer.progress(), Some(1200.0 / 1200.0));
    }

    #[test]
    fn inline_axis_tracks_horizontal_scroll() {
        let page = Page::new();
        page.bounds.set(Rect::new(1000.0, 0.0, 1100.0, 50.0));
        let config = ObserverConfig::new()
            .with_axis(Axis::Inline)
            .with_target_edges(TargetEdge::Center, TargetEdge::Center);
        let mut observer = observer_with(&page, config);
        // start 1000, size 100, travel = 100 + 800 - 50 - 50 = 800.
        assert_eq!(observer.geometry().travel(), 800.0);

        observer.intersection_changed(true);
        page.scroll.set(650.0);
        frame(&mut observer);
        // 650 + 800 - 1000 - 50 = 400.
        assert_eq!(observer.progress(), Some(0.5));
    }

    #[test]
    fn degenerate_geometry_reports_zero() {
        let page = Page::new();
        page.bounds.set(Rect::new(0.0, 0.0, 0.0, 0.0));
        let config = ObserverConfig::new().with_viewport_edges(0.0, 0.0);
        let mut observer = observer_with(&page, config);
        observer.intersection_changed(true);
        for scroll in [0.0, 100.0, -100.0] {
            page.scroll.set(scroll);
            frame(&mut observer);
            assert_eq!(observer.progress(), Some(0.0));
        }
        assert_eq!(observer.listener_mut().take(), [Event::EnterView]);
    }

    #[test]
    fn progress_stays_in_range_over_a_scroll_sweep() {
        let page = Page::new();
        let mut observer = observer(&page);
        observer.intersection_changed(true);
        let mut crossings = 0;
        let mut last = 0.0;
        for step in 0..=60 {
            page.scroll_to(f64::from(step) * 40.0);
            frame(&mut observer);
            let p = observer.progress().expect("in view");
            assert!((0.0..=1.0).contains(&p), "out of range: {p}");
            assert!(p >= last, "progress decreased: {p} < {last}");
            last = p;
            crossings += observer
                .listener_mut()
                .take()
                .iter()
                .filter(|e| matches!(e, Event::EnterBetween | Event::LeaveBetween))
                .count();
        }
        assert_eq!(crossings, 2, "one entry and one exit");
    }

    #[test]
    fn progress_is_non_increasing_when_scrolling_back() {
        let page = Page::new();
        let mut observer = observer(&page);
        page.scroll_to(2400.0);
        observer.intersection_changed(true);
        frame(&mut observer);
        assert_eq!(observer.progress(), Some(1.0));
        assert_eq!(observer.is_between_edges(), Some(false));
        observer.listener_mut().take();

        let mut crossings = Vec::new();
        let mut last = 1.0;
        for step in 1..=60 {
            page.scroll_to(2400.0 - f64::from(step) * 40.0);
            frame(&mut observer);
            let p = observer.progress().expect("in view");
            assert!((0.0..=1.0).contains(&p), "out of range: {p}");
            assert!(p <= last, "progress increased: {p} > {last}");
            last = p;
            crossings.extend(
                observer
                    .listener_mut()
                    .take()
                    .into_iter()
                    .filter(|e| matches!(e, Event::EnterBetween | Event::LeaveBetween)),
            );
        }
        assert_eq!(last, 0.0, "swept back to the start");
        assert_eq!(crossings, [Event::EnterBetween, Event::LeaveBetween]);
    }

    #[test]
    fn destroy_cancels_and_silences() {
        let page = Page::new();
        let mut observer = observer(&page);
        let disconnected = Rc::new(Cell::new(0));
        for _ in 0..2 {
            let counter = Rc::clone(&disconnected);
            observer.attach_subscription(move || counter.set(counter.get() + 1));
        }
        observer.intersection_changed(true);
        observer.listener_mut().take();

        observer.destroy();
        observer.destroy();
        assert!(observer.is_destroyed(), "destroyed");
        assert_eq!(disconnected.get(), 2, "each subscription disconnected once");
        assert_eq!(observer.scheduler().cancels, 1);

        observer.tick();
        observer.intersection_changed(false);
        observer.intersection_changed(true);
        observer.element_resized();
        observer.resize();
        assert!(observer.listener_mut().take().is_empty(), "no events");
        assert_eq!(observer.is_in_view(), Some(true), "state frozen at teardown");
    }

    #[test]
    fn subscription_attached_after_destroy_disconnects_immediately() {
        let page = Page::new();
        let mut observer = observer(&page);
        observer.destroy();
        let disconnected = Rc::new(Cell::new(false));
        let flag = Rc::clone(&disconnected);
        observer.attach_subscription(move || flag.set(true));
        assert!(disconnected.get(), "late subscription released");
    }

    #[test]
    fn drop_disconnects_subscriptions() {
        let page = Page::new();
        let disconnected = Rc::new(Cell::new(false));
        {
            let mut observer = observer(&page);
            let flag = Rc::clone(&disconnected);
            observer.attach_subscription(move || flag.set(true));
        }
        assert!(disconnected.get(), "drop releases subscriptions");
    }

    #[cfg(feature = "trace")]
    #[test]
    fn trace_sink_sees_lifecycle() {
        use core::cell::RefCell;

        #[derive(Default)]
        struct Counts {
            geometry: u32,
            visibility: u32,
            ticks: u32,
            crossings: u32,
            ignored: u32,
            teardown: u32,
        }
        struct CountingSink(Rc<RefCell<Counts>>);
        impl TraceSink for CountingSink {
            fn on_geometry(&mut self, _: &GeometryEvent) {
                self.0.borrow_mut().geometry += 1;
            }
            fn on_visibility(&mut self, _: &VisibilityEvent) {
                self.0.borrow_mut().visibility += 1;
            }
            fn on_tick(&mut self, _: &TickEvent) {
                self.0.borrow_mut().ticks += 1;
            }
            fn on_edge_crossing(&mut self, _: &EdgeCrossingEvent) {
                self.0.borrow_mut().crossings += 1;
            }
            fn on_ignored_signal(&mut self, _: &IgnoredSignalEvent) {
                self.0.borrow_mut().ignored += 1;
            }
            fn on_teardown(&mut self, _: &TeardownEvent) {
                self.0.borrow_mut().teardown += 1;
            }
        }

        let page = Page::new();
        let mut observer = observer(&page);
        let counts = Rc::new(RefCell::new(Counts::default()));
        observer.set_trace_sink(Box::new(CountingSink(Rc::clone(&counts))));

        observer.resize();
        observer.intersection_changed(true);
        page.scroll_to(600.0);
        frame(&mut observer);
        observer.intersection_changed(false);
        observer.destroy();
        observer.tick();

        let c = counts.borrow();
        assert_eq!(c.geometry, 1);
        assert_eq!(c.visibility, 2);
        assert_eq!(c.ticks, 1);
        assert_eq!(c.crossings, 1);
        assert_eq!(c.ignored, 1);
        assert_eq!(c.teardown, 1);
    }

    #[test]
    fn debug_output_names_the_observer() {
        let page = Page::new();
        let observer = observer(&page);
        let text = alloc::format!("{observer:?}");
        assert!(text.starts_with("ScrollProgressObserver"), "got: {text}");
    }
}
