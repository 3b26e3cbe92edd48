// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser signal sources.
//!
//! Each `connect_*` function registers a JS callback with a browser API and
//! returns a [`JsSubscription`] that unregisters it. Callbacks receive the
//! raw signal and forward it to a handler; they never hold the observer
//! strongly.

use alloc::boxed::Box;

use js_sys::Array;
use scroll_progress_core::host::Subscription;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast as _;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, ResizeObserver, Window};

use crate::error::WebObserverError;

/// A registered browser callback.
///
/// [`disconnect`](Subscription::disconnect) unregisters the callback and
/// releases the JS closure. Later calls do nothing.
pub struct JsSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl JsSubscription {
    fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Subscription for JsSubscription {
    fn disconnect(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl core::fmt::Debug for JsSubscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("JsSubscription")
            .field("connected", &self.release.is_some())
            .finish()
    }
}

/// Reduces one batch of intersection entries to a single visibility signal.
///
/// The last entry wins; an empty batch yields `None`.
#[must_use]
pub fn last_intersection(entries: impl IntoIterator<Item = bool>) -> Option<bool> {
    entries.into_iter().last()
}

/// Observes `element` with an `IntersectionObserver` rooted at the viewport.
pub(crate) fn connect_intersection(
    element: &Element,
    mut on_change: impl FnMut(bool) + 'static,
) -> Result<JsSubscription, WebObserverError> {
    let callback = Closure::wrap(Box::new(move |entries: Array| {
        let batch = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|entry| entry.is_intersecting());
        if let Some(is_intersecting) = last_intersection(batch) {
            on_change(is_intersecting);
        }
    }) as Box<dyn FnMut(Array)>);

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(WebObserverError::js("IntersectionObserver"))?;
    observer.observe(element);

    Ok(JsSubscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

/// Observes `element` with a `ResizeObserver`.
pub(crate) fn connect_element_resize(
    element: &Element,
    on_resize: impl FnMut() + 'static,
) -> Result<JsSubscription, WebObserverError> {
    let callback = Closure::wrap(Box::new(on_resize) as Box<dyn FnMut()>);

    let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())
        .map_err(WebObserverError::js("ResizeObserver"))?;
    observer.observe(element);

    Ok(JsSubscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

/// Listens for the window `resize` event.
pub(crate) fn connect_viewport_resize(
    window: &Window,
    on_resize: impl FnMut() + 'static,
) -> Result<JsSubscription, WebObserverError> {
    let callback = Closure::wrap(Box::new(on_resize) as Box<dyn FnMut()>);

    window
        .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
        .map_err(WebObserverError::js("resize listener"))?;

    let window = window.clone();
    Ok(JsSubscription::new(move || {
        _ = window
            .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
        drop(callback);
    }))
}
