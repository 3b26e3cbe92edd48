// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` frame scheduler.
//!
//! [`RafScheduler`] implements [`FrameScheduler`] on top of the browser's
//! `requestAnimationFrame` / `cancelAnimationFrame` pair. Unlike a free-running
//! animation loop it never re-registers itself: the observer's frame loop
//! decides whether another frame is needed and calls
//! [`request_frame`](FrameScheduler::request_frame) again.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use scroll_progress_core::host::FrameScheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

type RafClosure = Closure<dyn FnMut(f64)>;

/// A cancelable one-shot `requestAnimationFrame` request.
///
/// Create with [`RafScheduler::new`], then install the frame handler with
/// [`set_callback`](Self::set_callback). Requests made before a callback is
/// installed are dropped.
pub struct RafScheduler {
    inner: Rc<RafInner>,
}

struct RafInner {
    /// The JS closure passed to `requestAnimationFrame`.
    closure: RefCell<Option<RafClosure>>,

    /// The ID of the outstanding request, if any.
    raf_id: Cell<Option<i32>>,
}

impl RafScheduler {
    /// Creates a scheduler with no callback and nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RafInner {
                closure: RefCell::new(None),
                raf_id: Cell::new(None),
            }),
        }
    }

    /// Installs the handler run when a requested frame arrives, replacing any
    /// previous handler. An outstanding request is cancelled first.
    pub fn set_callback(&self, mut callback: impl FnMut() + 'static) {
        self.cancel();

        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(move |_timestamp_ms: f64| {
            // The request is spent; the callback may issue a new one.
            inner.raf_id.set(None);
            callback();
        }) as Box<dyn FnMut(f64)>);

        *self.inner.closure.borrow_mut() = Some(closure);
    }

    /// Returns `true` while a request is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.raf_id.get().is_some()
    }

    fn request(&self) {
        if self.is_pending() {
            return;
        }
        if let Some(ref closure) = *self.inner.closure.borrow() {
            let id = request_animation_frame(closure.as_ref().unchecked_ref());
            self.inner.raf_id.set(Some(id));
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.inner.raf_id.take() {
            cancel_animation_frame(id);
        }
    }
}

impl Default for RafScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        self.request();
    }

    fn cancel_frame(&mut self) {
        self.cancel();
    }
}

impl Drop for RafScheduler {
    fn drop(&mut self) {
        self.cancel();
        // Break the closure → inner reference cycle.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for RafScheduler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RafScheduler")
            .field("pending", &self.is_pending())
            .field("has_callback", &self.inner.closure.borrow().is_some())
            .finish()
    }
}
