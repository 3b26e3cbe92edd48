// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observer state shared between the handle and browser callbacks.
//!
//! Browser signals run with the observer mutably borrowed, and listener code
//! runs inside that borrow. A destroy requested from a listener is recorded
//! and applied as soon as the dispatch returns.

use core::cell::{Cell, Ref, RefCell};

use scroll_progress_core::host::{FrameScheduler, TargetElement};
use scroll_progress_core::{ProgressListener, ScrollProgressObserver};

/// Something that can be torn down.
pub(crate) trait Teardown {
    fn teardown(&mut self);
}

impl<T, L, S> Teardown for ScrollProgressObserver<T, L, S>
where
    T: TargetElement,
    L: ProgressListener,
    S: FrameScheduler,
{
    fn teardown(&mut self) {
        self.destroy();
    }
}

/// A [`RefCell`] plus a deferred destroy request.
pub(crate) struct SharedObserver<O> {
    observer: RefCell<O>,
    destroy_requested: Cell<bool>,
}

impl<O: Teardown> SharedObserver<O> {
    pub(crate) fn new(observer: O) -> Self {
        Self {
            observer: RefCell::new(observer),
            destroy_requested: Cell::new(false),
        }
    }

    /// Runs `f` with the observer. Returns `None` when it is already busy.
    ///
    /// A destroy requested while `f` runs is applied before returning.
    pub(crate) fn dispatch<R>(&self, f: impl FnOnce(&mut O) -> R) -> Option<R> {
        let mut observer = self.observer.try_borrow_mut().ok()?;
        let result = f(&mut observer);
        if self.destroy_requested.take() {
            observer.teardown();
        }
        Some(result)
    }

    /// Destroys the observer now, or after the running dispatch if busy.
    pub(crate) fn destroy(&self) {
        match self.observer.try_borrow_mut() {
            Ok(mut observer) => observer.teardown(),
            Err(_) => self.destroy_requested.set(true),
        }
    }

    /// Shared access, unless a dispatch is running.
    pub(crate) fn get(&self) -> Option<Ref<'_, O>> {
        self.observer.try_borrow().ok()
    }
}
