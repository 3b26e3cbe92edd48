// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for scroll progress tracking.
//!
//! This crate provides browser implementations of every host collaborator:
//!
//! - [`RafScheduler`]: `requestAnimationFrame` frame scheduler
//! - [`DomTarget`]: element bounds from `getBoundingClientRect()`
//! - [`WindowScroll`] / [`WindowViewport`]: window scroll offsets and size
//! - [`JsSubscription`]: `IntersectionObserver`, `ResizeObserver`, and window
//!   `resize` registrations
//!
//! [`WebScrollProgressObserver`] wires them all to a
//! [`ScrollProgressObserver`](scroll_progress_core::ScrollProgressObserver):
//!
//! ```rust,ignore
//! let listener = Callbacks::new().with_progress(|p| set_opacity(p));
//! let observer = WebScrollProgressObserver::new(Some(element), WebOptions::new(listener))?;
//! ```

#![no_std]

extern crate alloc;

mod dom;
mod error;
mod observer;
mod raf;
mod shared;
mod signals;

pub use dom::{DomTarget, WindowScroll, WindowViewport, rect_from_dom};
pub use error::WebObserverError;
pub use observer::{DomObserver, WebOptions, WebScrollProgressObserver};
pub use raf::RafScheduler;
pub use signals::{JsSubscription, last_intersection};
