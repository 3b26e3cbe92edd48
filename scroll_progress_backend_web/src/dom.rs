// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM geometry, scroll, and viewport providers.

use kurbo::{Rect, Size};
use scroll_progress_core::Axis;
use scroll_progress_core::host::{ScrollPositionProvider, TargetElement, ViewportSizeProvider};
use wasm_bindgen::JsValue;
use web_sys::{Element, Window};

/// A DOM element measured with `getBoundingClientRect()`.
#[derive(Clone, Debug)]
pub struct DomTarget {
    element: Element,
}

impl DomTarget {
    /// Wraps `element`.
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Returns the wrapped element.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl TargetElement for DomTarget {
    fn bounding_rect(&self) -> Rect {
        let r = self.element.get_bounding_client_rect();
        rect_from_dom(r.x(), r.y(), r.width(), r.height())
    }
}

/// Converts a `DOMRect`'s origin and size to a [`Rect`].
///
/// `DOMRect` allows negative sizes; the result is normalized so `x0 <= x1`
/// and `y0 <= y1`.
#[must_use]
pub fn rect_from_dom(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::from_origin_size((x, y), (width, height)).abs()
}

/// Reads `window.scrollY` (block axis) or `window.scrollX` (inline axis).
#[derive(Clone, Debug)]
pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    /// Reads scroll offsets from `window`.
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ScrollPositionProvider for WindowScroll {
    fn scroll_position(&self, axis: Axis) -> f64 {
        let offset = match axis {
            Axis::Block => self.window.scroll_y(),
            Axis::Inline => self.window.scroll_x(),
        };
        offset.unwrap_or(0.0)
    }
}

/// Reads `window.innerWidth` and `window.innerHeight`.
#[derive(Clone, Debug)]
pub struct WindowViewport {
    window: Window,
}

impl WindowViewport {
    /// Reads the viewport size from `window`.
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ViewportSizeProvider for WindowViewport {
    fn viewport_size(&self) -> Size {
        Size::new(
            js_dimension(self.window.inner_width()),
            js_dimension(self.window.inner_height()),
        )
    }
}

/// Unpacks a numeric DOM property, treating failures and non-numbers as 0.
fn js_dimension(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}
