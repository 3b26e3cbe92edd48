// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors for the browser observer.

use core::fmt;

use scroll_progress_core::InvalidConfiguration;
use wasm_bindgen::JsValue;

/// Errors from [`WebScrollProgressObserver::new`](crate::WebScrollProgressObserver::new).
#[derive(Debug)]
pub enum WebObserverError {
    /// The observer options were rejected.
    Config(InvalidConfiguration),
    /// No global `window` object (for example, inside a worker).
    NoWindow,
    /// A browser API refused to create or register a signal source.
    Js {
        /// The API that failed, e.g. `"IntersectionObserver"`.
        api: &'static str,
        /// The thrown value.
        error: JsValue,
    },
}

impl WebObserverError {
    pub(crate) fn js(api: &'static str) -> impl FnOnce(JsValue) -> Self {
        move |error| Self::Js { api, error }
    }
}

impl From<InvalidConfiguration> for WebObserverError {
    fn from(err: InvalidConfiguration) -> Self {
        Self::Config(err)
    }
}

impl fmt::Display for WebObserverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::NoWindow => write!(f, "no global window object"),
            Self::Js { api, .. } => write!(f, "failed to set up {api}"),
        }
    }
}

impl core::error::Error for WebObserverError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}
