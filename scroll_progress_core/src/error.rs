// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use core::fmt;

/// Errors from [`ScrollProgressObserver::new`](crate::observer::ScrollProgressObserver::new).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidConfiguration {
    /// No target element was supplied.
    MissingTarget,
}

impl fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTarget => write!(f, "no target element defined"),
        }
    }
}

impl core::error::Error for InvalidConfiguration {}
