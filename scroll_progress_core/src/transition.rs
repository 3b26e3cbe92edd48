// Copyright 2026 the Scroll Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility and between-edges transitions.
//!
//! [`TrackingState`] is two orthogonal two-state machines plus a continuous
//! progress channel:
//!
//! - **visibility**: out ↔ in, driven by intersection signals
//!   ([`enter`](TrackingState::enter) / [`leave`](TrackingState::leave)).
//! - **between edges**: outside ↔ inside the open interval (0, 1), driven by
//!   per-frame progress ([`advance`](TrackingState::advance)).
//!
//! Every field starts as `None` ("never evaluated"). The state machine only
//! reports what changed; the caller decides which callbacks to fire.
//!
//! Leaving view resets progress to 0 and clears between-edges without
//! reporting an edge crossing: the visibility transition takes precedence.

use crate::progress::is_between_edges;

/// Direction of an edge crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeCrossing {
    /// Progress moved into the open interval (0, 1).
    Entered,
    /// Progress reached 0 or 1 after being strictly between them.
    Left,
}

/// What a single tick changed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickOutcome {
    /// The new progress, if it differs from the stored value.
    pub progress_changed: Option<f64>,
    /// The between-edges transition, if any.
    pub crossing: Option<EdgeCrossing>,
}

/// Result of a leave-view transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeaveOutcome {
    /// Whether progress was between edges before the transition. The
    /// between-edges state is cleared without a separate crossing.
    pub was_between_edges: bool,
    /// Progress before it was reset to 0.
    pub last_progress: Option<f64>,
}

/// Visibility, between-edges, and progress state for one tracked element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackingState {
    is_in_view: Option<bool>,
    is_between_edges: Option<bool>,
    progress: Option<f64>,
}

impl TrackingState {
    /// Creates an unevaluated state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_in_view: None,
            is_between_edges: None,
            progress: None,
        }
    }

    /// Whether the element intersects the viewport, `None` before the first
    /// visibility signal.
    #[must_use]
    pub const fn is_in_view(&self) -> Option<bool> {
        self.is_in_view
    }

    /// Whether progress is strictly between 0 and 1, `None` before the first
    /// tick.
    #[must_use]
    pub const fn is_between_edges(&self) -> Option<bool> {
        self.is_between_edges
    }

    /// Latest progress in `0.0..=1.0`, `None` before the element first enters
    /// view.
    #[must_use]
    pub const fn progress(&self) -> Option<f64> {
        self.progress
    }

    /// Handles an intersecting signal.
    ///
    /// Returns `true` when this is a transition into view. Progress is reset
    /// to 0 on every such transition.
    pub fn enter(&mut self) -> bool {
        if self.is_in_view == Some(true) {
            return false;
        }
        self.is_in_view = Some(true);
        self.progress = Some(0.0);
        true
    }

    /// Handles a non-intersecting signal.
    ///
    /// Returns `Some` only on a transition out of view. A first signal on an
    /// unevaluated state records the element as out of view and returns
    /// `None`.
    pub fn leave(&mut self) -> Option<LeaveOutcome> {
        match self.is_in_view {
            Some(true) => {
                let outcome = LeaveOutcome {
                    was_between_edges: self.is_between_edges == Some(true),
                    last_progress: self.progress,
                };
                self.is_in_view = Some(false);
                self.progress = Some(0.0);
                if self.is_between_edges.is_some() {
                    self.is_between_edges = Some(false);
                }
                Some(outcome)
            }
            Some(false) => None,
            None => {
                self.is_in_view = Some(false);
                None
            }
        }
    }

    /// Applies a freshly computed progress value.
    ///
    /// Ignored (default outcome) while not in view. The progress change is
    /// judged against the previous stored value; the edge crossing against
    /// the new one.
    pub fn advance(&mut self, progress: f64) -> TickOutcome {
        if self.is_in_view != Some(true) {
            return TickOutcome::default();
        }

        let progress_changed = (self.progress != Some(progress)).then_some(progress);

        let inside = is_between_edges(progress);
        let was_inside = self.is_between_edges == Some(true);
        let crossing = match (was_inside, inside) {
            (false, true) => {
                self.is_between_edges = Some(true);
                Some(EdgeCrossing::Entered)
            }
            (true, false) => {
                self.is_between_edges = Some(false);
                Some(EdgeCrossing::Left)
            }
            _ => {
                if self.is_between_edges.is_none() {
                    self.is_between_edges = Some(false);
                }
                None
            }
        };

        self.progress = Some(progress);
        TickOutcome {
            progress_changed,
            crossing,
        }
    }
}
