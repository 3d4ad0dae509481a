//! Pointer gesture state machine states.
//!
//! ## State Transitions
//!
//! ```text
//! Default           -> Pressed            (press: plain press on the live model)
//! ReadyForAlternate -> Pressed            (press: alternate if same mode, in time and nearby)
//! Pressed           -> PressedMoved       (move: first drag frame)
//! PressedMoved      -> PressedMoved       (move: path grows)
//! Pressed           -> ReadyForAlternate  (release of a plain press)
//! Pressed           -> Default            (release of an alternate press)
//! PressedMoved      -> Default            (release: final drag frame)
//! ReadyForAlternate -> Default            (any event after the timeout)
//! ```
//!
//! Every non-default state carries the model as it was before the gesture
//! began. Drag frames are recomputed from it, and an alternate press
//! replaces whatever the first press did.

use crate::events::PointerMode;
use crate::geometry::{Path, Scalar, Screen, Vector};
use std::time::{Duration, Instant};

/// Gesture context threaded through the fold alongside the live model.
#[derive(Debug, Clone)]
pub enum PointerContext<M> {
    /// No pointer interaction pending
    Default,

    /// A plain press was just released; a quick nearby press of the same
    /// mode becomes an alternate press.
    ReadyForAlternate {
        mode: PointerMode,
        /// Model from before the released press
        saved: M,
        /// Where the released press happened
        position: Vector<Screen>,
        released_at: Instant,
    },

    /// Held down, not moved yet
    Pressed {
        mode: PointerMode,
        position: Vector<Screen>,
        pressure: Scalar<Screen>,
        /// Model from before the press event
        saved: M,
        alternate: bool,
    },

    /// Held down and moved at least once
    PressedMoved {
        mode: PointerMode,
        /// Every sampled position since the press, pressure as size
        path: Path<Screen>,
        saved: M,
        alternate: bool,
    },
}

impl<M> Default for PointerContext<M> {
    fn default() -> Self {
        Self::Default
    }
}

impl<M> PointerContext<M> {
    /// Returns true if no gesture is pending
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Returns true if the pointer is held down
    pub fn is_pressed(&self) -> bool {
        matches!(self, Self::Pressed { .. } | Self::PressedMoved { .. })
    }

    /// Returns true if waiting for a possible alternate press
    pub fn is_ready_for_alternate(&self) -> bool {
        matches!(self, Self::ReadyForAlternate { .. })
    }

    /// Mode of the pending gesture
    pub fn mode(&self) -> Option<PointerMode> {
        match self {
            Self::Default => None,
            Self::ReadyForAlternate { mode, .. }
            | Self::Pressed { mode, .. }
            | Self::PressedMoved { mode, .. } => Some(*mode),
        }
    }

    /// Whether the held gesture is an alternate one
    pub fn is_alternate(&self) -> bool {
        matches!(
            self,
            Self::Pressed { alternate: true, .. } | Self::PressedMoved { alternate: true, .. }
        )
    }

    /// The pre-gesture model, if a gesture is pending
    pub fn saved(&self) -> Option<&M> {
        match self {
            Self::Default => None,
            Self::ReadyForAlternate { saved, .. }
            | Self::Pressed { saved, .. }
            | Self::PressedMoved { saved, .. } => Some(saved),
        }
    }

    /// Whether a `ReadyForAlternate` window has closed at `now`.
    pub fn timed_out(&self, now: Instant, timeout: Duration) -> bool {
        match self {
            Self::ReadyForAlternate { released_at, .. } => {
                now.saturating_duration_since(*released_at) > timeout
            }
            _ => false,
        }
    }

    /// Apply `f` to the saved model, keeping the state otherwise unchanged.
    pub fn map_saved(self, f: impl FnOnce(M) -> M) -> Self {
        match self {
            Self::Default => Self::Default,
            Self::ReadyForAlternate {
                mode,
                saved,
                position,
                released_at,
            } => Self::ReadyForAlternate {
                mode,
                saved: f(saved),
                position,
                released_at,
            },
            Self::Pressed {
                mode,
                position,
                pressure,
                saved,
                alternate,
            } => Self::Pressed {
                mode,
                position,
                pressure,
                saved: f(saved),
                alternate,
            },
            Self::PressedMoved {
                mode,
                path,
                saved,
                alternate,
            } => Self::PressedMoved {
                mode,
                path,
                saved: f(saved),
                alternate,
            },
        }
    }
}
