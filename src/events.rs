//! Event types: raw window input and the semantic events the model consumes.
//!
//! ## Flow
//!
//! ```text
//! InputEvent (press/move/release, scroll, keys, ...)
//!     -> EventFold (gesture recognition)
//!     -> Event (press, drag, scroll, keys, ...)
//!     -> update_model
//! ```

use crate::error::{InkboardError, InkboardResult};
use crate::geometry::{Path, Point, Scalar, Screen, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// ============================================================================
// Modes and keys
// ============================================================================

/// Which pointer button (or touch equivalent) started a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerMode {
    Primary,
    Secondary,
    Tertiary,
}

/// Plain scrolling pans, modified scrolling zooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollMode {
    Primary,
    Secondary,
}

/// Modifier keys held during an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        super_key: false,
    };

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }
}

/// A key name plus modifiers, written like `ctrl+shift+z`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombination {
    pub name: String,
    pub modifiers: Modifiers,
}

impl KeyCombination {
    pub fn new(name: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            name: name.into(),
            modifiers,
        }
    }
}

impl FromStr for KeyCombination {
    type Err = InkboardError;

    /// Parts are separated by `+` or `-`; every part but the last must be a
    /// modifier (case-insensitive), the last is the key name.
    fn from_str(s: &str) -> InkboardResult<Self> {
        let invalid = || InkboardError::InvalidKeyCombination(s.to_string());
        let mut parts: Vec<&str> = s.split(['+', '-']).collect();
        let name = parts.pop().filter(|n| !n.is_empty()).ok_or_else(invalid)?;

        let mut modifiers = Modifiers::NONE;
        for part in parts {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" => modifiers.ctrl = true,
                "alt" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                "super" => modifiers.super_key = true,
                _ => return Err(invalid()),
            }
        }

        Ok(Self::new(name, modifiers))
    }
}

impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.modifiers;
        for (held, label) in [
            (m.ctrl, "ctrl+"),
            (m.alt, "alt+"),
            (m.shift, "shift+"),
            (m.super_key, "super+"),
        ] {
            if held {
                f.write_str(label)?;
            }
        }
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    pub pressed: bool,
    /// Auto-repeat while held down
    pub held: bool,
    pub key: KeyCombination,
}

// ============================================================================
// Raw input
// ============================================================================

/// Input as delivered by the windowing layer, already normalised by
/// [`PointerDevice`](crate::input::PointerDevice). Positions are screen space.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerPressed {
        mode: PointerMode,
        position: Vector<Screen>,
        pressure: Scalar<Screen>,
    },
    PointerMoved {
        position: Vector<Screen>,
        pressure: Scalar<Screen>,
    },
    PointerReleased,
    Scroll {
        mode: ScrollMode,
        delta: Vector<Screen>,
        position: Vector<Screen>,
    },
    Key(KeyEvent),
    Text(String),
    FileDrop(Vec<PathBuf>),
    Redraw {
        window_size: Vector<Screen>,
    },
}

// ============================================================================
// Semantic events
// ============================================================================

/// Events folded into the model by [`update_model`](crate::app::update_model).
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Redraw {
        window_size: Vector<Screen>,
    },
    PointerMove {
        position: Vector<Screen>,
        pressure: Scalar<Screen>,
    },
    /// A press, possibly reinterpreted as the alternate of a previous tap
    PointerPress {
        mode: PointerMode,
        alternate: bool,
        point: Point<Screen>,
    },
    /// The full path of a drag so far; `complete` once the pointer is released
    PointerDrag {
        mode: PointerMode,
        alternate: bool,
        path: Path<Screen>,
        complete: bool,
    },
    Scroll {
        mode: ScrollMode,
        delta: Vector<Screen>,
        position: Vector<Screen>,
    },
    Key(KeyEvent),
    Text(String),
    FileDrop(Vec<PathBuf>),
}

impl Event {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Redraw { .. } => "redraw",
            Self::PointerMove { .. } => "pointer_move",
            Self::PointerPress { .. } => "pointer_press",
            Self::PointerDrag { .. } => "pointer_drag",
            Self::Scroll { .. } => "scroll",
            Self::Key(_) => "key",
            Self::Text(_) => "text",
            Self::FileDrop(_) => "file_drop",
        }
    }
}

impl InputEvent {
    /// The semantic event for input that needs no gesture recognition.
    /// Pointer presses and releases return `None`.
    pub fn passthrough(self) -> Option<Event> {
        match self {
            Self::PointerPressed { .. } | Self::PointerReleased => None,
            Self::PointerMoved { position, pressure } => Some(Event::PointerMove { position, pressure }),
            Self::Scroll {
                mode,
                delta,
                position,
            } => Some(Event::Scroll {
                mode,
                delta,
                position,
            }),
            Self::Key(key) => Some(Event::Key(key)),
            Self::Text(text) => Some(Event::Text(text)),
            Self::FileDrop(files) => Some(Event::FileDrop(files)),
            Self::Redraw { window_size } => Some(Event::Redraw { window_size }),
        }
    }
}
