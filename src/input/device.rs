//! Normalises raw window callbacks into [`InputEvent`]s.
//!
//! The gesture recognizer assumes a single pointer: at most one button is
//! held at a time. `PointerDevice` enforces that before events reach it.

use crate::constants::DEFAULT_PRESSURE;
use crate::events::{InputEvent, Modifiers, PointerMode, ScrollMode};
use crate::geometry::{Scalar, Screen, Vector};
use tracing::trace;

/// Per-window pointer tracking.
#[derive(Debug, Clone, Default)]
pub struct PointerDevice {
    held_button: Option<u32>,
    cursor: Vector<Screen>,
}

impl PointerDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Button 0 is primary, 1 is secondary, anything else tertiary.
    pub fn mode_for_button(button: u32) -> PointerMode {
        match button {
            0 => PointerMode::Primary,
            1 => PointerMode::Secondary,
            _ => PointerMode::Tertiary,
        }
    }

    pub fn cursor(&self) -> Vector<Screen> {
        self.cursor
    }

    /// Mode of the held button, if any
    pub fn held_mode(&self) -> Option<PointerMode> {
        self.held_button.map(Self::mode_for_button)
    }

    /// A press at the current cursor position. Dropped while another button
    /// is held.
    pub fn button_pressed(&mut self, button: u32, pressure: Option<f64>) -> Option<InputEvent> {
        if let Some(held) = self.held_button {
            trace!(button, held, "dropping press while another button is held");
            return None;
        }

        self.held_button = Some(button);
        Some(InputEvent::PointerPressed {
            mode: Self::mode_for_button(button),
            position: self.cursor,
            pressure: pressure_or_default(pressure),
        })
    }

    /// A release. Dropped unless `button` is the held one.
    pub fn button_released(&mut self, button: u32) -> Option<InputEvent> {
        if self.held_button != Some(button) {
            trace!(button, held = ?self.held_button, "dropping release of a button that is not held");
            return None;
        }

        self.held_button = None;
        Some(InputEvent::PointerReleased)
    }

    pub fn cursor_moved(&mut self, position: Vector<Screen>, pressure: Option<f64>) -> InputEvent {
        self.cursor = position;
        InputEvent::PointerMoved {
            position,
            pressure: pressure_or_default(pressure),
        }
    }

    /// Scrolling zooms while Ctrl is held and pans otherwise.
    pub fn scrolled(&self, delta: Vector<Screen>, modifiers: Modifiers) -> InputEvent {
        let mode = if modifiers.ctrl {
            ScrollMode::Secondary
        } else {
            ScrollMode::Primary
        };
        InputEvent::Scroll {
            mode,
            delta,
            position: self.cursor,
        }
    }
}

fn pressure_or_default(pressure: Option<f64>) -> Scalar<Screen> {
    Scalar::new(pressure.unwrap_or(DEFAULT_PRESSURE))
}
