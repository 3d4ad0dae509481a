//! Gesture recognition: folds raw pointer input into semantic events.
//!
//! [`EventFold`] owns the live model and a [`PointerContext`]. Presses,
//! moves and releases drive the context; every other input passes straight
//! through to the update function, and is also applied to the context's
//! saved model so it survives a gesture that later rolls back to it.

use super::state::PointerContext;
use crate::constants::{ALTERNATE_TIMEOUT_MS, MOVEMENT_THRESHOLD};
use crate::events::{Event, InputEvent, PointerMode};
use crate::geometry::{Path, Point, Scalar, Screen, Vector};
use crate::profile_scope;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Tuning for alternate (double-press) detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Maximum time between a release and an alternate press
    pub alternate_timeout: Duration,
    /// Maximum distance in pixels between a release and an alternate press
    pub movement_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            alternate_timeout: Duration::from_millis(ALTERNATE_TIMEOUT_MS),
            movement_threshold: MOVEMENT_THRESHOLD,
        }
    }
}

/// Sequential fold of [`InputEvent`]s over a model.
///
/// Not thread-safe by construction: `handle` takes `&mut self`, so events are
/// processed one at a time on whichever thread owns the fold.
pub struct EventFold<M, F> {
    model: M,
    context: PointerContext<M>,
    config: GestureConfig,
    update: F,
}

impl<M, F> EventFold<M, F>
where
    M: Clone,
    F: Fn(&M, &Event) -> M,
{
    pub fn new(initial: M, update: F) -> Self {
        Self::with_config(initial, update, GestureConfig::default())
    }

    pub fn with_config(initial: M, update: F, config: GestureConfig) -> Self {
        Self {
            model: initial,
            context: PointerContext::Default,
            config,
            update,
        }
    }

    /// The live model.
    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn context(&self) -> &PointerContext<M> {
        &self.context
    }

    pub fn config(&self) -> GestureConfig {
        self.config
    }

    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Apply `f` to the live model and to any saved model, e.g. to push new
    /// settings into both.
    pub fn map_models(&mut self, f: impl Fn(&M) -> M) {
        self.model = f(&self.model);
        let context = std::mem::take(&mut self.context);
        self.context = context.map_saved(|saved| f(&saved));
    }

    /// Fold one input event at time `now` and return the new live model.
    pub fn handle(&mut self, event: InputEvent, now: Instant) -> &M {
        profile_scope!("gesture::handle");

        let context = std::mem::take(&mut self.context);
        let (model, context) = match event {
            InputEvent::PointerPressed {
                mode,
                position,
                pressure,
            } => self.press(context, mode, position, pressure, now),
            InputEvent::PointerMoved { position, pressure } => self.pointer_move(context, position, pressure),
            InputEvent::PointerReleased => self.release(context, now),
            other => match other.passthrough() {
                Some(event) => self.passthrough(context, &event, now),
                None => (self.model.clone(), context),
            },
        };

        self.model = model;
        self.context = context;
        &self.model
    }

    fn press(
        &self,
        context: PointerContext<M>,
        mode: PointerMode,
        position: Vector<Screen>,
        pressure: Scalar<Screen>,
        now: Instant,
    ) -> (M, PointerContext<M>) {
        let (base, alternate) = match context {
            PointerContext::Default => {
                trace!(?mode, "pointer press");
                (self.model.clone(), false)
            }
            PointerContext::ReadyForAlternate {
                mode: released_mode,
                saved,
                position: released_position,
                released_at,
            } => {
                let in_time = now.saturating_duration_since(released_at) <= self.config.alternate_timeout;
                let nearby = (position - released_position).magnitude_squared()
                    <= self.config.movement_threshold * self.config.movement_threshold;
                let alternate = released_mode == mode && in_time && nearby;

                debug!(?mode, alternate, in_time, nearby, "pointer press after release");
                if alternate {
                    (saved, true)
                } else {
                    (self.model.clone(), false)
                }
            }
            held @ (PointerContext::Pressed { .. } | PointerContext::PressedMoved { .. }) => {
                trace!(?mode, "ignoring press while another pointer is held");
                return (self.model.clone(), held);
            }
        };

        let event = Event::PointerPress {
            mode,
            alternate,
            point: Point::new(position, pressure),
        };
        let model = (self.update)(&base, &event);

        (
            model,
            PointerContext::Pressed {
                mode,
                position,
                pressure,
                saved: base,
                alternate,
            },
        )
    }

    fn pointer_move(
        &self,
        context: PointerContext<M>,
        position: Vector<Screen>,
        pressure: Scalar<Screen>,
    ) -> (M, PointerContext<M>) {
        let move_event = Event::PointerMove { position, pressure };

        let (mode, path, saved, alternate) = match context {
            PointerContext::Pressed {
                mode,
                position: pressed_at,
                pressure: pressed_with,
                saved,
                alternate,
            } => {
                let path = Path::of(pressed_at, pressed_with) + Path::of(position, pressure);
                (mode, path, saved, alternate)
            }
            PointerContext::PressedMoved {
                mode,
                path,
                saved,
                alternate,
            } => (mode, path + Path::of(position, pressure), saved, alternate),
            other => return ((self.update)(&self.model, &move_event), other),
        };

        trace!(?mode, points = path.len(), length = path.length().value, "pointer drag");
        let drag = Event::PointerDrag {
            mode,
            alternate,
            path: path.clone(),
            complete: false,
        };
        let model = (self.update)(&(self.update)(&saved, &move_event), &drag);

        (
            model,
            PointerContext::PressedMoved {
                mode,
                path,
                saved,
                alternate,
            },
        )
    }

    fn release(&self, context: PointerContext<M>, now: Instant) -> (M, PointerContext<M>) {
        match context {
            PointerContext::Pressed {
                mode,
                position,
                saved,
                alternate,
                ..
            } => {
                if alternate {
                    trace!(?mode, "alternate press released");
                    (self.model.clone(), PointerContext::Default)
                } else {
                    trace!(?mode, "press released, waiting for alternate");
                    (
                        self.model.clone(),
                        PointerContext::ReadyForAlternate {
                            mode,
                            saved,
                            position,
                            released_at: now,
                        },
                    )
                }
            }
            PointerContext::PressedMoved {
                mode,
                path,
                saved,
                alternate,
            } => {
                debug!(?mode, alternate, points = path.len(), "drag complete");
                let drag = Event::PointerDrag {
                    mode,
                    alternate,
                    path,
                    complete: true,
                };
                ((self.update)(&saved, &drag), PointerContext::Default)
            }
            _ => (self.model.clone(), PointerContext::Default),
        }
    }

    fn passthrough(&self, context: PointerContext<M>, event: &Event, now: Instant) -> (M, PointerContext<M>) {
        let model = (self.update)(&self.model, event);

        let context = if context.timed_out(now, self.config.alternate_timeout) {
            trace!("alternate window closed");
            PointerContext::Default
        } else {
            context.map_saved(|saved| (self.update)(&saved, event))
        };

        (model, context)
    }
}
