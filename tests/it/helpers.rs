//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestModelBuilder` - Builder pattern for models with preset entities
//! - Input event constructors (`press`, `moved`, `release`, `scroll`)
//! - `Clock` - A manual clock for timing-sensitive gesture tests

#![allow(dead_code)]

use inkboard::app::{LocalSketchHost, Model};
use inkboard::colour::palette;
use inkboard::entity::Entity;
use inkboard::events::{InputEvent, PointerMode, ScrollMode};
use inkboard::geometry::{Path, Point, Scalar, Screen, Vector, World};
use inkboard::input::EventFold;
use inkboard::update_model;
use inkboard::Event;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const EPSILON: f64 = 1e-9;

pub const WINDOW: (f64, f64) = (800.0, 600.0);

// ============================================================================
// TestModelBuilder
// ============================================================================

/// Builder for models with a window size and starting entities.
///
/// # Example
/// ```ignore
/// let model = TestModelBuilder::new()
///     .with_point(0.0, 0.0, 0.01)
///     .with_window(1024.0, 768.0)
///     .build();
/// ```
pub struct TestModelBuilder {
    entities: Vec<Entity>,
    window: (f64, f64),
}

impl Default for TestModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestModelBuilder {
    /// An empty sketch in an 800x600 window.
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            window: WINDOW,
        }
    }

    pub fn with_window(mut self, width: f64, height: f64) -> Self {
        self.window = (width, height);
        self
    }

    /// Add a world-space point entity.
    pub fn with_point(mut self, x: f64, y: f64, size: f64) -> Self {
        self.entities.push(Entity::point(
            Point::<World>::new(Vector::new(x, y), Scalar::new(size)),
            palette::RED,
        ));
        self
    }

    /// Add a world-space stroke through `points`, all of width `size`.
    pub fn with_stroke(mut self, points: &[(f64, f64)], size: f64) -> Self {
        let path = Path::from_positions(points.iter().map(|&(x, y)| (Vector::new(x, y), Scalar::new(size))));
        self.entities.push(Entity::path(path, palette::GREEN));
        self
    }

    pub fn build(self) -> Model {
        let host = LocalSketchHost::with_entities(self.entities);
        Model::new(Arc::new(host)).with_window_size(Vector::new(self.window.0, self.window.1))
    }
}

/// A fold over the real reducer, starting from `model`.
pub fn fold(model: Model) -> EventFold<Model, fn(&Model, &Event) -> Model> {
    EventFold::new(model, update_model as fn(&Model, &Event) -> Model)
}

// ============================================================================
// Input events
// ============================================================================

pub fn press(mode: PointerMode, x: f64, y: f64) -> InputEvent {
    InputEvent::PointerPressed {
        mode,
        position: Vector::new(x, y),
        pressure: Scalar::new(1.0),
    }
}

pub fn moved(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerMoved {
        position: Vector::new(x, y),
        pressure: Scalar::new(1.0),
    }
}

pub fn release() -> InputEvent {
    InputEvent::PointerReleased
}

pub fn scroll(mode: ScrollMode, dx: f64, dy: f64, x: f64, y: f64) -> InputEvent {
    InputEvent::Scroll {
        mode,
        delta: Vector::new(dx, dy),
        position: Vector::new(x, y),
    }
}

pub fn screen(x: f64, y: f64) -> Vector<Screen> {
    Vector::new(x, y)
}

// ============================================================================
// Clock
// ============================================================================

/// Manually advanced time source.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    now: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self { now: Instant::now() }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn advance_ms(&mut self, ms: u64) -> Instant {
        self.now += Duration::from_millis(ms);
        self.now
    }
}
