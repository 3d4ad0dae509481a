//! Viewport: maps between world, view and screen space.
//!
//! ## Spaces
//!
//! - **World** has free units.
//! - **View** is normalised so the window width spans `[-0.5, 0.5]`.
//! - **Screen** is `[0, width] x [0, height]` pixels.
//!
//! The focus scale is a log2 zoom: the window width covers `2^-scale` world
//! units. Projection uses the window *width* as its reference, so a
//! non-square window is letterboxed with a vertical offset
//! (`y_correction`).
//!
//! ```text
//! view   = (world - centre) * 2^scale
//! screen = y_correction + (view + 0.5) * width
//! ```

use crate::constants::{MAX_SCALE, MIN_SCALE};
use crate::geometry::{BoundingArea, Scalar, Screen, Vector, VectorSpaceTransform, View, World};

/// Where the viewport looks and how closely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchFocus {
    /// World position at the centre of the view.
    pub centre: Vector<World>,
    /// One world unit is `2^scale` view units.
    pub scale: f64,
}

impl SketchFocus {
    pub const fn new(centre: Vector<World>, scale: f64) -> Self {
        Self { centre, scale }
    }
}

impl Default for SketchFocus {
    fn default() -> Self {
        Self::new(Vector::zero(), 0.0)
    }
}

/// A focus plus the size of the window being rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub focus: SketchFocus,
    pub window_size: Vector<Screen>,
}

impl Viewport {
    pub const fn new(focus: SketchFocus, window_size: Vector<Screen>) -> Self {
        Self { focus, window_size }
    }

    /// No usable projection: the window has no width yet (before the
    /// first redraw) or the zoom is out of range.
    pub fn is_degenerate(&self) -> bool {
        let zoom = self.zoom();
        !(self.window_size.x > 0.0 && self.window_size.x.is_finite() && zoom > 0.0 && zoom.is_finite())
    }

    /// Vertical letterbox offset for non-square windows.
    pub fn y_correction(&self) -> Vector<Screen> {
        Vector::new(0.0, (self.window_size.y - self.window_size.x) / 2.0)
    }

    pub fn world_to_screen(&self) -> WorldToScreen {
        WorldToScreen { viewport: *self }
    }

    pub fn screen_to_world(&self) -> ScreenToWorld {
        ScreenToWorld { viewport: *self }
    }

    /// World-space area considered visible for culling.
    ///
    /// The half-width is `2^-scale` (twice the strictly visible half-width,
    /// so entities near the edges are kept); the half-height follows from the
    /// window's aspect ratio.
    pub fn to_bounding_area(&self) -> BoundingArea<World> {
        let aspect_ratio_inv = self.window_size.y / self.window_size.x;
        let half_width = (-self.focus.scale).exp2();
        let half_height = half_width * aspect_ratio_inv;
        let centre = self.focus.centre;

        BoundingArea::new(
            centre.x - half_width,
            centre.x + half_width,
            centre.y - half_height,
            centre.y + half_height,
        )
    }

    pub fn with_window_size(self, window_size: Vector<Screen>) -> Self {
        Self { window_size, ..self }
    }

    /// Move the focus centre by `translation`.
    pub fn translated(self, translation: Vector<World>) -> Self {
        Self {
            focus: SketchFocus::new(self.focus.centre + translation, self.focus.scale),
            ..self
        }
    }

    /// Zoom by `adjustment` (log2) keeping the world point under `anchor`
    /// fixed on screen. The scale is clamped to `[MIN_SCALE, MAX_SCALE]`;
    /// a degenerate viewport is returned unchanged.
    pub fn zoomed_around(self, adjustment: f64, anchor: Vector<Screen>) -> Self {
        if self.is_degenerate() || !adjustment.is_finite() {
            return self;
        }
        let adjustment = (self.focus.scale + adjustment).clamp(MIN_SCALE, MAX_SCALE) - self.focus.scale;
        let centre = self.focus.centre;
        let delta = anchor.transform(&self.screen_to_world()) - centre;
        let recentre = delta * (1.0 - (-adjustment).exp2());

        Self {
            focus: SketchFocus::new(centre + recentre, self.focus.scale + adjustment),
            ..self
        }
    }

    fn zoom(&self) -> f64 {
        self.focus.scale.exp2()
    }

    fn world_to_view(&self, world: Vector<World>) -> Vector<View> {
        ((world - self.focus.centre) * self.zoom()).cast()
    }

    fn view_to_screen(&self, view: Vector<View>) -> Vector<Screen> {
        self.y_correction() + (view + Vector::splat(0.5)).cast::<Screen>() * self.window_size.x
    }

    fn screen_to_view(&self, screen: Vector<Screen>) -> Vector<View> {
        ((screen - self.y_correction()) / self.window_size.x).cast::<View>() - Vector::splat(0.5)
    }

    fn view_to_world(&self, view: Vector<View>) -> Vector<World> {
        self.focus.centre + (view / self.zoom()).cast()
    }
}

/// World → screen projection of a [`Viewport`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldToScreen {
    viewport: Viewport,
}

impl VectorSpaceTransform<World, Screen> for WorldToScreen {
    fn transform_scalar(&self, scalar: Scalar<World>) -> Scalar<Screen> {
        let v = &self.viewport;
        scalar.map(|s| s * v.zoom() * v.window_size.x).cast()
    }

    fn transform_vector(&self, vector: Vector<World>) -> Vector<Screen> {
        self.viewport.view_to_screen(self.viewport.world_to_view(vector))
    }
}

/// Screen → world inverse of [`WorldToScreen`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenToWorld {
    viewport: Viewport,
}

impl VectorSpaceTransform<Screen, World> for ScreenToWorld {
    fn transform_scalar(&self, scalar: Scalar<Screen>) -> Scalar<World> {
        let v = &self.viewport;
        scalar.map(|s| s / v.zoom() / v.window_size.x).cast()
    }

    fn transform_vector(&self, vector: Vector<Screen>) -> Vector<World> {
        self.viewport.view_to_world(self.viewport.screen_to_view(vector))
    }
}
