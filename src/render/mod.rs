//! Rendering contract between the model and a drawing backend.
//!
//! The crate never paints pixels itself. [`draw_model`] walks a model and
//! issues screen-space primitives to a [`DrawContext`]; a backend (GPU
//! canvas, SVG writer, test recorder) implements the three primitives.
//!
//! Draw order:
//! 1. Visible entities, in id order
//! 2. Outlines of selected entities
//! 3. The active visual hint

mod draw_list;

pub use draw_list::{DrawCommand, DrawList};

use crate::app::Model;
use crate::colour::{Colour, palette};
use crate::constants::SELECTION_LIGHTEN;
use crate::entity::Entity;
use crate::geometry::{BoundingArea, Path, Point, Screen};
use crate::profile_scope;
use crate::viewport::WorldToScreen;

/// Screen-space drawing primitives.
pub trait DrawContext {
    /// A filled disc of radius `point.size`.
    fn point(&mut self, point: &Point<Screen>, colour: Colour);
    /// A stroke whose width follows each point's size.
    fn path(&mut self, path: &Path<Screen>, colour: Colour);
    fn box_outline(&mut self, area: &BoundingArea<Screen>, colour: Colour);
}

pub fn draw_entity(ctx: &mut impl DrawContext, entity: &Entity, transform: &WorldToScreen) {
    match entity {
        Entity::Point(point) => ctx.point(&point.point.transform(transform), point.colour),
        Entity::Path(path) => ctx.path(&path.path().transform(transform), path.colour()),
    }
}

/// Draw everything visible in `model`'s viewport.
pub fn draw_model(ctx: &mut impl DrawContext, model: &Model) {
    profile_scope!("draw_model");

    let viewport = model.viewport();
    let transform = viewport.world_to_screen();
    let visible = model.entities().all_visible(viewport);

    for stored in &visible {
        draw_entity(ctx, &stored.entity, &transform);
    }

    let outline = palette::BLUE.lighten(SELECTION_LIGHTEN);
    for stored in visible.iter().filter(|stored| model.is_selected(stored.id)) {
        ctx.box_outline(&stored.entity.bounding_area().transform(&transform), outline);
    }

    model.application.visual_hint.draw(ctx);
}
