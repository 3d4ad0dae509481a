//! The default adapter: sketching, spatial selection and panning.

use super::adapter::Adapter;
use super::interaction::InteractionType;
use super::model::Model;
use crate::constants::SMOOTHING_SAMPLES;
use crate::entity::Entity;
use crate::geometry::{BoundingArea, Path, Point, Screen, World, curve_fit};
use crate::visual_hint::VisualHint;

impl Adapter {
    /// Default behaviour.
    ///
    /// | Interaction     | Press              | Partial drag         | Complete drag     |
    /// |-----------------|--------------------|----------------------|-------------------|
    /// | `Sketch`        | add point          | path hint            | add stroke        |
    /// | `SelectMeta`    | select last added  | path hint            | -                 |
    /// | `SelectSpatial` | -                  | box hint + select    | select in box     |
    /// | `Navigation`    | -                  | pan                  | pan               |
    /// | others          | -                  | path hint            | -                 |
    pub fn main() -> Self {
        use InteractionType::*;

        Adapter::new("main")
            .on_press(Sketch, |model, point| Ok(add_point(model, point)))
            .on_press(SelectMeta, |model, _| Ok(model.select(model.application.last_added)))
            .on_complete_drag(Sketch, |model, path| Ok(add_stroke(model, path)))
            .on_complete_drag(SelectSpatial, |model, path| Ok(select_within(model, path)))
            .on_complete_drag(Navigation, |model, path| Ok(pan(model, path)))
            .on_partial_drag(SelectSpatial, |model, path| {
                Ok(select_within(&show_selection_box(model, path), path))
            })
            .on_partial_drag(Navigation, |model, path| Ok(pan(model, path)))
            .on_partial_drags(
                &[Sketch, SpecialNavigation, SelectTemporal, SelectMeta, Action],
                |model, path| Ok(show_path(model, path)),
            )
    }
}

fn add_point(model: &Model, point: Point<Screen>) -> Model {
    let scaled = Point::new(point.position, point.size * model.client.point_size);
    let world = scaled.transform(&model.viewport().screen_to_world());
    model.add_entity(Entity::point(world, model.client.colour))
}

fn add_stroke(model: &Model, path: &Path<Screen>) -> Model {
    let line_width = model.client.line_width;
    let world: Path<World> = path
        .map_sizes(|size| size * line_width)
        .transform(&model.viewport().screen_to_world());

    let world = if model.client.smooth_strokes {
        curve_fit::smooth(&world, SMOOTHING_SAMPLES)
    } else {
        world
    };

    model.add_entity(Entity::path(world, model.client.colour))
}

/// Screen-space box spanned by a drag's first and last points, sizes included.
fn drag_box(path: &Path<Screen>) -> BoundingArea<Screen> {
    (Path::from_path_point(path.start_point()) + Path::from_path_point(path.end_point())).bounding_area()
}

/// Select every visible entity lying entirely inside the drag box.
fn select_within(model: &Model, path: &Path<Screen>) -> Model {
    let viewport = model.viewport();
    let area = drag_box(path).transform(&viewport.screen_to_world());

    let selected: Vec<_> = model
        .entities()
        .all_visible(viewport)
        .into_iter()
        .filter(|stored| area.contains(&stored.entity.bounding_area()))
        .map(|stored| stored.id)
        .collect();

    tracing::trace!(count = selected.len(), "spatial selection");
    model.select(selected)
}

fn pan(model: &Model, path: &Path<Screen>) -> Model {
    let offset = path.offset().transform_delta(&model.viewport().screen_to_world());
    model.translate_viewport(-offset)
}

fn show_selection_box(model: &Model, path: &Path<Screen>) -> Model {
    model.with_visual_hint(VisualHint::Selection(drag_box(path))).deselect()
}

fn show_path(model: &Model, path: &Path<Screen>) -> Model {
    model.with_visual_hint(VisualHint::Path(path.clone())).deselect()
}
