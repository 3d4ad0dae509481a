//! The reducer: one semantic event in, one new model out.

use super::model::Model;
use crate::events::{Event, ScrollMode};
use crate::profile_scope;
use tracing::{debug, trace};

/// Apply `event` to `model`. Pure; the input model is never modified.
///
/// Pointer presses and drags are resolved to an interaction through the
/// model's pointer mappings and handed to its adapter. Primary scroll pans,
/// secondary scroll zooms around the pointer. Until the first redraw gives
/// the viewport a size, pointer and scroll events leave the model unchanged.
pub fn update_model(model: &Model, event: &Event) -> Model {
    profile_scope!("update_model");
    trace!(kind = event.kind(), "update");

    if needs_projection(event) && model.viewport().is_degenerate() {
        debug!(kind = event.kind(), "no usable viewport yet, ignoring");
        return model.clone();
    }

    match event {
        Event::Redraw { window_size } => model.with_window_size(*window_size),
        Event::PointerMove { position, .. } => model.with_pointer(*position),
        Event::PointerPress {
            mode,
            alternate,
            point,
        } => {
            let interaction = model.interaction_for(*mode, *alternate);
            model.application.adapter.handle_press(model, interaction, *point)
        }
        Event::PointerDrag {
            mode,
            alternate,
            path,
            complete,
        } => {
            let interaction = model.interaction_for(*mode, *alternate);
            let adapter = &model.application.adapter;
            if *complete {
                adapter.handle_complete_drag(model, interaction, path)
            } else {
                adapter.handle_partial_drag(model, interaction, path)
            }
        }
        Event::Scroll {
            mode: ScrollMode::Primary,
            delta,
            ..
        } => {
            let translation = delta.transform_delta(&model.viewport().screen_to_world());
            model.translate_viewport(-translation * model.application.scroll_translation_scale)
        }
        Event::Scroll {
            mode: ScrollMode::Secondary,
            delta,
            position,
        } => model.zoom_viewport(delta.y, *position),
        Event::Key(key) => model.application.adapter.handle_key(model, key),
        Event::Text(text) => model.application.adapter.handle_text(model, text),
        Event::FileDrop(files) => model.application.adapter.handle_file_drop(model, files),
    }
}

fn needs_projection(event: &Event) -> bool {
    matches!(
        event,
        Event::PointerPress { .. } | Event::PointerDrag { .. } | Event::Scroll { .. }
    )
}
