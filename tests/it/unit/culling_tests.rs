//! Unit tests for entity visibility culling.

use crate::helpers::TestModelBuilder;
use inkboard::entity::EntityId;
use inkboard::geometry::Vector;

fn visible_ids(model: &inkboard::Model) -> Vec<EntityId> {
    model.entities().all_visible(model.viewport()).iter().map(|s| s.id).collect()
}

#[test]
fn test_entities_outside_viewport_are_culled() {
    // Window 800x600 at scale 0: the culling area is x in [-1, 1], y in [-0.75, 0.75]
    let model = TestModelBuilder::new()
        .with_point(0.0, 0.0, 0.01)
        .with_point(5.0, 0.0, 0.01)
        .with_point(0.0, -3.0, 0.01)
        .build();
    assert_eq!(visible_ids(&model), vec![EntityId(0)]);
}

#[test]
fn test_touching_the_edge_is_not_overlap() {
    let model = TestModelBuilder::new()
        .with_point(1.5, 0.0, 0.5)
        .with_point(1.4, 0.0, 0.5)
        .build();
    assert_eq!(visible_ids(&model), vec![EntityId(1)]);
}

#[test]
fn test_entities_below_detail_threshold_are_culled() {
    // 0.0001 world units is 0.08 pixels on an 800 pixel window
    let model = TestModelBuilder::new()
        .with_point(0.0, 0.0, 0.0001)
        .with_point(0.1, 0.0, 0.001)
        .build();
    assert_eq!(visible_ids(&model), vec![EntityId(1)]);
}

#[test]
fn test_zooming_in_reveals_fine_detail() {
    let model = TestModelBuilder::new().with_point(0.0, 0.0, 0.0001).build();
    assert!(visible_ids(&model).is_empty());

    let zoomed = model.zoom_viewport(4.0, Vector::new(400.0, 300.0));
    assert_eq!(visible_ids(&zoomed), vec![EntityId(0)]);
}

#[test]
fn test_visible_strokes_are_returned_in_id_order() {
    let model = TestModelBuilder::new()
        .with_stroke(&[(0.2, 0.2), (0.4, 0.4)], 0.01)
        .with_point(-0.5, 0.0, 0.01)
        .with_stroke(&[(-0.2, -0.2), (0.0, 0.3)], 0.01)
        .build();
    assert_eq!(visible_ids(&model), vec![EntityId(0), EntityId(1), EntityId(2)]);
}

#[test]
fn test_panning_changes_what_is_visible() {
    let model = TestModelBuilder::new().with_point(5.0, 0.0, 0.01).build();
    assert!(visible_ids(&model).is_empty());
    let panned = model.translate_viewport(Vector::new(5.0, 0.0));
    assert_eq!(visible_ids(&panned), vec![EntityId(0)]);
}
