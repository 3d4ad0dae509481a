//! End-to-end sketching, selection and navigation through the real reducer.

use crate::helpers::{Clock, EPSILON, TestModelBuilder, fold, moved, press, release, screen, scroll};
use inkboard::entity::{Entity, EntityId};
use inkboard::events::{PointerMode, ScrollMode};
use inkboard::visual_hint::VisualHint;

#[test]
fn test_tap_at_window_centre_adds_point_at_focus() {
    let clock = Clock::new();
    let mut fold = fold(TestModelBuilder::new().build());

    fold.handle(press(PointerMode::Primary, 400.0, 300.0), clock.now());
    let model = fold.handle(release(), clock.now());

    assert_eq!(model.entities().len(), 1);
    let stored = model.entities().get(EntityId(0)).unwrap();
    let Entity::Point(point) = &stored.entity else {
        panic!("expected a point, got {:?}", stored.entity);
    };
    assert!(point.point.position.magnitude() < EPSILON);

    // And it maps straight back to where it was tapped
    let back = point.point.position.transform(&model.viewport().world_to_screen());
    assert!(back.distance(screen(400.0, 300.0)) < EPSILON);
}

#[test]
fn test_stroke_replaces_its_previews() {
    let clock = Clock::new();
    let mut fold = fold(TestModelBuilder::new().build());

    fold.handle(press(PointerMode::Primary, 100.0, 100.0), clock.now());
    for i in 1..=4 {
        let model = fold.handle(moved(100.0 + i as f64 * 20.0, 100.0), clock.now());
        // The press's point is rolled back while dragging; only the hint shows
        assert!(model.entities().is_empty());
        assert!(matches!(model.application.visual_hint, VisualHint::Path(_)));
    }
    let model = fold.handle(release(), clock.now());

    assert_eq!(model.entities().len(), 1);
    assert!(matches!(model.entities().get(EntityId(0)).unwrap().entity, Entity::Path(_)));
    assert!(model.application.visual_hint.is_none());
}

#[test]
fn test_double_tap_selects_last_added() {
    let mut clock = Clock::new();
    let mut fold = fold(TestModelBuilder::new().build());

    // Draw something first
    fold.handle(press(PointerMode::Primary, 200.0, 200.0), clock.now());
    fold.handle(release(), clock.now());
    clock.advance_ms(2000);

    fold.handle(press(PointerMode::Primary, 500.0, 500.0), clock.now());
    fold.handle(release(), clock.advance_ms(50));
    let model = fold.handle(press(PointerMode::Primary, 505.0, 500.0), clock.advance_ms(100));

    // The second tap's point was rolled back; the alternate selects the first
    assert_eq!(model.entities().len(), 1);
    assert!(model.is_selected(EntityId(0)));
}

#[test]
fn test_secondary_drag_selects_enclosed_entities() {
    let clock = Clock::new();
    let start = TestModelBuilder::new()
        .with_point(-0.25, -0.25, 0.01)
        .with_point(0.25, 0.25, 0.01)
        .build();
    let mut fold = fold(start);

    // World (-0.25, -0.25) is screen (200, 100) in an 800x600 window
    fold.handle(press(PointerMode::Secondary, 150.0, 50.0), clock.now());
    let model = fold.handle(moved(250.0, 150.0), clock.now());
    assert!(model.is_selected(EntityId(0)));
    assert!(matches!(model.application.visual_hint, VisualHint::Selection(_)));

    let model = fold.handle(release(), clock.now());
    assert!(model.is_selected(EntityId(0)));
    assert!(!model.is_selected(EntityId(1)));
    assert!(model.application.visual_hint.is_none());
}

#[test]
fn test_tertiary_drag_pans_with_pointer() {
    let clock = Clock::new();
    let mut fold = fold(TestModelBuilder::new().with_point(0.0, 0.0, 0.01).build());

    fold.handle(press(PointerMode::Tertiary, 400.0, 300.0), clock.now());
    fold.handle(moved(440.0, 300.0), clock.now());
    let model = fold.handle(moved(480.0, 320.0), clock.now());

    // The entity under the press point follows the pointer
    let to_screen = model.viewport().world_to_screen();
    let Entity::Point(point) = &model.entities().get(EntityId(0)).unwrap().entity else {
        panic!("expected a point");
    };
    let on_screen = point.point.position.transform(&to_screen);
    assert!(on_screen.distance(screen(480.0, 320.0)) < 1e-6, "{on_screen:?}");

    let released = fold.handle(release(), clock.now());
    assert!((released.viewport().focus.centre.x + 0.1).abs() < 1e-9);
}

#[test]
fn test_two_zoom_steps_keep_anchor_fixed() {
    let clock = Clock::new();
    let mut fold = fold(TestModelBuilder::new().build());
    let anchor = screen(620.0, 140.0);

    let before = anchor.transform(&fold.model().viewport().screen_to_world());
    fold.handle(scroll(ScrollMode::Secondary, 0.0, 1.0, anchor.x, anchor.y), clock.now());
    let model = fold.handle(scroll(ScrollMode::Secondary, 0.0, 1.0, anchor.x, anchor.y), clock.now());

    assert!((model.viewport().focus.scale - 2.0).abs() < EPSILON);
    let after = anchor.transform(&model.viewport().screen_to_world());
    assert!(before.distance(after) < 1e-9, "{before:?} vs {after:?}");
}

#[test]
fn test_primary_scroll_pans_by_scaled_delta() {
    let clock = Clock::new();
    let mut fold = fold(TestModelBuilder::new().build());

    let model = fold.handle(scroll(ScrollMode::Primary, 0.5, -0.25, 0.0, 0.0), clock.now());
    let centre = model.viewport().focus.centre;
    // 64px per unit on an 800px window at scale 0
    assert!((centre.x + 32.0 / 800.0).abs() < EPSILON);
    assert!((centre.y - 16.0 / 800.0).abs() < EPSILON);
}
