//! Session workflows: publication to other threads and settings reload.

use crate::helpers::{Clock, WINDOW, press, release};
use inkboard::app::{LocalSketchHost, Session};
use inkboard::events::{InputEvent, PointerMode};
use inkboard::geometry::Vector;
use inkboard::render::{DrawCommand, DrawList};
use inkboard::settings::Settings;
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use tempfile::tempdir;

fn session() -> Session {
    let mut session = Session::new(Arc::new(LocalSketchHost::new()));
    session.handle(InputEvent::Redraw {
        window_size: Vector::new(WINDOW.0, WINDOW.1),
    });
    session
}

#[test]
fn test_readers_on_other_threads_see_published_models() {
    let clock = Clock::new();
    let mut session = session();
    let snapshots = session.snapshots();

    session.handle_at(press(PointerMode::Primary, 100.0, 100.0), clock.now());
    session.handle_at(release(), clock.now());

    let count = thread::spawn(move || snapshots.load().entities().len()).join().unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_taps_before_first_redraw_are_harmless() {
    let mut clock = Clock::new();
    let mut session = Session::new(Arc::new(LocalSketchHost::new()));

    for i in 0..200 {
        let i = i as f64;
        session.handle_at(press(PointerMode::Primary, 3.0 * i, 7.0 * i), clock.advance_ms(2000));
        session.handle_at(release(), clock.now());
    }
    assert!(session.model().entities().is_empty());

    session.handle(InputEvent::Redraw {
        window_size: Vector::new(WINDOW.0, WINDOW.1),
    });
    session.handle_at(press(PointerMode::Primary, 100.0, 100.0), clock.advance_ms(2000));
    assert_eq!(session.model().entities().len(), 1);
}

#[test]
fn test_subscribers_receive_models_in_order() {
    let clock = Clock::new();
    let mut session = session();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _subscription = session.subscribe(move |model| sink.lock().push(model.entities().len()));

    session.handle_at(press(PointerMode::Primary, 100.0, 100.0), clock.now());
    session.handle_at(release(), clock.now());
    session.handle_at(press(PointerMode::Secondary, 300.0, 300.0), clock.now());

    assert_eq!(*seen.lock(), vec![1, 1, 1]);
}

#[test]
fn test_settings_file_drives_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r##"{
            "drawing": { "colour": "#ff0000", "point_size": 10.0 },
            "pointer_mappings": [ { "mode": "secondary", "interaction": "sketch" } ]
        }"##,
    )
    .unwrap();

    let settings = Settings::load_from(&path);
    let clock = Clock::new();
    let mut session = Session::with_settings(Arc::new(LocalSketchHost::new()), &settings);
    session.handle(InputEvent::Redraw {
        window_size: Vector::new(WINDOW.0, WINDOW.1),
    });

    // Secondary now sketches
    session.handle_at(press(PointerMode::Secondary, 400.0, 300.0), clock.now());
    let model = session.handle_at(release(), clock.now());
    assert_eq!(model.entities().len(), 1);

    let mut list = DrawList::new();
    session.draw(&mut list);
    match &list.commands()[0] {
        DrawCommand::Point { point, colour } => {
            assert!((point.size.value - 10.0).abs() < 1e-9);
            assert_eq!(colour.to_hex(), "#ff0000");
        }
        other => panic!("expected a point, got {other:?}"),
    }
}

#[test]
fn test_settings_apply_mid_gesture_survives_rollback() {
    let clock = Clock::new();
    let mut session = session();

    session.handle_at(press(PointerMode::Primary, 100.0, 100.0), clock.now());
    let mut settings = Settings::default();
    settings.navigation.scroll_translation_scale = 2.0;
    session.apply_settings(&settings);

    // The drag replays from the model saved at the press, which also got the new settings
    session.handle_at(crate::helpers::moved(150.0, 100.0), clock.now());
    let model = session.handle_at(release(), clock.now());
    assert_eq!(model.application.scroll_translation_scale, 2.0);
    assert_eq!(model.entities().len(), 1);
}
