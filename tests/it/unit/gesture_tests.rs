//! Unit tests for gesture recognition, using a model that records every
//! event the fold applies to it.

use crate::helpers::{Clock, moved, press, release, scroll};
use inkboard::events::{Event, PointerMode, ScrollMode};
use inkboard::input::{EventFold, GestureConfig};
use std::time::Duration;

type Recorder = EventFold<Vec<Event>, fn(&Vec<Event>, &Event) -> Vec<Event>>;

fn record(events: &Vec<Event>, event: &Event) -> Vec<Event> {
    let mut events = events.clone();
    events.push(event.clone());
    events
}

fn recorder() -> Recorder {
    EventFold::new(Vec::new(), record as fn(&Vec<Event>, &Event) -> Vec<Event>)
}

fn presses(events: &[Event]) -> Vec<bool> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::PointerPress { alternate, .. } => Some(*alternate),
            _ => None,
        })
        .collect()
}

fn drags(events: &[Event]) -> Vec<bool> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::PointerDrag { complete, .. } => Some(*complete),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Alternate detection
// ============================================================================

#[test]
fn test_second_press_within_timeout_is_alternate() {
    let mut clock = Clock::new();
    let mut fold = recorder();

    fold.handle(press(PointerMode::Primary, 10.0, 10.0), clock.now());
    fold.handle(release(), clock.advance_ms(50));
    let model = fold.handle(press(PointerMode::Primary, 20.0, 15.0), clock.advance_ms(300));

    // The first press is rolled back and replaced by its alternate
    assert_eq!(presses(model), vec![true]);
}

#[test]
fn test_release_of_alternate_press_settles_to_idle() {
    let mut clock = Clock::new();
    let mut fold = recorder();

    fold.handle(press(PointerMode::Primary, 10.0, 10.0), clock.now());
    fold.handle(release(), clock.advance_ms(10));
    fold.handle(press(PointerMode::Primary, 10.0, 10.0), clock.advance_ms(10));
    fold.handle(release(), clock.advance_ms(10));
    assert!(fold.context().is_idle());

    // A third quick tap starts over instead of chaining another alternate
    let model = fold.handle(press(PointerMode::Primary, 10.0, 10.0), clock.advance_ms(10));
    assert_eq!(presses(model), vec![true, false]);
}

#[test]
fn test_second_press_after_timeout_is_plain() {
    let mut clock = Clock::new();
    let mut fold = recorder();

    fold.handle(press(PointerMode::Primary, 10.0, 10.0), clock.now());
    fold.handle(release(), clock.advance_ms(50));
    let model = fold.handle(press(PointerMode::Primary, 10.0, 10.0), clock.advance_ms(900));

    assert_eq!(presses(model), vec![false, false]);
}

#[test]
fn test_second_press_beyond_threshold_is_plain() {
    let mut clock = Clock::new();
    let mut fold = recorder();

    fold.handle(press(PointerMode::Primary, 0.0, 0.0), clock.now());
    fold.handle(release(), clock.advance_ms(10));
    let model = fold.handle(press(PointerMode::Primary, 40.0, 0.0), clock.advance_ms(10));

    assert_eq!(presses(model), vec![false, false]);
}

#[test]
fn test_second_press_with_other_mode_is_plain() {
    let mut clock = Clock::new();
    let mut fold = recorder();

    fold.handle(press(PointerMode::Primary, 0.0, 0.0), clock.now());
    fold.handle(release(), clock.advance_ms(10));
    let model = fold.handle(press(PointerMode::Secondary, 0.0, 0.0), clock.advance_ms(10));

    assert_eq!(presses(model), vec![false, false]);
}

#[test]
fn test_configured_timeout_is_respected() {
    let mut clock = Clock::new();
    let mut fold = recorder();
    fold.set_config(GestureConfig {
        alternate_timeout: Duration::from_millis(100),
        ..GestureConfig::default()
    });

    fold.handle(press(PointerMode::Primary, 0.0, 0.0), clock.now());
    fold.handle(release(), clock.now());
    let model = fold.handle(press(PointerMode::Primary, 0.0, 0.0), clock.advance_ms(300));
    assert_eq!(presses(model), vec![false, false]);
}

#[test]
fn test_scroll_after_timeout_closes_alternate_window() {
    let mut clock = Clock::new();
    let mut fold = recorder();

    fold.handle(press(PointerMode::Primary, 0.0, 0.0), clock.now());
    fold.handle(release(), clock.now());
    assert!(fold.context().is_ready_for_alternate());

    fold.handle(scroll(ScrollMode::Primary, 0.0, 1.0, 0.0, 0.0), clock.advance_ms(1000));
    assert!(fold.context().is_idle());
}

// ============================================================================
// Drags
// ============================================================================

#[test]
fn test_drag_emits_one_partial_per_move_and_one_complete() {
    let clock = Clock::new();
    let mut fold = recorder();

    fold.handle(press(PointerMode::Primary, 0.0, 0.0), clock.now());
    let mut partials = 0;
    for i in 1..=5 {
        let model = fold.handle(moved(i as f64 * 10.0, 0.0), clock.now());
        // Each move replays from the pre-press model: one move, one partial drag
        assert_eq!(drags(model), vec![false]);
        partials += 1;
    }
    assert_eq!(partials, 5);

    let model = fold.handle(release(), clock.now());
    assert_eq!(drags(model), vec![true]);
    assert!(presses(model).is_empty());
    assert!(fold.context().is_idle());
}

#[test]
fn test_alternate_drag_replays_from_first_saved_model() {
    let mut clock = Clock::new();
    let mut fold = recorder();

    fold.handle(press(PointerMode::Secondary, 0.0, 0.0), clock.now());
    fold.handle(release(), clock.advance_ms(20));
    fold.handle(press(PointerMode::Secondary, 2.0, 2.0), clock.advance_ms(20));

    let alternates = |events: &[Event]| -> Vec<(bool, bool)> {
        events
            .iter()
            .filter_map(|e| match e {
                Event::PointerDrag {
                    alternate, complete, ..
                } => Some((*alternate, *complete)),
                _ => None,
            })
            .collect()
    };

    for x in [10.0, 20.0] {
        let model = fold.handle(moved(x, 0.0), clock.advance_ms(5));
        // Neither press survives the replay: only this frame's move and drag
        assert!(presses(model).is_empty());
        assert_eq!(model.len(), 2);
        assert_eq!(alternates(model), vec![(true, false)]);
    }

    let model = fold.handle(release(), clock.advance_ms(5));
    assert_eq!(alternates(model), vec![(true, true)]);
    assert_eq!(model.len(), 1);
    assert!(fold.context().is_idle());
}

#[test]
fn test_drag_path_grows_with_each_move() {
    let clock = Clock::new();
    let mut fold = recorder();

    fold.handle(press(PointerMode::Tertiary, 0.0, 0.0), clock.now());
    fold.handle(moved(3.0, 4.0), clock.now());
    fold.handle(moved(3.0, 10.0), clock.now());
    let model = fold.handle(release(), clock.now());

    match model.last() {
        Some(Event::PointerDrag {
            mode,
            path,
            complete: true,
            ..
        }) => {
            assert_eq!(*mode, PointerMode::Tertiary);
            assert_eq!(path.len(), 3);
            assert!((path.length().value - 11.0).abs() < 1e-9);
        }
        other => panic!("expected a complete drag, got {other:?}"),
    }
}

#[test]
fn test_moves_without_press_only_track_pointer() {
    let clock = Clock::new();
    let mut fold = recorder();

    fold.handle(moved(1.0, 1.0), clock.now());
    let model = fold.handle(moved(2.0, 2.0), clock.now());

    assert_eq!(model.len(), 2);
    assert!(model.iter().all(|e| matches!(e, Event::PointerMove { .. })));
}

#[test]
fn test_release_without_press_is_noop() {
    let clock = Clock::new();
    let mut fold = recorder();
    let model = fold.handle(release(), clock.now());
    assert!(model.is_empty());
    assert!(fold.context().is_idle());
}

#[test]
fn test_press_while_held_is_ignored() {
    let clock = Clock::new();
    let mut fold = recorder();

    fold.handle(press(PointerMode::Primary, 0.0, 0.0), clock.now());
    let model = fold.handle(press(PointerMode::Secondary, 5.0, 5.0), clock.now());
    assert_eq!(presses(model), vec![false]);
    assert_eq!(fold.context().mode(), Some(PointerMode::Primary));
}

#[test]
fn test_every_emitted_drag_is_counted_once() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let mut fold = EventFold::new((), move |_: &(), event: &Event| sink.borrow_mut().push(event.clone()));

    let clock = Clock::new();
    fold.handle(press(PointerMode::Primary, 0.0, 0.0), clock.now());
    fold.handle(moved(5.0, 0.0), clock.now());
    fold.handle(moved(5.0, 7.0), clock.now());
    fold.handle(moved(9.0, 7.0), clock.now());
    fold.handle(release(), clock.now());

    let log = log.borrow();
    assert_eq!(presses(&log), vec![false]);
    assert_eq!(drags(&log), vec![false, false, false, true]);

    let lengths: Vec<f64> = log
        .iter()
        .filter_map(|e| match e {
            Event::PointerDrag { path, complete: false, .. } => Some(path.length().value),
            _ => None,
        })
        .collect();
    assert_eq!(lengths, vec![5.0, 12.0, 16.0]);
}
