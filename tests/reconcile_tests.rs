//! Integration tests for host-driven divergence
//!
//! The host may drop or add screens on its own. These tests check that the
//! navigator notices on the next read, command, or registration event.

mod common;

use common::*;
use stack_navigator::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_back_gesture_is_reconciled_on_read() {
    let harness = Harness::new();
    let root = harness.id_at(0);
    harness.push_settled("a");
    assert_eq!(harness.navigator.num_of_items(), 2);

    harness.host.simulate_back();

    assert_eq!(harness.navigator.num_of_items(), 1);
    assert_eq!(harness.navigator.top_identifier(), Some(root));
}

#[test]
fn test_back_gesture_is_reconciled_before_push() {
    let harness = Harness::new();
    harness.push_settled("a");
    harness.push_settled("b");

    harness.host.simulate_back();
    harness.push_settled("c");

    assert_host(&harness, &["root", "a", "c"]);
    assert_eq!(harness.navigator.num_of_items(), 3);
    assert_eq!(harness.navigator.top_identifier(), Some(harness.id_at(2)));
}

#[test]
fn test_host_pop_releases_identity() {
    let harness = Harness::new();
    let kept = page("kept");
    let held = kept.clone();
    harness
        .navigator
        .push_view(move || held, PushOptions::new(), |_| {});
    harness.settle();
    let id = harness.navigator.identifier_of(&kept).unwrap();

    harness.host.simulate_back();
    harness.navigator.sync();

    assert!(harness.navigator.identifier_of(&kept).is_none());
    assert!(harness.navigator.screen_of(&id).is_none());
}

#[test]
fn test_pop_to_id_after_host_removed_target() {
    let harness = Harness::new();
    harness.push_settled("a");
    harness.push_settled("b");
    let b = harness.id_at(2);

    harness.host.simulate_back();
    harness.navigator.pop_to_id(b.clone(), true, harness.recorder());
    harness.settle();

    assert_eq!(harness.last_result(), Some(Err(NavigatorError::NotFound { id: b })));
    assert_eq!(harness.navigator.num_of_items(), 2);
}

#[test]
fn test_host_driven_forward_navigation_registers() {
    let harness = Harness::new();
    let screen = page("deep-link");
    harness.host.simulate_push(screen.clone());

    // Not yet reported: the model only trusts registration events.
    assert_eq!(harness.navigator.num_of_items(), 1);

    harness.navigator.screen_appeared(screen.clone());

    assert_eq!(harness.navigator.num_of_items(), 2);
    assert_eq!(
        harness.navigator.top_identifier(),
        harness.navigator.identifier_of(&screen)
    );
}

#[test]
fn test_duplicate_registration_is_ignored() {
    let harness = Harness::new();
    let screen = page("a");
    harness.host.simulate_push(screen.clone());

    harness.navigator.screen_appeared(screen.clone());
    let id = harness.navigator.identifier_of(&screen);
    harness.navigator.screen_appeared(screen.clone());

    assert_eq!(harness.navigator.num_of_items(), 2);
    assert_eq!(harness.navigator.identifier_of(&screen), id);
}

#[test]
fn test_registration_of_screen_outside_host_is_ignored() {
    let harness = Harness::new();
    let stranger = page("stranger");

    harness.navigator.screen_appeared(stranger.clone());

    assert_eq!(harness.navigator.num_of_items(), 1);
    assert!(harness.navigator.identifier_of(&stranger).is_none());
}

#[test]
fn test_events_report_registration_and_removal() {
    let harness = Harness::new();
    let events: Rc<RefCell<Vec<StackEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    let subscription = harness
        .navigator
        .subscribe(move |event| sink.borrow_mut().push(event.clone()));

    harness.push_settled("a");
    harness.push_settled("b");
    let a = harness.id_at(1);
    let b = harness.id_at(2);
    harness.host.simulate_back();
    harness.navigator.sync();

    {
        let events = events.borrow();
        assert_eq!(events.len(), 3);
        match &events[0] {
            StackEvent::Registered { screen, id } => {
                assert_eq!(screen.title(), "a");
                assert_eq!(*id, a);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(events[1].is_registered());
        match &events[2] {
            StackEvent::Removed { ids } => assert_eq!(ids, &vec![b]),
            other => panic!("unexpected {:?}", other),
        }
    }

    assert!(harness.navigator.unsubscribe(subscription));
    harness.push_settled("c");
    assert_eq!(events.borrow().len(), 3);
}

#[test]
fn test_removed_event_lists_top_first() {
    let harness = Harness::new();
    harness.push_settled("a");
    harness.push_settled("b");
    harness.push_settled("c");
    let expected = vec![harness.id_at(3), harness.id_at(2), harness.id_at(1)];

    let removed = Rc::new(RefCell::new(Vec::new()));
    let sink = removed.clone();
    harness.navigator.subscribe(move |event| {
        if let StackEvent::Removed { ids } = event {
            sink.borrow_mut().extend(ids.iter().cloned());
        }
    });

    harness.navigator.pop_to_root(true, |_| {});
    harness.settle();

    assert_eq!(*removed.borrow(), expected);
}

#[test]
fn test_listener_may_read_navigator() {
    let harness = Harness::new();
    let counts = Rc::new(RefCell::new(Vec::new()));
    let sink = counts.clone();
    let reader = harness.navigator.clone();
    harness.navigator.subscribe(move |event| {
        if event.is_registered() {
            sink.borrow_mut().push(reader.num_of_items());
        }
    });

    harness.push_settled("a");
    harness.push_settled("b");

    assert_eq!(*counts.borrow(), vec![2, 3]);
}

#[test]
fn test_drop_all_from_root_after_back_gesture() {
    let harness = Harness::new();
    harness.push_settled("a");
    harness.push_settled("b");
    harness.push_settled("c");
    harness.host.simulate_pop_to(1);

    harness.navigator.push_view(
        || page("d"),
        PushOptions::new().drop_all_from_root(true),
        |_| {},
    );
    harness.settle();

    assert_host(&harness, &["root", "d"]);
    assert_eq!(harness.navigator.num_of_items(), 2);
}
