//! Integration tests for commands issued while a transition is settling

mod common;

use common::*;
use stack_navigator::*;
use std::time::Duration;

#[test]
fn test_queued_commands_validate_against_state_at_run_time() {
    let harness = Harness::new();
    harness.push("a");
    harness.push("b");
    // Index 1 is out of range now but valid once both pushes have run.
    harness.navigator.pop_to_index(1, true, harness.recorder());
    assert_eq!(harness.navigator.pending_commands(), 2);

    harness.settle();

    assert_eq!(*harness.results.borrow(), vec![Ok(()), Ok(()), Ok(())]);
    assert_host(&harness, &["root", "a"]);
}

#[test]
fn test_queue_drains_past_failures() {
    let harness = Harness::new();
    harness.push("a");
    harness.navigator.pop_to_id("", true, harness.recorder());
    harness.push("b");

    harness.settle();

    let results = harness.results.borrow();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0], Ok(()));
    assert_eq!(results[1], Err(NavigatorError::EmptyId));
    assert_eq!(results[2], Ok(()));
    assert_host(&harness, &["root", "a", "b"]);
}

#[test]
fn test_reject_policy() {
    let harness = Harness::with_config(NavigatorConfig::new().overlap(OverlapPolicy::Reject));
    harness.push("a");
    harness.push("b");
    harness.settle();

    let results = harness.results.borrow();
    assert!(results.contains(&Err(NavigatorError::Busy)));
    assert!(results.contains(&Ok(())));
    assert_host(&harness, &["root", "a"]);
}

#[test]
fn test_reject_policy_accepts_after_settle() {
    let harness = Harness::with_config(NavigatorConfig::new().overlap(OverlapPolicy::Reject));
    harness.push_settled("a");
    harness.push_settled("b");
    assert_eq!(*harness.results.borrow(), vec![Ok(()), Ok(())]);
}

#[test]
fn test_allow_policy_mutates_immediately() {
    let harness = Harness::with_config(NavigatorConfig::new().overlap(OverlapPolicy::Allow));
    harness.push("a");
    harness.push("b");
    harness.navigator.pop_to_root(true, harness.recorder());

    assert_host(&harness, &["root"]);
    assert_eq!(harness.navigator.num_of_items(), 1);
    assert!(harness.navigator.is_settling());

    harness.scheduler.advance(Duration::from_millis(250));
    assert_eq!(harness.result_count(), 3);
    assert!(!harness.navigator.is_settling());
}

#[test]
fn test_dropping_navigator_cancels_queued_commands() {
    let harness = Harness::new();
    harness.push("a");
    harness.push("b");
    harness.navigator.pop_to_root(true, harness.recorder());
    assert_eq!(harness.navigator.pending_commands(), 2);

    let Harness {
        navigator,
        host,
        scheduler,
        results,
    } = harness;
    drop(navigator);
    scheduler.run_until_idle();

    let results = results.borrow();
    assert_eq!(results.len(), 3);
    assert_eq!(
        results
            .iter()
            .filter(|result| **result == Err(NavigatorError::Cancelled))
            .count(),
        2
    );
    assert!(results.contains(&Ok(())));
    assert_eq!(host.titles(), ["root", "a"]);
}

#[test]
fn test_cancelled_completions_are_deferred() {
    let harness = Harness::new();
    harness.push("a");
    harness.push("b");

    let Harness {
        navigator,
        scheduler,
        results,
        ..
    } = harness;
    drop(navigator);
    assert!(results.borrow().is_empty());

    scheduler.advance(Duration::ZERO);
    assert_eq!(*results.borrow(), vec![Err(NavigatorError::Cancelled)]);
}
