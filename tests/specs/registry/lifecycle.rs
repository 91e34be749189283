//! Timer lifecycle: add, arm, reset, and the guards around them.

use crate::prelude::*;

#[test]
fn adding_a_name_twice_keeps_a_single_entry() {
    let h = Harness::new();
    h.registry.add_timer("t").unwrap();

    let err = h.registry.add_timer("t").unwrap_err();

    assert!(matches!(err, TimerError::Duplicate(ref name) if name == "t"));
    assert_eq!(h.registry.len(), 1);
}

#[test]
fn unarmed_timer_is_not_queryable() {
    let h = Harness::new();
    h.registry.add_timer("t").unwrap();

    assert!(h.registry.contains_timer("t"));
    assert!(!h.registry.is_armed("t"));
    assert!(h.registry.is_running("t").is_err());
    assert_eq!(
        h.registry.elapsed("t").unwrap_or(ELAPSED_SENTINEL),
        -1.0
    );
}

#[test]
fn unknown_and_unarmed_share_one_message() {
    let h = Harness::new();
    h.registry.add_timer("t").unwrap();

    let unarmed = h.registry.reset_timer("t").unwrap_err();
    let unknown = h.registry.reset_timer("u").unwrap_err();

    similar_asserts::assert_eq!(
        unarmed.to_string(),
        "Cannot complete operation. \"t\" is not an existing timer or has not been set."
    );
    similar_asserts::assert_eq!(
        unknown.to_string(),
        "Cannot complete operation. \"u\" is not an existing timer or has not been set."
    );
    assert!(!unarmed.is_unknown());
    assert!(unknown.is_unknown());
}

#[test]
fn arming_requires_only_existence() {
    let h = Harness::new();
    let err = h
        .registry
        .arm_timer("t", 0.0, 5.0, TimeBasis::Seconds)
        .unwrap_err();
    similar_asserts::assert_eq!(
        err.to_string(),
        "Cannot complete operation. \"t\" is not an existing timer."
    );

    h.registry.add_timer("t").unwrap();
    h.registry.arm_timer("t", 0.0, 5.0, TimeBasis::Seconds).unwrap();
    assert!(h.registry.is_armed("t"));
}

#[test]
fn arm_and_elapsed() {
    let h = Harness::new();
    h.armed("t", 0.0, 5.0, TimeBasis::Seconds);

    h.clock.set_seconds(3.0);
    assert_eq!(h.registry.elapsed("t").unwrap(), 3.0);
    assert!(h.registry.is_running("t").unwrap());

    h.clock.set_seconds(6.0);
    assert_eq!(h.registry.elapsed("t").unwrap(), 6.0);
    assert!(!h.registry.is_running("t").unwrap());
}

#[test]
fn reset_restarts_from_current_tick_and_keeps_duration() {
    let h = Harness::new();
    h.armed("t", 100.0, 10.0, TimeBasis::Ticks);

    h.clock.set_ticks(150);
    h.registry.reset_timer("t").unwrap();

    h.clock.set_ticks(155);
    assert_eq!(h.registry.elapsed("t").unwrap(), 5.0);
    h.clock.set_ticks(160);
    assert!(!h.registry.is_running("t").unwrap());

    let status = h.registry.status("t").unwrap();
    assert_eq!(status.duration, 10.0);
    assert_eq!(status.basis, TimeBasis::Ticks);
}

#[test]
fn status_serializes_for_diagnostics() {
    let h = Harness::new();
    h.armed("spawn", 0.0, 4.0, TimeBasis::Seconds);
    h.counter("spawn");
    h.clock.set_seconds(1.0);

    let json = serde_json::to_value(h.registry.status("spawn").unwrap()).unwrap();
    similar_asserts::assert_eq!(
        json,
        serde_json::json!({
            "name": "spawn",
            "basis": "seconds",
            "duration": 4.0,
            "elapsed": 1.0,
            "remaining": 3.0,
            "running": true,
            "has_callback": true,
        })
    );
}
