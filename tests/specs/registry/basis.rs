//! Seconds and ticks timers measure against unrelated clocks.

use crate::prelude::*;

#[test]
fn seconds_and_ticks_expire_independently() {
    let h = Harness::new();
    h.armed("secs", 0.0, 5.0, TimeBasis::Seconds);
    h.armed("frames", 0.0, 5.0, TimeBasis::Ticks);
    let secs = h.counter("secs");
    let frames = h.counter("frames");

    h.registry.evaluate_all();

    // Fast frames, slow seconds
    h.clock.set_seconds(0.1);
    h.at_ticks(5);
    assert_eq!((secs.get(), frames.get()), (0, 1));

    h.clock.set_ticks(6);
    h.at_seconds(5.0);
    assert_eq!((secs.get(), frames.get()), (1, 1));
}

#[test]
fn rearm_may_switch_basis() {
    let h = Harness::new();
    h.armed("t", 0.0, 10.0, TimeBasis::Seconds);
    h.clock.set_ticks(20);

    h.registry.arm_timer_now("t", 10.0, TimeBasis::Ticks).unwrap();
    h.clock.set_seconds(100.0);
    h.clock.set_ticks(25);

    assert_eq!(h.registry.elapsed("t").unwrap(), 5.0);
    assert!(h.registry.is_running("t").unwrap());
}
