use std::thread;

use beacon_core::{Channel, Control, Flashlight, Key, Millis, Pattern, PoliceLight, Tick};

use crate::clock::{ManualClock, SystemClock};
use crate::config::RuntimeConfig;
use crate::error::{ExitStatus, QueueError, RuntimeError};
use crate::runner::Runner;

use super::{fast_config, sim_outputs, Recorder};

#[test]
fn back_exits_within_one_iteration() {
    let (outputs, _, _) = sim_outputs();
    let recorder = Recorder::default();
    let mut runner = Runner::start(
        fast_config(),
        Flashlight::new(),
        outputs,
        ManualClock::default(),
        recorder.screen(),
    )
    .unwrap();

    runner.input().tap(Key::Back).unwrap();
    assert_eq!(runner.step(), Control::Exit);
    assert_eq!(runner.iterations(), 1);
    assert_eq!(recorder.count(), 1);
}

#[test]
fn idle_iteration_still_redraws() {
    let (outputs, _, _) = sim_outputs();
    let recorder = Recorder::default();
    let mut runner = Runner::start(
        fast_config(),
        Flashlight::new(),
        outputs,
        ManualClock::default(),
        recorder.screen(),
    )
    .unwrap();

    assert_eq!(runner.step(), Control::Continue);
    assert_eq!(runner.step(), Control::Continue);
    assert_eq!(recorder.count(), 2);
    assert_eq!(
        recorder.last().as_deref(),
        Some("Flashlight | > B2: OFF |   C3: OFF")
    );
}

#[test]
fn lock_exhaustion_aborts_startup() {
    let (outputs, a, b) = sim_outputs();
    let config = RuntimeConfig::builder().lock_slots(0).build();

    let err = Runner::start(
        config,
        PoliceLight::new(Tick::ZERO),
        outputs,
        ManualClock::default(),
        |_: &beacon_core::Frame| {},
    )
    .err()
    .unwrap();

    assert_eq!(err, RuntimeError::LockUnavailable { capacity: 0 });
    assert_eq!(ExitStatus::from(&err).code(), 255);
    assert_eq!(a.configure_count(), 0);
    assert_eq!(b.configure_count(), 0);
}

#[test]
fn lock_slot_is_released_with_the_runner() {
    let config = fast_config();
    let pool = config.lock_pool.clone();

    let (outputs, _, _) = sim_outputs();
    let runner = Runner::start(
        config.clone(),
        Flashlight::new(),
        outputs,
        ManualClock::default(),
        |_: &beacon_core::Frame| {},
    )
    .unwrap();
    assert_eq!(pool.available(), 0);

    drop(runner);
    assert_eq!(pool.available(), 1);
}

#[test]
fn consumes_at_most_one_event_per_iteration() {
    let (outputs, _, _) = sim_outputs();
    let mut runner = Runner::start(
        fast_config(),
        Flashlight::new(),
        outputs,
        ManualClock::default(),
        |_: &beacon_core::Frame| {},
    )
    .unwrap();

    let input = runner.input();
    input.tap(Key::Right).unwrap();
    input.tap(Key::Right).unwrap();

    runner.step();
    assert_eq!(runner.with_state(|app| app.selected()), Channel::B);
    runner.step();
    assert_eq!(runner.with_state(|app| app.selected()), Channel::B);
    runner.step();
    assert_eq!(runner.with_state(|app| app.selected()), Channel::A);
}

#[test]
fn police_runs_pattern_and_forces_off_on_exit() {
    let (outputs, a, b) = sim_outputs();
    let clock = ManualClock::default();
    let mut runner = Runner::start(
        fast_config(),
        PoliceLight::with_pattern(Pattern::RedBlue, Tick::ZERO),
        outputs,
        clock.clone(),
        |_: &beacon_core::Frame| {},
    )
    .unwrap();
    assert!(a.is_configured() && b.is_configured());

    let input = runner.input();
    input.tap(Key::Ok).unwrap();
    runner.step();
    assert!(runner.with_state(|app| app.is_active()));
    assert!(!a.is_high() && !b.is_high());

    clock.advance(Millis::new(250));
    runner.step();
    assert!(a.is_high());
    assert!(!b.is_high());

    clock.advance(Millis::new(250));
    runner.step();
    assert!(!a.is_high());
    assert!(b.is_high());

    input.tap(Key::Back).unwrap();
    assert_eq!(runner.run(), ExitStatus::Success);
    assert!(!a.is_high() && !b.is_high());
    assert!(input.is_closed());
    assert_eq!(input.tap(Key::Ok), Err(QueueError::Closed));
}

#[test]
fn flashlight_keeps_levels_on_exit() {
    let (outputs, a, b) = sim_outputs();
    let runner = Runner::start(
        fast_config(),
        Flashlight::new(),
        outputs,
        ManualClock::default(),
        |_: &beacon_core::Frame| {},
    )
    .unwrap();

    let input = runner.input();
    input.tap(Key::Ok).unwrap();
    input.tap(Key::Back).unwrap();

    assert_eq!(runner.run(), ExitStatus::Success);
    assert!(a.is_high());
    assert!(!b.is_high());
}

#[test]
fn threaded_producer_drives_the_loop() {
    let (outputs, a, b) = sim_outputs();
    let recorder = Recorder::default();
    let runner = Runner::start(
        fast_config(),
        Flashlight::new(),
        outputs,
        SystemClock::new(),
        recorder.screen(),
    )
    .unwrap();

    let input = runner.input();
    let handle = thread::spawn(move || runner.run());

    input.tap(Key::Right).unwrap();
    input.tap(Key::Ok).unwrap();
    input.tap(Key::Back).unwrap();

    assert_eq!(handle.join().unwrap(), ExitStatus::Success);
    assert!(!a.is_high());
    assert!(b.is_high());
    assert_eq!(
        recorder.last().as_deref(),
        Some("Flashlight |   B2: OFF | > C3: ON")
    );
}
