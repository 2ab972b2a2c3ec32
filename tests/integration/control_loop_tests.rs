//! Control loop integration tests.
//!
//! Every test drives [`ControlService::tick`] with an explicit simulated
//! clock and asserts on the recorded actuator calls and emitted events.
//! Timestamps are microseconds, matching the on-device monotonic clock.

use foodcare::app::events::AppEvent;
use foodcare::app::service::ControlService;
use foodcare::config::SystemConfig;
use foodcare::error::SensorError;

use crate::mock_hw::{ActuatorCall, MockHardware, RecordingSink};

const SECOND: u64 = 1_000_000;

/// Service started at t=0 with the stock config, `Started` already drained.
fn setup() -> (ControlService, MockHardware, RecordingSink) {
    let mut service = ControlService::new(SystemConfig::default());
    let mut sink = RecordingSink::new();
    service.start(0, &mut sink);
    assert_eq!(sink.events, vec![AppEvent::Started]);
    sink.events.clear();
    (service, MockHardware::new(), RecordingSink::new())
}

// ── Inventory ─────────────────────────────────────────────────

#[test]
fn entries_then_removals_net_out() {
    let (mut service, mut hw, mut sink) = setup();

    // 3 in, 2 out, one flag per iteration — edges are drained singly.
    for i in 0..3u64 {
        hw.transit_in_pending = true;
        service.tick(i * 10_000, &mut hw, &mut sink);
    }
    for i in 3..5u64 {
        hw.transit_out_pending = true;
        service.tick(i * 10_000, &mut hw, &mut sink);
    }

    assert_eq!(service.inventory(), 1);
    assert_eq!(
        sink.events,
        vec![
            AppEvent::ProductEntered { inventory: 1 },
            AppEvent::ProductEntered { inventory: 2 },
            AppEvent::ProductEntered { inventory: 3 },
            AppEvent::ProductRemoved { inventory: 2 },
            AppEvent::ProductRemoved { inventory: 1 },
        ]
    );
}

#[test]
fn removal_on_empty_saturates_at_zero() {
    let (mut service, mut hw, mut sink) = setup();

    hw.transit_out_pending = true;
    service.tick(10_000, &mut hw, &mut sink);

    // The count stays at zero but the removal is still reported.
    assert_eq!(service.inventory(), 0);
    assert_eq!(sink.events, vec![AppEvent::ProductRemoved { inventory: 0 }]);
}

#[test]
fn in_and_out_in_the_same_iteration_apply_in_then_out() {
    let (mut service, mut hw, mut sink) = setup();

    hw.transit_in_pending = true;
    hw.transit_out_pending = true;
    service.tick(10_000, &mut hw, &mut sink);

    assert_eq!(service.inventory(), 0);
    assert_eq!(
        sink.events,
        vec![
            AppEvent::ProductEntered { inventory: 1 },
            AppEvent::ProductRemoved { inventory: 0 },
        ]
    );
}

// ── Motion indicator ──────────────────────────────────────────

#[test]
fn motion_lights_indicator_once_until_cooldown() {
    let (mut service, mut hw, mut sink) = setup();

    hw.motion_pending = true;
    service.tick(10_000, &mut hw, &mut sink);
    assert!(service.indicator_on());
    assert_eq!(sink.events, vec![AppEvent::MotionDetected]);

    // Motion while already lit refreshes the timer silently.
    hw.motion_pending = true;
    service.tick(20_000, &mut hw, &mut sink);
    assert_eq!(sink.events, vec![AppEvent::MotionDetected]);
    assert_eq!(
        hw.calls,
        vec![ActuatorCall::SetIndicator { on: true }],
        "the indicator must not be re-commanded while lit"
    );
}

#[test]
fn indicator_turns_off_at_the_cooldown_boundary() {
    let (mut service, mut hw, mut sink) = setup();
    let t0 = 10_000;

    hw.motion_pending = true;
    service.tick(t0, &mut hw, &mut sink);

    // One microsecond shy of the cooldown: still lit.
    service.tick(t0 + 5 * SECOND - 1, &mut hw, &mut sink);
    assert!(service.indicator_on());

    // Exactly at the cooldown: off.
    service.tick(t0 + 5 * SECOND, &mut hw, &mut sink);
    assert!(!service.indicator_on());
    assert!(sink.events.contains(&AppEvent::IndicatorOff));
    assert_eq!(hw.calls.last(), Some(&ActuatorCall::SetIndicator { on: false }));
}

#[test]
fn repeated_motion_pushes_the_off_time_out() {
    let (mut service, mut hw, mut sink) = setup();
    let t0 = 10_000;
    let t1 = t0 + 3 * SECOND;

    hw.motion_pending = true;
    service.tick(t0, &mut hw, &mut sink);
    hw.motion_pending = true;
    service.tick(t1, &mut hw, &mut sink);

    // t0's cooldown has elapsed, but t1 refreshed the timestamp.
    service.tick(t0 + 5 * SECOND, &mut hw, &mut sink);
    assert!(service.indicator_on());

    service.tick(t1 + 5 * SECOND, &mut hw, &mut sink);
    assert!(!service.indicator_on());
}

// ── Fan / climate ─────────────────────────────────────────────

#[test]
fn no_climate_poll_before_the_interval_elapses() {
    let (mut service, mut hw, mut sink) = setup();
    hw.script_reading(99, 99);

    service.tick(SECOND - 1, &mut hw, &mut sink);

    assert_eq!(hw.climate_script.len(), 1, "the script must not be consumed");
    assert!(sink.events.is_empty());
}

#[test]
fn fan_threshold_truth_table() {
    // (temperature, humidity, expected duty) — strict thresholds, so
    // readings exactly at 30 °C / 60 % leave the fan off.
    let cases = [
        (31, 40, 100), // hot
        (20, 70, 100), // humid
        (31, 70, 100), // both
        (20, 40, 0),   // nominal
        (30, 60, 0),   // exactly at both thresholds
    ];

    for (temp, hum, expected) in cases {
        let (mut service, mut hw, mut sink) = setup();
        hw.script_reading(temp, hum);

        service.tick(SECOND, &mut hw, &mut sink);

        assert_eq!(
            service.fan_duty(),
            expected,
            "temp={temp} hum={hum} should command duty {expected}"
        );
        assert_eq!(hw.last_fan_duty(), Some(expected));
        assert_eq!(
            sink.events,
            vec![AppEvent::ClimateUpdated {
                temperature_c: temp,
                humidity_pct: hum,
            }]
        );
    }
}

#[test]
fn failed_poll_keeps_the_last_fan_duty() {
    let (mut service, mut hw, mut sink) = setup();
    hw.script_reading(32, 55); // over temperature → full duty
    hw.script_failure(SensorError::Timeout);

    service.tick(SECOND, &mut hw, &mut sink);
    assert_eq!(service.fan_duty(), 100);

    let calls_before = hw.calls.len();
    service.tick(2 * SECOND, &mut hw, &mut sink);

    // The failure is reported but no new fan command is issued.
    assert_eq!(service.fan_duty(), 100);
    assert_eq!(hw.calls.len(), calls_before);
    assert_eq!(
        sink.events.last(),
        Some(&AppEvent::SensorReadFailed(SensorError::Timeout))
    );
}

#[test]
fn failed_poll_still_rearms_the_poll_timer() {
    let (mut service, mut hw, mut sink) = setup();
    hw.script_failure(SensorError::NoResponse);
    hw.script_reading(25, 50);

    service.tick(SECOND, &mut hw, &mut sink);

    // Shortly after the failed poll the timer must be armed again, so no
    // immediate retry happens.
    service.tick(SECOND + 10_000, &mut hw, &mut sink);
    assert_eq!(hw.climate_script.len(), 1);

    service.tick(2 * SECOND, &mut hw, &mut sink);
    assert!(hw.climate_script.is_empty());
}

// ── Door motor ────────────────────────────────────────────────

#[test]
fn start_button_latches_the_door_motor() {
    let (mut service, mut hw, mut sink) = setup();

    hw.start_pressed = true;
    service.tick(10_000, &mut hw, &mut sink);

    assert!(service.door_motor_on());
    assert_eq!(hw.last_door_duty(), Some(7));
    assert_eq!(sink.events, vec![AppEvent::DoorMotorStarted]);

    // Holding the button does not re-command or re-announce.
    service.tick(20_000, &mut hw, &mut sink);
    assert_eq!(sink.events, vec![AppEvent::DoorMotorStarted]);
    assert_eq!(hw.calls, vec![ActuatorCall::SetDoor { duty: 7 }]);
}

#[test]
fn stop_button_unlatches_without_an_event() {
    let (mut service, mut hw, mut sink) = setup();

    hw.start_pressed = true;
    service.tick(10_000, &mut hw, &mut sink);
    hw.start_pressed = false;
    hw.stop_pressed = true;
    service.tick(20_000, &mut hw, &mut sink);

    assert!(!service.door_motor_on());
    assert_eq!(hw.calls.last(), Some(&ActuatorCall::StopDoor));
    // Stopping is silent.
    assert_eq!(sink.events, vec![AppEvent::DoorMotorStarted]);
}

#[test]
fn stop_while_already_stopped_is_a_no_op() {
    let (mut service, mut hw, mut sink) = setup();

    hw.stop_pressed = true;
    service.tick(10_000, &mut hw, &mut sink);

    assert!(!service.door_motor_on());
    assert!(hw.calls.is_empty());
    assert!(sink.events.is_empty());
}

#[test]
fn simultaneous_press_resolves_by_motor_state() {
    // Motor off → the start check wins.
    let (mut service, mut hw, mut sink) = setup();
    hw.start_pressed = true;
    hw.stop_pressed = true;
    service.tick(10_000, &mut hw, &mut sink);
    assert!(service.door_motor_on());

    // Motor on → the start check is skipped and the stop check fires.
    service.tick(20_000, &mut hw, &mut sink);
    assert!(!service.door_motor_on());
}

// ── End-to-end scenario ───────────────────────────────────────

#[test]
fn poll_fault_recovery_sequence() {
    let (mut service, mut hw, mut sink) = setup();
    hw.script_reading(25, 50);
    hw.script_failure(SensorError::ChecksumMismatch);
    hw.script_reading(32, 55);

    for t in 1..=3u64 {
        service.tick(t * SECOND, &mut hw, &mut sink);
    }

    assert_eq!(
        sink.events,
        vec![
            AppEvent::ClimateUpdated {
                temperature_c: 25,
                humidity_pct: 50,
            },
            AppEvent::SensorReadFailed(SensorError::ChecksumMismatch),
            AppEvent::ClimateUpdated {
                temperature_c: 32,
                humidity_pct: 55,
            },
        ]
    );
    // Poll 1 commands 0, poll 2 leaves the duty untouched, poll 3 goes full.
    assert_eq!(
        hw.calls,
        vec![
            ActuatorCall::SetFan { duty: 0 },
            ActuatorCall::SetFan { duty: 100 },
        ]
    );
    assert_eq!(service.fan_duty(), 100);
}
