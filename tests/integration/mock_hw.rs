//! Mock hardware adapter for integration tests.
//!
//! Records every actuator call so tests can assert on the full command
//! history without touching real GPIO/PWM registers.  Sensor results and
//! edge flags are scripted per test, which keeps the tests parallel-safe
//! (no process-wide statics involved).

use std::collections::VecDeque;

use foodcare::app::events::AppEvent;
use foodcare::app::ports::{ActuatorPort, EventSink, SensorPort};
use foodcare::error::SensorError;
use foodcare::sensors::dht11::ClimateReading;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    SetFan { duty: u8 },
    SetDoor { duty: u8 },
    StopDoor,
    SetIndicator { on: bool },
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
    /// Scripted climate poll results, consumed front-to-back.  When the
    /// script runs dry a benign in-range reading is returned.
    pub climate_script: VecDeque<Result<ClimateReading, SensorError>>,
    pub transit_in_pending: bool,
    pub transit_out_pending: bool,
    pub motion_pending: bool,
    pub start_pressed: bool,
    pub stop_pressed: bool,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            climate_script: VecDeque::new(),
            transit_in_pending: false,
            transit_out_pending: false,
            motion_pending: false,
            start_pressed: false,
            stop_pressed: false,
        }
    }

    pub fn script_reading(&mut self, temperature_c: i32, humidity_pct: i32) {
        self.climate_script.push_back(Ok(ClimateReading {
            temperature_c,
            humidity_pct,
        }));
    }

    pub fn script_failure(&mut self, err: SensorError) {
        self.climate_script.push_back(Err(err));
    }

    /// Most recent fan duty command, if any.
    pub fn last_fan_duty(&self) -> Option<u8> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetFan { duty } => Some(*duty),
            ActuatorCall::AllOff => Some(0),
            _ => None,
        })
    }

    /// Most recent door motor duty command, if any (stop counts as 0).
    pub fn last_door_duty(&self) -> Option<u8> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetDoor { duty } => Some(*duty),
            ActuatorCall::StopDoor | ActuatorCall::AllOff => Some(0),
            _ => None,
        })
    }

    /// Indicator level as last commanded (off if never commanded).
    pub fn indicator_lit(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::SetIndicator { on } => Some(*on),
                ActuatorCall::AllOff => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_climate(&mut self) -> Result<ClimateReading, SensorError> {
        self.climate_script.pop_front().unwrap_or(Ok(ClimateReading {
            temperature_c: 25,
            humidity_pct: 50,
        }))
    }

    fn take_transit_in(&mut self) -> bool {
        std::mem::take(&mut self.transit_in_pending)
    }

    fn take_transit_out(&mut self) -> bool {
        std::mem::take(&mut self.transit_out_pending)
    }

    fn take_motion(&mut self) -> bool {
        std::mem::take(&mut self.motion_pending)
    }

    fn start_button_pressed(&mut self) -> bool {
        self.start_pressed
    }

    fn stop_button_pressed(&mut self) -> bool {
        self.stop_pressed
    }
}

impl ActuatorPort for MockHardware {
    fn set_fan_duty(&mut self, percent: u8) {
        self.calls.push(ActuatorCall::SetFan { duty: percent });
    }

    fn set_door_motor(&mut self, percent: u8) {
        self.calls.push(ActuatorCall::SetDoor { duty: percent });
    }

    fn stop_door_motor(&mut self) {
        self.calls.push(ActuatorCall::StopDoor);
    }

    fn set_indicator(&mut self, on: bool) {
        self.calls.push(ActuatorCall::SetIndicator { on });
    }

    fn all_off(&mut self) {
        self.calls.push(ActuatorCall::AllOff);
    }
}

// ── Recording event sink ──────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
