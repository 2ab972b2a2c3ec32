//! Port traits — the hexagonal boundary between domain logic and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlService (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, event sinks) implement these traits.
//! The [`ControlService`](super::service::ControlService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::error::SensorError;
use crate::sensors::dht11::ClimateReading;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to observe the outside world.
pub trait SensorPort {
    /// Run one single-wire frame exchange with the climate sensor.
    /// Blocks for the duration of the protocol (~23 ms worst case).
    fn read_climate(&mut self) -> Result<ClimateReading, SensorError>;

    /// Drain the one-shot transit-in edge flag (read-and-clear).
    fn take_transit_in(&mut self) -> bool;

    /// Drain the one-shot transit-out edge flag (read-and-clear).
    fn take_transit_out(&mut self) -> bool;

    /// Drain the one-shot motion edge flag (read-and-clear).
    fn take_motion(&mut self) -> bool;

    /// Current level of the start button (true = pressed).  Level-sampled,
    /// not edge-triggered, and not debounced.
    fn start_button_pressed(&mut self) -> bool;

    /// Current level of the stop button (true = pressed).
    fn stop_button_pressed(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
pub trait ActuatorPort {
    /// Set the ventilation fan duty (0–100).  Zero stops the fan.
    fn set_fan_duty(&mut self, percent: u8);

    /// Run the door motor at the given duty (0–100).
    fn set_door_motor(&mut self, percent: u8);

    /// Stop the door motor (zero duty, channel disabled).
    fn stop_door_motor(&mut self);

    /// Switch the motion indicator LED.
    fn set_indicator(&mut self, on: bool);

    /// Kill every actuator — safe shutdown.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go; in this system that
/// is the serial console.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
