//! Outbound application events.
//!
//! The [`ControlService`](super::service::ControlService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  The adapter on
//! the other side decides how to render them — here, one console line per
//! event.

use crate::error::SensorError;

/// Structured events emitted by the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The control service has started.
    Started,

    /// A climate poll succeeded.
    ClimateUpdated { temperature_c: i32, humidity_pct: i32 },

    /// A climate poll failed; the fan keeps its last known-good duty.
    SensorReadFailed(SensorError),

    /// A product crossed the inlet beam.  Carries the updated count.
    ProductEntered { inventory: u32 },

    /// A product crossed the outlet beam.  Carries the updated count.
    ProductRemoved { inventory: u32 },

    /// Motion seen while the indicator was off; it is now on.
    MotionDetected,

    /// The indicator cooled down with no further motion.
    IndicatorOff,

    /// The door motor latched on via the start button.
    /// Stopping is deliberately silent; there is no counterpart event.
    DoorMotorStarted,
}
