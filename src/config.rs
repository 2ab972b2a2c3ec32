//! System configuration parameters
//!
//! All tunable parameters for the FoodCare controller.  There is no
//! persistent config store; this struct is the single source of tunables
//! and is serialisable for diagnostics read-back over the console.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Climate polling ---
    /// DHT11 poll interval (microseconds).
    pub climate_poll_interval_us: u64,
    /// Humidity above which the fan runs at full speed (strict inequality).
    pub fan_humidity_threshold_pct: i32,
    /// Temperature above which the fan runs at full speed (strict inequality).
    pub fan_temperature_threshold_c: i32,

    // --- Indicator ---
    /// How long the indicator stays lit after the last motion event
    /// (microseconds).
    pub indicator_cooldown_us: u64,

    // --- Door motor ---
    /// Door motor duty cycle when running (0-100%).
    pub door_motor_duty_percent: u8,

    // --- Timing ---
    /// Fixed idle delay closing each control-loop iteration (milliseconds).
    pub loop_idle_delay_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Climate
            climate_poll_interval_us: 1_000_000, // 1 Hz
            fan_humidity_threshold_pct: 60,
            fan_temperature_threshold_c: 30,

            // Indicator
            indicator_cooldown_us: 5_000_000, // 5 s

            // Door motor
            door_motor_duty_percent: 7,

            // Timing
            loop_idle_delay_ms: 10,
        }
    }
}
