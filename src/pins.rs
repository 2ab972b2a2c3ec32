//! GPIO / peripheral pin assignments for the FoodCare main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// DHT11 temperature/humidity sensor (bidirectional single-wire)
// ---------------------------------------------------------------------------

/// Shared data line for the DHT11.  Driven as an output during the request
/// pulse, then released and read as an input for the sensor's reply.
pub const DHT11_GPIO: i32 = 15;

// ---------------------------------------------------------------------------
// Transit / motion sensors (interrupt-driven)
// ---------------------------------------------------------------------------

/// IR break-beam at the product inlet.  Falling edge = product entered.
pub const TRANSIT_IN_GPIO: i32 = 14;
/// IR break-beam at the product outlet.  Falling edge = product removed.
pub const TRANSIT_OUT_GPIO: i32 = 13;
/// PIR motion sensor.  Rising edge = motion detected.
pub const PIR_GPIO: i32 = 12;

// ---------------------------------------------------------------------------
// Indicator LED
// ---------------------------------------------------------------------------

/// Digital output: motion indicator LED (active HIGH).
pub const INDICATOR_GPIO: i32 = 11;

// ---------------------------------------------------------------------------
// Fan motor — "motor 1" (L298-style H-bridge)
// ---------------------------------------------------------------------------

/// Direction pin IN1 (held HIGH — fan runs forward only).
pub const FAN_IN1_GPIO: i32 = 9;
/// Direction pin IN2 (held LOW).
pub const FAN_IN2_GPIO: i32 = 8;
/// LEDC PWM enable line for fan speed.
pub const FAN_PWM_GPIO: i32 = 10;

// ---------------------------------------------------------------------------
// Door motor — "motor 2" (second H-bridge channel)
// ---------------------------------------------------------------------------

/// Direction pin IN1 (held HIGH — forward only).
pub const DOOR_IN1_GPIO: i32 = 6;
/// Direction pin IN2 (held LOW).
pub const DOOR_IN2_GPIO: i32 = 7;
/// LEDC PWM enable line for the door motor.
pub const DOOR_PWM_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Control buttons (momentary, pull-down, level-sampled)
// ---------------------------------------------------------------------------

/// Start button for the door motor.  HIGH = pressed.
pub const BTN_START_GPIO: i32 = 18;
/// Stop button for the door motor.  HIGH = pressed.
pub const BTN_STOP_GPIO: i32 = 19;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for both motor channels (150 Hz, well inside what
/// the L298 H-bridge switches cleanly).
pub const MOTOR_PWM_FREQ_HZ: u32 = 150;
