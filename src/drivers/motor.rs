//! DC motor driver (L298-style H-bridge).
//!
//! Speed control via a LEDC PWM enable line plus a pair of digital
//! direction pins.  Both motors in this system run forward only, so the
//! direction pins are driven once at construction and held.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real PWM and GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

pub struct MotorDriver {
    ledc_channel: u32,
    duty: u8,
}

impl MotorDriver {
    /// Create a driver on `ledc_channel`, holding the H-bridge direction
    /// pins `in1`/`in2` in the forward configuration (IN1 high, IN2 low).
    /// The channel starts at zero duty.
    pub fn new(ledc_channel: u32, in1: i32, in2: i32) -> Self {
        hw_init::gpio_write(in1, true);
        hw_init::gpio_write(in2, false);
        hw_init::ledc_set_percent(ledc_channel, 0);
        Self {
            ledc_channel,
            duty: 0,
        }
    }

    /// Set the duty cycle (0–100).  Zero stops the motor.
    pub fn set_duty(&mut self, percent: u8) {
        let percent = percent.min(100);
        hw_init::ledc_set_percent(self.ledc_channel, percent);
        self.duty = percent;
    }

    /// Stop the motor (zero duty).
    pub fn stop(&mut self) {
        self.set_duty(0);
    }

    pub fn current_duty(&self) -> u8 {
        self.duty
    }

    pub fn is_running(&self) -> bool {
        self.duty > 0
    }
}
