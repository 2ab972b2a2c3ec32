//! Motion indicator LED driver (plain GPIO, active HIGH).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes the GPIO via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

pub struct IndicatorLed {
    gpio: i32,
    on: bool,
}

impl IndicatorLed {
    pub fn new(gpio: i32) -> Self {
        hw_init::gpio_write(gpio, false);
        Self { gpio, on: false }
    }

    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(self.gpio, on);
        self.on = on;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
