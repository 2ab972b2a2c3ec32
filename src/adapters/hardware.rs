//! Hardware adapter — bridges real peripherals to the domain port traits.
//!
//! Owns the DHT11 decoder and the actuator drivers, exposing them through
//! [`SensorPort`] and [`ActuatorPort`].  This is the only module that
//! touches actual hardware.  Generic over the DHT line pin and delay
//! provider so the type compiles on both the device and the host.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::hw_init;
use crate::drivers::indicator::IndicatorLed;
use crate::drivers::motor::MotorDriver;
use crate::error::SensorError;
use crate::events;
use crate::pins;
use crate::sensors::dht11::{ClimateReading, Dht11, Dht11Error};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    dht: Dht11<P, D>,
    fan: MotorDriver,
    door: MotorDriver,
    indicator: IndicatorLed,
}

impl<P, D> HardwareAdapter<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    pub fn new(
        dht: Dht11<P, D>,
        fan: MotorDriver,
        door: MotorDriver,
        indicator: IndicatorLed,
    ) -> Self {
        Self {
            dht,
            fan,
            door,
            indicator,
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<P, D> SensorPort for HardwareAdapter<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn read_climate(&mut self) -> Result<ClimateReading, SensorError> {
        self.dht.read().map_err(|e| match e {
            // A failed pin access is indistinguishable from a sensor that
            // never answered — the loop treats both the same way.
            Dht11Error::Pin(_) | Dht11Error::NoResponse => SensorError::NoResponse,
            Dht11Error::Timeout => SensorError::Timeout,
            Dht11Error::ChecksumMismatch => SensorError::ChecksumMismatch,
        })
    }

    fn take_transit_in(&mut self) -> bool {
        events::take_transit_in()
    }

    fn take_transit_out(&mut self) -> bool {
        events::take_transit_out()
    }

    fn take_motion(&mut self) -> bool {
        events::take_motion()
    }

    fn start_button_pressed(&mut self) -> bool {
        hw_init::gpio_read(pins::BTN_START_GPIO)
    }

    fn stop_button_pressed(&mut self) -> bool {
        hw_init::gpio_read(pins::BTN_STOP_GPIO)
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<P, D> ActuatorPort for HardwareAdapter<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn set_fan_duty(&mut self, percent: u8) {
        self.fan.set_duty(percent);
    }

    fn set_door_motor(&mut self, percent: u8) {
        self.door.set_duty(percent);
    }

    fn stop_door_motor(&mut self) {
        self.door.stop();
    }

    fn set_indicator(&mut self, on: bool) {
        self.indicator.set(on);
    }

    fn all_off(&mut self) {
        self.fan.stop();
        self.door.stop();
        self.indicator.set(false);
    }
}
