//! FoodCare Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │  HardwareAdapter        LogEventSink       MonotonicClock    │
//! │  (Sensor+Actuator)      (EventSink)        (time source)     │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ──────────────────      │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │           ControlService (pure logic)              │      │
//! │  │  climate → fan · inventory · indicator · door      │      │
//! │  └────────────────────────────────────────────────────┘      │
//! │                                                              │
//! │  GPIO ISRs ──▶ edge flags ──▶ drained each iteration         │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use esp_idf_hal::delay::{Delay, FreeRtos};
use esp_idf_hal::gpio::{AnyIOPin, PinDriver, Pull};

use foodcare::adapters::hardware::HardwareAdapter;
use foodcare::adapters::log_sink::LogEventSink;
use foodcare::adapters::time::MonotonicClock;
use foodcare::app::service::ControlService;
use foodcare::config::SystemConfig;
use foodcare::drivers::hw_init;
use foodcare::drivers::indicator::IndicatorLed;
use foodcare::drivers::motor::MotorDriver;
use foodcare::pins;
use foodcare::sensors::dht11::Dht11;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("FoodCare v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripheral bring-up ────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    if let Err(e) = hw_init::init_isr_service() {
        error!("ISR service init failed: {} — continuing without edge events", e);
    }

    let config = SystemConfig::default();

    // ── 3. DHT11 line (open-drain, pulled up, idles high) ─────
    // SAFETY: GPIO 15 is not claimed by any other driver; hw_init leaves
    // it untouched.
    let dht_pin = unsafe { AnyIOPin::new(pins::DHT11_GPIO) };
    let mut dht_pin = PinDriver::input_output_od(dht_pin)?;
    dht_pin.set_pull(Pull::Up)?;
    dht_pin.set_high()?;
    let dht = Dht11::new(dht_pin, Delay::new_default());

    // ── 4. Adapters + service ─────────────────────────────────
    let mut hw = HardwareAdapter::new(
        dht,
        MotorDriver::new(hw_init::LEDC_CH_FAN, pins::FAN_IN1_GPIO, pins::FAN_IN2_GPIO),
        MotorDriver::new(
            hw_init::LEDC_CH_DOOR,
            pins::DOOR_IN1_GPIO,
            pins::DOOR_IN2_GPIO,
        ),
        IndicatorLed::new(pins::INDICATOR_GPIO),
    );

    let clock = MonotonicClock::new();
    let mut sink = LogEventSink::new();
    let mut service = ControlService::new(config.clone());
    service.start(clock.now_us(), &mut sink);

    info!("System ready. Entering control loop.");

    // ── 5. Cooperative control loop ───────────────────────────
    // The loop never blocks outside the decoder call inside tick() and
    // this fixed idle delay; the ISRs run between iterations and only
    // touch the edge flags.
    loop {
        service.tick(clock.now_us(), &mut hw, &mut sink);
        FreeRtos::delay_ms(config.loop_idle_delay_ms);
    }
}
