//! Control service — the cooperative fusion engine.
//!
//! [`ControlService`] owns every piece of loop-private state: the inventory
//! counter, the indicator latch, the fan duty, and the door-motor latch.
//! One [`tick`](ControlService::tick) runs one loop iteration in a fixed,
//! documented order:
//!
//! 1. climate poll (at the configured 1 Hz cadence) → fan duty recompute
//! 2. drain edge flags (transit-in, transit-out, motion — in that order)
//! 3. indicator cooldown check
//! 4. button sampling (level-based, start-check first)
//!
//! The ordering is load-bearing: an iteration must apply inventory updates
//! before the cooldown check reads the motion timestamp that step 2 may
//! have refreshed.  The service is the only writer of inventory, indicator,
//! and actuator state, so none of it needs a lock; the edge flags drained in
//! step 2 are the sole values shared with interrupt context.
//!
//! Time is passed in as a monotonic microsecond timestamp rather than read
//! from a clock, so every timing rule here is testable against a simulated
//! clock.

use log::warn;

use crate::config::SystemConfig;

use super::events::AppEvent;
use super::ports::{ActuatorPort, EventSink, SensorPort};

/// Fan duty commanded when the climate thresholds are exceeded.
const FAN_FULL_DUTY: u8 = 100;

/// The control service orchestrates all domain logic.
pub struct ControlService {
    config: SystemConfig,
    /// Bounded product count.  Saturates at zero on removal.
    inventory: u32,
    indicator_on: bool,
    /// Timestamp of the most recent drained motion event (µs, monotonic).
    last_motion_us: u64,
    /// Last commanded fan duty.  Kept across failed polls.
    fan_duty: u8,
    door_motor_on: bool,
    last_poll_us: u64,
}

impl ControlService {
    pub fn new(config: SystemConfig) -> Self {
        Self {
            config,
            inventory: 0,
            indicator_on: false,
            last_motion_us: 0,
            fan_duty: 0,
            door_motor_on: false,
            last_poll_us: 0,
        }
    }

    /// Arm the poll timer and announce startup.  The first climate poll
    /// happens one full interval after this call; the sensor needs that
    /// long to settle after power-up anyway.
    pub fn start(&mut self, now_us: u64, sink: &mut impl EventSink) {
        self.last_poll_us = now_us;
        sink.emit(&AppEvent::Started);
    }

    /// Run one control iteration at monotonic time `now_us`.
    pub fn tick(
        &mut self,
        now_us: u64,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) {
        self.poll_climate(now_us, hw, sink);
        self.drain_edges(now_us, hw, sink);
        self.check_cooldown(now_us, hw, sink);
        self.sample_buttons(hw, sink);
    }

    // ── Step 1: climate poll → fan duty ───────────────────────

    fn poll_climate(
        &mut self,
        now_us: u64,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) {
        if now_us.wrapping_sub(self.last_poll_us) < self.config.climate_poll_interval_us {
            return;
        }

        match hw.read_climate() {
            Ok(reading) => {
                sink.emit(&AppEvent::ClimateUpdated {
                    temperature_c: reading.temperature_c,
                    humidity_pct: reading.humidity_pct,
                });
                // Strict inequalities: readings exactly at a threshold
                // leave the fan off.
                let duty = if reading.humidity_pct > self.config.fan_humidity_threshold_pct
                    || reading.temperature_c > self.config.fan_temperature_threshold_c
                {
                    FAN_FULL_DUTY
                } else {
                    0
                };
                self.fan_duty = duty;
                hw.set_fan_duty(duty);
            }
            Err(e) => {
                // Recoverable: the fan keeps its last known-good duty and
                // the next poll boundary retries.  The poll cadence itself
                // rate-limits attempts, so no extra backoff is needed.
                warn!("climate poll failed: {e}");
                sink.emit(&AppEvent::SensorReadFailed(e));
            }
        }

        // Reset the timer regardless of outcome.
        self.last_poll_us = now_us;
    }

    // ── Step 2: drain edge flags ──────────────────────────────

    fn drain_edges(
        &mut self,
        now_us: u64,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) {
        // Fixed drain order: transit-in, transit-out, motion.  Each set
        // flag is applied exactly once per drain however many physical
        // pulses raised it.
        if hw.take_transit_in() {
            self.inventory = self.inventory.saturating_add(1);
            sink.emit(&AppEvent::ProductEntered {
                inventory: self.inventory,
            });
        }

        if hw.take_transit_out() {
            self.inventory = self.inventory.saturating_sub(1);
            sink.emit(&AppEvent::ProductRemoved {
                inventory: self.inventory,
            });
        }

        if hw.take_motion() {
            // Refresh the timestamp on every motion event, lit or not —
            // repeated motion keeps pushing the off-time out.
            self.last_motion_us = now_us;
            if !self.indicator_on {
                self.indicator_on = true;
                hw.set_indicator(true);
                sink.emit(&AppEvent::MotionDetected);
            }
        }
    }

    // ── Step 3: indicator cooldown ────────────────────────────

    fn check_cooldown(
        &mut self,
        now_us: u64,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        if self.indicator_on
            && now_us.wrapping_sub(self.last_motion_us) >= self.config.indicator_cooldown_us
        {
            self.indicator_on = false;
            hw.set_indicator(false);
            sink.emit(&AppEvent::IndicatorOff);
        }
    }

    // ── Step 4: door-motor buttons ────────────────────────────

    fn sample_buttons(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) {
        // Level-based sampling with the start check first: a simultaneous
        // press of both buttons resolves toward starting when the motor is
        // off.  Known gap: the buttons are not debounced, so mechanical
        // bounce near an edge can produce extra on/off cycles.
        if hw.start_button_pressed() && !self.door_motor_on {
            self.door_motor_on = true;
            hw.set_door_motor(self.config.door_motor_duty_percent);
            sink.emit(&AppEvent::DoorMotorStarted);
        } else if hw.stop_button_pressed() && self.door_motor_on {
            self.door_motor_on = false;
            hw.stop_door_motor();
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current product count.
    pub fn inventory(&self) -> u32 {
        self.inventory
    }

    /// Whether the motion indicator is lit.
    pub fn indicator_on(&self) -> bool {
        self.indicator_on
    }

    /// Last commanded fan duty (0–100).
    pub fn fan_duty(&self) -> u8 {
        self.fan_duty
    }

    /// Whether the door motor is latched on.
    pub fn door_motor_on(&self) -> bool {
        self.door_motor_on
    }
}
