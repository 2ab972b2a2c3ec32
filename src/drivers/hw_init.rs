//! One-shot hardware peripheral initialization.
//!
//! Configures GPIO directions/pulls, LEDC timer/channels, and the GPIO ISR
//! service using raw ESP-IDF sys calls.  Called once from `main()` before
//! the control loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    LedcInitFailed,
    IsrInstallFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::LedcInitFailed => write!(f, "LEDC timer/channel config failed"),
            Self::IsrInstallFailed(rc) => write!(f, "GPIO ISR service install failed (rc={})", rc),
        }
    }
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the control loop; single-threaded.
    unsafe {
        init_gpio_inputs()?;
        init_gpio_outputs()?;
        init_ledc()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── GPIO Inputs ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_inputs() -> Result<(), HwInitError> {
    // IR break-beams idle high through a pull-up; a broken beam pulls low.
    let pulled_up = [pins::TRANSIT_IN_GPIO, pins::TRANSIT_OUT_GPIO];
    for &pin in &pulled_up {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed(ret));
        }
    }

    // PIR and both buttons idle low through a pull-down and assert high.
    let pulled_down = [pins::PIR_GPIO, pins::BTN_START_GPIO, pins::BTN_STOP_GPIO];
    for &pin in &pulled_down {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_ENABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed(ret));
        }
    }

    info!("hw_init: GPIO inputs configured");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin; safe to call from main context.
    (unsafe { gpio_get_level(pin) }) != 0
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(_pin: i32) -> bool {
    false
}

// ── GPIO Outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs() -> Result<(), HwInitError> {
    let output_pins = [
        pins::INDICATOR_GPIO,
        pins::FAN_IN1_GPIO,
        pins::FAN_IN2_GPIO,
        pins::DOOR_IN1_GPIO,
        pins::DOOR_IN2_GPIO,
    ];

    for &pin in &output_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed(ret));
        }
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: GPIO outputs configured");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_gpio_outputs(). Main-loop only.
    unsafe {
        gpio_set_level(pin, if high { 1 } else { 0 });
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── LEDC PWM ─────────────────────────────────────────────────

pub const LEDC_CH_FAN: u32 = 0;
pub const LEDC_CH_DOOR: u32 = 1;

#[cfg(target_os = "espidf")]
unsafe fn init_ledc() -> Result<(), HwInitError> {
    // One timer at 150 Hz / 8-bit feeds both motor channels.
    // SAFETY: Called from the single main-task context via init_peripherals().
    let timer0 = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_0,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_8_BIT,
        freq_hz: pins::MOTOR_PWM_FREQ_HZ,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    if unsafe { ledc_timer_config(&timer0) } != ESP_OK as i32 {
        return Err(HwInitError::LedcInitFailed);
    }

    let channels = [
        (LEDC_CH_FAN, pins::FAN_PWM_GPIO),
        (LEDC_CH_DOOR, pins::DOOR_PWM_GPIO),
    ];
    for &(channel, gpio) in &channels {
        let cfg = ledc_channel_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            channel,
            timer_sel: ledc_timer_t_LEDC_TIMER_0,
            gpio_num: gpio,
            duty: 0,
            hpoint: 0,
            ..Default::default()
        };
        if unsafe { ledc_channel_config(&cfg) } != ESP_OK as i32 {
            return Err(HwInitError::LedcInitFailed);
        }
    }

    info!("hw_init: LEDC configured (fan=CH0, door=CH1)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn ledc_set_percent(channel: u32, percent: u8) {
    let duty_8bit = u32::from(percent.min(100)) * 255 / 100;
    // SAFETY: LEDC channels were configured in init_ledc(); duty register
    // writes are race-free since only the main loop calls this function.
    unsafe {
        ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, duty_8bit);
        ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set_percent(_channel: u32, _percent: u8) {}

// ── GPIO ISR Service ──────────────────────────────────────────

#[cfg(target_os = "espidf")]
use crate::events::{record_edge, Edge, EdgeLine};

// Each trampoline is registered on exactly one pin for exactly one edge
// direction, so the (line, edge) pair is static.  The handlers do one
// unconditional flag store and return — nothing else runs in ISR context.

#[cfg(target_os = "espidf")]
unsafe extern "C" fn transit_in_gpio_isr(_arg: *mut core::ffi::c_void) {
    record_edge(EdgeLine::TransitIn, Edge::Falling);
}

#[cfg(target_os = "espidf")]
unsafe extern "C" fn transit_out_gpio_isr(_arg: *mut core::ffi::c_void) {
    record_edge(EdgeLine::TransitOut, Edge::Falling);
}

#[cfg(target_os = "espidf")]
unsafe extern "C" fn pir_gpio_isr(_arg: *mut core::ffi::c_void) {
    record_edge(EdgeLine::Motion, Edge::Rising);
}

/// Install the per-pin GPIO ISR service and register the edge handlers.
/// Call after init_peripherals() and before the control loop.
#[cfg(target_os = "espidf")]
pub fn init_isr_service() -> Result<(), HwInitError> {
    // SAFETY: gpio_install_isr_service is idempotent; ESP_ERR_INVALID_STATE
    // means it was already installed (acceptable).  The handlers registered
    // below only store into the lock-free edge flags.
    unsafe {
        let ret = gpio_install_isr_service(0);
        if ret != ESP_OK && ret != ESP_ERR_INVALID_STATE {
            return Err(HwInitError::IsrInstallFailed(ret));
        }

        // Transit beams: falling edge (beam broken).
        gpio_set_intr_type(pins::TRANSIT_IN_GPIO, gpio_int_type_t_GPIO_INTR_NEGEDGE);
        gpio_isr_handler_add(
            pins::TRANSIT_IN_GPIO,
            Some(transit_in_gpio_isr),
            core::ptr::null_mut(),
        );
        gpio_intr_enable(pins::TRANSIT_IN_GPIO);

        gpio_set_intr_type(pins::TRANSIT_OUT_GPIO, gpio_int_type_t_GPIO_INTR_NEGEDGE);
        gpio_isr_handler_add(
            pins::TRANSIT_OUT_GPIO,
            Some(transit_out_gpio_isr),
            core::ptr::null_mut(),
        );
        gpio_intr_enable(pins::TRANSIT_OUT_GPIO);

        // PIR: rising edge (motion asserted).
        gpio_set_intr_type(pins::PIR_GPIO, gpio_int_type_t_GPIO_INTR_POSEDGE);
        gpio_isr_handler_add(pins::PIR_GPIO, Some(pir_gpio_isr), core::ptr::null_mut());
        gpio_intr_enable(pins::PIR_GPIO);

        info!("hw_init: ISR service installed (transit-in, transit-out, PIR)");
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_isr_service() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): ISR service skipped");
    Ok(())
}
