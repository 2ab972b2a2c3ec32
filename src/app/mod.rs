//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the FoodCare controller:
//! climate-driven fan control, inventory tracking, the motion indicator,
//! and the door-motor button latch.  All interaction with hardware happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
