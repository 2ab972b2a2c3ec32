//! Sensor subsystem.
//!
//! The only polled sensor in this system is the DHT11 climate sensor; the
//! transit beams and PIR are interrupt-driven and live in [`crate::events`].

pub mod dht11;
