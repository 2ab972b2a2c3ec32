//! Host-side integration test entry point.
//!
//! One binary so the mock hardware module is shared across test files.

#![cfg(not(target_os = "espidf"))]

mod control_loop_tests;
mod mock_hw;
