//! Interrupt-driven edge-event capture.
//!
//! Three one-shot flags connect the GPIO ISRs to the control loop:
//!
//! ```text
//! ┌──────────────┐  store(true)   ┌─────────────┐  swap(false)  ┌────────────┐
//! │ GPIO ISR     │───────────────▶│  EdgeFlags  │──────────────▶│ Main loop  │
//! │ (IR in/out,  │                │  (atomics)  │               │ (consumer) │
//! │  PIR motion) │                └─────────────┘               └────────────┘
//! └──────────────┘
//! ```
//!
//! The discipline is strictly asymmetric: only the interrupt path sets a
//! flag, only the loop clears it.  That single-writer-per-direction contract
//! makes the flags race-free without a lock.  Multiple physical pulses on
//! the same line between two drains coalesce into one logical event — the
//! loop cares about "at least one transit occurred", not a count.

use core::sync::atomic::{AtomicBool, Ordering};

/// Which monitored line an edge arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeLine {
    /// IR break-beam at the product inlet.
    TransitIn,
    /// IR break-beam at the product outlet.
    TransitOut,
    /// PIR motion sensor.
    Motion,
}

/// Edge direction as reported by the GPIO interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Rising,
    Falling,
}

static TRANSIT_IN_FLAG: AtomicBool = AtomicBool::new(false);
static TRANSIT_OUT_FLAG: AtomicBool = AtomicBool::new(false);
static MOTION_FLAG: AtomicBool = AtomicBool::new(false);

/// The single interrupt entry point.
///
/// Performs exactly one unconditional store into the matching flag — no
/// further computation, no blocking — keeping interrupt latency minimal and
/// the handler re-entrancy safe.  The IR beams signal on the falling edge
/// (beam broken), the PIR on the rising edge; any other pairing is noise
/// from the opposite transition and is ignored.
pub fn record_edge(line: EdgeLine, edge: Edge) {
    match (line, edge) {
        (EdgeLine::TransitIn, Edge::Falling) => TRANSIT_IN_FLAG.store(true, Ordering::Release),
        (EdgeLine::TransitOut, Edge::Falling) => TRANSIT_OUT_FLAG.store(true, Ordering::Release),
        (EdgeLine::Motion, Edge::Rising) => MOTION_FLAG.store(true, Ordering::Release),
        _ => {}
    }
}

/// Read-and-clear the transit-in flag.  Main loop only.
pub fn take_transit_in() -> bool {
    TRANSIT_IN_FLAG.swap(false, Ordering::AcqRel)
}

/// Read-and-clear the transit-out flag.  Main loop only.
pub fn take_transit_out() -> bool {
    TRANSIT_OUT_FLAG.swap(false, Ordering::AcqRel)
}

/// Read-and-clear the motion flag.  Main loop only.
pub fn take_motion() -> bool {
    MOTION_FLAG.swap(false, Ordering::AcqRel)
}
