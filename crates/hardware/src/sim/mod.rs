//! Simulation driver and stimulus traces.
//!
//! Provides a tick-driven loop around a `RegisterFile` and a JSON trace format
//! for replaying per-cycle port activity.

/// Tick-driven simulator with a cycle counter.
pub mod simulator;

/// JSON stimulus traces and per-cycle replay output.
pub mod trace;

pub use simulator::Simulator;
pub use trace::{CycleOutput, Trace, TraceCycle};
