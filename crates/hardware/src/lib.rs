//! Physical register file model for an out-of-order core.
//!
//! This crate implements a cycle-level, multi-ported register file with the following:
//! 1. **Storage:** Combinational, sequential (registered read address) and structural
//!    one-hot array variants behind one `StorageCore` interface.
//! 2. **Bypass:** Same-cycle write-to-read forwarding with lowest-port priority.
//! 3. **Zero Register:** Register 0 always reads as zero and silently discards writes.
//! 4. **Ports:** Read/write port types and the execution-result write adapter.
//! 5. **Simulation:** Tick-driven driver, JSON stimulus traces, and statistics.

/// Common types (errors, register index and width helpers).
pub mod common;
/// Register file configuration (defaults, storage variant, collision policy).
pub mod config;
/// Register file core (storage variants, bypass network, integrator).
pub mod core;
/// Read and write port types and the write-request adapter.
pub mod port;
/// Tick-driven simulator and trace replay.
pub mod sim;
/// Register file statistics collection and reporting.
pub mod stats;

/// Register file configuration; use a preset or deserialize from JSON.
pub use crate::config::RegisterFileConfig;
/// Integrated register file; construct with `RegisterFile::new`.
pub use crate::core::RegisterFile;
/// Top-level simulator with cycle counter and trace replay.
pub use crate::sim::Simulator;
