//! Configuration and port-protocol error definitions.
//!
//! This module defines the error handling for the register file model. It provides:
//! 1. **Configuration Errors:** Fatal construction-time failures (`ConfigError`).
//! 2. **Port Errors:** Per-cycle caller contract violations (`PortError`).
//! 3. **Simulation Errors:** Trace loading and replay failures (`SimError`).
//!
//! Neither kind is recoverable by the register file itself: a configuration error
//! means no register file exists, and a port error means the cycle was not evaluated.

use thiserror::Error;

/// Invalid register file configuration, detected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The per-write-port bypass flag list does not have one entry per write port.
    #[error("bypassable list has {got} entries but there are {expected} write ports")]
    BypassableLength {
        /// Number of write ports configured.
        expected: usize,
        /// Length of the bypassable list supplied.
        got: usize,
    },

    /// A register file must hold at least one register (the zero register).
    #[error("register file must contain at least one register")]
    NoRegisters,

    /// At least one read port and one write port are required.
    #[error("register file needs at least one {0} port")]
    NoPorts(&'static str),

    /// More ports than fit in a 64-bit select vector.
    #[error("{kind} port count {count} exceeds the maximum of {max}")]
    TooManyPorts {
        /// `"read"` or `"write"`.
        kind: &'static str,
        /// Requested port count.
        count: usize,
        /// Maximum supported port count.
        max: usize,
    },

    /// Register width outside `1..=64` bits.
    #[error("register width {0} is outside 1..=64 bits")]
    RegisterWidth(u32),
}

/// A per-cycle port contract violation.
///
/// When `RegisterFile::tick` returns one of these, no register was written and
/// no pipeline state advanced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    /// Number of read ports driven does not match the configuration.
    #[error("expected {expected} read ports, got {got}")]
    ReadPortCount {
        /// Configured read port count.
        expected: usize,
        /// Number of read ports supplied.
        got: usize,
    },

    /// Number of write ports driven does not match the configuration.
    #[error("expected {expected} write ports, got {got}")]
    WritePortCount {
        /// Configured write port count.
        expected: usize,
        /// Number of write ports supplied.
        got: usize,
    },

    /// A read port addressed a register beyond the end of the file.
    #[error("read port {port} addressed p{addr}, file has {num_registers} registers")]
    ReadAddressOutOfRange {
        /// Offending read port.
        port: usize,
        /// Requested register index.
        addr: usize,
        /// Configured register count.
        num_registers: usize,
    },

    /// A valid write addressed a register beyond the end of the file.
    #[error("write port {port} addressed p{addr}, file has {num_registers} registers")]
    WriteAddressOutOfRange {
        /// Offending write port.
        port: usize,
        /// Requested register index.
        addr: usize,
        /// Configured register count.
        num_registers: usize,
    },

    /// A valid write carried bits above the configured register width.
    #[error("write port {port} data {data:#x} does not fit in {width} bits")]
    DataTooWide {
        /// Offending write port.
        port: usize,
        /// Data driven on the port.
        data: u64,
        /// Configured register width.
        width: u32,
    },

    /// Several valid writers targeted one row of the array macro under the reject policy.
    #[error("write ports {ports:#b} collided on row {row}")]
    WriteCollision {
        /// Row (register index) written by more than one port.
        row: usize,
        /// Write-select vector for the row; bit `w` is write port `w`.
        ports: u64,
    },
}

/// Failure while loading or replaying a stimulus trace.
#[derive(Debug, Error)]
pub enum SimError {
    /// The embedded configuration was rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A trace cycle violated the port contract.
    #[error("cycle {cycle}: {source}")]
    Port {
        /// Zero-based trace cycle that failed.
        cycle: u64,
        /// Underlying port error.
        #[source]
        source: PortError,
    },

    /// The trace file could not be read.
    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    /// The trace file is not valid trace JSON.
    #[error("failed to parse trace: {0}")]
    Parse(#[from] serde_json::Error),
}
