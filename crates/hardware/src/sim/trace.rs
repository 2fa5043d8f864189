//! Stimulus traces.
//!
//! A trace embeds a register file configuration and a list of cycles, each
//! naming the address on every read port and the request on each write port:
//!
//! ```json
//! {
//!   "config": { "num_registers": 3, "num_read_ports": 2, "num_write_ports": 2,
//!               "register_width": 8, "bypassable": [true, false] },
//!   "cycles": [
//!     { "reads": [2, 0], "writes": [ { "addr": 2, "data": 90 } ] },
//!     { "reads": [2, 0] }
//!   ]
//! }
//! ```
//!
//! Write lists shorter than the write port count are padded with idle ports.
//! Read lists must name every read port.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::SimError;
use crate::config::RegisterFileConfig;
use crate::core::bypass::BypassConflict;
use crate::core::regfile::WriteCollision;
use crate::port::WritePort;

/// Port activity for one cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceCycle {
    /// Address presented on each read port.
    #[serde(default)]
    pub reads: Vec<usize>,
    /// Requests on the leading write ports.
    #[serde(default)]
    pub writes: Vec<WritePort>,
}

/// A configuration plus the cycles to replay against it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Register file the trace was written for.
    pub config: RegisterFileConfig,
    /// Cycles in order.
    #[serde(default)]
    pub cycles: Vec<TraceCycle>,
}

impl Trace {
    /// Parses a trace from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Parse`] if `json` is not a valid trace.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a trace file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read, or
    /// [`SimError::Parse`] if its contents are not a valid trace.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serializes the trace as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Small worked scenario on an 8-bit, 3-entry file with 2 read and 2 write ports,
    /// where only write port 0 is bypassable.
    ///
    /// 1. Cycle 0 writes `0x5A` to p2 on port 0 while read port 0 reads p2 (bypassed).
    /// 2. Cycle 1 reads p2 again with no writes (served from storage).
    /// 3. Cycle 2 writes `0x33` to p1 on port 1 while read port 1 reads p1 (old value).
    /// 4. Cycle 3 reads p1 again (committed value).
    pub fn example() -> Self {
        let config = RegisterFileConfig::new(3, 2, 2, 8, vec![true, false]);
        let cycles = vec![
            TraceCycle {
                reads: vec![2, 0],
                writes: vec![WritePort::new(2, 0x5A)],
            },
            TraceCycle {
                reads: vec![2, 0],
                writes: Vec::new(),
            },
            TraceCycle {
                reads: vec![0, 1],
                writes: vec![WritePort::idle(), WritePort::new(1, 0x33)],
            },
            TraceCycle {
                reads: vec![0, 1],
                writes: Vec::new(),
            },
        ];
        Self { config, cycles }
    }
}

/// Observable result of one replayed cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CycleOutput {
    /// Simulator cycle number.
    pub cycle: u64,
    /// Data emerging on each read port.
    pub reads: Vec<u64>,
    /// Read ports served by bypass; bit `i` is read port `i`.
    pub forwarded: u64,
    /// Bypass conflicts observed this cycle.
    pub conflicts: Vec<BypassConflict>,
    /// Write collisions observed this cycle.
    pub collisions: Vec<WriteCollision>,
}

impl fmt::Display for CycleOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cycle {:>4}:", self.cycle)?;
        for (i, data) in self.reads.iter().enumerate() {
            let mark = if self.forwarded & (1u64 << i) != 0 { "*" } else { "" };
            write!(f, " r{i}={data:#x}{mark}")?;
        }
        if !self.conflicts.is_empty() {
            write!(f, " conflicts={}", self.conflicts.len())?;
        }
        if !self.collisions.is_empty() {
            write!(f, " collisions={}", self.collisions.len())?;
        }
        Ok(())
    }
}
