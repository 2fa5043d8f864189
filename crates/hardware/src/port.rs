//! Register file port contracts and the write-request adapter.
//!
//! This module defines the per-cycle shapes exchanged with the register file:
//! 1. **Read Ports:** An address driven by the consumer and the data returned for it.
//! 2. **Write Ports:** Address, data and a valid flag; never back-pressured.
//! 3. **Adapter:** Conversion from an execution-unit result into a write port request.

use serde::{Deserialize, Serialize};

/// A read port: the caller drives `addr`, the register file fills `data`.
///
/// There is no handshake. A read is performed every cycle whether or not the
/// consumer uses the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadPort {
    /// Register index requested this cycle.
    pub addr: usize,
    /// Value returned for this port, per the storage core's latency.
    pub data: u64,
}

impl ReadPort {
    /// Creates a read port driving `addr`.
    pub const fn new(addr: usize) -> Self {
        Self { addr, data: 0 }
    }
}

/// A write port request for one cycle.
///
/// Bypass eligibility is a static property of the port index and lives in
/// [`RegisterFileConfig::bypassable`](crate::config::RegisterFileConfig::bypassable).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritePort {
    /// Destination register index.
    pub addr: usize,
    /// Value to write.
    pub data: u64,
    /// The write is applied only when set.
    #[serde(default = "WritePort::default_valid")]
    pub valid: bool,
}

impl WritePort {
    /// A valid write of `data` to `addr`.
    pub const fn new(addr: usize, data: u64) -> Self {
        Self {
            addr,
            data,
            valid: true,
        }
    }

    /// An idle port (valid deasserted).
    pub const fn idle() -> Self {
        Self {
            addr: 0,
            data: 0,
            valid: false,
        }
    }

    /// Returns `true` if this write can update storage: valid and not the zero register.
    #[inline]
    pub const fn is_effective(&self) -> bool {
        self.valid && self.addr != crate::common::reg::ZERO_REG
    }

    const fn default_valid() -> bool {
        true
    }
}

/// A result record produced by an execution unit, as seen by the register file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecResult {
    /// Physical destination register.
    pub dst: usize,
    /// Computed value.
    pub value: u64,
    /// The execution unit produced a result this cycle.
    pub valid: bool,
}

impl From<ExecResult> for WritePort {
    fn from(res: ExecResult) -> Self {
        Self {
            addr: res.dst,
            data: res.value,
            valid: res.valid,
        }
    }
}

/// Adapts an execution-unit result into a write port request.
///
/// Returns the request and the upstream `can_enqueue` flag, which is always
/// `true` because the register file accepts every write unconditionally.
pub fn adapt(res: ExecResult) -> (WritePort, bool) {
    (WritePort::from(res), true)
}
