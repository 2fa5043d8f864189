//! Write-to-read bypass network.
//!
//! Forwards data being written this cycle to a read port whose emerging address
//! matches, so a dependent read does not have to wait for the array commit. It
//! provides:
//! 1. **Eligibility:** Only write ports configured as bypassable take part.
//! 2. **Candidate Match:** A write is a candidate when it is valid, targets a
//!    non-zero register and matches the read port's compare address.
//! 3. **Priority Select:** With several candidates the lowest write-port index wins
//!    and the cycle is flagged as a conflict.
//!
//! The compare address is whatever the storage core reports as emerging on the
//! port: the requested address for zero-latency cores, the registered address for
//! the sequential core.

use serde::Serialize;

use crate::common::reg::ZERO_REG;
use crate::port::WritePort;

/// Outcome of the bypass select for one read port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BypassSelect {
    /// No eligible write matched; the storage data stands.
    Miss,
    /// Exactly one eligible write matched.
    Hit {
        /// Forwarding write port.
        port: usize,
        /// Forwarded data.
        data: u64,
    },
    /// Several eligible writes matched; the lowest index was forwarded.
    Conflict {
        /// Winning (lowest-index) write port.
        port: usize,
        /// Forwarded data.
        data: u64,
        /// All matching write ports; bit `w` is write port `w`.
        candidates: u64,
    },
}

impl BypassSelect {
    /// Data seen by the read port, given the storage core's raw output.
    #[inline]
    pub const fn data_or(self, raw: u64) -> u64 {
        match self {
            Self::Miss => raw,
            Self::Hit { data, .. } | Self::Conflict { data, .. } => data,
        }
    }

    /// Returns `true` if the read was served by a write port.
    #[inline]
    pub const fn is_forwarded(self) -> bool {
        !matches!(self, Self::Miss)
    }
}

/// Several bypassable writers matched one read in the same cycle.
///
/// Distinct destinations among concurrent bypassable writers are an upstream
/// invariant, so this marks an upstream bug. The register file still proceeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BypassConflict {
    /// Read port affected.
    pub read_port: usize,
    /// Register both writers targeted.
    pub addr: usize,
    /// Matching write ports; bit `w` is write port `w`.
    pub candidates: u64,
    /// Write port whose data was forwarded.
    pub winner: usize,
}

/// Per-register-file bypass network.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BypassNetwork {
    /// Bypass-eligible write ports; bit `w` is write port `w`.
    eligible: u64,
}

impl BypassNetwork {
    /// Builds the network from the per-write-port eligibility flags.
    pub fn new(bypassable: &[bool]) -> Self {
        let eligible = bypassable
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .fold(0u64, |mask, (w, _)| mask | (1u64 << w));
        Self { eligible }
    }

    /// Returns `true` if any write port is bypass-eligible.
    #[inline]
    pub const fn is_active(&self) -> bool {
        self.eligible != 0
    }

    /// Eligibility mask; bit `w` is write port `w`.
    #[inline]
    pub const fn eligible(&self) -> u64 {
        self.eligible
    }

    /// Candidate mask for a read whose compare address is `addr`.
    pub fn candidates(&self, addr: usize, writes: &[WritePort]) -> u64 {
        if addr == ZERO_REG {
            return 0;
        }
        writes
            .iter()
            .enumerate()
            .filter(|&(w, wp)| {
                self.eligible & (1u64 << w) != 0 && wp.valid && wp.addr != ZERO_REG && wp.addr == addr
            })
            .fold(0u64, |mask, (w, _)| mask | (1u64 << w))
    }

    /// Selects the forwarding source, if any, for a read of `addr`.
    pub fn select(&self, addr: usize, writes: &[WritePort]) -> BypassSelect {
        let candidates = self.candidates(addr, writes);
        if candidates == 0 {
            return BypassSelect::Miss;
        }
        let port = candidates.trailing_zeros() as usize;
        let data = writes[port].data;
        if candidates.count_ones() == 1 {
            BypassSelect::Hit { port, data }
        } else {
            BypassSelect::Conflict {
                port,
                data,
                candidates,
            }
        }
    }
}
