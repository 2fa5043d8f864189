//! Simulator: drives a register file one cycle at a time.
//!
//! The simulator owns the register file and a cycle counter. Callers either
//! tick it directly with read addresses and write requests, or replay a
//! [`Trace`].

use tracing::{info, trace};

use super::trace::{CycleOutput, Trace};
use crate::common::error::{ConfigError, PortError, SimError};
use crate::config::RegisterFileConfig;
use crate::core::RegisterFile;
use crate::port::{ReadPort, WritePort};
use crate::stats::RegFileStats;

/// Top-level simulator: a register file plus a cycle counter.
#[derive(Debug)]
pub struct Simulator {
    regfile: RegisterFile,
    cycle: u64,
}

impl Simulator {
    /// Creates a simulator for a register file built from `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` is invalid.
    pub fn new(config: RegisterFileConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            regfile: RegisterFile::new(config)?,
            cycle: 0,
        })
    }

    /// Cycles evaluated so far.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// The simulated register file.
    pub const fn regfile(&self) -> &RegisterFile {
        &self.regfile
    }

    /// Register file statistics.
    pub const fn stats(&self) -> &RegFileStats {
        self.regfile.stats()
    }

    /// Advances one cycle and returns the data emerging on each read port.
    ///
    /// `read_addrs` names every read port; `writes` covers every write port.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the cycle violates the port contract; the
    /// cycle counter does not advance.
    pub fn tick(&mut self, read_addrs: &[usize], writes: &[WritePort]) -> Result<Vec<u64>, PortError> {
        Ok(self.step(read_addrs, writes)?.reads)
    }

    /// Replays every cycle of `trace` against this simulator.
    ///
    /// The trace's embedded configuration is not consulted; build the simulator
    /// from it (or an override) first. Short write lists are padded with idle ports.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Port`] naming the first trace cycle that violates the
    /// port contract. Cycles before it have already been applied.
    pub fn run_trace(&mut self, trace: &Trace) -> Result<Vec<CycleOutput>, SimError> {
        let num_write_ports = self.regfile.config().num_write_ports;
        let mut outputs = Vec::with_capacity(trace.cycles.len());
        let mut writes = Vec::with_capacity(num_write_ports);
        for (idx, tc) in trace.cycles.iter().enumerate() {
            writes.clear();
            writes.extend_from_slice(&tc.writes);
            if writes.len() < num_write_ports {
                writes.resize(num_write_ports, WritePort::idle());
            }
            let out = self
                .step(&tc.reads, &writes)
                .map_err(|source| SimError::Port {
                    cycle: idx as u64,
                    source,
                })?;
            outputs.push(out);
        }
        info!(
            cycles = outputs.len(),
            bypass_hits = self.stats().bypass_hits,
            "trace replay finished"
        );
        Ok(outputs)
    }

    fn step(&mut self, read_addrs: &[usize], writes: &[WritePort]) -> Result<CycleOutput, PortError> {
        let mut reads: Vec<ReadPort> = read_addrs.iter().map(|&a| ReadPort::new(a)).collect();
        let report = self.regfile.tick(&mut reads, writes)?;
        let out = CycleOutput {
            cycle: self.cycle,
            reads: reads.iter().map(|r| r.data).collect(),
            forwarded: report.forwarded,
            conflicts: report.conflicts,
            collisions: report.collisions,
        };
        trace!(cycle = self.cycle, reads = ?out.reads, "tick");
        self.cycle += 1;
        Ok(out)
    }
}
