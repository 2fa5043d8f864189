//! Physical register file.
//!
//! `RegisterFile` integrates one storage core with the bypass network and the
//! zero-register contract. Each call to [`RegisterFile::tick`] evaluates one cycle:
//! 1. **Validate:** Port counts, address ranges and data widths are checked before
//!    any state is touched.
//! 2. **Read:** The storage core reports the emerging address and raw data per
//!    read port; address 0 is forced to zero; the bypass network may override.
//! 3. **Commit:** Writes to register zero are dropped, then the remaining writes
//!    are clocked into the storage core.
//! 4. **Account:** Statistics are updated and a per-cycle report is returned.

use serde::Serialize;
use tracing::{debug, trace, warn};

use super::bypass::{BypassConflict, BypassNetwork, BypassSelect};
use super::storage::{self, StorageCore};
use crate::common::error::{ConfigError, PortError};
use crate::common::reg::{ZERO_REG, fits_width, reg_name};
use crate::config::{RegisterFileConfig, StorageKind};
use crate::port::{ReadPort, WritePort};
use crate::stats::RegFileStats;

/// Several valid writers targeted one non-zero register in the same cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WriteCollision {
    /// Register targeted.
    pub addr: usize,
    /// Colliding write ports; bit `w` is write port `w`.
    pub ports: u64,
}

/// What happened during one cycle, beyond the read data itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Read ports served by the bypass network; bit `i` is read port `i`.
    pub forwarded: u64,
    /// Reads that matched several bypassable writers.
    pub conflicts: Vec<BypassConflict>,
    /// Registers written by several valid writers.
    pub collisions: Vec<WriteCollision>,
}

/// A multi-ported physical register file.
#[derive(Debug)]
pub struct RegisterFile {
    config: RegisterFileConfig,
    storage: Box<dyn StorageCore + Send + Sync>,
    bypass: BypassNetwork,
    stats: RegFileStats,
    requested: Vec<usize>,
    emerging: Vec<usize>,
    raw: Vec<u64>,
    committed: Vec<WritePort>,
}

impl RegisterFile {
    /// Builds a register file from `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is inconsistent, e.g. the
    /// bypassable list length differs from the write port count.
    pub fn new(config: RegisterFileConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let storage = storage::build(&config);
        let bypass = BypassNetwork::new(&config.bypassable);
        debug!(
            storage = ?config.storage,
            registers = config.num_registers,
            read_ports = config.num_read_ports,
            write_ports = config.num_write_ports,
            width = config.register_width,
            bypass = bypass.eligible(),
            any_bypassable = config.any_bypassable(),
            "register file built"
        );
        Ok(Self {
            requested: Vec::with_capacity(config.num_read_ports),
            emerging: vec![ZERO_REG; config.num_read_ports],
            raw: vec![0; config.num_read_ports],
            committed: Vec::with_capacity(config.num_write_ports),
            config,
            storage,
            bypass,
            stats: RegFileStats::default(),
        })
    }

    /// The configuration this register file was built with.
    pub const fn config(&self) -> &RegisterFileConfig {
        &self.config
    }

    /// Storage variant in use.
    pub fn kind(&self) -> StorageKind {
        self.storage.kind()
    }

    /// Cycles from presenting a read address to its data appearing.
    pub fn read_latency(&self) -> u32 {
        self.storage.read_latency()
    }

    /// Accumulated statistics.
    pub const fn stats(&self) -> &RegFileStats {
        &self.stats
    }

    /// Write acceptance. The register file never back-pressures a writer.
    #[inline]
    pub const fn write_ready(&self) -> bool {
        true
    }

    /// Stored value of `addr` outside the port protocol, or `None` if out of range.
    pub fn peek(&self, addr: usize) -> Option<u64> {
        if addr >= self.config.num_registers {
            None
        } else if addr == ZERO_REG {
            Some(0)
        } else {
            Some(self.storage.peek(addr))
        }
    }

    /// Logs every non-zero register at debug level.
    pub fn dump(&self) {
        for addr in 1..self.config.num_registers {
            let val = self.storage.peek(addr);
            if val != 0 {
                debug!("{}={:#x}", reg_name(addr), val);
            }
        }
    }

    /// Evaluates one cycle.
    ///
    /// `reads` must hold one entry per read port; on success each entry's `data`
    /// holds the value emerging on that port this cycle. `writes` must hold one
    /// entry per write port (idle ports have `valid` cleared).
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] for a malformed cycle. On error no register is
    /// written, no read data is driven and no latch advances.
    pub fn tick(
        &mut self,
        reads: &mut [ReadPort],
        writes: &[WritePort],
    ) -> Result<CycleReport, PortError> {
        self.validate_cycle(reads, writes)?;

        self.committed.clear();
        self.committed.extend(writes.iter().map(|w| WritePort {
            valid: w.is_effective(),
            ..*w
        }));
        self.storage.check_writes(&self.committed)?;

        self.requested.clear();
        self.requested.extend(reads.iter().map(|r| r.addr));
        self.storage
            .emerging_addrs(&self.requested, &mut self.emerging);
        self.storage.read(&self.requested, &mut self.raw);
        self.storage.present_reads(&self.requested);

        let mut report = CycleReport::default();
        for (i, port) in reads.iter_mut().enumerate() {
            let addr = self.emerging[i];
            port.data = if addr == ZERO_REG {
                0
            } else if self.bypass.is_active() {
                let sel = self.bypass.select(addr, writes);
                if let BypassSelect::Conflict {
                    port: winner,
                    candidates,
                    ..
                } = sel
                {
                    warn!(
                        read_port = i,
                        reg = %reg_name(addr),
                        candidates,
                        winner,
                        "multiple bypassable writers matched one read"
                    );
                    report.conflicts.push(BypassConflict {
                        read_port: i,
                        addr,
                        candidates,
                        winner,
                    });
                }
                if sel.is_forwarded() {
                    report.forwarded |= 1u64 << i;
                }
                sel.data_or(self.raw[i])
            } else {
                self.raw[i]
            };
        }

        report.collisions = write_collisions(&self.committed);
        for c in &report.collisions {
            warn!(reg = %reg_name(c.addr), ports = c.ports, "multiple writers to one register");
        }

        self.storage.clock(&self.committed);
        self.record(writes, &report);
        trace!(
            cycle = self.stats.cycles,
            reads = ?reads,
            forwarded = report.forwarded,
            "cycle evaluated"
        );
        Ok(report)
    }

    fn validate_cycle(&self, reads: &[ReadPort], writes: &[WritePort]) -> Result<(), PortError> {
        let cfg = &self.config;
        if reads.len() != cfg.num_read_ports {
            return Err(PortError::ReadPortCount {
                expected: cfg.num_read_ports,
                got: reads.len(),
            });
        }
        if writes.len() != cfg.num_write_ports {
            return Err(PortError::WritePortCount {
                expected: cfg.num_write_ports,
                got: writes.len(),
            });
        }
        if let Some((port, r)) = reads
            .iter()
            .enumerate()
            .find(|(_, r)| r.addr >= cfg.num_registers)
        {
            return Err(PortError::ReadAddressOutOfRange {
                port,
                addr: r.addr,
                num_registers: cfg.num_registers,
            });
        }
        for (port, w) in writes.iter().enumerate().filter(|(_, w)| w.valid) {
            if w.addr >= cfg.num_registers {
                return Err(PortError::WriteAddressOutOfRange {
                    port,
                    addr: w.addr,
                    num_registers: cfg.num_registers,
                });
            }
            if !fits_width(w.data, cfg.register_width) {
                return Err(PortError::DataTooWide {
                    port,
                    data: w.data,
                    width: cfg.register_width,
                });
            }
        }
        Ok(())
    }

    fn record(&mut self, writes: &[WritePort], report: &CycleReport) {
        let stats = &mut self.stats;
        stats.cycles += 1;
        stats.reads += self.config.num_read_ports as u64;
        stats.bypass_hits += u64::from(report.forwarded.count_ones());
        stats.bypass_conflicts += report.conflicts.len() as u64;
        stats.write_collisions += report.collisions.len() as u64;
        for w in writes {
            if !w.valid {
                stats.writes_invalid += 1;
            } else if w.addr == ZERO_REG {
                stats.writes_to_zero += 1;
            } else {
                stats.writes_committed += 1;
            }
        }
    }
}

/// Groups effective writes by destination and keeps the registers with several writers.
fn write_collisions(writes: &[WritePort]) -> Vec<WriteCollision> {
    let mut groups: Vec<WriteCollision> = Vec::new();
    for (w, wp) in writes.iter().enumerate().filter(|(_, wp)| wp.is_effective()) {
        match groups.iter_mut().find(|c| c.addr == wp.addr) {
            Some(c) => c.ports |= 1u64 << w,
            None => groups.push(WriteCollision {
                addr: wp.addr,
                ports: 1u64 << w,
            }),
        }
    }
    groups.retain(|c| c.ports.count_ones() > 1);
    groups
}
