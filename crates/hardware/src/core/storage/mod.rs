//! Register storage cores.
//!
//! Every variant implements [`StorageCore`]: it owns the register array, reports which
//! register's data emerges on each read port this cycle, and commits writes at the
//! clock edge. The variants differ only in timing and array organisation:
//!
//! - `Combinational`: zero-latency read of the requested address.
//! - `Sequential`: the requested address is registered; data returns one cycle later.
//! - `Array`: zero-latency read through a structural macro driven by one-hot
//!   write-select and output-enable vectors. This variant has no zero-register
//!   handling of its own; the integrating `RegisterFile` supplies it.

/// Structural array variant (decode adapter and storage macro).
pub mod array;

/// Zero-latency combinational core.
pub mod comb;

/// One-cycle-latency sequential core.
pub mod seq;

pub use array::ArrayCore;
pub use array::macro_cell::{RowArray, StorageMacro};
pub use comb::CombCore;
pub use seq::SeqCore;

use std::fmt;

use crate::common::error::PortError;
use crate::config::{RegisterFileConfig, StorageKind};
use crate::port::WritePort;

/// Common contract for register storage.
///
/// Evaluation within a cycle is split the way a synchronous array behaves: `read`
/// observes the array as of the start of the cycle, `present_reads` drives any read
/// address registers, and `clock` applies the cycle's writes and register updates
/// atomically. Callers must call `read` before `clock` for a given cycle.
pub trait StorageCore: fmt::Debug {
    /// Which variant this is.
    fn kind(&self) -> StorageKind;

    /// Cycles between presenting a read address and its data emerging.
    fn read_latency(&self) -> u32;

    /// Writes into `out[i]` the register index whose data emerges on read port `i`
    /// this cycle, given this cycle's requested addresses.
    ///
    /// This is the address a bypass comparison must use.
    fn emerging_addrs(&self, requested: &[usize], out: &mut [usize]);

    /// Writes the raw (pre-bypass) data for each read port into `out`.
    fn read(&self, requested: &[usize], out: &mut [u64]);

    /// Rejects this cycle's writes if the core cannot latch them.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::WriteCollision`] when a core configured to reject
    /// multi-writer rows sees one. The default accepts everything.
    fn check_writes(&self, _writes: &[WritePort]) -> Result<(), PortError> {
        Ok(())
    }

    /// Drives this cycle's requested read addresses into any address registers.
    ///
    /// Nothing becomes visible until the following `clock`. Cores without read
    /// registers ignore it.
    fn present_reads(&mut self, _requested: &[usize]) {}

    /// Clock edge: commits valid writes and updates any read address registers.
    fn clock(&mut self, writes: &[WritePort]);

    /// Stored value of `addr`, bypassing ports and timing. Debug use only.
    fn peek(&self, addr: usize) -> u64;
}

/// Builds the storage core selected by `config.storage`.
pub fn build(config: &RegisterFileConfig) -> Box<dyn StorageCore + Send + Sync> {
    match config.storage {
        StorageKind::Combinational => Box::new(CombCore::new(config.num_registers)),
        StorageKind::Sequential => Box::new(SeqCore::new(
            config.num_registers,
            config.num_read_ports,
        )),
        StorageKind::Array => Box::new(ArrayCore::new(
            RowArray::new(config.num_registers),
            config.num_read_ports,
            config.write_collision,
        )),
    }
}

/// Applies `writes` to `regs` so that, among valid writers to one register, the
/// lowest port index lands last. Register zero is never written.
pub(crate) fn commit_lowest_wins(regs: &mut [u64], writes: &[WritePort]) {
    for w in writes.iter().rev() {
        if w.is_effective() {
            regs[w.addr] = w.data;
        }
    }
}
