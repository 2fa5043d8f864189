//! Combinational (zero-latency) register storage.

use super::{StorageCore, commit_lowest_wins};
use crate::common::reg::ZERO_REG;
use crate::config::StorageKind;
use crate::port::WritePort;

/// Register array with same-cycle reads and end-of-cycle writes.
///
/// A read and a write to the same register in one cycle: the read sees the old
/// value. Only the bypass network can forward the new one.
#[derive(Clone, Debug)]
pub struct CombCore {
    regs: Vec<u64>,
}

impl CombCore {
    /// Creates a core of `num_registers` registers, all zero.
    pub fn new(num_registers: usize) -> Self {
        Self {
            regs: vec![0; num_registers],
        }
    }

    /// Reads one register. Register zero always reads 0.
    #[inline]
    pub fn read_reg(&self, addr: usize) -> u64 {
        if addr == ZERO_REG { 0 } else { self.regs[addr] }
    }
}

impl StorageCore for CombCore {
    fn kind(&self) -> StorageKind {
        StorageKind::Combinational
    }

    fn read_latency(&self) -> u32 {
        0
    }

    fn emerging_addrs(&self, requested: &[usize], out: &mut [usize]) {
        out.copy_from_slice(requested);
    }

    fn read(&self, requested: &[usize], out: &mut [u64]) {
        for (o, &addr) in out.iter_mut().zip(requested) {
            *o = self.read_reg(addr);
        }
    }

    fn clock(&mut self, writes: &[WritePort]) {
        commit_lowest_wins(&mut self.regs, writes);
    }

    fn peek(&self, addr: usize) -> u64 {
        self.read_reg(addr)
    }
}
