//! Sequential (one-cycle-latency) register storage.
//!
//! Read addresses are captured in a latch at the clock edge and the array is read
//! with the captured address during the following cycle. The zero-register check
//! uses the captured address too, so it stays aligned with the data it guards.

use super::{StorageCore, commit_lowest_wins};
use crate::common::reg::ZERO_REG;
use crate::config::StorageKind;
use crate::core::latch::Latch;
use crate::port::WritePort;

/// Register array whose reads return one cycle after the address is presented.
#[derive(Clone, Debug)]
pub struct SeqCore {
    regs: Vec<u64>,
    /// Registered read address per port; resets to the zero register.
    read_addrs: Vec<Latch<usize>>,
}

impl SeqCore {
    /// Creates a core of `num_registers` registers with `num_read_ports` address latches.
    pub fn new(num_registers: usize, num_read_ports: usize) -> Self {
        Self {
            regs: vec![0; num_registers],
            read_addrs: vec![Latch::new(ZERO_REG); num_read_ports],
        }
    }

    /// Address captured for `port` at the last clock edge.
    #[inline]
    pub fn registered_addr(&self, port: usize) -> usize {
        self.read_addrs[port].sample()
    }

    #[inline]
    fn read_reg(&self, addr: usize) -> u64 {
        if addr == ZERO_REG { 0 } else { self.regs[addr] }
    }
}

impl StorageCore for SeqCore {
    fn kind(&self) -> StorageKind {
        StorageKind::Sequential
    }

    fn read_latency(&self) -> u32 {
        1
    }

    fn emerging_addrs(&self, _requested: &[usize], out: &mut [usize]) {
        for (o, latch) in out.iter_mut().zip(&self.read_addrs) {
            *o = latch.sample();
        }
    }

    fn read(&self, _requested: &[usize], out: &mut [u64]) {
        for (o, latch) in out.iter_mut().zip(&self.read_addrs) {
            *o = self.read_reg(latch.sample());
        }
    }

    fn present_reads(&mut self, requested: &[usize]) {
        for (latch, &addr) in self.read_addrs.iter_mut().zip(requested) {
            latch.drive(addr);
        }
    }

    fn clock(&mut self, writes: &[WritePort]) {
        commit_lowest_wins(&mut self.regs, writes);
        for latch in &mut self.read_addrs {
            latch.update();
        }
    }

    fn peek(&self, addr: usize) -> u64 {
        self.read_reg(addr)
    }
}
