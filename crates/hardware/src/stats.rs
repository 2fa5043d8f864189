//! Register file statistics collection and reporting.
//!
//! This module tracks per-run counters for a register file. It provides:
//! 1. **Traffic:** Cycles evaluated, reads served and writes committed.
//! 2. **Bypass:** Forwarded reads and multi-candidate conflicts.
//! 3. **Dropped Writes:** Invalid writes and writes to the zero register.
//! 4. **Collisions:** Cycles where several valid writers targeted one register.

use serde::Serialize;

/// Register file statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegFileStats {
    /// Cycles successfully evaluated.
    pub cycles: u64,
    /// Read port samples (one per read port per cycle).
    pub reads: u64,
    /// Reads served by the bypass network instead of storage.
    pub bypass_hits: u64,
    /// Reads where several bypassable writers matched.
    pub bypass_conflicts: u64,
    /// Valid writes to non-zero registers, including collision losers.
    pub writes_committed: u64,
    /// Valid writes to the zero register (accepted and discarded).
    pub writes_to_zero: u64,
    /// Write port slots with valid deasserted.
    pub writes_invalid: u64,
    /// Registers targeted by more than one valid writer in a cycle.
    pub write_collisions: u64,
}

impl RegFileStats {
    /// Fraction of reads served by bypass, or 0 if nothing was read.
    pub fn bypass_rate(&self) -> f64 {
        if self.reads == 0 {
            0.0
        } else {
            self.bypass_hits as f64 / self.reads as f64
        }
    }

    /// Prints a summary to stdout.
    pub fn print(&self) {
        println!("==========================================================");
        println!("REGISTER FILE STATISTICS");
        println!("----------------------------------------------------------");
        println!("cycles              {:>12}", self.cycles);
        println!("reads               {:>12}", self.reads);
        println!(
            "  bypass hits       {:>12}  ({:.2}%)",
            self.bypass_hits,
            self.bypass_rate() * 100.0
        );
        println!("  bypass conflicts  {:>12}", self.bypass_conflicts);
        println!("writes committed    {:>12}", self.writes_committed);
        println!("  to zero register  {:>12}", self.writes_to_zero);
        println!("  invalid slots     {:>12}", self.writes_invalid);
        println!("  collisions        {:>12}", self.write_collisions);
        println!("==========================================================");
    }
}
