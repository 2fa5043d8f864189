//! Structural array variant.
//!
//! `ArrayCore` adapts port-addressed reads and writes to a [`StorageMacro`]:
//! 1. **Read Path:** Each read port's address is one-hot decoded; the per-row
//!    output-enable vectors tell the macro which ports sample which row.
//! 2. **Write Path:** Each write port's address is one-hot decoded and ANDed with
//!    its valid flag; the per-row write-select vectors pick which port's data
//!    a row latches, and a row is write-enabled if any select bit is set.
//! 3. **Collisions:** A row selected by several ports is resolved by the
//!    configured [`WriteCollisionPolicy`] before the macro sees it.
//!
//! The adapter does not special-case register zero and does not bypass. Row 0 is an
//! ordinary row here; the integrating `RegisterFile` masks it.

/// One-hot decode and select vector construction.
pub mod decode;

/// Storage macro trait and its array implementation.
pub mod macro_cell;

use tracing::warn;

use self::decode::{collisions, isolate_lowest, output_enable, write_enable, write_select};
use self::macro_cell::StorageMacro;
use super::StorageCore;
use crate::common::error::PortError;
use crate::config::{StorageKind, WriteCollisionPolicy};
use crate::port::WritePort;

/// Decode/select adapter in front of a storage macro.
#[derive(Clone, Debug)]
pub struct ArrayCore<M: StorageMacro> {
    cell: M,
    num_read_ports: usize,
    policy: WriteCollisionPolicy,
}

impl<M: StorageMacro> ArrayCore<M> {
    /// Wraps `cell`, serving `num_read_ports` read ports.
    pub const fn new(cell: M, num_read_ports: usize, policy: WriteCollisionPolicy) -> Self {
        Self {
            cell,
            num_read_ports,
            policy,
        }
    }

    /// The wrapped macro.
    pub const fn cell(&self) -> &M {
        &self.cell
    }

    /// Write-select vectors as handed to the macro for `writes`.
    ///
    /// Under [`WriteCollisionPolicy::LowestIndex`] every row is reduced to its
    /// lowest-index writer. Under `Reject` the raw vectors are returned; a
    /// multi-bit row never reaches the macro because [`StorageCore::check_writes`]
    /// fails first.
    pub fn resolved_select(&self, writes: &[WritePort]) -> Vec<u64> {
        let ws = write_select(writes, self.cell.rows());
        match self.policy {
            WriteCollisionPolicy::LowestIndex => ws.into_iter().map(isolate_lowest).collect(),
            WriteCollisionPolicy::Reject => ws,
        }
    }
}

impl<M> StorageCore for ArrayCore<M>
where
    M: StorageMacro + std::fmt::Debug,
{
    fn kind(&self) -> StorageKind {
        StorageKind::Array
    }

    fn read_latency(&self) -> u32 {
        0
    }

    fn emerging_addrs(&self, requested: &[usize], out: &mut [usize]) {
        out.copy_from_slice(requested);
    }

    fn read(&self, requested: &[usize], out: &mut [u64]) {
        debug_assert_eq!(requested.len(), self.num_read_ports);
        let oe = output_enable(requested, self.cell.rows());
        out.fill(0);
        self.cell.drive_outputs(&oe, out);
    }

    fn check_writes(&self, writes: &[WritePort]) -> Result<(), PortError> {
        if self.policy != WriteCollisionPolicy::Reject {
            return Ok(());
        }
        let ws = write_select(writes, self.cell.rows());
        if let Some((row, ports)) = collisions(&ws).next() {
            warn!(row, ports, "array write collision rejected");
            return Err(PortError::WriteCollision { row, ports });
        }
        Ok(())
    }

    fn clock(&mut self, writes: &[WritePort]) {
        let ws = self.resolved_select(writes);
        let we = write_enable(&ws);
        let data_in: Vec<u64> = writes.iter().map(|w| w.data).collect();
        self.cell.clock(&we, &ws, &data_in);
    }

    fn peek(&self, addr: usize) -> u64 {
        self.cell.row(addr)
    }
}
