//! Register file core.
//!
//! This module contains the storage variants, the bypass network and the
//! `RegisterFile` that ties them together under the zero-register contract.

/// Write-to-read bypass network.
pub mod bypass;

/// Clocked latch primitive.
pub mod latch;

/// Integrated register file (storage core + bypass + zero register).
pub mod regfile;

/// Storage core trait and the combinational, sequential and array variants.
pub mod storage;

pub use self::bypass::{BypassConflict, BypassNetwork, BypassSelect};
pub use self::regfile::{CycleReport, RegisterFile, WriteCollision};
pub use self::storage::StorageCore;
