//! # Storage Core Tests
//!
//! Drives each storage core through the `StorageCore` interface directly,
//! without the zero-register masking and bypass added by `RegisterFile`.

/// Structural array adapter driven through a recording macro.
pub mod array;

/// Combinational core.
pub mod comb;
