//! # Common Test Infrastructure

/// Simulator wrapper and logging setup.
pub mod harness;

/// Mock implementations of hardware primitives.
pub mod mocks;
