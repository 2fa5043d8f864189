//! Common types shared across the register file model.
//!
//! This module provides the fundamental building blocks used by every storage
//! variant. It includes:
//! 1. **Error Handling:** Configuration and port-protocol error types.
//! 2. **Register Helpers:** The zero-register index and width masking.

/// Error types for configuration and per-cycle port violations.
pub mod error;

/// Register index and value helpers.
pub mod reg;

pub use error::{ConfigError, PortError, SimError};
pub use reg::{ZERO_REG, fits_width, width_mask};
