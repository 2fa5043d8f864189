//! # Unit Components
//!
//! This module serves as the central hub for the register file component tests.
//! It organizes tests for configuration, ports, the bypass network, every storage
//! variant, the integrated register file and the simulation driver.





/// Unit tests for the simulator and trace replay.
pub mod sim;

/// Unit tests for register file statistics.
pub mod stats;

/// Unit tests for the storage cores driven directly.
pub mod storage;
