//! Configuration for the register file model.
//!
//! This module defines the configuration structure and enums used to parameterize
//! a register file instance. It provides:
//! 1. **Defaults:** Baseline port counts and widths for an integer register file.
//! 2. **Structures:** `RegisterFileConfig`, fixed at construction and immutable afterwards.
//! 3. **Enums:** Storage variant selection and the array write-collision policy.
//!
//! Configuration is supplied programmatically or deserialized from JSON (trace files
//! embed one). Missing JSON fields fall back to the defaults below, except
//! `bypassable`, which must always match the write port count.

use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;
use crate::common::reg::MAX_REGISTER_WIDTH;

/// Default configuration constants.
mod defaults {
    /// Physical registers in the default (integer) register file.
    pub const NUM_REGISTERS: usize = 128;

    /// Read ports in the default register file (two per issue slot, three slots).
    pub const NUM_READ_PORTS: usize = 6;

    /// Write ports in the default register file (one per execution pipe).
    pub const NUM_WRITE_PORTS: usize = 3;

    /// Register width in bits.
    pub const REGISTER_WIDTH: u32 = 64;

    /// Physical registers in the floating-point preset.
    pub const FP_NUM_REGISTERS: usize = 96;

    /// Read ports in the floating-point preset (FMA needs three operands).
    pub const FP_NUM_READ_PORTS: usize = 3;

    /// Write ports in the floating-point preset.
    pub const FP_NUM_WRITE_PORTS: usize = 2;

    /// Port select vectors are `u64`, one bit per port.
    pub const MAX_PORTS: usize = 64;
}

pub use defaults::MAX_PORTS;

/// Storage core implementation.
///
/// All three variants share the same port contract and differ in read latency
/// and in how the array is organised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum StorageKind {
    /// Zero-latency read: data is returned in the cycle the address is presented.
    #[default]
    #[serde(alias = "Comb", alias = "comb")]
    Combinational,
    /// One-cycle read: the address is registered and data returns the next cycle.
    #[serde(alias = "Seq", alias = "seq")]
    Sequential,
    /// Structural array macro driven by one-hot write-select and output-enable vectors.
    #[serde(alias = "array")]
    Array,
}

/// How the array variant resolves several valid writers targeting one row.
///
/// Only consulted by [`StorageKind::Array`]; the combinational and sequential
/// cores always let the lowest-index writer win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum WriteCollisionPolicy {
    /// Reduce the write-select vector to its lowest set bit before it reaches the macro.
    #[default]
    LowestIndex,
    /// Fail the cycle with [`PortError::WriteCollision`](crate::common::PortError::WriteCollision).
    Reject,
}

/// Register file configuration.
///
/// # Examples
///
/// ```
/// use prfsim_core::config::{RegisterFileConfig, StorageKind};
///
/// let json = r#"{
///     "num_registers": 3,
///     "num_read_ports": 2,
///     "num_write_ports": 2,
///     "register_width": 8,
///     "bypassable": [true, false],
///     "storage": "Sequential"
/// }"#;
///
/// let config: RegisterFileConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.storage, StorageKind::Sequential);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegisterFileConfig {
    /// Number of physical registers, including the zero register.
    #[serde(default = "RegisterFileConfig::default_num_registers")]
    pub num_registers: usize,

    /// Number of independent read ports.
    #[serde(default = "RegisterFileConfig::default_num_read_ports")]
    pub num_read_ports: usize,

    /// Number of independent write ports.
    #[serde(default = "RegisterFileConfig::default_num_write_ports")]
    pub num_write_ports: usize,

    /// Register width in bits (1..=64).
    #[serde(default = "RegisterFileConfig::default_register_width")]
    pub register_width: u32,

    /// Per-write-port bypass eligibility; must have `num_write_ports` entries.
    #[serde(default)]
    pub bypassable: Vec<bool>,

    /// Storage core variant.
    #[serde(default)]
    pub storage: StorageKind,

    /// Multi-writer resolution for the array variant.
    #[serde(default)]
    pub write_collision: WriteCollisionPolicy,
}

impl RegisterFileConfig {
    /// Creates a combinational register file configuration.
    pub fn new(
        num_registers: usize,
        num_read_ports: usize,
        num_write_ports: usize,
        register_width: u32,
        bypassable: Vec<bool>,
    ) -> Self {
        Self {
            num_registers,
            num_read_ports,
            num_write_ports,
            register_width,
            bypassable,
            storage: StorageKind::default(),
            write_collision: WriteCollisionPolicy::default(),
        }
    }

    /// Integer register file preset: 128 x 64-bit, 6 read / 3 write, all writers bypassable.
    pub fn integer() -> Self {
        Self::new(
            defaults::NUM_REGISTERS,
            defaults::NUM_READ_PORTS,
            defaults::NUM_WRITE_PORTS,
            defaults::REGISTER_WIDTH,
            vec![true; defaults::NUM_WRITE_PORTS],
        )
    }

    /// Floating-point register file preset: 96 x 64-bit, 3 read / 2 write, all writers bypassable.
    pub fn floating_point() -> Self {
        Self::new(
            defaults::FP_NUM_REGISTERS,
            defaults::FP_NUM_READ_PORTS,
            defaults::FP_NUM_WRITE_PORTS,
            defaults::REGISTER_WIDTH,
            vec![true; defaults::FP_NUM_WRITE_PORTS],
        )
    }

    /// Selects the storage core variant.
    #[must_use]
    pub fn with_storage(mut self, storage: StorageKind) -> Self {
        self.storage = storage;
        self
    }

    /// Selects the array multi-writer policy.
    #[must_use]
    pub fn with_write_collision(mut self, policy: WriteCollisionPolicy) -> Self {
        self.write_collision = policy;
        self
    }

    /// Returns `true` if any write port may forward to a same-cycle read.
    pub fn any_bypassable(&self) -> bool {
        self.bypassable.iter().any(|&b| b)
    }

    /// Checks the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_registers == 0 {
            return Err(ConfigError::NoRegisters);
        }
        if self.num_read_ports == 0 {
            return Err(ConfigError::NoPorts("read"));
        }
        if self.num_write_ports == 0 {
            return Err(ConfigError::NoPorts("write"));
        }
        if self.num_read_ports > MAX_PORTS {
            return Err(ConfigError::TooManyPorts {
                kind: "read",
                count: self.num_read_ports,
                max: MAX_PORTS,
            });
        }
        if self.num_write_ports > MAX_PORTS {
            return Err(ConfigError::TooManyPorts {
                kind: "write",
                count: self.num_write_ports,
                max: MAX_PORTS,
            });
        }
        if self.register_width == 0 || self.register_width > MAX_REGISTER_WIDTH {
            return Err(ConfigError::RegisterWidth(self.register_width));
        }
        if self.bypassable.len() != self.num_write_ports {
            return Err(ConfigError::BypassableLength {
                expected: self.num_write_ports,
                got: self.bypassable.len(),
            });
        }
        Ok(())
    }

    const fn default_num_registers() -> usize {
        defaults::NUM_REGISTERS
    }

    const fn default_num_read_ports() -> usize {
        defaults::NUM_READ_PORTS
    }

    const fn default_num_write_ports() -> usize {
        defaults::NUM_WRITE_PORTS
    }

    const fn default_register_width() -> u32 {
        defaults::REGISTER_WIDTH
    }
}

impl Default for RegisterFileConfig {
    fn default() -> Self {
        Self::integer()
    }
}
