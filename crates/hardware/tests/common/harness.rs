use prfsim_core::Simulator;
use prfsim_core::config::{RegisterFileConfig, StorageKind};
use prfsim_core::port::WritePort;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 8-bit, 3 registers, 2 read / 2 write ports, only write port 0 bypassable.
pub fn example_config(storage: StorageKind) -> RegisterFileConfig {
    RegisterFileConfig::new(3, 2, 2, 8, vec![true, false]).with_storage(storage)
}

/// 64-bit, 16 registers, 2 read ports, one write port per `bypassable` entry.
pub fn small_config(storage: StorageKind, bypassable: Vec<bool>) -> RegisterFileConfig {
    RegisterFileConfig::new(16, 2, bypassable.len(), 64, bypassable).with_storage(storage)
}

/// Simulator plus helpers that pad idle write ports and unwrap each cycle.
#[derive(Debug)]
pub struct TestContext {
    /// Simulator under test.
    pub sim: Simulator,
}

impl TestContext {
    /// Builds the simulator from `config` and installs logging.
    pub fn new(config: RegisterFileConfig) -> Self {
        init_tracing();
        Self {
            sim: Simulator::new(config).unwrap(),
        }
    }

    /// Context over [`example_config`].
    pub fn example(storage: StorageKind) -> Self {
        Self::new(example_config(storage))
    }

    /// Context over [`small_config`].
    pub fn small(storage: StorageKind, bypassable: Vec<bool>) -> Self {
        Self::new(small_config(storage, bypassable))
    }

    /// Configured read port count.
    pub fn read_ports(&self) -> usize {
        self.sim.regfile().config().num_read_ports
    }

    /// Extends `writes` with idle ports up to the configured write port count.
    pub fn pad(&self, writes: &[WritePort]) -> Vec<WritePort> {
        let mut padded = writes.to_vec();
        padded.resize(self.sim.regfile().config().num_write_ports, WritePort::idle());
        padded
    }

    /// Runs one cycle; `writes` is padded with idle ports.
    pub fn cycle(&mut self, reads: &[usize], writes: &[WritePort]) -> Vec<u64> {
        let padded = self.pad(writes);
        self.sim.tick(reads, &padded).unwrap()
    }

    /// Runs one cycle with no writes.
    pub fn read(&mut self, reads: &[usize]) -> Vec<u64> {
        self.cycle(reads, &[])
    }

    /// Holds `addr` on every read port until its data has emerged, with no writes.
    pub fn settled_read(&mut self, addr: usize) -> u64 {
        let reads = vec![addr; self.read_ports()];
        let mut out = Vec::new();
        for _ in 0..=self.sim.regfile().read_latency() {
            out = self.read(&reads);
        }
        out[0]
    }
}
