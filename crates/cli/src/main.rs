//! Register file simulator CLI.
//!
//! This binary replays stimulus traces through the register file model. It performs:
//! 1. **Trace run:** Load a JSON trace, optionally override the storage variant, and print
//!    the data emerging on every read port each cycle.
//! 2. **Example:** Print a small worked trace that exercises bypass and commit timing.
//!
//! Logging goes through `tracing`; set `RUST_LOG=prfsim_core=trace` to see every cycle.

use clap::{Parser, Subcommand, ValueEnum};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

use prfsim_core::Simulator;
use prfsim_core::config::{StorageKind, WriteCollisionPolicy};
use prfsim_core::sim::Trace;

#[derive(Parser, Debug)]
#[command(
    name = "prfsim",
    author,
    version,
    about = "Multi-ported physical register file simulator",
    long_about = "Replay a JSON stimulus trace through a configured register file.\n\nExamples:\n  prfsim example > demo.json\n  prfsim run demo.json\n  prfsim run demo.json --storage seq --stats"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a trace file and print per-cycle read data.
    Run {
        /// Trace file (JSON).
        path: String,

        /// Override the storage variant named in the trace.
        #[arg(long, value_enum)]
        storage: Option<StorageArg>,

        /// Override the array write-collision policy named in the trace.
        #[arg(long, value_enum)]
        collision: Option<CollisionArg>,

        /// Print register file statistics after the run.
        #[arg(long)]
        stats: bool,

        /// Emit per-cycle output as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in example trace as JSON.
    Example,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StorageArg {
    Comb,
    Seq,
    Array,
}

impl From<StorageArg> for StorageKind {
    fn from(arg: StorageArg) -> Self {
        match arg {
            StorageArg::Comb => Self::Combinational,
            StorageArg::Seq => Self::Sequential,
            StorageArg::Array => Self::Array,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CollisionArg {
    Lowest,
    Reject,
}

impl From<CollisionArg> for WriteCollisionPolicy {
    fn from(arg: CollisionArg) -> Self {
        match arg {
            CollisionArg::Lowest => Self::LowestIndex,
            CollisionArg::Reject => Self::Reject,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            path,
            storage,
            collision,
            stats,
            json,
        } => cmd_run(&path, storage, collision, stats, json),
        Commands::Example => cmd_example(),
    }
}

/// Loads the trace at `path`, builds the simulator from its config plus overrides, and replays it.
///
/// Exits with code 1 on any load, configuration, or port error.
fn cmd_run(
    path: &str,
    storage: Option<StorageArg>,
    collision: Option<CollisionArg>,
    stats: bool,
    json: bool,
) {
    let trace = Trace::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error loading trace {path}: {e}");
        process::exit(1);
    });

    let mut config = trace.config.clone();
    if let Some(s) = storage {
        config = config.with_storage(s.into());
    }
    if let Some(c) = collision {
        config = config.with_write_collision(c.into());
    }

    let mut sim = Simulator::new(config).unwrap_or_else(|e| {
        eprintln!("Error: invalid configuration: {e}");
        process::exit(1);
    });

    let cfg = sim.regfile().config();
    if !json {
        println!(
            "[*] {:?} register file: {} x {}-bit, {}R/{}W, read latency {}, bypass {}",
            sim.regfile().kind(),
            cfg.num_registers,
            cfg.register_width,
            cfg.num_read_ports,
            cfg.num_write_ports,
            sim.regfile().read_latency(),
            if cfg.any_bypassable() { "on" } else { "off" }
        );
    }

    let outputs = sim.run_trace(&trace).unwrap_or_else(|e| {
        eprintln!("\n[!] {e}");
        process::exit(1);
    });
    info!(
        path,
        cycles = outputs.len(),
        storage = ?sim.regfile().kind(),
        "trace finished"
    );

    if json {
        match serde_json::to_string_pretty(&outputs) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error serializing output: {e}");
                process::exit(1);
            }
        }
    } else {
        for out in &outputs {
            println!("{out}");
        }
    }

    sim.regfile().dump();
    if stats {
        sim.stats().print();
    }
}

/// Prints the built-in example trace.
fn cmd_example() {
    match Trace::example().to_json() {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Error serializing example: {e}");
            process::exit(1);
        }
    }
}
