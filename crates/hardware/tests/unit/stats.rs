//! # Statistics Tests
//!
//! Verifies that the register file counters track traffic, bypass activity,
//! dropped writes and collisions.

use prfsim_core::config::StorageKind;
use prfsim_core::port::WritePort;
use prfsim_core::stats::RegFileStats;
use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;

#[test]
fn test_counters_after_mixed_traffic() {
    let mut ctx = TestContext::small(StorageKind::Combinational, vec![true, true, false]);

    let _ = ctx.cycle(
        &[3, 0],
        &[WritePort::new(3, 1), WritePort::new(0, 2), WritePort::idle()],
    );
    let _ = ctx.cycle(
        &[5, 5],
        &[WritePort::new(5, 1), WritePort::new(5, 2), WritePort::new(6, 3)],
    );
    let _ = ctx.read(&[6, 0]);

    assert_eq!(
        ctx.sim.stats().clone(),
        RegFileStats {
            cycles: 3,
            reads: 6,
            bypass_hits: 3,
            bypass_conflicts: 2,
            writes_committed: 4,
            writes_to_zero: 1,
            writes_invalid: 4,
            write_collisions: 1,
        }
    );
}

#[test]
fn test_failed_cycle_not_counted() {
    let mut ctx = TestContext::small(StorageKind::Sequential, vec![true]);
    assert!(ctx.sim.tick(&[0], &[WritePort::idle()]).is_err());
    assert_eq!(ctx.sim.stats(), &RegFileStats::default());
    assert_eq!(ctx.sim.cycle(), 0);
}

#[test]
fn test_stats_serialize() {
    let stats = RegFileStats {
        cycles: 2,
        ..Default::default()
    };
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["cycles"], 2);
    assert_eq!(json["bypass_hits"], 0);
}
