//! # Combinational Core Tests

use prfsim_core::config::StorageKind;
use prfsim_core::core::storage::{CombCore, StorageCore};
use prfsim_core::port::WritePort;

#[test]
fn test_read_sees_start_of_cycle_state() {
    let mut core = CombCore::new(4);
    let mut out = [0u64; 1];

    core.read(&[2], &mut out);
    assert_eq!(out, [0]);
    core.clock(&[WritePort::new(2, 0x77)]);

    core.read(&[2], &mut out);
    assert_eq!(out, [0x77]);
}

#[test]
fn test_emerging_address_is_requested_address() {
    let core = CombCore::new(4);
    let mut emerging = [0usize; 3];
    core.emerging_addrs(&[3, 1, 2], &mut emerging);
    assert_eq!(emerging, [3, 1, 2]);
    assert_eq!(core.read_latency(), 0);
    assert_eq!(core.kind(), StorageKind::Combinational);
}

#[test]
fn test_lowest_write_port_wins() {
    let mut core = CombCore::new(4);
    core.clock(
        &[WritePort::new(1, 0x10), WritePort::new(1, 0x20), WritePort::new(1, 0x30)],
    );
    assert_eq!(core.read_reg(1), 0x10);
}

#[test]
fn test_invalid_and_zero_writes_skipped() {
    let mut core = CombCore::new(4);
    core.clock(
        &[
            WritePort::new(0, 0x10),
            WritePort {
                addr: 3,
                data: 0x20,
                valid: false,
            },
        ],
    );
    assert_eq!(core.peek(0), 0);
    assert_eq!(core.peek(3), 0);
}
