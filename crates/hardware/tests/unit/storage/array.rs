//! # Array Adapter Tests
//!
//! Observes the one-hot control vectors the adapter hands to its storage macro.

use prfsim_core::common::PortError;
use prfsim_core::config::{StorageKind, WriteCollisionPolicy};
use prfsim_core::core::storage::{ArrayCore, StorageCore};
use prfsim_core::port::WritePort;
use pretty_assertions::assert_eq;

use crate::common::mocks::macro_cell::{ClockRecord, RecordingMacro};

fn adapter(policy: WriteCollisionPolicy) -> ArrayCore<RecordingMacro> {
    ArrayCore::new(RecordingMacro::new(4), 2, policy)
}

#[test]
fn test_output_enable_per_row() {
    let mut core = adapter(WriteCollisionPolicy::LowestIndex);
    core.clock(&[WritePort::new(3, 0x3C)]);

    let mut out = [0u64; 2];
    core.read(&[3, 3], &mut out);
    assert_eq!(out, [0x3C, 0x3C]);
    assert_eq!(*core.cell().last_output_enable.borrow(), vec![0, 0, 0, 0b11]);

    core.read(&[1, 3], &mut out);
    assert_eq!(*core.cell().last_output_enable.borrow(), vec![0, 0b01, 0, 0b10]);
}

#[test]
fn test_write_controls_are_one_hot() {
    let mut core = adapter(WriteCollisionPolicy::LowestIndex);
    core.clock(&[WritePort::new(1, 0xA), WritePort::new(2, 0xB)]);

    assert_eq!(
        core.cell().clocks,
        vec![ClockRecord {
            write_enable: vec![false, true, true, false],
            write_select: vec![0, 0b01, 0b10, 0],
            data_in: vec![0xA, 0xB],
        }]
    );
}

#[test]
fn test_invalid_write_drives_no_select() {
    let mut core = adapter(WriteCollisionPolicy::LowestIndex);
    core.clock(
        &[
            WritePort {
                addr: 2,
                data: 0xB,
                valid: false,
            },
            WritePort::idle(),
        ],
    );
    let rec = &core.cell().clocks[0];
    assert_eq!(rec.write_enable, vec![false; 4]);
    assert_eq!(rec.write_select, vec![0; 4]);
}

#[test]
fn test_lowest_index_isolated_before_macro() {
    let mut core = adapter(WriteCollisionPolicy::LowestIndex);
    let writes = [WritePort::new(3, 0x1), WritePort::new(3, 0x2)];
    assert!(core.check_writes(&writes).is_ok());
    core.clock(&writes);

    assert_eq!(core.cell().clocks[0].write_select[3], 0b01);
    assert_eq!(core.peek(3), 0x1);
}

#[test]
fn test_reject_detects_collision() {
    let core = adapter(WriteCollisionPolicy::Reject);
    let writes = [WritePort::new(1, 0x1), WritePort::new(1, 0x2)];
    assert_eq!(
        core.check_writes(&writes),
        Err(PortError::WriteCollision {
            row: 1,
            ports: 0b11
        })
    );
    assert!(core.check_writes(&[WritePort::new(1, 0x1), WritePort::new(2, 0x2)]).is_ok());
}

#[test]
fn test_adapter_treats_row_zero_as_ordinary() {
    let mut core = adapter(WriteCollisionPolicy::LowestIndex);
    core.clock(&[WritePort::new(0, 0x5A)]);

    assert!(core.cell().clocks[0].write_enable[0]);
    let mut out = [0u64; 2];
    core.read(&[0, 0], &mut out);
    assert_eq!(out, [0x5A, 0x5A]);
}

#[test]
fn test_preloaded_macro_is_readable() {
    let mut cell = RecordingMacro::new(4);
    cell.set(2, 0x99);
    let core = ArrayCore::new(cell, 1, WriteCollisionPolicy::LowestIndex);

    let mut out = [0u64; 1];
    core.read(&[2], &mut out);
    assert_eq!(out, [0x99]);
    assert_eq!(core.kind(), StorageKind::Array);
    assert_eq!(core.read_latency(), 0);
}
