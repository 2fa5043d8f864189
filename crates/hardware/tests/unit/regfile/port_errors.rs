//! # Port Contract Tests
//!
//! A malformed cycle is rejected before any state changes.

use prfsim_core::RegisterFile;
use prfsim_core::common::PortError;
use prfsim_core::config::{RegisterFileConfig, StorageKind};
use prfsim_core::port::{ReadPort, WritePort};
use rstest::rstest;

use crate::common::harness::init_tracing;

/// 8-bit, 4 registers, 2 read / 2 write ports.
fn regfile(storage: StorageKind) -> RegisterFile {
    init_tracing();
    RegisterFile::new(RegisterFileConfig::new(4, 2, 2, 8, vec![true, true]).with_storage(storage))
        .unwrap()
}

#[rstest]
#[case::too_few_reads(
    vec![0],
    vec![WritePort::idle(), WritePort::idle()],
    PortError::ReadPortCount { expected: 2, got: 1 }
)]
#[case::too_many_writes(
    vec![0, 0],
    vec![WritePort::idle(); 3],
    PortError::WritePortCount { expected: 2, got: 3 }
)]
#[case::read_out_of_range(
    vec![1, 4],
    vec![WritePort::idle(), WritePort::idle()],
    PortError::ReadAddressOutOfRange { port: 1, addr: 4, num_registers: 4 }
)]
#[case::write_out_of_range(
    vec![0, 0],
    vec![WritePort::idle(), WritePort::new(9, 1)],
    PortError::WriteAddressOutOfRange { port: 1, addr: 9, num_registers: 4 }
)]
#[case::data_too_wide(
    vec![0, 0],
    vec![WritePort::new(1, 0x100), WritePort::idle()],
    PortError::DataTooWide { port: 0, data: 0x100, width: 8 }
)]
fn test_malformed_cycle_rejected(
    #[case] read_addrs: Vec<usize>,
    #[case] writes: Vec<WritePort>,
    #[case] expected: PortError,
) {
    for storage in [StorageKind::Combinational, StorageKind::Sequential, StorageKind::Array] {
        let mut rf = regfile(storage);
        let mut reads: Vec<ReadPort> = read_addrs
            .iter()
            .map(|&a| ReadPort {
                addr: a,
                data: 0xEE,
            })
            .collect();

        assert_eq!(rf.tick(&mut reads, &writes), Err(expected.clone()), "{storage:?}");
        assert!(reads.iter().all(|r| r.data == 0xEE), "read data not driven");
        assert_eq!(rf.stats().cycles, 0);
    }
}

#[rstest]
#[case::combinational(StorageKind::Combinational)]
#[case::sequential(StorageKind::Sequential)]
#[case::array(StorageKind::Array)]
fn test_failed_cycle_leaves_state_unchanged(#[case] storage: StorageKind) {
    let mut rf = regfile(storage);
    let mut reads = [ReadPort::new(0), ReadPort::new(0)];
    let _ = rf
        .tick(&mut reads, &[WritePort::new(2, 0x22), WritePort::idle()])
        .unwrap();

    // A good write to p1 bundled with a bad read address.
    let mut bad = [ReadPort::new(2), ReadPort::new(7)];
    assert!(rf.tick(&mut bad, &[WritePort::new(1, 0x11), WritePort::idle()]).is_err());
    assert_eq!(rf.peek(1), Some(0));
    assert_eq!(rf.stats().cycles, 1);

    // The sequential latches did not capture p2 either: p0 (or p3) emerges, not p2.
    let mut reads = [ReadPort::new(3), ReadPort::new(3)];
    let _ = rf
        .tick(&mut reads, &[WritePort::idle(), WritePort::idle()])
        .unwrap();
    assert_eq!(reads[0].data, 0);
}

#[test]
fn test_invalid_write_skips_range_checks() {
    let mut rf = regfile(StorageKind::Combinational);
    let mut reads = [ReadPort::new(0), ReadPort::new(0)];
    let writes = [
        WritePort {
            addr: 99,
            data: u64::MAX,
            valid: false,
        },
        WritePort::idle(),
    ];
    assert!(rf.tick(&mut reads, &writes).is_ok());
}

#[test]
fn test_full_width_value_accepted() {
    let mut rf = regfile(StorageKind::Combinational);
    let mut reads = [ReadPort::new(3), ReadPort::new(0)];
    let _ = rf
        .tick(&mut reads, &[WritePort::new(3, 0xFF), WritePort::idle()])
        .unwrap();
    assert_eq!(reads[0].data, 0xFF);
}
