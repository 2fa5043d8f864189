//! One-hot decode and per-row select vectors.
//!
//! Pure functions translating port-oriented addresses into the row-oriented control
//! signals a storage macro consumes. Per-row vectors are `u64` with one bit per
//! port (bit `p` is port `p`), so at most 64 ports are supported.

use crate::port::WritePort;

/// Builds the per-row output-enable vectors.
///
/// Bit `p` of `oe[r]` is set when read port `p` addresses row `r` this cycle.
/// An address at or beyond `rows` decodes to no row.
pub fn output_enable(read_addrs: &[usize], rows: usize) -> Vec<u64> {
    let mut oe = vec![0u64; rows];
    for (port, &addr) in read_addrs.iter().enumerate() {
        if let Some(row) = oe.get_mut(addr) {
            *row |= 1u64 << port;
        }
    }
    oe
}

/// Builds the per-row write-select vectors.
///
/// Bit `w` of `ws[r]` is set when write port `w` is valid and addresses row `r`.
/// A row can carry several bits; resolving that is left to the caller.
pub fn write_select(writes: &[WritePort], rows: usize) -> Vec<u64> {
    let mut ws = vec![0u64; rows];
    for (port, w) in writes.iter().enumerate().filter(|(_, w)| w.valid) {
        if let Some(row) = ws.get_mut(w.addr) {
            *row |= 1u64 << port;
        }
    }
    ws
}

/// Per-row write enables: a row is written if any port selects it.
pub fn write_enable(write_select: &[u64]) -> Vec<bool> {
    write_select.iter().map(|&sel| sel != 0).collect()
}

/// Clears all but the lowest set bit of `mask`.
#[inline]
pub const fn isolate_lowest(mask: u64) -> u64 {
    mask & mask.wrapping_neg()
}

/// Rows selected by more than one write port, with their select vectors.
pub fn collisions(write_select: &[u64]) -> impl Iterator<Item = (usize, u64)> + '_ {
    write_select
        .iter()
        .enumerate()
        .filter(|&(_, &sel)| sel.count_ones() > 1)
        .map(|(row, &sel)| (row, sel))
}
