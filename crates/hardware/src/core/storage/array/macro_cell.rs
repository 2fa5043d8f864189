//! Storage macro interface.
//!
//! The array variant treats its storage as an opaque macro with only row-oriented
//! controls: a write enable and a one-hot write select per row, one data input per
//! write port, one data output per read port, and a per-row output enable telling
//! the macro which read ports sample that row.

/// Row-oriented storage primitive behind the array variant.
pub trait StorageMacro {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Drives each read port's output with the row whose output-enable vector has
    /// that port's bit set. `output_enable` has one entry per row.
    fn drive_outputs(&self, output_enable: &[u64], data_out: &mut [u64]);

    /// Clock edge. Every row with `write_enable[r]` latches `data_in[p]`, where `p` is
    /// the single bit set in `write_select[r]`.
    fn clock(&mut self, write_enable: &[bool], write_select: &[u64], data_in: &[u64]);

    /// Current contents of `row`.
    fn row(&self, row: usize) -> u64;
}

/// Plain indexed-array implementation of [`StorageMacro`].
#[derive(Clone, Debug)]
pub struct RowArray {
    cells: Vec<u64>,
}

impl RowArray {
    /// Creates a macro of `rows` rows, all zero.
    pub fn new(rows: usize) -> Self {
        Self {
            cells: vec![0; rows],
        }
    }
}

impl StorageMacro for RowArray {
    fn rows(&self) -> usize {
        self.cells.len()
    }

    fn drive_outputs(&self, output_enable: &[u64], data_out: &mut [u64]) {
        for (&cell, &oe) in self.cells.iter().zip(output_enable) {
            let mut ports = oe;
            while ports != 0 {
                data_out[ports.trailing_zeros() as usize] = cell;
                ports &= ports - 1;
            }
        }
    }

    fn clock(&mut self, write_enable: &[bool], write_select: &[u64], data_in: &[u64]) {
        for ((cell, &we), &sel) in self.cells.iter_mut().zip(write_enable).zip(write_select) {
            if we {
                debug_assert_eq!(sel.count_ones(), 1, "write select must be one-hot");
                *cell = data_in[sel.trailing_zeros() as usize];
            }
        }
    }

    fn row(&self, row: usize) -> u64 {
        self.cells[row]
    }
}
