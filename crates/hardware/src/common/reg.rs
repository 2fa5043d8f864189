//! Register index and value helpers.
//!
//! Register values are carried as `u64` regardless of the configured width; the
//! helpers here define which bits of that word are meaningful.

/// Index of the hardwired zero register.
pub const ZERO_REG: usize = 0;

/// Widest register the model supports (one `u64` per row).
pub const MAX_REGISTER_WIDTH: u32 = 64;

/// Returns a mask with the low `width` bits set.
///
/// `width` must be in `1..=64`; a width of 64 yields `u64::MAX`.
#[inline]
pub const fn width_mask(width: u32) -> u64 {
    if width >= MAX_REGISTER_WIDTH {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Returns `true` if `value` has no bits set above `width`.
#[inline]
pub const fn fits_width(value: u64, width: u32) -> bool {
    value & !width_mask(width) == 0
}

/// Formats a register index the way logs and dumps print it (`p<idx>`).
pub fn reg_name(idx: usize) -> String {
    format!("p{idx}")
}
