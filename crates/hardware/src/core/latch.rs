//! Clocked latch primitive.
//!
//! A `Latch` holds the value visible during the current cycle and, optionally, the
//! value driven for the next one. `update` models the clock edge.

/// An edge-triggered register holding a `Copy` value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Latch<T: Copy> {
    data: T,
    next: Option<T>,
}

impl<T: Copy> Latch<T> {
    /// Creates a latch with reset value `init`.
    pub const fn new(init: T) -> Self {
        Self {
            data: init,
            next: None,
        }
    }

    /// Drives the input; takes effect at the next `update`.
    #[inline]
    pub fn drive(&mut self, val: T) {
        self.next = Some(val);
    }

    /// Samples the value visible this cycle.
    #[inline]
    pub const fn sample(&self) -> T {
        self.data
    }

    /// Clock edge. An undriven latch holds its value.
    #[inline]
    pub fn update(&mut self) {
        if let Some(next) = self.next.take() {
            self.data = next;
        }
    }
}
