use core::num::NonZeroUsize;

const DEFAULT_INITIAL_CAPACITY: usize = 3;
const DEFAULT_INCREMENT: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(n) => n,
    None => panic!("default increment must be non-zero"),
};

/// Capacity configuration of a `DynamicList`.
///
/// A list starts with `initial_capacity` slots and gains `increment` slots
/// every time an append finds it full. Growth is linear, not geometric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    initial_capacity: usize,
    increment: NonZeroUsize,
}

impl GrowthPolicy {
    /// Creates a policy with the given initial capacity and growth increment.
    #[must_use]
    pub const fn new(initial_capacity: usize, increment: NonZeroUsize) -> Self {
        Self {
            initial_capacity,
            increment,
        }
    }

    #[must_use]
    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    #[must_use]
    pub const fn increment(&self) -> NonZeroUsize {
        self.increment
    }

    /// Capacity after one growth step from `capacity`.
    ///
    /// # Panics
    ///
    /// Panics on `usize` overflow, which can only follow an allocation that
    /// would already have failed.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub(crate) fn next_capacity(&self, capacity: usize) -> usize {
        capacity
            .checked_add(self.increment.get())
            .expect("capacity overflow")
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_CAPACITY, DEFAULT_INCREMENT)
    }
}
