use alloc::boxed::Box;
use core::fmt;
use core::ops::Index;

use tracing::trace;

use crate::error::DynamicListError;
use crate::growth::GrowthPolicy;
use crate::iter::Iter;

/// A growable list that adds a fixed number of slots whenever it runs full
///
/// Slots `[0, len)` always hold an element; slots `[len, capacity)` are empty.
#[derive(Clone)]
pub struct DynamicList<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    policy: GrowthPolicy,
}

fn empty_slots<T>(count: usize) -> Box<[Option<T>]> {
    (0..count).map(|_| None).collect()
}

impl<T> DynamicList<T> {
    /// Creates an empty list with the default policy: 3 slots, growing by 3.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Creates an empty list that allocates and grows according to `policy`.
    #[must_use]
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            slots: empty_slots(policy.initial_capacity()),
            len: 0,
            policy,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots. Never decreases.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    fn live_slots(&self) -> &[Option<T>] {
        &self.slots[..self.len]
    }

    fn out_of_range(&self, index: usize) -> DynamicListError {
        DynamicListError::OutOfRange {
            index,
            length: self.len,
        }
    }

    /// Moves every element into a buffer `increment` slots larger and
    /// replaces the old buffer with it.
    fn grow(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = self.policy.next_capacity(old_capacity);

        let mut slots = empty_slots(new_capacity);
        for (new_slot, old_slot) in slots.iter_mut().zip(self.slots.iter_mut()) {
            *new_slot = old_slot.take();
        }
        self.slots = slots;

        trace!(old_capacity, new_capacity, length = self.len, "grew dynamic list");
    }

    /// Appends an element to the end of the list, growing storage if full.
    ///
    /// # Panics
    ///
    /// Panics if the capacity would overflow `usize`.
    #[allow(clippy::expect_used)]
    pub fn append(&mut self, item: T) {
        if self.is_full() {
            self.grow();
        }

        *self
            .slots
            .get_mut(self.len)
            .expect("Free slot ensured by grow") = Some(item);
        self.len += 1;
    }

    /// Gets the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynamicListError::OutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, DynamicListError> {
        self.live_slots()
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Gets a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynamicListError::OutOfRange` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, DynamicListError> {
        let length = self.len;
        self.slots[..length]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or_else(|| DynamicListError::OutOfRange { index, length })
    }

    /// Removes the first element for which `predicate` returns `true`.
    ///
    /// Later elements shift one position left and the vacated trailing slot
    /// is emptied. Returns the removed element, or `None` (leaving the list
    /// untouched) if nothing matched.
    pub fn remove_by<F>(&mut self, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self
            .live_slots()
            .iter()
            .position(|slot| slot.as_ref().is_some_and(&mut predicate))?;

        let removed = self.slots[index].take();
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;

        trace!(index, length = self.len, "removed element from dynamic list");
        removed
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Returns an iterator over the elements in order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.live_slots())
    }
}

impl<T: PartialEq> DynamicList<T> {
    /// Removes the first element equal to `item`.
    ///
    /// Removing a value that is not present is a no-op and returns `None`.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        self.remove_by(|candidate| candidate == item)
    }

    #[must_use]
    pub fn position(&self, item: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == item)
    }

    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }
}

impl<T> Default for DynamicList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Capacity and policy are storage details, not part of the value.
impl<T: PartialEq> PartialEq for DynamicList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicList<T> {}

impl<T> Index<usize> for DynamicList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> Extend<T> for DynamicList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
