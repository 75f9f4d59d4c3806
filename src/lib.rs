#![no_std]

//! `DynamicList`: a growable, ordered, index-addressable list.
//!
//! `DynamicList<T>` stores its elements in a slot buffer that grows by a fixed
//! increment whenever an append finds it full. Elements are densely packed at
//! the front of the buffer; the trailing slots are empty. Capacity never
//! shrinks.
//!
//! This crate is `no_std` compatible and needs only `alloc`.
//!
//! # Growth
//!
//! A new list has 3 slots and gains 3 more each time it runs full. Growth
//! allocates a larger buffer, moves every element into it in order, and
//! replaces the old buffer. Use [`GrowthPolicy`] to pick other numbers:
//!
//! ```
//! # use core::num::NonZeroUsize;
//! # use dynlist::{DynamicList, GrowthPolicy};
//! let mut list = DynamicList::new();
//! assert_eq!(list.capacity(), 3);
//!
//! for i in 1..=7 {
//!     list.append(i);
//! }
//! assert_eq!(list.capacity(), 9);
//! assert_eq!(list.get(6), Ok(&7));
//!
//! let policy = GrowthPolicy::new(0, NonZeroUsize::new(16).unwrap());
//! let mut wide = DynamicList::with_policy(policy);
//! wide.append("x");
//! assert_eq!(wide.capacity(), 16);
//! ```
//!
//! ## Time Complexity
//! - `append()`: amortized O(1), O(capacity) on a growth step
//! - `get()`, `get_mut()`: O(1)
//! - `remove()`, `remove_by()`: O(n) - one scan plus one shift
//! - `clear()`: O(n) - drops the elements
//!
//! # Indexed Access
//!
//! `get()` is bounds-checked and reports the offending index:
//!
//! ```
//! # use dynlist::{DynamicList, DynamicListError};
//! let mut list = DynamicList::new();
//! list.append("first");
//!
//! assert_eq!(list.get(0), Ok(&"first"));
//! assert_eq!(
//!     list.get(1),
//!     Err(DynamicListError::OutOfRange { index: 1, length: 1 })
//! );
//! ```
//!
//! # Removal
//!
//! `remove()` drops the first element equal to the argument and closes the
//! gap. Removing something that is not there is a no-op, not an error:
//!
//! ```
//! # use dynlist::DynamicList;
//! let mut list: DynamicList<char> = "abc".chars().collect();
//!
//! assert_eq!(list.remove(&'b'), Some('b'));
//! assert_eq!(list.iter().collect::<String>(), "ac");
//!
//! assert_eq!(list.remove(&'z'), None);
//! assert_eq!(list.len(), 2);
//! ```
//!
//! Element types without `PartialEq` use `remove_by()` with a predicate.
//!
//! # Logging
//!
//! Growth steps and removals are reported as `tracing` events at `TRACE`
//! level. The crate never installs a subscriber.

extern crate alloc;

mod error;
mod growth;
mod iter;
mod list;

pub use error::DynamicListError;
pub use growth::GrowthPolicy;
pub use iter::Iter;
pub use list::DynamicList;
