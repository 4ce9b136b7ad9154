//! Comparator-Ordered Binary Heap
//!
//! This crate provides a classic array-backed binary heap whose ordering is
//! supplied by a comparator value rather than by the element type.
//!
//! # Features
//!
//! - **One engine, two orientations**: [`MinHeap`] and [`MaxHeap`] are the same
//!   [`BinaryHeap`] configured with [`Natural`](compare::Natural) or
//!   [`Reversed`](compare::Reversed) order
//! - **Linear-time construction** from an existing collection
//! - **`push_pop`**: combined insert and extract-extreme in a single O(log n) pass
//! - **Snapshot iteration** in extraction order without disturbing the heap
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::BinaryHeap;
//!
//! // Keep the three smallest values seen, using a max-heap of size 3
//! let mut smallest = BinaryHeap::new_max();
//! smallest.extend([42, 7, 19]);
//! for x in [3, 88, 11, 5] {
//!     smallest.push_pop(x);
//! }
//! assert_eq!(smallest.into_sorted_vec(), vec![7, 5, 3]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod binary;
pub mod compare;
pub mod iter;
mod sift;
pub mod traits;

// Re-export the main types for convenience
pub use binary::{BinaryHeap, MaxHeap, MinHeap};
pub use traits::{HeapError, PriorityQueue};
