//! Common traits for heap data structures
//!
//! - [`PriorityQueue`]: the operations every heap in this crate supports
//! - [`HeapError`]: contract violations reported by the checked entry points
//!
//! The infallible methods follow `std::collections::BinaryHeap` and return
//! `Option`. The `try_*` / `*_checked` variants report the same conditions as
//! a [`HeapError`] so callers bridging nullable values get an explicit error.

use core::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements to extract
    Empty,
    /// An absent (`None`) item was offered to the heap
    AbsentItem,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
            HeapError::AbsentItem => write!(f, "item must not be absent"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HeapError {}

/// Base trait for priority queues ordered by a comparator
///
/// The "extreme" element is the minimum under the queue's comparator: the
/// smallest value for a min-oriented heap, the largest for a max-oriented one.
///
/// # Example
///
/// ```rust
/// use comparator_heap::{BinaryHeap, PriorityQueue};
///
/// fn drain<Q: PriorityQueue<i32>>(queue: &mut Q) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Some(x) = queue.pop() {
///         out.push(x);
///     }
///     out
/// }
///
/// let mut heap = BinaryHeap::new_min();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
/// assert_eq!(drain(&mut heap), vec![1, 2, 3]);
/// ```
pub trait PriorityQueue<T> {
    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized
    fn push(&mut self, item: T);

    /// Returns the extreme element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the extreme element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;

    /// Pushes `item` and then pops the extreme element, in a single pass
    ///
    /// Returns `item` itself, leaving the queue untouched, when it would be
    /// popped straight back out.
    fn push_pop(&mut self, item: T) -> T;

    /// Like [`pop`](Self::pop), but reports an empty queue as [`HeapError::Empty`]
    fn try_pop(&mut self) -> Result<T, HeapError> {
        self.pop().ok_or(HeapError::Empty)
    }

    /// Pushes an optional item, rejecting `None` with [`HeapError::AbsentItem`]
    ///
    /// The queue is unchanged when an error is returned.
    fn push_checked(&mut self, item: Option<T>) -> Result<(), HeapError> {
        let item = item.ok_or(HeapError::AbsentItem)?;
        self.push(item);
        Ok(())
    }

    /// Push-pop for an optional item, rejecting `None` with [`HeapError::AbsentItem`]
    fn push_pop_checked(&mut self, item: Option<T>) -> Result<T, HeapError> {
        let item = item.ok_or(HeapError::AbsentItem)?;
        Ok(self.push_pop(item))
    }
}
