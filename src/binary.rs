//! Comparator-ordered binary heap
//!
//! An array-backed binary heap whose order comes from a [`Compare`] value
//! instead of the element type. Min- and max-orientation are the same engine
//! configured with [`Natural`] or [`Reversed`]:
//!
//! - [`MinHeap<T>`]: smallest element first
//! - [`MaxHeap<T>`]: largest element first
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `push`             | O(log n)   |
//! | `pop`              | O(log n)   |
//! | `push_pop`         | O(log n)   |
//! | `peek`             | O(1)       |
//! | `from_vec_by`      | O(n)       |
//! | `iter_sorted`      | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::{BinaryHeap, MaxHeap};
//!
//! let mut min = BinaryHeap::new_min();
//! min.push(3);
//! min.push(1);
//! min.push(2);
//! assert_eq!(min.pop(), Some(1));
//!
//! let mut max: MaxHeap<i32> = [3, 1, 2].into_iter().collect();
//! assert_eq!(max.pop(), Some(3));
//! assert_eq!(max.pop(), Some(2));
//! assert_eq!(max.pop(), Some(1));
//! assert_eq!(max.pop(), None);
//! ```

use alloc::vec::Vec;
use core::fmt;

use crate::compare::{Compare, Natural, Reversed};
use crate::iter::{IntoSorted, SortedIter};
use crate::sift;
use crate::traits::{HeapError, PriorityQueue};

/// A binary heap ordered by the comparator `C`
///
/// The element at the root is always the minimum under `C`. With the default
/// [`Natural`] comparator this is a min-heap; see [`MaxHeap`] for the
/// reversed orientation.
///
/// It is a logic error for an item to be modified in such a way that its
/// ordering relative to any other item, as determined by `C`, changes while
/// it is in the heap.
#[derive(Clone)]
pub struct BinaryHeap<T, C = Natural> {
    data: Vec<T>,
    cmp: C,
}

/// A heap yielding its smallest element first under `C`
pub type MinHeap<T, C = Natural> = BinaryHeap<T, C>;

/// A heap yielding its largest element first under `C`
pub type MaxHeap<T, C = Natural> = BinaryHeap<T, Reversed<C>>;

impl<T, C: Compare<T> + Default> BinaryHeap<T, C> {
    /// Creates an empty heap using the comparator's default value
    ///
    /// The comparator type usually comes from an annotation; see
    /// [`new_min`](BinaryHeap::new_min) and [`new_max`](BinaryHeap::new_max)
    /// for the natural orientations without one.
    ///
    /// ```rust
    /// use comparator_heap::MaxHeap;
    ///
    /// let mut heap: MaxHeap<i32> = MaxHeap::new();
    /// heap.push(1);
    /// heap.push(4);
    /// assert_eq!(heap.peek(), Some(&4));
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }

    /// Creates an empty heap with room for at least `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, C::default())
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    ///
    /// ```rust
    /// use comparator_heap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// heap.push("three");
    /// heap.push("a");
    /// heap.push("to");
    /// assert_eq!(heap.pop(), Some("a"));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        BinaryHeap {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap from `data` in linear time
    ///
    /// ```rust
    /// use comparator_heap::BinaryHeap;
    /// use comparator_heap::compare::{Natural, Reversed};
    ///
    /// let mut heap = BinaryHeap::from_vec_by(vec![2, 9, 4], Reversed::new(Natural));
    /// assert_eq!(heap.pop(), Some(9));
    /// ```
    pub fn from_vec_by(mut data: Vec<T>, cmp: C) -> Self {
        log::trace!("heapifying {} elements", data.len());
        sift::heapify(&mut data, &cmp);
        BinaryHeap { data, cmp }
    }

    /// Builds a heap from any iterator in linear time
    pub fn from_iter_by<I: IntoIterator<Item = T>>(iter: I, cmp: C) -> Self {
        Self::from_vec_by(iter.into_iter().collect(), cmp)
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much spare capacity as possible
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Drops all elements, keeping the comparator and allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The backing storage in heap order (not sorted)
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the extreme element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts an element
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        let last = self.data.len() - 1;
        sift::sift_up(&mut self.data, &self.cmp, last);
    }

    /// Removes and returns the extreme element, or `None` if the heap is empty
    pub fn pop(&mut self) -> Option<T> {
        sift::pop_root(&mut self.data, &self.cmp)
    }

    /// Removes and returns the extreme element, failing on an empty heap
    ///
    /// ```rust
    /// use comparator_heap::{HeapError, MinHeap};
    ///
    /// let mut heap: MinHeap<i32> = MinHeap::new();
    /// assert_eq!(heap.try_pop(), Err(HeapError::Empty));
    /// heap.push(1);
    /// assert_eq!(heap.try_pop(), Ok(1));
    /// ```
    pub fn try_pop(&mut self) -> Result<T, HeapError> {
        self.pop().ok_or(HeapError::Empty)
    }

    /// Pushes `item`, then pops the extreme element, in one sift
    ///
    /// If the heap is empty, or `item` does not order strictly after the
    /// current root, `item` is handed straight back and the heap is not
    /// touched. Otherwise `item` replaces the root and the old root is
    /// returned, so the heap never grows past its current size.
    ///
    /// ```rust
    /// use comparator_heap::MinHeap;
    ///
    /// let mut heap: MinHeap<i32> = [5, 7].into_iter().collect();
    /// assert_eq!(heap.push_pop(1), 1);
    /// assert_eq!(heap.push_pop(6), 5);
    /// assert_eq!(heap.into_sorted_vec(), vec![6, 7]);
    /// ```
    pub fn push_pop(&mut self, mut item: T) -> T {
        let replace = match self.data.first() {
            Some(root) => self.cmp.compares_lt(root, &item),
            None => false,
        };
        if !replace {
            return item;
        }

        core::mem::swap(&mut self.data[0], &mut item);
        sift::sift_down(&mut self.data, &self.cmp, 0);
        item
    }

    /// Pushes an optional item, rejecting `None`
    ///
    /// ```rust
    /// use comparator_heap::{HeapError, MinHeap};
    ///
    /// let mut heap: MinHeap<&str> = MinHeap::new();
    /// assert_eq!(heap.push_checked(None), Err(HeapError::AbsentItem));
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.push_checked(Some("x")), Ok(()));
    /// ```
    pub fn push_checked(&mut self, item: Option<T>) -> Result<(), HeapError> {
        let item = item.ok_or(HeapError::AbsentItem)?;
        self.push(item);
        Ok(())
    }

    /// [`push_pop`](Self::push_pop) for an optional item, rejecting `None`
    pub fn push_pop_checked(&mut self, item: Option<T>) -> Result<T, HeapError> {
        let item = item.ok_or(HeapError::AbsentItem)?;
        Ok(self.push_pop(item))
    }

    /// Returns true if the storage satisfies the heap property
    ///
    /// Always true unless the comparator is inconsistent.
    pub fn is_heap(&self) -> bool {
        sift::is_heap(&self.data, &self.cmp)
    }

    /// Consumes the heap, returning its storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in extraction order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_sorted().collect()
    }

    /// Consumes the heap, yielding its elements in extraction order
    pub fn into_iter_sorted(self) -> IntoSorted<T, C> {
        IntoSorted::new(self.data, self.cmp)
    }
}

impl<T: Clone, C: Compare<T> + Clone> BinaryHeap<T, C> {
    /// Iterates a snapshot of the heap in extraction order
    ///
    /// The storage is copied once; the heap itself is never modified, and
    /// later changes to it are not seen by the iterator.
    ///
    /// ```rust
    /// use comparator_heap::MinHeap;
    ///
    /// let heap: MinHeap<i32> = [4, 1, 3, 2].into_iter().collect();
    /// let sorted: Vec<_> = heap.iter_sorted().collect();
    /// assert_eq!(sorted, vec![1, 2, 3, 4]);
    /// assert_eq!(heap.len(), 4);
    /// ```
    pub fn iter_sorted(&self) -> SortedIter<T, C> {
        SortedIter::new(self.data.clone(), self.cmp.clone())
    }
}

impl<T: Ord> BinaryHeap<T, Natural> {
    /// Creates an empty min-heap under `T`'s natural order
    pub fn new_min() -> Self {
        Self::new()
    }
}

impl<T: Ord> BinaryHeap<T, Reversed<Natural>> {
    /// Creates an empty max-heap under `T`'s natural order
    ///
    /// ```rust
    /// use comparator_heap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::new_max();
    /// heap.push(2);
    /// heap.push(7);
    /// assert_eq!(heap.pop(), Some(7));
    /// ```
    pub fn new_max() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, Reversed<C>> {
    /// Creates an empty heap yielding the largest element under `cmp` first
    ///
    /// ```rust
    /// use comparator_heap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::max_by(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
    /// heap.push((1, 'a'));
    /// heap.push((3, 'c'));
    /// heap.push((2, 'b'));
    /// assert_eq!(heap.pop(), Some((3, 'c')));
    /// ```
    pub fn max_by(cmp: C) -> Self {
        Self::with_comparator(Reversed::new(cmp))
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap yielding the smallest element under `cmp` first
    pub fn min_by(cmp: C) -> Self {
        Self::with_comparator(cmp)
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for BinaryHeap<T, C> {
    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn push(&mut self, item: T) {
        BinaryHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        BinaryHeap::pop(self)
    }

    fn push_pop(&mut self, item: T) -> T {
        BinaryHeap::push_pop(self, item)
    }
}

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C: fmt::Debug> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("data", &self.data)
            .field("cmp", &self.cmp)
            .finish()
    }
}

impl<T, C: Compare<T> + Default> From<Vec<T>> for BinaryHeap<T, C> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec_by(data, C::default())
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_by(iter, C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Clone, C: Compare<T> + Clone> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = T;
    type IntoIter = SortedIter<T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_sorted()
    }
}

impl<T, C: Compare<T>> IntoIterator for BinaryHeap<T, C> {
    type Item = T;
    type IntoIter = IntoSorted<T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_iter_sorted()
    }
}
