//! Ordered-drain iterators
//!
//! Both iterators run the heap's own pop algorithm against storage they own,
//! yielding elements in extraction order (ascending under the comparator).
//! [`SortedIter`] works on a private copy so the source heap is never
//! touched; [`IntoSorted`] consumes the heap.

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::compare::Compare;
use crate::sift;

/// Drains a snapshot of a heap in extraction order
///
/// Created by [`BinaryHeap::iter_sorted`](crate::BinaryHeap::iter_sorted).
/// Later changes to the heap are not reflected.
#[derive(Clone)]
pub struct SortedIter<T, C> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T>> SortedIter<T, C> {
    /// `data` must already be heap-ordered under `cmp`
    pub(crate) fn new(data: Vec<T>, cmp: C) -> Self {
        log::trace!("snapshot of {} elements for sorted iteration", data.len());
        SortedIter { data, cmp }
    }
}

impl<T, C: Compare<T>> Iterator for SortedIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        sift::pop_root(&mut self.data, &self.cmp)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.data.len(), Some(self.data.len()))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for SortedIter<T, C> {}

impl<T, C: Compare<T>> FusedIterator for SortedIter<T, C> {}

impl<T, C> fmt::Debug for SortedIter<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedIter").field("remaining", &self.data.len()).finish()
    }
}

/// Consuming iterator over a heap in extraction order
///
/// Created by [`BinaryHeap::into_iter_sorted`](crate::BinaryHeap::into_iter_sorted).
pub struct IntoSorted<T, C> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T>> IntoSorted<T, C> {
    pub(crate) fn new(data: Vec<T>, cmp: C) -> Self {
        IntoSorted { data, cmp }
    }
}

impl<T, C: Compare<T>> Iterator for IntoSorted<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        sift::pop_root(&mut self.data, &self.cmp)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.data.len(), Some(self.data.len()))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoSorted<T, C> {}

impl<T, C: Compare<T>> FusedIterator for IntoSorted<T, C> {}

impl<T, C> fmt::Debug for IntoSorted<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoSorted").field("remaining", &self.data.len()).finish()
    }
}
