//! Heap-order repair primitives over a slice
//!
//! The slice is read as a complete binary tree: the children of index `i`
//! live at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`. These functions
//! are shared by the heap itself and by the snapshot iterator, so both drain
//! with exactly the same algorithm.

use crate::compare::Compare;

/// Move the element at `index` up until its parent is not greater
pub(crate) fn sift_up<T, C: Compare<T>>(data: &mut [T], cmp: &C, mut index: usize) {
    while index > 0 {
        let parent = (index - 1) / 2;
        if cmp.compares_lt(&data[index], &data[parent]) {
            data.swap(index, parent);
            index = parent;
        } else {
            break;
        }
    }
}

/// Move the element at `index` down until neither child is smaller
pub(crate) fn sift_down<T, C: Compare<T>>(data: &mut [T], cmp: &C, mut index: usize) {
    let len = data.len();
    loop {
        let left = 2 * index + 1;
        let right = 2 * index + 2;
        let mut smallest = index;

        if left < len && cmp.compares_lt(&data[left], &data[smallest]) {
            smallest = left;
        }
        if right < len && cmp.compares_lt(&data[right], &data[smallest]) {
            smallest = right;
        }

        if smallest != index {
            data.swap(index, smallest);
            index = smallest;
        } else {
            break;
        }
    }
}

/// Establish the heap property over an arbitrary slice in O(n)
///
/// Indices past `len / 2` are leaves, so repair walks from `len / 2` down to
/// the root.
pub(crate) fn heapify<T, C: Compare<T>>(data: &mut [T], cmp: &C) {
    for index in (0..=data.len() / 2).rev() {
        sift_down(data, cmp, index);
    }
}

/// Remove the root of a heap-ordered `Vec`, restoring order afterwards
///
/// The last element takes the root's place before sifting down, so the tree
/// stays complete.
pub(crate) fn pop_root<T, C: Compare<T>>(data: &mut alloc::vec::Vec<T>, cmp: &C) -> Option<T> {
    if data.is_empty() {
        return None;
    }

    let result = data.swap_remove(0);
    if !data.is_empty() {
        sift_down(data, cmp, 0);
    }
    Some(result)
}

/// Returns true if every parent compares less than or equal to its children
pub(crate) fn is_heap<T, C: Compare<T>>(data: &[T], cmp: &C) -> bool {
    (1..data.len()).all(|child| cmp.compares_le(&data[(child - 1) / 2], &data[child]))
}
