//! Comparator abstraction
//!
//! A heap in this crate never asks its elements to be `Ord`. Every ordering
//! decision goes through a [`Compare`] value owned by the heap, which keeps
//! min- and max-orientation a matter of configuration:
//!
//! - [`Natural`]: the element type's own `Ord` order
//! - [`Reversed`]: any comparator with its arguments swapped
//! - any `Fn(&T, &T) -> Ordering` closure or function
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::compare::{Compare, Natural, Reversed};
//! use std::cmp::Ordering;
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed::new(Natural).compare(&1, &2), Ordering::Greater);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
//! ```

use core::cmp::Ordering;

/// A total order over `T`
///
/// Implementations must be consistent for the lifetime of a heap: comparing
/// the same two values must always give the same answer, otherwise the heap
/// property cannot be maintained. Violating this is a logic error but not
/// undefined behavior.
pub trait Compare<T> {
    /// Compares `a` with `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` orders strictly before `b`
    #[inline]
    fn compares_lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns true if `a` orders before or equal to `b`
    #[inline]
    fn compares_le(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The natural order of `T`, as given by its `Ord` impl
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A comparator with its arguments swapped
///
/// Turns a min-heap into a max-heap over the same engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(C);

impl<C> Reversed<C> {
    /// Wraps `inner`, reversing the order it defines
    pub const fn new(inner: C) -> Self {
        Reversed(inner)
    }

    /// The comparator being reversed
    pub fn inner(&self) -> &C {
        &self.0
    }

    /// Unwraps the comparator being reversed
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<T, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
