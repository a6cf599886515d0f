//! Orderings that enable a [`Heap`] to behave as per the standard library's
//! `BinaryHeap`, namely using the [`Ord`] trait for comparisons rather than any
//! user-supplied predicate, plus an adapter that flips an existing ordering.
//!
//! [`Heap`]: crate::Heap

use crate::Lesser;
use core::{fmt, marker::PhantomData};

/// A zero-sized ordering that delegates to the [`Ord`] implementation of its
/// type parameter `T`.
pub struct OrdLesser<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> OrdLesser<T> {
    /// Creates the ordering.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Default for OrdLesser<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Clone for OrdLesser<T> {
    fn clone(&self) -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Copy for OrdLesser<T> {}

impl<T: ?Sized> fmt::Debug for OrdLesser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrdLesser")
    }
}

impl<T: ?Sized + Ord> Lesser<T> for OrdLesser<T> {
    // Delegate to `T`'s implementation of [`PartialOrd::lt`] rather than going
    // through `cmp`, so that types whose implementations are inconsistent still
    // behave the way the standard library would treat them.
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        this < that
    }
}

/// Swaps the arguments of the wrapped ordering, so that a max-heap under `L`
/// becomes a min-heap.
///
/// ```
/// use lesser_heap::{Heap, OrdLesser, Reversed};
///
/// let mut heap = Heap::with_values(Reversed(OrdLesser::<i32>::new()), [3, 1, 2]);
/// assert_eq!(heap.pop(), Some(1));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<L>(pub L);

impl<T: ?Sized, L: Lesser<T>> Lesser<T> for Reversed<L> {
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        self.0.less(that, this)
    }
}
