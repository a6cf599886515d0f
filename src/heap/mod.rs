//! A priority queue implemented with a binary heap.
//!
//! Insertion and popping the largest element have *O*(log(*n*)) time complexity.
//! Checking the largest element is *O*(1). Items are ordered by a [`Lesser`]
//! predicate supplied when the heap is built, and the ordering can be swapped
//! out later with [`Heap::set_less`], which reorders the heap in place.
//!
//! Storage is a single vector holding a complete binary tree: the children of
//! index `i` live at `2i + 1` and `2i + 2`. Only the first [`len`] slots are
//! part of the heap. Slots past that are *cached* items left behind by
//! [`clear`]; they are reused by later pushes, re-admitted by [`restore`] and
//! released by [`clean`].
//!
//! [`len`]: Heap::len
//! [`clear`]: Heap::clear
//! [`restore`]: Heap::restore
//! [`clean`]: Heap::clean

use core::fmt;
use core::iter::{FromIterator, FusedIterator};
use core::ptr;

use alloc::slice;
use alloc::vec::{self, Vec};

use crate::{next_pow2, Lesser, OrdLesser};


/// A priority queue implemented with a binary heap.
///
/// This will be a max-heap with respect to its ordering `L`: the item for which
/// no other item is "less" sits at the top.
///
/// It is a logic error for an item or the ordering to be modified in such a way
/// that the item's ordering relative to any other item changes while they are in
/// the heap. This is normally only possible through [`Cell`], [`RefCell`], global
/// state, I/O, or unsafe code. The behavior resulting from such a logic error is
/// not specified, but will be encapsulated to the `Heap` that observed the logic
/// error and not result in undefined behavior.
///
/// `Heap` is not synchronized. Sharing one between threads requires holding a
/// lock across each logical operation, including `peek` followed by `pop`.
///
/// # Examples
///
/// ```
/// use lesser_heap::Heap;
///
/// let mut heap = Heap::new(|x: &u32, y: &u32| x < y);
/// assert_eq!(heap.peek(), None);
///
/// heap.push(1);
/// heap.push(5);
/// heap.push(2);
/// assert_eq!(heap.peek(), Some(&5));
/// assert_eq!(heap.len(), 3);
///
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), None);
/// ```
///
/// ## Min-heap
///
/// Passing the complement of `<` makes `pop` return the smallest value.
///
/// ```
/// use lesser_heap::Heap;
///
/// let mut heap = Heap::with_values(|x: &i32, y: &i32| y <= x, [1, 5, 2]);
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(5));
/// ```
///
/// # Time complexity
///
/// | [push]        | [pop]         | [peek] | [sorted]           |
/// |---------------|---------------|--------|--------------------|
/// | *O*(log(*n*)) | *O*(log(*n*)) | *O*(1) | *O*(*n* log(*n*))  |
///
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
/// [push]: Heap::push
/// [pop]: Heap::pop
/// [peek]: Heap::peek
/// [sorted]: Heap::sorted
pub struct Heap<T, L = OrdLesser<T>> {
    data: Vec<T>,
    size: usize,
    less: L,
}

impl<T: Clone, L: Clone> Clone for Heap<T, L> {
    /// Copies the active items into a fresh buffer whose capacity is the next
    /// power of two; cached items are not carried over.
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(next_pow2(self.size));
        data.extend_from_slice(self.as_slice());
        Heap { data, size: self.size, less: self.less.clone() }
    }
}

impl<T: PartialEq, L> PartialEq for Heap<T, L> {
    /// Two heaps are equal when they are the same heap, or when their active
    /// items are equal in storage order. Heaps holding the same items can
    /// therefore compare unequal if they were built in a different order.
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other) || self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, L> Eq for Heap<T, L> {}

impl<T, L: Lesser<T> + Default> Default for Heap<T, L> {
    /// Creates an empty `Heap<T, L>`.
    #[inline]
    fn default() -> Heap<T, L> {
        Heap::new(L::default())
    }
}

impl<T: fmt::Debug, L> fmt::Debug for Heap<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap").field("values", &self.data).field("size", &self.size).finish()
    }
}

impl<T, L: Lesser<T>> Heap<T, L> {
    /// Creates an empty heap ordered by `less`.
    ///
    /// ```
    /// use lesser_heap::Heap;
    /// let mut heap = Heap::new(|x: &i32, y: &i32| x < y);
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn new(less: L) -> Heap<T, L> {
        Heap { data: Vec::new(), size: 0, less }
    }

    /// Creates an empty heap ordered by `less` with at least the specified
    /// capacity.
    #[must_use]
    pub fn with_capacity(less: L, capacity: usize) -> Heap<T, L> {
        Heap { data: Vec::with_capacity(capacity), size: 0, less }
    }

    /// Creates a heap ordered by `less` holding `values`, which are pushed one
    /// at a time in iteration order.
    ///
    /// ```
    /// use lesser_heap::Heap;
    /// let heap = Heap::with_values(|x: &i32, y: &i32| x < y, [1, 0, 2]);
    /// assert_eq!(heap.peek(), Some(&2));
    /// ```
    pub fn with_values<I: IntoIterator<Item = T>>(less: L, values: I) -> Heap<T, L> {
        let mut heap = Heap::new(less);
        heap.extend(values);
        heap
    }

    /// Removes the greatest item from the heap and returns it, or `None` if it
    /// is empty.
    ///
    /// The item is moved out to the caller rather than left behind as a cached
    /// item, so [`restore`](Self::restore) cannot bring it back. Only
    /// [`clear`](Self::clear) leaves cached items.
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop` on a heap containing *n* items is
    /// *O*(log(*n*)).
    pub fn pop(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        self.pop_in_place();
        // The popped item sits at `size`, directly before any cached items; the
        // last cached item (if any) takes its slot.
        Some(self.data.swap_remove(self.size))
    }

    /// Pushes an item onto the heap, reusing a cached slot if one is available.
    ///
    /// ```
    /// use lesser_heap::Heap;
    /// let mut heap = Heap::new(|x: &i32, y: &i32| x < y);
    /// heap.push(3);
    /// heap.push(5);
    /// heap.push(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Some(&5));
    /// ```
    pub fn push(&mut self, item: T) {
        if self.size < self.data.len() {
            self.data[self.size] = item;
        } else {
            self.data.push(item);
        }
        self.size += 1;
        self.sift_up(self.size - 1);
    }

    /// Re-admits every cached item into the heap.
    ///
    /// ```
    /// use lesser_heap::Heap;
    /// let mut heap = Heap::with_values(|x: &i32, y: &i32| x < y, [1, 3, 2]);
    /// heap.clear();
    /// assert!(heap.is_empty());
    ///
    /// heap.restore();
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Some(&3));
    /// ```
    pub fn restore(&mut self) {
        let len = self.data.len();
        self.readmit(len);
    }

    /// Replaces the ordering and reorders the heap under it.
    ///
    /// Every item is popped under the old ordering and pushed back under the new
    /// one in the order it was popped, in *O*(*n* log(*n*)). Returns `self` so
    /// that a query can follow.
    ///
    /// ```
    /// use lesser_heap::Heap;
    ///
    /// let less: fn(&i32, &i32) -> bool = |x, y| x < y;
    /// let mut heap = Heap::with_values(less, [1, 3, 2]);
    /// assert_eq!(heap.set_less(|x, y| y <= x).sorted(), [3, 2, 1]);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    pub fn set_less(&mut self, less: L) -> &mut Self {
        let len = self.drain_in_place();
        self.data[..len].reverse();
        self.less = less;
        self.readmit(len);
        self
    }

    /// Consumes the heap and rebuilds it under an ordering of a different type.
    ///
    /// This is [`set_less`](Self::set_less) for when the new ordering is, for
    /// example, a different closure.
    pub fn with_less<M: Lesser<T>>(mut self, less: M) -> Heap<T, M> {
        let len = self.drain_in_place();
        self.data.truncate(len);
        self.data.reverse();
        let mut heap = Heap { data: self.data, size: 0, less };
        heap.readmit(len);
        heap
    }

    /// Returns a copy of the active items in ascending order, that is the
    /// reverse of the order in which they would be popped.
    ///
    /// The heap is left holding the same items, with the same length and the
    /// same top, although their storage order may differ.
    ///
    /// ```
    /// use lesser_heap::Heap;
    ///
    /// let mut heap = Heap::with_values(|x: &i32, y: &i32| x < y, [4, 1, 3]);
    /// assert_eq!(heap.sorted(), [1, 3, 4]);
    /// assert_eq!(heap.peek(), Some(&4));
    /// ```
    #[must_use]
    pub fn sorted(&mut self) -> Vec<T>
    where
        T: Clone,
    {
        let len = self.drain_in_place();
        let sorted = self.data[..len].to_vec();
        self.readmit(len);
        sorted
    }

    /// Consumes the heap and returns a vector in ascending order.
    ///
    /// ```
    /// use lesser_heap::Heap;
    ///
    /// let mut heap = Heap::with_values(|x: &i32, y: &i32| x < y, [1, 2, 4, 5, 7]);
    /// heap.push(6);
    /// heap.push(3);
    ///
    /// assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let len = self.drain_in_place();
        self.data.truncate(len);
        self.data
    }

    /// Moves all the active items of `other` into `self`, leaving `other` empty.
    ///
    /// Items cached by `other` stay with it.
    pub fn append(&mut self, other: &mut Self) {
        let len = other.size;
        other.size = 0;
        self.extend(other.data.drain(..len));
    }

    /// Pops the top into the slot just past the active items, leaving it there.
    fn pop_in_place(&mut self) {
        debug_assert!(self.size > 0);
        self.size -= 1;
        self.data.swap(0, self.size);
        self.sift_down(0);
    }

    /// Pops every active item in place, so that `data[..len]` ends up in
    /// ascending order, and returns that former length.
    fn drain_in_place(&mut self) -> usize {
        let len = self.size;
        while self.size > 0 {
            self.pop_in_place();
        }
        len
    }

    /// Pushes `data[size..end]` back into the heap, one sift-up at a time.
    fn readmit(&mut self, end: usize) {
        debug_assert!(end <= self.data.len());
        while self.size < end {
            self.size += 1;
            self.sift_up(self.size - 1);
        }
    }

    /// Moves the item at `pos` towards the root while its parent is less.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less.less(&self.data[parent], &self.data[pos]) {
                break;
            }
            self.data.swap(parent, pos);
            pos = parent;
        }
    }

    /// Moves the item at `pos` towards the leaves while it is less than the
    /// greater of its children.
    fn sift_down(&mut self, mut pos: usize) {
        loop {
            let mut child = 2 * pos + 1;
            if child >= self.size {
                return;
            }

            // the right child wins only when the left one is less than it
            let right = child + 1;
            if right < self.size && self.less.less(&self.data[child], &self.data[right]) {
                child = right;
            }

            // if we are already in order, stop.
            if !self.less.less(&self.data[pos], &self.data[child]) {
                return;
            }

            self.data.swap(pos, child);
            pos = child;
        }
    }
}

impl<T, L> Heap<T, L> {
    /// Returns the greatest item in the heap, or `None` if it is empty.
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the number of active items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Checks if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of cached items held past the active ones.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.data.len() - self.size
    }

    /// Returns the number of items the heap can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Borrows the heap's ordering.
    pub fn less(&self) -> &L {
        &self.less
    }

    /// Empties the heap without releasing anything: the former items become
    /// cached and may be reused by [`push`](Self::push), brought back by
    /// [`restore`](Self::restore) or released by [`clean`](Self::clean).
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Releases cached items, and compacts the storage once it is less than
    /// half used.
    ///
    /// When `len() < capacity() / 2`, the storage is reallocated to the
    /// smallest power of two that holds the active items (at least one slot).
    /// Otherwise the allocation is kept so that further pushes don't have to
    /// grow it again.
    ///
    /// ```
    /// use lesser_heap::Heap;
    ///
    /// let mut heap = Heap::with_capacity(|x: &i32, y: &i32| x < y, 64);
    /// heap.extend(0..40);
    /// while heap.len() > 5 {
    ///     heap.pop();
    /// }
    /// heap.clean();
    /// assert!(heap.capacity() >= 8 && heap.capacity() < 64);
    /// ```
    pub fn clean(&mut self) {
        self.data.truncate(self.size);
        if self.size < self.data.capacity() / 2 {
            self.data.shrink_to(next_pow2(self.size));
        }
    }

    /// Returns `true` if an active item equals `value`.
    ///
    /// This is a linear scan; the ordering is not consulted.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }

    /// Returns a copy of the active items in storage order.
    #[must_use]
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Returns the active items in storage order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.size]
    }

    /// Returns an iterator visiting the active items in storage order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.as_slice().iter() }
    }

    /// Consumes the heap and returns its active items in storage order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Consumes the heap and returns its storage and ordering, along with the
    /// number of active items at the front of the storage.
    pub(crate) fn into_parts(self) -> (Vec<T>, usize, L) {
        (self.data, self.size, self.less)
    }
}

/// An iterator over the active items of a `Heap`, in storage order.
///
/// This `struct` is created by [`Heap::iter()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.iter.last()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the active items of a `Heap`, in storage order.
///
/// This `struct` is created by [`Heap::into_iter()`] (provided by the
/// [`IntoIterator`] trait).
#[derive(Clone)]
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Ord> From<Vec<T>> for Heap<T> {
    /// Pushes the items of `vec` one at a time, reusing its allocation.
    fn from(vec: Vec<T>) -> Heap<T> {
        let len = vec.len();
        let mut heap = Heap { data: vec, size: 0, less: OrdLesser::new() };
        heap.readmit(len);
        heap
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for Heap<T> {
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, L> From<Heap<T, L>> for Vec<T> {
    fn from(heap: Heap<T, L>) -> Vec<T> {
        let (mut data, size, _) = heap.into_parts();
        data.truncate(size);
        data
    }
}

impl<T, L: Lesser<T> + Default> FromIterator<T> for Heap<T, L> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Heap<T, L> {
        Heap::with_values(L::default(), iter)
    }
}

impl<T, L> IntoIterator for Heap<T, L> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator over the active items in storage order.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: Vec::from(self).into_iter() }
    }
}

impl<'a, T, L> IntoIterator for &'a Heap<T, L> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, L: Lesser<T>> Extend<T> for Heap<T, L> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        // cached slots are reused first
        self.data.reserve(lower.saturating_sub(self.cached_len()));

        iterator.for_each(move |elem| self.push(elem));
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_reserve(&mut self, additional: usize) {
        self.data.reserve(additional.saturating_sub(self.cached_len()));
    }
}

impl<'a, T: 'a + Copy, L: Lesser<T>> Extend<&'a T> for Heap<T, L> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, &item: &'a T) {
        self.push(item);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_reserve(&mut self, additional: usize) {
        self.data.reserve(additional.saturating_sub(self.cached_len()));
    }
}
