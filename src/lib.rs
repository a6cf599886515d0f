#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "exact_size_is_empty", feature(exact_size_is_empty))]
#![cfg_attr(feature = "extend_one", feature(extend_one))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]

//! A binary max-heap whose items are ordered by a caller-supplied [`Lesser`]
//! predicate rather than by their [`Ord`] implementation.
//!
//! ```
//! use lesser_heap::Heap;
//!
//! let mut heap = Heap::with_values(|x: &i32, y: &i32| x < y, [1, 0, 2, 9, 3]);
//! assert_eq!(heap.peek(), Some(&9));
//! assert_eq!(heap.sorted(), [0, 1, 2, 3, 9]);
//! assert_eq!(heap.pop(), Some(9));
//! assert_eq!(heap.len(), 4);
//! ```

extern crate alloc;

mod polyfill;

mod default;
pub mod heap;
pub mod pow2;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;

#[cfg(test)]
mod testing;

pub use default::{OrdLesser, Reversed};
pub use heap::Heap;
pub use pow2::next_pow2;

/// A "should sit below" relation between two items of type `T`.
///
/// `less(this, that)` returning `true` means `that` may be a parent of `this`
/// in a valid heap.  Passing the natural `<` yields a max-heap; passing its
/// complement (or [`Reversed`]) yields a min-heap.
///
/// Implementations must be strict and consistent.  The behavior resulting from
/// an inconsistent predicate is not specified, but will be encapsulated to the
/// [`Heap`] that observed it and not result in undefined behavior.
///
/// Every `Fn(&T, &T) -> bool` is a `Lesser<T>`, so plain closures and function
/// pointers can be used directly.
pub trait Lesser<T: ?Sized> {
    /// Whether `this` must sit below `that`.
    fn less(&self, this: &T, that: &T) -> bool;
}

impl<T: ?Sized, F> Lesser<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        self(this, that)
    }
}
