//! Power-of-two capacity sizing used when a [`Heap`](crate::Heap) compacts or
//! copies its storage.

/// Returns the smallest power of two that is at least `n`, treating `0` as `1`.
///
/// Saturates at the largest power of two representable in a `usize` rather
/// than overflowing.
///
/// ```
/// use lesser_heap::next_pow2;
///
/// assert_eq!(next_pow2(0), 1);
/// assert_eq!(next_pow2(5), 8);
/// assert_eq!(next_pow2(64), 64);
/// ```
#[must_use]
pub const fn next_pow2(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    match n.checked_next_power_of_two() {
        Some(p) => p,
        None => 1 << (usize::BITS - 1),
    }
}
