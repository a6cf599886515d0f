#![allow(dead_code)] // Not used in all configurations

use alloc::vec::Vec;

/// Copied from `std::test_helpers::test_rng`, since these tests rely on the
/// seed not being the same for every RNG invocation too.
#[track_caller]
pub(crate) fn test_rng() -> rand_xorshift::XorShiftRng {
    use std::hash::{BuildHasher, Hash, Hasher};
    let mut hasher = std::collections::hash_map::RandomState::new().build_hasher();
    std::panic::Location::caller().hash(&mut hasher);
    let hc64 = hasher.finish();
    let seed_vec = hc64.to_le_bytes().into_iter().chain(0u8..8).collect::<Vec<u8>>();
    let seed: [u8; 16] = seed_vec.as_slice().try_into().unwrap();
    rand::SeedableRng::from_seed(seed)
}

/// Asserts that `data[..len]` satisfies the heap property under `less`.
#[track_caller]
pub(crate) fn assert_heap_property<T, L>(data: &[T], less: &L)
where
    T: core::fmt::Debug,
    L: crate::Lesser<T>,
{
    for child in 1..data.len() {
        let parent = (child - 1) / 2;
        assert!(
            !less.less(&data[parent], &data[child]),
            "parent {:?} at {parent} sits above greater child {:?} at {child} in {data:?}",
            data[parent],
            data[child],
        );
    }
}
