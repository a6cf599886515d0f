#![allow(dead_code, unused_imports)]

#[allow(unstable_name_collisions)]
mod definitions {
    use cfg_if::cfg_if;

    pub trait ExactSizeIsEmpty: ExactSizeIterator {
        fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    cfg_if! {
        if #[cfg(not(feature = "exact_size_is_empty"))] {
            impl<I: ExactSizeIterator> ExactSizeIsEmpty for I {}
        }
    }
}

#[cfg(test)]
pub(crate) use definitions::ExactSizeIsEmpty as _;
