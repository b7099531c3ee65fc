//! Heap orientation.
//!
//! A heap is parameterized by a zero-sized marker implementing [`Order`]. The
//! marker supplies the single "comes before" predicate used by every sift, so
//! min-first and max-first heaps share one implementation.

/// Decides which of two elements belongs closer to the root.
pub trait Order {
    /// Returns `true` only if `a` is strictly better placed than `b`.
    /// Equal elements must return `false` so ties never swap.
    fn before<T: Ord>(a: &T, b: &T) -> bool;
}

/// Smallest element at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

/// Largest element at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl Order for MinFirst {
    #[inline]
    fn before<T: Ord>(a: &T, b: &T) -> bool {
        a < b
    }
}

impl Order for MaxFirst {
    #[inline]
    fn before<T: Ord>(a: &T, b: &T) -> bool {
        a > b
    }
}
