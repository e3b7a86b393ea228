//! Stable ordering: `sort_by`, `sort_by_descending`, then `then_by` chains.
//!
//! Sorting is deferred until the first element is pulled. Descending order
//! reverses the comparator, not the output, so ties keep source order in
//! both directions.

pub mod comparer;
pub mod ordered;
pub mod reverse;

pub use comparer::{compare_keys, FnComparer, KeyComparer, ThenComparer};
pub use ordered::Ordered;
pub use reverse::Reverse;

use crate::seq::Seq;
use crate::traits::Comparer;

impl<I: Iterator> Seq<I> {
    /// Stable ascending sort on the key produced by `key`.
    pub fn sort_by<K, F>(self, key: F) -> Seq<Ordered<I, KeyComparer<F, K>, I::Item>>
    where
        F: Fn(&I::Item) -> K,
        K: PartialOrd,
    {
        Seq::new(Ordered::new(self.iter, KeyComparer::ascending(key)))
    }

    /// Stable descending sort on the key produced by `key`.
    pub fn sort_by_descending<K, F>(self, key: F) -> Seq<Ordered<I, KeyComparer<F, K>, I::Item>>
    where
        F: Fn(&I::Item) -> K,
        K: PartialOrd,
    {
        Seq::new(Ordered::new(self.iter, KeyComparer::descending(key)))
    }

    /// Stable sort with an explicit comparison function.
    pub fn sort_with<F>(self, cmp: F) -> Seq<Ordered<I, FnComparer<I::Item, F>, I::Item>>
    where
        F: Fn(&I::Item, &I::Item) -> std::cmp::Ordering,
    {
        Seq::new(Ordered::new(self.iter, FnComparer::new(cmp)))
    }

    /// Elements last to first.
    pub fn reverse(self) -> Seq<Reverse<I, I::Item>> {
        Seq::new(Reverse::new(self.iter))
    }
}

impl<I, C, T> Seq<Ordered<I, C, T>>
where
    I: Iterator<Item = T>,
    C: Comparer<T>,
{
    /// Break ties of the preceding ordering with an ascending secondary key.
    pub fn then_by<K, F>(self, key: F) -> Seq<Ordered<I, ThenComparer<C, KeyComparer<F, K>>, T>>
    where
        F: Fn(&T) -> K,
        K: PartialOrd,
    {
        Seq::new(self.iter.then(KeyComparer::ascending(key)))
    }

    /// Break ties of the preceding ordering with a descending secondary key.
    pub fn then_by_descending<K, F>(
        self,
        key: F,
    ) -> Seq<Ordered<I, ThenComparer<C, KeyComparer<F, K>>, T>>
    where
        F: Fn(&T) -> K,
        K: PartialOrd,
    {
        Seq::new(self.iter.then(KeyComparer::descending(key)))
    }
}
