//! Equality joins.
//!
//! Both joins hash the inner sequence into a lookup on the first pull and
//! then stream the outer sequence. Matches for one outer element come out
//! in inner-sequence order.

pub mod group;
pub mod hash;

pub use group::GroupJoin;
pub use hash::Join;

use std::collections::HashMap;
use std::hash::Hash;

use crate::seq::Seq;
use crate::trace;

impl<I: Iterator> Seq<I> {
    /// Inner join: one result per (outer, inner) pair with equal keys.
    /// Outer elements without a match produce nothing.
    pub fn join<J, K, FO, FI, FR, R>(
        self,
        inner: J,
        outer_key: FO,
        inner_key: FI,
        result: FR,
    ) -> Seq<Join<I, J::IntoIter, K, FO, FI, FR>>
    where
        J: IntoIterator,
        K: Eq + Hash,
        FO: FnMut(&I::Item) -> K,
        FI: FnMut(&J::Item) -> K,
        FR: FnMut(&I::Item, &J::Item) -> R,
    {
        let join = Join::new(self.iter, inner.into_iter(), outer_key, inner_key, result);
        Seq::new(join)
    }

    /// Group join: exactly one result per outer element, paired with the
    /// (possibly empty) slice of inner elements sharing its key.
    pub fn group_join<J, K, FO, FI, FR, R>(
        self,
        inner: J,
        outer_key: FO,
        inner_key: FI,
        result: FR,
    ) -> Seq<GroupJoin<I, J::IntoIter, K, FO, FI, FR>>
    where
        J: IntoIterator,
        K: Eq + Hash,
        FO: FnMut(&I::Item) -> K,
        FI: FnMut(&J::Item) -> K,
        FR: FnMut(I::Item, &[J::Item]) -> R,
    {
        let join = GroupJoin::new(self.iter, inner.into_iter(), outer_key, inner_key, result);
        Seq::new(join)
    }
}

/// Hash `inner` by key, keeping each bucket in source order.
pub(crate) fn build_lookup<J, K, F>(
    inner: J,
    mut key: F,
    operator: &'static str,
) -> HashMap<K, Vec<J::Item>>
where
    J: Iterator,
    K: Eq + Hash,
    F: FnMut(&J::Item) -> K,
{
    let mut lookup: HashMap<K, Vec<J::Item>> = HashMap::new();
    let mut n = 0usize;
    for item in inner {
        n += 1;
        lookup.entry(key(&item)).or_default().push(item);
    }
    trace::emit_materialized(operator, n);
    lookup
}
