//! Projection: 1:1 `map` and flattening `flat_map`.

use std::iter::{FlatMap, Map};

use crate::seq::Seq;

impl<I: Iterator> Seq<I> {
    /// Transform every element with `selector`, preserving order.
    pub fn map<B, F>(self, selector: F) -> Seq<Map<I, F>>
    where
        F: FnMut(I::Item) -> B,
    {
        Seq::new(self.iter.map(selector))
    }

    /// Project every element to a sub-sequence and concatenate them in order.
    pub fn flat_map<U, F>(self, selector: F) -> Seq<FlatMap<I, U, F>>
    where
        U: IntoIterator,
        F: FnMut(I::Item) -> U,
    {
        Seq::new(self.iter.flat_map(selector))
    }
}
