//! Aggregates and quantifiers: count/sum/min/max/average, all/any/contains,
//! `aggregate` folds, and materialization.
//!
//! All of these consume the full sequence (quantifiers short-circuit).
//! `min`/`max`/`average`/`aggregate` fail with `EmptySequence` on empty input;
//! `count` and `sum` never fail.

use std::cmp::Ordering;
use std::iter::Sum;

use lazyq_core::error::{QueryError, Result};
use lazyq_core::numeric::Numeric;

use crate::seq::Seq;
use crate::sort::compare_keys;

impl<I: Iterator> Seq<I> {
    pub fn count(self) -> usize {
        self.iter.count()
    }

    pub fn count_where<P>(self, mut predicate: P) -> usize
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter.filter(|item| predicate(item)).count()
    }

    /// Sum of the elements; zero for an empty sequence.
    pub fn sum<S>(self) -> S
    where
        S: Sum<I::Item>,
    {
        self.iter.sum()
    }

    /// Sum of `selector` over the elements; zero for an empty sequence.
    pub fn sum_of<S, F>(self, selector: F) -> S
    where
        F: FnMut(I::Item) -> S,
        S: Sum<S>,
    {
        self.iter.map(selector).sum()
    }

    /// Largest element. Ties keep the first occurrence.
    pub fn max(self) -> Result<I::Item>
    where
        I::Item: PartialOrd,
    {
        extreme(self.iter, Ordering::Greater, "max")
    }

    /// Smallest element. Ties keep the first occurrence.
    pub fn min(self) -> Result<I::Item>
    where
        I::Item: PartialOrd,
    {
        extreme(self.iter, Ordering::Less, "min")
    }

    /// Largest value of `selector` over the elements.
    pub fn max_of<K, F>(self, selector: F) -> Result<K>
    where
        F: FnMut(I::Item) -> K,
        K: PartialOrd,
    {
        extreme(self.iter.map(selector), Ordering::Greater, "max_of")
    }

    /// Smallest value of `selector` over the elements.
    pub fn min_of<K, F>(self, selector: F) -> Result<K>
    where
        F: FnMut(I::Item) -> K,
        K: PartialOrd,
    {
        extreme(self.iter.map(selector), Ordering::Less, "min_of")
    }

    /// Arithmetic mean of the elements as `f64`.
    pub fn average(self) -> Result<f64>
    where
        I::Item: Numeric,
    {
        mean(self.iter, "average")
    }

    /// Arithmetic mean of `selector` over the elements as `f64`.
    pub fn average_of<N, F>(self, selector: F) -> Result<f64>
    where
        F: FnMut(I::Item) -> N,
        N: Numeric,
    {
        mean(self.iter.map(selector), "average_of")
    }

    /// True when every element satisfies `predicate`. Vacuously true when empty.
    pub fn all<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        let mut iter = self.iter;
        iter.all(|item| predicate(&item))
    }

    /// True when some element satisfies `predicate`. False when empty.
    pub fn any<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        let mut iter = self.iter;
        iter.any(|item| predicate(&item))
    }

    /// True when some element equals `value`.
    pub fn contains<Q>(self, value: &Q) -> bool
    where
        I::Item: PartialEq<Q>,
        Q: ?Sized,
    {
        let mut iter = self.iter;
        iter.any(|item| item == *value)
    }

    /// Left fold without a seed: the first element seeds the accumulator.
    pub fn aggregate<F>(self, combine: F) -> Result<I::Item>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        let mut iter = self.iter;
        let first = iter.next().ok_or(QueryError::EmptySequence("aggregate"))?;
        Ok(iter.fold(first, combine))
    }

    /// Left fold from `seed`. Returns `seed` for an empty sequence.
    pub fn aggregate_seeded<A, F>(self, seed: A, combine: F) -> A
    where
        F: FnMut(A, I::Item) -> A,
    {
        self.iter.fold(seed, combine)
    }

    /// Materialize into a `Vec`.
    pub fn to_list(self) -> Vec<I::Item> {
        self.iter.collect()
    }
}

fn extreme<I>(mut iter: I, wanted: Ordering, operator: &'static str) -> Result<I::Item>
where
    I: Iterator,
    I::Item: PartialOrd,
{
    let mut best = iter.next().ok_or(QueryError::EmptySequence(operator))?;
    for item in iter {
        if compare_keys(&item, &best) == wanted {
            best = item;
        }
    }
    Ok(best)
}

fn mean<I>(iter: I, operator: &'static str) -> Result<f64>
where
    I: Iterator,
    I::Item: Numeric,
{
    let (total, n) = iter.fold((0.0_f64, 0_usize), |(total, n), v| {
        (total + v.to_f64(), n + 1)
    });
    if n == 0 {
        return Err(QueryError::EmptySequence(operator));
    }
    Ok(total / n as f64)
}
