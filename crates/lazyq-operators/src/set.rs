//! Set operators by equality: distinct, union, concat, except, intersect.
//!
//! Results keep the order of first occurrence in the left sequence (then the
//! right one, for `union`). `except` and `intersect` hash the right-hand
//! sequence on the first pull and yield each value at most once.

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::Chain;

use crate::seq::Seq;
use crate::trace;

impl<I: Iterator> Seq<I> {
    /// First occurrence of each distinct value.
    pub fn distinct(self) -> Seq<Distinct<I, I::Item>>
    where
        I::Item: Eq + Hash + Clone,
    {
        Seq::new(Distinct::new(self.iter))
    }

    /// Concatenation with duplicates retained.
    pub fn concat<J>(self, other: J) -> Seq<Chain<I, J::IntoIter>>
    where
        J: IntoIterator<Item = I::Item>,
    {
        Seq::new(self.iter.chain(other))
    }

    /// Concatenation with duplicates removed, first occurrence order.
    pub fn union<J>(self, other: J) -> Seq<Distinct<Chain<I, J::IntoIter>, I::Item>>
    where
        J: IntoIterator<Item = I::Item>,
        I::Item: Eq + Hash + Clone,
    {
        Seq::new(Distinct::new(self.iter.chain(other)))
    }

    /// Distinct values of this sequence that do not occur in `other`.
    pub fn except<J>(self, other: J) -> Seq<Except<I, J::IntoIter, I::Item>>
    where
        J: IntoIterator<Item = I::Item>,
        I::Item: Eq + Hash + Clone,
    {
        Seq::new(Except {
            iter: self.iter,
            other: Some(other.into_iter()),
            excluded: HashSet::new(),
        })
    }

    /// Distinct values of this sequence that also occur in `other`.
    pub fn intersect<J>(self, other: J) -> Seq<Intersect<I, J::IntoIter, I::Item>>
    where
        J: IntoIterator<Item = I::Item>,
        I::Item: Eq + Hash,
    {
        Seq::new(Intersect {
            iter: self.iter,
            other: Some(other.into_iter()),
            remaining: HashSet::new(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Distinct<I, T> {
    iter: I,
    seen: HashSet<T>,
}

impl<I, T> Distinct<I, T> {
    fn new(iter: I) -> Self {
        Self {
            iter,
            seen: HashSet::new(),
        }
    }
}

impl<I, T> Iterator for Distinct<I, T>
where
    I: Iterator<Item = T>,
    T: Eq + Hash + Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let item = self.iter.next()?;
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

#[derive(Debug, Clone)]
pub struct Except<I, J, T> {
    iter: I,
    other: Option<J>,
    /// Right-hand values plus every value already yielded.
    excluded: HashSet<T>,
}

impl<I, J, T> Iterator for Except<I, J, T>
where
    I: Iterator<Item = T>,
    J: Iterator<Item = T>,
    T: Eq + Hash + Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(other) = self.other.take() {
            self.excluded.extend(other);
            trace::emit_materialized("except", self.excluded.len());
        }
        loop {
            let item = self.iter.next()?;
            if self.excluded.insert(item.clone()) {
                return Some(item);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Intersect<I, J, T> {
    iter: I,
    other: Option<J>,
    /// Right-hand values not yet yielded.
    remaining: HashSet<T>,
}

impl<I, J, T> Iterator for Intersect<I, J, T>
where
    I: Iterator<Item = T>,
    J: Iterator<Item = T>,
    T: Eq + Hash,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(other) = self.other.take() {
            self.remaining.extend(other);
            trace::emit_materialized("intersect", self.remaining.len());
        }
        loop {
            let item = self.iter.next()?;
            if self.remaining.remove(&item) {
                return Some(item);
            }
        }
    }
}
