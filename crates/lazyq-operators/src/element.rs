//! Element access: first/last/element_at/single, and `default_if_empty`.

use std::iter::Fuse;

use lazyq_core::error::{QueryError, Result};

use crate::seq::Seq;

impl<I: Iterator> Seq<I> {
    /// The first element, or `NotFound` on an empty sequence.
    pub fn first(mut self) -> Result<I::Item> {
        self.iter
            .next()
            .ok_or_else(|| QueryError::not_found("first: sequence is empty"))
    }

    /// The first element satisfying `predicate`, or `NotFound`.
    pub fn first_where<P>(self, mut predicate: P) -> Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        let mut iter = self.iter;
        iter.find(|item| predicate(item))
            .ok_or_else(|| QueryError::not_found("first_where: no element satisfies the predicate"))
    }

    /// The last element, or `NotFound` on an empty sequence.
    pub fn last(self) -> Result<I::Item> {
        self.iter
            .last()
            .ok_or_else(|| QueryError::not_found("last: sequence is empty"))
    }

    /// The last element satisfying `predicate`, or `NotFound`.
    pub fn last_where<P>(self, mut predicate: P) -> Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter
            .filter(|item| predicate(item))
            .last()
            .ok_or_else(|| QueryError::not_found("last_where: no element satisfies the predicate"))
    }

    /// The element at zero-based `index`, or `NotFound` past the end.
    pub fn element_at(self, index: usize) -> Result<I::Item> {
        let mut iter = self.iter;
        iter.nth(index).ok_or_else(|| {
            QueryError::not_found(format!("element_at: index {} is out of range", index))
        })
    }

    /// The only element satisfying `predicate`.
    ///
    /// `NotFound` when nothing matches, `MultipleMatches` when two or more do.
    pub fn single<P>(self, predicate: P) -> Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        sole_match(self.iter, predicate, "single")?
            .ok_or_else(|| QueryError::not_found("single: no element satisfies the predicate"))
    }

    /// The only element satisfying `predicate`, or `None` when nothing
    /// matches. Still fails with `MultipleMatches` when two or more do.
    pub fn single_or_default<P>(self, predicate: P) -> Result<Option<I::Item>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        sole_match(self.iter, predicate, "single_or_default")
    }

    /// The sequence itself, or a single `default` if it turns out to be empty.
    pub fn default_if_empty(self, default: I::Item) -> Seq<DefaultIfEmpty<I, I::Item>> {
        Seq::new(DefaultIfEmpty {
            iter: self.iter.fuse(),
            default: Some(default),
        })
    }
}

/// Scan for a unique match, stopping at the second one.
fn sole_match<I, P>(iter: I, mut predicate: P, operator: &'static str) -> Result<Option<I::Item>>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut found = None;
    for item in iter {
        if predicate(&item) {
            if found.is_some() {
                return Err(QueryError::multiple(operator));
            }
            found = Some(item);
        }
    }
    Ok(found)
}

#[derive(Debug, Clone)]
pub struct DefaultIfEmpty<I, T> {
    iter: Fuse<I>,
    /// Taken as soon as the source yields anything, or when it is emitted.
    default: Option<T>,
}

impl<I, T> Iterator for DefaultIfEmpty<I, T>
where
    I: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.iter.next() {
            Some(item) => {
                self.default = None;
                Some(item)
            }
            None => self.default.take(),
        }
    }
}
