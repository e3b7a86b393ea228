//! Filter and conditional rewrite.

use std::iter::Filter;

use crate::seq::Seq;

impl<I: Iterator> Seq<I> {
    /// Keep the elements that satisfy `predicate`, in source order.
    pub fn filter<P>(self, predicate: P) -> Seq<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Seq::new(self.iter.filter(predicate))
    }

    /// Rewrite the elements matching `predicate` with `replace`; others pass
    /// through untouched.
    pub fn replace_where<P, F>(self, predicate: P, replace: F) -> Seq<ReplaceWhere<I, P, F>>
    where
        P: FnMut(&I::Item) -> bool,
        F: FnMut(I::Item) -> I::Item,
    {
        Seq::new(ReplaceWhere {
            iter: self.iter,
            predicate,
            replace,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ReplaceWhere<I, P, F> {
    iter: I,
    predicate: P,
    replace: F,
}

impl<I, P, F> Iterator for ReplaceWhere<I, P, F>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
    F: FnMut(I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        if (self.predicate)(&item) {
            Some((self.replace)(item))
        } else {
            Some(item)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
