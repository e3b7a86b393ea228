use std::vec;

use super::comparer::ThenComparer;
use crate::trace;
use crate::traits::Comparer;

/// A deferred stable sort over `source`.
///
/// The source is drained and sorted on the first `next()`; until then the
/// ordering can still be refined with [`Ordered::then`].
#[derive(Clone)]
pub struct Ordered<I, C, T> {
    source: I,
    comparer: C,
    sorted: Option<vec::IntoIter<T>>,
}

impl<I, C, T> Ordered<I, C, T>
where
    I: Iterator<Item = T>,
    C: Comparer<T>,
{
    pub fn new(source: I, comparer: C) -> Self {
        Self {
            source,
            comparer,
            sorted: None,
        }
    }

    /// Refine the ordering with a secondary comparer applied only to ties.
    ///
    /// If the sequence was already partially consumed, the remaining
    /// elements are re-sorted under the combined ordering. They are a stable
    /// suffix of the primary order, so the result is the same as refining
    /// before the first pull.
    pub fn then<D>(self, secondary: D) -> Ordered<I, ThenComparer<C, D>, T>
    where
        D: Comparer<T>,
    {
        let comparer = ThenComparer::new(self.comparer, secondary);
        let sorted = self.sorted.map(|rest| {
            let mut rest: Vec<T> = rest.collect();
            rest.sort_by(|a, b| comparer.compare(a, b));
            rest.into_iter()
        });
        Ordered {
            source: self.source,
            comparer,
            sorted,
        }
    }
}

impl<I, C, T> Iterator for Ordered<I, C, T>
where
    I: Iterator<Item = T>,
    C: Comparer<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.sorted.is_none() {
            let mut buf: Vec<T> = self.source.by_ref().collect();
            let comparer = &self.comparer;
            // `sort_by` is stable; ties keep source order.
            buf.sort_by(|a, b| comparer.compare(a, b));
            trace::emit_materialized("sort", buf.len());
            self.sorted = Some(buf.into_iter());
        }
        self.sorted.as_mut().and_then(|it| it.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.sorted {
            Some(it) => it.size_hint(),
            None => self.source.size_hint(),
        }
    }
}
