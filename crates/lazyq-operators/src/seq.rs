//! The `Seq` wrapper every operator hangs off.

use std::iter::FromIterator;

/// A lazily evaluated sequence.
///
/// Consuming a `Seq` evaluates its pipeline once. When the source iterator is
/// `Clone`, cloning the `Seq` before consuming it re-evaluates the pipeline
/// from the source.
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Seq<I> {
    pub(crate) iter: I,
}

impl<I> Seq<I> {
    pub fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Unwrap the underlying iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: Iterator> Iterator for Seq<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Seq<I> {}

impl<T> FromIterator<T> for Seq<std::vec::IntoIter<T>> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Seq::new(iter.into_iter().collect::<Vec<T>>().into_iter())
    }
}

/// Clamp a signed count to zero; negative counts behave like zero.
#[inline]
pub(crate) fn clamp_count(count: isize) -> usize {
    count.max(0) as usize
}
