//! Entry-point and comparison traits.

use std::cmp::Ordering;

use crate::seq::Seq;

/// Lift anything iterable into a [`Seq`].
///
/// ```
/// use lazyq_operators::IntoSeq;
///
/// let evens: Vec<i32> = vec![1, 2, 3, 4].into_seq().filter(|n| n % 2 == 0).to_list();
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub trait IntoSeq: IntoIterator + Sized {
    fn into_seq(self) -> Seq<Self::IntoIter> {
        Seq::new(self.into_iter())
    }
}

impl<T: IntoIterator> IntoSeq for T {}

/// Total ordering over `T` used by the sort operators.
///
/// Implementations MUST be consistent (a transitive total preorder); the
/// stable sort relies on it to keep ties in source order.
pub trait Comparer<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}
