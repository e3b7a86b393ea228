use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::traits::Comparer;

/// Compare two partially ordered keys as a total order.
///
/// Incomparable values (NaN) sort after every comparable value and compare
/// equal to each other.
pub fn compare_keys<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    match a.partial_cmp(b) {
        Some(ord) => ord,
        None => match (is_unordered(a), is_unordered(b)) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// True for values not comparable even with themselves (NaN).
fn is_unordered<K: PartialOrd>(k: &K) -> bool {
    k.partial_cmp(k).is_none()
}

/// Orders elements by a selected key.
pub struct KeyComparer<F, K> {
    key: F,
    descending: bool,
    _key: PhantomData<fn() -> K>,
}

impl<F: Clone, K> Clone for KeyComparer<F, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            descending: self.descending,
            _key: PhantomData,
        }
    }
}

impl<F, K> KeyComparer<F, K> {
    pub fn ascending(key: F) -> Self {
        Self {
            key,
            descending: false,
            _key: PhantomData,
        }
    }

    pub fn descending(key: F) -> Self {
        Self {
            key,
            descending: true,
            _key: PhantomData,
        }
    }
}

impl<T, K, F> Comparer<T> for KeyComparer<F, K>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let (ka, kb) = ((self.key)(a), (self.key)(b));
        // Incomparable keys stay last in both directions.
        match (is_unordered(&ka), is_unordered(&kb)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) if self.descending => compare_keys(&ka, &kb).reverse(),
            (false, false) => compare_keys(&ka, &kb),
        }
    }
}

/// Lexicographic composition: `secondary` only decides ties of `primary`.
#[derive(Clone)]
pub struct ThenComparer<A, B> {
    primary: A,
    secondary: B,
}

impl<A, B> ThenComparer<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<T, A, B> Comparer<T> for ThenComparer<A, B>
where
    A: Comparer<T>,
    B: Comparer<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.primary
            .compare(a, b)
            .then_with(|| self.secondary.compare(a, b))
    }
}

/// Adapts a plain comparison closure into a [`Comparer`].
pub struct FnComparer<T, F> {
    cmp: F,
    _marker: PhantomData<fn(&T, &T)>,
}

impl<T, F> FnComparer<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(cmp: F) -> Self {
        Self {
            cmp,
            _marker: PhantomData,
        }
    }
}

impl<T, F> Comparer<T> for FnComparer<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.cmp)(a, b)
    }
}
