//! Sequence generators: `range`, `empty`, `repeat`.

use std::iter::{self, Empty, Repeat, Take};

use lazyq_core::error::{QueryError, Result};

use crate::seq::Seq;

/// `count` consecutive integers starting at `start`.
///
/// Fails with `InvalidArgument` for a negative count or when the last value
/// would overflow `i64`.
pub fn range(start: i64, count: i64) -> Result<Seq<IntRange>> {
    if count < 0 {
        return Err(QueryError::InvalidArgument(format!(
            "range: count must be non-negative, got {}",
            count
        )));
    }
    if count > 0 && start.checked_add(count - 1).is_none() {
        return Err(QueryError::InvalidArgument(format!(
            "range: start {} + count {} overflows i64",
            start, count
        )));
    }
    Ok(Seq::new(IntRange {
        next: start,
        remaining: count as u64,
    }))
}

/// A sequence that yields nothing.
pub fn empty<T>() -> Seq<Empty<T>> {
    Seq::new(iter::empty())
}

/// `count` copies of `value`. Fails with `InvalidArgument` for a negative count.
pub fn repeat<T: Clone>(value: T, count: i64) -> Result<Seq<Take<Repeat<T>>>> {
    if count < 0 {
        return Err(QueryError::InvalidArgument(format!(
            "repeat: count must be non-negative, got {}",
            count
        )));
    }
    let count = usize::try_from(count).unwrap_or(usize::MAX);
    Ok(Seq::new(iter::repeat(value).take(count)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntRange {
    next: i64,
    remaining: u64,
}

impl Iterator for IntRange {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.next;
        self.remaining -= 1;
        // Only advance while values remain so the last one cannot overflow.
        if self.remaining > 0 {
            self.next += 1;
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
