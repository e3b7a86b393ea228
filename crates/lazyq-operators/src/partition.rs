//! Partitioning: skip/take by count, by predicate, and from the end.
//!
//! Counts are signed; negative counts are clamped to zero. Counts past the end
//! of the sequence clamp silently.
//!
//! `skip_while`/`take_while` stop evaluating the predicate at the first
//! element that fails it. Later elements are never re-tested, so a predicate
//! that becomes true again does not resume skipping or taking.

use std::collections::{vec_deque, VecDeque};
use std::iter::{Skip, Take};

use crate::seq::{clamp_count, Seq};
use crate::trace;

impl<I: Iterator> Seq<I> {
    /// Drop the first `count` elements.
    pub fn skip(self, count: isize) -> Seq<Skip<I>> {
        Seq::new(self.iter.skip(clamp_count(count)))
    }

    /// Keep at most the first `count` elements.
    pub fn take(self, count: isize) -> Seq<Take<I>> {
        Seq::new(self.iter.take(clamp_count(count)))
    }

    /// Drop elements while `predicate` holds, then yield everything after,
    /// starting with the first element that failed it.
    pub fn skip_while<P>(self, predicate: P) -> Seq<SkipWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Seq::new(SkipWhile {
            iter: self.iter,
            predicate,
            skipping: true,
        })
    }

    /// Yield elements while `predicate` holds; end at the first failure.
    pub fn take_while<P>(self, predicate: P) -> Seq<TakeWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Seq::new(TakeWhile {
            iter: self.iter,
            predicate,
            done: false,
        })
    }

    /// Drop the last `count` elements. Streams with a lag of `count` elements.
    pub fn skip_last(self, count: isize) -> Seq<SkipLast<I, I::Item>> {
        let count = clamp_count(count);
        Seq::new(SkipLast {
            iter: self.iter,
            count,
            lag: VecDeque::new(),
        })
    }

    /// Keep only the last `count` elements. Drains the source on first pull.
    pub fn take_last(self, count: isize) -> Seq<TakeLast<I, I::Item>> {
        Seq::new(TakeLast {
            source: self.iter,
            count: clamp_count(count),
            tail: None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SkipWhile<I, P> {
    iter: I,
    predicate: P,
    skipping: bool,
}

impl<I, P> Iterator for SkipWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.skipping {
            loop {
                let item = self.iter.next()?;
                if !(self.predicate)(&item) {
                    self.skipping = false;
                    return Some(item);
                }
            }
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        if self.skipping {
            (0, hi)
        } else {
            (lo, hi)
        }
    }
}

#[derive(Debug, Clone)]
pub struct TakeWhile<I, P> {
    iter: I,
    predicate: P,
    done: bool,
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.iter.next()?;
        if (self.predicate)(&item) {
            Some(item)
        } else {
            self.done = true;
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

#[derive(Debug, Clone)]
pub struct SkipLast<I, T> {
    iter: I,
    count: usize,
    lag: VecDeque<T>,
}

impl<I, T> Iterator for SkipLast<I, T>
where
    I: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            self.lag.push_back(item);
            if self.lag.len() > self.count {
                return self.lag.pop_front();
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct TakeLast<I, T> {
    source: I,
    count: usize,
    tail: Option<vec_deque::IntoIter<T>>,
}

impl<I, T> Iterator for TakeLast<I, T>
where
    I: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.tail.is_none() {
            let mut window = VecDeque::new();
            if self.count > 0 {
                for item in self.source.by_ref() {
                    if window.len() == self.count {
                        window.pop_front();
                    }
                    window.push_back(item);
                }
            }
            trace::emit_materialized("take_last", window.len());
            self.tail = Some(window.into_iter());
        }
        self.tail.as_mut().and_then(|tail| tail.next())
    }
}
