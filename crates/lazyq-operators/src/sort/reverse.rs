use std::iter::Rev;
use std::vec;

use crate::trace;

/// Yields the source last to first; drains it on the first pull.
#[derive(Debug, Clone)]
pub struct Reverse<I, T> {
    source: I,
    reversed: Option<Rev<vec::IntoIter<T>>>,
}

impl<I, T> Reverse<I, T> {
    pub fn new(source: I) -> Self {
        Self {
            source,
            reversed: None,
        }
    }
}

impl<I, T> Iterator for Reverse<I, T>
where
    I: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.reversed.is_none() {
            let buf: Vec<T> = self.source.by_ref().collect();
            trace::emit_materialized("reverse", buf.len());
            self.reversed = Some(buf.into_iter().rev());
        }
        self.reversed.as_mut().and_then(|it| it.next())
    }
}
