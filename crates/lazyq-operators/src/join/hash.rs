use std::collections::HashMap;
use std::hash::Hash;

use super::build_lookup;

pub struct Join<I: Iterator, J: Iterator, K, FO, FI, FR> {
    outer: I,
    inner: Option<J>,
    lookup: HashMap<K, Vec<J::Item>>,
    outer_key: FO,
    inner_key: FI,
    result: FR,
    /// Outer element being expanded, its key, and the next match index.
    current: Option<(I::Item, K, usize)>,
}

impl<I, J, K, FO, FI, FR> Join<I, J, K, FO, FI, FR>
where
    I: Iterator,
    J: Iterator,
{
    pub fn new(outer: I, inner: J, outer_key: FO, inner_key: FI, result: FR) -> Self {
        Self {
            outer,
            inner: Some(inner),
            lookup: HashMap::new(),
            outer_key,
            inner_key,
            result,
            current: None,
        }
    }
}

impl<I, J, K, FO, FI, FR, R> Iterator for Join<I, J, K, FO, FI, FR>
where
    I: Iterator,
    J: Iterator,
    K: Eq + Hash,
    FO: FnMut(&I::Item) -> K,
    FI: FnMut(&J::Item) -> K,
    FR: FnMut(&I::Item, &J::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if let Some(inner) = self.inner.take() {
            self.lookup = build_lookup(inner, &mut self.inner_key, "join");
        }
        loop {
            if let Some((outer, key, pos)) = self.current.as_mut() {
                if let Some(matched) = self.lookup.get(&*key).and_then(|bucket| bucket.get(*pos)) {
                    *pos += 1;
                    return Some((self.result)(&*outer, matched));
                }
            }
            let outer = self.outer.next()?;
            let key = (self.outer_key)(&outer);
            self.current = Some((outer, key, 0));
        }
    }
}
