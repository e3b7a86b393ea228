use std::collections::HashMap;
use std::hash::Hash;

use super::build_lookup;

pub struct GroupJoin<I, J: Iterator, K, FO, FI, FR> {
    outer: I,
    inner: Option<J>,
    lookup: HashMap<K, Vec<J::Item>>,
    outer_key: FO,
    inner_key: FI,
    result: FR,
}

impl<I, J, K, FO, FI, FR> GroupJoin<I, J, K, FO, FI, FR>
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
        }
    }
}

impl<I, J, K, FO, FI, FR, R> Iterator for GroupJoin<I, J, K, FO, FI, FR>
where
    I: Iterator,
    J: Iterator,
    K: Eq + Hash,
    FO: FnMut(&I::Item) -> K,
    FI: FnMut(&J::Item) -> K,
    FR: FnMut(I::Item, &[J::Item]) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if let Some(inner) = self.inner.take() {
            self.lookup = build_lookup(inner, &mut self.inner_key, "group_join");
        }
        let outer = self.outer.next()?;
        let key = (self.outer_key)(&outer);
        let matches = self.lookup.get(&key).map(Vec::as_slice).unwrap_or(&[]);
        Some((self.result)(outer, matches))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.outer.size_hint()
    }
}
