//! `group_by`: partition a sequence into keyed groups.
//!
//! Groups come out in the order their key was first seen; elements inside a
//! group keep source order. The whole source is consumed on the first pull.

use std::collections::HashMap;
use std::hash::Hash;
use std::{slice, vec};

use crate::seq::Seq;
use crate::trace;

impl<I: Iterator> Seq<I> {
    pub fn group_by<K, F>(self, key: F) -> Seq<GroupBy<I, F, K, I::Item>>
    where
        F: FnMut(&I::Item) -> K,
        K: Eq + Hash + Clone,
    {
        Seq::new(GroupBy {
            source: self.iter,
            key,
            groups: None,
        })
    }
}

/// One group produced by `group_by`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping<K, T> {
    key: K,
    elements: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    pub fn new(key: K, elements: Vec<T>) -> Self {
        Self { key, elements }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.elements)
    }
}

impl<K, T> IntoIterator for Grouping<K, T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a Grouping<K, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[derive(Clone)]
pub struct GroupBy<I, F, K, T> {
    source: I,
    key: F,
    groups: Option<vec::IntoIter<Grouping<K, T>>>,
}

impl<I, F, K, T> Iterator for GroupBy<I, F, K, T>
where
    I: Iterator<Item = T>,
    F: FnMut(&T) -> K,
    K: Eq + Hash + Clone,
{
    type Item = Grouping<K, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.groups.is_none() {
            let mut slots: HashMap<K, usize> = HashMap::new();
            let mut groups: Vec<Grouping<K, T>> = Vec::new();
            for item in self.source.by_ref() {
                let k = (self.key)(&item);
                match slots.get(&k).copied() {
                    Some(slot) => groups[slot].elements.push(item),
                    None => {
                        slots.insert(k.clone(), groups.len());
                        groups.push(Grouping::new(k, vec![item]));
                    }
                }
            }
            trace::emit_materialized("group_by", groups.len());
            self.groups = Some(groups.into_iter());
        }
        self.groups.as_mut().and_then(|it| it.next())
    }
}
