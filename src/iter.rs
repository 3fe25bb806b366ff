//! Traversal-order iterators: ascending bucket index, then chain order.
//!
//! Iterators borrow the bucket array and carry their own cursor (current
//! chain position plus the remaining bucket slice), so every call to
//! `iter`/`keys`/`values` starts a fresh traversal. None of them can mutate
//! the structure; removal lives on the map itself.

use core::iter::FusedIterator;
use core::slice;

use crate::map::{Entry, IntMap, Link};

/// Immutable `(key, &value)` iterator over an [`IntMap`].
pub struct Iter<'a, V> {
    buckets: slice::Iter<'a, Link<V>>,
    chain: Option<&'a Entry<V>>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(buckets: &'a [Link<V>], len: usize) -> Self {
        Self {
            buckets: buckets.iter(),
            chain: None,
            remaining: len,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain {
                self.chain = entry.next.as_deref();
                self.remaining -= 1;
                return Some((entry.key, &entry.value));
            }
            // Skip empty slots; runs out cleanly at the last bucket.
            self.chain = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

/// Mutable `(key, &mut value)` iterator over an [`IntMap`].
pub struct IterMut<'a, V> {
    buckets: slice::IterMut<'a, Link<V>>,
    chain: Option<&'a mut Entry<V>>,
    remaining: usize,
}

impl<'a, V> IterMut<'a, V> {
    pub(crate) fn new(buckets: &'a mut [Link<V>], len: usize) -> Self {
        Self {
            buckets: buckets.iter_mut(),
            chain: None,
            remaining: len,
        }
    }
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (i64, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.take() {
                // Split the borrow: hand out the value, keep the next link.
                let Entry { key, value, next } = entry;
                self.chain = next.as_deref_mut();
                self.remaining -= 1;
                return Some((*key, value));
            }
            self.chain = self.buckets.next()?.as_deref_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}
impl<V> FusedIterator for IterMut<'_, V> {}

/// Key iterator in traversal order.
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Keys<'a, V> {
    pub(crate) fn new(inner: Iter<'a, V>) -> Self {
        Self { inner }
    }
}

impl<V> Iterator for Keys<'_, V> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}
impl<V> FusedIterator for Keys<'_, V> {}

/// Value iterator in traversal order.
pub struct Values<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(inner: Iter<'a, V>) -> Self {
        Self { inner }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}
impl<V> FusedIterator for Values<'_, V> {}

impl<'a, V> IntoIterator for &'a IntMap<V> {
    type Item = (i64, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut IntMap<V> {
    type Item = (i64, &'a mut V);
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::IntMap;

    /// Invariant: iteration yields exactly len() items, each present key
    /// exactly once, in ascending-bucket-then-chain order.
    #[test]
    fn yields_each_entry_once_in_order() {
        let mut m = IntMap::new();
        // Buckets at capacity 8: 2 -> 2, 9 -> 1, 17 -> 1, 4 -> 4.
        m.insert(9, "a");
        m.insert(2, "b");
        m.insert(17, "c");
        m.insert(4, "d");

        let pairs: Vec<(i64, &&str)> = m.iter().collect();
        assert_eq!(pairs.len(), m.len());
        assert_eq!(
            pairs,
            vec![(9, &"a"), (17, &"c"), (2, &"b"), (4, &"d")]
        );
    }

    /// Invariant: every traversal request starts fresh and sees the same
    /// snapshot of an unchanged map.
    #[test]
    fn restartable() {
        let mut m = IntMap::new();
        for k in 0..5 {
            m.insert(k, k * k);
        }
        let first: Vec<(i64, i64)> = m.iter().map(|(k, v)| (k, *v)).collect();
        let second: Vec<(i64, i64)> = m.iter().map(|(k, v)| (k, *v)).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    /// Invariant: an exhausted iterator keeps returning None; an empty map's
    /// iterators are empty from the start, never an absent marker.
    #[test]
    fn fused_and_empty() {
        let empty: IntMap<i32> = IntMap::new();
        let mut it = empty.iter();
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);

        assert_eq!(empty.keys().count(), 0);
        assert_eq!(empty.values().count(), 0);

        let mut m = IntMap::new();
        m.insert(1, "a");
        let mut it = m.iter();
        assert_eq!(it.next(), Some((1, &"a")));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    /// Invariant: size_hint/len track the remaining count exactly.
    #[test]
    fn exact_size() {
        let mut m = IntMap::new();
        for k in 0..4 {
            m.insert(k, ());
        }
        let mut it = m.iter();
        assert_eq!(it.len(), 4);
        it.next();
        assert_eq!(it.len(), 3);
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(m.keys().len(), 4);
        assert_eq!(m.values().len(), 4);
    }

    /// Invariant: keys() and values() are parallel projections of one
    /// traversal order.
    #[test]
    fn keys_values_parallel() {
        let mut m = IntMap::new();
        for k in [3i64, -3, 11, 40, 7] {
            m.insert(k, k * 2);
        }
        let keys: Vec<i64> = m.keys().collect();
        let values: Vec<i64> = m.values().copied().collect();
        assert_eq!(keys.len(), values.len());
        for (k, v) in keys.iter().zip(&values) {
            assert_eq!(*v, k * 2);
            assert_eq!(m.get(*k), Some(v));
        }
    }

    /// Invariant: iter_mut visits every entry once and writes are observed
    /// by subsequent lookups.
    #[test]
    fn iter_mut_updates() {
        let mut m = IntMap::new();
        for k in 0..6 {
            m.insert(k, k);
        }
        for (k, v) in m.iter_mut() {
            *v += k * 100;
        }
        for k in 0..6 {
            assert_eq!(m.get(k), Some(&(k + k * 100)));
        }
    }

    /// Invariant: both reference IntoIterator forms traverse the full map.
    #[test]
    fn into_iterator_for_refs() {
        let mut m = IntMap::new();
        m.insert(1, 10);
        m.insert(2, 20);

        let mut total = 0;
        for (_, v) in &m {
            total += *v;
        }
        assert_eq!(total, 30);

        for (_, v) in &mut m {
            *v += 1;
        }
        assert_eq!(m.get(1), Some(&11));
        assert_eq!(m.get(2), Some(&21));
    }
}
