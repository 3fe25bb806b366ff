//! IntMap: bucket array, collision chains, splice removal and doubling growth.

use core::fmt;
use core::mem;

use crate::iter::{Iter, IterMut, Keys, Values};

const DEFAULT_CAPACITY: usize = 8;
const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// One owned link in a collision chain.
pub(crate) type Link<V> = Option<Box<Entry<V>>>;

pub(crate) struct Entry<V> {
    pub(crate) key: i64,
    pub(crate) value: V,
    pub(crate) next: Link<V>,
}

/// A chained hash map from `i64` keys to `V` values.
///
/// Buckets are selected by the magnitude of `key % capacity`; collisions go
/// into a singly linked chain with new entries appended at the tail, so a
/// bucket's chain is in insertion order. Crossing the load-factor threshold
/// doubles the bucket array and relinks every entry.
pub struct IntMap<V> {
    buckets: Vec<Link<V>>,
    len: usize,
    load_factor: f64,
}

/// Rejected construction arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    ZeroCapacity,
    /// Load factor must lie in `(0, 1]`; carries the offending value.
    LoadFactorOutOfRange(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCapacity => write!(f, "capacity must be non-zero"),
            ConfigError::LoadFactorOutOfRange(lf) => {
                write!(f, "load factor {lf} outside (0, 1]")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl<V> IntMap<V> {
    /// Create a map with capacity 8 and load factor 0.75.
    pub fn new() -> Self {
        Self::raw(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR)
    }

    /// Create a map with an explicit bucket count and the default load factor.
    pub fn with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_config(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Create a map with an explicit bucket count and load factor.
    ///
    /// `capacity` must be non-zero and `load_factor` must lie in `(0, 1]`
    /// (NaN is rejected).
    pub fn with_config(capacity: usize, load_factor: f64) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !(load_factor > 0.0 && load_factor <= 1.0) {
            return Err(ConfigError::LoadFactorOutOfRange(load_factor));
        }
        Ok(Self::raw(capacity, load_factor))
    }

    fn raw(capacity: usize, load_factor: f64) -> Self {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        Self {
            buckets,
            len: 0,
            load_factor,
        }
    }

    /// Bucket for `key` under `capacity` buckets: magnitude of the remainder.
    ///
    /// Sign-symmetric by design (9 and -9 share a bucket). `unsigned_abs` on
    /// the remainder is total, including for `i64::MIN`, since the remainder's
    /// magnitude is strictly below `capacity`.
    fn bucket_index(key: i64, capacity: usize) -> usize {
        (key % capacity as i64).unsigned_abs() as usize
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of buckets. Grows by doubling, never shrinks.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Insert or replace the value for `key`, returning the previous value
    /// if the key was present.
    ///
    /// The load-factor check runs first, before the key is looked up, so a
    /// replacing insert at the threshold still triggers growth.
    pub fn insert(&mut self, key: i64, value: V) -> Option<V> {
        if self.len as f64 >= self.load_factor * self.buckets.len() as f64 {
            self.grow();
        }

        let idx = Self::bucket_index(key, self.buckets.len());
        let mut link = &mut self.buckets[idx];
        loop {
            match link {
                Some(entry) if entry.key == key => {
                    return Some(mem::replace(&mut entry.value, value));
                }
                Some(entry) => link = &mut entry.next,
                None => break,
            }
        }
        *link = Some(Box::new(Entry {
            key,
            value,
            next: None,
        }));
        self.len += 1;
        None
    }

    /// Borrow the value stored for `key`, if present.
    pub fn get(&self, key: i64) -> Option<&V> {
        let idx = Self::bucket_index(key, self.buckets.len());
        let mut cur = self.buckets[idx].as_deref();
        while let Some(entry) = cur {
            if entry.key == key {
                return Some(&entry.value);
            }
            cur = entry.next.as_deref();
        }
        None
    }

    /// Mutably borrow the value stored for `key`, if present.
    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        let idx = Self::bucket_index(key, self.buckets.len());
        let mut cur = self.buckets[idx].as_deref_mut();
        while let Some(entry) = cur {
            if entry.key == key {
                return Some(&mut entry.value);
            }
            cur = entry.next.as_deref_mut();
        }
        None
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    /// Whether some entry's value equals `value`. Scans in traversal order.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Remove `key`'s entry by splicing it out of its chain, returning the
    /// removed value. Absent keys return `None`; capacity never shrinks.
    pub fn remove(&mut self, key: i64) -> Option<V> {
        let idx = Self::bucket_index(key, self.buckets.len());

        // Locate the key's position within its chain.
        let mut depth = 0usize;
        let mut cur = self.buckets[idx].as_deref();
        loop {
            match cur {
                None => return None,
                Some(entry) if entry.key == key => break,
                Some(entry) => {
                    depth += 1;
                    cur = entry.next.as_deref();
                }
            }
        }

        // Splice: relink the bucket head or the predecessor past the entry.
        let mut link = &mut self.buckets[idx];
        for _ in 0..depth {
            match link {
                Some(entry) => link = &mut entry.next,
                None => break,
            }
        }
        let mut removed = link.take()?;
        *link = removed.next.take();
        self.len -= 1;
        Some(removed.value)
    }

    /// Drop every entry, keeping the bucket array at its current capacity.
    pub fn clear(&mut self) {
        // Tear chains down iteratively; Box's recursive drop would recurse
        // once per entry on a long chain.
        for slot in self.buckets.iter_mut() {
            let mut head = slot.take();
            while let Some(mut entry) = head {
                head = entry.next.take();
            }
        }
        self.len = 0;
    }

    /// Iterate `(key, &value)` pairs: ascending bucket index, then chain
    /// order. Each call starts a fresh traversal.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.buckets, self.len)
    }

    /// Iterate `(key, &mut value)` pairs in traversal order.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut::new(&mut self.buckets, self.len)
    }

    /// All keys in traversal order; empty map yields an empty iterator.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys::new(self.iter())
    }

    /// All values in traversal order; empty map yields an empty iterator.
    pub fn values(&self) -> Values<'_, V> {
        Values::new(self.iter())
    }

    /// Double the bucket array and relink every entry into it.
    ///
    /// The new vector is built in full before it replaces the old one; old
    /// buckets are visited in index order and entries are appended at their
    /// new chain's tail, so each bucket's insertion order is preserved.
    fn grow(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let mut new_buckets: Vec<Link<V>> = Vec::with_capacity(new_capacity);
        new_buckets.resize_with(new_capacity, || None);

        for slot in self.buckets.iter_mut() {
            let mut head = slot.take();
            while let Some(mut entry) = head {
                head = entry.next.take();
                let idx = Self::bucket_index(entry.key, new_capacity);
                Self::push_tail(&mut new_buckets[idx], entry);
            }
        }

        self.buckets = new_buckets;
    }

    fn push_tail(bucket: &mut Link<V>, entry: Box<Entry<V>>) {
        let mut link = bucket;
        while let Some(cur) = link {
            link = &mut cur.next;
        }
        *link = Some(entry);
    }
}

impl<V> Default for IntMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for IntMap<V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<V: fmt::Debug> fmt::Debug for IntMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> Extend<(i64, V)> for IntMap<V> {
    fn extend<I: IntoIterator<Item = (i64, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> FromIterator<(i64, V)> for IntMap<V> {
    fn from_iter<I: IntoIterator<Item = (i64, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
