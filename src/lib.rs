//! chained-intmap: a single-threaded hash map keyed by `i64`, built as an
//! explicit bucket array with singly linked collision chains.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, fully self-contained map whose every structural move
//!   (bucket selection, chain append, chain splice, growth) is visible in
//!   the source rather than delegated to a table crate.
//! - Layout: `Vec<Option<Box<Entry<V>>>>` buckets; each slot owns the head
//!   of its chain and each entry owns its successor. `len` counts entries
//!   reachable from the bucket array.
//! - Bucket selection: magnitude of `key % capacity`. Deterministic in
//!   `(key, capacity)` only; keys of equal magnitude and opposite sign
//!   share a bucket. Total for every key, including `i64::MIN`, because
//!   the remainder's magnitude is strictly below the capacity.
//! - Growth: when `len` reaches `load_factor * capacity` at the top of an
//!   insert, a fresh bucket vector of twice the capacity is built and every
//!   existing entry box is relinked into it (tail append, old buckets
//!   visited in index order) before the vector replaces the old one in a
//!   single assignment. Entries are moved, never recreated.
//!
//! Constraints
//! - Single-threaded: no interior mutability, no atomics; `&mut self` is
//!   the whole synchronization story.
//! - Lookups, removal and value scans are O(chain) / O(len) worst case;
//!   growth is O(len), amortized O(1) per insert by the doubling argument.
//! - At most one entry per key. `insert` on a present key replaces the
//!   value in place and returns the previous one.
//! - Capacity never shrinks; `clear` empties every slot but keeps the
//!   bucket array.
//!
//! Iteration
//! - `iter`/`iter_mut`/`keys`/`values` walk ascending bucket index, then
//!   chain order (which is insertion order within a bucket). Every call
//!   produces fresh iterator state; exhausted iterators are fused and keep
//!   returning `None`. Growth preserves per-bucket relative order.
//! - Removal does not share machinery with public iteration: `remove` is a
//!   direct chain splice (head swap or predecessor relink) inside the map.
//!
//! Notes and non-goals
//! - Not a `std::collections::HashMap` replacement: no user-pluggable
//!   hasher, no entry API, no ordering guarantee beyond traversal order.
//! - No concurrency safety; wrap externally if shared.
//! - Construction validates its arguments: zero capacity and load factors
//!   outside `(0, 1]` are rejected with [`ConfigError`].

mod iter;
mod map;
mod map_proptest;

// Public surface
pub use iter::{Iter, IterMut, Keys, Values};
pub use map::{ConfigError, IntMap};
