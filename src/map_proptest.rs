#![cfg(test)]

// Property tests for IntMap kept inside the crate so they can drive
// unusual constructions (tiny capacities, extreme load factors) without a
// public test-only surface.

use crate::IntMap;
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(usize),
    ContainsValue(i32),
    Mutate(usize, i32),
    Iterate,
    Clear,
}

// Keys biased toward small magnitudes (dense collisions at small
// capacities) plus sign-symmetric pairs and the extremes.
fn arb_key() -> impl Strategy<Value = i64> {
    prop_oneof![
        4 => -16i64..=16,
        2 => (1i64..=16).prop_map(|k| -k),
        1 => any::<i64>(),
        1 => Just(i64::MIN),
        1 => Just(i64::MAX),
    ]
}

fn arb_scenario() -> impl Strategy<Value = (Vec<i64>, Vec<OpI>)> {
    proptest::collection::vec(arb_key(), 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            5 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            3 => idx.clone().prop_map(OpI::Remove),
            2 => idx.clone().prop_map(OpI::Get),
            1 => idx.clone().prop_map(OpI::Contains),
            1 => any::<i32>().prop_map(OpI::ContainsValue),
            1 => (idx, any::<i32>()).prop_map(|(i, v)| OpI::Mutate(i, v)),
            1 => Just(OpI::Iterate),
            1 => Just(OpI::Clear),
        ];
        (Just(pool), proptest::collection::vec(op, 1..96))
    })
}

// Property 1: the full operation set agrees with std's HashMap at every
// step, across tiny capacities and the whole (0, 1] load-factor range.
proptest! {
    #[test]
    fn prop_model_agreement(
        (pool, ops) in arb_scenario(),
        capacity in 1usize..=8,
        load_factor in prop_oneof![Just(0.25), Just(0.5), Just(0.75), Just(1.0)],
    ) {
        let mut m: IntMap<i32> = IntMap::with_config(capacity, load_factor).unwrap();
        let mut model: HashMap<i64, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let key = pool[i];
                    prop_assert_eq!(m.insert(key, v), model.insert(key, v));
                }
                OpI::Remove(i) => {
                    let key = pool[i];
                    prop_assert_eq!(m.remove(key), model.remove(&key));
                }
                OpI::Get(i) => {
                    let key = pool[i];
                    prop_assert_eq!(m.get(key), model.get(&key));
                }
                OpI::Contains(i) => {
                    let key = pool[i];
                    prop_assert_eq!(m.contains_key(key), model.contains_key(&key));
                }
                OpI::ContainsValue(v) => {
                    prop_assert_eq!(
                        m.contains_value(&v),
                        model.values().any(|mv| *mv == v)
                    );
                }
                OpI::Mutate(i, delta) => {
                    let key = pool[i];
                    let updated = m.get_mut(key).map(|v| {
                        *v = v.wrapping_add(delta);
                        *v
                    });
                    let expected = model.get_mut(&key).map(|v| {
                        *v = v.wrapping_add(delta);
                        *v
                    });
                    prop_assert_eq!(updated, expected);
                }
                OpI::Iterate => {
                    let mut seen: Vec<(i64, i32)> =
                        m.iter().map(|(k, v)| (k, *v)).collect();
                    let mut expected: Vec<(i64, i32)> =
                        model.iter().map(|(k, v)| (*k, *v)).collect();
                    seen.sort_unstable();
                    expected.sort_unstable();
                    prop_assert_eq!(seen, expected);
                }
                OpI::Clear => {
                    m.clear();
                    model.clear();
                    prop_assert!(m.is_empty());
                }
            }

            // Invariants after each step.
            prop_assert_eq!(m.len(), model.len());
            prop_assert_eq!(m.is_empty(), model.is_empty());
            prop_assert!(m.capacity() >= capacity, "capacity must never shrink");
            prop_assert_eq!(m.iter().count(), m.len());
        }
    }
}

// Property 2: keys() and values() are parallel projections of a single
// traversal snapshot, and growth never loses or reorders data within a
// traversal.
proptest! {
    #[test]
    fn prop_keys_values_snapshot(
        entries in proptest::collection::btree_map(arb_key(), any::<i32>(), 0..64),
        capacity in 1usize..=4,
    ) {
        let mut m: IntMap<i32> = IntMap::with_capacity(capacity).unwrap();
        for (k, v) in &entries {
            m.insert(*k, *v);
        }
        prop_assert_eq!(m.len(), entries.len());

        let keys: Vec<i64> = m.keys().collect();
        let values: Vec<i32> = m.values().copied().collect();
        let pairs: Vec<(i64, i32)> = m.iter().map(|(k, v)| (k, *v)).collect();

        prop_assert_eq!(keys.len(), m.len());
        prop_assert_eq!(values.len(), m.len());

        // Parallel order: zipping keys and values reproduces iter().
        let zipped: Vec<(i64, i32)> = keys.iter().copied().zip(values).collect();
        prop_assert_eq!(zipped, pairs);

        // Every inserted key remains retrievable with its value.
        for (k, v) in &entries {
            prop_assert_eq!(m.get(*k), Some(v));
        }
    }
}
