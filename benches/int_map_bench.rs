use chained_intmap::IntMap;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = i64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s as i64)
    })
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("int_map_insert_10k", |b| {
        b.iter_batched(
            IntMap::<u64>::new,
            |mut m| {
                for (i, k) in lcg(1).take(10_000).enumerate() {
                    m.insert(k, i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("int_map_get_hit", |b| {
        let mut m = IntMap::new();
        let keys: Vec<i64> = lcg(7).take(20_000).collect();
        for (i, &k) in keys.iter().enumerate() {
            m.insert(k, i as u64);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = *it.next().unwrap();
            black_box(m.get(k));
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("int_map_get_miss", |b| {
        let mut m = IntMap::new();
        for (i, k) in lcg(11).take(10_000).enumerate() {
            m.insert(k, i as u64);
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // keys unlikely to be in the map
            let k = miss.next().unwrap();
            black_box(m.get(k));
        })
    });
}

fn bench_remove_insert(c: &mut Criterion) {
    c.bench_function("int_map_remove_insert", |b| {
        let mut m = IntMap::new();
        let keys: Vec<i64> = lcg(23).take(10_000).collect();
        for (i, &k) in keys.iter().enumerate() {
            m.insert(k, i as u64);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = *it.next().unwrap();
            let v = m.remove(k).unwrap();
            m.insert(k, v);
        })
    });
}

fn bench_iterate(c: &mut Criterion) {
    c.bench_function("int_map_iterate_10k", |b| {
        let mut m = IntMap::new();
        for (i, k) in lcg(31).take(10_000).enumerate() {
            m.insert(k, i as u64);
        }
        b.iter(|| {
            let mut acc = 0u64;
            for (_, v) in &m {
                acc = acc.wrapping_add(*v);
            }
            black_box(acc)
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_get_hit, bench_get_miss, bench_remove_insert, bench_iterate
}
criterion_main!(benches);
