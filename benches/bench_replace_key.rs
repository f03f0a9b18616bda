extern crate criterion;

use adaptable_priority_queue::{AdaptiveBinaryHeap, EntryHandle};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use crate::generators::{choose_positions, gen_random_usizes, get_random_strings};

pub fn bench_replace_key(c: &mut Criterion) {
    let base_keys = gen_random_usizes(500_000, 0);
    let base_values = gen_random_usizes(500_000, 7);

    let mut group = c.benchmark_group("replace_key_usize");
    for &size in &[10_000, 500_000] {
        assert!(base_keys.len() >= size);

        let new_keys: Vec<usize> = gen_random_usizes(500, 564);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut base_heap = AdaptiveBinaryHeap::with_capacity(size);
            let handles: Vec<EntryHandle> = base_keys[..size]
                .iter()
                .zip(base_values[..size].iter())
                .map(|(&k, &v)| base_heap.insert(k, v).unwrap())
                .collect();
            let targets: Vec<EntryHandle> = choose_positions(size, 500, 500)
                .into_iter()
                .map(|i| handles[i])
                .collect();
            b.iter_batched(
                || base_heap.clone(),
                |mut heap| {
                    for (&handle, &key) in targets.iter().zip(new_keys.iter()) {
                        black_box(heap.replace_key(handle, key).unwrap());
                    }
                    heap
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();

    let mut group = c.benchmark_group("replace_key_string");
    let base_keys = get_random_strings(50_000, 0);
    let base_values = get_random_strings(50_000, 7);

    for &size in &[1_000, 50_000] {
        assert!(base_keys.len() >= size);

        let new_keys: Vec<String> = get_random_strings(500, 564);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut base_heap = AdaptiveBinaryHeap::with_capacity(size);
            let handles: Vec<EntryHandle> = base_keys[..size]
                .iter()
                .zip(base_values[..size].iter())
                .map(|(k, v)| base_heap.insert(k.clone(), v.clone()).unwrap())
                .collect();
            let targets: Vec<EntryHandle> = choose_positions(size, 500, 500)
                .into_iter()
                .map(|i| handles[i])
                .collect();
            b.iter_batched(
                || (base_heap.clone(), new_keys.clone()),
                |(mut heap, new_keys)| {
                    for (&handle, key) in targets.iter().zip(new_keys) {
                        black_box(heap.replace_key(handle, key).unwrap());
                    }
                    heap
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_replace_key);
criterion_main!(benches);
