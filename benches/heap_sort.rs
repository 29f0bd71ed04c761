mod utils;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use prio_heap::{HeapOrdering, PriorityHeap};
use utils::get_random_priorities;

pub fn heap_sort_benchmark(c: &mut Criterion) {
    let n = 50_000;
    let priorities = get_random_priorities(n, 7);
    let mut group = c.benchmark_group("heap_sort");
    for ordering in [HeapOrdering::MinFirst, HeapOrdering::MaxFirst].iter() {
        group.bench_with_input(
            BenchmarkId::new("prio_heap", ordering),
            ordering,
            |b, &o| {
                b.iter(|| {
                    let heap = PriorityHeap::from_iter_with(o, priorities.iter().copied());
                    black_box(heap.into_sorted_vec())
                })
            },
        );
    }
    group.bench_function("std_binary_heap", |b| {
        b.iter(|| black_box(utils::other_impls::sort_std(&priorities)))
    });

    group.finish();
}

criterion_group!(benches, heap_sort_benchmark);
criterion_main!(benches);
