use criterion::{Criterion, criterion_group, criterion_main};
use merge_partially::{Value, merge_deep};
use merge_partially_test_utils::{deep_chain, profile_seed, wide_object};
use std::hint::black_box;

fn bench_wide_merge(criterion: &mut Criterion) {
    let seed = wide_object(1_000, 0);
    let overrides = wide_object(500, 1);

    criterion.bench_function("merge_deep_wide_1000", |bencher| {
        bencher.iter(|| {
            merge_deep(black_box(&seed), Some(black_box(&overrides))).expect("wide merge");
        });
    });
}

fn bench_deep_merge(criterion: &mut Criterion) {
    let seed = deep_chain(128, profile_seed());
    let overrides = deep_chain(
        128,
        Value::object([("user_name", Value::from("grace"))]),
    );

    criterion.bench_function("merge_deep_nested_128", |bencher| {
        bencher.iter(|| {
            merge_deep(black_box(&seed), Some(black_box(&overrides))).expect("deep merge");
        });
    });
}

criterion_group!(merge_benches, bench_wide_merge, bench_deep_merge);
criterion_main!(merge_benches);
