use std::collections::HashSet;
use std::hint::black_box;

use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use kind_map::kinds::CUSTOM_SET;
use kind_map::kinds::CustomSet;
use kind_map::kinds::DefaultHashBuilder;
use kind_map::kinds::HASH_SET;
use kind_map::kinds::SEQUENCE;

const LEN: u64 = 4096;

fn bench_sequence(criterion: &mut Criterion) {
    let input: Vec<u64> = (0..LEN).collect();
    let mut group = criterion.benchmark_group("map/sequence");
    group.throughput(Throughput::Elements(LEN));
    group.bench_function("kind_map", |b| b.iter(|| kind_map::map(&SEQUENCE, black_box(&input), |value| value / 2)));
    group.bench_function("iter_collect", |b| {
        b.iter(|| black_box(&input).iter().map(|value| value / 2).collect::<Vec<_>>());
    });
    group.finish();
}

fn bench_sets(criterion: &mut Criterion) {
    let hashed: HashSet<u64, DefaultHashBuilder> = (0..LEN).collect();
    let custom: CustomSet<u64> = (0..LEN).collect();
    let mut group = criterion.benchmark_group("map/sets");
    group.throughput(Throughput::Elements(LEN));
    group.bench_function("hash_set", |b| b.iter(|| kind_map::map(&HASH_SET, black_box(&hashed), |value| value / 2)));
    group.bench_function("custom_set", |b| b.iter(|| kind_map::map(&CUSTOM_SET, black_box(&custom), |value| value / 2)));
    group.finish();
}

criterion_group!(benches, bench_sequence, bench_sets);
criterion_main!(benches);
