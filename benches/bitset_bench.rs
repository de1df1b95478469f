use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use shared_bitset::BitSet;
use std::hint::black_box;

fn bench_set_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_contains");

    for &capacity in &[1u64 << 10, 1 << 16, 1 << 20] {
        group.bench_with_input(
            BenchmarkId::new("set_then_contains", capacity),
            &capacity,
            |b, &capacity| {
                let bits = BitSet::new(capacity).unwrap();
                b.iter(|| {
                    for offset in (0..capacity).step_by(7) {
                        bits.set(offset);
                    }
                    for offset in (0..capacity).step_by(7) {
                        black_box(bits.contains(offset));
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_neighbor_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbor_search");

    // One bit at each end; every scan crosses the empty middle
    for &capacity in &[1u64 << 12, 1 << 16, 1 << 20] {
        let bits = BitSet::new(capacity).unwrap();
        bits.set(0);
        bits.set(capacity - 1);

        group.bench_with_input(BenchmarkId::new("next", capacity), &bits, |b, bits| {
            b.iter(|| black_box(bits.next(black_box(1))));
        });
        group.bench_with_input(BenchmarkId::new("prev", capacity), &bits, |b, bits| {
            b.iter(|| black_box(bits.prev(black_box(capacity - 2))));
        });
    }
    group.finish();
}

fn bench_clear_max(c: &mut Criterion) {
    c.bench_function("clear_max_rescan", |b| {
        let bits = BitSet::new(1 << 16).unwrap();
        bits.set(0);
        b.iter(|| {
            bits.set(60_000);
            bits.clear(60_000);
            black_box(bits.max_pos());
        });
    });
}

criterion_group!(benches, bench_set_contains, bench_neighbor_search, bench_clear_max);
criterion_main!(benches);
