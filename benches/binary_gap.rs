use std::hint::black_box;

use binary_gap::{binary_gap, gaps};
use criterion::{Criterion, criterion_group, criterion_main};

const INPUTS: [u32; 4] = [0b1001, 529, 2147483647, (1 << 31) | 1];

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("scan", |b| {
        b.iter(|| {
            for n in INPUTS {
                black_box(binary_gap(black_box(n)));
            }
        })
    });

    c.bench_function("set_bits", |b| {
        b.iter(|| {
            for n in INPUTS {
                black_box(gaps(black_box(n)).max().unwrap_or(0));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
