#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use hexterra_utils::fixed::Fixed;
use hexterra_utils::noise::{GradientNoise, PermutationTable};
use std::hint::black_box;

fn bench_table_build(c: &mut Criterion) {
    c.bench_function("permutation_table_build", |b| {
        b.iter(|| black_box(PermutationTable::build(black_box(0))));
    });
}

fn bench_sample_3d(c: &mut Criterion) {
    let noise = GradientNoise::new(0);

    c.bench_function("gradient_noise_sample", |b| {
        let mut i = 0_i64;
        b.iter(|| {
            i += 1;
            let x = Fixed::from_ratio(i * 7, 3);
            let z = Fixed::from_ratio(i * 13, 5);
            black_box(noise.sample(black_box(x), Fixed::ZERO, black_box(z)))
        });
    });
}

criterion_group!(benches, bench_table_build, bench_sample_3d);
criterion_main!(benches);
