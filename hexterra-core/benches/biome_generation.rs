#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use hexterra_core::worldgen::{BiomeCounts, HexBiomeSource, world_coord};

/// One map chunk as the renderer sees it.
const CHUNK: i64 = 16;

fn bench_single_hex(c: &mut Criterion) {
    let source = HexBiomeSource::new(0);

    c.bench_function("biome_single_hex", |b| {
        let mut i = 0_i64;
        b.iter(|| {
            i += 1;
            black_box(source.biome(world_coord(black_box(i % 512)), world_coord(black_box(-i % 512))))
        });
    });
}

fn bench_chunk_tally(c: &mut Criterion) {
    let source = HexBiomeSource::new(0);

    c.bench_function("biome_chunk_tally", |b| {
        b.iter(|| {
            black_box(BiomeCounts::tally(
                &source,
                world_coord(black_box(0)),
                world_coord(black_box(0)),
                CHUNK,
                CHUNK,
            ))
        });
    });
}

fn bench_chunk_grid(c: &mut Criterion) {
    let source = HexBiomeSource::new(0);

    let mut group = c.benchmark_group("biome_chunk_grid");
    for radius in [1_i64, 3] {
        let side = radius * 2 + 1;
        let chunk_count = side * side;
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{side}x{side}")),
            &radius,
            |b, &r| {
                b.iter(|| {
                    for cx in -r..=r {
                        for cz in -r..=r {
                            black_box(BiomeCounts::tally(
                                &source,
                                world_coord(cx * CHUNK),
                                world_coord(cz * CHUNK),
                                CHUNK,
                                CHUNK,
                            ));
                        }
                    }
                });
            },
        );
        group.throughput(criterion::Throughput::Elements(chunk_count as u64));
    }
    group.finish();
}

criterion_group!(benches, bench_single_hex, bench_chunk_tally, bench_chunk_grid);
criterion_main!(benches);
