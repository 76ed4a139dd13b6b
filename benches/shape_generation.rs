use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cube_chains::shape::{expand_blocks, generate, walk};

/// Benchmark: random walk alone at several chain lengths
fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");
    for segment_count in [4usize, 16, 64, 256] {
        let segments: Vec<u32> = (0..segment_count).map(|i| (i % 4) as u32 + 1).collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(segment_count),
            &segments,
            |b, segments| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(7);
                    black_box(walk(black_box(segments), &mut rng))
                })
            },
        );
    }
    group.finish();
}

/// Benchmark: cube expansion of an already-walked chain
fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_blocks");
    for segment_count in [4usize, 64, 256] {
        let segments: Vec<u32> = (0..segment_count).map(|i| (i % 4) as u32 + 1).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let blocks = walk(&segments, &mut rng);
        group.bench_with_input(
            BenchmarkId::from_parameter(blocks.len()),
            &blocks,
            |b, blocks| b.iter(|| black_box(expand_blocks(black_box(blocks)))),
        );
    }
    group.finish();
}

/// Benchmark: full generation as the scene performs it at startup
fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_default_segments", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(7);
            black_box(generate(black_box(&[3, 3, 2, 3]), &mut rng))
        })
    });
}

criterion_group!(benches, bench_walk, bench_expand, bench_generate);
criterion_main!(benches);
