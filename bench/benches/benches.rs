use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fault_core::{Palette, TerrainConfig, TerrainEngine, generate, render};
use std::hint::black_box;

const SIZE: usize = 256;
const FAULTS: usize = 200;

// Same total work at every thread count, only wall-clock should move
fn bench_generate_threads(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate 256x256, 200 faults");
    group.sample_size(10);
    for threads in [1, 2, 4, 8] {
        let engine = TerrainEngine::new(TerrainConfig::new(SIZE, SIZE, threads, FAULTS)).unwrap();
        group.bench_with_input(BenchmarkId::new("threads", threads), &engine, |b, engine| {
            b.iter(|| black_box(engine.generate().unwrap()))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let terrain = generate(SIZE, SIZE, 4, FAULTS).unwrap();
    c.bench_function("render ocean 256x256", |b| {
        b.iter(|| black_box(render(&terrain.grid, Palette::Ocean)))
    });
    c.bench_function("render terrain 256x256", |b| {
        b.iter(|| black_box(render(&terrain.grid, Palette::Terrain)))
    });
}

criterion_group!(terrain_benchmarks, bench_generate_threads, bench_render);
criterion_main!(terrain_benchmarks);
