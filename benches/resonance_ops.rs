use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use latticesync::lattice::{collapse, generate, lattice_points, LatticePoint, TorusParams};
use latticesync::{encode, map, ResonanceConfig, ResonanceMapper};

fn bench_encode_map(c: &mut Criterion) {
    let sizes = [16usize, 256, 4096, 65536];

    let mut group = c.benchmark_group("encode_map");
    for size in sizes {
        let data: Vec<u8> = (0..size).map(|i| (i as u8).wrapping_mul(31)).collect();

        group.bench_with_input(BenchmarkId::new("encode", size), &data, |bencher, data| {
            bencher.iter(|| black_box(encode(black_box(data))))
        });

        let value = encode(&data);
        group.bench_with_input(BenchmarkId::new("map", size), &value, |bencher, value| {
            bencher.iter(|| black_box(map(black_box(value))))
        });
    }

    let wide = ResonanceMapper::new(ResonanceConfig::wide());
    let value = encode(b"Axiomatic Sync");
    group.bench_function("map_wide", |bencher| {
        bencher.iter(|| black_box(wide.map(black_box(&value))))
    });

    group.finish();
}

fn bench_lattice(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice");

    // Warm the cache so the lookup bench measures the fast path only
    let _ = lattice_points();

    group.bench_function("cached_lookup", |bencher| {
        bencher.iter(|| black_box(lattice_points().len()))
    });

    group.bench_function("generate_default", |bencher| {
        bencher.iter(|| black_box(generate(black_box(&TorusParams::default()))))
    });

    let nodes = generate(&TorusParams::pinched());
    let points: Vec<LatticePoint> = (0..64)
        .map(|i| {
            let v = i as f64;
            LatticePoint::new(v, v * 1.1, v * 0.9)
        })
        .collect();
    group.bench_function("collapse_64", |bencher| {
        bencher.iter(|| black_box(collapse(black_box(&points), black_box(&nodes))))
    });

    group.finish();
}

criterion_group!(benches, bench_encode_map, bench_lattice);
criterion_main!(benches);
