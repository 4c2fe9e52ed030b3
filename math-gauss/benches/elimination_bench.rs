use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use math_gauss::{AugmentedMatrix, GaussConfig, NoTrace, gauss_solve, gauss_solve_traced};
use ndarray::Array2;

fn dominant_system(n: usize) -> AugmentedMatrix {
    let data = Array2::from_shape_fn((n, n + 1), |(i, j)| {
        if i == j {
            4.0 * n as f64
        } else {
            ((i * 31 + j * 17) % 13) as f64 / 13.0 - 0.5
        }
    });
    AugmentedMatrix::new(data).unwrap()
}

fn bench_gauss_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauss_solve");
    for n in [16, 64, 256] {
        let system = dominant_system(n);
        group.bench_with_input(BenchmarkId::new("sequential", n), &system, |b, system| {
            b.iter(|| gauss_solve(black_box(system)).unwrap())
        });

        let config = GaussConfig {
            parallel: true,
            ..GaussConfig::default()
        };
        group.bench_with_input(BenchmarkId::new("parallel", n), &system, |b, system| {
            b.iter(|| gauss_solve_traced(black_box(system), &config, &mut NoTrace).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_gauss_solve);
criterion_main!(benches);
