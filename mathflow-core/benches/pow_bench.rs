//! Benchmark: exponential and logarithm approximations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mathflow_core::{exp, log, Batch};

fn exp_benchmark(c: &mut Criterion) {
    let inputs: Vec<f32> = (0..1000).map(|i| i as f32 / 50.0 - 10.0).collect();

    c.bench_function("exp_order6_scalar", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in &inputs {
                acc += exp::<6, f32>(black_box(x));
            }
            black_box(acc)
        })
    });

    c.bench_function("exp_order3_scalar", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in &inputs {
                acc += exp::<3, f32>(black_box(x));
            }
            black_box(acc)
        })
    });

    c.bench_function("exp_order6_batch", |b| {
        b.iter(|| {
            let mut acc = Batch::<f32>::from_array([0.0; 4]);
            for chunk in inputs.chunks_exact(4) {
                let v = Batch::<f32>::from_array([chunk[0], chunk[1], chunk[2], chunk[3]]);
                acc = acc + exp::<6, Batch<f32>>(black_box(v));
            }
            black_box(acc.to_array())
        })
    });

    c.bench_function("exp_std_reference", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in &inputs {
                acc += black_box(x).exp();
            }
            black_box(acc)
        })
    });
}

fn log_benchmark(c: &mut Criterion) {
    let inputs: Vec<f32> = (1..1001).map(|i| i as f32 / 100.0).collect();

    c.bench_function("log_order6_scalar", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in &inputs {
                acc += log::<6, f32>(black_box(x));
            }
            black_box(acc)
        })
    });

    c.bench_function("log_std_reference", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in &inputs {
                acc += black_box(x).ln();
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, exp_benchmark, log_benchmark);
criterion_main!(benches);
