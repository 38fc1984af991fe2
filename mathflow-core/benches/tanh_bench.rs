//! Benchmark: sigmoid-shaped approximations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mathflow_core::{sigmoid, sigmoid_exp, tanh, Batch};

fn input_grid() -> Vec<f32> {
    (0..1000).map(|i| i as f32 / 50.0 - 10.0).collect()
}

fn tanh_benchmark(c: &mut Criterion) {
    let inputs = input_grid();

    c.bench_function("tanh_order9_scalar", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in &inputs {
                acc += tanh::<9, f32>(black_box(x));
            }
            black_box(acc)
        })
    });

    c.bench_function("tanh_order9_batch", |b| {
        b.iter(|| {
            let mut acc = Batch::<f32>::from_array([0.0; 4]);
            for chunk in inputs.chunks_exact(4) {
                let v = Batch::<f32>::from_array([chunk[0], chunk[1], chunk[2], chunk[3]]);
                acc = acc + tanh::<9, Batch<f32>>(black_box(v));
            }
            black_box(acc.to_array())
        })
    });

    c.bench_function("tanh_std_reference", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in &inputs {
                acc += black_box(x).tanh();
            }
            black_box(acc)
        })
    });
}

fn sigmoid_benchmark(c: &mut Criterion) {
    let inputs = input_grid();

    c.bench_function("sigmoid_order9_scalar", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in &inputs {
                acc += sigmoid::<9, f32>(black_box(x));
            }
            black_box(acc)
        })
    });

    c.bench_function("sigmoid_exp_order6_scalar", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in &inputs {
                acc += sigmoid_exp::<6, f32>(black_box(x));
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, tanh_benchmark, sigmoid_benchmark);
criterion_main!(benches);
