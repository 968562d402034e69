// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for the matrix kernels.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matrix_core::{sigmoid, Initializer, Matrix};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn random(n: usize, seed: u64) -> Matrix {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Initializer::Uniform {
        low: -1.0,
        high: 1.0,
    }
    .build(n, n, &mut rng)
    .unwrap()
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    for n in [16, 64, 128] {
        let a = random(n, 1);
        let b = random(n, 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| black_box(&a).matmul(black_box(&b)).unwrap())
        });
    }
    group.finish();
}

fn bench_invert(c: &mut Criterion) {
    let mut group = c.benchmark_group("invert");
    for n in [8, 32, 64] {
        // Diagonal shift keeps the matrix well-conditioned.
        let a = random(n, 3)
            .add(&Matrix::identity(n).unwrap().scale(n as f64))
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| black_box(&a).invert().unwrap())
        });
    }
    group.finish();
}

fn bench_sigmoid(c: &mut Criterion) {
    let a = random(128, 4);
    c.bench_function("sigmoid_128x128", |bench| bench.iter(|| sigmoid(black_box(&a))));
}

criterion_group!(benches, bench_matmul, bench_invert, bench_sigmoid);
criterion_main!(benches);
