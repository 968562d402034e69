// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: construction, forward pass and training end to end.

use matrix_core::{Initializer, Matrix, MatrixError, Shape};
use network::{Network, NetworkConfig, NetworkError, NetworkState, Perceptron};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ── Helpers ────────────────────────────────────────────────────

/// OR truth table with a constant bias input, samples as 3x1 columns.
fn or_with_bias() -> Vec<(Matrix, Matrix)> {
    [(0.0, 0.0, 0.0), (0.0, 1.0, 1.0), (1.0, 0.0, 1.0), (1.0, 1.0, 1.0)]
        .into_iter()
        .map(|(a, b, y)| {
            (
                Matrix::from_vec(3, 1, vec![a, b, 1.0]).unwrap(),
                Matrix::from_vec(1, 1, vec![y]).unwrap(),
            )
        })
        .collect()
}

fn total_loss(net: &Network, samples: &[(Matrix, Matrix)]) -> f64 {
    samples
        .iter()
        .map(|(x, y)| {
            let out = net.predict(x).unwrap();
            let e = out.sub(y).unwrap();
            e.hadamard(&e).unwrap().sum()
        })
        .sum()
}

// ── Tests ──────────────────────────────────────────────────────

#[test]
fn test_identity_weights_forward() {
    let mut net = Network::with_weights(vec![Matrix::identity(2).unwrap()], 0.1).unwrap();
    let input = Matrix::from_rows(&[[1.0], [1.0]]).unwrap();

    let out = net.feed_forward(&input).unwrap();
    assert_eq!(out.shape(), Shape::new(1, 2));
    for &v in out.as_slice() {
        assert!((v - 0.731_058_578_6).abs() < 1e-9);
    }
    assert_eq!(net.activations().len(), 1);
    assert_eq!(net.state(), NetworkState::ForwardComplete);
}

#[test]
fn test_training_reduces_error_on_or() {
    for seed in [1, 7, 42] {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let init = Initializer::Uniform {
            low: -0.5,
            high: 0.5,
        };
        let mut net = Network::new(&[3, 3, 1], 1.0, init, &mut rng).unwrap();
        let samples = or_with_bias();

        let before = total_loss(&net, &samples);
        let metrics = net.fit(&samples, 1000).unwrap();
        let after = total_loss(&net, &samples);

        assert_eq!(metrics.epochs(), 1000);
        assert_eq!(metrics.steps, 4000);
        let (initial, last) = (metrics.initial_loss().unwrap(), metrics.final_loss().unwrap());
        assert!(last < initial * 0.5, "seed {seed}: {initial} -> {last}");
        assert!(last < 0.1, "seed {seed}: final loss {last}");
        assert!(after < before, "seed {seed}: {before} -> {after}");
    }
}

#[test]
fn test_failed_train_leaves_network_unchanged() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut net = Network::new(&[2, 4, 2], 0.3, Initializer::Sign, &mut rng).unwrap();
    let x = Matrix::from_vec(2, 1, vec![0.5, -0.5]).unwrap();
    net.feed_forward(&x).unwrap();
    let weights = net.weights().to_vec();

    let wrong_answer = Matrix::from_vec(2, 1, vec![1.0, 0.0]).unwrap();
    let err = net.train(&x, &wrong_answer).unwrap_err();
    assert!(matches!(
        err.matrix_error(),
        Some(MatrixError::ShapeMismatch {
            expected,
            actual,
            ..
        }) if *expected == Shape::new(1, 2) && *actual == Shape::new(2, 1)
    ));
    assert_eq!(net.weights(), weights.as_slice());
    assert_eq!(net.state(), NetworkState::ForwardComplete);
    let shapes: Vec<Shape> = net.activations().iter().map(Matrix::shape).collect();
    assert_eq!(
        shapes,
        vec![Shape::new(1, 2), Shape::new(1, 4), Shape::new(1, 2)]
    );
}

#[test]
fn test_wrong_input_width_reports_layer() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut net = Network::new(&[4, 2], 0.1, Initializer::Sign, &mut rng).unwrap();
    let x = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).unwrap();

    match net.feed_forward(&x) {
        Err(NetworkError::Layer { layer, source }) => {
            assert_eq!(layer, 0);
            // The transposed 1 x 3 input against the 4 x 4 first-layer weights.
            assert_eq!(
                source,
                MatrixError::ShapeMismatch {
                    op: "matmul",
                    expected: Shape::new(1, 3),
                    actual: Shape::new(4, 4),
                }
            );
        }
        other => panic!("expected layer error, got {other:?}"),
    }
}

#[test]
fn test_config_driven_network() {
    let config = NetworkConfig::from_toml(
        r#"
layers = [3, 5, 2]
alpha = 0.2
initializer = "uniform"
init_scale = 0.25
seed = 123
"#,
    )
    .unwrap();
    let net = Network::from_config(&config).unwrap();

    assert_eq!(net.layers(), &[3, 5, 2]);
    assert_eq!(net.alpha(), 0.2);
    assert_eq!(net.num_layers(), 3);
    assert!(net
        .weights()
        .iter()
        .flat_map(|w| w.as_slice())
        .all(|&w| (-0.25..0.25).contains(&w)));

    let again = Network::from_config(&config).unwrap();
    assert_eq!(net.weights(), again.weights());
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = NetworkConfig {
        layers: vec![2, 0],
        ..Default::default()
    };
    assert!(matches!(
        Network::from_config(&config),
        Err(NetworkError::InvalidTopology(_))
    ));
}

#[test]
fn test_perceptron_learns_and() {
    let samples: [([f64; 3], i8); 4] = [
        ([0.0, 0.0, 1.0], -1),
        ([0.0, 1.0, 1.0], -1),
        ([1.0, 0.0, 1.0], -1),
        ([1.0, 1.0, 1.0], 1),
    ];

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut p = Perceptron::new(3, 0.1, &mut rng).unwrap();
    for _ in 0..200 {
        for (x, y) in &samples {
            p.train(x, *y).unwrap();
        }
    }
    for (x, y) in &samples {
        assert_eq!(p.feed_forward(x).unwrap(), *y, "input {x:?}");
    }
}
