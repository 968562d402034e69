// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The multilayer sigmoid network.
//!
//! ```text
//!   Idle ──feed_forward()──▶ ForwardComplete
//!    ▲                            │
//!    └──────── train() ◀──────────┘
//! ```
//!
//! `train` runs its own forward pass, so it can be called from either
//! state; it always leaves the network `Idle` with an empty activation
//! history.
//!
//! # Weight layout
//! Samples are columns of the input matrix. The forward pass transposes
//! the input once so each sample becomes a row, then multiplies by
//! `weights[i]` of shape `(fan_in, layers[i])`, where `fan_in` is
//! `layers[0]` for the first layer and `layers[i - 1]` afterwards.
//!
//! # Backpropagation
//! Layers are visited with a single reverse index `i = L-1 ..= 0`; every
//! read and write in one iteration uses that same `i`:
//!
//! ```text
//! delta_i   = error ⊙ a_i ⊙ (1 - a_i)
//! scaled_i  = alpha * delta_i
//! W_i      += input_iᵀ · scaled_i          (input_i = a_{i-1}, or xᵀ for i = 0)
//! error     = scaled_i · W_iᵀ              (pre-update W_i)
//! ```

use std::time::Instant;

use matrix_core::{sigmoid, sigmoid_derivative, Initializer, Matrix, MatrixError, Shape};
use rand::Rng;

use crate::config::{validate_alpha, validate_layers};
use crate::{NetworkConfig, NetworkError, TrainStep, TrainingMetrics};

/// Where the network is in its forward/backward cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkState {
    /// No activation history is held.
    Idle,
    /// `feed_forward` has recorded one activation per layer.
    ForwardComplete,
}

/// A fully connected feed-forward network with sigmoid activations.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<usize>,
    weights: Vec<Matrix>,
    activations: Vec<Matrix>,
    alpha: f64,
    state: NetworkState,
}

impl Network {
    /// Creates a network with one weight matrix per entry of `layers`,
    /// populated by `initializer` from the injected `rng`.
    ///
    /// # Errors
    /// [`NetworkError::InvalidTopology`] for an empty list or a zero-sized
    /// layer, [`NetworkError::InvalidConfig`] for a non-positive `alpha`.
    pub fn new<R>(
        layers: &[usize],
        alpha: f64,
        initializer: Initializer,
        rng: &mut R,
    ) -> Result<Self, NetworkError>
    where
        R: Rng + ?Sized,
    {
        validate_layers(layers)?;
        validate_alpha(alpha)?;

        let weights = layers
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let fan_in = if i == 0 { layers[0] } else { layers[i - 1] };
                initializer
                    .build(fan_in, size, rng)
                    .map_err(NetworkError::in_layer(i))
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            "network created: layers {:?}, alpha {alpha}, initializer '{}'",
            layers,
            initializer.as_str(),
        );

        Ok(Self {
            layers: layers.to_vec(),
            weights,
            activations: Vec::new(),
            alpha,
            state: NetworkState::Idle,
        })
    }

    /// Creates a network from a validated [`NetworkConfig`], seeding the
    /// initialiser from `config.seed`.
    pub fn from_config(config: &NetworkConfig) -> Result<Self, NetworkError> {
        config.validate()?;
        let initializer = config.create_initializer()?;
        let mut rng = config.create_rng();
        Self::new(&config.layers, config.alpha, initializer, &mut rng)
    }

    /// Creates a network from caller-supplied weight matrices.
    ///
    /// Consecutive matrices must chain: `weights[i].rows()` equals
    /// `weights[i - 1].cols()`. Layer sizes are the column counts.
    pub fn with_weights(weights: Vec<Matrix>, alpha: f64) -> Result<Self, NetworkError> {
        if weights.is_empty() {
            return Err(NetworkError::InvalidTopology(
                "at least one weight matrix is required".into(),
            ));
        }
        validate_alpha(alpha)?;

        for (i, pair) in weights.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.rows() != prev.cols() {
                return Err(NetworkError::Layer {
                    layer: i + 1,
                    source: MatrixError::ShapeMismatch {
                        op: "with_weights",
                        expected: Shape::new(prev.cols(), next.cols()),
                        actual: next.shape(),
                    },
                });
            }
        }

        let layers = weights.iter().map(Matrix::cols).collect();
        Ok(Self {
            layers,
            weights,
            activations: Vec::new(),
            alpha,
            state: NetworkState::Idle,
        })
    }

    // ── Accessors ──────────────────────────────────────────────

    /// Neuron count per layer.
    pub fn layers(&self) -> &[usize] {
        &self.layers
    }

    /// Number of layers (and weight matrices).
    pub fn num_layers(&self) -> usize {
        self.weights.len()
    }

    /// Rows the input matrix must have.
    pub fn input_width(&self) -> usize {
        self.weights[0].rows()
    }

    /// Weight matrices, first layer first.
    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    /// Activations recorded by the last `feed_forward`; empty when `Idle`.
    pub fn activations(&self) -> &[Matrix] {
        &self.activations
    }

    /// Learning rate.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Current cycle state.
    pub fn state(&self) -> NetworkState {
        self.state
    }

    /// Total number of weights.
    pub fn num_parameters(&self) -> usize {
        self.weights.iter().map(Matrix::len).sum()
    }

    /// Replaces the weights of one layer. The new matrix must have the
    /// same shape as the old one.
    pub fn set_weights(&mut self, layer: usize, weights: Matrix) -> Result<(), NetworkError> {
        let current = self.weights.get(layer).ok_or(MatrixError::OutOfBounds {
            index: layer,
            bound: self.weights.len(),
        })?;
        if current.shape() != weights.shape() {
            return Err(NetworkError::Layer {
                layer,
                source: MatrixError::ShapeMismatch {
                    op: "set_weights",
                    expected: current.shape(),
                    actual: weights.shape(),
                },
            });
        }
        self.weights[layer] = weights;
        Ok(())
    }

    /// Returns a one-line description of the topology.
    pub fn summary(&self) -> String {
        let shapes: Vec<String> = self.weights.iter().map(|w| w.shape().to_string()).collect();
        format!(
            "Network: layers {:?}, {} weight matrices {} ({} parameters), alpha {}",
            self.layers,
            self.num_layers(),
            shapes.join(" -> "),
            self.num_parameters(),
            self.alpha,
        )
    }

    // ── Forward ────────────────────────────────────────────────

    /// Propagates `input` through every layer and records each activation.
    ///
    /// `input` holds one sample per column, so `input.rows()` must equal
    /// [`input_width`](Network::input_width). The result has one row per
    /// sample and `layers.last()` columns.
    ///
    /// # Examples
    /// A single sample in, a single row out:
    /// ```
    /// use matrix_core::Matrix;
    /// use network::Network;
    ///
    /// let mut net = Network::with_weights(vec![Matrix::identity(2)?], 0.1)?;
    /// let input = Matrix::from_rows(&[[1.0], [1.0]])?; // 2 x 1 column
    /// let out = net.feed_forward(&input)?;
    /// assert_eq!((out.rows(), out.cols()), (1, 2)); // 1 x 2 row
    /// assert!((out[(0, 1)] - 0.731_058_6).abs() < 1e-6);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    ///
    /// # Errors
    /// [`NetworkError::Layer`] wrapping [`MatrixError::ShapeMismatch`] if
    /// the input does not fit. The previous activation history is kept on
    /// failure.
    pub fn feed_forward(&mut self, input: &Matrix) -> Result<Matrix, NetworkError> {
        let activations = self.forward_pass(input)?;
        let output = activations[activations.len() - 1].clone();
        self.activations = activations;
        self.state = NetworkState::ForwardComplete;
        Ok(output)
    }

    /// Like [`feed_forward`](Network::feed_forward) but records nothing.
    pub fn predict(&self, input: &Matrix) -> Result<Matrix, NetworkError> {
        let mut activations = self.forward_pass(input)?;
        Ok(activations.swap_remove(activations.len() - 1))
    }

    fn forward_pass(&self, input: &Matrix) -> Result<Vec<Matrix>, NetworkError> {
        let mut current = input.transpose();
        let mut activations = Vec::with_capacity(self.weights.len());

        for (i, w) in self.weights.iter().enumerate() {
            let product = current.matmul(w).map_err(NetworkError::in_layer(i))?;
            current = sigmoid(&product);
            tracing::trace!("layer {i}: activation {}", current.shape());
            activations.push(current.clone());
        }

        tracing::debug!(
            "forward pass: input {} -> output {}",
            input.shape(),
            current.shape()
        );
        Ok(activations)
    }

    // ── Training ───────────────────────────────────────────────

    /// Runs a forward pass on `input`, back-propagates `answer - output`
    /// and applies the weight updates.
    ///
    /// All new weights are computed before any is stored, so on error the
    /// network is left exactly as it was. On success the activation
    /// history is cleared and the state returns to `Idle`.
    ///
    /// # Errors
    /// [`NetworkError::Matrix`] with [`MatrixError::ShapeMismatch`] if
    /// `answer` does not have the output's shape; [`NetworkError::Layer`]
    /// for input shape problems.
    pub fn train(&mut self, input: &Matrix, answer: &Matrix) -> Result<TrainStep, NetworkError> {
        let start = Instant::now();

        let (weights, loss) = match self
            .forward_pass(input)
            .and_then(|activations| self.compute_updates(input, answer, &activations))
        {
            Ok(update) => update,
            Err(e) => {
                tracing::warn!("train step rejected: {e}");
                return Err(e);
            }
        };

        self.weights = weights;
        self.activations.clear();
        self.state = NetworkState::Idle;

        let step = TrainStep {
            loss,
            duration: start.elapsed(),
        };
        tracing::debug!("train step: loss {:.6}", step.loss);
        Ok(step)
    }

    /// Computes the updated weights and the pre-update mean squared error.
    fn compute_updates(
        &self,
        input: &Matrix,
        answer: &Matrix,
        activations: &[Matrix],
    ) -> Result<(Vec<Matrix>, f64), NetworkError> {
        let output = &activations[activations.len() - 1];
        if answer.shape() != output.shape() {
            return Err(MatrixError::ShapeMismatch {
                op: "output_error",
                expected: output.shape(),
                actual: answer.shape(),
            }
            .into());
        }

        let mut error = answer.sub(output)?;
        let loss = error.map(|e| e * e).mean();
        let input_rows = input.transpose();
        let mut updated = self.weights.clone();

        for i in (0..self.weights.len()).rev() {
            let scaled = error
                .hadamard(&sigmoid_derivative(&activations[i]))
                .map_err(NetworkError::in_layer(i))?
                .scale(self.alpha);

            let layer_input = if i == 0 {
                &input_rows
            } else {
                &activations[i - 1]
            };
            updated[i] = layer_input
                .transpose()
                .matmul(&scaled)
                .and_then(|gradient| self.weights[i].add(&gradient))
                .map_err(NetworkError::in_layer(i))?;

            if i > 0 {
                error = scaled
                    .matmul(&self.weights[i].transpose())
                    .map_err(NetworkError::in_layer(i))?;
            }
        }

        Ok((updated, loss))
    }

    /// Trains on every `(input, answer)` pair for `epochs` passes.
    ///
    /// Each step is atomic; if one fails, the error is returned and the
    /// steps already applied are kept.
    pub fn fit(
        &mut self,
        samples: &[(Matrix, Matrix)],
        epochs: usize,
    ) -> Result<TrainingMetrics, NetworkError> {
        let mut metrics = TrainingMetrics::new();

        for epoch in 0..epochs {
            for (input, answer) in samples {
                metrics.record_step(self.train(input, answer)?);
            }
            metrics.end_epoch();
            if let Some(loss) = metrics.final_loss() {
                tracing::trace!("epoch {epoch}: mean loss {loss:.6}");
            }
        }

        tracing::info!("{}", metrics.summary());
        Ok(metrics)
    }
}
