// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! A single threshold perceptron on plain slices.

use matrix_core::Initializer;
use rand::Rng;

use crate::config::validate_alpha;
use crate::NetworkError;

/// Default learning rate for [`Perceptron::with_default_alpha`].
pub const DEFAULT_PERCEPTRON_ALPHA: f64 = 0.01;

/// Sign-output perceptron: `+1` when the weighted sum is positive, else `-1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    weights: Vec<f64>,
    alpha: f64,
}

impl Perceptron {
    /// Creates a perceptron with `size` weights, each `+1` or `-1`.
    pub fn new<R>(size: usize, alpha: f64, rng: &mut R) -> Result<Self, NetworkError>
    where
        R: Rng + ?Sized,
    {
        if size == 0 {
            return Err(NetworkError::InvalidTopology(
                "perceptron needs at least one input".into(),
            ));
        }
        validate_alpha(alpha)?;

        let weights = (0..size).map(|_| Initializer::Sign.sample(rng)).collect();
        tracing::info!("perceptron created: {size} inputs, alpha {alpha}");
        Ok(Self { weights, alpha })
    }

    pub fn with_default_alpha<R>(size: usize, rng: &mut R) -> Result<Self, NetworkError>
    where
        R: Rng + ?Sized,
    {
        Self::new(size, DEFAULT_PERCEPTRON_ALPHA, rng)
    }

    /// Creates a perceptron with the given weights.
    pub fn with_weights(weights: Vec<f64>, alpha: f64) -> Result<Self, NetworkError> {
        if weights.is_empty() {
            return Err(NetworkError::InvalidTopology(
                "perceptron needs at least one input".into(),
            ));
        }
        validate_alpha(alpha)?;
        Ok(Self { weights, alpha })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    fn check_len(&self, inputs: &[f64]) -> Result<(), NetworkError> {
        if inputs.len() != self.weights.len() {
            return Err(NetworkError::InputLength {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        Ok(())
    }

    /// Weighted sum thresholded at zero. A sum of exactly zero gives `-1`.
    pub fn feed_forward(&self, inputs: &[f64]) -> Result<i8, NetworkError> {
        self.check_len(inputs)?;
        let sum: f64 = inputs.iter().zip(&self.weights).map(|(x, w)| x * w).sum();
        Ok(if sum > 0.0 { 1 } else { -1 })
    }

    /// Applies `w_i += alpha * (answer - output) * x_i` and returns the error
    /// `answer - output` (0 when the guess was already right).
    pub fn train(&mut self, inputs: &[f64], answer: i8) -> Result<i8, NetworkError> {
        let guess = self.feed_forward(inputs)?;
        let error = answer.saturating_sub(guess);
        if error != 0 {
            let step = self.alpha * f64::from(error);
            for (w, x) in self.weights.iter_mut().zip(inputs) {
                *w += step * x;
            }
        }
        tracing::trace!("perceptron step: guess {guess}, answer {answer}");
        Ok(error)
    }
}
