// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Pluggable weight initialisation strategies.

use rand::Rng;

use crate::{Matrix, MatrixError};

/// How a freshly created matrix is populated.
///
/// The random source is always passed in by the caller, so a seeded RNG
/// makes initialisation reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Initializer {
    /// Independent draws from `{-1.0, +1.0}` with equal probability.
    #[default]
    Sign,
    /// Continuous uniform draws from `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Every entry set to the same value.
    Constant(f64),
}

impl Initializer {
    /// Builds a `rows x cols` matrix using this strategy.
    pub fn build<R>(&self, rows: usize, cols: usize, rng: &mut R) -> Result<Matrix, MatrixError>
    where
        R: Rng + ?Sized,
    {
        match *self {
            Initializer::Sign => Matrix::random_uniform(rows, cols, rng),
            Initializer::Uniform { low, high } => {
                Matrix::from_fn(rows, cols, |_, _| low + (high - low) * rng.gen::<f64>())
            }
            Initializer::Constant(value) => Matrix::filled(rows, cols, value),
        }
    }

    /// Draws a single value.
    pub fn sample<R>(&self, rng: &mut R) -> f64
    where
        R: Rng + ?Sized,
    {
        match *self {
            Initializer::Sign => {
                if rng.gen_bool(0.5) {
                    1.0
                } else {
                    -1.0
                }
            }
            Initializer::Uniform { low, high } => low + (high - low) * rng.gen::<f64>(),
            Initializer::Constant(value) => value,
        }
    }

    /// Returns a short label for logs and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Initializer::Sign => "sign",
            Initializer::Uniform { .. } => "uniform",
            Initializer::Constant(_) => "constant",
        }
    }
}
