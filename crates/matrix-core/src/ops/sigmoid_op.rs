// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Logistic sigmoid and its derivative.

use crate::Matrix;

/// Applies the logistic sigmoid element-wise:
///
/// `sigmoid(x) = 1 / (1 + exp(-x))`
///
/// Built from the engine primitives: negate, `exp`, add one, then take
/// the reciprocal with [`Matrix::divide_into`].
///
/// # Examples
/// ```
/// use matrix_core::{ops::sigmoid, Matrix};
/// let m = Matrix::from_vec(1, 1, vec![0.0]).unwrap();
/// assert_eq!(sigmoid(&m).as_slice(), &[0.5]);
/// ```
pub fn sigmoid(matrix: &Matrix) -> Matrix {
    matrix.scale(-1.0).exp().add_scalar(1.0).divide_into(1.0)
}

/// Derivative of the sigmoid expressed through its output.
///
/// `activation` must already hold sigmoid values `a`; the result is
/// `a * (1 - a)` element-wise. This is what backpropagation uses, since the
/// forward pass has already evaluated the sigmoid.
pub fn sigmoid_derivative(activation: &Matrix) -> Matrix {
    activation.map(|a| a * (1.0 - a))
}

/// Derivative of the sigmoid at the raw inputs `x`:
/// `sigmoid(x) * (1 - sigmoid(x))`.
pub fn sigmoid_prime(matrix: &Matrix) -> Matrix {
    sigmoid_derivative(&sigmoid(matrix))
}
