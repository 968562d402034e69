// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for network construction and training.

use matrix_core::MatrixError;

/// Errors that can occur while building or training a network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// A matrix operation on caller-supplied data failed (for example, a
    /// label matrix with the wrong shape).
    #[error("matrix error: {0}")]
    Matrix(#[from] MatrixError),

    /// A matrix operation failed while processing a specific layer.
    #[error("error in layer {layer}: {source}")]
    Layer {
        layer: usize,
        #[source]
        source: MatrixError,
    },

    /// The layer-size list or supplied weights do not describe a network.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// A hyper-parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Perceptron input length differs from its weight count.
    #[error("input length mismatch: expected {expected}, got {actual}")]
    InputLength { expected: usize, actual: usize },
}

impl NetworkError {
    /// Returns the underlying matrix error, whichever variant carries it.
    pub fn matrix_error(&self) -> Option<&MatrixError> {
        match self {
            NetworkError::Matrix(e) | NetworkError::Layer { source: e, .. } => Some(e),
            _ => None,
        }
    }

    /// `true` if the failure is a [`MatrixError::ShapeMismatch`].
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self.matrix_error(), Some(MatrixError::ShapeMismatch { .. }))
    }

    pub(crate) fn in_layer(layer: usize) -> impl FnOnce(MatrixError) -> NetworkError {
        move |source| NetworkError::Layer { layer, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_core::Shape;

    fn mismatch() -> MatrixError {
        MatrixError::ShapeMismatch {
            op: "matmul",
            expected: Shape::new(2, 2),
            actual: Shape::new(3, 2),
        }
    }

    #[test]
    fn test_matrix_error_accessor() {
        let e = NetworkError::in_layer(1)(mismatch());
        assert!(e.is_shape_mismatch());
        assert_eq!(e.matrix_error(), Some(&mismatch()));

        let e: NetworkError = mismatch().into();
        assert!(e.is_shape_mismatch());

        let e = NetworkError::InvalidTopology("empty".into());
        assert!(e.matrix_error().is_none());
    }

    #[test]
    fn test_display() {
        let e = NetworkError::in_layer(3)(MatrixError::SingularMatrix);
        assert_eq!(e.to_string(), "error in layer 3: matrix is singular");
    }
}
