// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for matrix operations.

use crate::Shape;

/// Errors that can occur while constructing or operating on a [`crate::Matrix`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// Two matrices have incompatible shapes for the requested operation.
    ///
    /// For binary operations, including `matmul`, `expected` is the
    /// receiver's shape and `actual` the argument's, so both operands are
    /// reported.
    #[error("shape mismatch in {op}: expected {expected}, got {actual}")]
    ShapeMismatch {
        op: &'static str,
        expected: Shape,
        actual: Shape,
    },

    /// A row or column index is outside the matrix.
    #[error("index {index} out of bounds (bound {bound})")]
    OutOfBounds { index: usize, bound: usize },

    /// Inversion was attempted on a non-square matrix.
    #[error("matrix is not square: {rows} x {cols}")]
    NotSquare { rows: usize, cols: usize },

    /// LU factorisation hit a zero pivot.
    #[error("matrix is singular")]
    SingularMatrix,

    /// A matrix must have at least one row and one column.
    #[error("invalid dimensions {rows} x {cols}: both must be non-zero")]
    InvalidDimensions { rows: usize, cols: usize },

    /// The flat buffer length does not equal `rows * cols`.
    #[error("buffer size mismatch: expected {expected} values, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Row-grouped input where one row has a different length.
    #[error("ragged rows: row {row} has {actual} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl MatrixError {
    pub(crate) fn shape_mismatch(op: &'static str, expected: Shape, actual: Shape) -> Self {
        MatrixError::ShapeMismatch {
            op,
            expected,
            actual,
        }
    }
}
