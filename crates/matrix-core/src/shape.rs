// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Two-dimensional shape descriptor.

use std::fmt;

/// The `(rows, cols)` pair describing a [`crate::Matrix`].
///
/// Shapes are plain `Copy` values, so error variants and kernels can carry
/// them around without cloning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    /// Creates a new shape.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Shape;
    /// let s = Shape::new(2, 3);
    /// assert_eq!(s.num_elements(), 6);
    /// assert_eq!(s.transposed(), Shape::new(3, 2));
    /// ```
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns the total number of elements.
    pub fn num_elements(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` when `rows == cols`.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the shape with rows and columns swapped.
    pub fn transposed(&self) -> Self {
        Self::new(self.cols, self.rows)
    }

    /// Returns `true` if `self @ other` is defined, i.e. `self.cols == other.rows`.
    pub fn is_matmul_compatible(&self, other: &Shape) -> bool {
        self.cols == other.rows
    }

    /// Row-major stride: elements to skip to advance one row.
    pub fn row_stride(&self) -> usize {
        self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} x {}]", self.rows, self.cols)
    }
}

/// Convenience: `Shape::from((2, 3))`.
impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}
