// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! LU decomposition with partial pivoting.
//!
//! Factorises a square `A` as `P A = L U` where `L` is unit lower
//! triangular, `U` is upper triangular and `P` is the row permutation
//! chosen by picking the largest remaining pivot in each column. Both
//! factors are packed into one row-major buffer (`L` below the diagonal,
//! `U` on and above it).

use crate::ops::elementwise_op;
use crate::{Matrix, MatrixError, Shape};

/// Packed `P A = L U` factorisation of a square matrix.
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    n: usize,
    lu: Vec<f64>,
    /// `perm[i]` is the row of `A` that ended up in row `i` of `P A`.
    perm: Vec<usize>,
    swaps: usize,
}

impl LuDecomposition {
    /// Factorises `matrix`.
    ///
    /// # Errors
    /// Returns [`MatrixError::NotSquare`] for non-square input and
    /// [`MatrixError::SingularMatrix`] when a column has no usable pivot.
    /// A pivot in column `k` is treated as zero when its magnitude is at
    /// most `n * f64::EPSILON * max_i |a_ik|`, measured on the input. The
    /// threshold follows each column's own scale, so a column can be tiny
    /// next to the others and still factor.
    pub fn new(matrix: &Matrix) -> Result<Self, MatrixError> {
        let shape = matrix.shape();
        if !shape.is_square() {
            return Err(MatrixError::NotSquare {
                rows: shape.rows,
                cols: shape.cols,
            });
        }

        let n = shape.rows;
        let mut lu = matrix.as_slice().to_vec();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut swaps = 0;
        let tolerances: Vec<f64> = (0..n)
            .map(|k| n as f64 * f64::EPSILON * elementwise_op::column_max_abs(&lu, n, k))
            .collect();

        for k in 0..n {
            let (pivot_row, pivot_abs) = (k..n)
                .map(|i| (i, lu[i * n + k].abs()))
                .fold((k, -1.0), |best, cand| if cand.1 > best.1 { cand } else { best });

            if pivot_abs <= tolerances[k] {
                return Err(MatrixError::SingularMatrix);
            }

            if pivot_row != k {
                for c in 0..n {
                    lu.swap(k * n + c, pivot_row * n + c);
                }
                perm.swap(k, pivot_row);
                swaps += 1;
            }

            let pivot = lu[k * n + k];
            for i in (k + 1)..n {
                let factor = lu[i * n + k] / pivot;
                lu[i * n + k] = factor;
                if factor == 0.0 {
                    continue;
                }
                for j in (k + 1)..n {
                    lu[i * n + j] -= factor * lu[k * n + j];
                }
            }
        }

        Ok(Self { n, lu, perm, swaps })
    }

    /// Order of the factorised matrix.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Determinant of the decomposed matrix.
    pub fn determinant(&self) -> f64 {
        let diag: f64 = (0..self.n).map(|i| self.lu[i * self.n + i]).product();
        if self.swaps % 2 == 0 {
            diag
        } else {
            -diag
        }
    }

    /// Unit lower-triangular factor `L`.
    pub fn lower(&self) -> Matrix {
        let n = self.n;
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n..i * n + i].copy_from_slice(&self.lu[i * n..i * n + i]);
            data[i * n + i] = 1.0;
        }
        Matrix::from_parts(Shape::new(n, n), data)
    }

    /// Upper-triangular factor `U`.
    pub fn upper(&self) -> Matrix {
        let n = self.n;
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i..(i + 1) * n].copy_from_slice(&self.lu[i * n + i..(i + 1) * n]);
        }
        Matrix::from_parts(Shape::new(n, n), data)
    }

    /// The permutation `P` as a matrix.
    pub fn permutation(&self) -> Matrix {
        let n = self.n;
        let mut data = vec![0.0; n * n];
        for (i, &src) in self.perm.iter().enumerate() {
            data[i * n + src] = 1.0;
        }
        Matrix::from_parts(Shape::new(n, n), data)
    }

    /// Solves `A X = B` for `X`, one column of `B` at a time.
    ///
    /// # Errors
    /// Returns [`MatrixError::ShapeMismatch`] when `b.rows() != n`.
    pub fn solve(&self, b: &Matrix) -> Result<Matrix, MatrixError> {
        let n = self.n;
        if b.rows() != n {
            return Err(MatrixError::shape_mismatch(
                "lu_solve",
                Shape::new(n, b.cols()),
                b.shape(),
            ));
        }

        Ok(Matrix::from_parts(
            Shape::new(n, b.cols()),
            self.solve_columns(b.as_slice(), b.cols()),
        ))
    }

    /// Inverse of the decomposed matrix: solves `A X = I`.
    pub fn inverse(&self) -> Matrix {
        let n = self.n;
        let mut identity = vec![0.0; n * n];
        for i in 0..n {
            identity[i * n + i] = 1.0;
        }
        Matrix::from_parts(Shape::new(n, n), self.solve_columns(&identity, n))
    }

    /// Solves for every column of the row-major `[n, k]` buffer `rhs`.
    fn solve_columns(&self, rhs: &[f64], k: usize) -> Vec<f64> {
        let n = self.n;
        let mut out = vec![0.0; n * k];
        let mut x = vec![0.0; n];

        for col in 0..k {
            // Forward substitution on L (unit diagonal) with permuted rhs.
            for i in 0..n {
                let mut acc = rhs[self.perm[i] * k + col];
                for j in 0..i {
                    acc -= self.lu[i * n + j] * x[j];
                }
                x[i] = acc;
            }
            // Back substitution on U.
            for i in (0..n).rev() {
                let mut acc = x[i];
                for j in (i + 1)..n {
                    acc -= self.lu[i * n + j] * x[j];
                }
                x[i] = acc / self.lu[i * n + i];
            }
            for (i, &xi) in x.iter().enumerate() {
                out[i * k + col] = xi;
            }
        }

        out
    }
}
