// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The dense matrix value type.

use std::fmt;
use std::ops::Index;

use rand::Rng;

use crate::ops::{elementwise_op, matmul_op, LuDecomposition};
use crate::{MatrixError, Shape};

/// A dense, owned, two-dimensional `f64` matrix.
///
/// # Memory Layout
/// Values live in a single flat buffer in row-major order; the buffer is
/// the only storage. Row-grouped access ([`row`](Matrix::row),
/// [`iter_rows`](Matrix::iter_rows)) is a borrowed view into it.
///
/// # Value Semantics
/// Every operation returns a new matrix and leaves its operands untouched,
/// including when it fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    shape: Shape,
    data: Vec<f64>,
}

impl Matrix {
    // ── Construction ───────────────────────────────────────────

    /// Creates a matrix from a flat row-major buffer.
    ///
    /// # Examples
    /// ```
    /// use matrix_core::Matrix;
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.row(1).unwrap(), &[3.0, 4.0]);
    /// ```
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimensions`] if either dimension is zero,
    /// [`MatrixError::BufferSizeMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        let shape = checked_shape(rows, cols)?;
        if data.len() != shape.num_elements() {
            return Err(MatrixError::BufferSizeMismatch {
                expected: shape.num_elements(),
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Creates a matrix from row-grouped values. The column count is taken
    /// from the first row.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimensions`] for no rows or empty rows,
    /// [`MatrixError::RaggedRows`] if any row length differs from the first.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let shape = checked_shape(rows.len(), cols)?;

        let mut data = Vec::with_capacity(shape.num_elements());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { shape, data })
    }

    /// Creates a matrix with every entry set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self, MatrixError> {
        let shape = checked_shape(rows, cols)?;
        Ok(Self {
            shape,
            data: vec![value; shape.num_elements()],
        })
    }

    /// Creates a matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::filled(rows, cols, 0.0)
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Creates a matrix whose entries are independent draws from the
    /// two-value distribution `{-1.0, +1.0}`.
    ///
    /// The random source is injected so callers control seeding; see
    /// [`crate::Initializer`] for other distributions.
    pub fn random_uniform<R>(rows: usize, cols: usize, rng: &mut R) -> Result<Self, MatrixError>
    where
        R: Rng + ?Sized,
    {
        Self::from_fn(rows, cols, |_, _| if rng.gen_bool(0.5) { 1.0 } else { -1.0 })
    }

    /// Creates a matrix by evaluating `f(row, col)` for every entry in
    /// row-major order.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self, MatrixError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let shape = checked_shape(rows, cols)?;
        let mut data = Vec::with_capacity(shape.num_elements());
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Ok(Self { shape, data })
    }

    /// Builds a matrix from a buffer already known to match `shape`.
    pub(crate) fn from_parts(shape: Shape, data: Vec<f64>) -> Self {
        debug_assert!(shape.rows > 0 && shape.cols > 0);
        debug_assert_eq!(data.len(), shape.num_elements());
        Self { shape, data }
    }

    // ── Access ─────────────────────────────────────────────────

    /// Returns the matrix shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    /// Total number of entries (`rows * cols`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a matrix has at least one entry.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The flat row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the matrix and returns its flat row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Copies the values out as one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }

    /// Borrowed view of row `index`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfBounds`] if `index >= rows`.
    pub fn row(&self, index: usize) -> Result<&[f64], MatrixError> {
        if index >= self.rows() {
            return Err(MatrixError::OutOfBounds {
                index,
                bound: self.rows(),
            });
        }
        let stride = self.shape.row_stride();
        Ok(&self.data[index * stride..(index + 1) * stride])
    }

    /// Iterates over rows as slices.
    pub fn iter_rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.data.chunks_exact(self.shape.row_stride())
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfBounds`] naming the offending index and its bound.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        if col >= self.cols() {
            return Err(MatrixError::OutOfBounds {
                index: col,
                bound: self.cols(),
            });
        }
        Ok(self.row(row)?[col])
    }

    /// Extracts column `index` as a `rows x 1` matrix.
    ///
    /// # Errors
    /// [`MatrixError::OutOfBounds`] if `index >= cols`.
    pub fn column(&self, index: usize) -> Result<Matrix, MatrixError> {
        if index >= self.cols() {
            return Err(MatrixError::OutOfBounds {
                index,
                bound: self.cols(),
            });
        }
        let data = self.iter_rows().map(|row| row[index]).collect();
        Ok(Self::from_parts(Shape::new(self.rows(), 1), data))
    }

    // ── Scalar broadcast ───────────────────────────────────────

    /// `x + value` for every entry.
    pub fn add_scalar(&self, value: f64) -> Matrix {
        self.map(|x| x + value)
    }

    /// `x - value` for every entry.
    pub fn sub_scalar(&self, value: f64) -> Matrix {
        self.map(|x| x - value)
    }

    /// `x * factor` for every entry.
    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    /// `x / denominator` for every entry.
    pub fn divide_by(&self, denominator: f64) -> Matrix {
        self.map(|x| x / denominator)
    }

    /// `numerator / x` for every entry.
    pub fn divide_into(&self, numerator: f64) -> Matrix {
        self.map(|x| numerator / x)
    }

    /// Element-wise natural exponential.
    pub fn exp(&self) -> Matrix {
        self.map(f64::exp)
    }

    /// Applies `f` to every entry.
    pub fn map<F>(&self, f: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Self::from_parts(self.shape, elementwise_op::unary(&self.data, f))
    }

    // ── Element-wise binary ────────────────────────────────────

    /// Element-wise sum.
    ///
    /// # Errors
    /// [`MatrixError::ShapeMismatch`] unless both shapes are identical.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "sub", |a, b| a - b)
    }

    /// Element-wise (Hadamard) product.
    pub fn hadamard(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "hadamard", |a, b| a * b)
    }

    /// Element-wise quotient `self / other`.
    pub fn elementwise_div(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "elementwise_div", |a, b| a / b)
    }

    fn zip_with<F>(&self, other: &Matrix, op: &'static str, f: F) -> Result<Matrix, MatrixError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape != other.shape {
            return Err(MatrixError::shape_mismatch(op, self.shape, other.shape));
        }
        Ok(Self::from_parts(
            self.shape,
            elementwise_op::binary(&self.data, &other.data, f),
        ))
    }

    // ── Linear algebra ─────────────────────────────────────────

    /// Matrix product `self @ other`.
    ///
    /// # Errors
    /// [`MatrixError::ShapeMismatch`] unless `self.cols() == other.rows()`,
    /// with `expected` set to the receiver's shape and `actual` to `other`'s.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if !self.shape.is_matmul_compatible(&other.shape) {
            return Err(MatrixError::shape_mismatch("matmul", self.shape, other.shape));
        }
        let (m, k, n) = (self.rows(), self.cols(), other.cols());
        let mut out = vec![0.0; m * n];
        matmul_op::matmul_f64(&self.data, &other.data, &mut out, m, k, n);
        Ok(Self::from_parts(Shape::new(m, n), out))
    }

    /// Returns the `cols x rows` transpose.
    pub fn transpose(&self) -> Matrix {
        let mut out = vec![0.0; self.len()];
        matmul_op::transpose_f64(&self.data, &mut out, self.rows(), self.cols());
        Self::from_parts(self.shape.transposed(), out)
    }

    /// LU factorisation with partial pivoting.
    pub fn lu(&self) -> Result<LuDecomposition, MatrixError> {
        LuDecomposition::new(self)
    }

    /// Matrix inverse via LU decomposition with partial pivoting.
    ///
    /// # Errors
    /// [`MatrixError::NotSquare`] if `rows != cols`,
    /// [`MatrixError::SingularMatrix`] if a pivot degenerates to zero.
    pub fn invert(&self) -> Result<Matrix, MatrixError> {
        Ok(self.lu()?.inverse())
    }

    // ── Reductions ─────────────────────────────────────────────

    /// Arithmetic mean of all entries.
    pub fn mean(&self) -> f64 {
        elementwise_op::mean(&self.data)
    }

    /// Sum of all entries.
    pub fn sum(&self) -> f64 {
        elementwise_op::sum(&self.data)
    }

    /// `true` if shapes match and every pair of entries differs by at most `tol`.
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.shape == other.shape
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tol)
    }
}

fn checked_shape(rows: usize, cols: usize) -> Result<Shape, MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidDimensions { rows, cols });
    }
    Ok(Shape::new(rows, cols))
}

/// Panicking `(row, col)` access, for when the index is known valid.
impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows() && col < self.cols(),
            "index ({row}, {col}) out of bounds for {} matrix",
            self.shape
        );
        &self.data[row * self.cols() + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        writeln!(f, "Matrix {}", self.shape)?;
        for row in self.iter_rows() {
            write!(f, "[")?;
            for (i, v) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v:.precision$}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sample() -> Matrix {
        Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap()
    }

    #[test]
    fn test_from_vec() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.shape(), Shape::new(2, 3));
        assert_eq!(m.row(0).unwrap(), &[1.0, 2.0, 3.0]);
        assert_eq!(m.row(1).unwrap(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_vec_size_mismatch() {
        let err = Matrix::from_vec(2, 3, vec![0.0; 5]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::BufferSizeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Matrix::zeros(0, 3),
            Err(MatrixError::InvalidDimensions { rows: 0, cols: 3 })
        ));
        assert!(Matrix::from_vec(2, 0, vec![]).is_err());
        let empty: [[f64; 0]; 0] = [];
        assert!(Matrix::from_rows(&empty).is_err());
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            Matrix::from_rows(&rows).unwrap_err(),
            MatrixError::RaggedRows {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_round_trip_exports() {
        let m = sample();
        assert_eq!(Matrix::from_rows(&m.to_rows()).unwrap(), m);
        let (r, c) = (m.rows(), m.cols());
        assert_eq!(Matrix::from_vec(r, c, m.clone().into_vec()).unwrap(), m);
    }

    #[test]
    fn test_identity() {
        let i = Matrix::identity(3).unwrap();
        assert_eq!(i.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_get_and_index() {
        let m = sample();
        assert_eq!(m.get(2, 1).unwrap(), 6.0);
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(
            m.get(0, 2).unwrap_err(),
            MatrixError::OutOfBounds { index: 2, bound: 2 }
        );
        assert_eq!(
            m.get(3, 0).unwrap_err(),
            MatrixError::OutOfBounds { index: 3, bound: 3 }
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_panics() {
        let _ = sample()[(0, 5)];
    }

    #[test]
    fn test_column() {
        let m = sample();
        let c0 = m.column(0).unwrap();
        assert_eq!(c0.shape(), Shape::new(3, 1));
        assert_eq!(c0.as_slice(), &[1.0, 3.0, 5.0]);
        assert_eq!(m.column(1).unwrap().as_slice(), &[2.0, 4.0, 6.0]);
        assert_eq!(
            m.column(2).unwrap_err(),
            MatrixError::OutOfBounds { index: 2, bound: 2 }
        );
    }

    #[test]
    fn test_scalar_ops() {
        let m = Matrix::from_vec(1, 3, vec![1.0, 2.0, 4.0]).unwrap();
        assert_eq!(m.add_scalar(1.5).as_slice(), &[2.5, 3.5, 5.5]);
        assert_eq!(m.sub_scalar(1.0).as_slice(), &[0.0, 1.0, 3.0]);
        assert_eq!(m.scale(-2.0).as_slice(), &[-2.0, -4.0, -8.0]);
        assert_eq!(m.divide_by(2.0).as_slice(), &[0.5, 1.0, 2.0]);
        assert_eq!(m.divide_into(8.0).as_slice(), &[8.0, 4.0, 2.0]);
        // Receiver is untouched.
        assert_eq!(m.as_slice(), &[1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_exp() {
        let m = Matrix::from_vec(1, 2, vec![0.0, 1.0]).unwrap();
        let e = m.exp();
        assert_eq!(e[(0, 0)], 1.0);
        assert!((e[(0, 1)] - std::f64::consts::E).abs() < 1e-12);
    }

    #[test]
    fn test_binary_ops() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![2.0, 2.0, 2.0, 8.0]).unwrap();
        assert_eq!(a.add(&b).unwrap().as_slice(), &[3.0, 4.0, 5.0, 12.0]);
        assert_eq!(a.sub(&b).unwrap().as_slice(), &[-1.0, 0.0, 1.0, -4.0]);
        assert_eq!(a.hadamard(&b).unwrap().as_slice(), &[2.0, 4.0, 6.0, 32.0]);
        assert_eq!(
            a.elementwise_div(&b).unwrap().as_slice(),
            &[0.5, 1.0, 1.5, 0.5]
        );
    }

    #[test]
    fn test_binary_shape_mismatch_reports_both_shapes() {
        let a = Matrix::zeros(2, 3).unwrap();
        let b = Matrix::zeros(3, 2).unwrap();
        let err = a.add(&b).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeMismatch {
                op: "add",
                expected: Shape::new(2, 3),
                actual: Shape::new(3, 2),
            }
        );
        assert!(err.to_string().contains("[2 x 3]"));
        assert!(err.to_string().contains("[3 x 2]"));
    }

    #[test]
    fn test_matmul() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::from_rows(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), Shape::new(2, 2));
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_matmul_shape_mismatch() {
        let a = Matrix::zeros(2, 3).unwrap();
        let b = Matrix::zeros(4, 2).unwrap();
        assert_eq!(
            a.matmul(&b).unwrap_err(),
            MatrixError::ShapeMismatch {
                op: "matmul",
                expected: Shape::new(2, 3),
                actual: Shape::new(4, 2),
            }
        );
        assert_eq!(
            a.matmul(&b).unwrap_err().to_string(),
            "shape mismatch in matmul: expected [2 x 3], got [4 x 2]"
        );
    }

    #[test]
    fn test_transpose() {
        let t = sample().transpose();
        assert_eq!(t.shape(), Shape::new(2, 3));
        assert_eq!(t.row(0).unwrap(), &[1.0, 3.0, 5.0]);
        assert_eq!(t.row(1).unwrap(), &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_invert() {
        let a = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
        let inv = a.invert().unwrap();
        let expected = Matrix::from_rows(&[[0.6, -0.7], [-0.2, 0.4]]).unwrap();
        assert!(inv.approx_eq(&expected, 1e-12));
        assert!(a
            .matmul(&inv)
            .unwrap()
            .approx_eq(&Matrix::identity(2).unwrap(), 1e-12));
    }

    #[test]
    fn test_invert_errors() {
        assert_eq!(
            sample().invert().unwrap_err(),
            MatrixError::NotSquare { rows: 3, cols: 2 }
        );
        let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
        assert_eq!(singular.invert().unwrap_err(), MatrixError::SingularMatrix);
    }

    #[test]
    fn test_mean_and_sum() {
        let m = sample();
        assert_eq!(m.sum(), 21.0);
        assert_eq!(m.mean(), 3.5);
    }

    #[test]
    fn test_random_uniform_is_seeded_and_two_valued() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let a = Matrix::random_uniform(4, 5, &mut rng).unwrap();
        assert!(a.as_slice().iter().all(|&x| x == 1.0 || x == -1.0));

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let b = Matrix::random_uniform(4, 5, &mut rng).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_vec(1, 2, vec![1.0, 0.5]).unwrap();
        let s = format!("{m:.2}");
        assert!(s.starts_with("Matrix [1 x 2]"));
        assert!(s.contains("[1.00, 0.50]"));
    }
}
