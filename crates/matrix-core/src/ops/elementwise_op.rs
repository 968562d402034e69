// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Element-wise and scalar-broadcast kernels.
//!
//! These are linear scans over contiguous row-major buffers. They are kept
//! apart from the multiply kernel so either can be swapped for a SIMD/BLAS
//! backend independently. The loops are written as plain iterator zips,
//! which LLVM auto-vectorises on x86_64 and aarch64.

/// Applies `f` to every element of `src`.
#[inline]
pub(crate) fn unary<F>(src: &[f64], f: F) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    src.iter().map(|&x| f(x)).collect()
}

/// Combines `lhs` and `rhs` pairwise with `f`.
///
/// Callers must have checked that both buffers describe the same shape.
#[inline]
pub(crate) fn binary<F>(lhs: &[f64], rhs: &[f64], f: F) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs.iter().zip(rhs.iter()).map(|(&a, &b)| f(a, b)).collect()
}

/// Sum of all elements.
#[inline]
pub(crate) fn sum(src: &[f64]) -> f64 {
    src.iter().sum()
}

/// Arithmetic mean of all elements. `src` is never empty for a valid matrix.
#[inline]
pub(crate) fn mean(src: &[f64]) -> f64 {
    sum(src) / src.len() as f64
}

/// Largest absolute value in column `col` of a row-major buffer with
/// `cols` columns, or `0.0` for an all-zero column.
#[inline]
pub(crate) fn column_max_abs(src: &[f64], cols: usize, col: usize) -> f64 {
    src.iter()
        .skip(col)
        .step_by(cols)
        .fold(0.0f64, |acc, &x| acc.max(x.abs()))
}
