// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # matrix-core
//!
//! Dense two-dimensional `f64` matrices for small neural-network workloads.
//!
//! This crate provides:
//! - [`Matrix`]: a row-major value type; every operation returns a new matrix.
//! - [`Shape`]: the `(rows, cols)` descriptor carried by errors and kernels.
//! - Element-wise and scalar-broadcast arithmetic, `matmul`, `transpose`,
//!   LU-based `invert`, `exp`, `mean`.
//! - [`ops::sigmoid`] and its derivatives for layer activations.
//! - [`Initializer`]: injectable, seedable weight initialisation.
//!
//! # Design Goals
//! - One authoritative flat buffer; rows are views.
//! - Element-wise and multiply kernels kept separate so each can be swapped
//!   for a SIMD/BLAS backend.
//! - Clean error types via `thiserror`.

mod error;
mod init;
mod matrix;
pub mod ops;
mod shape;

pub use error::MatrixError;
pub use init::Initializer;
pub use matrix::Matrix;
pub use ops::{sigmoid, sigmoid_derivative, sigmoid_prime, LuDecomposition};
pub use shape::Shape;
