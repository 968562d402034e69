// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix kernels and layer helpers.
//!
//! The element-wise path ([`elementwise_op`]) and the multiply path
//! ([`matmul_op`]) are separate kernels over flat row-major buffers, so a
//! SIMD or BLAS backend can replace either without touching the other.
//! [`crate::Matrix`] methods validate shapes and then dispatch here.

pub(crate) mod elementwise_op;
mod lu_op;
pub(crate) mod matmul_op;
mod sigmoid_op;

pub use lu_op::LuDecomposition;
pub use sigmoid_op::{sigmoid, sigmoid_derivative, sigmoid_prime};
