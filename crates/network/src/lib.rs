// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # network
//!
//! Trainable models built on `matrix-core`.
//!
//! - [`Network`]: a stack of fully connected sigmoid layers trained by
//!   gradient-descent backpropagation.
//! - [`Perceptron`]: a single sign-threshold unit with the classic
//!   perceptron update.
//!
//! Networks are built from layer sizes plus an [`Initializer`] and an
//! injected random source, or from a [`NetworkConfig`] loaded from TOML.
//!
//! ```
//! use matrix_core::{Initializer, Matrix};
//! use network::Network;
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
//! let mut net = Network::new(&[2, 3, 1], 0.5, Initializer::Sign, &mut rng)?;
//!
//! let x = Matrix::from_vec(2, 1, vec![1.0, 0.0])?;
//! let y = Matrix::from_vec(1, 1, vec![1.0])?;
//! let step = net.train(&x, &y)?;
//! assert!(step.loss < 1.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Initializer`]: matrix_core::Initializer

mod config;
mod error;
mod metrics;
mod network;
mod perceptron;

pub use config::NetworkConfig;
pub use error::NetworkError;
pub use metrics::{TrainStep, TrainingMetrics};
pub use network::{Network, NetworkState};
pub use perceptron::{Perceptron, DEFAULT_PERCEPTRON_ALPHA};
