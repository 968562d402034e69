// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Network configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! layers = [2, 3, 1]
//! alpha = 0.5
//! initializer = "sign"
//! seed = 42
//! epochs = 1000
//! ```

use matrix_core::Initializer;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;

use crate::NetworkError;

/// Configuration for a [`crate::Network`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NetworkConfig {
    /// Layer sizes. `layers[0]` is also the input width.
    pub layers: Vec<usize>,
    /// Learning rate.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Weight initialiser name: `"sign"`, `"uniform"`, or `"zeros"`.
    #[serde(default = "default_initializer")]
    pub initializer: String,
    /// Half-width of the `"uniform"` range `[-scale, scale)` (ignored otherwise).
    pub init_scale: Option<f64>,
    /// RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Epoch count used by [`crate::Network::fit`] callers.
    #[serde(default = "default_epochs")]
    pub epochs: usize,
}

fn default_alpha() -> f64 {
    0.1
}

fn default_initializer() -> String {
    "sign".to_string()
}

fn default_epochs() -> usize {
    1000
}

impl NetworkConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, NetworkError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NetworkError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, NetworkError> {
        toml::from_str(toml_str)
            .map_err(|e| NetworkError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, NetworkError> {
        toml::to_string_pretty(self)
            .map_err(|e| NetworkError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Checks topology and hyper-parameters.
    pub fn validate(&self) -> Result<(), NetworkError> {
        validate_layers(&self.layers)?;
        validate_alpha(self.alpha)?;
        if let Some(scale) = self.init_scale {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(NetworkError::InvalidConfig(format!(
                    "init_scale must be finite and positive, got {scale}"
                )));
            }
        }
        self.create_initializer().map(|_| ())
    }

    /// Creates the weight initialiser named by this config.
    pub fn create_initializer(&self) -> Result<Initializer, NetworkError> {
        match self.initializer.to_lowercase().as_str() {
            "sign" | "binary" => Ok(Initializer::Sign),
            "uniform" => {
                let scale = self.init_scale.unwrap_or(1.0);
                Ok(Initializer::Uniform {
                    low: -scale,
                    high: scale,
                })
            }
            "zeros" | "zero" => Ok(Initializer::Constant(0.0)),
            other => Err(NetworkError::ConfigError(format!(
                "unknown initializer '{other}'; expected 'sign', 'uniform', or 'zeros'"
            ))),
        }
    }

    /// Creates the random source: seeded when `seed` is set, otherwise from entropy.
    pub fn create_rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            layers: vec![2, 2, 1],
            alpha: default_alpha(),
            initializer: default_initializer(),
            init_scale: None,
            seed: None,
            epochs: default_epochs(),
        }
    }
}

pub(crate) fn validate_layers(layers: &[usize]) -> Result<(), NetworkError> {
    if layers.is_empty() {
        return Err(NetworkError::InvalidTopology(
            "at least one layer is required".into(),
        ));
    }
    if let Some(i) = layers.iter().position(|&n| n == 0) {
        return Err(NetworkError::InvalidTopology(format!(
            "layer {i} has zero neurons"
        )));
    }
    Ok(())
}

pub(crate) fn validate_alpha(alpha: f64) -> Result<(), NetworkError> {
    if !(alpha.is_finite() && alpha > 0.0) {
        return Err(NetworkError::InvalidConfig(format!(
            "alpha must be finite and positive, got {alpha}"
        )));
    }
    Ok(())
}
