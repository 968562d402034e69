// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and the helpers they share.

pub mod inspect;
pub mod perceptron;
pub mod train;

use std::path::Path;

use anyhow::Context;
use network::NetworkConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins over the `-v` count.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Two-input boolean truth tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Dataset {
    Xor,
    And,
    Or,
}

impl Dataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Xor => "xor",
            Dataset::And => "and",
            Dataset::Or => "or",
        }
    }

    pub fn label(&self, a: bool, b: bool) -> bool {
        match self {
            Dataset::Xor => a ^ b,
            Dataset::And => a && b,
            Dataset::Or => a || b,
        }
    }

    /// Rows of `[a, b, bias]` with their boolean label.
    pub fn rows(&self) -> Vec<([f64; 3], bool)> {
        [(false, false), (false, true), (true, false), (true, true)]
            .into_iter()
            .map(|(a, b)| {
                let x = [f64::from(u8::from(a)), f64::from(u8::from(b)), 1.0];
                (x, self.label(a, b))
            })
            .collect()
    }
}

/// Width of every dataset row, bias included.
pub const INPUT_WIDTH: usize = 3;

/// Loads the configuration at `path`, or the CLI default when absent.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<NetworkConfig> {
    let config = match path {
        Some(p) => NetworkConfig::from_file(p)
            .with_context(|| format!("failed to load config '{}'", p.display()))?,
        None => default_config(),
    };
    config.validate()?;
    Ok(config)
}

/// A topology that learns every built-in dataset.
fn default_config() -> NetworkConfig {
    NetworkConfig {
        layers: vec![INPUT_WIDTH, 4, 1],
        alpha: 1.0,
        initializer: "uniform".into(),
        init_scale: Some(0.5),
        seed: None,
        epochs: 5000,
    }
}

pub fn describe_source(path: Option<&Path>) -> String {
    path.map_or_else(|| "<built-in default>".to_string(), |p| p.display().to_string())
}
