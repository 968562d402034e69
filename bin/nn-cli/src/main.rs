// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # nnet
//!
//! Command-line trainer for the multilayer sigmoid network.
//!
//! ## Usage
//! ```bash
//! # Train on XOR with the built-in defaults
//! nnet train --dataset xor --epochs 5000
//!
//! # Train a network described by a TOML file
//! nnet train --config ./net.toml --dataset or
//!
//! # Print the topology and initial weights
//! nnet inspect --config ./net.toml
//!
//! # Train a single perceptron on AND
//! nnet perceptron --dataset and --seed 3
//! ```

mod commands;

use clap::{Parser, Subcommand};
use commands::Dataset;

#[derive(Parser)]
#[command(
    name = "nnet",
    about = "Train small sigmoid networks on boolean truth tables",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a network on a truth table and report the loss curve.
    Train {
        /// Path to a TOML network configuration.
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Truth table to learn.
        #[arg(short, long, value_enum, default_value = "xor")]
        dataset: Dataset,

        /// Number of epochs (overrides the configuration).
        #[arg(short, long)]
        epochs: Option<usize>,
    },

    /// Build a network from a configuration and print its weights.
    Inspect {
        /// Path to a TOML network configuration.
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Train a single sign perceptron.
    Perceptron {
        /// Truth table to learn (must be linearly separable).
        #[arg(short, long, value_enum, default_value = "and")]
        dataset: Dataset,

        /// Number of epochs.
        #[arg(short, long, default_value_t = 100)]
        epochs: usize,

        /// RNG seed for the initial weights.
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Train {
            config,
            dataset,
            epochs,
        } => commands::train::execute(config, dataset, epochs),
        Commands::Inspect { config } => commands::inspect::execute(config),
        Commands::Perceptron {
            dataset,
            epochs,
            seed,
        } => commands::perceptron::execute(dataset, epochs, seed),
    }
}
