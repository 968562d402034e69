// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `nnet train` command: fit a network to a truth table.

use std::path::PathBuf;

use matrix_core::Matrix;
use network::Network;

use super::{describe_source, load_config, Dataset, INPUT_WIDTH};

pub fn execute(
    config_path: Option<PathBuf>,
    dataset: Dataset,
    epochs: Option<usize>,
) -> anyhow::Result<()> {
    let config = load_config(config_path.as_deref())?;
    let first = config.layers[0];
    let last = config.layers[config.layers.len() - 1];
    if first != INPUT_WIDTH || last != 1 {
        anyhow::bail!(
            "dataset '{}' needs layers of the form [{INPUT_WIDTH}, .., 1], config has {:?}",
            dataset.as_str(),
            config.layers,
        );
    }
    let epochs = epochs.unwrap_or(config.epochs);

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║                  nnet · Training                    ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
    println!("  Config:  {}", describe_source(config_path.as_deref()));
    println!("  Dataset: {}", dataset.as_str());
    println!("  Epochs:  {epochs}");
    println!();

    let mut net = Network::from_config(&config)?;
    println!("  {}", net.summary());
    println!();

    let samples = to_samples(dataset)?;
    let metrics = net.fit(&samples, epochs)?;

    // ── Loss Curve ─────────────────────────────────────────────
    let stride = (metrics.epochs() / 10).max(1);
    println!("  {:>8}  {:>12}", "Epoch", "Mean loss");
    println!("  {}", "-".repeat(22));
    for (i, loss) in metrics.epoch_losses.iter().enumerate() {
        if i % stride == 0 || i + 1 == metrics.epochs() {
            println!("  {:>8}  {:>12.6}", i + 1, loss);
        }
    }
    println!();

    // ── Predictions ────────────────────────────────────────────
    println!("  {:>3} {:>3}  {:>6}  {:>10}", "a", "b", "target", "output");
    for (input, answer) in &samples {
        let out = net.predict(input)?;
        println!(
            "  {:>3} {:>3}  {:>6}  {:>10.4}",
            input[(0, 0)],
            input[(1, 0)],
            answer[(0, 0)],
            out[(0, 0)],
        );
    }
    println!();
    println!("  {}", metrics.summary());

    Ok(())
}

fn to_samples(dataset: Dataset) -> anyhow::Result<Vec<(Matrix, Matrix)>> {
    dataset
        .rows()
        .into_iter()
        .map(|(x, y)| -> anyhow::Result<(Matrix, Matrix)> {
            let input = Matrix::from_vec(INPUT_WIDTH, 1, x.to_vec())?;
            let answer = Matrix::filled(1, 1, if y { 1.0 } else { 0.0 })?;
            Ok((input, answer))
        })
        .collect()
}
