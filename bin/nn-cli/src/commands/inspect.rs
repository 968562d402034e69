// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `nnet inspect` command: display topology and initial weights.

use std::path::PathBuf;

use network::Network;

use super::{describe_source, load_config};

pub fn execute(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path.as_deref())?;
    let net = Network::from_config(&config)?;

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║                nnet · Network Inspector             ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // ── Summary ────────────────────────────────────────────────
    println!("  Config:      {}", describe_source(config_path.as_deref()));
    println!("  Layers:      {:?}", net.layers());
    println!("  Alpha:       {}", net.alpha());
    println!("  Initializer: {}", config.initializer);
    match config.seed {
        Some(seed) => println!("  Seed:        {seed}"),
        None => println!("  Seed:        <entropy>"),
    }
    println!("  Parameters:  {}", net.num_parameters());
    println!();

    // ── Per-Layer Detail ───────────────────────────────────────
    println!("  {:<4} {:<12} {:>8} {:>10}", "Idx", "Shape", "#W", "Mean");
    println!("  {}", "-".repeat(38));
    for (i, w) in net.weights().iter().enumerate() {
        println!(
            "  {:<4} {:<12} {:>8} {:>10.4}",
            i,
            w.shape().to_string(),
            w.len(),
            w.mean(),
        );
    }
    println!();

    for (i, w) in net.weights().iter().enumerate() {
        println!("  Layer {i}:");
        for line in w.to_string().lines() {
            println!("    {line}");
        }
        println!();
    }

    println!("  Resolved configuration:");
    for line in config.to_toml()?.lines() {
        println!("    {line}");
    }

    Ok(())
}
