// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `nnet perceptron` command: train a single sign perceptron.

use network::{Perceptron, DEFAULT_PERCEPTRON_ALPHA};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{Dataset, INPUT_WIDTH};

pub fn execute(dataset: Dataset, epochs: usize, seed: Option<u64>) -> anyhow::Result<()> {
    if dataset == Dataset::Xor {
        anyhow::bail!("xor is not linearly separable; a single perceptron cannot learn it");
    }

    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut p = Perceptron::with_default_alpha(INPUT_WIDTH, &mut rng)?;
    let rows = signed_rows(dataset);

    println!("  Perceptron: {INPUT_WIDTH} inputs, alpha {DEFAULT_PERCEPTRON_ALPHA}");
    println!("  Initial weights: {:?}", p.weights());

    let mut converged_at = None;
    for epoch in 0..epochs {
        let mut mistakes = 0;
        for (x, y) in &rows {
            if p.train(x, *y)? != 0 {
                mistakes += 1;
            }
        }
        tracing::debug!("epoch {epoch}: {mistakes} mistakes");
        if mistakes == 0 {
            converged_at = Some(epoch + 1);
            break;
        }
    }

    match converged_at {
        Some(epoch) => println!("  Converged after {epoch} epochs"),
        None => println!("  Not converged after {epochs} epochs"),
    }
    println!("  Final weights: {:?}", p.weights());
    println!();

    let mut correct = 0;
    for (x, y) in &rows {
        let guess = p.feed_forward(x)?;
        if guess == *y {
            correct += 1;
        }
        println!("  {:>3} {:>3}  target {:>2}  guess {:>2}", x[0], x[1], y, guess);
    }
    println!("  Accuracy: {correct}/{}", rows.len());

    Ok(())
}

/// Dataset rows with labels mapped to the perceptron's `-1`/`+1` outputs.
fn signed_rows(dataset: Dataset) -> Vec<([f64; 3], i8)> {
    dataset
        .rows()
        .into_iter()
        .map(|(x, y)| (x, if y { 1 } else { -1 }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_labels() {
        let labels: Vec<i8> = signed_rows(Dataset::And).into_iter().map(|(_, y)| y).collect();
        assert_eq!(labels, vec![-1, -1, -1, 1]);
    }

    #[test]
    fn test_xor_is_rejected() {
        assert!(execute(Dataset::Xor, 10, Some(1)).is_err());
    }
}
