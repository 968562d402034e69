// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Training metrics.
//!
//! [`TrainStep`] describes one `train` call; [`TrainingMetrics`] aggregates
//! steps into per-epoch losses for a whole `fit` run.

use std::time::Duration;

/// Outcome of a single training step.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct TrainStep {
    /// Mean squared error of the output produced before the update.
    pub loss: f64,
    /// Wall-clock time for the forward pass plus update.
    pub duration: Duration,
}

/// Aggregate metrics for a training run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TrainingMetrics {
    /// Mean loss per epoch, in order.
    pub epoch_losses: Vec<f64>,
    /// Total wall-clock time.
    pub total_duration: Duration,
    /// Number of `train` calls made.
    pub steps: usize,
    #[serde(skip)]
    current_sum: f64,
    #[serde(skip)]
    current_count: usize,
}

impl TrainingMetrics {
    /// Creates an empty metrics container.
    pub fn new() -> Self {
        Self {
            epoch_losses: Vec::new(),
            total_duration: Duration::ZERO,
            steps: 0,
            current_sum: 0.0,
            current_count: 0,
        }
    }

    /// Records one training step in the current epoch.
    pub fn record_step(&mut self, step: TrainStep) {
        self.steps += 1;
        self.total_duration += step.duration;
        self.current_sum += step.loss;
        self.current_count += 1;
    }

    /// Closes the current epoch, storing its mean loss.
    pub fn end_epoch(&mut self) {
        if self.current_count == 0 {
            return;
        }
        self.epoch_losses
            .push(self.current_sum / self.current_count as f64);
        self.current_sum = 0.0;
        self.current_count = 0;
    }

    /// Number of completed epochs.
    pub fn epochs(&self) -> usize {
        self.epoch_losses.len()
    }

    /// Mean loss of the first completed epoch.
    pub fn initial_loss(&self) -> Option<f64> {
        self.epoch_losses.first().copied()
    }

    /// Mean loss of the last completed epoch.
    pub fn final_loss(&self) -> Option<f64> {
        self.epoch_losses.last().copied()
    }

    /// Returns a human-readable summary suitable for CLI output.
    pub fn summary(&self) -> String {
        let fmt_loss = |l: Option<f64>| l.map_or_else(|| "n/a".to_string(), |v| format!("{v:.6}"));
        let per_step_us = if self.steps > 0 {
            self.total_duration.as_secs_f64() * 1e6 / self.steps as f64
        } else {
            0.0
        };
        format!(
            "Training: {} epochs, {} steps in {:.2}ms ({:.1} us/step), loss {} -> {}",
            self.epochs(),
            self.steps,
            self.total_duration.as_secs_f64() * 1000.0,
            per_step_us,
            fmt_loss(self.initial_loss()),
            fmt_loss(self.final_loss()),
        )
    }
}

impl Default for TrainingMetrics {
    fn default() -> Self {
        Self::new()
    }
}
