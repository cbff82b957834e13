//! Pheromone matrix and static heuristic vector.
//!
//! `tau[a][b]` is the learned desirability of placing item `b` right after
//! item `a` during construction. `eta[j]` is the frequency-derived
//! preference for item `j` and never changes during a run.
//!
//! Construction only ever sees `&PheromoneModel`; the evaporate and deposit
//! operations take `&mut self` and are reserved for the update phase.

use crate::error::{Result, SlottingError};

/// Pheromone state of one colony run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneModel {
    n: usize,
    /// Row-major `n × n`.
    tau: Vec<f64>,
    eta: Vec<f64>,
}

impl PheromoneModel {
    /// Creates a model with every `tau` entry set to `tau0`.
    ///
    /// The matrix size is taken from `eta`.
    pub fn new(tau0: f64, eta: Vec<f64>) -> Self {
        let n = eta.len();
        Self {
            n,
            tau: vec![tau0; n * n],
            eta,
        }
    }

    /// Number of items.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Pheromone on the edge `a -> b`.
    #[inline]
    pub fn tau(&self, a: usize, b: usize) -> f64 {
        self.tau[a * self.n + b]
    }

    /// All outgoing pheromone from item `a`.
    pub fn row(&self, a: usize) -> &[f64] {
        &self.tau[a * self.n..(a + 1) * self.n]
    }

    #[inline]
    pub fn eta(&self, j: usize) -> f64 {
        self.eta[j]
    }

    pub fn heuristic(&self) -> &[f64] {
        &self.eta
    }

    /// The whole matrix, row-major.
    pub fn matrix(&self) -> &[f64] {
        &self.tau
    }

    /// Smallest pheromone entry.
    pub fn min_tau(&self) -> f64 {
        self.tau.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Multiplies every entry by `1 - rate`.
    pub(crate) fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for t in &mut self.tau {
            *t *= keep;
        }
    }

    /// Adds `amount` to the edge `a -> b`.
    #[inline]
    pub(crate) fn deposit(&mut self, a: usize, b: usize, amount: f64) {
        self.tau[a * self.n + b] += amount;
    }
}

/// Builds `eta[j] = values[j] / max(values) + epsilon`.
///
/// When every value is zero the division is skipped and each entry is just
/// `epsilon`.
///
/// # Errors
///
/// [`SlottingError::Configuration`] for a negative or non-finite value.
pub fn heuristic_from_values(values: &[f64], epsilon: f64) -> Result<Vec<f64>> {
    if let Some((j, v)) = values
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v < 0.0)
    {
        return Err(SlottingError::config(format!(
            "desirability of item {j} must be finite and non-negative, got {v}"
        )));
    }

    let max = values.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        return Ok(vec![epsilon; values.len()]);
    }
    Ok(values.iter().map(|v| v / max + epsilon).collect())
}
