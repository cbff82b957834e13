//! Pheromone update: evaporation followed by cost-proportional deposit.

use super::ant::Ant;
use super::config::AcoConfig;
use super::pheromone::PheromoneModel;
use crate::error::{Result, SlottingError};

/// Applies one iteration's worth of learning to a [`PheromoneModel`].
///
/// 1. Every entry is multiplied by `1 - evaporation_rate`.
/// 2. Each ant adds `deposit_weight / cost` to every consecutive edge
///    `(assignment[i], assignment[i + 1])` it used. The last item does not
///    link back to the first.
#[derive(Debug, Clone, Copy)]
pub struct PheromoneUpdate {
    pub evaporation_rate: f64,
    pub deposit_weight: f64,
}

impl PheromoneUpdate {
    pub fn new(evaporation_rate: f64, deposit_weight: f64) -> Self {
        Self {
            evaporation_rate,
            deposit_weight,
        }
    }

    pub fn from_config(config: &AcoConfig) -> Self {
        Self::new(config.evaporation_rate, config.deposit_weight)
    }

    /// Evaporates, then deposits for every ant.
    ///
    /// All costs are checked before the matrix is touched, so an error
    /// leaves `model` unchanged.
    ///
    /// # Errors
    ///
    /// [`SlottingError::Arithmetic`] if any ant's cost is not a positive
    /// finite number.
    pub fn apply(&self, model: &mut PheromoneModel, ants: &[Ant]) -> Result<()> {
        for (k, ant) in ants.iter().enumerate() {
            if !ant.cost.is_finite() || ant.cost <= 0.0 {
                return Err(SlottingError::arithmetic(format!(
                    "deposit cost must be positive, ant {k} has cost {}",
                    ant.cost
                )));
            }
        }

        model.evaporate(self.evaporation_rate);

        for ant in ants {
            let amount = self.deposit_weight / ant.cost;
            for edge in ant.assignment.windows(2) {
                model.deposit(edge[0], edge[1], amount);
            }
        }
        Ok(())
    }
}
