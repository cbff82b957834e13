//! ACO colony loop.
//!
//! [`AcoRunner`] owns the pheromone model for the duration of a run and
//! alternates two phases per iteration:
//!
//! 1. **Constructing**: every ant builds an assignment against a shared
//!    `&PheromoneModel`. Ants are independent and may run in parallel.
//! 2. **Updating**: after all ants have finished, the global best is
//!    reduced in ant order and [`PheromoneUpdate`] takes `&mut` access.
//!
//! Each ant draws from its own RNG, seeded from the master RNG in ant
//! order, so a fixed seed gives the same result with or without rayon.

use super::ant::{Ant, AntConstructor};
use super::config::AcoConfig;
use super::pheromone::{heuristic_from_values, PheromoneModel};
use super::types::AcoProblem;
use super::update::PheromoneUpdate;
use crate::error::{Result, SlottingError};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info, info_span};
use u_numflow::random::create_rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Summary of one iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    /// Zero-based iteration index.
    pub iteration: usize,

    /// Best cost found so far, including this iteration.
    pub best_cost: f64,

    /// Best cost among this iteration's ants.
    pub iteration_best_cost: f64,

    /// Every ant's cost, when [`AcoConfig::record_ant_costs`] is set.
    pub ant_costs: Option<Vec<f64>>,
}

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Item placed at each position, in position order.
    pub best_assignment: Vec<usize>,

    /// Cost of `best_assignment`.
    pub best_cost: f64,

    /// Best cost so far at the end of each iteration. Non-increasing.
    pub history: Vec<f64>,

    /// Per-iteration records.
    pub iterations: Vec<IterationRecord>,

    /// Iteration in which `best_assignment` was first found.
    pub best_iteration: usize,

    /// Pheromone state after the last update.
    pub final_pheromone: PheromoneModel,

    /// Wall-clock time spent in the colony loop.
    pub elapsed: Duration,
}

/// Executes the ACO colony loop.
///
/// # Usage
///
/// ```
/// use u_slotting::aco::{AcoConfig, AcoRunner};
/// use u_slotting::slotting::{RackGrid, SlottingProblem};
///
/// let grid = RackGrid::new(3, 1);
/// let problem = SlottingProblem::from_frequencies(&[100.0, 10.0, 1.0], grid.positions()).unwrap();
/// let config = AcoConfig::default().with_seed(42);
///
/// let result = AcoRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.best_assignment, vec![0, 1, 2]);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO on `problem`.
    ///
    /// # Errors
    ///
    /// - [`SlottingError::Configuration`] for an invalid config, an empty
    ///   problem, or invalid desirability values. Raised before any ant runs.
    /// - [`SlottingError::Arithmetic`] if construction weights collapse or a
    ///   constructed solution has a non-positive cost.
    pub fn run<P: AcoProblem>(problem: &P, config: &AcoConfig) -> Result<AcoResult> {
        config.validate()?;
        let n = problem.size();
        if n == 0 {
            return Err(SlottingError::config("problem has no items"));
        }
        let eta = heuristic_from_values(&problem.desirability(), config.heuristic_epsilon)?;
        if eta.len() != n {
            return Err(SlottingError::config(format!(
                "desirability has {} entries for {n} items",
                eta.len()
            )));
        }

        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = create_rng(seed);

        let span = info_span!(
            "aco_run",
            items = n,
            ants = config.num_ants,
            iterations = config.num_iterations,
            seed
        );
        let _enter = span.enter();

        let start = Instant::now();
        let mut model = PheromoneModel::new(config.initial_pheromone, eta);
        let update = PheromoneUpdate::from_config(config);

        let mut best_assignment: Vec<usize> = Vec::new();
        let mut best_cost = f64::INFINITY;
        let mut best_iteration = 0usize;
        let mut history = Vec::with_capacity(config.num_iterations);
        let mut records = Vec::with_capacity(config.num_iterations);

        for iteration in 0..config.num_iterations {
            let ant_seeds: Vec<u64> = (0..config.num_ants).map(|_| rng.random()).collect();
            let ants = construct_colony(problem, &model, config, &ant_seeds)?;

            // Strict `<` keeps the earliest ant on ties.
            let mut iteration_best = f64::INFINITY;
            for ant in &ants {
                if ant.cost < iteration_best {
                    iteration_best = ant.cost;
                }
                if ant.cost < best_cost {
                    best_cost = ant.cost;
                    best_assignment.clone_from(&ant.assignment);
                    best_iteration = iteration;
                    info!(iteration, best_cost, "new best assignment");
                }
            }

            update.apply(&mut model, &ants)?;

            history.push(best_cost);
            records.push(IterationRecord {
                iteration,
                best_cost,
                iteration_best_cost: iteration_best,
                ant_costs: config
                    .record_ant_costs
                    .then(|| ants.iter().map(|a| a.cost).collect()),
            });
            debug!(
                iteration,
                best_cost,
                iteration_best_cost = iteration_best,
                min_tau = model.min_tau(),
                "iteration complete"
            );

            problem.on_iteration(iteration + 1, best_cost);
        }

        let elapsed = start.elapsed();
        info!(
            best_cost,
            best_iteration,
            elapsed_ms = elapsed.as_millis() as u64,
            "aco run finished"
        );

        Ok(AcoResult {
            best_assignment,
            best_cost,
            history,
            iterations: records,
            best_iteration,
            final_pheromone: model,
            elapsed,
        })
    }
}

/// Builds one iteration's ants, in ant order.
fn construct_colony<P: AcoProblem>(
    problem: &P,
    model: &PheromoneModel,
    config: &AcoConfig,
    ant_seeds: &[u64],
) -> Result<Vec<Ant>> {
    let ctor = AntConstructor::new(model, config.alpha, config.beta);
    let build = |&seed: &u64| {
        let mut rng = create_rng(seed);
        ctor.construct(problem, &mut rng)
    };

    #[cfg(feature = "parallel")]
    if config.parallel {
        return ant_seeds.par_iter().map(build).collect();
    }

    ant_seeds.iter().map(build).collect()
}

// ============================================================================
// Tests
// ============================================================================
