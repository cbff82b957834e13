//! Ant Colony Optimization (ACO) for assignment problems.
//!
//! Artificial ants build permutations item by item, guided by a learned
//! pheromone matrix over item-to-item transitions and a static heuristic
//! derived from item desirability. Good solutions reinforce the
//! transitions they used; all trails evaporate each iteration.
//!
//! # Key Types
//!
//! - [`AcoProblem`]: Problem definition — size, desirability, cost
//! - [`AcoConfig`]: Colony parameters (ants, iterations, alpha, beta, rho)
//! - [`AcoRunner`]: Executes the construct/update loop
//! - [`AcoResult`]: Best assignment, cost history, final pheromone
//!
//! # Building Blocks
//!
//! - [`PheromoneModel`]: `tau` matrix and `eta` vector
//! - [`AntConstructor`]: One probabilistic construction
//! - [`PheromoneUpdate`]: Evaporation followed by `Q / cost` deposit
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*, MIT Press

mod ant;
mod config;
mod pheromone;
mod runner;
mod types;
mod update;

pub use ant::{Ant, AntConstructor};
pub use config::AcoConfig;
pub use pheromone::{heuristic_from_values, PheromoneModel};
pub use runner::{AcoResult, AcoRunner, IterationRecord};
pub use types::AcoProblem;
pub use update::PheromoneUpdate;
