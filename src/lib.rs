//! Facility slotting optimization.
//!
//! Assigns a ranked set of high-frequency items to fixed rack positions so
//! that frequency-weighted retrieval distance from a depot is minimized.
//!
//! - **Slotting model**: Items, rack grids, the weighted Manhattan-distance
//!   cost, sales-record ranking, and text layouts of a solution.
//! - **Ant Colony Optimization (ACO)**: Pheromone-guided probabilistic
//!   construction of item permutations, with evaporation and
//!   cost-proportional deposit.
//!
//! # Example
//!
//! ```
//! use u_slotting::aco::{AcoConfig, AcoRunner};
//! use u_slotting::slotting::{rank_top_n, RackGrid, SlottingProblem};
//!
//! let sales = vec![("lager", 120.0), ("stout", 40.0), ("lager", 30.0), ("cider", 75.0)];
//! let ranked = rank_top_n(sales, 3);
//! let grid = RackGrid::new(3, 1);
//!
//! let problem = SlottingProblem::from_ranked(&ranked, grid.positions()).unwrap();
//! let result = AcoRunner::run(&problem, &AcoConfig::fast().with_seed(1)).unwrap();
//!
//! assert!(result.best_cost <= problem.identity_cost());
//! ```
//!
//! # Logging
//!
//! The solver emits [`tracing`] events: one `info` span per run, `info`
//! on each new best, and `debug` per iteration. Install a subscriber to
//! see them.

pub mod aco;
pub mod error;
pub mod slotting;

pub use error::{Result, SlottingError};
