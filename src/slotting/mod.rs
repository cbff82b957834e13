//! Facility slotting model.
//!
//! Describes which items go into which rack positions and what that costs.
//! The optimization itself lives in [`crate::aco`].
//!
//! # Key Types
//!
//! - [`SlottingProblem`]: Items, positions, and the weighted-distance cost
//! - [`RackGrid`]: Row-major rectangular position layouts
//! - [`rank_top_n`]: Sales-record aggregation into a ranked item list
//!
//! # Submodules
//!
//! - [`report`]: Placement lists and text layouts of a solved assignment

mod grid;
mod problem;
mod ranking;
pub mod report;
mod types;

pub use grid::RackGrid;
pub use problem::SlottingProblem;
pub use ranking::{rank_top_n, RankedItem, DEFAULT_TOP_N};
pub use types::{Item, Position};
