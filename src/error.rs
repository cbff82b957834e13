//! Error types shared by the slotting model and the ACO solver.

use thiserror::Error;

/// Errors raised while building a slotting problem or running the solver.
///
/// Configuration errors are detected before any solving work begins.
/// Arithmetic errors are raised mid-run: a zero-cost solution, or candidate
/// weights that all reach zero. The latter happens on long runs with high
/// evaporation, once unused pheromone edges underflow to `0.0`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlottingError {
    /// Invalid problem shape or solver parameter.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Degenerate weights during construction or a non-positive deposit cost.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),
}

impl SlottingError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        SlottingError::Configuration(message.into())
    }

    pub(crate) fn arithmetic(message: impl Into<String>) -> Self {
        SlottingError::Arithmetic(message.into())
    }

    /// Returns `true` for [`SlottingError::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, SlottingError::Configuration(_))
    }

    /// Returns `true` for [`SlottingError::Arithmetic`].
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, SlottingError::Arithmetic(_))
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SlottingError>;
