//! The slotting problem instance.
//!
//! Position `i` (in the fixed position ordering) holds item `assignment[i]`.
//! The objective is the frequency-weighted retrieval distance:
//!
//! ```text
//! cost(a) = Σ_i manhattan(position[i], depot) × frequency[a[i]]
//! ```

use super::ranking::RankedItem;
use super::types::{Item, Position};
use crate::aco::AcoProblem;
use crate::error::{Result, SlottingError};

/// Immutable description of items, rack positions, and the cost function.
///
/// When there are more positions than items, only the first `N` positions
/// are filled.
///
/// # Examples
///
/// ```
/// use u_slotting::slotting::{Position, SlottingProblem};
///
/// let positions = vec![Position::new(0, 0), Position::new(5, 0)];
/// let problem = SlottingProblem::from_frequencies(&[10.0, 1.0], positions).unwrap();
///
/// assert_eq!(problem.cost(&[0, 1]), 5.0);
/// assert_eq!(problem.cost(&[1, 0]), 50.0);
/// ```
#[derive(Debug, Clone)]
pub struct SlottingProblem {
    items: Vec<Item>,
    positions: Vec<Position>,
    depot: Position,
    distances: Vec<f64>,
}

impl SlottingProblem {
    /// Creates a problem from ranked items and an ordered position list.
    ///
    /// # Errors
    ///
    /// [`SlottingError::Configuration`] if there are no items, more items
    /// than positions, item ids that do not match their index, or a
    /// negative or non-finite frequency.
    pub fn new(items: Vec<Item>, positions: Vec<Position>) -> Result<Self> {
        if items.is_empty() {
            return Err(SlottingError::config("at least one item is required"));
        }
        if items.len() > positions.len() {
            return Err(SlottingError::config(format!(
                "{} items exceed {} available positions",
                items.len(),
                positions.len()
            )));
        }
        for (index, item) in items.iter().enumerate() {
            if item.id != index {
                return Err(SlottingError::config(format!(
                    "item at index {index} has id {}",
                    item.id
                )));
            }
            if !item.frequency.is_finite() || item.frequency < 0.0 {
                return Err(SlottingError::config(format!(
                    "item {index} has invalid frequency {}",
                    item.frequency
                )));
            }
        }

        let mut problem = Self {
            items,
            positions,
            depot: Position::ORIGIN,
            distances: Vec::new(),
        };
        problem.refresh_distances();
        Ok(problem)
    }

    /// Creates a problem from bare frequencies; item `i` gets frequency `i`.
    pub fn from_frequencies(frequencies: &[f64], positions: Vec<Position>) -> Result<Self> {
        let items = frequencies
            .iter()
            .enumerate()
            .map(|(id, &frequency)| Item::new(id, frequency))
            .collect();
        Self::new(items, positions)
    }

    /// Creates a problem from the output of [`rank_top_n`](super::rank_top_n).
    pub fn from_ranked(ranked: &[RankedItem], positions: Vec<Position>) -> Result<Self> {
        let items = ranked
            .iter()
            .enumerate()
            .map(|(id, r)| Item::new(id, r.frequency).with_name(r.name.clone()))
            .collect();
        Self::new(items, positions)
    }

    /// Moves the depot away from the origin.
    pub fn with_depot(mut self, depot: Position) -> Self {
        self.depot = depot;
        self.refresh_distances();
        self
    }

    fn refresh_distances(&mut self) {
        let depot = self.depot;
        self.distances = self.positions[..self.items.len()]
            .iter()
            .map(|p| p.manhattan(&depot) as f64)
            .collect();
    }

    /// Number of items `N`.
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Number of positions `M`.
    pub fn num_positions(&self) -> usize {
        self.positions.len()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn depot(&self) -> Position {
        self.depot
    }

    /// Depot distance of each filled slot, in position order.
    pub fn depot_distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn frequencies(&self) -> Vec<f64> {
        self.items.iter().map(|item| item.frequency).collect()
    }

    /// Frequency-weighted retrieval distance of `assignment`.
    ///
    /// # Panics
    ///
    /// Panics if an entry of `assignment` is not a valid item index.
    pub fn cost(&self, assignment: &[usize]) -> f64 {
        debug_assert_eq!(assignment.len(), self.items.len());
        assignment
            .iter()
            .zip(&self.distances)
            .map(|(&item, &distance)| distance * self.items[item].frequency)
            .sum()
    }

    /// Cost of placing items in rank order (item `i` at position `i`).
    pub fn identity_cost(&self) -> f64 {
        let identity: Vec<usize> = (0..self.items.len()).collect();
        self.cost(&identity)
    }
}

impl AcoProblem for SlottingProblem {
    fn size(&self) -> usize {
        self.items.len()
    }

    fn desirability(&self) -> Vec<f64> {
        self.frequencies()
    }

    fn cost(&self, assignment: &[usize]) -> f64 {
        SlottingProblem::cost(self, assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slotting::RackGrid;

    fn line(distances: &[i64]) -> Vec<Position> {
        distances.iter().map(|&d| Position::new(d, 0)).collect()
    }

    #[test]
    fn test_two_item_cost() {
        let problem = SlottingProblem::from_frequencies(&[10.0, 1.0], line(&[0, 5])).unwrap();
        assert_eq!(problem.cost(&[0, 1]), 5.0);
        assert_eq!(problem.cost(&[1, 0]), 50.0);
        // pure: same answer twice
        assert_eq!(problem.cost(&[1, 0]), 50.0);
    }

    #[test]
    fn test_more_positions_than_items() {
        let problem =
            SlottingProblem::from_frequencies(&[3.0, 2.0], line(&[1, 2, 3, 4])).unwrap();
        assert_eq!(problem.num_items(), 2);
        assert_eq!(problem.num_positions(), 4);
        assert_eq!(problem.depot_distances(), &[1.0, 2.0]);
        assert_eq!(problem.cost(&[0, 1]), 3.0 + 4.0);
    }

    #[test]
    fn test_too_many_items() {
        let positions = RackGrid::default().positions();
        assert_eq!(positions.len(), 50);
        let freqs = vec![1.0; 51];
        let err = SlottingProblem::from_frequencies(&freqs, positions).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_empty_items_rejected() {
        let err = SlottingProblem::from_frequencies(&[], line(&[0])).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_invalid_frequency_rejected() {
        assert!(SlottingProblem::from_frequencies(&[1.0, -2.0], line(&[0, 1])).is_err());
        assert!(SlottingProblem::from_frequencies(&[f64::NAN], line(&[0])).is_err());
        assert!(SlottingProblem::from_frequencies(&[f64::INFINITY], line(&[0])).is_err());
    }

    #[test]
    fn test_mismatched_id_rejected() {
        let items = vec![Item::new(0, 1.0), Item::new(2, 1.0)];
        assert!(SlottingProblem::new(items, line(&[0, 1])).is_err());
    }

    #[test]
    fn test_custom_depot() {
        let problem = SlottingProblem::from_frequencies(&[1.0, 1.0], line(&[0, 4]))
            .unwrap()
            .with_depot(Position::new(4, 0));
        assert_eq!(problem.depot_distances(), &[4.0, 0.0]);
        assert_eq!(problem.identity_cost(), 4.0);
    }

    #[test]
    fn test_from_ranked_keeps_names() {
        let ranked = vec![
            RankedItem {
                name: "A".into(),
                frequency: 9.0,
            },
            RankedItem {
                name: "B".into(),
                frequency: 4.0,
            },
        ];
        let problem = SlottingProblem::from_ranked(&ranked, line(&[0, 1])).unwrap();
        assert_eq!(problem.items()[1].label(), "B");
        assert_eq!(problem.frequencies(), vec![9.0, 4.0]);
    }
}
