//! Rectangular rack grids.

use super::types::Position;

/// A `cols × rows` rack grid enumerated row-major from the origin.
///
/// Slot `i` sits at `(i % cols, i / cols)`, so lower indices are closer to
/// a depot at the origin along each row.
///
/// ```
/// use u_slotting::slotting::{Position, RackGrid};
///
/// let grid = RackGrid::new(3, 2);
/// assert_eq!(grid.positions()[4], Position::new(1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RackGrid {
    pub cols: usize,
    pub rows: usize,
}

impl Default for RackGrid {
    /// The 10 × 5 layout (50 slots).
    fn default() -> Self {
        Self { cols: 10, rows: 5 }
    }
}

impl RackGrid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coordinate of slot `index`, or `None` past the end of the grid.
    pub fn slot(&self, index: usize) -> Option<Position> {
        if index >= self.len() {
            return None;
        }
        Some(Position::new(
            (index % self.cols) as i64,
            (index / self.cols) as i64,
        ))
    }

    /// All slots in row-major order.
    pub fn positions(&self) -> Vec<Position> {
        (0..self.rows)
            .flat_map(|y| (0..self.cols).map(move |x| Position::new(x as i64, y as i64)))
            .collect()
    }
}
