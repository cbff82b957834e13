//! Items and rack positions.

/// A rack slot on the integer grid.
///
/// Retrieval distance is measured with the Manhattan metric, matching
/// rectilinear aisle travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    /// The origin, used as the default depot.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`.
    pub fn manhattan(&self, other: &Position) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A ranked item to be slotted.
///
/// `id` is the item's index in the ranked list; the solver refers to items
/// only by this index.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: usize,

    /// Pick frequency (e.g. aggregated sales). Must be finite and non-negative.
    pub frequency: f64,

    /// Optional display name for reports.
    pub name: Option<String>,
}

impl Item {
    pub fn new(id: usize, frequency: f64) -> Self {
        Self {
            id,
            frequency,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name for display, falling back to `item <id>`.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("item {}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan() {
        let a = Position::new(3, -2);
        assert_eq!(a.manhattan(&Position::ORIGIN), 5);
        assert_eq!(Position::ORIGIN.manhattan(&a), 5);
        assert_eq!(a.manhattan(&Position::new(1, 1)), 5);
        assert_eq!(a.manhattan(&a), 0);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::from((4, 2)).to_string(), "(4, 2)");
    }

    #[test]
    fn test_item_label() {
        assert_eq!(Item::new(7, 1.0).label(), "item 7");
        assert_eq!(Item::new(0, 1.0).with_name("COORS LIGHT").label(), "COORS LIGHT");
    }
}
