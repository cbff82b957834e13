//! Human-readable views of a solved layout.
//!
//! Everything here returns strings or plain data; writing files and
//! drawing charts is left to the caller.

use super::grid::RackGrid;
use super::problem::SlottingProblem;
use super::types::Position;
use crate::aco::AcoResult;
use std::fmt;

/// Width of a cell in [`layout_table`].
pub const CELL_WIDTH: usize = 10;

/// One filled slot of a layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub position: Position,
    pub item: usize,
    pub name: String,
    pub frequency: f64,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rack {} -> {} (frequency: {})",
            self.position, self.name, self.frequency
        )
    }
}

/// Pairs each filled position with the item the assignment puts there.
pub fn placements(problem: &SlottingProblem, assignment: &[usize]) -> Vec<Placement> {
    assignment
        .iter()
        .zip(problem.positions())
        .map(|(&index, &position)| {
            let item = &problem.items()[index];
            Placement {
                position,
                item: index,
                name: item.label(),
                frequency: item.frequency,
            }
        })
        .collect()
}

/// Text summary: total cost, solve time, then one line per placement.
pub fn summary(problem: &SlottingProblem, result: &AcoResult) -> String {
    let mut out = format!(
        "Total distance: {:.2}\nSolution time: {:.2} s\n\nBest layout:\n",
        result.best_cost,
        result.elapsed.as_secs_f64()
    );
    for placement in placements(problem, &result.best_assignment) {
        out.push_str(&placement.to_string());
        out.push('\n');
    }
    out
}

/// Grid of truncated item names, indexed `[y][x]`.
///
/// Slots that fall outside the grid are ignored; empty slots are `""`.
pub fn layout_table(
    grid: &RackGrid,
    problem: &SlottingProblem,
    assignment: &[usize],
) -> Vec<Vec<String>> {
    let mut table = vec![vec![String::new(); grid.cols]; grid.rows];
    for placement in placements(problem, assignment) {
        let (x, y) = (placement.position.x, placement.position.y);
        if x < 0 || y < 0 || x as usize >= grid.cols || y as usize >= grid.rows {
            continue;
        }
        table[y as usize][x as usize] = placement.name.chars().take(CELL_WIDTH).collect();
    }
    table
}

/// Renders [`layout_table`] as fixed-width, `|`-separated rows.
pub fn render_table(table: &[Vec<String>]) -> String {
    table
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!("{cell:<width$}", width = CELL_WIDTH))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::{AcoConfig, AcoRunner};
    use crate::slotting::Item;

    fn small_problem() -> (RackGrid, SlottingProblem) {
        let grid = RackGrid::new(2, 2);
        let items = vec![
            Item::new(0, 30.0).with_name("HEINEKEN ORIGINAL LAGER"),
            Item::new(1, 20.0).with_name("MILLER LITE"),
            Item::new(2, 10.0),
        ];
        let problem = SlottingProblem::new(items, grid.positions()).unwrap();
        (grid, problem)
    }

    #[test]
    fn test_placements_follow_assignment() {
        let (_, problem) = small_problem();
        let p = placements(&problem, &[2, 0, 1]);
        assert_eq!(p.len(), 3);
        assert_eq!(p[0].item, 2);
        assert_eq!(p[0].name, "item 2");
        assert_eq!(p[1].position, Position::new(1, 0));
        assert_eq!(p[1].frequency, 30.0);
    }

    #[test]
    fn test_placement_display() {
        let (_, problem) = small_problem();
        let p = placements(&problem, &[1, 0, 2]);
        assert_eq!(p[0].to_string(), "Rack (0, 0) -> MILLER LITE (frequency: 20)");
    }

    #[test]
    fn test_summary_has_cost_time_and_lines() {
        let (_, problem) = small_problem();
        let config = AcoConfig::fast().with_seed(6);
        let result = AcoRunner::run(&problem, &config).unwrap();
        let text = summary(&problem, &result);

        // distances 0, 1, 1: item 0 at the depot gives the optimum of 30
        assert!(text.starts_with("Total distance: 30.00\n"));
        let time_line = text.lines().nth(1).unwrap();
        assert!(time_line.starts_with("Solution time: "));
        assert!(time_line.ends_with(" s"));
        assert!(result.elapsed > std::time::Duration::ZERO);
        assert_eq!(text.lines().filter(|l| l.starts_with("Rack")).count(), 3);
    }

    #[test]
    fn test_layout_table_truncates_and_leaves_gaps() {
        let (grid, problem) = small_problem();
        let table = layout_table(&grid, &problem, &[0, 1, 2]);
        assert_eq!(table[0][0], "HEINEKEN O");
        assert_eq!(table[0][1], "MILLER LIT");
        assert_eq!(table[1][0], "item 2");
        assert_eq!(table[1][1], "");

        let rendered = render_table(&table);
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.lines().all(|l| l.len() == 2 * CELL_WIDTH + 1));
    }
}
