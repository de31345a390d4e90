//! Crossword clue numbering
//!
//! Standard crossword semantics: a number is assigned only at run-start
//! positions, one shared counter serves both directions, and cells are
//! visited in row-major order over the bounds rectangle. Scanning the
//! rectangle (rather than the cell map) keeps the result independent of
//! hash-map iteration order.

use crate::grid::{Direction, Grid, Pos};

/// Origin of an across or down run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueEntry {
    /// Matches the `clue_number` of the origin cell.
    pub number: u32,
    pub text: String,
    pub row: i32,
    pub col: i32,
}

/// Ordered clue-start lists produced by a numbering pass. Each list is
/// sorted by ascending number; a cell that starts both runs appears in
/// both lists under the same number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueStarts {
    pub across: Vec<ClueEntry>,
    pub down: Vec<ClueEntry>,
}

/// Recompute every cell's `clue_number` in place and return the fresh
/// across/down clue-start lists (with empty text — callers carry prior
/// text forward themselves).
pub fn assign_clue_numbers(grid: &mut Grid) -> ClueStarts {
    for (_, cell) in grid.iter_mut() {
        cell.clue_number = None;
    }

    let Some(bounds) = grid.bounds() else {
        return ClueStarts::default();
    };

    let mut starts = ClueStarts::default();
    let mut next_number = 1u32;

    for row in bounds.min_row..=bounds.max_row {
        for col in bounds.min_col..=bounds.max_col {
            let pos = Pos::new(row, col);
            if !grid.is_white(pos) {
                continue;
            }

            let starts_across = is_run_start(grid, pos, Direction::Left, Direction::Right);
            let starts_down = is_run_start(grid, pos, Direction::Up, Direction::Down);
            if !starts_across && !starts_down {
                continue;
            }

            if let Some(cell) = grid.get_mut(pos) {
                cell.clue_number = Some(next_number);
            }
            if starts_across {
                starts.across.push(ClueEntry {
                    number: next_number,
                    text: String::new(),
                    row,
                    col,
                });
            }
            if starts_down {
                starts.down.push(ClueEntry {
                    number: next_number,
                    text: String::new(),
                    row,
                    col,
                });
            }
            next_number += 1;
        }
    }

    starts
}

/// A white cell starts a run when the cell behind it is absent or black
/// and the cell ahead of it is present and white.
fn is_run_start(grid: &Grid, pos: Pos, behind: Direction, ahead: Direction) -> bool {
    !grid.is_white(pos.neighbor(behind)) && grid.is_white(pos.neighbor(ahead))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    fn white_grid(positions: &[(i32, i32)]) -> Grid {
        let mut grid = Grid::new();
        for &(row, col) in positions {
            grid.insert(Pos::new(row, col), Cell::white());
        }
        grid
    }

    fn number_at(grid: &Grid, row: i32, col: i32) -> Option<u32> {
        grid.get(Pos::new(row, col)).and_then(|c| c.clue_number)
    }

    #[test]
    fn test_empty_grid_yields_no_clues() {
        let mut grid = Grid::new();
        let starts = assign_clue_numbers(&mut grid);
        assert!(starts.across.is_empty());
        assert!(starts.down.is_empty());
    }

    #[test]
    fn test_single_cell_starts_nothing() {
        let mut grid = white_grid(&[(0, 0)]);
        let starts = assign_clue_numbers(&mut grid);
        assert!(starts.across.is_empty());
        assert!(starts.down.is_empty());
        assert_eq!(number_at(&grid, 0, 0), None);
    }

    #[test]
    fn test_horizontal_pair_is_one_across() {
        let mut grid = white_grid(&[(0, 0), (0, 1)]);
        let starts = assign_clue_numbers(&mut grid);
        assert_eq!(starts.across.len(), 1);
        assert_eq!(starts.across[0].number, 1);
        assert_eq!((starts.across[0].row, starts.across[0].col), (0, 0));
        assert!(starts.down.is_empty());
        assert_eq!(number_at(&grid, 0, 0), Some(1));
        assert_eq!(number_at(&grid, 0, 1), None);
    }

    #[test]
    fn test_corner_starts_both_with_shared_number() {
        // L shape: (0,0)-(0,1) across, (0,0)-(1,0) down
        let mut grid = white_grid(&[(0, 0), (0, 1), (1, 0)]);
        let starts = assign_clue_numbers(&mut grid);
        assert_eq!(starts.across.len(), 1);
        assert_eq!(starts.down.len(), 1);
        assert_eq!(starts.across[0].number, 1);
        assert_eq!(starts.down[0].number, 1);
        assert_eq!(number_at(&grid, 0, 0), Some(1));
    }

    #[test]
    fn test_black_cell_breaks_runs() {
        // Row 0: white, black, white-white
        let mut grid = white_grid(&[(0, 0), (0, 1), (0, 2), (0, 3)]);
        grid.get_mut(Pos::new(0, 1)).unwrap().is_black = true;
        let starts = assign_clue_numbers(&mut grid);
        assert_eq!(starts.across.len(), 1);
        assert_eq!((starts.across[0].row, starts.across[0].col), (0, 2));
        assert_eq!(number_at(&grid, 0, 0), None);
        assert_eq!(number_at(&grid, 0, 1), None);
    }

    #[test]
    fn test_shared_counter_row_major_order() {
        // 2x2 block: (0,0) starts across+down as 1, (0,1) starts down as 2,
        // (1,0) starts across as 3.
        let mut grid = white_grid(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        let starts = assign_clue_numbers(&mut grid);
        assert_eq!(number_at(&grid, 0, 0), Some(1));
        assert_eq!(number_at(&grid, 0, 1), Some(2));
        assert_eq!(number_at(&grid, 1, 0), Some(3));
        assert_eq!(number_at(&grid, 1, 1), None);
        assert_eq!(
            starts.across.iter().map(|c| c.number).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(
            starts.down.iter().map(|c| c.number).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_sparse_gap_breaks_run_like_black() {
        // (0,0) and (0,2) exist, (0,1) does not: no across run anywhere.
        let mut grid = white_grid(&[(0, 0), (0, 2), (1, 0), (1, 2)]);
        let starts = assign_clue_numbers(&mut grid);
        assert!(starts.across.is_empty());
        assert_eq!(starts.down.len(), 2);
    }

    #[test]
    fn test_renumbering_clears_stale_numbers() {
        let mut grid = white_grid(&[(0, 0), (0, 1)]);
        assign_clue_numbers(&mut grid);
        assert_eq!(number_at(&grid, 0, 0), Some(1));

        // Blacken the right cell: the across run is gone.
        grid.get_mut(Pos::new(0, 1)).unwrap().is_black = true;
        grid.get_mut(Pos::new(0, 1)).unwrap().letter = None;
        let starts = assign_clue_numbers(&mut grid);
        assert!(starts.across.is_empty());
        assert_eq!(number_at(&grid, 0, 0), None);
    }

    #[test]
    fn test_negative_coordinates() {
        let mut grid = white_grid(&[(-1, -1), (-1, 0), (0, -1)]);
        let starts = assign_clue_numbers(&mut grid);
        assert_eq!(number_at(&grid, -1, -1), Some(1));
        assert_eq!(starts.across.len(), 1);
        assert_eq!(starts.down.len(), 1);
    }
}
