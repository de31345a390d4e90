//! Sparse crossword grid: addressable cells and topology queries
//!
//! The grid is a sparse map from `(row, col)` positions to cells. Absence
//! of a key means the position is not part of the puzzle at all, which is
//! distinct from a black (blocked) cell. Coordinates are signed: the grid
//! grows left and up from the `(0, 0)` seed into negative rows/columns.
//!
//! All queries here are pure reads over a snapshot; mutation lives in
//! [`crate::document`].

use std::collections::HashMap;

/// A grid position. Hash-map key; carries no cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub fn new(row: i32, col: i32) -> Pos {
        Pos { row, col }
    }

    /// The adjacent position one step in `direction`.
    pub fn neighbor(&self, direction: Direction) -> Pos {
        let (dr, dc) = direction.offset();
        Pos::new(self.row + dr, self.col + dc)
    }
}

/// The four cardinal directions used for neighbor arithmetic and the
/// interactive view's expand affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit `(row, col)` offset for this direction.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// One cell of the puzzle. Position lives in the grid key, not here.
///
/// Invariant: a black cell has no letter and no clue number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub is_black: bool,
    /// Single uppercase letter, if entered.
    pub letter: Option<char>,
    /// Assigned by the numbering pass; `None` for cells that start no run.
    pub clue_number: Option<u32>,
}

impl Cell {
    /// A fresh white cell with no letter.
    pub fn white() -> Cell {
        Cell::default()
    }
}

/// Bounding rectangle of all cells in a grid (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_row: i32,
    pub max_row: i32,
    pub min_col: i32,
    pub max_col: i32,
}

impl Bounds {
    /// Number of rows the rectangle spans.
    pub fn num_rows(&self) -> i32 {
        self.max_row - self.min_row + 1
    }

    /// Number of columns the rectangle spans.
    pub fn num_cols(&self) -> i32 {
        self.max_col - self.min_col + 1
    }

    /// The smallest rectangle containing both this one and `pos`.
    pub fn including(&self, pos: Pos) -> Bounds {
        Bounds {
            min_row: self.min_row.min(pos.row),
            max_row: self.max_row.max(pos.row),
            min_col: self.min_col.min(pos.col),
            max_col: self.max_col.max(pos.col),
        }
    }
}

/// Sparse cell map. No ordering is implied by iteration; every traversal
/// that needs an order scans the bounds rectangle or sorts explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: HashMap<Pos, Cell>,
}

impl Grid {
    pub fn new() -> Grid {
        Grid::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        self.cells.get(&pos)
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut Cell> {
        self.cells.get_mut(&pos)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains_key(&pos)
    }

    pub fn insert(&mut self, pos: Pos, cell: Cell) -> Option<Cell> {
        self.cells.insert(pos, cell)
    }

    pub fn remove(&mut self, pos: Pos) -> Option<Cell> {
        self.cells.remove(&pos)
    }

    /// Unordered iteration over all cells.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Cell)> {
        self.cells.iter().map(|(pos, cell)| (*pos, cell))
    }

    /// Mutable unordered iteration over all cells.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Pos, &mut Cell)> {
        self.cells.iter_mut().map(|(pos, cell)| (*pos, cell))
    }

    /// All positions sorted by `(row, col)`, for order-sensitive consumers.
    pub fn sorted_positions(&self) -> Vec<Pos> {
        let mut positions: Vec<Pos> = self.cells.keys().copied().collect();
        positions.sort();
        positions
    }

    /// True if a non-black cell exists at `pos`.
    pub fn is_white(&self, pos: Pos) -> bool {
        self.get(pos).is_some_and(|cell| !cell.is_black)
    }

    /// Bounding rectangle of all cells, or `None` for an empty grid.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut iter = self.cells.keys();
        let first = iter.next()?;
        let mut bounds = Bounds {
            min_row: first.row,
            max_row: first.row,
            min_col: first.col,
            max_col: first.col,
        };
        for pos in iter {
            bounds = bounds.including(*pos);
        }
        Some(bounds)
    }

    /// The directions in which `pos` has no neighboring cell. The
    /// interactive view places its expand buttons on these edges.
    pub fn edge_directions(&self, pos: Pos) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|dir| !self.contains(pos.neighbor(*dir)))
            .collect()
    }

    /// True if the cell at `pos` sits at the start or end of its row or
    /// column run (at least one of its four neighbors is missing).
    ///
    /// This is a local test only: removing a "removable" cell can still
    /// split the grid into disconnected components.
    pub fn is_removable(&self, pos: Pos) -> bool {
        Direction::ALL
            .into_iter()
            .any(|dir| !self.contains(pos.neighbor(dir)))
    }

    /// For each row that has at least one non-black cell, the smallest
    /// column holding one. Drives secret-mode row-number placement.
    pub fn first_white_col_per_row(&self) -> HashMap<i32, i32> {
        let mut first: HashMap<i32, i32> = HashMap::new();
        for (pos, cell) in self.iter() {
            if cell.is_black {
                continue;
            }
            first
                .entry(pos.row)
                .and_modify(|col| *col = (*col).min(pos.col))
                .or_insert(pos.col);
        }
        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(positions: &[(i32, i32)]) -> Grid {
        let mut grid = Grid::new();
        for &(row, col) in positions {
            grid.insert(Pos::new(row, col), Cell::white());
        }
        grid
    }

    #[test]
    fn test_bounds_empty() {
        assert_eq!(Grid::new().bounds(), None);
    }

    #[test]
    fn test_bounds_single_cell() {
        let grid = grid_of(&[(2, -3)]);
        let bounds = grid.bounds().unwrap();
        assert_eq!(bounds.min_row, 2);
        assert_eq!(bounds.max_row, 2);
        assert_eq!(bounds.min_col, -3);
        assert_eq!(bounds.max_col, -3);
        assert_eq!(bounds.num_rows(), 1);
        assert_eq!(bounds.num_cols(), 1);
    }

    #[test]
    fn test_bounds_spans_all_cells() {
        let grid = grid_of(&[(0, 0), (-1, 4), (3, 2)]);
        let bounds = grid.bounds().unwrap();
        assert_eq!(bounds.min_row, -1);
        assert_eq!(bounds.max_row, 3);
        assert_eq!(bounds.min_col, 0);
        assert_eq!(bounds.max_col, 4);
    }

    #[test]
    fn test_neighbor_offsets() {
        let pos = Pos::new(1, 1);
        assert_eq!(pos.neighbor(Direction::Up), Pos::new(0, 1));
        assert_eq!(pos.neighbor(Direction::Down), Pos::new(2, 1));
        assert_eq!(pos.neighbor(Direction::Left), Pos::new(1, 0));
        assert_eq!(pos.neighbor(Direction::Right), Pos::new(1, 2));
    }

    #[test]
    fn test_edge_directions_isolated_cell() {
        let grid = grid_of(&[(0, 0)]);
        let edges = grid.edge_directions(Pos::new(0, 0));
        assert_eq!(edges.len(), 4);
    }

    #[test]
    fn test_edge_directions_with_neighbors() {
        let grid = grid_of(&[(0, 0), (0, 1), (1, 0)]);
        let edges = grid.edge_directions(Pos::new(0, 0));
        assert_eq!(edges, vec![Direction::Up, Direction::Left]);
    }

    #[test]
    fn test_is_removable_end_of_run() {
        let grid = grid_of(&[(0, 0), (0, 1), (0, 2)]);
        assert!(grid.is_removable(Pos::new(0, 0)));
        assert!(grid.is_removable(Pos::new(0, 2)));
        // Middle cell still lacks up/down neighbors
        assert!(grid.is_removable(Pos::new(0, 1)));
    }

    #[test]
    fn test_is_removable_interior_cell() {
        let grid = grid_of(&[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);
        assert!(!grid.is_removable(Pos::new(1, 1)));
        assert!(grid.is_removable(Pos::new(0, 1)));
    }

    #[test]
    fn test_first_white_col_per_row_skips_black() {
        let mut grid = grid_of(&[(0, 0), (0, 1), (1, 2)]);
        grid.get_mut(Pos::new(0, 0)).unwrap().is_black = true;
        let first = grid.first_white_col_per_row();
        assert_eq!(first.get(&0), Some(&1));
        assert_eq!(first.get(&1), Some(&2));
    }

    #[test]
    fn test_first_white_col_per_row_all_black_row() {
        let mut grid = grid_of(&[(0, 0), (1, 0)]);
        grid.get_mut(Pos::new(0, 0)).unwrap().is_black = true;
        let first = grid.first_white_col_per_row();
        assert!(!first.contains_key(&0));
        assert_eq!(first.get(&1), Some(&0));
    }

    #[test]
    fn test_sorted_positions_row_major() {
        let grid = grid_of(&[(1, 0), (0, 2), (0, -1), (1, -5)]);
        let positions = grid.sorted_positions();
        assert_eq!(
            positions,
            vec![
                Pos::new(0, -1),
                Pos::new(0, 2),
                Pos::new(1, -5),
                Pos::new(1, 0)
            ]
        );
    }
}
