//! The canonical crossword document and its mutation operations
//!
//! One [`CrosswordDocument`] exists per editing session. Every structural
//! edit is atomic: it either applies fully (followed by a renumbering
//! pass) or rejects silently, leaving the document untouched. Rejection
//! is reported as a `false` return so callers and tests can observe it,
//! but no error is raised — impossible edits in a direct-manipulation UI
//! are simply ignored.

use tracing::{debug, info};

use crate::grid::{Cell, Direction, Grid, Pos};
use crate::numbering::{assign_clue_numbers, ClueEntry};

/// Maximum row-span and column-span of the grid.
pub const MAX_GRID_SIZE: i32 = 10;

/// Presentation mode. Secret mode renders floating bordered cells and an
/// optional secret-word column frame instead of the contiguous classic
/// grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CrosswordMode {
    Classic,
    #[default]
    Secret,
}

impl CrosswordMode {
    /// Wire tag for the persistence record.
    pub fn as_str(&self) -> &'static str {
        match self {
            CrosswordMode::Classic => "classic",
            CrosswordMode::Secret => "secret",
        }
    }

    /// Parse a wire tag; anything unrecognized falls back to secret,
    /// matching how missing tags are deserialized.
    pub fn from_tag(tag: &str) -> CrosswordMode {
        match tag {
            "classic" => CrosswordMode::Classic,
            _ => CrosswordMode::Secret,
        }
    }
}

/// Which clue list an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClueDirection {
    Across,
    Down,
}

/// Across and down clue lists, each ordered by ascending number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clues {
    pub across: Vec<ClueEntry>,
    pub down: Vec<ClueEntry>,
}

impl Clues {
    pub fn list(&self, direction: ClueDirection) -> &[ClueEntry] {
        match direction {
            ClueDirection::Across => &self.across,
            ClueDirection::Down => &self.down,
        }
    }

    fn list_mut(&mut self, direction: ClueDirection) -> &mut Vec<ClueEntry> {
        match direction {
            ClueDirection::Across => &mut self.across,
            ClueDirection::Down => &mut self.down,
        }
    }
}

/// The single source of truth for one editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosswordDocument {
    pub grid: Grid,
    pub clues: Clues,
    pub secret_col: Option<i32>,
    pub show_row_numbers: bool,
    pub mode: CrosswordMode,
}

impl Default for CrosswordDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosswordDocument {
    /// Seed document: a single white cell at the origin, numbered.
    pub fn new() -> CrosswordDocument {
        let mut grid = Grid::new();
        grid.insert(Pos::new(0, 0), Cell::white());
        let mut doc = CrosswordDocument {
            grid,
            clues: Clues::default(),
            secret_col: None,
            show_row_numbers: false,
            mode: CrosswordMode::default(),
        };
        doc.renumber();
        doc
    }

    /// Assemble a document from parts and run a numbering pass over it.
    /// Prior clue text is carried forward by origin position.
    pub fn from_grid(
        grid: Grid,
        clues: Clues,
        secret_col: Option<i32>,
        show_row_numbers: bool,
        mode: CrosswordMode,
    ) -> CrosswordDocument {
        let mut doc = CrosswordDocument {
            grid,
            clues,
            secret_col,
            show_row_numbers,
            mode,
        };
        doc.renumber();
        doc
    }

    /// Insert a white cell at `(row, col)`.
    ///
    /// Rejected (returns false, document unchanged) if the position is
    /// already occupied or if the resulting bounding rectangle would
    /// exceed [`MAX_GRID_SIZE`] in either dimension.
    pub fn add_cell(&mut self, row: i32, col: i32) -> bool {
        let pos = Pos::new(row, col);
        if self.grid.contains(pos) {
            return false;
        }

        if let Some(bounds) = self.grid.bounds() {
            let grown = bounds.including(pos);
            if grown.num_rows() > MAX_GRID_SIZE || grown.num_cols() > MAX_GRID_SIZE {
                debug!(row, col, "add_cell rejected: grid size limit");
                return false;
            }
        }

        self.grid.insert(pos, Cell::white());
        self.renumber();
        true
    }

    /// Insert a white cell adjacent to `(row, col)` in `direction`.
    pub fn add_cell_in_direction(&mut self, row: i32, col: i32, direction: Direction) -> bool {
        let pos = Pos::new(row, col).neighbor(direction);
        self.add_cell(pos.row, pos.col)
    }

    /// Delete the cell at `pos`. Rejected if the position is empty or if
    /// this is the last remaining cell (the grid is never empty).
    pub fn remove_cell(&mut self, pos: Pos) -> bool {
        if !self.grid.contains(pos) {
            return false;
        }
        if self.grid.len() == 1 {
            debug!(?pos, "remove_cell rejected: last cell");
            return false;
        }
        self.grid.remove(pos);
        self.renumber();
        true
    }

    /// Flip the black state of the cell at `pos`, clearing its letter and
    /// clue number either way. Rejected if the position is empty.
    pub fn toggle_black(&mut self, pos: Pos) -> bool {
        let Some(cell) = self.grid.get_mut(pos) else {
            return false;
        };
        cell.is_black = !cell.is_black;
        cell.letter = None;
        cell.clue_number = None;
        self.renumber();
        true
    }

    /// Set (or clear, for empty input) the letter of the white cell at
    /// `pos`. Input is normalized to its first character, uppercased.
    /// Pure content edit: numbering is untouched.
    pub fn set_letter(&mut self, pos: Pos, letter: &str) -> bool {
        let Some(cell) = self.grid.get_mut(pos) else {
            return false;
        };
        if cell.is_black {
            return false;
        }
        cell.letter = letter
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next());
        true
    }

    /// Replace the text of the clue with `number` in the given list.
    /// Rejected if no such clue exists. No structural recomputation.
    pub fn update_clue_text(
        &mut self,
        direction: ClueDirection,
        number: u32,
        text: &str,
    ) -> bool {
        let list = self.clues.list_mut(direction);
        match list.iter_mut().find(|entry| entry.number == number) {
            Some(entry) => {
                entry.text = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_secret_col(&mut self, col: Option<i32>) {
        self.secret_col = col;
    }

    pub fn set_show_row_numbers(&mut self, show: bool) {
        self.show_row_numbers = show;
    }

    pub fn set_mode(&mut self, mode: CrosswordMode) {
        self.mode = mode;
    }

    /// Replace the whole document with a fresh seed.
    pub fn reset(&mut self) {
        info!("resetting document to seed grid");
        *self = CrosswordDocument::new();
    }

    /// Replace the whole document verbatim. Used when the host pushes an
    /// out-of-band change; any uncommitted local edit is discarded.
    pub fn load(&mut self, doc: CrosswordDocument) {
        info!(cells = doc.grid.len(), "loading document from host");
        *self = doc;
    }

    /// Recompute clue numbers and rebuild the clue lists, carrying text
    /// forward by origin position: an entry whose run still starts at the
    /// same cell keeps its text even if its number shifted.
    pub fn renumber(&mut self) {
        let old_across = std::mem::take(&mut self.clues.across);
        let old_down = std::mem::take(&mut self.clues.down);

        let starts = assign_clue_numbers(&mut self.grid);
        self.clues.across = carry_text_forward(starts.across, &old_across);
        self.clues.down = carry_text_forward(starts.down, &old_down);
    }
}

fn carry_text_forward(fresh: Vec<ClueEntry>, old: &[ClueEntry]) -> Vec<ClueEntry> {
    fresh
        .into_iter()
        .map(|mut entry| {
            if let Some(prior) = old
                .iter()
                .find(|o| o.row == entry.row && o.col == entry.col)
            {
                entry.text = prior.text.clone();
            }
            entry
        })
        .collect()
}
